//! Pearson correlation and autocorrelation profiles.
//!
//! Both computations share one degenerate-input convention: whenever the
//! correlation is undefined (an empty overlap or zero variance in either
//! operand), the coefficient is `0.0`. That keeps report tables populated for
//! constant sequences instead of spreading NaN through downstream ratios.

/// Pearson correlation coefficient between two sequences.
///
/// The coefficient is computed over the common prefix of length
/// `min(a.len(), b.len())`; trailing values of the longer sequence are
/// ignored.
///
/// # Arguments
///
/// * `a` - The first sequence
/// * `b` - The second sequence
///
/// # Returns
///
/// A value in [−1, 1], or `0.0` when the correlation is undefined.
///
/// # Examples
///
/// ```
/// # use seqlab_stats::correlation::pearson_correlation;
/// let values = [1.0, 4.0, 2.0, 8.0, 5.0];
/// assert!((pearson_correlation(&values, &values) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn pearson_correlation(a: &[f64], b: &[f64]) -> f64 {
    let len = a.len().min(b.len());
    if len == 0 {
        return 0.0;
    }
    let (a, b) = (&a[..len], &b[..len]);

    #[expect(clippy::cast_precision_loss)]
    let n = len as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut dispersion_a = 0.0;
    let mut dispersion_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        covariance += dx * dy;
        dispersion_a += dx * dx;
        dispersion_b += dy * dy;
    }

    let denominator = (dispersion_a * dispersion_b).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        covariance / denominator
    }
}

/// One autocorrelation coefficient.
#[derive(Debug, Clone, Copy)]
pub struct LagCoefficient {
    /// The lag the coefficient was computed at, starting from 1.
    pub lag: usize,
    /// Pearson correlation between the sequence and its copy shifted by
    /// `lag`, or `0.0` when undefined.
    pub coefficient: f64,
}

/// Autocorrelation coefficients of a sequence at lags `1..=max_lag`.
///
/// The coefficient at lag k is the Pearson correlation between
/// `values[..n−k]` and `values[k..]`. Lag 0 is never computed (it is 1 by
/// definition), and lags that would leave an overlap shorter than one value
/// are dropped, so the profile holds `min(max_lag, n − 1)` coefficients.
#[derive(Debug, Clone)]
pub struct AutocorrelationProfile {
    /// The coefficients, ordered by lag.
    pub coefficients: Vec<LagCoefficient>,
}

impl AutocorrelationProfile {
    /// Computes the autocorrelation profile of a sequence.
    ///
    /// # Arguments
    ///
    /// * `values` - The sequence, in order
    /// * `max_lag` - The largest lag to compute
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqlab_stats::correlation::AutocorrelationProfile;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let profile = AutocorrelationProfile::new(&values, 10);
    /// assert_eq!(profile.coefficients.len(), 4);
    /// ```
    #[must_use]
    pub fn new(values: &[f64], max_lag: usize) -> Self {
        let upper = if values.is_empty() {
            0
        } else {
            max_lag.min(values.len() - 1)
        };
        let coefficients = (1..=upper)
            .map(|lag| LagCoefficient {
                lag,
                coefficient: pearson_correlation(&values[..values.len() - lag], &values[lag..]),
            })
            .collect();
        Self { coefficients }
    }

    /// Large-sample 95% significance bound for an autocorrelation
    /// coefficient: `1.96 / sqrt(n)`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn significance_threshold(sample_size: usize) -> f64 {
        1.96 / (sample_size as f64).sqrt()
    }

    /// Number of lags whose coefficient magnitude exceeds `threshold`.
    #[must_use]
    pub fn significant_lag_count(&self, threshold: f64) -> usize {
        self.coefficients
            .iter()
            .filter(|c| c.coefficient.abs() > threshold)
            .count()
    }
}
