use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::descriptive::SummaryStatistics;

/// Sample size from which the standard normal distribution replaces the
/// Student-t distribution as the source of critical values.
pub const NORMAL_APPROXIMATION_MIN_SIZE: usize = 30;

/// A two-sided confidence interval around a sample mean.
///
/// The interval is stored as its half-width: the true mean lies within
/// `mean ± half_width` with probability `confidence_level`, under a t- or
/// normal-distribution assumption depending on the sample size.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceInterval {
    /// The confidence level the interval was computed for, in (0, 1).
    pub confidence_level: f64,
    /// The half-width of the interval. Zero for samples with fewer than two
    /// values.
    pub half_width: f64,
}

impl ConfidenceInterval {
    /// Computes the confidence interval half-width for a sample.
    ///
    /// The standard error is `std_dev / sqrt(n)`. The critical value comes
    /// from the Student-t distribution with n−1 degrees of freedom for
    /// samples smaller than [`NORMAL_APPROXIMATION_MIN_SIZE`], and from the
    /// standard normal distribution otherwise, evaluated at the two-sided
    /// quantile `(1 + confidence_level) / 2`.
    ///
    /// # Arguments
    ///
    /// * `values` - The sample, in sequence order
    /// * `confidence_level` - The confidence level, strictly between 0 and 1
    ///
    /// # Panics
    ///
    /// Panics if `confidence_level` lies outside (0, 1).
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqlab_stats::confidence::ConfidenceInterval;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let wide = ConfidenceInterval::new(&values, 0.99);
    /// let narrow = ConfidenceInterval::new(&values, 0.90);
    /// assert!(wide.half_width >= narrow.half_width);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(values: &[f64], confidence_level: f64) -> Self {
        assert!(
            confidence_level > 0.0 && confidence_level < 1.0,
            "confidence level must lie strictly between 0 and 1"
        );

        let Some(stats) = SummaryStatistics::new(values) else {
            return Self {
                confidence_level,
                half_width: 0.0,
            };
        };
        if values.len() < 2 {
            return Self {
                confidence_level,
                half_width: 0.0,
            };
        }

        let n = values.len() as f64;
        let standard_error = stats.std_dev / n.sqrt();
        let quantile = (1.0 + confidence_level) / 2.0;
        let critical = critical_value(values.len(), quantile);

        Self {
            confidence_level,
            half_width: critical * standard_error,
        }
    }
}

/// Two-sided critical value for the given sample size.
///
/// Small samples use the Student-t distribution with n−1 degrees of freedom;
/// from [`NORMAL_APPROXIMATION_MIN_SIZE`] values on, the standard normal
/// distribution is close enough.
#[expect(clippy::cast_precision_loss)]
fn critical_value(sample_size: usize, quantile: f64) -> f64 {
    if sample_size < NORMAL_APPROXIMATION_MIN_SIZE {
        let degrees_of_freedom = (sample_size - 1) as f64;
        StudentsT::new(0.0, 1.0, degrees_of_freedom)
            .unwrap()
            .inverse_cdf(quantile)
    } else {
        Normal::new(0.0, 1.0).unwrap().inverse_cdf(quantile)
    }
}
