/// Summary statistics of a sample.
///
/// This structure contains the measures of central tendency and dispersion
/// the analysis pipeline reports for every sample: the mean, the unbiased
/// variance (n−1 divisor), the standard deviation, and the coefficient of
/// variation used to classify the distribution shape.
#[derive(Debug, Clone, Copy)]
pub struct SummaryStatistics {
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The unbiased sample variance, computed with divisor n−1.
    ///
    /// Defined as `0.0` for samples with fewer than two values.
    pub variance: f64,
    /// The standard deviation, `variance.sqrt()`.
    pub std_dev: f64,
    /// The coefficient of variation, `std_dev / mean`.
    ///
    /// Defined as `0.0` when the mean is zero.
    pub coefficient_of_variation: f64,
}

impl SummaryStatistics {
    /// Computes summary statistics for a sample.
    ///
    /// # Arguments
    ///
    /// * `values` - The sample, in sequence order
    ///
    /// # Returns
    ///
    /// * `Some(SummaryStatistics)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqlab_stats::descriptive::SummaryStatistics;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let stats = SummaryStatistics::new(&values).unwrap();
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.variance, 2.5);
    /// assert!((stats.coefficient_of_variation - 0.5270).abs() < 1e-4);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = if values.len() < 2 {
            0.0
        } else {
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)
        };
        let std_dev = variance.sqrt();
        let coefficient_of_variation = if mean == 0.0 { 0.0 } else { std_dev / mean };

        Some(Self {
            mean,
            variance,
            std_dev,
            coefficient_of_variation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sample() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = SummaryStatistics::new(&values).unwrap();
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.variance, 2.5);
        assert!((stats.std_dev - 1.5811).abs() < 1e-4);
        assert!((stats.coefficient_of_variation - 0.5270).abs() < 1e-4);
    }

    #[test]
    fn test_std_dev_is_sqrt_of_variance() {
        let values = [3.5, 0.25, 12.0, 7.75, 4.0, 9.5];
        let stats = SummaryStatistics::new(&values).unwrap();
        assert!(stats.variance >= 0.0);
        assert_eq!(stats.std_dev, stats.variance.sqrt());
    }

    #[test]
    fn test_empty_sample() {
        assert!(SummaryStatistics::new(&[]).is_none());
    }

    #[test]
    fn test_single_value_has_zero_variance() {
        let stats = SummaryStatistics::new(&[7.0]).unwrap();
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.coefficient_of_variation, 0.0);
    }

    #[test]
    fn test_constant_sample_has_zero_dispersion() {
        let stats = SummaryStatistics::new(&[4.0; 6]).unwrap();
        assert_eq!(stats.mean, 4.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.coefficient_of_variation, 0.0);
    }

    #[test]
    fn test_zero_mean_yields_zero_coefficient_of_variation() {
        let stats = SummaryStatistics::new(&[-1.0, 1.0]).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.variance, 2.0);
        assert_eq!(stats.coefficient_of_variation, 0.0);
    }
}
