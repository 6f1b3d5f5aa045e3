//! Comparison of an observed sequence with its synthetic counterpart.

use seqlab_stats::{
    correlation::{self, AutocorrelationProfile},
    descriptive::SummaryStatistics,
};

use crate::sample::StatisticsDeviations;

/// Verdict on how well a synthetic sequence reproduces the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum FitQuality {
    #[display("good")]
    Good,
    #[display("poor")]
    Poor,
}

impl FitQuality {
    /// Mean deviations below this bound, in percent, count as a good fit.
    pub const MEAN_DEVIATION_THRESHOLD: f64 = 5.0;

    fn from_mean_deviation(deviation: f64) -> Self {
        if deviation < Self::MEAN_DEVIATION_THRESHOLD {
            FitQuality::Good
        } else {
            FitQuality::Poor
        }
    }
}

/// Autocorrelation coefficients of both sequences at one lag.
#[derive(Debug, Clone, Copy)]
pub struct LagComparison {
    pub lag: usize,
    pub original: f64,
    pub generated: f64,
    pub absolute_difference: f64,
}

/// Side-by-side characteristics of an original and a synthetic sequence.
///
/// The deviation direction is fixed: the synthetic sequence is measured
/// against the original, never the other way around.
#[derive(Debug, Clone)]
pub struct SequenceComparison {
    /// Summary statistics of the original sequence.
    pub original: SummaryStatistics,
    /// Summary statistics of the synthetic sequence.
    pub generated: SummaryStatistics,
    /// Relative deviations of the synthetic statistics from the original
    /// ones, in percent.
    pub deviations: StatisticsDeviations,
    /// Autocorrelation coefficients of both sequences, paired by lag.
    pub autocorrelation: Vec<LagComparison>,
    /// Pearson correlation between the two sequences themselves.
    pub cross_correlation: f64,
    /// Verdict derived from the mean deviation.
    pub quality: FitQuality,
}

impl SequenceComparison {
    /// Compares a synthetic sequence against the original it was modelled
    /// on.
    ///
    /// Autocorrelation profiles are paired lag by lag; when the sequences
    /// differ in length the pairing stops at the shorter profile.
    ///
    /// # Arguments
    ///
    /// * `original` - The observed sequence
    /// * `generated` - The synthetic sequence
    /// * `max_lag` - The largest autocorrelation lag to compare
    ///
    /// # Returns
    ///
    /// * `Some(SequenceComparison)` - if both sequences are non-empty
    /// * `None` - if either sequence is empty
    #[must_use]
    pub fn new(original: &[f64], generated: &[f64], max_lag: usize) -> Option<Self> {
        let original_stats = SummaryStatistics::new(original)?;
        let generated_stats = SummaryStatistics::new(generated)?;
        let deviations = StatisticsDeviations::between(&generated_stats, &original_stats);

        let original_profile = AutocorrelationProfile::new(original, max_lag);
        let generated_profile = AutocorrelationProfile::new(generated, max_lag);
        let autocorrelation = original_profile
            .coefficients
            .iter()
            .zip(&generated_profile.coefficients)
            .map(|(original, generated)| LagComparison {
                lag: original.lag,
                original: original.coefficient,
                generated: generated.coefficient,
                absolute_difference: (original.coefficient - generated.coefficient).abs(),
            })
            .collect();

        Some(Self {
            original: original_stats,
            generated: generated_stats,
            deviations,
            autocorrelation,
            cross_correlation: correlation::pearson_correlation(original, generated),
            quality: FitQuality::from_mean_deviation(deviations.mean),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_compare_as_good() {
        let values = [4.0, 1.5, 7.2, 3.3, 9.1, 2.6, 5.8, 1.1];
        let comparison = SequenceComparison::new(&values, &values, 3).unwrap();
        assert_eq!(comparison.quality, FitQuality::Good);
        assert_eq!(comparison.deviations.mean, 0.0);
        assert_eq!(comparison.deviations.variance, 0.0);
        assert!((comparison.cross_correlation - 1.0).abs() < 1e-12);
        assert!(
            comparison
                .autocorrelation
                .iter()
                .all(|lag| lag.absolute_difference == 0.0)
        );
    }

    #[test]
    fn test_shifted_sequence_compares_as_poor() {
        // Shifting by 1 moves the mean from 5.5 to 6.5, an 18% deviation
        let original = (1..=10).map(f64::from).collect::<Vec<_>>();
        let generated = original.iter().map(|v| v + 1.0).collect::<Vec<_>>();
        let comparison = SequenceComparison::new(&original, &generated, 3).unwrap();
        assert_eq!(comparison.quality, FitQuality::Poor);
        assert!(comparison.deviations.mean > FitQuality::MEAN_DEVIATION_THRESHOLD);
        assert!((comparison.cross_correlation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quality_threshold_is_exclusive() {
        let original = [100.0, 100.0, 100.0, 100.0];
        let below = SequenceComparison::new(&original, &[104.0; 4], 2).unwrap();
        assert!((below.deviations.mean - 4.0).abs() < 1e-9);
        assert_eq!(below.quality, FitQuality::Good);

        // A deviation of exactly 5% is already outside the bound
        let at_threshold = SequenceComparison::new(&original, &[105.0; 4], 2).unwrap();
        assert!((at_threshold.deviations.mean - 5.0).abs() < 1e-9);
        assert_eq!(at_threshold.quality, FitQuality::Poor);
    }

    #[test]
    fn test_autocorrelation_pairs_stop_at_the_shorter_profile() {
        let original = [2.0, 4.0, 1.0, 5.0, 3.0, 6.0];
        let generated = [1.0, 3.0, 2.0, 4.0];
        let comparison = SequenceComparison::new(&original, &generated, 10).unwrap();
        assert_eq!(comparison.autocorrelation.len(), 3);
        assert_eq!(comparison.autocorrelation[0].lag, 1);
    }

    #[test]
    fn test_empty_operand_yields_no_comparison() {
        assert!(SequenceComparison::new(&[], &[1.0, 2.0], 3).is_none());
        assert!(SequenceComparison::new(&[1.0, 2.0], &[], 3).is_none());
    }

    #[test]
    fn test_quality_labels_render_lowercase() {
        assert_eq!(FitQuality::Good.to_string(), "good");
        assert_eq!(FitQuality::Poor.to_string(), "poor");
    }
}
