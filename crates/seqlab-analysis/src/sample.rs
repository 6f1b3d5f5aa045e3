//! Sample-size study over growing prefixes of a sequence.
//!
//! The study answers the question how large a sample has to be before its
//! characteristics settle: every configured prefix size is profiled with the
//! full set of summary statistics and confidence intervals, and each profile
//! is compared against the reference sample (the largest prefix) through
//! relative deviations.

use seqlab_stats::{confidence::ConfidenceInterval, descriptive::SummaryStatistics};

/// Relative deviation of `value` from `reference`, in percent.
///
/// Defined as `0.0` when the reference is zero, so characteristics that
/// vanish in the reference sample (a constant sequence's variance, for
/// example) do not blow up the deviation tables.
#[must_use]
pub fn relative_deviation(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        0.0
    } else {
        (value - reference).abs() / reference.abs() * 100.0
    }
}

/// Statistics of one prefix sample.
#[derive(Debug, Clone)]
pub struct SampleProfile {
    /// Number of leading values the profile covers.
    pub sample_size: usize,
    /// Summary statistics of the prefix.
    pub statistics: SummaryStatistics,
    /// One interval per configured confidence level, in configuration order.
    pub confidence_intervals: Vec<ConfidenceInterval>,
}

impl SampleProfile {
    /// Profiles a sample at the given confidence levels.
    ///
    /// # Arguments
    ///
    /// * `values` - The sample, in sequence order
    /// * `confidence_levels` - Levels for the mean confidence intervals,
    ///   each strictly between 0 and 1
    ///
    /// # Returns
    ///
    /// * `Some(SampleProfile)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    #[must_use]
    pub fn new(values: &[f64], confidence_levels: &[f64]) -> Option<Self> {
        let statistics = SummaryStatistics::new(values)?;
        let confidence_intervals = confidence_levels
            .iter()
            .map(|level| ConfidenceInterval::new(values, *level))
            .collect();
        Some(Self {
            sample_size: values.len(),
            statistics,
            confidence_intervals,
        })
    }

    /// Relative deviations of this profile from a reference profile.
    ///
    /// Confidence intervals are paired by position, so both profiles must
    /// have been built with the same levels; within a study this always
    /// holds.
    #[must_use]
    pub fn deviations_from(&self, reference: &Self) -> ProfileDeviations {
        let confidence_intervals = self
            .confidence_intervals
            .iter()
            .zip(&reference.confidence_intervals)
            .map(|(own, other)| relative_deviation(own.half_width, other.half_width))
            .collect();
        ProfileDeviations {
            statistics: StatisticsDeviations::between(&self.statistics, &reference.statistics),
            confidence_intervals,
        }
    }
}

/// Relative deviations between two sets of summary statistics, in percent.
#[derive(Debug, Clone, Copy)]
pub struct StatisticsDeviations {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub coefficient_of_variation: f64,
}

impl StatisticsDeviations {
    /// Deviations of `statistics` from `reference`, field by field.
    #[must_use]
    pub fn between(statistics: &SummaryStatistics, reference: &SummaryStatistics) -> Self {
        Self {
            mean: relative_deviation(statistics.mean, reference.mean),
            variance: relative_deviation(statistics.variance, reference.variance),
            std_dev: relative_deviation(statistics.std_dev, reference.std_dev),
            coefficient_of_variation: relative_deviation(
                statistics.coefficient_of_variation,
                reference.coefficient_of_variation,
            ),
        }
    }
}

/// Relative deviations of one profile from the reference profile.
#[derive(Debug, Clone)]
pub struct ProfileDeviations {
    /// Deviations of the summary statistics.
    pub statistics: StatisticsDeviations,
    /// One deviation per confidence interval, matching the profile order.
    pub confidence_intervals: Vec<f64>,
}

/// Profiles of growing prefixes of a sequence.
///
/// The profiles are ordered by sample size and the vector is never empty;
/// the last profile is the reference sample that fitting and generation
/// work from.
#[derive(Debug, Clone)]
pub struct SampleSizeStudy {
    /// The prefix profiles, ordered by sample size.
    pub profiles: Vec<SampleProfile>,
}

impl SampleSizeStudy {
    /// Profiles the sequence at every requested sample size.
    ///
    /// Sizes are clamped to the sequence length, sorted, and deduplicated,
    /// so a size table written for longer inputs degrades gracefully on a
    /// short sequence. Zero sizes are dropped; when no usable size remains
    /// the full sequence is profiled on its own.
    ///
    /// # Arguments
    ///
    /// * `values` - The full sequence, in order
    /// * `sizes` - Requested prefix sizes
    /// * `confidence_levels` - Levels for the mean confidence intervals
    ///
    /// # Returns
    ///
    /// * `Some(SampleSizeStudy)` - if the sequence contains at least one
    ///   value
    /// * `None` - if the sequence is empty
    #[must_use]
    pub fn new(values: &[f64], sizes: &[usize], confidence_levels: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sizes = sizes
            .iter()
            .map(|size| (*size).min(values.len()))
            .filter(|size| *size > 0)
            .collect::<Vec<_>>();
        sizes.sort_unstable();
        sizes.dedup();
        if sizes.is_empty() {
            sizes.push(values.len());
        }

        let profiles = sizes
            .into_iter()
            .map(|size| SampleProfile::new(&values[..size], confidence_levels))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { profiles })
    }

    /// The reference profile, the one with the largest sample size.
    #[must_use]
    pub fn reference(&self) -> &SampleProfile {
        self.profiles.last().unwrap()
    }

    /// Deviations of every profile from the reference profile.
    ///
    /// The reference's own row comes out as all zeros.
    #[must_use]
    pub fn deviations(&self) -> Vec<ProfileDeviations> {
        let reference = self.reference();
        self.profiles
            .iter()
            .map(|profile| profile.deviations_from(reference))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_deviation_is_a_symmetric_percentage() {
        assert_eq!(relative_deviation(110.0, 100.0), 10.0);
        assert_eq!(relative_deviation(90.0, 100.0), 10.0);
    }

    #[test]
    fn test_relative_deviation_of_zero_reference_is_zero() {
        assert_eq!(relative_deviation(42.0, 0.0), 0.0);
    }

    #[test]
    fn test_relative_deviation_uses_reference_magnitude() {
        assert!((relative_deviation(-9.0, -10.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_profile_carries_one_interval_per_level() {
        let values = [3.1, 0.4, 5.9, 2.6, 5.3, 5.8, 9.7, 9.3];
        let profile = SampleProfile::new(&values, &[0.90, 0.95, 0.99]).unwrap();
        assert_eq!(profile.sample_size, 8);
        assert_eq!(profile.confidence_intervals.len(), 3);
        assert_eq!(profile.confidence_intervals[0].confidence_level, 0.90);
        assert_eq!(profile.confidence_intervals[2].confidence_level, 0.99);
    }

    #[test]
    fn test_empty_sample_has_no_profile() {
        assert!(SampleProfile::new(&[], &[0.95]).is_none());
    }

    #[test]
    fn test_sizes_are_clamped_sorted_and_deduplicated() {
        let values = (1..=25).map(f64::from).collect::<Vec<_>>();
        let study = SampleSizeStudy::new(&values, &[200, 10, 50], &[0.95]).unwrap();
        let sizes = study
            .profiles
            .iter()
            .map(|p| p.sample_size)
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![10, 25]);
    }

    #[test]
    fn test_zero_sizes_are_dropped() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let study = SampleSizeStudy::new(&values, &[0, 2], &[0.95]).unwrap();
        let sizes = study
            .profiles
            .iter()
            .map(|p| p.sample_size)
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![2]);
    }

    #[test]
    fn test_without_usable_sizes_the_full_sequence_is_profiled() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let study = SampleSizeStudy::new(&values, &[], &[0.95]).unwrap();
        assert_eq!(study.profiles.len(), 1);
        assert_eq!(study.reference().sample_size, 4);
    }

    #[test]
    fn test_empty_sequence_has_no_study() {
        assert!(SampleSizeStudy::new(&[], &[10, 20], &[0.95]).is_none());
    }

    #[test]
    fn test_reference_is_the_largest_profile() {
        let values = (1..=100).map(f64::from).collect::<Vec<_>>();
        let study = SampleSizeStudy::new(&values, &[10, 20, 50], &[0.95]).unwrap();
        assert_eq!(study.reference().sample_size, 50);
    }

    #[test]
    fn test_reference_row_deviations_are_zero() {
        let values = (1..=50).map(f64::from).collect::<Vec<_>>();
        let study = SampleSizeStudy::new(&values, &[10, 50], &[0.90, 0.99]).unwrap();
        let deviations = study.deviations();
        let reference_row = deviations.last().unwrap();
        assert_eq!(reference_row.statistics.mean, 0.0);
        assert_eq!(reference_row.statistics.variance, 0.0);
        assert!(reference_row.confidence_intervals.iter().all(|d| *d == 0.0));
    }

    #[test]
    fn test_prefix_deviations_match_hand_computation() {
        // Prefix [1, 2] has mean 1.5 against the full mean 2.5, a 40%
        // deviation; its variance 0.5 against 5/3 deviates by 70%.
        let values = [1.0, 2.0, 3.0, 4.0];
        let study = SampleSizeStudy::new(&values, &[2, 4], &[0.95]).unwrap();
        let deviations = study.deviations();
        assert!((deviations[0].statistics.mean - 40.0).abs() < 1e-9);
        assert!((deviations[0].statistics.variance - 70.0).abs() < 1e-9);
    }
}
