//! JSON report schema for the analyze command.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use seqlab_analysis::{
    comparison::SequenceComparison,
    sample::{SampleSizeStudy, StatisticsDeviations},
};
use seqlab_model::fit::DistributionFit;
use seqlab_stats::{
    correlation::AutocorrelationProfile, descriptive::SummaryStatistics, histogram::Histogram,
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub input: String,
    pub sequence_length: usize,
    pub samples: Vec<SampleReport>,
    pub autocorrelation: AutocorrelationReport,
    pub histogram: Vec<BinReport>,
    pub fit: FitReport,
    pub comparison: Option<ComparisonReport>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SampleReport {
    pub sample_size: usize,
    pub statistics: StatisticsReport,
    /// Relative deviations from the reference sample, in percent.
    pub deviations: StatisticsReport,
    pub confidence_intervals: Vec<ConfidenceIntervalReport>,
}

/// Shared shape for statistics and their relative deviations.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatisticsReport {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub coefficient_of_variation: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfidenceIntervalReport {
    pub confidence_level: f64,
    pub half_width: f64,
    /// Relative deviation from the reference interval, in percent.
    pub deviation: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AutocorrelationReport {
    pub sample_size: usize,
    pub significance_threshold: f64,
    pub significant_lags: usize,
    pub coefficients: Vec<LagReport>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LagReport {
    pub lag: usize,
    pub coefficient: f64,
    pub significant: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BinReport {
    pub start: f64,
    pub end: f64,
    pub count: u64,
    /// Fraction of all values in this bin, in percent.
    pub share: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FitReport {
    pub family: String,
    pub scale: Option<f64>,
    pub mixture: Option<MixtureReport>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MixtureReport {
    pub t1: f64,
    pub t2: f64,
    pub q: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonReport {
    pub original: StatisticsReport,
    pub generated: StatisticsReport,
    /// Relative deviations of the synthetic statistics, in percent.
    pub deviations: StatisticsReport,
    pub autocorrelation: Vec<LagPairReport>,
    pub cross_correlation: f64,
    pub quality: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LagPairReport {
    pub lag: usize,
    pub original: f64,
    pub generated: f64,
    pub absolute_difference: f64,
}

impl AnalysisReport {
    pub fn new(
        input: &Path,
        sequence_length: usize,
        study: &SampleSizeStudy,
        autocorrelation: &AutocorrelationProfile,
        histogram: &Histogram,
        fit: &DistributionFit,
        comparison: Option<&SequenceComparison>,
    ) -> Self {
        let samples = study
            .profiles
            .iter()
            .zip(study.deviations())
            .map(|(profile, deviations)| {
                let confidence_intervals = profile
                    .confidence_intervals
                    .iter()
                    .zip(&deviations.confidence_intervals)
                    .map(|(interval, deviation)| ConfidenceIntervalReport {
                        confidence_level: interval.confidence_level,
                        half_width: interval.half_width,
                        deviation: *deviation,
                    })
                    .collect();
                SampleReport {
                    sample_size: profile.sample_size,
                    statistics: StatisticsReport::from(&profile.statistics),
                    deviations: StatisticsReport::from(&deviations.statistics),
                    confidence_intervals,
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            input: input.display().to_string(),
            sequence_length,
            samples,
            autocorrelation: AutocorrelationReport::new(
                autocorrelation,
                study.reference().sample_size,
            ),
            histogram: bin_reports(histogram),
            fit: FitReport::from(fit),
            comparison: comparison.map(ComparisonReport::from),
        }
    }
}

impl AutocorrelationReport {
    fn new(profile: &AutocorrelationProfile, sample_size: usize) -> Self {
        let threshold = AutocorrelationProfile::significance_threshold(sample_size);
        let coefficients = profile
            .coefficients
            .iter()
            .map(|coefficient| LagReport {
                lag: coefficient.lag,
                coefficient: coefficient.coefficient,
                significant: coefficient.coefficient.abs() > threshold,
            })
            .collect();
        Self {
            sample_size,
            significance_threshold: threshold,
            significant_lags: profile.significant_lag_count(threshold),
            coefficients,
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn bin_reports(histogram: &Histogram) -> Vec<BinReport> {
    let total = histogram.total_count();
    histogram
        .bins
        .iter()
        .map(|bin| BinReport {
            start: bin.range.start,
            end: bin.range.end,
            count: bin.count,
            share: if total == 0 {
                0.0
            } else {
                100.0 * bin.count as f64 / total as f64
            },
        })
        .collect()
}

impl From<&SummaryStatistics> for StatisticsReport {
    fn from(statistics: &SummaryStatistics) -> Self {
        Self {
            mean: statistics.mean,
            variance: statistics.variance,
            std_dev: statistics.std_dev,
            coefficient_of_variation: statistics.coefficient_of_variation,
        }
    }
}

impl From<&StatisticsDeviations> for StatisticsReport {
    fn from(deviations: &StatisticsDeviations) -> Self {
        Self {
            mean: deviations.mean,
            variance: deviations.variance,
            std_dev: deviations.std_dev,
            coefficient_of_variation: deviations.coefficient_of_variation,
        }
    }
}

impl From<&DistributionFit> for FitReport {
    fn from(fit: &DistributionFit) -> Self {
        let (scale, mixture) = match fit {
            DistributionFit::Exponential { scale } => (Some(*scale), None),
            DistributionFit::Hyperexponential(params) => (
                None,
                Some(MixtureReport {
                    t1: params.t1,
                    t2: params.t2,
                    q: params.q,
                }),
            ),
            DistributionFit::ErlangNormalized | DistributionFit::Hypoexponential => (None, None),
        };
        Self {
            family: fit.family().to_string(),
            scale,
            mixture,
        }
    }
}

impl From<&SequenceComparison> for ComparisonReport {
    fn from(comparison: &SequenceComparison) -> Self {
        Self {
            original: StatisticsReport::from(&comparison.original),
            generated: StatisticsReport::from(&comparison.generated),
            deviations: StatisticsReport::from(&comparison.deviations),
            autocorrelation: comparison
                .autocorrelation
                .iter()
                .map(|pair| LagPairReport {
                    lag: pair.lag,
                    original: pair.original,
                    generated: pair.generated,
                    absolute_difference: pair.absolute_difference,
                })
                .collect(),
            cross_correlation: comparison.cross_correlation,
            quality: comparison.quality.to_string(),
        }
    }
}
