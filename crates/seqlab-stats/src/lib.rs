//! Statistical estimators for the seqlab workspace.
//!
//! This crate provides the estimation primitives the analysis pipeline is
//! built on:
//!
//! - **Summary statistics**: mean, unbiased variance, standard deviation,
//!   coefficient of variation
//! - **Confidence intervals**: half-widths from Student-t or normal critical
//!   values depending on sample size
//! - **Correlation**: Pearson correlation and autocorrelation profiles over
//!   lagged subsequences
//! - **Histograms**: equal-width frequency tables over the data range
//!
//! Every estimator is a pure function of its input slice; nothing in this
//! crate performs I/O or holds state between calls. Degenerate inputs follow
//! one shared convention: ratios with a zero denominator evaluate to `0.0`
//! instead of propagating infinities into report tables.
//!
//! # Modules
//!
//! - [`descriptive`]: Summary statistics for a sample
//! - [`confidence`]: Confidence interval half-widths
//! - [`correlation`]: Pearson correlation and autocorrelation
//! - [`histogram`]: Equal-width histogram construction
//!
//! # Examples
//!
//! ## Computing summary statistics
//!
//! ```
//! use seqlab_stats::descriptive::SummaryStatistics;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = SummaryStatistics::new(&values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.variance, 2.5);
//! ```
//!
//! ## Computing a confidence interval
//!
//! ```
//! use seqlab_stats::confidence::ConfidenceInterval;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let interval = ConfidenceInterval::new(&values, 0.95);
//! assert!(interval.half_width > 0.0);
//! ```
//!
//! ## Computing an autocorrelation profile
//!
//! ```
//! use seqlab_stats::correlation::AutocorrelationProfile;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let profile = AutocorrelationProfile::new(&values, 10);
//! assert_eq!(profile.coefficients.len(), 7);
//! assert_eq!(profile.coefficients[0].lag, 1);
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use seqlab_stats::histogram::Histogram;
//!
//! let values = [5.0, 2.0, 8.0, 1.0, 9.0, 3.0, 7.0, 4.0, 6.0, 10.0];
//! let histogram = Histogram::new(&values, 5);
//! assert_eq!(histogram.total_count(), 10);
//! ```

pub mod confidence;
pub mod correlation;
pub mod descriptive;
pub mod histogram;
