//! Derived analyses built on top of the statistics primitives.
//!
//! This crate composes the building blocks from `seqlab-stats` into the two
//! studies the analysis pipeline reports:
//!
//! 1. **Sample-size study** ([`sample`]): profile growing prefixes of a
//!    sequence and measure how far each prefix's characteristics deviate
//!    from the reference sample
//! 2. **Sequence comparison** ([`comparison`]): hold a synthetic sequence
//!    against the original it was modelled on and judge the fit quality
//!
//! # Examples
//!
//! Profile a sequence at several sample sizes:
//!
//! ```
//! use seqlab_analysis::sample::SampleSizeStudy;
//!
//! let values = (1..=100).map(f64::from).collect::<Vec<_>>();
//! let study = SampleSizeStudy::new(&values, &[10, 50, 1000], &[0.95]).unwrap();
//! assert_eq!(study.profiles.len(), 3);
//! assert_eq!(study.reference().sample_size, 100);
//! ```
//!
//! Compare a sequence with a synthetic counterpart:
//!
//! ```
//! use seqlab_analysis::comparison::{FitQuality, SequenceComparison};
//!
//! let original = [4.0, 1.5, 7.2, 3.3, 9.1, 2.6, 5.8, 1.1];
//! let comparison = SequenceComparison::new(&original, &original, 3).unwrap();
//! assert_eq!(comparison.quality, FitQuality::Good);
//! assert!((comparison.cross_correlation - 1.0).abs() < 1e-12);
//! ```

pub mod comparison;
pub mod sample;
