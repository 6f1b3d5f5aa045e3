//! Distribution fitting and synthetic sequence generation.
//!
//! This crate turns the summary statistics of an observed sequence into a
//! parametric distribution model and draws synthetic sequences from it:
//!
//! 1. **Classification** ([`family`]): the coefficient of variation selects
//!    one of four distribution families
//! 2. **Parameter derivation** ([`hyperexponential`], [`fit`]): family
//!    parameters from the sample mean and coefficient of variation
//! 3. **Generation** ([`generator`]): inverse-CDF sampling with a seedable
//!    random source, for the families that have a generator
//!
//! # Examples
//!
//! ```
//! use seqlab_model::{fit::DistributionFit, generator::SequenceGenerator};
//! use seqlab_stats::descriptive::SummaryStatistics;
//!
//! let values = [0.2, 3.9, 0.7, 11.4, 0.1, 6.3, 0.4, 18.0, 2.2, 0.9];
//! let stats = SummaryStatistics::new(&values).unwrap();
//! let fit = DistributionFit::from_stats(&stats, 0.3)?;
//!
//! let mut generator = SequenceGenerator::with_seed(7);
//! let synthetic = generator.from_fit(&fit, values.len())?;
//! assert_eq!(synthetic.len(), values.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod family;
pub mod fit;
pub mod generator;
pub mod hyperexponential;
