use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::{
    family::DistributionFamily, fit::DistributionFit, hyperexponential::HyperexponentialParams,
};

/// Error returned when a fitted family has no generation procedure.
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
#[display("sequence generation is not implemented for the {family} family")]
pub struct UnsupportedFamilyError {
    pub family: DistributionFamily,
}

/// Draws synthetic sequences from fitted distribution models.
///
/// The generator owns its random source, so a fixed seed reproduces the
/// exact same sequences across runs.
///
/// # Examples
///
/// ```
/// use seqlab_model::{generator::SequenceGenerator, hyperexponential::HyperexponentialParams};
///
/// let params = HyperexponentialParams::from_moments(10.0, 1.5, 0.3)?;
/// let mut generator = SequenceGenerator::with_seed(42);
/// let values = generator.hyperexponential(&params, 100);
/// assert_eq!(values.len(), 100);
/// assert!(values.iter().all(|v| *v >= 0.0));
/// # Ok::<(), seqlab_model::hyperexponential::DomainError>(())
/// ```
#[derive(Debug)]
pub struct SequenceGenerator {
    rng: Pcg64Mcg,
}

impl SequenceGenerator {
    /// Creates a generator with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Creates a generator with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Draws `len` values from a two-branch exponential mixture.
    ///
    /// Each draw picks the first branch with probability `q` and then
    /// transforms a uniform variate through the inverse exponential CDF of
    /// the selected branch.
    pub fn hyperexponential(&mut self, params: &HyperexponentialParams, len: usize) -> Vec<f64> {
        (0..len)
            .map(|_| {
                let branch = if self.rng.random::<f64>() < params.q {
                    params.t1
                } else {
                    params.t2
                };
                self.exponential_draw(branch)
            })
            .collect()
    }

    /// Draws `len` values from a single exponential with the given scale.
    pub fn exponential(&mut self, scale: f64, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.exponential_draw(scale)).collect()
    }

    /// Draws `len` values from the fitted model.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFamilyError`] for the Erlang-normalized and
    /// hypoexponential families, whose fits carry no generation parameters.
    pub fn from_fit(
        &mut self,
        fit: &DistributionFit,
        len: usize,
    ) -> Result<Vec<f64>, UnsupportedFamilyError> {
        match fit {
            DistributionFit::Exponential { scale } => Ok(self.exponential(*scale, len)),
            DistributionFit::Hyperexponential(params) => Ok(self.hyperexponential(params, len)),
            DistributionFit::ErlangNormalized | DistributionFit::Hypoexponential => {
                Err(UnsupportedFamilyError {
                    family: fit.family(),
                })
            }
        }
    }

    fn exponential_draw(&mut self, scale: f64) -> f64 {
        let r: f64 = self.rng.random();
        scale * -(1.0 - r).ln()
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use seqlab_stats::descriptive::SummaryStatistics;

    use super::*;

    #[test]
    fn test_same_seed_reproduces_the_sequence() {
        let params = HyperexponentialParams::from_moments(10.0, 1.5, 0.3).unwrap();
        let first = SequenceGenerator::with_seed(42).hyperexponential(&params, 50);
        let second = SequenceGenerator::with_seed(42).hyperexponential(&params, 50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let params = HyperexponentialParams::from_moments(10.0, 1.5, 0.3).unwrap();
        let first = SequenceGenerator::with_seed(1).hyperexponential(&params, 50);
        let second = SequenceGenerator::with_seed(2).hyperexponential(&params, 50);
        assert_ne!(first, second);
    }

    #[test]
    fn test_draws_are_non_negative() {
        let params = HyperexponentialParams::from_moments(10.0, 1.5, 0.3).unwrap();
        let values = SequenceGenerator::with_seed(7).hyperexponential(&params, 1000);
        assert!(values.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn test_degenerate_mixture_recovers_the_branch_mean() {
        // t1 = t2 makes the mixture a plain exponential with that scale
        let params = HyperexponentialParams::from_moments(2.0, 1.0, 0.3).unwrap();
        let values = SequenceGenerator::with_seed(42).hyperexponential(&params, 10_000);
        let stats = SummaryStatistics::new(&values).unwrap();
        assert!((stats.mean - 2.0).abs() < 0.1);
    }

    #[test]
    fn test_mixture_mean_matches_the_fitted_mean() {
        let params = HyperexponentialParams::from_moments(10.0, 1.5, 0.3).unwrap();
        let values = SequenceGenerator::with_seed(42).hyperexponential(&params, 20_000);
        let stats = SummaryStatistics::new(&values).unwrap();
        assert!((stats.mean - 10.0).abs() < 0.6);
    }

    #[test]
    fn test_exponential_mean_matches_the_scale() {
        let values = SequenceGenerator::with_seed(42).exponential(3.0, 10_000);
        let stats = SummaryStatistics::new(&values).unwrap();
        assert!((stats.mean - 3.0).abs() < 0.15);
    }

    #[test]
    fn test_from_fit_rejects_families_without_a_generator() {
        let mut generator = SequenceGenerator::with_seed(42);
        let err = generator
            .from_fit(&DistributionFit::ErlangNormalized, 10)
            .unwrap_err();
        assert!(err.family.is_erlang_normalized());
        assert_eq!(
            err.to_string(),
            "sequence generation is not implemented for the Erlang-normalized family"
        );
    }

    #[test]
    fn test_from_fit_dispatches_to_the_exponential_generator() {
        let mut generator = SequenceGenerator::with_seed(42);
        let values = generator
            .from_fit(&DistributionFit::Exponential { scale: 3.0 }, 200)
            .unwrap();
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| *v >= 0.0));
    }
}
