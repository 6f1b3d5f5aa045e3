use seqlab_stats::descriptive::SummaryStatistics;

use crate::{
    family::DistributionFamily,
    hyperexponential::{DomainError, HyperexponentialParams},
};

/// A fitted distribution model: the selected family plus its parameters.
///
/// Only the families whose parameters the moment-matching derives carry a
/// payload; the Erlang-normalized and hypoexponential fits are
/// classification-only results.
#[derive(Debug, Clone, Copy)]
pub enum DistributionFit {
    ErlangNormalized,
    Hypoexponential,
    /// Single exponential with `scale` equal to the sample mean.
    Exponential { scale: f64 },
    /// Two-branch exponential mixture matched to the sample moments.
    Hyperexponential(HyperexponentialParams),
}

impl DistributionFit {
    /// Fits a distribution model to the summary statistics of a sequence.
    ///
    /// The coefficient of variation selects the family
    /// ([`DistributionFamily::classify`]); the hyperexponential branch then
    /// derives its mixture parameters from the mean and the coefficient of
    /// variation.
    ///
    /// # Arguments
    ///
    /// * `stats` - Summary statistics of the reference sample
    /// * `branch_probability` - Requested first-branch probability for the
    ///   hyperexponential mixture, strictly between 0 and 1
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the branch probability is out of range.
    /// The low-variability variant cannot occur here: the hyperexponential
    /// parameters are only derived when classification selected that family,
    /// which requires a coefficient of variation of at least 1.
    pub fn from_stats(
        stats: &SummaryStatistics,
        branch_probability: f64,
    ) -> Result<Self, DomainError> {
        match DistributionFamily::classify(stats.coefficient_of_variation) {
            DistributionFamily::ErlangNormalized => Ok(Self::ErlangNormalized),
            DistributionFamily::Hypoexponential => Ok(Self::Hypoexponential),
            DistributionFamily::Exponential => Ok(Self::Exponential { scale: stats.mean }),
            DistributionFamily::Hyperexponential => {
                let params = HyperexponentialParams::from_moments(
                    stats.mean,
                    stats.coefficient_of_variation,
                    branch_probability,
                )?;
                Ok(Self::Hyperexponential(params))
            }
        }
    }

    /// The family this fit belongs to.
    #[must_use]
    pub fn family(&self) -> DistributionFamily {
        match self {
            DistributionFit::ErlangNormalized => DistributionFamily::ErlangNormalized,
            DistributionFit::Hypoexponential => DistributionFamily::Hypoexponential,
            DistributionFit::Exponential { .. } => DistributionFamily::Exponential,
            DistributionFit::Hyperexponential(_) => DistributionFamily::Hyperexponential,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_distr::{Distribution as _, Exp};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn stats_with_cv(mean: f64, coefficient_of_variation: f64) -> SummaryStatistics {
        let std_dev = mean * coefficient_of_variation;
        SummaryStatistics {
            mean,
            variance: std_dev * std_dev,
            std_dev,
            coefficient_of_variation,
        }
    }

    #[test]
    fn test_exponential_fit_takes_the_mean_as_scale() {
        let fit = DistributionFit::from_stats(&stats_with_cv(5.0, 1.0), 0.3).unwrap();
        match fit {
            DistributionFit::Exponential { scale } => assert_eq!(scale, 5.0),
            other => panic!("expected exponential fit, got {other:?}"),
        }
    }

    #[test]
    fn test_hyperexponential_fit_derives_mixture_parameters() {
        let fit = DistributionFit::from_stats(&stats_with_cv(10.0, 1.5), 0.3).unwrap();
        let DistributionFit::Hyperexponential(params) = fit else {
            panic!("expected hyperexponential fit, got {fit:?}");
        };
        assert_eq!(params.q, 0.3);
        let mixture_mean = params.q * params.t1 + (1.0 - params.q) * params.t2;
        assert!((mixture_mean - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_low_variability_families_are_classification_only() {
        let erlang = DistributionFit::from_stats(&stats_with_cv(5.0, 0.2), 0.3).unwrap();
        assert!(erlang.family().is_erlang_normalized());
        let hypo = DistributionFit::from_stats(&stats_with_cv(5.0, 0.5), 0.3).unwrap();
        assert!(hypo.family().is_hypoexponential());
    }

    #[test]
    fn test_invalid_branch_probability_fails_the_fit() {
        let err = DistributionFit::from_stats(&stats_with_cv(10.0, 1.5), 1.0).unwrap_err();
        assert!(matches!(err, DomainError::BranchProbability { .. }));
    }

    #[test]
    fn test_exponential_sample_classifies_as_exponential() {
        // A large exponential sample has a coefficient of variation near 1
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let exp = Exp::new(0.5).unwrap();
        let values = (0..10_000).map(|_| exp.sample(&mut rng)).collect::<Vec<_>>();
        let stats = SummaryStatistics::new(&values).unwrap();
        let fit = DistributionFit::from_stats(&stats, 0.3).unwrap();
        assert!(fit.family().is_exponential());
    }
}
