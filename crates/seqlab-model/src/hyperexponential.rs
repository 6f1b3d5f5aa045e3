/// Moment-matching failure while deriving hyperexponential parameters.
///
/// Both variants indicate a caller bug (a misclassified sequence or an
/// out-of-range configuration value), not a recoverable runtime condition.
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
pub enum DomainError {
    #[display(
        "coefficient of variation {coefficient_of_variation} is below 1; \
         the hyperexponential family requires cv >= 1"
    )]
    LowVariability { coefficient_of_variation: f64 },
    #[display("branch probability {branch_probability} must lie strictly between 0 and 1")]
    BranchProbability { branch_probability: f64 },
}

/// Parameters of a two-branch hyperexponential distribution.
///
/// A draw takes the first exponential branch (scale `t1`) with probability
/// `q` and the second branch (scale `t2`) otherwise. The parameters are
/// derived so that the mixture reproduces the observed mean and coefficient
/// of variation: `q·t1 + (1−q)·t2 = mean`.
#[derive(Debug, Clone, Copy)]
pub struct HyperexponentialParams {
    /// Scale of the first (heavier) exponential branch.
    pub t1: f64,
    /// Scale of the second exponential branch.
    pub t2: f64,
    /// Probability of taking the first branch, after capping.
    pub q: f64,
}

impl HyperexponentialParams {
    /// Branch probability used when no explicit value is configured.
    pub const DEFAULT_BRANCH_PROBABILITY: f64 = 0.3;

    /// Derives mixture parameters from the observed mean and coefficient of
    /// variation.
    ///
    /// The requested branch probability is capped at `2 / (cv² + 1)`, the
    /// largest value that keeps the second branch scale non-negative; the
    /// capped value is the one stored and used for generation.
    ///
    /// # Arguments
    ///
    /// * `mean` - Sample mean of the sequence being modelled
    /// * `coefficient_of_variation` - Sample coefficient of variation, at
    ///   least 1
    /// * `branch_probability` - Requested probability of the first branch,
    ///   strictly between 0 and 1
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] when the coefficient of variation is below 1
    /// (the square-root arguments would go negative) or the branch
    /// probability lies outside (0, 1).
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqlab_model::hyperexponential::HyperexponentialParams;
    /// let params = HyperexponentialParams::from_moments(10.0, 1.5, 0.3)?;
    /// let mixture_mean = params.q * params.t1 + (1.0 - params.q) * params.t2;
    /// assert!((mixture_mean - 10.0).abs() < 1e-9);
    /// # Ok::<(), seqlab_model::hyperexponential::DomainError>(())
    /// ```
    pub fn from_moments(
        mean: f64,
        coefficient_of_variation: f64,
        branch_probability: f64,
    ) -> Result<Self, DomainError> {
        if branch_probability <= 0.0 || branch_probability >= 1.0 || branch_probability.is_nan() {
            return Err(DomainError::BranchProbability { branch_probability });
        }
        if coefficient_of_variation < 1.0 {
            return Err(DomainError::LowVariability {
                coefficient_of_variation,
            });
        }

        let cv_squared = coefficient_of_variation * coefficient_of_variation;
        let q = branch_probability.min(2.0 / (cv_squared + 1.0));
        let spread = cv_squared - 1.0;
        let t1 = mean * (1.0 + ((1.0 - q) / (2.0 * q) * spread).sqrt());
        let t2 = mean * (1.0 - (q / (2.0 * (1.0 - q)) * spread).sqrt());

        Ok(Self { t1, t2, q })
    }
}
