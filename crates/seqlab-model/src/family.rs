/// Distribution family selected by the coefficient of variation.
///
/// The bands partition the CV axis: values below
/// [`Self::ERLANG_UPPER_BOUND`] indicate lower-than-exponential variability
/// approximated by a normalized Erlang shape, values around 1 indicate the
/// memoryless exponential, and values from
/// [`Self::EXPONENTIAL_UPPER_BOUND`] up indicate the high-variability
/// two-branch hyperexponential mixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum DistributionFamily {
    #[display("Erlang-normalized")]
    ErlangNormalized,
    #[display("hypoexponential")]
    Hypoexponential,
    #[display("exponential")]
    Exponential,
    #[display("hyperexponential")]
    Hyperexponential,
}

impl DistributionFamily {
    /// Coefficients of variation below this bound classify as
    /// [`Self::ErlangNormalized`].
    pub const ERLANG_UPPER_BOUND: f64 = 0.3;
    /// Coefficients of variation in `[ERLANG_UPPER_BOUND, this)` classify as
    /// [`Self::Hypoexponential`].
    pub const HYPOEXPONENTIAL_UPPER_BOUND: f64 = 0.8;
    /// Coefficients of variation in `[HYPOEXPONENTIAL_UPPER_BOUND, this)`
    /// classify as [`Self::Exponential`]; anything above is
    /// [`Self::Hyperexponential`].
    pub const EXPONENTIAL_UPPER_BOUND: f64 = 1.2;

    /// Classifies a sequence by its coefficient of variation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seqlab_model::family::DistributionFamily;
    /// assert_eq!(
    ///     DistributionFamily::classify(0.5),
    ///     DistributionFamily::Hypoexponential
    /// );
    /// assert_eq!(
    ///     DistributionFamily::classify(1.5),
    ///     DistributionFamily::Hyperexponential
    /// );
    /// ```
    #[must_use]
    pub fn classify(coefficient_of_variation: f64) -> Self {
        if coefficient_of_variation < Self::ERLANG_UPPER_BOUND {
            DistributionFamily::ErlangNormalized
        } else if coefficient_of_variation < Self::HYPOEXPONENTIAL_UPPER_BOUND {
            DistributionFamily::Hypoexponential
        } else if coefficient_of_variation < Self::EXPONENTIAL_UPPER_BOUND {
            DistributionFamily::Exponential
        } else {
            DistributionFamily::Hyperexponential
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_bands() {
        assert_eq!(
            DistributionFamily::classify(0.1),
            DistributionFamily::ErlangNormalized
        );
        assert_eq!(
            DistributionFamily::classify(0.5),
            DistributionFamily::Hypoexponential
        );
        assert_eq!(
            DistributionFamily::classify(1.0),
            DistributionFamily::Exponential
        );
        assert_eq!(
            DistributionFamily::classify(1.5),
            DistributionFamily::Hyperexponential
        );
    }

    #[test]
    fn test_bounds_belong_to_the_upper_band() {
        assert_eq!(
            DistributionFamily::classify(DistributionFamily::ERLANG_UPPER_BOUND),
            DistributionFamily::Hypoexponential
        );
        assert_eq!(
            DistributionFamily::classify(DistributionFamily::HYPOEXPONENTIAL_UPPER_BOUND),
            DistributionFamily::Exponential
        );
        assert_eq!(
            DistributionFamily::classify(DistributionFamily::EXPONENTIAL_UPPER_BOUND),
            DistributionFamily::Hyperexponential
        );
    }
}
