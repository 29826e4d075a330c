use bayesboost::{
    error::{Error, Result},
    ParamGuard,
};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The set of valid hyper-parameters for [AdaBoost](crate::AdaBoost)
///
/// ## Parameters
///
/// * `n_rounds`: the maximal number of boosting rounds, every round trains one base classifier.
///   Training stops earlier once a round reaches a weighted training error below
///   `stop_threshold`. Default: 10.
///
/// * `error_floor`: the weighted error of a round is clamped to `[error_floor, 1 - error_floor]`
///   before its vote weight is derived, which keeps the vote weight finite for perfect (or
///   perfectly wrong) classifiers. Default: `1e-4`.
///
/// * `stop_threshold`: training stops after the first round whose unclamped weighted error is
///   below this value. Default: `1e-10`.
///
/// * `model_params`: the hyper-parameters of the base classifier. They are fitted once per
///   round on a re-weighted copy of the training data and never modified.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaBoostValidParams<P> {
    n_rounds: usize,
    error_floor: f64,
    stop_threshold: f64,
    model_params: P,
}

impl<P> AdaBoostValidParams<P> {
    pub fn n_rounds(&self) -> usize {
        self.n_rounds
    }

    pub fn error_floor(&self) -> f64 {
        self.error_floor
    }

    pub fn stop_threshold(&self) -> f64 {
        self.stop_threshold
    }

    /// The hyper-parameters of the base classifier
    pub fn model_params(&self) -> &P {
        &self.model_params
    }
}

/// A helper struct for building [AdaBoost](crate::AdaBoost) hyper-parameters
///
/// Any parameter set implementing [`Fit`](bayesboost::traits::Fit) for weighted datasets, whose
/// fitted model implements [`PredictInplace`](bayesboost::traits::PredictInplace), can be
/// boosted.
///
/// ## Example
///
/// ```
/// use bayesboost_bayes::GaussianNb;
/// use bayesboost_ensemble::AdaBoostParams;
///
/// let params = AdaBoostParams::new(GaussianNb::<f64, usize>::params())
///     .n_rounds(25)
///     .error_floor(1e-3);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaBoostParams<P>(AdaBoostValidParams<P>);

impl<P> AdaBoostParams<P> {
    /// Create a new parameter set boosting `model_params`
    ///
    /// # Default Values
    ///
    /// * `n_rounds`: 10
    /// * `error_floor`: `1e-4`
    /// * `stop_threshold`: `1e-10`
    pub fn new(model_params: P) -> AdaBoostParams<P> {
        Self(AdaBoostValidParams {
            n_rounds: 10,
            error_floor: 1e-4,
            stop_threshold: 1e-10,
            model_params,
        })
    }

    /// Set the maximal number of boosting rounds, must be at least 1
    pub fn n_rounds(mut self, n_rounds: usize) -> Self {
        self.0.n_rounds = n_rounds;
        self
    }

    /// Set the clamp applied to the weighted error, must be in `(0, 0.5)`
    pub fn error_floor(mut self, error_floor: f64) -> Self {
        self.0.error_floor = error_floor;
        self
    }

    /// Set the weighted error below which training stops, must be finite and non-negative
    ///
    /// A threshold of zero disables the early stop.
    pub fn stop_threshold(mut self, stop_threshold: f64) -> Self {
        self.0.stop_threshold = stop_threshold;
        self
    }
}

impl<P> ParamGuard for AdaBoostParams<P> {
    type Checked = AdaBoostValidParams<P>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.n_rounds < 1 {
            Err(Error::Parameters(format!(
                "n_rounds must be at least 1, but was {}",
                self.0.n_rounds
            )))
        } else if !(self.0.error_floor > 0.0 && self.0.error_floor < 0.5) {
            Err(Error::Parameters(format!(
                "error_floor must be in (0, 0.5), but was {}",
                self.0.error_floor
            )))
        } else if !self.0.stop_threshold.is_finite() || self.0.stop_threshold < 0.0 {
            Err(Error::Parameters(format!(
                "stop_threshold must be finite and non-negative, but was {}",
                self.0.stop_threshold
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bayesboost_bayes::GaussianNb;

    fn params() -> AdaBoostParams<bayesboost_bayes::GaussianNbParams<f64, usize>> {
        AdaBoostParams::new(GaussianNb::params())
    }

    #[test]
    fn default_params() {
        let params = params().check_unwrap();

        assert_eq!(params.n_rounds(), 10);
        assert_eq!(params.error_floor(), 1e-4);
        assert_eq!(params.stop_threshold(), 1e-10);
        assert_eq!(params.model_params(), &GaussianNb::params());
    }

    #[test]
    fn custom_params() {
        let params = params()
            .n_rounds(3)
            .error_floor(0.01)
            .stop_threshold(0.0)
            .check_unwrap();

        assert_eq!(params.n_rounds(), 3);
        assert_eq!(params.error_floor(), 0.01);
        assert_eq!(params.stop_threshold(), 0.0);
    }

    #[test]
    fn invalid_n_rounds() {
        assert!(params().n_rounds(0).check_ref().is_err());
    }

    #[test]
    fn invalid_error_floor() {
        for floor in [0.0, -0.1, 0.5, 0.7, f64::NAN] {
            assert!(matches!(
                params().error_floor(floor).check(),
                Err(Error::Parameters(_))
            ));
        }
    }

    #[test]
    fn invalid_stop_threshold() {
        for threshold in [-1e-12, f64::NAN, f64::INFINITY] {
            assert!(params().stop_threshold(threshold).check_ref().is_err());
        }
    }
}
