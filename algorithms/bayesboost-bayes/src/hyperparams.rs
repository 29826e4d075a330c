use crate::NaiveBayesError;
use bayesboost::{Float, Label, ParamGuard};
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A verified hyper-parameter set ready for the estimation of a Gaussian naive Bayes model
///
/// See [`GaussianNbParams`](crate::GaussianNbParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianNbValidParams<F, L> {
    // Lower bound for variances when evaluating log-posteriors
    variance_floor: F,
    label: PhantomData<L>,
}

impl<F: Float, L> GaussianNbValidParams<F, L> {
    /// Get the variance floor
    pub fn variance_floor(&self) -> F {
        self.variance_floor
    }
}

/// A hyper-parameter set during construction
///
/// The parameter set can be verified into a
/// [`GaussianNbValidParams`](crate::GaussianNbValidParams) by calling
/// [ParamGuard::check](Self::check). It is also possible to directly fit a model with
/// [Fit::fit](bayesboost::traits::Fit::fit) which implicitly verifies the parameter set prior to
/// the model estimation and forwards any error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [variance_floor](Self::variance_floor) | `1e-9` | Lower bound for variances when comparing log-posteriors, keeps constant features finite | `(0, inf)` |
///
/// # Errors
///
/// Returns [`InvalidVarianceFloor`](NaiveBayesError::InvalidVarianceFloor) if the variance floor
/// is not positive or not finite.
///
/// # Example
///
/// ```rust
/// use bayesboost_bayes::{GaussianNbParams, Result};
/// use bayesboost::prelude::*;
/// use ndarray::array;
///
/// let x = array![[-2., -1.], [-1., -1.], [-1., -2.], [1., 1.], [1., 2.], [2., 1.]];
/// let y = array![1, 1, 1, 2, 2, 2];
/// let ds = DatasetView::new(x.view(), y.view());
///
/// // fit with an unchecked parameter set, the check happens inside of `fit`
/// let unchecked_params = GaussianNbParams::new().variance_floor(1e-6);
/// let model = unchecked_params.fit(&ds)?;
///
/// // or check the parameters first and reuse them
/// let checked_params = unchecked_params.check()?;
/// let same_model = checked_params.fit(&ds)?;
///
/// assert_eq!(model, same_model);
/// # Result::Ok(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianNbParams<F, L>(GaussianNbValidParams<F, L>);

impl<F: Float, L> Default for GaussianNbParams<F, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float, L> GaussianNbParams<F, L> {
    /// Create new [GaussianNbParams] set with default values for its parameters
    pub fn new() -> Self {
        Self(GaussianNbValidParams {
            variance_floor: F::cast(1e-9),
            label: PhantomData,
        })
    }

    /// Specifies the lower bound applied to every variance when log-posteriors are evaluated
    ///
    /// Estimated variances are stored unmodified, a constant feature yields a variance of zero.
    pub fn variance_floor(mut self, variance_floor: F) -> Self {
        self.0.variance_floor = variance_floor;
        self
    }
}

impl<F: Float, L: Label> ParamGuard for GaussianNbParams<F, L> {
    type Checked = GaussianNbValidParams<F, L>;
    type Error = NaiveBayesError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let floor = self.0.variance_floor;
        if floor.is_finite() && floor > F::zero() {
            Ok(&self.0)
        } else {
            Err(NaiveBayesError::InvalidVarianceFloor(
                floor.to_f64().unwrap_or(f64::NAN),
            ))
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::GaussianNbParams;
    use crate::NaiveBayesError;
    use bayesboost::ParamGuard;

    #[test]
    fn default_floor() {
        let params = GaussianNbParams::<f64, usize>::new().check_unwrap();

        assert_eq!(params.variance_floor(), 1e-9);
    }

    #[test]
    fn invalid_floors() {
        for floor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let params = GaussianNbParams::<f64, usize>::new().variance_floor(floor);

            assert!(matches!(
                params.check(),
                Err(NaiveBayesError::InvalidVarianceFloor(_))
            ));
        }
    }

    #[test]
    fn f32_floor() {
        let params = GaussianNbParams::<f32, usize>::new().variance_floor(1e-3);

        assert_eq!(params.check_unwrap().variance_floor(), 1e-3);
    }
}
