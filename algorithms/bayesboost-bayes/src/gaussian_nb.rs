use bayesboost::dataset::{AsSingleTargets, DatasetBase, Labels};
use bayesboost::traits::{Fit, PredictInplace};
use bayesboost::{Error, Float, Label};
use ndarray::{Array1, Array2, ArrayBase, ArrayView2, Axis, Data, Ix2};
use ndarray_stats::QuantileExt;

use crate::base_nb::NaiveBayes;
use crate::error::{NaiveBayesError, Result};
use crate::gaussian_params::class_moments;
use crate::hyperparams::{GaussianNbParams, GaussianNbValidParams};
use crate::prior::class_priors;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

impl<F, L, D, T> Fit<ArrayBase<D, Ix2>, T, NaiveBayesError> for GaussianNbValidParams<F, L>
where
    F: Float,
    L: Label + Ord,
    D: Data<Elem = F>,
    T: AsSingleTargets<Elem = L> + Labels<Elem = L>,
{
    type Object = GaussianNb<F, L>;

    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        dataset.check_dimensions()?;
        let weights = dataset.sample_weights()?;

        // classes in ascending order define the class indices
        let classes = dataset.sorted_labels();
        let x = dataset.records().view();
        let y = dataset.as_single_targets();

        let priors = class_priors(&classes, y, weights.view());
        let (means, variances) = class_moments(&classes, x, y, weights.view())?;

        let floored = variances
            .iter()
            .filter(|v| **v < self.variance_floor())
            .count();
        log::debug!(
            "fitted Gaussian naive Bayes with {} classes and {} features, {} variances below the floor",
            classes.len(),
            x.ncols(),
            floored
        );

        Ok(GaussianNb {
            classes,
            priors,
            means,
            variances,
            variance_floor: self.variance_floor(),
        })
    }
}

impl<F: Float, L: Label, D> PredictInplace<ArrayBase<D, Ix2>, Array1<L>> for GaussianNb<F, L>
where
    D: Data<Elem = F>,
{
    /// Predict the label with the largest log-posterior for every sample
    ///
    /// # Panics
    ///
    /// If the number of samples differs from the number of targets, the number of features
    /// differs from the training data or the records contain `NaN`. Use
    /// [`NaiveBayes::classify`] for a fallible variant.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<L>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(
            x.ncols(),
            self.nfeatures(),
            "The number of features must match the training data."
        );

        let log_posterior = self.joint_log_likelihood(x.view());
        for (target, scores) in y.iter_mut().zip(log_posterior.rows()) {
            // finite records have finite log-posteriors
            let k = scores.argmax().unwrap();
            *target = self.classes[k].clone();
        }
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<L> {
        Array1::from_elem(x.nrows(), self.classes[0].clone())
    }
}

/// Fitted Gaussian naive Bayes classifier
///
/// See [GaussianNbParams] for more information on the hyper-parameters.
///
/// # Model assumptions
///
/// Features are modelled as independent Gaussians given the class, so the covariance of every
/// class is diagonal. Training is a single weighted pass over the data: the prior of a class is its
/// share of the total sample weight, means and variances are the weighted moments of its samples.
///
/// # Classification
///
/// For a sample `x` and class `k` the log-posterior
///
/// ```text
/// -0.5 * sum(ln(var_k)) - 0.5 * sum((x - mean_k)^2 / var_k) + ln(prior_k)
/// ```
///
/// is compared across classes, where every variance is raised to the variance floor first. The
/// class with the largest log-posterior wins, ties go to the lowest label.
///
/// # Model usage example
///
/// ```rust
/// use bayesboost::prelude::*;
/// use bayesboost_bayes::{GaussianNb, NaiveBayes, Result};
/// use ndarray::array;
///
/// let x = array![[0.0], [1.0], [10.0], [11.0]];
/// let y = array![3, 3, 7, 7];
/// let dataset = Dataset::new(x, y);
///
/// let model = GaussianNb::params().fit(&dataset)?;
///
/// // labels for `predict`, class indices for `classify`
/// let test = array![[0.2], [10.8]];
/// assert_eq!(model.predict(&test), array![3, 7]);
/// assert_eq!(model.classify(test.view())?, array![0usize, 1]);
/// assert_eq!(model.classes(), &[3, 7]);
/// # Result::Ok(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianNb<F, L> {
    classes: Vec<L>,
    priors: Array1<F>,
    means: Array2<F>,
    variances: Array2<F>,
    variance_floor: F,
}

impl<F: Float, L: Label> GaussianNb<F, L> {
    /// Construct a new set of hyperparameters
    pub fn params() -> GaussianNbParams<F, L> {
        GaussianNbParams::new()
    }

    /// Distinct training labels in ascending order, the position of a label is its class index
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Class priors, in the order of [`classes`](Self::classes)
    pub fn priors(&self) -> &Array1<F> {
        &self.priors
    }

    /// Per-class means with shape `(n_classes, n_features)`
    pub fn means(&self) -> &Array2<F> {
        &self.means
    }

    /// Per-class variances with shape `(n_classes, n_features)`
    ///
    /// These are the estimated variances before the variance floor is applied.
    pub fn variances(&self) -> &Array2<F> {
        &self.variances
    }

    pub fn variance_floor(&self) -> F {
        self.variance_floor
    }

    pub fn nfeatures(&self) -> usize {
        self.means.ncols()
    }

    // log-posteriors for records of matching feature count
    fn joint_log_likelihood(&self, x: ArrayView2<F>) -> Array2<F> {
        let half = F::cast(0.5);
        let mut jll = Array2::zeros((x.nrows(), self.classes.len()));

        for (k, mut column) in jll.axis_iter_mut(Axis(1)).enumerate() {
            let variances = self.variances.row(k).mapv(|v| v.max(self.variance_floor));
            let offset = self.priors[k].ln() - half * variances.mapv(F::ln).sum();

            let distance = ((&x - &self.means.row(k)).mapv(|v| v * v) / &variances).sum_axis(Axis(1));
            column.assign(&distance.mapv(|d| offset - half * d));
        }

        jll
    }
}

impl<F: Float, L: Label> NaiveBayes<F, L> for GaussianNb<F, L> {
    fn log_posterior(&self, x: ArrayView2<F>) -> Result<Array2<F>> {
        if x.ncols() != self.nfeatures() {
            return Err(Error::DimensionMismatch {
                what: "features",
                expected: self.nfeatures(),
                found: x.ncols(),
            }
            .into());
        }

        Ok(self.joint_log_likelihood(x))
    }
}
