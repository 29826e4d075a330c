//! Provide traits for different classes of algorithms
//!

use crate::dataset::{DatasetBase, Records};
use ndarray::{ArrayBase, Data, Ix2};

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// in *KMeans* this would be the mean values for each class, or in *naive Bayes* the class priors
/// and Gaussian parameters of every class.
///
/// Fitting borrows the hyper-parameters immutably and returns a new, independently owned model.
/// The same parameter set can therefore be reused to train any number of models, for example on
/// re-weighted copies of a dataset.
///
/// Sample weights are attached to the dataset with
/// [`DatasetBase::with_weights`](crate::DatasetBase::with_weights). Algorithms which do not
/// support sample weights ignore them.
pub trait Fit<R: Records, T, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Object, E>;
}

/// Predict with model into a mutable reference of targets.
pub trait PredictInplace<R: Records, T> {
    /// Predict something in place
    fn predict_inplace<'a>(&'a self, x: &'a R, y: &mut T);

    /// Create targets that `predict_inplace` works with.
    fn default_target(&self, x: &R) -> T;
}

/// Predict with model
///
/// This trait assumes the `PredictInplace` implementation and provides additional input/output
/// combinations.
///
/// # Provided implementation
///
/// * `&ArrayBase` -> `T`
/// * `&DatasetBase<R, S>` -> `T`
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}

impl<'a, D: Data, T, O> Predict<&'a ArrayBase<D, Ix2>, T> for O
where
    O: PredictInplace<ArrayBase<D, Ix2>, T>,
{
    fn predict(&self, records: &'a ArrayBase<D, Ix2>) -> T {
        let mut targets = self.default_target(records);
        self.predict_inplace(records, &mut targets);
        targets
    }
}

impl<'a, R: Records, S, T, O> Predict<&'a DatasetBase<R, S>, T> for O
where
    O: PredictInplace<R, T>,
{
    fn predict(&self, ds: &'a DatasetBase<R, S>) -> T {
        let mut targets = self.default_target(&ds.records);
        self.predict_inplace(&ds.records, &mut targets);
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::{Fit, Predict, PredictInplace};
    use crate::dataset::{AsSingleTargets, Dataset, DatasetBase};
    use crate::error::{Error, Result};
    use crate::param_guard::ParamGuard;
    use ndarray::{array, Array1, ArrayBase, Data, Ix2};

    // Predicts the label with the largest total sample weight
    struct HeaviestLabel(usize);

    struct HeaviestLabelValidParams;

    struct HeaviestLabelParams(HeaviestLabelValidParams, bool);

    impl ParamGuard for HeaviestLabelParams {
        type Checked = HeaviestLabelValidParams;
        type Error = Error;

        fn check_ref(&self) -> Result<&Self::Checked> {
            if self.1 {
                Ok(&self.0)
            } else {
                Err(Error::Parameters("disabled".to_string()))
            }
        }

        fn check(self) -> Result<Self::Checked> {
            self.check_ref()?;
            Ok(self.0)
        }
    }

    impl Fit<ndarray::Array2<f64>, Array1<usize>, Error> for HeaviestLabelValidParams {
        type Object = HeaviestLabel;

        fn fit(&self, dataset: &Dataset<f64, usize>) -> Result<HeaviestLabel> {
            let weights = dataset.sample_weights()?;
            let mut mass = [0.0; 2];
            for (label, w) in dataset.as_single_targets().iter().zip(weights.iter()) {
                mass[*label] += w;
            }

            Ok(HeaviestLabel(if mass[1] > mass[0] { 1 } else { 0 }))
        }
    }

    impl<D: Data<Elem = f64>> PredictInplace<ArrayBase<D, Ix2>, Array1<usize>> for HeaviestLabel {
        fn predict_inplace(&self, _x: &ArrayBase<D, Ix2>, y: &mut Array1<usize>) {
            y.fill(self.0);
        }

        fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<usize> {
            Array1::zeros(x.nrows())
        }
    }

    #[test]
    fn fit_respects_weights_and_predicts() -> Result<()> {
        let records = array![[0.], [1.], [2.]];
        let dataset: Dataset<f64, usize> =
            DatasetBase::new(records.clone(), array![0, 0, 1]).with_weights(array![0.1, 0.1, 1.0]);

        let model = HeaviestLabelParams(HeaviestLabelValidParams, true).fit(&dataset)?;

        assert_eq!(model.predict(&records), array![1, 1, 1]);
        assert_eq!(model.predict(&dataset), array![1, 1, 1]);

        Ok(())
    }

    #[test]
    fn unchecked_params_are_checked_before_fit() {
        let dataset = Dataset::new(array![[0.]], array![0usize]);
        let result = HeaviestLabelParams(HeaviestLabelValidParams, false).fit(&dataset);

        assert!(matches!(result, Err(Error::Parameters(_))));
    }
}
