use super::{AsSingleTargets, DatasetBase, DatasetView, Float, Label, Labels, Records};
use crate::error::{Error, Result};
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};
use std::collections::HashSet;

/// Implementation without constraints on records and targets
impl<R: Records, T> DatasetBase<R, T> {
    /// Create a new dataset from records and targets
    ///
    /// # Example
    ///
    /// ```ignore
    /// let dataset = Dataset::new(records, targets);
    /// ```
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase {
            records,
            targets,
            weights: Array1::from(Vec::new()),
            feature_names: Vec::new(),
        }
    }

    /// Returns reference to targets
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// Returns reference to records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Returns optionally the sample weights
    ///
    /// `None` is returned when no weights were attached with [`with_weights`](Self::with_weights).
    pub fn weights(&self) -> Option<&[R::Elem]> {
        if !self.weights.is_empty() {
            self.weights.as_slice()
        } else {
            None
        }
    }

    /// Updates the sample weights
    pub fn with_weights(mut self, weights: Array1<R::Elem>) -> DatasetBase<R, T> {
        self.weights = weights;

        self
    }

    /// Returns feature names
    ///
    /// A feature name gives a human-readable string describing the purpose of a single feature.
    /// This allow the reader to understand its purpose while analysing results.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Updates the feature names of a dataset
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> DatasetBase<R, T> {
        let feature_names = names.into_iter().map(|x| x.into()).collect();

        self.feature_names = feature_names;

        self
    }

    /// Returns the number of samples in the records
    pub fn nsamples(&self) -> usize {
        self.records.nsamples()
    }

    /// Returns the number of features in the records
    pub fn nfeatures(&self) -> usize {
        self.records.nfeatures()
    }
}

impl<F: Float, R: Records<Elem = F>, T> DatasetBase<R, T> {
    /// Resolve the sample weights used for estimation
    ///
    /// Returns the attached weights after validating them, or a uniform distribution `1/N` if no
    /// weights were given. Attached weights do not have to sum to one.
    ///
    /// # Errors
    ///
    /// * [`Error::NotEnoughSamples`] if the records are empty
    /// * [`Error::DimensionMismatch`] if the number of weights differs from the number of samples
    /// * [`Error::InvalidWeights`] if a weight is negative or not finite, or all weights are zero
    pub fn sample_weights(&self) -> Result<Array1<F>> {
        resolve_sample_weights(self.nsamples(), self.weights().map(ArrayView1::from))
    }
}

/// Validate optional sample weights for `nsamples` samples
///
/// Returns a copy of the given weights, or a uniform distribution `1/N` for `None`. See
/// [`DatasetBase::sample_weights`] for the possible errors.
pub fn resolve_sample_weights<F: Float>(
    nsamples: usize,
    weights: Option<ArrayView1<'_, F>>,
) -> Result<Array1<F>> {
    if nsamples == 0 {
        return Err(Error::NotEnoughSamples);
    }

    let weights = match weights {
        Some(weights) => weights,
        None => return Ok(Array1::from_elem(nsamples, F::one() / F::cast(nsamples))),
    };

    if weights.len() != nsamples {
        return Err(Error::DimensionMismatch {
            what: "sample weights",
            expected: nsamples,
            found: weights.len(),
        });
    }

    if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < F::zero()) {
        return Err(Error::InvalidWeights(format!(
            "weights must be finite and non-negative, found {}",
            w
        )));
    }

    if weights.sum() <= F::zero() {
        return Err(Error::InvalidWeights("weights sum up to zero".to_string()));
    }

    Ok(weights.to_owned())
}

impl<R: Records, T: AsSingleTargets> DatasetBase<R, T> {
    /// Check that records, targets and attached sample weights agree on the number of samples
    pub fn check_dimensions(&self) -> Result<()> {
        let nsamples = self.nsamples();
        let ntargets = self.targets.as_single_targets().len();

        if ntargets != nsamples {
            return Err(Error::DimensionMismatch {
                what: "targets",
                expected: nsamples,
                found: ntargets,
            });
        }

        if !self.weights.is_empty() && self.weights.len() != nsamples {
            return Err(Error::DimensionMismatch {
                what: "sample weights",
                expected: nsamples,
                found: self.weights.len(),
            });
        }

        Ok(())
    }
}

impl<F, L, D, S> DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>>
where
    F: Clone,
    D: Data<Elem = F>,
    S: Data<Elem = L>,
{
    /// Creates a view of a dataset
    pub fn view(&self) -> DatasetView<'_, F, L> {
        DatasetBase::new(self.records.view(), self.targets.view())
            .with_weights(self.weights.clone())
            .with_feature_names(self.feature_names.clone())
    }
}

impl<R: Records, T: AsSingleTargets> AsSingleTargets for DatasetBase<R, T> {
    type Elem = T::Elem;

    fn as_single_targets(&self) -> ArrayView1<'_, Self::Elem> {
        self.targets.as_single_targets()
    }
}

impl<L: Label, R: Records, T: Labels<Elem = L>> Labels for DatasetBase<R, T> {
    type Elem = L;

    fn label_set(&self) -> HashSet<L> {
        self.targets.label_set()
    }
}

impl<R: Records, T> From<(R, T)> for DatasetBase<R, T> {
    fn from(rec_tar: (R, T)) -> Self {
        DatasetBase::new(rec_tar.0, rec_tar.1)
    }
}
