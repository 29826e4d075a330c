use bayesboost::dataset::{resolve_sample_weights, Labels};
use bayesboost::{Error, Float, Label};
use ndarray::{Array1, ArrayView1, Zip};

use crate::error::Result;

/// Compute weighted class priors
///
/// The distinct values of `labels` in ascending order define the class index of every class, the
/// `k`-th entry of the result is the share of the total sample weight carried by the samples of
/// class `k`. Without `weights` every sample carries the weight `1/N`.
///
/// Weights do not have to sum to one. The priors always do, unless a class has no samples at all
/// which cannot happen for classes derived from `labels`.
///
/// # Errors
///
/// * [`DimensionMismatch`](bayesboost::Error::DimensionMismatch) if the number of weights differs
/// from the number of labels
/// * [`InvalidWeights`](bayesboost::Error::InvalidWeights) for negative, non-finite or all-zero
/// weights
///
/// ```rust
/// use bayesboost_bayes::compute_prior;
/// use ndarray::array;
///
/// let labels = array![3, 1, 3, 3];
/// let prior = compute_prior::<f64, _>(labels.view(), None)?;
/// assert_eq!(prior, array![0.25, 0.75]);
///
/// let weights = array![0.1, 0.6, 0.1, 0.2];
/// let prior = compute_prior(labels.view(), Some(weights.view()))?;
/// assert!((prior[0] - 0.6).abs() < 1e-12);
/// # bayesboost_bayes::Result::Ok(())
/// ```
pub fn compute_prior<F: Float, L: Label + Ord>(
    labels: ArrayView1<'_, L>,
    weights: Option<ArrayView1<'_, F>>,
) -> Result<Array1<F>> {
    let weights = resolve_sample_weights(labels.len(), weights)?;
    let classes = labels.sorted_labels();

    Ok(class_priors(&classes, labels, weights.view()))
}

/// Priors for already resolved classes and validated weights
pub(crate) fn class_priors<F: Float, L: Label>(
    classes: &[L],
    labels: ArrayView1<'_, L>,
    weights: ArrayView1<'_, F>,
) -> Array1<F> {
    let total = weights.sum();

    classes
        .iter()
        .map(|class| {
            let mut mass = F::zero();
            Zip::from(&labels).and(&weights).for_each(|label, &w| {
                if label == class {
                    mass += w;
                }
            });
            mass / total
        })
        .collect()
}

/// Check that there is one label for every row of the records
pub(crate) fn check_labels(nsamples: usize, nlabels: usize) -> Result<()> {
    if nsamples != nlabels {
        return Err(Error::DimensionMismatch {
            what: "labels",
            expected: nsamples,
            found: nlabels,
        }
        .into());
    }

    Ok(())
}
