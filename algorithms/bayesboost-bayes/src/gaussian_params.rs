use bayesboost::dataset::{resolve_sample_weights, Labels};
use bayesboost::{Float, Label};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{NaiveBayesError, Result};
use crate::prior::check_labels;

/// Weighted maximum-likelihood estimate of per-class Gaussian parameters
///
/// Returns a pair `(means, variances)` of `(C, d)` matrices, where row `k` belongs to the `k`-th
/// distinct label in ascending order. For every class and feature
///
/// ```text
/// mean     = sum(w_i * x_i) / sum(w_i)
/// variance = sum(w_i * (x_i - mean)^2) / sum(w_i)
/// ```
///
/// is computed over the samples of the class. Covariances are diagonal, no cross-feature moments
/// are estimated. Without `weights` every sample carries the same weight.
///
/// # Errors
///
/// * [`DimensionMismatch`](bayesboost::Error::DimensionMismatch) if records, labels and weights
/// disagree on the number of samples
/// * [`ZeroWeightMass`](NaiveBayesError::ZeroWeightMass) if all samples of a class have zero weight
/// * [`DegenerateVariance`](NaiveBayesError::DegenerateVariance) if an estimated variance is not
/// finite, for example because the records contain `NaN` or infinite values
pub fn ml_params<F: Float, L: Label + Ord>(
    x: ArrayView2<'_, F>,
    labels: ArrayView1<'_, L>,
    weights: Option<ArrayView1<'_, F>>,
) -> Result<(Array2<F>, Array2<F>)> {
    check_labels(x.nrows(), labels.len())?;
    let weights = resolve_sample_weights(x.nrows(), weights)?;
    let classes = labels.sorted_labels();

    class_moments(&classes, x, labels, weights.view())
}

/// Weighted first and second moments for already resolved classes and validated weights
pub(crate) fn class_moments<F: Float, L: Label>(
    classes: &[L],
    x: ArrayView2<'_, F>,
    labels: ArrayView1<'_, L>,
    weights: ArrayView1<'_, F>,
) -> Result<(Array2<F>, Array2<F>)> {
    let mut means = Array2::zeros((classes.len(), x.ncols()));
    let mut variances = Array2::zeros((classes.len(), x.ncols()));

    for (k, class) in classes.iter().enumerate() {
        let (xclass, wclass) = filter(x, labels, weights, class);

        let mass = wclass.sum();
        if !(mass > F::zero()) {
            return Err(NaiveBayesError::ZeroWeightMass(k));
        }

        let mean = wclass.dot(&xclass) / mass;
        let sq_dev = (&xclass - &mean).mapv(|v| v * v);
        let var = wclass.dot(&sq_dev) / mass;

        if let Some(feature) = var.iter().position(|v| !v.is_finite() || *v < F::zero()) {
            return Err(NaiveBayesError::DegenerateVariance { class: k, feature });
        }

        means.row_mut(k).assign(&mean);
        variances.row_mut(k).assign(&var);
    }

    Ok((means, variances))
}

// Rows and weights of all samples labeled with `class`
fn filter<F: Float, L: Label>(
    x: ArrayView2<'_, F>,
    labels: ArrayView1<'_, L>,
    weights: ArrayView1<'_, F>,
    class: &L,
) -> (Array2<F>, Array1<F>) {
    let index = labels
        .iter()
        .enumerate()
        .filter_map(|(i, label)| if label == class { Some(i) } else { None })
        .collect::<Vec<_>>();

    (x.select(Axis(0), &index), weights.select(Axis(0), &index))
}
