use crate::AdaBoostValidParams;
use bayesboost::{
    dataset::{AsSingleTargets, Labels, Records},
    error::Error,
    traits::*,
    DatasetBase, Float, Label,
};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix2, Zip};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A fitted AdaBoost ensemble classifier
///
/// ## Structure
///
/// AdaBoost (Adaptive Boosting) combines a sequence of base classifiers into a weighted vote.
/// The classifiers are trained one after another on the same records, every round increases the
/// sample weights of the samples misclassified so far. Each classifier `M` carries a vote weight
/// (alpha) derived from its weighted training error.
///
/// ## Algorithm Overview
///
/// Given a [DatasetBase] with `n` samples:
/// 1. Initialize the sample weights `w` with the dataset weights, or uniformly with `1/n`
/// 2. For each round `t` from 1 to `n_rounds`:
///    a. Fit the base classifier on the records weighted by `w`
///    b. Compute the weighted error `err` of its predictions on the training records
///    c. Derive the vote weight `alpha = 0.5 * (ln(1 - err) - ln(err))` from the clamped error
///    d. Multiply the weights of misclassified samples by `exp(alpha)`, of all other samples by
///       `exp(-alpha)` and renormalize
///    e. Stop early if the unclamped error is below `stop_threshold`
///
/// ## Prediction Algorithm
///
/// Every classifier adds its alpha to the tally of the class it predicts, the class with the
/// largest tally wins. Ties go to the smallest label. An ensemble consisting of a single
/// classifier predicts exactly like that classifier.
///
/// ## Example
///
/// ```
/// use bayesboost::prelude::*;
/// use bayesboost_bayes::GaussianNb;
/// use bayesboost_ensemble::AdaBoostParams;
/// use ndarray::array;
///
/// let x = array![[0.0], [1.0], [2.0], [3.0], [4.0], [5.0]];
/// let y = array![0usize, 0, 0, 1, 1, 1];
/// let dataset = Dataset::new(x, y);
///
/// let model = AdaBoostParams::new(GaussianNb::params())
///     .n_rounds(5)
///     .fit(&dataset)?;
///
/// assert!(model.n_rounds() <= 5);
/// assert_eq!(model.predict(&array![[-1.0], [6.0]]), array![0usize, 1]);
/// # bayesboost_bayes::Result::Ok(())
/// ```
///
/// ## References
///
/// * Freund, Y., & Schapire, R. E. (1997). A decision-theoretic generalization of on-line learning
///   and an application to boosting. Journal of Computer and System Sciences, 55(1), 119-139.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct AdaBoost<M, L> {
    models: Vec<M>,
    alphas: Vec<f64>,
    classes: Vec<L>,
    training_errors: Vec<f64>,
}

impl<M, L> AdaBoost<M, L> {
    /// The fitted base classifiers in training order
    pub fn models(&self) -> &[M] {
        &self.models
    }

    /// The vote weight of every classifier
    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    /// Distinct training labels in ascending order
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Returns the number of trained rounds, at most `n_rounds` of the parameter set
    pub fn n_rounds(&self) -> usize {
        self.models.len()
    }

    /// The unclamped weighted training error of every round
    pub fn training_errors(&self) -> &[f64] {
        &self.training_errors
    }
}

impl<F, L, D, T, P, E> Fit<ArrayBase<D, Ix2>, T, E> for AdaBoostValidParams<P>
where
    F: Float,
    L: Label + Ord,
    D: Data<Elem = F>,
    T: AsSingleTargets<Elem = L> + Labels<Elem = L>,
    P: Fit<Array2<F>, Array1<L>, E>,
    P::Object: PredictInplace<Array2<F>, Array1<L>>,
    E: std::error::Error + From<Error>,
{
    type Object = AdaBoost<P::Object, L>;

    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object, E> {
        dataset.check_dimensions()?;

        let mut weights = dataset.sample_weights()?.mapv(<f64 as Float>::cast);
        let total = weights.sum();
        weights /= total;

        let classes = dataset.sorted_labels();
        let targets = dataset.as_single_targets();

        // owned copy of the training data, only its weights change between rounds
        let mut train = DatasetBase::new(dataset.records().to_owned(), targets.to_owned())
            .with_feature_names(dataset.feature_names().to_vec());

        let mut models = Vec::with_capacity(self.n_rounds());
        let mut alphas = Vec::with_capacity(self.n_rounds());
        let mut training_errors = Vec::with_capacity(self.n_rounds());

        for round in 1..=self.n_rounds() {
            train.weights = weights.mapv(F::cast);
            let model = self.model_params().fit(&train)?;

            let mut predictions = model.default_target(&train.records);
            model.predict_inplace(&train.records, &mut predictions);
            let missed = Zip::from(&predictions)
                .and(&targets)
                .map_collect(|prediction, target| prediction != target);

            let error = Zip::from(&weights)
                .and(&missed)
                .fold(0.0f64, |acc, w, &wrong| if wrong { acc + *w } else { acc });
            let clamped = error
                .max(self.error_floor())
                .min(1.0 - self.error_floor());
            let alpha = 0.5 * ((1.0 - clamped).ln() - clamped.ln());

            log::debug!(
                "round {}: weighted error {:.3e} (clamped {:.3e}), alpha {:.4}",
                round,
                error,
                clamped,
                alpha
            );
            if alpha < 0.0 {
                log::warn!(
                    "classifier of round {} is worse than chance with weighted error {:.4}",
                    round,
                    error
                );
            }

            let (hit, miss) = ((-alpha).exp(), alpha.exp());
            Zip::from(&mut weights)
                .and(&missed)
                .for_each(|w, &wrong| *w *= if wrong { miss } else { hit });
            let total = weights.sum();
            weights /= total;

            models.push(model);
            alphas.push(alpha);
            training_errors.push(error);

            if error < self.stop_threshold() {
                log::info!(
                    "stopping after round {} of {}, weighted error {:.3e} is below {:.3e}",
                    round,
                    self.n_rounds(),
                    error,
                    self.stop_threshold()
                );
                break;
            }
        }

        Ok(AdaBoost {
            models,
            alphas,
            classes,
            training_errors,
        })
    }
}

/// Combine the predictions of `models` by a vote weighted with `alphas`
///
/// For every sample the alpha of a model is added to the tally of the class the model predicts,
/// the class with the largest tally is returned. `classes` fixes the tie-break order: on equal
/// tallies the class appearing first wins. Predictions outside of `classes` receive no vote.
/// A single model is not voted, its predictions are returned directly.
///
/// # Panics
///
/// If `models` is empty or `models` and `alphas` differ in length.
pub fn classify_boost<R, L, M>(x: &R, models: &[M], alphas: &[f64], classes: &[L]) -> Array1<L>
where
    R: Records,
    L: Label,
    M: PredictInplace<R, Array1<L>>,
{
    assert_eq!(
        models.len(),
        alphas.len(),
        "Every model must have exactly one vote weight."
    );

    let predict = |model: &M| {
        let mut y = model.default_target(x);
        model.predict_inplace(x, &mut y);
        y
    };

    match models {
        [] => panic!("An ensemble must contain at least one model."),
        [model] => predict(model),
        _ => {
            let index = classes
                .iter()
                .enumerate()
                .map(|(k, class)| (class, k))
                .collect::<HashMap<_, _>>();

            let mut tally = Array2::<f64>::zeros((x.nsamples(), classes.len()));
            for (model, alpha) in models.iter().zip(alphas) {
                let predictions = predict(model);
                for (mut votes, label) in tally.rows_mut().into_iter().zip(predictions.iter()) {
                    if let Some(&k) = index.get(label) {
                        votes[k] += alpha;
                    }
                }
            }

            tally
                .rows()
                .into_iter()
                .map(|votes| {
                    let mut best = 0;
                    for k in 1..votes.len() {
                        if votes[k] > votes[best] {
                            best = k;
                        }
                    }
                    classes[best].clone()
                })
                .collect()
        }
    }
}

impl<R, L, M> PredictInplace<R, Array1<L>> for AdaBoost<M, L>
where
    R: Records,
    L: Label,
    M: PredictInplace<R, Array1<L>>,
{
    fn predict_inplace(&self, x: &R, y: &mut Array1<L>) {
        assert_eq!(
            x.nsamples(),
            y.len(),
            "The number of data points must match the number of output targets."
        );

        y.assign(&classify_boost(x, &self.models, &self.alphas, &self.classes));
    }

    fn default_target(&self, x: &R) -> Array1<L> {
        self.models[0].default_target(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdaBoostParams;
    use approx::assert_abs_diff_eq;
    use bayesboost::Dataset;
    use bayesboost_bayes::{GaussianNb, NaiveBayesError};
    use ndarray::array;

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<AdaBoost<GaussianNb<f64, usize>, usize>>();
        has_autotraits::<AdaBoostValidParams<bayesboost_bayes::GaussianNbParams<f64, usize>>>();
        has_autotraits::<AdaBoostParams<bayesboost_bayes::GaussianNbParams<f64, usize>>>();
    }

    #[test]
    fn single_round_is_the_base_classifier() -> Result<(), NaiveBayesError> {
        let dataset = Dataset::new(
            array![[0.0], [1.0], [2.0], [3.5], [4.0], [5.0]],
            array![0usize, 0, 1, 0, 1, 1],
        );

        let base = GaussianNb::params().fit(&dataset)?;
        let boosted = AdaBoostParams::new(GaussianNb::params())
            .n_rounds(1)
            .fit(&dataset)?;

        assert_eq!(boosted.n_rounds(), 1);
        assert_eq!(boosted.alphas().len(), 1);
        let first = &boosted.models()[0];
        assert_eq!(first.classes(), base.classes());
        assert_abs_diff_eq!(*first.priors(), *base.priors(), epsilon = 1e-12);
        assert_abs_diff_eq!(*first.means(), *base.means(), epsilon = 1e-12);
        assert_abs_diff_eq!(*first.variances(), *base.variances(), epsilon = 1e-12);

        let test = array![[-3.0], [1.5], [2.5], [3.0], [9.0]];
        assert_eq!(boosted.predict(&test), base.predict(&test));

        Ok(())
    }

    #[test]
    fn first_round_alpha_follows_the_error() -> Result<(), NaiveBayesError> {
        // one outlier out of four samples, the weighted error of the first round is 1/4
        let dataset = Dataset::new(
            array![[0.0], [0.1], [10.0], [0.05]],
            array![0usize, 0, 1, 1],
        );

        let model = AdaBoostParams::new(GaussianNb::params())
            .n_rounds(1)
            .fit(&dataset)?;

        let expected = 0.5 * ((1.0f64 - 0.25).ln() - 0.25f64.ln());
        assert_abs_diff_eq!(model.training_errors()[0], 0.25);
        assert_abs_diff_eq!(model.alphas()[0], expected, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn weighted_vote() {
        // three constant classifiers voting for class 2, 5 and 5
        let models = [Constant(2), Constant(5), Constant(5)];
        let x = Array2::<f64>::zeros((2, 1));

        let prediction = classify_boost(&x, &models, &[1.0, 0.3, 0.4], &[2, 5]);
        assert_eq!(prediction, array![2, 2]);

        let prediction = classify_boost(&x, &models, &[1.0, 0.6, 0.5], &[2, 5]);
        assert_eq!(prediction, array![5, 5]);

        // equal tallies go to the first class
        let prediction = classify_boost(&x, &models, &[1.0, 0.5, 0.5], &[2, 5]);
        assert_eq!(prediction, array![2, 2]);
    }

    #[test]
    fn single_model_is_not_voted() {
        // a label outside of `classes` would never win a vote
        let x = Array2::<f64>::zeros((3, 2));
        let prediction = classify_boost(&x, &[Constant(7)], &[-1.0], &[1, 2]);

        assert_eq!(prediction, array![7, 7, 7]);
    }

    struct Constant(i32);

    impl PredictInplace<Array2<f64>, Array1<i32>> for Constant {
        fn predict_inplace(&self, _x: &Array2<f64>, y: &mut Array1<i32>) {
            y.fill(self.0);
        }

        fn default_target(&self, x: &Array2<f64>) -> Array1<i32> {
            Array1::zeros(x.nrows())
        }
    }
}
