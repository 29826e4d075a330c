use approx::assert_abs_diff_eq;
use bayesboost::prelude::*;
use bayesboost_bayes::{compute_prior, ml_params, GaussianNb, NaiveBayes};
use bayesboost_datasets::generate;
use ndarray::{array, concatenate, s, Array1, Axis};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn integer_weights_match_duplicated_samples() -> bayesboost_bayes::Result<()> {
    let mut rng = SmallRng::seed_from_u64(11);
    let centroids = array![[0., 0.], [3., 1.]];
    let dataset = generate::labeled_blobs(20, &centroids, &mut rng);

    // duplicate the first ten samples of every class
    let records = concatenate![
        Axis(0),
        dataset.records().view(),
        dataset.records().slice(s![0..10, ..]),
        dataset.records().slice(s![20..30, ..])
    ];
    let targets = concatenate![
        Axis(0),
        dataset.targets().view(),
        dataset.targets().slice(s![0..10]),
        dataset.targets().slice(s![20..30])
    ];
    let duplicated = Dataset::new(records, targets);

    let mut weights = Array1::ones(40);
    weights.slice_mut(s![0..10]).fill(2.0);
    weights.slice_mut(s![20..30]).fill(2.0);
    let weighted = dataset.with_weights(weights);

    let a = GaussianNb::params().fit(&weighted)?;
    let b = GaussianNb::params().fit(&duplicated)?;

    assert_eq!(a.classes(), b.classes());
    assert_abs_diff_eq!(*a.priors(), *b.priors(), epsilon = 1e-12);
    assert_abs_diff_eq!(*a.means(), *b.means(), epsilon = 1e-12);
    assert_abs_diff_eq!(*a.variances(), *b.variances(), epsilon = 1e-12);

    Ok(())
}

#[test]
fn model_agrees_with_free_estimators() -> bayesboost_bayes::Result<()> {
    let mut rng = SmallRng::seed_from_u64(5);
    let centroids = array![[1., -1., 0.], [-2., 2., 4.], [6., 0., 1.]];
    let dataset = generate::labeled_blobs(15, &centroids, &mut rng);
    let weights = Array1::linspace(0.5, 1.5, 45);

    let prior = compute_prior(dataset.targets().view(), Some(weights.view()))?;
    let (means, variances) = ml_params(
        dataset.records().view(),
        dataset.targets().view(),
        Some(weights.view()),
    )?;

    let model = GaussianNb::params().fit(&dataset.with_weights(weights))?;

    assert_abs_diff_eq!(*model.priors(), prior);
    assert_abs_diff_eq!(*model.means(), means);
    assert_abs_diff_eq!(*model.variances(), variances);

    Ok(())
}

#[test]
fn single_precision_records() -> bayesboost_bayes::Result<()> {
    let x = array![[0.0f32, 5.0], [1.0, 5.5], [10.0, -5.0], [11.0, -5.5]];
    let y = array![false, false, true, true];
    let dataset = DatasetView::new(x.view(), y.view());

    let model = GaussianNb::params().fit(&dataset)?;

    assert_eq!(model.classes(), &[false, true]);
    assert_eq!(model.predict(&dataset), y);
    assert_abs_diff_eq!(*model.means(), array![[0.5f32, 5.25], [10.5, -5.25]]);

    let accuracy = model.predict(&x).confusion_matrix(&dataset)?.accuracy();
    assert_abs_diff_eq!(accuracy, 1.0);

    Ok(())
}

#[test]
fn separated_blobs_are_classified() -> bayesboost_bayes::Result<()> {
    let mut rng = SmallRng::seed_from_u64(42);
    let centroids = array![[-8., -8.], [8., 8.], [8., -8.]];
    let train = generate::labeled_blobs(50, &centroids, &mut rng);
    let test = generate::labeled_blobs(20, &centroids, &mut rng);

    let model = GaussianNb::params().fit(&train)?;
    let classes = model.classify(test.records().view())?;

    assert_eq!(classes, test.targets());

    Ok(())
}
