use bayesboost::prelude::*;
use bayesboost_bayes::{GaussianNb, NaiveBayesError};
use bayesboost_datasets::generate;
use bayesboost_ensemble::AdaBoostParams;
use ndarray::array;
use ndarray_rand::rand_distr::Normal;
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> std::result::Result<(), NaiveBayesError> {
    env_logger::init();

    // three overlapping blobs, a single Gaussian per class can't separate them perfectly
    let mut rng = SmallRng::seed_from_u64(42);
    let centroids = array![[0., 0.], [2., 1.], [1., 2.5]];
    let spread = Normal::new(0., 1.2).unwrap();
    let train = generate::labeled_blobs_with_distribution(200, &centroids, spread, &mut rng);
    let test = generate::labeled_blobs_with_distribution(100, &centroids, spread, &mut rng);

    println!("Training Gaussian naive Bayes ...");
    let single = GaussianNb::params().fit(&train)?;
    let cm = single.predict(&test).confusion_matrix(&test)?;
    println!("{:?}", cm);
    println!("Test accuracy of naive Bayes: {:.2}%", 100.0 * cm.accuracy());

    println!("Training AdaBoost over Gaussian naive Bayes ...");
    let boosted = AdaBoostParams::new(GaussianNb::params())
        .n_rounds(20)
        .fit(&train)?;

    for (round, (alpha, error)) in boosted
        .alphas()
        .iter()
        .zip(boosted.training_errors())
        .enumerate()
    {
        println!(
            "round {:>2}: weighted error {:.4}, alpha {:.4}",
            round + 1,
            error,
            alpha
        );
    }

    let cm = boosted.predict(&test).confusion_matrix(&test)?;
    println!("{:?}", cm);
    println!(
        "Test accuracy of AdaBoost with {} rounds: {:.2}%",
        boosted.n_rounds(),
        100.0 * cm.accuracy()
    );

    Ok(())
}
