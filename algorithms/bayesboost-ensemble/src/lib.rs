//! # AdaBoost
//!
//! Boosting combines many weak classifiers into a strong one. The classifiers are trained in
//! sequence on the same records, each one on sample weights which emphasize the samples its
//! predecessors got wrong. Predictions are a vote of all classifiers, weighted by how well each
//! one did on its weighted training data.
//!
//! The ensemble is generic over its base classifier: any hyper-parameter set implementing
//! [`Fit`](bayesboost::traits::Fit) for weighted datasets, whose fitted model implements
//! [`PredictInplace`](bayesboost::traits::PredictInplace), can be boosted. The base classifier must
//! respect the sample weights attached with
//! [`DatasetBase::with_weights`](bayesboost::DatasetBase::with_weights), otherwise every round
//! trains the same model.
//!
//! ## Example
//!
//! Boosting Gaussian naive Bayes on two overlapping blobs:
//!
//! ```
//! use bayesboost::prelude::*;
//! use bayesboost_bayes::GaussianNb;
//! use bayesboost_ensemble::AdaBoostParams;
//! use ndarray::array;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let dataset = bayesboost_datasets::generate::labeled_blobs(50, &array![[0., 0.], [1.5, 1.5]], &mut rng);
//!
//! let model = AdaBoostParams::new(GaussianNb::params())
//!     .n_rounds(20)
//!     .fit(&dataset)?;
//!
//! let accuracy = model.predict(&dataset).confusion_matrix(&dataset)?.accuracy();
//! assert!(accuracy > 0.7);
//! # bayesboost_bayes::Result::Ok(())
//! ```
//!
//! ## Reference
//!
//! * [Scikit-Learn User Guide](https://scikit-learn.org/stable/modules/ensemble.html#adaboost)
mod algorithm;
mod hyperparams;

pub use algorithm::*;
pub use hyperparams::*;
