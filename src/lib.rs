//! `bayesboost` provides the shared vocabulary of a small classification toolkit: datasets
//! with per-sample weights, the `Fit`/`Predict` traits every classifier implements, checked
//! hyper-parameters and evaluation metrics.
//!
//! The algorithms live in their own crates:
//!
//! * `bayesboost-bayes`: Gaussian naive Bayes with weighted maximum-likelihood estimation
//! * `bayesboost-ensemble`: AdaBoost over any base classifier implementing `Fit` and
//!   `PredictInplace`
//!
//! Sample weights are first-class. A dataset may carry a non-negative weight for every sample
//! (see [`DatasetBase::with_weights`]), and weight-aware algorithms estimate their parameters
//! from the weighted sample. This is what lets a boosting meta-classifier re-train the same
//! base classifier on re-weighted copies of the training data.
//!
//! ```ignore
//! use bayesboost::prelude::*;
//!
//! let dataset = Dataset::new(records, targets).with_weights(weights);
//! let model = params.fit(&dataset)?;
//! let predictions = model.predict(&dataset);
//! let accuracy = predictions.confusion_matrix(&dataset)?.accuracy();
//! ```

pub mod dataset;
pub mod error;
mod metrics_classification;
pub mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, DatasetBase, DatasetView, Float, Label};
pub use error::Error;
pub use param_guard::ParamGuard;

/// Common metrics functions for classification
pub mod metrics {
    pub use crate::metrics_classification::{ConfusionMatrix, ToConfusionMatrix};
}
