#![doc = include_str!("../README.md")]

mod base_nb;
mod error;
mod gaussian_nb;
mod gaussian_params;
mod hyperparams;
mod prior;

pub use base_nb::NaiveBayes;
pub use error::{NaiveBayesError, Result};
pub use gaussian_nb::GaussianNb;
pub use gaussian_params::ml_params;
pub use hyperparams::{GaussianNbParams, GaussianNbValidParams};
pub use prior::compute_prior;
