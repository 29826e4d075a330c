use ndarray_stats::errors::MinMaxError;
use thiserror::Error;

/// Simplified `Result` using [`NaiveBayesError`](crate::NaiveBayesError) as error type
pub type Result<T> = std::result::Result<T, NaiveBayesError>;

/// Error variants from hyper-parameter construction or model estimation
#[derive(Error, Debug, Clone)]
pub enum NaiveBayesError {
    /// Error when comparing log-posteriors, e.g. for records containing `NaN`
    #[error("invalid statistical operation {0}")]
    Stats(#[from] MinMaxError),
    /// Invalid variance floor
    #[error("invalid variance floor {0}, must be positive and finite")]
    InvalidVarianceFloor(f64),
    /// The samples of a class carry no weight, its mean and variance are undefined
    #[error("class with index {0} has zero total sample weight")]
    ZeroWeightMass(usize),
    /// An estimated variance is negative or not finite
    #[error("degenerate variance for class with index {class} in feature {feature}")]
    DegenerateVariance { class: usize, feature: usize },
    #[error(transparent)]
    BaseCrate(#[from] bayesboost::Error),
}
