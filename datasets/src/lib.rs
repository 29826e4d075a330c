//! `bayesboost-datasets` provides synthetic datasets used in the tests, benchmarks and demos of
//! the `bayesboost` workspace.
//!
//! ## Current State
//!
//! The [`generate`] module samples Gaussian blobs around given centroids, either as plain records
//! or as a labeled [`bayesboost::Dataset`] where the label of a sample is the index of its
//! centroid.
//!
//! ```ignore
//! let mut rng = SmallRng::seed_from_u64(42);
//! let dataset = bayesboost_datasets::generate::labeled_blobs(100, &centroids, &mut rng);
//! ```

pub mod generate;
