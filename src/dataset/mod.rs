//! Datasets
//!
//! This module implements the dataset struct and various helper traits to extend its
//! functionality.
use ndarray::{Array1, ArrayBase, ArrayView, ArrayView1, Ix1, Ix2, OwnedRepr, ScalarOperand};

use num_traits::{FromPrimitive, NumAssignOps, NumCast};

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::Sum;

mod impl_dataset;
mod impl_records;
mod impl_targets;

pub use impl_dataset::resolve_sample_weights;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in records and sample
/// weights of a dataset.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq
    + 'static
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Discrete labels
///
/// Labels are countable, comparable and hashable. Integer labels do not have to be contiguous,
/// every algorithm maps the distinct labels of a dataset to class indices `0..C` in sorted order.
pub trait Label: PartialEq + Eq + Hash + Clone {}

impl Label for bool {}
impl Label for usize {}
impl Label for u8 {}
impl Label for u32 {}
impl Label for i32 {}
impl Label for i64 {}
impl Label for String {}
impl Label for &str {}
impl Label for Option<usize> {}

/// DatasetBase
///
/// This is the fundamental structure of a dataset. It contains a number of records about the data
/// and may contain targets, sample weights and feature names. The dataset base is generic over the
/// records and targets only. `weights` and `feature_names`, on the other hand, are always owned
/// and copied when views are created.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional array of labels with dimensionality (nsamples)
/// * `weights`: optional non-negative weights for each sample with dimensionality (nsamples). An
/// empty array means that no weights were given, see [`DatasetBase::sample_weights`]
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
pub struct DatasetBase<R, T>
where
    R: Records,
{
    pub records: R,
    pub targets: T,

    pub weights: Array1<R::Elem>,
    feature_names: Vec<String>,
}

/// Dataset
///
/// The most commonly used typed of dataset. It contains a number of records
/// stored as an `Array2` and each record corresponds to a single target.
pub type Dataset<D, T> = DatasetBase<ArrayBase<OwnedRepr<D>, Ix2>, ArrayBase<OwnedRepr<T>, Ix1>>;

/// DatasetView
///
/// A read only view of a Dataset
pub type DatasetView<'a, D, T> = DatasetBase<ArrayView<'a, D, Ix2>, ArrayView<'a, T, Ix1>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}

/// Return a view on a single target variable
pub trait AsSingleTargets {
    type Elem;

    /// Returns a view on the targets as one-dimensional array
    fn as_single_targets(&self) -> ArrayView1<'_, Self::Elem>;
}

/// Get the labels in all targets
pub trait Labels {
    type Elem: Label;

    fn label_set(&self) -> HashSet<Self::Elem>;

    fn labels(&self) -> Vec<Self::Elem> {
        self.label_set().into_iter().collect()
    }

    /// Distinct labels in ascending order
    ///
    /// The position of a label in this vector is its class index.
    fn sorted_labels(&self) -> Vec<Self::Elem>
    where
        Self::Elem: Ord,
    {
        let mut labels = self.labels();
        labels.sort_unstable();
        labels
    }
}
