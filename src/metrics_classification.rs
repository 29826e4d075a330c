//! Common metrics for performance evaluation of classifier
//!
//! Scoring is essential for classification tasks. This module implements a confusion matrix
//! together with accuracy, precision and recall derived from it.
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ndarray::prelude::*;
use ndarray::Data;

use crate::dataset::AsSingleTargets;
use crate::error::{Error, Result};

/// Confusion matrix for multi-label evaluation
///
/// A confusion matrix shows predictions in a matrix, where rows correspond to target and columns
/// to predicted. The diagonal entries are correct predictions.
#[derive(Clone, PartialEq)]
pub struct ConfusionMatrix<A> {
    matrix: Array2<usize>,
    members: Array1<A>,
}

impl<A> ConfusionMatrix<A> {
    /// Calculate precision for every class
    ///
    /// Classes which were never predicted have a precision of `NaN`.
    pub fn precision(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(0));

        self.matrix
            .diag()
            .iter()
            .zip(sum.iter())
            .map(|(a, b)| *a as f32 / *b as f32)
            .collect()
    }

    /// Calculate recall for every class
    pub fn recall(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(1));

        self.matrix
            .diag()
            .iter()
            .zip(sum.iter())
            .map(|(a, b)| *a as f32 / *b as f32)
            .collect()
    }

    /// Return mean accuracy
    pub fn accuracy(&self) -> f32 {
        self.matrix.diag().sum() as f32 / self.matrix.sum() as f32
    }

    /// Return the classes in row/column order
    pub fn members(&self) -> ArrayView1<'_, A> {
        self.members.view()
    }

    /// Return the raw counts, rows are targets and columns predictions
    pub fn counts(&self) -> ArrayView2<'_, usize> {
        self.matrix.view()
    }
}

/// Print a confusion matrix
impl<A: fmt::Display> fmt::Debug for ConfusionMatrix<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = self.matrix.len_of(Axis(0));
        writeln!(f)?;
        write!(f, "{: <10}", "classes")?;
        for i in 0..len {
            write!(f, " | {: <10}", self.members[i])?;
        }
        writeln!(f)?;

        for i in 0..len {
            write!(f, "{: <10}", self.members[i])?;

            for j in 0..len {
                write!(f, " | {: <10}", self.matrix[(i, j)])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Classification for multi-label evaluation
///
/// Contains a routine to calculate the confusion matrix, all other scores are derived form it.
pub trait ToConfusionMatrix<A, T> {
    fn confusion_matrix(&self, ground_truth: T) -> Result<ConfusionMatrix<A>>;
}

impl<'a, A, S, T> ToConfusionMatrix<A, &'a T> for ArrayBase<S, Ix1>
where
    A: Clone + Ord + Hash,
    S: Data<Elem = A>,
    T: AsSingleTargets<Elem = A>,
{
    fn confusion_matrix(&self, ground_truth: &'a T) -> Result<ConfusionMatrix<A>> {
        let ground_truth = ground_truth.as_single_targets();
        if ground_truth.len() != self.len() {
            return Err(Error::DimensionMismatch {
                what: "predictions",
                expected: ground_truth.len(),
                found: self.len(),
            });
        }

        let mut classes = ground_truth
            .iter()
            .chain(self.iter())
            .cloned()
            .collect::<Vec<_>>();
        classes.sort_unstable();
        classes.dedup();

        // create a map from class label to index
        let indices = classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (class, idx))
            .collect::<HashMap<_, usize>>();

        let mut confusion_matrix = Array2::zeros((classes.len(), classes.len()));
        for (truth, prediction) in ground_truth.iter().zip(self.iter()) {
            confusion_matrix[(indices[truth], indices[prediction])] += 1;
        }

        Ok(ConfusionMatrix {
            matrix: confusion_matrix,
            members: Array1::from(classes),
        })
    }
}
