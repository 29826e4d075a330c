use bayesboost::{Float, Label};
use ndarray::{Array1, Array2, ArrayView2};
use ndarray_stats::QuantileExt;

use crate::error::{NaiveBayesError, Result};

/// Predictions of a fitted naive Bayes model
///
/// Every method works with class indices `0..C`, where the `k`-th class is the `k`-th distinct
/// training label in ascending order.
pub trait NaiveBayes<F: Float, L: Label> {
    /// Compute the unnormalized class log-posteriors
    ///
    /// The result has shape `(n_samples, n_classes)`, entry `(i, k)` is the log of the class
    /// conditional likelihood of sample `i` times the prior of class `k`, up to a constant shared
    /// by all classes.
    fn log_posterior(&self, x: ArrayView2<F>) -> Result<Array2<F>>;

    /// Return the class index with the largest log-posterior for every sample
    ///
    /// Ties are resolved in favour of the lowest class index. Fails with
    /// [`Stats`](NaiveBayesError::Stats) when log-posteriors can't be ordered, which happens for
    /// records containing `NaN`.
    fn classify(&self, x: ArrayView2<F>) -> Result<Array1<usize>> {
        let log_posterior = self.log_posterior(x)?;

        log_posterior
            .rows()
            .into_iter()
            .map(|row| row.argmax().map_err(NaiveBayesError::from))
            .collect()
    }

    /// Compute log-probability estimates for each sample wrt classes
    ///
    /// Columns are in ascending label order.
    fn predict_log_proba(&self, x: ArrayView2<F>) -> Result<Array2<F>> {
        let mut log_prob = self.log_posterior(x)?;

        // log-sum-exp, shifted by the largest log-posterior of each sample
        for mut row in log_prob.rows_mut() {
            let max = row.fold(F::neg_infinity(), |acc, &v| acc.max(v));
            let log_evidence = max + row.mapv(|v| (v - max).exp()).sum().ln();
            row.mapv_inplace(|v| v - log_evidence);
        }

        Ok(log_prob)
    }

    /// Compute probability estimates for each sample wrt classes
    ///
    /// Columns are in ascending label order, every row sums up to one.
    fn predict_proba(&self, x: ArrayView2<F>) -> Result<Array2<F>> {
        Ok(self.predict_log_proba(x)?.mapv(F::exp))
    }
}
