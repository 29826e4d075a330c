//! Gaussian blobs for classification experiments

use bayesboost::Dataset;
use ndarray::{s, Array, Array1, Array2, ArrayBase, Data, Ix1, Ix2};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, StandardNormal},
    RandomExt,
};

/// Sample `blob_size` points around every row of `blob_centroids` with unit variance noise.
pub fn blobs(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    rng: &mut impl Rng,
) -> Array2<f64> {
    blobs_with_distribution(blob_size, blob_centroids, StandardNormal, rng)
}

/// Sample `blob_size` points around every row of `blob_centroids`
///
/// `blob_centroids` has shape `(n_blobs, n_features)`. Every feature of every point is offset
/// from its centroid by an independent draw of `distribution`. The records are returned blob
/// by blob, so rows `k * blob_size..(k + 1) * blob_size` belong to the `k`-th centroid.
pub fn blobs_with_distribution(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    distribution: impl Distribution<f64> + Clone,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let (n_blobs, n_features) = blob_centroids.dim();
    let mut records = Array2::zeros((n_blobs * blob_size, n_features));

    for (k, centroid) in blob_centroids.rows().into_iter().enumerate() {
        let blob = sample_blob(blob_size, &centroid, distribution.clone(), rng);
        records
            .slice_mut(s![k * blob_size..(k + 1) * blob_size, ..])
            .assign(&blob);
    }

    records
}

/// Labeled Gaussian blobs with unit variance
///
/// The label of a sample is the row index of its centroid in `blob_centroids`.
///
/// ```
/// use bayesboost_datasets::generate::labeled_blobs;
/// use ndarray::array;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let dataset = labeled_blobs(10, &array![[0., 0.], [5., 5.]], &mut rng);
///
/// assert_eq!(dataset.nsamples(), 20);
/// assert_eq!(dataset.targets()[15], 1);
/// ```
pub fn labeled_blobs(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    rng: &mut impl Rng,
) -> Dataset<f64, usize> {
    labeled_blobs_with_distribution(blob_size, blob_centroids, StandardNormal, rng)
}

/// Labeled blobs where the offsets from the centroids follow `distribution`
///
/// A wide distribution makes the blobs overlap, which is useful to generate classification
/// problems a single classifier cannot solve perfectly.
pub fn labeled_blobs_with_distribution(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    distribution: impl Distribution<f64> + Clone,
    rng: &mut impl Rng,
) -> Dataset<f64, usize> {
    let records = blobs_with_distribution(blob_size, blob_centroids, distribution, rng);
    let targets = (0..blob_centroids.nrows())
        .flat_map(|k| std::iter::repeat(k).take(blob_size))
        .collect::<Array1<_>>();

    Dataset::new(records, targets)
}

fn sample_blob(
    blob_size: usize,
    centroid: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    distribution: impl Distribution<f64>,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let noise: Array2<f64> = Array::random_using((blob_size, centroid.len()), distribution, rng);
    noise + centroid
}
