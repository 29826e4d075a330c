use super::Records;
use ndarray::{ArrayBase, Axis, Data, Ix2};

/// Implement records for NdArrays
impl<S: Data> Records for ArrayBase<S, Ix2> {
    type Elem = S::Elem;

    fn nsamples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn nfeatures(&self) -> usize {
        self.len_of(Axis(1))
    }
}
