use super::{AsSingleTargets, Label, Labels};
use ndarray::{ArrayBase, ArrayView1, Data, Ix1};
use std::collections::HashSet;

impl<L, S: Data<Elem = L>> AsSingleTargets for ArrayBase<S, Ix1> {
    type Elem = L;

    fn as_single_targets(&self) -> ArrayView1<'_, L> {
        self.view()
    }
}

impl<L: Label, S: Data<Elem = L>> Labels for ArrayBase<S, Ix1> {
    type Elem = L;

    fn label_set(&self) -> HashSet<L> {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::{AsSingleTargets, Labels};
    use ndarray::array;

    #[test]
    fn labels_are_sorted_and_distinct() {
        let targets = array![7i32, -3, 7, 12, -3];

        assert_eq!(targets.sorted_labels(), vec![-3, 7, 12]);
        assert_eq!(targets.label_set().len(), 3);
        assert_eq!(targets.as_single_targets().len(), 5);
    }

    #[test]
    fn string_labels() {
        let targets = array!["setosa".to_string(), "virginica".into(), "setosa".into()];

        assert_eq!(
            targets.view().sorted_labels(),
            vec!["setosa".to_string(), "virginica".to_string()]
        );
    }
}
