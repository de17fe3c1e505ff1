//! The editable diff: a partition that retains a live, mutable reference
//! to the left collection it was computed from.

use recon_diff::{diff_by_key, DiffResult, Matched};

/// The result of comparing two collections, retaining the owning reference
/// to the left collection so merge operators can mutate it in place.
///
/// Constructed by [`diff_mut`] or [`diff_mut_by_key`]. The caller keeps
/// ownership of the left collection; the borrow is released when this
/// value is dropped. The right collection is snapshotted for informational
/// access and never mutated.
#[derive(Debug)]
pub struct EditableDiff<'c, L, R> {
    pub(crate) source_left: &'c mut Vec<L>,
    pub(crate) source_right: Vec<R>,
    pub(crate) result: DiffResult<L, R>,
}

/// Compare a mutable collection against a second one of the same element
/// type, using each element as its own comparison key.
pub fn diff_mut<'c, T>(left: &'c mut Vec<T>, right: &[T]) -> EditableDiff<'c, T, T>
where
    T: Clone + PartialEq,
{
    diff_mut_by_key(left, right, |l| l.clone(), |r| r.clone())
}

/// Compare a mutable collection against a second one based on matching
/// keys, keeping the left collection editable through the returned
/// [`EditableDiff`].
pub fn diff_mut_by_key<'c, L, R, K, FL, FR>(
    left: &'c mut Vec<L>,
    right: &[R],
    left_key: FL,
    right_key: FR,
) -> EditableDiff<'c, L, R>
where
    L: Clone,
    R: Clone,
    K: PartialEq,
    FL: FnMut(&L) -> K,
    FR: FnMut(&R) -> K,
{
    let result = diff_by_key(left.as_slice(), right, left_key, right_key);
    EditableDiff {
        source_left: left,
        source_right: right.to_vec(),
        result,
    }
}

impl<'c, L, R> EditableDiff<'c, L, R> {
    /// The underlying partition.
    pub fn result(&self) -> &DiffResult<L, R> {
        &self.result
    }

    /// Elements present only in the left collection.
    pub fn only_left(&self) -> &[L] {
        &self.result.only_left
    }

    /// Matched pairs, in left iteration order.
    pub fn both(&self) -> &[Matched<L, R>] {
        &self.result.both
    }

    /// Elements present only in the right collection.
    pub fn only_right(&self) -> &[R] {
        &self.result.only_right
    }

    /// Current contents of the left collection being merged into.
    pub fn source_left(&self) -> &[L] {
        self.source_left
    }

    /// Snapshot of the right collection the diff was computed against.
    pub fn source_right(&self) -> &[R] {
        &self.source_right
    }

    /// Release the borrow on the left collection, keeping the partition.
    pub fn into_result(self) -> DiffResult<L, R> {
        self.result
    }

    /// Invoke `action` once per right-only element, in order. No mutation.
    pub fn for_each_addition<F>(&mut self, mut action: F) -> &mut Self
    where
        F: FnMut(&R),
    {
        for right in &self.result.only_right {
            action(right);
        }
        self
    }

    /// Invoke `action` once per matched pair, in order, right element
    /// first. No mutation.
    pub fn for_each_change<F>(&mut self, mut action: F) -> &mut Self
    where
        F: FnMut(&R, &L),
    {
        for pair in &self.result.both {
            action(&pair.right, &pair.left);
        }
        self
    }

    /// Invoke `action` once per left-only element, in order. No mutation.
    pub fn for_each_deletion<F>(&mut self, mut action: F) -> &mut Self
    where
        F: FnMut(&L),
    {
        for left in &self.result.only_left {
            action(left);
        }
        self
    }

    /// Bind each matched pair to a distinct element of the source
    /// collection: the first unclaimed element equal to the pair's left
    /// member. Resolved before any mutation, so in-place updates cannot
    /// re-bind later pairs. `None` for pairs whose element is no longer
    /// present.
    pub(crate) fn bind_pairs(&self) -> Vec<Option<usize>>
    where
        L: PartialEq,
    {
        let mut claimed = vec![false; self.source_left.len()];
        self.result
            .both
            .iter()
            .map(|pair| {
                let pos = self
                    .source_left
                    .iter()
                    .enumerate()
                    .find(|(idx, item)| !claimed[*idx] && **item == pair.left)
                    .map(|(idx, _)| idx);
                if let Some(idx) = pos {
                    claimed[idx] = true;
                }
                pos
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<i32>, Vec<i32>) {
        (vec![1, 2, 3, 4], vec![3, 4, 5, 6])
    }

    #[test]
    fn partitions_and_sources_line_up() {
        let (mut left, right) = sample();
        let diff = diff_mut(&mut left, &right);

        assert_eq!(diff.only_left(), &[1, 2]);
        assert_eq!(diff.only_right(), &[5, 6]);
        let lefts: Vec<i32> = diff.both().iter().map(|p| p.left).collect();
        assert_eq!(lefts, vec![3, 4]);
        assert_eq!(diff.source_left(), &[1, 2, 3, 4]);
        assert_eq!(diff.source_right(), right.as_slice());
    }

    #[test]
    fn visitors_run_in_partition_order() {
        let (mut left, right) = sample();
        let mut additions = Vec::new();
        let mut changes = Vec::new();
        let mut deletions = Vec::new();

        diff_mut(&mut left, &right)
            .for_each_addition(|r| additions.push(*r))
            .for_each_change(|r, l| changes.push((*r, *l)))
            .for_each_deletion(|l| deletions.push(*l));

        assert_eq!(additions, vec![5, 6]);
        assert_eq!(changes, vec![(3, 3), (4, 4)]);
        assert_eq!(deletions, vec![1, 2]);
    }

    #[test]
    fn visitors_do_not_mutate() {
        let (mut left, right) = sample();
        diff_mut(&mut left, &right)
            .for_each_addition(|_| {})
            .for_each_change(|_, _| {})
            .for_each_deletion(|_| {});
        assert_eq!(left, vec![1, 2, 3, 4]);
    }

    #[test]
    fn into_result_releases_the_borrow() {
        let (mut left, right) = sample();
        let result = diff_mut(&mut left, &right).into_result();
        left.push(9);
        assert_eq!(result.only_right, vec![5, 6]);
        assert_eq!(left, vec![1, 2, 3, 4, 9]);
    }

    #[test]
    fn bind_pairs_claims_distinct_elements() {
        let mut left = vec![7, 7];
        let right = vec![7, 7];
        let diff = diff_mut(&mut left, &right);

        // Both pairs carry the same left value; each must claim its own slot.
        assert_eq!(diff.bind_pairs(), vec![Some(0), Some(1)]);
    }
}
