//! The partition data model produced by a diff.
//!
//! A [`DiffResult`] holds the three partitions; it is a read-only value and
//! never references the collections it was computed from. Partitions hold
//! clones of the input elements, in the input iteration order.

/// One element from each side whose comparison keys compare equal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matched<L, R> {
    /// The element of the left collection.
    pub left: L,
    /// The element of the right collection.
    pub right: R,
}

impl<L, R> Matched<L, R> {
    /// Pair a left element with its equal-keyed right counterpart.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

/// The result of comparing two collections.
///
/// Every left element lands in exactly one of `only_left` or `both`, and
/// every right element in exactly one of `only_right` or `both`, provided
/// neither side carries duplicate keys. All three partitions preserve the
/// original iteration order of their side.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffResult<L, R> {
    /// Elements present only in the left collection.
    pub only_left: Vec<L>,
    /// Matched pairs, one per left element that found an equal-keyed right
    /// element, in left iteration order.
    pub both: Vec<Matched<L, R>>,
    /// Elements present only in the right collection.
    pub only_right: Vec<R>,
}

impl<L, R> DiffResult<L, R> {
    /// Create an empty diff result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when both collections contain the same key set:
    /// nothing to add, nothing to delete.
    pub fn is_unchanged(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }

    /// Number of right-only elements (candidates for addition).
    pub fn additions(&self) -> usize {
        self.only_right.len()
    }

    /// Number of left-only elements (candidates for deletion).
    pub fn deletions(&self) -> usize {
        self.only_left.len()
    }

    /// Number of matched pairs.
    pub fn matches(&self) -> usize {
        self.both.len()
    }
}

impl<L, R> Default for DiffResult<L, R> {
    fn default() -> Self {
        Self {
            only_left: Vec::new(),
            both: Vec::new(),
            only_right: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiffResult<i32, i32> {
        DiffResult {
            only_left: vec![1, 2],
            both: vec![Matched::new(3, 3), Matched::new(4, 4)],
            only_right: vec![5, 6],
        }
    }

    #[test]
    fn empty_result_is_unchanged() {
        let result: DiffResult<i32, i32> = DiffResult::new();
        assert!(result.is_unchanged());
        assert_eq!(result.matches(), 0);
    }

    #[test]
    fn counts_track_partitions() {
        let result = sample();
        assert_eq!(result.additions(), 2);
        assert_eq!(result.deletions(), 2);
        assert_eq!(result.matches(), 2);
        assert!(!result.is_unchanged());
    }

    #[test]
    fn matched_only_is_unchanged() {
        let result: DiffResult<i32, i32> = DiffResult {
            only_left: Vec::new(),
            both: vec![Matched::new(1, 1)],
            only_right: Vec::new(),
        };
        assert!(result.is_unchanged());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let back: DiffResult<i32, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
