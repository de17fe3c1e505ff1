//! Keyed two-sequence matching.
//!
//! Every left element scans the right sequence for the first element whose
//! extracted key compares equal; the first equal-keyed right element wins
//! and later equal-keyed right elements are ignored for that left element.
//! Inputs are never mutated.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::result::{DiffResult, Matched};

/// Compare two sequences of the same element type, using each element as
/// its own comparison key.
pub fn diff<T>(left: &[T], right: &[T]) -> DiffResult<T, T>
where
    T: Clone + PartialEq,
{
    diff_by_key(left, right, |l| l.clone(), |r| r.clone())
}

/// Compare two sequences based on matching keys.
///
/// `left_key` and `right_key` are total functions mapping an element to its
/// comparison key; they must hold for every element of their sequence. Keys
/// only need `PartialEq`, so the scan is pairwise: O(|left| x |right|).
///
/// Ordering guarantees: `only_left` and `both` follow left iteration order,
/// `only_right` follows right iteration order. If either sequence is empty
/// the other lands in its only-partition wholesale.
pub fn diff_by_key<L, R, K, FL, FR>(
    left: &[L],
    right: &[R],
    mut left_key: FL,
    mut right_key: FR,
) -> DiffResult<L, R>
where
    L: Clone,
    R: Clone,
    K: PartialEq,
    FL: FnMut(&L) -> K,
    FR: FnMut(&R) -> K,
{
    if left.is_empty() || right.is_empty() {
        return DiffResult {
            only_left: left.to_vec(),
            both: Vec::new(),
            only_right: right.to_vec(),
        };
    }

    let right_keys: Vec<K> = right.iter().map(&mut right_key).collect();

    let mut only_left = Vec::new();
    let mut both = Vec::new();
    // Positions of the right elements claimed by matched pairs. A position
    // may repeat when several left elements share a key.
    let mut matched: Vec<usize> = Vec::new();

    for item in left {
        let key = left_key(item);
        match right_keys.iter().position(|rk| *rk == key) {
            Some(pos) => {
                both.push(Matched::new(item.clone(), right[pos].clone()));
                matched.push(pos);
            }
            None => only_left.push(item.clone()),
        }
    }

    let only_right = right
        .iter()
        .zip(&right_keys)
        .filter(|(_, key)| !matched.iter().any(|&pos| right_keys[pos] == **key))
        .map(|(item, _)| item.clone())
        .collect();

    DiffResult {
        only_left,
        both,
        only_right,
    }
}

/// Compare two sequences based on matching keys, using a hash index over
/// the right sequence.
///
/// Behaves exactly like [`diff_by_key`], including the first-match
/// tie-break for duplicate right keys, but requires `K: Eq + Hash` and runs
/// in O(|left| + |right|).
pub fn diff_by_key_hashed<L, R, K, FL, FR>(
    left: &[L],
    right: &[R],
    mut left_key: FL,
    mut right_key: FR,
) -> DiffResult<L, R>
where
    L: Clone,
    R: Clone,
    K: Eq + Hash,
    FL: FnMut(&L) -> K,
    FR: FnMut(&R) -> K,
{
    if left.is_empty() || right.is_empty() {
        return DiffResult {
            only_left: left.to_vec(),
            both: Vec::new(),
            only_right: right.to_vec(),
        };
    }

    let right_keys: Vec<K> = right.iter().map(&mut right_key).collect();

    // First occurrence per key, preserving the scan tie-break.
    let mut first_by_key: HashMap<&K, usize> = HashMap::with_capacity(right.len());
    for (pos, key) in right_keys.iter().enumerate() {
        first_by_key.entry(key).or_insert(pos);
    }

    let mut only_left = Vec::new();
    let mut both = Vec::new();
    let mut matched_keys: HashSet<&K> = HashSet::new();

    for item in left {
        let key = left_key(item);
        match first_by_key.get(&key) {
            Some(&pos) => {
                both.push(Matched::new(item.clone(), right[pos].clone()));
                matched_keys.insert(&right_keys[pos]);
            }
            None => only_left.push(item.clone()),
        }
    }

    let only_right = right
        .iter()
        .zip(&right_keys)
        .filter(|(_, key)| !matched_keys.contains(key))
        .map(|(item, _)| item.clone())
        .collect();

    DiffResult {
        only_left,
        both,
        only_right,
    }
}
