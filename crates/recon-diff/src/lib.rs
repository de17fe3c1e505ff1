//! Keyed set reconciliation for in-memory collections.
//!
//! Compares two finite ordered collections, matching elements whose
//! extracted comparison keys are equal, and partitions them into elements
//! present only on the left, matched pairs, and elements present only on
//! the right. The companion `recon-merge` crate applies such a partition
//! back onto the left collection.
//!
//! Matching is a pairwise key scan, O(|left| x |right|); the crate targets
//! small to moderate in-memory collections and deliberately does not scale
//! to streaming datasets.
//!
//! # Key Types
//!
//! - [`DiffResult`] / [`Matched`] -- the three-way partition
//! - [`diff`] -- identity keys, element equality
//! - [`diff_by_key`] / [`diff_by_key_hashed`] -- caller-extracted keys

pub mod result;
pub mod seq_diff;

pub use result::{DiffResult, Matched};
pub use seq_diff::{diff, diff_by_key, diff_by_key_hashed};
