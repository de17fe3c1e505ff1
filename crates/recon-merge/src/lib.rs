//! Merge operators that apply a keyed diff back onto the owning collection.
//!
//! [`diff_mut`] and [`diff_mut_by_key`] compare a mutable left collection
//! against a right collection and return an [`EditableDiff`] that keeps a
//! live `&mut` reference to the left side. Merge operators then mutate the
//! left collection in place: append synthesized elements for right-only
//! entries, update or replace matched elements, and remove left-only
//! entries. Synchronous operators return `&mut Self` for chaining;
//! asynchronous operators await each element to completion before touching
//! the next, so their mutation order matches the synchronous ones exactly.
//!
//! The left collection must not be mutated by anyone else while an
//! operator runs; each operator call assumes exclusive access.
//!
//! # Key Types
//!
//! - [`EditableDiff`] -- partition plus the owning left reference
//! - [`ChangeOutcome`] -- per-pair verdict of a change mapper
//! - [`diff_mut`] / [`diff_mut_by_key`] -- entry points
//! - [`next_id`] / [`next_id_from`] -- identifier allocation for factories

pub mod apply;
mod apply_async;
pub mod editable;
pub mod ids;

pub use apply::ChangeOutcome;
pub use editable::{diff_mut, diff_mut_by_key, EditableDiff};
pub use ids::{next_id, next_id_from};
