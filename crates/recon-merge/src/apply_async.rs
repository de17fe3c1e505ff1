//! Asynchronous merge operators.
//!
//! Mirror the synchronous operators for factories and mappers that return
//! futures. Elements are processed strictly in order: each future is
//! awaited to completion before the next element is touched, so the
//! mutation order on the left collection matches the synchronous operators
//! exactly. There is no concurrent fan-out, and no cancellation beyond
//! what the caller's own futures provide.
//!
//! Async factories and mappers receive elements by value (clones): a
//! deferred computation cannot hold a borrow into the collection it will
//! later mutate.

use std::future::Future;

use tracing::debug;

use crate::editable::EditableDiff;

impl<'c, L, R> EditableDiff<'c, L, R> {
    /// Async form of [`merge_additions_with`]: synthesize a left element
    /// per right-only element, awaiting each factory call before the next.
    /// `None` results are skipped.
    ///
    /// [`merge_additions_with`]: EditableDiff::merge_additions_with
    pub async fn merge_additions_async<F, Fut>(&mut self, mut factory: F)
    where
        R: Clone,
        F: FnMut(R) -> Fut,
        Fut: Future<Output = Option<L>>,
    {
        let mut added = 0usize;
        for right in &self.result.only_right {
            if let Some(item) = factory(right.clone()).await {
                self.source_left.push(item);
                added += 1;
            }
        }
        debug!(added, "merged additions (async)");
    }

    /// Async form of the change merge: `map` receives clones of the
    /// matched pair and is awaited per pair, in order. Returning `None`
    /// leaves the pair's element untouched; returning `Some(new)` removes
    /// the original element and appends `new` at the end.
    pub async fn merge_changes_async<F, Fut>(&mut self, mut map: F)
    where
        L: Clone + PartialEq,
        R: Clone,
        F: FnMut(L, R) -> Fut,
        Fut: Future<Output = Option<L>>,
    {
        let mut bound = self.bind_pairs();
        let mut replaced = 0usize;
        for (pair_idx, pair) in self.result.both.iter().enumerate() {
            let Some(pos) = bound[pair_idx] else { continue };
            let current = self.source_left[pos].clone();
            if let Some(item) = map(current, pair.right.clone()).await {
                self.source_left.remove(pos);
                self.source_left.push(item);
                replaced += 1;
                for slot in bound.iter_mut().flatten() {
                    if *slot > pos {
                        *slot -= 1;
                    }
                }
            }
        }
        debug!(pairs = self.result.both.len(), replaced, "merged changes (async)");
    }

    /// Async form of [`merge_all_with`]: additions via `seed` plus the
    /// awaited `map`, then changes written back into each matched
    /// element's existing slot, then deletions. The order is strictly
    /// additions, changes, deletions.
    ///
    /// [`merge_all_with`]: EditableDiff::merge_all_with
    pub async fn merge_all_async<S, F, Fut>(&mut self, mut seed: S, mut map: F)
    where
        L: Clone + PartialEq,
        R: Clone,
        S: FnMut() -> L,
        F: FnMut(L, R) -> Fut,
        Fut: Future<Output = L>,
    {
        for right in &self.result.only_right {
            let item = map(seed(), right.clone()).await;
            self.source_left.push(item);
        }
        let bound = self.bind_pairs();
        for (pair_idx, pair) in self.result.both.iter().enumerate() {
            let Some(pos) = bound[pair_idx] else { continue };
            let current = self.source_left[pos].clone();
            self.source_left[pos] = map(current, pair.right.clone()).await;
        }
        self.merge_deletions();
    }
}
