//! Synchronous merge operators.
//!
//! All operators mutate the left collection referenced by the
//! [`EditableDiff`] and return `&mut Self` for chaining. A failure inside
//! a caller-supplied callback propagates immediately; mutations already
//! applied by earlier loop iterations are kept (no rollback).

use tracing::debug;

use crate::editable::EditableDiff;

/// Verdict returned by a change mapper: what happened to the matched left
/// element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeOutcome<L> {
    /// The element was left as it was.
    Unchanged,
    /// The element was updated through the provided mutable reference;
    /// collection membership is untouched.
    Updated,
    /// Remove the original element and append the replacement at the end
    /// of the collection.
    Replaced(L),
}

impl<'c, L, R> EditableDiff<'c, L, R> {
    /// Synthesize a left element for every right-only element and append
    /// it to the left collection. A factory returning `None` skips that
    /// element.
    pub fn merge_additions_with<F>(&mut self, mut factory: F) -> &mut Self
    where
        F: FnMut(&R) -> Option<L>,
    {
        let mut added = 0usize;
        for right in &self.result.only_right {
            if let Some(item) = factory(right) {
                self.source_left.push(item);
                added += 1;
            }
        }
        debug!(
            added,
            skipped = self.result.only_right.len() - added,
            "merged additions"
        );
        self
    }

    /// Fallible form of [`merge_additions_with`]: the factory's error is
    /// returned as-is, with additions applied so far kept.
    ///
    /// [`merge_additions_with`]: EditableDiff::merge_additions_with
    pub fn try_merge_additions_with<F, E>(&mut self, mut factory: F) -> Result<&mut Self, E>
    where
        F: FnMut(&R) -> Result<Option<L>, E>,
    {
        for right in &self.result.only_right {
            if let Some(item) = factory(right)? {
                self.source_left.push(item);
            }
        }
        Ok(self)
    }

    /// Update every matched left element in place through `map`. The
    /// collection's membership and ordering are untouched.
    pub fn merge_changes<F>(&mut self, mut map: F) -> &mut Self
    where
        L: PartialEq,
        F: FnMut(&mut L, &R),
    {
        self.merge_changes_with(move |left, right| {
            map(left, right);
            ChangeOutcome::Updated
        })
    }

    /// Apply `map` to every matched pair and honor its verdict:
    /// [`ChangeOutcome::Replaced`] removes the original element and
    /// appends the replacement at the end of the collection (replacements
    /// do not keep the original position); the other outcomes leave
    /// membership untouched.
    ///
    /// Pairs are bound to distinct collection elements before the first
    /// callback runs; a pair whose element is no longer present is
    /// skipped.
    pub fn merge_changes_with<F>(&mut self, mut map: F) -> &mut Self
    where
        L: PartialEq,
        F: FnMut(&mut L, &R) -> ChangeOutcome<L>,
    {
        let mut bound = self.bind_pairs();
        let mut replaced = 0usize;
        for (pair_idx, pair) in self.result.both.iter().enumerate() {
            let Some(pos) = bound[pair_idx] else { continue };
            match map(&mut self.source_left[pos], &pair.right) {
                ChangeOutcome::Unchanged | ChangeOutcome::Updated => {}
                ChangeOutcome::Replaced(item) => {
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
        }
        debug!(pairs = self.result.both.len(), replaced, "merged changes");
        self
    }

    /// Fallible form of [`merge_changes_with`]: the mapper's error is
    /// returned as-is, with changes applied so far kept.
    ///
    /// [`merge_changes_with`]: EditableDiff::merge_changes_with
    pub fn try_merge_changes_with<F, E>(&mut self, mut map: F) -> Result<&mut Self, E>
    where
        L: PartialEq,
        F: FnMut(&mut L, &R) -> Result<ChangeOutcome<L>, E>,
    {
        let mut bound = self.bind_pairs();
        for (pair_idx, pair) in self.result.both.iter().enumerate() {
            let Some(pos) = bound[pair_idx] else { continue };
            match map(&mut self.source_left[pos], &pair.right)? {
                ChangeOutcome::Unchanged | ChangeOutcome::Updated => {}
                ChangeOutcome::Replaced(item) => {
                    self.source_left.remove(pos);
                    self.source_left.push(item);
                    for slot in bound.iter_mut().flatten() {
                        if *slot > pos {
                            *slot -= 1;
                        }
                    }
                }
            }
        }
        Ok(self)
    }

    /// Remove the first occurrence of every left-only element from the
    /// left collection. Elements already absent are skipped, so repeated
    /// calls are no-ops.
    pub fn merge_deletions(&mut self) -> &mut Self
    where
        L: PartialEq,
    {
        let mut removed = 0usize;
        for gone in &self.result.only_left {
            if let Some(pos) = self.source_left.iter().position(|item| item == gone) {
                self.source_left.remove(pos);
                removed += 1;
            }
        }
        debug!(removed, "merged deletions");
        self
    }

    /// Merge everything for cross-typed collections: synthesize a left
    /// element per addition (`seed` then `map`), update matched elements
    /// in place with the same `map`, then delete left-only elements.
    /// The order is strictly additions, changes, deletions.
    pub fn merge_all_with<S, M>(&mut self, mut seed: S, mut map: M)
    where
        L: PartialEq,
        S: FnMut() -> L,
        M: FnMut(&mut L, &R),
    {
        self.merge_additions_with(|right| {
            let mut item = seed();
            map(&mut item, right);
            Some(item)
        });
        self.merge_changes(|left, right| map(left, right));
        self.merge_deletions();
    }
}

impl<'c, T> EditableDiff<'c, T, T>
where
    T: Clone + PartialEq,
{
    /// Append every right-only element to the left collection as-is.
    pub fn merge_additions(&mut self) -> &mut Self {
        self.merge_additions_with(|right| Some(right.clone()))
    }

    /// Merge everything for same-typed collections: additions then
    /// deletions. Matched elements are already present and need no change
    /// merging.
    pub fn merge_all(&mut self) {
        self.merge_additions().merge_deletions();
    }
}
