//! Identifier allocation for addition factories.
//!
//! A factory that synthesizes left elements often has to assign them fresh
//! integer identifiers. [`next_id`] scans the identifiers already in use
//! and returns the increment on the maximum. Selector-based call sites use
//! iterator adapters: `next_id(users.iter().map(|u| u.id))`.

/// Next free identifier, with identifiers starting at 1 and advancing
/// by 1.
pub fn next_id<I>(ids: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    next_id_from(ids, 1, 1)
}

/// Next free identifier: the maximum of the identifiers at or above
/// `start`, incremented by `step` (saturating). Yields `start` itself when
/// no identifier qualifies.
pub fn next_id_from<I>(ids: I, start: u64, step: u64) -> u64
where
    I: IntoIterator<Item = u64>,
{
    ids.into_iter()
        .filter(|id| *id >= start)
        .max()
        .map_or(start, |max| max.saturating_add(step))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yields_start() {
        assert_eq!(next_id(Vec::new()), 1);
        assert_eq!(next_id_from(Vec::new(), 10, 5), 10);
    }

    #[test]
    fn increments_the_maximum() {
        assert_eq!(next_id([1, 2, 7]), 8);
    }

    #[test]
    fn identifiers_below_start_are_ignored() {
        assert_eq!(next_id_from([1, 2], 100, 1), 100);
        assert_eq!(next_id_from([1, 2, 900], 100, 1), 901);
    }

    #[test]
    fn custom_step() {
        assert_eq!(next_id_from([10], 1, 10), 20);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(next_id([u64::MAX]), u64::MAX);
    }

    #[test]
    fn selector_call_sites_use_iterator_adapters() {
        struct User {
            id: u64,
        }
        let users = [User { id: 3 }, User { id: 9 }];
        assert_eq!(next_id(users.iter().map(|u| u.id)), 10);
    }
}
