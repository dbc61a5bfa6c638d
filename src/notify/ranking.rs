//! Shared ranking primitive.
//!
//! Both notification pipelines reduce to the same operation: score items,
//! sort stably, optionally cap. This is the single sort/cap implementation
//! they share, so their stability guarantees cannot drift apart.

use std::cmp::Ordering;

/// Stable ascending sort by a computed key, with an optional cap.
///
/// Equal-key items retain their relative input order (re-renders must not
/// reshuffle equal-priority entries). Keys only need `PartialOrd`;
/// incomparable pairs (NaN) compare equal, which keeps the sort total and
/// preserves input order for them too. Truncation never reorders the
/// retained prefix.
pub fn rank_by_key<T, K, F>(mut items: Vec<T>, key: F, cap: Option<usize>) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    // Vec::sort_by is stable by contract.
    items.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
    if let Some(cap) = cap {
        items.truncate(cap);
    }
    items
}
