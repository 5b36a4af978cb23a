//! Tag and distribution counting
//!
//! Counts how many team members share each tag (synergy group, element,
//! rarity). Used by the synergy engine and the team distributions.

use crate::model::Cookie;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::hash::Hash;
use std::sync::Arc;

/// Count occurrences of each key
pub fn count_by<K, I>(keys: I) -> FxHashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut counts: FxHashMap<K, usize> = FxHashMap::default();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Count how many cookies carry each tag
///
/// Tags are deduplicated per cookie first, so a cookie listing the same
/// group twice still counts once.
pub fn count_shared_tags<'a, F>(cookies: &'a [Arc<Cookie>], tags: F) -> FxHashMap<&'a str, usize>
where
    F: Fn(&'a Cookie) -> &'a [String],
{
    let mut counts: FxHashMap<&'a str, usize> = FxHashMap::default();

    for cookie in cookies {
        let mut cookie_tags: SmallVec<[&str; 8]> = tags(cookie)
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        cookie_tags.sort_unstable();
        cookie_tags.dedup();

        for tag in cookie_tags {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    counts
}

/// Largest count in a map (0 when empty)
pub fn max_count<K>(counts: &FxHashMap<K, usize>) -> usize {
    counts.values().copied().max().unwrap_or(0)
}

/// Distribution sorted by descending count, then key, for stable display
pub fn sorted_distribution<K: Ord + Clone>(counts: &FxHashMap<K, usize>) -> Vec<(K, usize)> {
    let mut entries: Vec<(K, usize)> = counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
