use std::collections::BTreeMap;

use super::registry::Category;
use super::resolve::Candidate;

/// Partition a ranked candidate sequence into category buckets.
///
/// Buckets come back sorted by category name (Category's `Ord` is its
/// lexicographic display order) and each bucket preserves the relative
/// ranking of its members. With an active `filter`, only that category's
/// bucket is returned, or nothing when it has no matches.
pub fn group_by_category<'a>(
    candidates: &[Candidate<'a>],
    filter: Option<Category>,
) -> Vec<(Category, Vec<Candidate<'a>>)> {
    let mut buckets: BTreeMap<Category, Vec<Candidate<'a>>> = BTreeMap::new();
    for c in candidates {
        buckets.entry(c.entry.category).or_default().push(*c);
    }

    match filter {
        Some(cat) => buckets.remove(&cat).map(|v| vec![(cat, v)]).unwrap_or_default(),
        None => buckets.into_iter().collect(),
    }
}

/// Categories present in a candidate sequence, lexicographically sorted.
/// This is the list the selection state machine cycles and jumps over.
pub fn categories_present(candidates: &[Candidate<'_>]) -> Vec<Category> {
    let mut cats: Vec<Category> = candidates.iter().map(|c| c.entry.category).collect();
    cats.sort();
    cats.dedup();
    cats
}

/// Flatten grouped candidates back into the display order the palette
/// renders (bucket by bucket), which is what the highlight index walks.
pub fn flatten<'a>(groups: &[(Category, Vec<Candidate<'a>>)]) -> Vec<Candidate<'a>> {
    groups.iter().flat_map(|(_, v)| v.iter().copied()).collect()
}

#[cfg(test)]
#[path = "../tests/palette/group_tests.rs"]
mod tests;
