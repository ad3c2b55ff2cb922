//! Brute-force reference used to cross-check [`SeedSearch`](crate::SeedSearch).

use crate::search::RankedResults;

/// All start offsets of `pattern` in `text`, overlapping, ascending.
///
/// An empty pattern, or one longer than `text`, has no occurrences.
pub fn find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter_map(|(i, w)| (w == pattern).then_some(i))
        .collect()
}

/// Count rank-wise disagreements between naive positions and reported starts.
///
/// `None` when the two lists differ in length (including the no-hit sentinel
/// against a non-empty scan).
pub fn compare_hits(naive: &[usize], results: &RankedResults) -> Option<usize> {
    let hits = results.hits();
    if naive.len() != hits.len() {
        return None;
    }
    Some(
        naive
            .iter()
            .zip(hits)
            .filter(|(p, m)| **p != m.start)
            .count(),
    )
}
