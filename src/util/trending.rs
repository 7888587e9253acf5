//! Trending list derived from headlines already on the page.

#[cfg(test)]
#[path = "trending_test.rs"]
mod trending_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendingEntry {
    /// 1-based rank, written as `aria-posinset`.
    pub position: usize,
    pub title: String,
}

/// Up to `limit` trimmed, non-blank titles in document order.
///
/// Blank headlines are dropped before the limit applies, so they never take
/// a slot.
pub fn trending_entries<I, T>(titles: I, limit: usize) -> Vec<TrendingEntry>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    titles
        .into_iter()
        .filter_map(|title| {
            let trimmed = title.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .take(limit)
        .enumerate()
        .map(|(i, title)| TrendingEntry { position: i + 1, title })
        .collect()
}
