//! Linear substring search over record names.
//!
//! Matching is case-insensitive and works on the trimmed query. Both helpers scan from the
//! first element; neither reorders or scores matches.

use crate::core::Record;

/// Every match of a linear scan plus the number of comparisons it took.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearSearch {
    /// Positions of matching records, in scan order.
    pub matches: Vec<usize>,
    pub comparisons: usize,
}

/// Scans all of `records` and collects the index of every name containing `query`.
///
/// A blank query matches nothing and performs no comparisons.
pub fn linear_search<R: AsRef<Record>>(records: &[R], query: &str) -> LinearSearch {
    let Some(needle) = normalize(query) else {
        return LinearSearch::default();
    };

    let mut result = LinearSearch::default();
    for (index, record) in records.iter().enumerate() {
        result.comparisons += 1;
        if contains(&record.as_ref().name, &needle) {
            result.matches.push(index);
        }
    }

    result
}

/// Returns the index of the first record whose name contains `query`.
pub fn find_first<R: AsRef<Record>>(records: &[R], query: &str) -> Option<usize> {
    let needle = normalize(query)?;
    records
        .iter()
        .position(|record| contains(&record.as_ref().name, &needle))
}

/// Lowercased, trimmed query, or `None` when nothing is left to match.
pub(crate) fn normalize(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}
