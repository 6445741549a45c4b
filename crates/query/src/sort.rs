//! Recency sorting.

use entities::Record;

/// Returns the records sorted descending by creation time.
///
/// The sort is stable: records with identical timestamps keep their
/// relative store order. Sorting an already-sorted sequence is a no-op.
pub fn sort_by_recency(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}
