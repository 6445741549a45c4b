//! Status filtering.

use std::str::FromStr;

use entities::{Record, RecordStatus};
use thiserror::Error;

/// A status filter with an "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every record.
    All,
    /// Keep records with exactly this status.
    Only(RecordStatus),
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

/// Error returned when parsing an unrecognized filter string.
#[derive(Debug, Error)]
#[error("Unknown status filter: {0}")]
pub struct ParseStatusFilterError(String);

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "new" => Ok(Self::Only(RecordStatus::New)),
            "in-progress" => Ok(Self::Only(RecordStatus::InProgress)),
            "completed" => Ok(Self::Only(RecordStatus::Completed)),
            other => Err(ParseStatusFilterError(other.to_string())),
        }
    }
}

/// Returns the subsequence of records passing the filter, order preserved.
///
/// `StatusFilter::All` is the identity filter.
pub fn filter_by_status(records: &[Record], filter: StatusFilter) -> Vec<Record> {
    match filter {
        StatusFilter::All => records.to_vec(),
        StatusFilter::Only(status) => records
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        let mut first = Record::new("rec1", "user1", "First");
        first.status = RecordStatus::Completed;
        let second = Record::new("rec2", "user1", "Second");
        let third = Record::new("rec3", "user2", "Third");
        vec![first, second, third]
    }

    #[test]
    fn test_all_is_identity() {
        let records = sample_records();
        let filtered = filter_by_status(&records, StatusFilter::All);

        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rec1", "rec2", "rec3"]);
    }

    #[test]
    fn test_only_keeps_exact_matches() {
        let records = sample_records();
        let filtered = filter_by_status(&records, StatusFilter::Only(RecordStatus::New));

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.status == RecordStatus::New));
    }

    #[test]
    fn test_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "in-progress".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(RecordStatus::InProgress)
        );
        assert!("done".parse::<StatusFilter>().is_err());
    }
}
