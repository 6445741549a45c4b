//! Record-related entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordStatus {
    /// Freshly submitted, no admin action yet.
    New,
    /// An admin has picked it up.
    InProgress,
    /// Resolved.
    Completed,
}

impl Default for RecordStatus {
    fn default() -> Self {
        Self::New
    }
}

/// A single user-submitted request plus its lifecycle.
///
/// `response` and `responded_at` are either both unset or both set; only a
/// respond operation sets them, never creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, assigned by the record store.
    pub id: String,
    /// Id of the owning identity. Non-owning reference; display joins fall
    /// back to "Unknown User" if the lookup fails.
    pub owner_id: String,
    /// Free-text request content.
    pub content: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Current status.
    pub status: RecordStatus,
    /// Admin response text, if any.
    pub response: Option<String>,
    /// When the response was given.
    pub responded_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Creates a new record with status `New` and no response.
    pub fn new(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            content: content.into(),
            created_at: Utc::now(),
            status: RecordStatus::New,
            response: None,
            responded_at: None,
        }
    }

    /// Overrides the creation timestamp. Used when seeding known records.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
