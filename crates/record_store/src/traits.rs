//! Store trait definitions.

use async_trait::async_trait;
use entities::{Identity, Record, RecordStatus};

use crate::StoreResult;

/// Filter options for listing records.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Filter by owning identity id.
    pub owner_id: Option<String>,
    /// Filter by record status.
    pub status: Option<RecordStatus>,
}

/// Trait for identity storage operations.
///
/// The identity set has fixed membership; only balances change.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Gets an identity by id.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Identity>>;

    /// Gets the identity whose id and display name both match exactly
    /// (case-sensitive). `None` is the invalid-credentials signal.
    async fn find_by_credentials(
        &self,
        id: &str,
        display_name: &str,
    ) -> StoreResult<Option<Identity>>;

    /// Lists all identities as a snapshot copy, in declaration order.
    async fn list_all(&self) -> StoreResult<Vec<Identity>>;

    /// Replaces the balance of one identity.
    ///
    /// Rejects non-finite balances before mutating. No other field changes.
    async fn update_balance(&self, id: &str, new_balance: f64) -> StoreResult<Identity>;
}

/// Trait for record storage operations.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates a record owned by `owner_id` with status `New`.
    ///
    /// Rejects whitespace-only content. Unknown owners are tolerated; the
    /// display join labels them "Unknown User" later.
    async fn create(&self, owner_id: &str, content: &str) -> StoreResult<Record>;

    /// Gets a record by id.
    async fn get(&self, record_id: &str) -> StoreResult<Option<Record>>;

    /// Sets the response text, response timestamp, and status together.
    ///
    /// Rejects whitespace-only response text; on rejection the stored
    /// record is unchanged. Responding again overwrites the previous
    /// response.
    async fn respond(
        &self,
        record_id: &str,
        response_text: &str,
        new_status: RecordStatus,
    ) -> StoreResult<Record>;

    /// Changes the status alone; response fields are untouched.
    async fn set_status(&self, record_id: &str, new_status: RecordStatus)
        -> StoreResult<Record>;

    /// Lists records matching the filter, in insertion order.
    async fn list(&self, filter: RecordFilter) -> StoreResult<Vec<Record>>;

    /// Lists all records owned by `owner_id`, in insertion order.
    async fn list_for_owner(&self, owner_id: &str) -> StoreResult<Vec<Record>> {
        self.list(RecordFilter {
            owner_id: Some(owner_id.to_string()),
            ..Default::default()
        })
        .await
    }

    /// Lists all records as a full snapshot, in insertion order.
    async fn list_all(&self) -> StoreResult<Vec<Record>> {
        self.list(RecordFilter::default()).await
    }
}
