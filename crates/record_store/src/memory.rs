//! In-memory store implementations.
//!
//! Both stores keep their entities in a `Vec` behind a `tokio` `RwLock`:
//! identities stay in declaration order and records in insertion order,
//! which the projection layer's stable sort relies on. Mutations build the
//! replacement entity fully before swapping it in, so concurrent readers
//! never see a half-updated entry.

use async_trait::async_trait;
use entities::{Identity, Record, RecordStatus};
use tokio::sync::RwLock;

use crate::{IdentityStore, RecordFilter, RecordStore, StoreError, StoreResult};

/// In-memory identity store seeded with a fixed identity list.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    identities: RwLock<Vec<Identity>>,
}

impl MemoryIdentityStore {
    /// Creates a store holding the given identities, in the given order.
    pub fn new(identities: Vec<Identity>) -> Self {
        Self {
            identities: RwLock::new(identities),
        }
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Identity>> {
        let identities = self.identities.read().await;
        Ok(identities.iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_credentials(
        &self,
        id: &str,
        display_name: &str,
    ) -> StoreResult<Option<Identity>> {
        let identities = self.identities.read().await;
        Ok(identities
            .iter()
            .find(|i| i.id == id && i.display_name == display_name)
            .cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<Identity>> {
        let identities = self.identities.read().await;
        Ok(identities.clone())
    }

    async fn update_balance(&self, id: &str, new_balance: f64) -> StoreResult<Identity> {
        if !new_balance.is_finite() {
            return Err(StoreError::validation(
                "Balance must be a finite number",
            ));
        }

        let mut identities = self.identities.write().await;
        let slot = identities
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::not_found("Identity", id))?;

        let mut updated = slot.clone();
        updated.balance = new_balance;
        *slot = updated.clone();

        tracing::debug!(identity_id = %id, balance = new_balance, "Balance updated");
        Ok(updated)
    }
}

/// In-memory record store.
#[derive(Debug)]
pub struct MemoryRecordStore {
    inner: RwLock<RecordsInner>,
}

#[derive(Debug)]
struct RecordsInner {
    records: Vec<Record>,
    next_id: u64,
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecordStore {
    /// Creates an empty record store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RecordsInner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store pre-populated with known records.
    ///
    /// The id sequence continues past the seeded records, so generated ids
    /// never collide with seeded ones.
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records.len() as u64 + 1;
        Self {
            inner: RwLock::new(RecordsInner { records, next_id }),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&self, owner_id: &str, content: &str) -> StoreResult<Record> {
        if content.trim().is_empty() {
            return Err(StoreError::validation("Record content must not be empty"));
        }

        let mut inner = self.inner.write().await;
        let id = format!("rec{}", inner.next_id);
        inner.next_id += 1;

        let record = Record::new(id, owner_id, content);
        inner.records.push(record.clone());

        tracing::debug!(record_id = %record.id, owner_id = %owner_id, "Record created");
        Ok(record)
    }

    async fn get(&self, record_id: &str) -> StoreResult<Option<Record>> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().find(|r| r.id == record_id).cloned())
    }

    async fn respond(
        &self,
        record_id: &str,
        response_text: &str,
        new_status: RecordStatus,
    ) -> StoreResult<Record> {
        if response_text.trim().is_empty() {
            return Err(StoreError::validation("Response text must not be empty"));
        }

        let mut inner = self.inner.write().await;
        let slot = inner
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| StoreError::not_found("Record", record_id))?;

        // Response text, response timestamp, and status change together.
        let mut updated = slot.clone();
        updated.response = Some(response_text.to_string());
        updated.responded_at = Some(chrono::Utc::now());
        updated.status = new_status;
        *slot = updated.clone();

        tracing::debug!(record_id = %record_id, status = ?new_status, "Record responded");
        Ok(updated)
    }

    async fn set_status(
        &self,
        record_id: &str,
        new_status: RecordStatus,
    ) -> StoreResult<Record> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| StoreError::not_found("Record", record_id))?;

        let mut updated = slot.clone();
        updated.status = new_status;
        *slot = updated.clone();

        tracing::debug!(record_id = %record_id, status = ?new_status, "Status changed");
        Ok(updated)
    }

    async fn list(&self, filter: RecordFilter) -> StoreResult<Vec<Record>> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .filter(|r| {
                let mut matches = true;
                if let Some(owner_id) = &filter.owner_id {
                    matches = matches && r.owner_id == *owner_id;
                }
                if let Some(status) = filter.status {
                    matches = matches && r.status == status;
                }
                matches
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use entities::Role;

    use super::*;

    fn seed_identities() -> Vec<Identity> {
        vec![
            Identity::new("user1", "John Doe", Role::User, 500.0),
            Identity::new("user2", "Jane Smith", Role::User, 750.0),
            Identity::new("admin1", "Admin User", Role::Admin, 0.0),
        ]
    }

    #[tokio::test]
    async fn test_identity_lookup() {
        let store = MemoryIdentityStore::new(seed_identities());

        let found = store.find_by_id("user1").await.unwrap().unwrap();
        assert_eq!(found.display_name, "John Doe");

        assert!(store.find_by_id("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_credentials_require_exact_pair() {
        let store = MemoryIdentityStore::new(seed_identities());

        let found = store
            .find_by_credentials("user1", "John Doe")
            .await
            .unwrap();
        assert!(found.is_some());

        // Wrong name for a known id is rejected.
        assert!(store
            .find_by_credentials("user1", "Wrong Name")
            .await
            .unwrap()
            .is_none());

        // Case-sensitive match.
        assert!(store
            .find_by_credentials("user1", "john doe")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_all_keeps_declaration_order() {
        let store = MemoryIdentityStore::new(seed_identities());

        let all = store.list_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["user1", "user2", "admin1"]);
    }

    #[tokio::test]
    async fn test_update_balance() {
        let store = MemoryIdentityStore::new(seed_identities());

        let updated = store.update_balance("user1", 650.0).await.unwrap();
        assert_eq!(updated.balance, 650.0);

        // The update is observable on a later read.
        let found = store.find_by_id("user1").await.unwrap().unwrap();
        assert_eq!(found.balance, 650.0);
        assert_eq!(found.display_name, "John Doe");
    }

    #[tokio::test]
    async fn test_update_balance_rejects_non_finite() {
        let store = MemoryIdentityStore::new(seed_identities());

        let err = store.update_balance("user1", f64::NAN).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        // Rejection happens before mutation.
        let found = store.find_by_id("user1").await.unwrap().unwrap();
        assert_eq!(found.balance, 500.0);
    }

    #[tokio::test]
    async fn test_update_balance_unknown_identity() {
        let store = MemoryIdentityStore::new(seed_identities());

        let err = store.update_balance("nobody", 100.0).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_record() {
        let store = MemoryRecordStore::new();

        let record = store.create("user1", "Need a report").await.unwrap();
        assert_eq!(record.status, RecordStatus::New);
        assert!(record.response.is_none());

        let again = store.create("user1", "Another request").await.unwrap();
        assert_ne!(record.id, again.id);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_content() {
        let store = MemoryRecordStore::new();

        let err = store.create("user1", "   ").await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        // Store size unchanged.
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_tolerates_unknown_owner() {
        let store = MemoryRecordStore::new();

        // Lenient policy: the owner id is not checked against the identity
        // set; display joins fall back to "Unknown User".
        let record = store.create("ghost", "Orphan request").await.unwrap();
        assert_eq!(record.owner_id, "ghost");
    }

    #[tokio::test]
    async fn test_ids_continue_past_seeded_records() {
        let store = MemoryRecordStore::with_records(vec![
            Record::new("rec1", "user1", "Initial balance deposit"),
            Record::new("rec2", "user1", "Monthly report submitted"),
        ]);

        let record = store.create("user2", "New request").await.unwrap();
        assert_eq!(record.id, "rec3");
    }

    #[tokio::test]
    async fn test_respond_sets_all_three_fields() {
        let store = MemoryRecordStore::new();
        let record = store.create("user1", "Need a report").await.unwrap();

        let updated = store
            .respond(&record.id, "Approved", RecordStatus::Completed)
            .await
            .unwrap();

        assert_eq!(updated.response.as_deref(), Some("Approved"));
        assert_eq!(updated.status, RecordStatus::Completed);
        assert!(updated.responded_at.is_some());

        let fetched = store.get(&record.id).await.unwrap().unwrap();
        assert_eq!(fetched.response.as_deref(), Some("Approved"));
    }

    #[tokio::test]
    async fn test_respond_rejects_blank_text() {
        let store = MemoryRecordStore::new();
        let record = store.create("user1", "Need a report").await.unwrap();

        let err = store
            .respond(&record.id, "  ", RecordStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        // The prior record is unchanged.
        let fetched = store.get(&record.id).await.unwrap().unwrap();
        assert_eq!(fetched.status, RecordStatus::New);
        assert!(fetched.response.is_none());
        assert!(fetched.responded_at.is_none());
    }

    #[tokio::test]
    async fn test_respond_overwrites_previous_response() {
        let store = MemoryRecordStore::new();
        let record = store.create("user1", "Need a report").await.unwrap();

        store
            .respond(&record.id, "Looking into it", RecordStatus::InProgress)
            .await
            .unwrap();
        let updated = store
            .respond(&record.id, "Approved", RecordStatus::Completed)
            .await
            .unwrap();

        assert_eq!(updated.response.as_deref(), Some("Approved"));
        assert_eq!(updated.status, RecordStatus::Completed);
    }

    #[tokio::test]
    async fn test_set_status_leaves_response_untouched() {
        let store = MemoryRecordStore::new();
        let record = store.create("user1", "Need a report").await.unwrap();
        store
            .respond(&record.id, "Approved", RecordStatus::Completed)
            .await
            .unwrap();

        let updated = store
            .set_status(&record.id, RecordStatus::InProgress)
            .await
            .unwrap();

        assert_eq!(updated.status, RecordStatus::InProgress);
        assert_eq!(updated.response.as_deref(), Some("Approved"));
        assert!(updated.responded_at.is_some());
    }

    #[tokio::test]
    async fn test_respond_unknown_record() {
        let store = MemoryRecordStore::new();

        let err = store
            .respond("rec999", "Approved", RecordStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_filters() {
        let store = MemoryRecordStore::new();
        let first = store.create("user1", "First").await.unwrap();
        store.create("user2", "Second").await.unwrap();
        store.create("user1", "Third").await.unwrap();
        store
            .respond(&first.id, "Done", RecordStatus::Completed)
            .await
            .unwrap();

        let mine = store.list_for_owner("user1").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.owner_id == "user1"));

        let completed = store
            .list(RecordFilter {
                status: Some(RecordStatus::Completed),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, first.id);

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
