//! Session persistence slot.
//!
//! On successful login the current identity is serialized into a key-value
//! slot under a fixed key; logout clears it. This mirrors the browser
//! session-storage convenience of the web client and carries no security
//! contract: failing to persist never fails the login itself.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use entities::Identity;

use crate::{AuthError, AuthResult};

/// Fixed key the current identity is stored under.
pub const SESSION_STORAGE_KEY: &str = "emberUser";

/// Trait for session persistence slots.
#[async_trait]
pub trait SessionSlot: Send + Sync {
    /// Stores the identity under the fixed session key.
    async fn store(&self, identity: &Identity) -> AuthResult<()>;

    /// Loads the identity stored under the fixed session key, if any.
    async fn load(&self) -> AuthResult<Option<Identity>>;

    /// Clears the fixed session key.
    async fn clear(&self) -> AuthResult<()>;
}

/// In-memory session slot.
#[derive(Debug, Default)]
pub struct MemorySessionSlot {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySessionSlot {
    /// Creates a new empty slot.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionSlot for MemorySessionSlot {
    async fn store(&self, identity: &Identity) -> AuthResult<()> {
        let serialized = serde_json::to_string(identity)?;
        let mut slots = self
            .slots
            .write()
            .map_err(|e| AuthError::Other(format!("Lock poisoned: {}", e)))?;
        slots.insert(SESSION_STORAGE_KEY.to_string(), serialized);
        Ok(())
    }

    async fn load(&self) -> AuthResult<Option<Identity>> {
        let slots = self
            .slots
            .read()
            .map_err(|e| AuthError::Other(format!("Lock poisoned: {}", e)))?;
        match slots.get(SESSION_STORAGE_KEY) {
            Some(serialized) => Ok(Some(serde_json::from_str(serialized)?)),
            None => Ok(None),
        }
    }

    async fn clear(&self) -> AuthResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| AuthError::Other(format!("Lock poisoned: {}", e)))?;
        slots.remove(SESSION_STORAGE_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use entities::Role;

    use super::*;

    #[tokio::test]
    async fn test_slot_round_trip() {
        let slot = MemorySessionSlot::new();
        let identity = Identity::new("user1", "John Doe", Role::User, 500.0);

        assert!(slot.load().await.unwrap().is_none());

        slot.store(&identity).await.unwrap();
        let loaded = slot.load().await.unwrap().unwrap();
        assert_eq!(loaded.id, "user1");
        assert_eq!(loaded.display_name, "John Doe");

        slot.clear().await.unwrap();
        assert!(slot.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_overwrites_previous_identity() {
        let slot = MemorySessionSlot::new();

        slot.store(&Identity::new("user1", "John Doe", Role::User, 500.0))
            .await
            .unwrap();
        slot.store(&Identity::new("user2", "Jane Smith", Role::User, 750.0))
            .await
            .unwrap();

        let loaded = slot.load().await.unwrap().unwrap();
        assert_eq!(loaded.id, "user2");
    }
}
