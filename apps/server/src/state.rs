//! Application state.

use std::sync::Arc;

use auth::{Session, SessionSlot};
use entities::Identity;
use record_store::{IdentityStore, RecordStore};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::services::notifier::Notifier;

/// Shared application state.
///
/// Owns the identity and record stores, the single session slot, and the
/// notification sink. Constructed once by the process entry point and
/// shared behind an `Arc`; nothing here is a global.
pub struct AppState<I: IdentityStore, R: RecordStore> {
    /// Server configuration.
    pub config: Config,
    /// Identity store.
    pub identities: I,
    /// Record store.
    pub records: R,
    /// The single session slot for this process.
    pub session: RwLock<Session>,
    /// Cosmetic session persistence.
    pub session_slot: Arc<dyn SessionSlot>,
    /// Notification sink; informed after mutations, never consulted.
    pub notifier: Arc<dyn Notifier>,
}

impl<I: IdentityStore, R: RecordStore> AppState<I, R> {
    /// Creates new application state.
    pub fn new(
        config: Config,
        identities: I,
        records: R,
        session_slot: Arc<dyn SessionSlot>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            identities,
            records,
            session: RwLock::new(Session::Anonymous),
            session_slot,
            notifier,
        }
    }

    /// Returns a copy of the signed-in identity, if any.
    pub async fn current_identity(&self) -> Option<Identity> {
        self.session.read().await.identity().cloned()
    }

    /// Replaces the session state.
    pub async fn set_session(&self, session: Session) {
        *self.session.write().await = session;
    }

    /// Restores the session from the persistence slot, if one was saved.
    ///
    /// Cosmetic only: a slot that fails to load leaves the session
    /// anonymous and the process running.
    pub async fn restore_session(&self) {
        match self.session_slot.load().await {
            Ok(Some(identity)) => {
                tracing::info!(identity_id = %identity.id, "Session restored");
                self.set_session(Session::Authenticated(identity)).await;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore session");
            }
        }
    }
}

/// Type alias for shared state.
pub type SharedState<I, R> = Arc<AppState<I, R>>;

/// Creates shared state from config, stores, and services.
pub fn create_shared_state<I: IdentityStore, R: RecordStore>(
    config: Config,
    identities: I,
    records: R,
    session_slot: Arc<dyn SessionSlot>,
    notifier: Arc<dyn Notifier>,
) -> SharedState<I, R> {
    Arc::new(AppState::new(
        config,
        identities,
        records,
        session_slot,
        notifier,
    ))
}
