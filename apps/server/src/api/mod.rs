//! API endpoints.

pub mod auth;
pub mod records;
pub mod users;
pub mod views;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use entities::Identity;
use record_store::{IdentityStore, RecordStore};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<I, R>() -> Router<Arc<AppState<I, R>>>
where
    I: IdentityStore + 'static,
    R: RecordStore + 'static,
{
    Router::new()
        // Auth endpoints
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::current_user))
        // User endpoints (admin)
        .route("/api/users", get(users::list_users))
        .route("/api/users/update-balance", post(users::update_balance))
        // Record endpoints
        .route("/api/records/create", post(records::create_record))
        .route("/api/records/mine", get(records::list_my_records))
        .route("/api/records", get(records::list_records))
        .route("/api/records/respond", post(records::respond))
        .route("/api/records/update-status", post(records::update_status))
        // Views
        .route("/", get(views::login_view))
        .route("/dashboard", get(views::dashboard_view))
        .route("/admin", get(views::admin_view))
        .route("/404", get(views::not_found_view))
        // Health check
        .route("/health", get(health_check))
        // Unknown routes land on the not-found view
        .fallback(views::fallback)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Returns the signed-in identity or fails with authentication-required.
pub(crate) async fn require_identity<I, R>(state: &AppState<I, R>) -> ServerResult<Identity>
where
    I: IdentityStore,
    R: RecordStore,
{
    state
        .current_identity()
        .await
        .ok_or(ServerError::AuthenticationRequired)
}

/// Returns the signed-in identity if it may reach admin-only operations.
pub(crate) async fn require_admin<I, R>(state: &AppState<I, R>) -> ServerResult<Identity>
where
    I: IdentityStore,
    R: RecordStore,
{
    let identity = require_identity(state).await?;
    if !::auth::can_access_admin_view(&identity) {
        return Err(ServerError::UnauthorizedAccess);
    }
    Ok(identity)
}

/// Converts an entity role to its wire form.
pub(crate) fn to_wire_role(role: entities::Role) -> protocol::Role {
    match role {
        entities::Role::User => protocol::Role::User,
        entities::Role::Admin => protocol::Role::Admin,
    }
}

/// Converts an entity status to its wire form.
pub(crate) fn to_wire_status(status: entities::RecordStatus) -> protocol::RecordStatus {
    match status {
        entities::RecordStatus::New => protocol::RecordStatus::New,
        entities::RecordStatus::InProgress => protocol::RecordStatus::InProgress,
        entities::RecordStatus::Completed => protocol::RecordStatus::Completed,
    }
}

/// Converts a wire status to its entity form.
pub(crate) fn to_entity_status(status: protocol::RecordStatus) -> entities::RecordStatus {
    match status {
        protocol::RecordStatus::New => entities::RecordStatus::New,
        protocol::RecordStatus::InProgress => entities::RecordStatus::InProgress,
        protocol::RecordStatus::Completed => entities::RecordStatus::Completed,
    }
}

/// Converts an entity identity to a wire user.
pub(crate) fn identity_to_wire_user(identity: &Identity) -> protocol::User {
    protocol::User {
        id: identity.id.clone(),
        name: identity.display_name.clone(),
        role: to_wire_role(identity.role),
        balance: identity.balance,
    }
}

/// Converts a joined record projection to a wire record view.
pub(crate) fn owned_record_to_view(owned: &query::OwnedRecord) -> protocol::RecordView {
    protocol::RecordView {
        id: owned.record.id.clone(),
        user_id: owned.record.owner_id.clone(),
        user_name: owned.owner_display_name.clone(),
        content: owned.record.content.clone(),
        timestamp: owned.record.created_at,
        status: to_wire_status(owned.record.status),
        response: owned.record.response.clone(),
        response_timestamp: owned.record.responded_at,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Json;
    use axum::extract::State;
    use record_store::{MemoryIdentityStore, MemoryRecordStore};

    use super::*;
    use crate::config::Config;
    use crate::seed;
    use crate::services::notifier::test_support::RecordingNotifier;
    use crate::state::create_shared_state;

    #[tokio::test]
    async fn test_full_request_lifecycle() {
        let state = create_shared_state(
            Config::default(),
            MemoryIdentityStore::new(seed::default_identities()),
            MemoryRecordStore::new(),
            Arc::new(::auth::MemorySessionSlot::new()),
            Arc::new(RecordingNotifier::default()),
        );

        // Sign in as a regular user and submit a request.
        let login = auth::login(
            State(state.clone()),
            Json(protocol::LoginRequest {
                id: "user1".to_string(),
                name: "John Doe".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(login.0.user.balance, 500.0);

        let created = records::create_record(
            State(state.clone()),
            Json(protocol::CreateRecordRequest {
                user_id: None,
                content: "Need a report".to_string(),
            }),
        )
        .await
        .unwrap();
        let record_id = created.0.record.id.clone();
        assert_eq!(created.0.record.status, protocol::RecordStatus::New);

        // Switch to the admin, respond, and adjust the balance.
        auth::login(
            State(state.clone()),
            Json(protocol::LoginRequest {
                id: "admin1".to_string(),
                name: "Admin User".to_string(),
            }),
        )
        .await
        .unwrap();

        let responded = records::respond(
            State(state.clone()),
            Json(protocol::RespondRequest {
                record_id: record_id.clone(),
                response: "Approved".to_string(),
                status: protocol::RecordStatus::Completed,
            }),
        )
        .await
        .unwrap();
        assert_eq!(responded.0.record.status, protocol::RecordStatus::Completed);
        assert_eq!(responded.0.record.response.as_deref(), Some("Approved"));

        users::update_balance(
            State(state.clone()),
            Json(protocol::UpdateBalanceRequest {
                user_id: "user1".to_string(),
                new_balance: "650".to_string(),
            }),
        )
        .await
        .unwrap();

        let stored = state.identities.find_by_id("user1").await.unwrap().unwrap();
        assert_eq!(stored.balance, 650.0);
    }
}
