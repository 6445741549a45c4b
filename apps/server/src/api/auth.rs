//! Authentication API endpoints.

use std::sync::Arc;

use auth::{AuthError, Session, SessionSlot};
use axum::{Json, extract::State};
use protocol::{CurrentUserResponse, LoginRequest, LoginResponse, LogoutResponse};
use record_store::{IdentityStore, RecordStore};

use crate::api::identity_to_wire_user;
use crate::error::ServerResult;
use crate::services::notifier::Outcome;
use crate::state::AppState;

/// Signs an identity in.
///
/// Success replaces whatever session existed; failure resets the session
/// to anonymous and reports invalid credentials.
pub async fn login<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
    Json(request): Json<LoginRequest>,
) -> ServerResult<Json<LoginResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    match auth::authenticate(&state.identities, &request.id, &request.name).await {
        Ok(identity) => {
            state
                .set_session(Session::Authenticated(identity.clone()))
                .await;

            // Cosmetic persistence; a failed write never fails the login.
            if let Err(e) = state.session_slot.store(&identity).await {
                tracing::warn!(error = %e, "Failed to persist session");
            }

            state.notifier.notify(
                Outcome::Success,
                "Login successful",
                &format!("Welcome back, {}!", identity.display_name),
            );
            tracing::info!(identity_id = %identity.id, "Login");

            Ok(Json(LoginResponse {
                user: identity_to_wire_user(&identity),
            }))
        }
        Err(err @ AuthError::InvalidCredentials) => {
            // A failed attempt leaves nobody signed in, even if someone was.
            state.set_session(Session::Anonymous).await;
            state.notifier.notify(
                Outcome::Failure,
                "Login failed",
                "Invalid credentials. Please try again.",
            );
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Ends the current session.
pub async fn logout<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
) -> ServerResult<Json<LogoutResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    state.set_session(Session::Anonymous).await;

    if let Err(e) = state.session_slot.clear().await {
        tracing::warn!(error = %e, "Failed to clear persisted session");
    }

    state.notifier.notify(
        Outcome::Success,
        "Logged out",
        "You have been logged out successfully.",
    );
    tracing::info!("Logout");

    Ok(Json(LogoutResponse {}))
}

/// Gets the current signed-in user.
pub async fn current_user<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
) -> ServerResult<Json<CurrentUserResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    let identity = crate::api::require_identity(&state).await?;
    Ok(Json(CurrentUserResponse {
        user: identity_to_wire_user(&identity),
    }))
}
