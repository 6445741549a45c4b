//! User management API endpoints (admin only).

use std::sync::Arc;

use auth::Session;
use axum::{Json, extract::State};
use protocol::{ListUsersResponse, UpdateBalanceRequest, UpdateBalanceResponse};
use record_store::{IdentityStore, RecordStore};

use crate::api::{identity_to_wire_user, require_admin};
use crate::error::{ServerError, ServerResult};
use crate::services::notifier::Outcome;
use crate::state::AppState;

/// Lists all users in declaration order.
pub async fn list_users<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
) -> ServerResult<Json<ListUsersResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    require_admin(&state).await?;

    let identities = state.identities.list_all().await?;

    Ok(Json(ListUsersResponse {
        users: identities.iter().map(identity_to_wire_user).collect(),
    }))
}

/// Replaces one user's balance.
///
/// The balance arrives as the entered string; parsing happens here, before
/// the store is touched.
pub async fn update_balance<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
    Json(request): Json<UpdateBalanceRequest>,
) -> ServerResult<Json<UpdateBalanceResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    require_admin(&state).await?;

    let new_balance: f64 = request.new_balance.trim().parse().map_err(|_| {
        state
            .notifier
            .notify(Outcome::Failure, "Invalid Amount", "Please enter a valid number.");
        ServerError::Validation("Please enter a valid number.".to_string())
    })?;

    let updated = match state
        .identities
        .update_balance(&request.user_id, new_balance)
        .await
    {
        Ok(updated) => updated,
        Err(e) => {
            state.notifier.notify(
                Outcome::Failure,
                "Balance update failed",
                &e.to_string(),
            );
            return Err(e.into());
        }
    };

    // Keep the session copy in step when the signed-in identity edited
    // their own balance.
    if let Some(current) = state.current_identity().await {
        if current.id == updated.id {
            state
                .set_session(Session::Authenticated(updated.clone()))
                .await;
        }
    }

    state.notifier.notify(
        Outcome::Success,
        "Balance updated",
        &format!("User balance has been updated to {}.", updated.balance),
    );
    tracing::info!(identity_id = %updated.id, balance = updated.balance, "Balance updated");

    Ok(Json(UpdateBalanceResponse {
        user: identity_to_wire_user(&updated),
    }))
}
