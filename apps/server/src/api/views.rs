//! View routing.
//!
//! Three reachable views: anonymous (login), authenticated-user
//! (own records), authenticated-admin (all users + all records). Reaching
//! the admin view without the admin role redirects to the user view;
//! unknown routes redirect to the not-found view. Every view re-derives
//! its projection on the request that renders it.

use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum::extract::State;
use protocol::{AdminViewResponse, DashboardViewResponse, LoginViewResponse};
use query::StatusFilter;
use record_store::{IdentityStore, RecordStore};
use serde_json::json;

use crate::api::{identity_to_wire_user, records::project_records};
use crate::error::ServerResult;
use crate::state::AppState;

/// The anonymous login view.
pub async fn login_view() -> Json<LoginViewResponse> {
    Json(LoginViewResponse {
        title: "Ember Record Keeper".to_string(),
    })
}

/// The authenticated-user view: own records, newest first.
pub async fn dashboard_view<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
) -> ServerResult<Response>
where
    I: IdentityStore,
    R: RecordStore,
{
    let Some(identity) = state.current_identity().await else {
        return Ok(Redirect::to("/").into_response());
    };

    let records = state.records.list_for_owner(&identity.id).await?;
    let views = project_records(&state, &records, StatusFilter::All).await?;

    Ok(Json(DashboardViewResponse {
        user: identity_to_wire_user(&identity),
        records: views,
    })
    .into_response())
}

/// The admin view: all users plus all records.
pub async fn admin_view<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
) -> ServerResult<Response>
where
    I: IdentityStore,
    R: RecordStore,
{
    let Some(identity) = state.current_identity().await else {
        return Ok(Redirect::to("/").into_response());
    };
    if !::auth::can_access_admin_view(&identity) {
        return Ok(Redirect::to("/dashboard").into_response());
    }

    let identities = state.identities.list_all().await?;
    let records = state.records.list_all().await?;
    let views = project_records(&state, &records, StatusFilter::All).await?;

    Ok(Json(AdminViewResponse {
        users: identities.iter().map(identity_to_wire_user).collect(),
        records: views,
    })
    .into_response())
}

/// The not-found view.
pub async fn not_found_view() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "title": "Page Not Found",
            "message": "The page you're looking for doesn't exist or has been moved.",
        })),
    )
        .into_response()
}

/// Unknown routes land on the not-found view.
pub async fn fallback() -> Redirect {
    Redirect::to("/404")
}
