//! Record management API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use protocol::{
    CreateRecordRequest, CreateRecordResponse, ListRecordsResponse, RespondRequest,
    RespondResponse, SetStatusRequest, SetStatusResponse,
};
use query::StatusFilter;
use record_store::{IdentityStore, RecordStore};
use serde::Deserialize;

use crate::api::{owned_record_to_view, require_admin, require_identity, to_entity_status};
use crate::error::{ServerError, ServerResult};
use crate::services::notifier::Outcome;
use crate::state::AppState;

/// Query parameters for the record listing.
#[derive(Debug, Deserialize)]
pub struct ListRecordsQuery {
    /// Status filter; "all" or omitted keeps everything.
    pub status: Option<String>,
}

/// Derives the display projection for the given records.
pub(crate) async fn project_records<I, R>(
    state: &AppState<I, R>,
    records: &[entities::Record],
    filter: StatusFilter,
) -> ServerResult<Vec<protocol::RecordView>>
where
    I: IdentityStore,
    R: RecordStore,
{
    let identities = state.identities.list_all().await?;
    Ok(query::project(records, &identities, filter)
        .iter()
        .map(owned_record_to_view)
        .collect())
}

/// Creates a record.
///
/// Users create for themselves; admins may create for any user.
pub async fn create_record<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
    Json(request): Json<CreateRecordRequest>,
) -> ServerResult<Json<CreateRecordResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    let identity = require_identity(&state).await?;

    let owner_id = match request.user_id {
        Some(user_id) if user_id != identity.id => {
            if !::auth::can_access_admin_view(&identity) {
                return Err(ServerError::UnauthorizedAccess);
            }
            user_id
        }
        Some(user_id) => user_id,
        None => identity.id.clone(),
    };

    let record = match state.records.create(&owner_id, &request.content).await {
        Ok(record) => record,
        Err(e) => {
            state
                .notifier
                .notify(Outcome::Failure, "Record rejected", &e.to_string());
            return Err(e.into());
        }
    };

    state.notifier.notify(
        Outcome::Success,
        "Record added",
        "Your record has been successfully added.",
    );
    tracing::info!(record_id = %record.id, owner_id = %owner_id, "Record created");

    let views = project_records(&state, &[record], StatusFilter::All).await?;
    let record = views
        .into_iter()
        .next()
        .ok_or_else(|| ServerError::Internal("Projection dropped a record".to_string()))?;

    Ok(Json(CreateRecordResponse { record }))
}

/// Lists the signed-in user's records, newest first.
pub async fn list_my_records<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
) -> ServerResult<Json<ListRecordsResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    let identity = require_identity(&state).await?;

    let records = state.records.list_for_owner(&identity.id).await?;
    let views = project_records(&state, &records, StatusFilter::All).await?;

    Ok(Json(ListRecordsResponse { records: views }))
}

/// Lists all records across all users, filtered then sorted (admin only).
pub async fn list_records<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
    Query(params): Query<ListRecordsQuery>,
) -> ServerResult<Json<ListRecordsResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    require_admin(&state).await?;

    let filter: StatusFilter = params
        .status
        .as_deref()
        .unwrap_or("all")
        .parse()
        .map_err(|e: query::ParseStatusFilterError| ServerError::Validation(e.to_string()))?;

    let records = state.records.list_all().await?;
    let views = project_records(&state, &records, filter).await?;

    Ok(Json(ListRecordsResponse { records: views }))
}

/// Responds to a record: response text, response time, and status change
/// together (admin only).
pub async fn respond<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
    Json(request): Json<RespondRequest>,
) -> ServerResult<Json<RespondResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    require_admin(&state).await?;

    let record = match state
        .records
        .respond(
            &request.record_id,
            &request.response,
            to_entity_status(request.status),
        )
        .await
    {
        Ok(record) => record,
        Err(e) => {
            state
                .notifier
                .notify(Outcome::Failure, "Response rejected", &e.to_string());
            return Err(e.into());
        }
    };

    state.notifier.notify(
        Outcome::Success,
        "Response submitted",
        "Your response has been saved.",
    );
    tracing::info!(record_id = %record.id, status = ?record.status, "Record responded");

    let views = project_records(&state, &[record], StatusFilter::All).await?;
    let record = views
        .into_iter()
        .next()
        .ok_or_else(|| ServerError::Internal("Projection dropped a record".to_string()))?;

    Ok(Json(RespondResponse { record }))
}

/// Changes a record's status alone (admin only).
pub async fn update_status<I, R>(
    State(state): State<Arc<AppState<I, R>>>,
    Json(request): Json<SetStatusRequest>,
) -> ServerResult<Json<SetStatusResponse>>
where
    I: IdentityStore,
    R: RecordStore,
{
    require_admin(&state).await?;

    let record = match state
        .records
        .set_status(&request.record_id, to_entity_status(request.status))
        .await
    {
        Ok(record) => record,
        Err(e) => {
            state
                .notifier
                .notify(Outcome::Failure, "Status update failed", &e.to_string());
            return Err(e.into());
        }
    };

    state.notifier.notify(
        Outcome::Success,
        "Status updated",
        "Record status has been updated.",
    );
    tracing::info!(record_id = %record.id, status = ?record.status, "Status changed");

    let views = project_records(&state, &[record], StatusFilter::All).await?;
    let record = views
        .into_iter()
        .next()
        .ok_or_else(|| ServerError::Internal("Projection dropped a record".to_string()))?;

    Ok(Json(SetStatusResponse { record }))
}
