//! Wire request types.

use serde::{Deserialize, Serialize};

use crate::types::RecordStatus;

// ============================================================================
// Auth requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub id: String,
    pub name: String,
}

// ============================================================================
// User requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBalanceRequest {
    pub user_id: String,
    /// Arrives as entered in the form; numeric parsing happens at the
    /// server boundary, which rejects non-numeric input.
    pub new_balance: String,
}

// ============================================================================
// Record requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    /// Target owner. Omitted means the signed-in user; admins may name
    /// any user.
    pub user_id: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondRequest {
    pub record_id: String,
    pub response: String,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusRequest {
    pub record_id: String,
    pub status: RecordStatus,
}
