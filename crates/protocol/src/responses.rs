//! Wire response types.

use serde::{Deserialize, Serialize};

use crate::types::{RecordView, User};

// ============================================================================
// Auth responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: User,
}

// ============================================================================
// User responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBalanceResponse {
    pub user: User,
}

// ============================================================================
// Record responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    pub record: RecordView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRecordsResponse {
    pub records: Vec<RecordView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondResponse {
    pub record: RecordView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetStatusResponse {
    pub record: RecordView,
}

// ============================================================================
// View responses
// ============================================================================

/// Data behind the login view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginViewResponse {
    pub title: String,
}

/// Data behind the authenticated-user view: own records, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardViewResponse {
    pub user: User,
    pub records: Vec<RecordView>,
}

/// Data behind the admin view: all users plus all records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminViewResponse {
    pub users: Vec<User>,
    pub records: Vec<RecordView>,
}
