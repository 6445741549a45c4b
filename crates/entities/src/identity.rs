//! Identity-related entity definitions.

use serde::{Deserialize, Serialize};

/// Role of a registered identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular user: submits requests and sees their own records.
    User,
    /// Admin: browses users, adjusts balances, responds to records.
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

/// A registered person (user or admin).
///
/// The identity set has fixed membership for the lifetime of the process;
/// only `balance` is mutable, and only through the identity store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier, e.g. `"user1"`.
    pub id: String,
    /// Display name used for login matching and record joins.
    pub display_name: String,
    /// Role.
    pub role: Role,
    /// Account balance. Must be finite; two-decimal display is a
    /// presentation concern.
    pub balance: f64,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
        balance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            role,
            balance,
        }
    }

    /// Returns true if this identity holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
