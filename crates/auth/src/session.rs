//! Session state machine and the credential check.

use entities::Identity;
use record_store::IdentityStore;

use crate::{AuthError, AuthResult};

/// The current session state.
///
/// One process holds at most one authenticated identity at a time:
/// `Anonymous` → (authenticate succeeds) → `Authenticated` →
/// (end session) → `Anonymous`. There is no timeout or expiry; the session
/// lives until explicit logout or process restart.
#[derive(Debug, Clone, Default)]
pub enum Session {
    /// Nobody is signed in.
    #[default]
    Anonymous,
    /// This identity is signed in.
    Authenticated(Identity),
}

impl Session {
    /// Returns the signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(identity) => Some(identity),
        }
    }

    /// Returns true if an identity is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

/// Checks an id/display-name pair against the identity store.
///
/// Succeeds only if both fields match the same stored identity exactly
/// (case-sensitive). There is no password; the pairing stands in for a
/// shared secret, and hardening it is explicitly out of scope.
pub async fn authenticate<S>(store: &S, id: &str, display_name: &str) -> AuthResult<Identity>
where
    S: IdentityStore + ?Sized,
{
    match store.find_by_credentials(id, display_name).await? {
        Some(identity) => Ok(identity),
        None => {
            tracing::debug!(id = %id, "Login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }
}
