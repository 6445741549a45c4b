//! Authorization predicates.

use entities::Identity;

/// Returns true if this identity may reach the admin view.
///
/// The single predicate every routing decision goes through; role checks
/// are not scattered across views.
pub fn can_access_admin_view(identity: &Identity) -> bool {
    identity.is_admin()
}
