//! Wire error codes.

/// Error codes exposed to clients.
///
/// These four kinds are the whole error surface; unknown internal failures
/// are reported as `VALIDATION_FAILED` with a generic message.
pub mod error_codes {
    /// Authentication mismatch (login id/name pair matched nothing).
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    /// Unknown identity or record id.
    pub const NOT_FOUND: &str = "NOT_FOUND";
    /// Empty content/response, non-numeric balance, or any internal failure.
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    /// Operation requires a session or the admin role the caller lacks.
    pub const UNAUTHORIZED_ACCESS: &str = "UNAUTHORIZED_ACCESS";
}
