//! Authentication and authorization for Ember Record Keeper.
//!
//! This crate provides:
//! - The credential check against the identity store (id + display name
//!   pairing; no password by design)
//! - The single-slot session state machine
//! - The cosmetic session persistence slot
//! - The admin-view authorization predicate

mod authorize;
mod error;
mod session;
mod slot;

pub use authorize::*;
pub use error::*;
pub use session::*;
pub use slot::*;
