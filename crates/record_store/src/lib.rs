//! Identity and record storage for Ember Record Keeper.
//!
//! This crate provides the storage abstraction for the fixed identity set
//! and the mutable record collection, plus the in-memory implementations
//! used by the server. All reads hand out snapshot copies; all mutations
//! are whole-record replacements, so callers observe either the pre- or
//! post-mutation state, never an intermediate one.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
