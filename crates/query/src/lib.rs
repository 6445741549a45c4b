//! Pure record projections for Ember Record Keeper.
//!
//! Everything in this crate is a side-effect-free function over a record
//! snapshot. Views re-derive their projection on every read; nothing is
//! cached, so any store mutation is visible to the next projection call.

mod filter;
mod join;
mod sort;

pub use filter::*;
pub use join::*;
pub use sort::*;

use entities::{Identity, Record};

/// Derives the display projection for a set of records: filter, then sort
/// by recency, then join owner names.
pub fn project(
    records: &[Record],
    identities: &[Identity],
    filter: StatusFilter,
) -> Vec<OwnedRecord> {
    let filtered = filter_by_status(records, filter);
    let sorted = sort_by_recency(&filtered);
    join_owner_names(&sorted, identities)
}
