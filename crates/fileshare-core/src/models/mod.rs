//! Data models shared by the core and the browser application.
//!
//! - [`DirectoryEntry`] - one listed file or directory
//! - [`Listing`], [`ListingOutcome`] - the result of a listing request

mod entry;
mod outcome;

pub use entry::DirectoryEntry;
pub use outcome::{Listing, ListingOutcome};
