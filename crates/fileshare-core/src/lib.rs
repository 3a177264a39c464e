//! Platform-independent core of the file-share browser.
//!
//! This crate provides:
//! - [`Navigator`] - the navigation state machine (current path, entries, share address)
//! - [`ListingService`] and [`parse_listing`] - the listing service seam and wire format
//! - [`resolve_share_url`] - share link construction
//! - [`path`] - path joining and up-navigation rules
//!
//! Nothing here touches the DOM; the browser application drives the
//! [`Navigator`] and performs the actual requests.

pub mod config;
pub mod error;
mod listing;
mod models;
mod navigator;
pub mod path;
mod share;

pub use error::{FetchError, NavigationError};
pub use listing::{ListingFuture, ListingService, parse_listing};
pub use models::{DirectoryEntry, Listing, ListingOutcome};
pub use navigator::{EntryAction, ListingDisposition, ListingRequest, Navigator};
pub use share::resolve_share_url;
