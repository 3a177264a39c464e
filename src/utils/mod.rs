//! Utility modules for browser and network operations.
//!
//! Provides:
//! - [`HttpListingService`], [`download_url`] - requests to the file-share service
//! - [`dom::trigger_download`] - browser-level file download
//! - [`qr::render_svg`] - scannable codes for share links
//! - [`log`] - console logging

pub mod dom;
mod fetch;
pub mod log;
pub mod qr;

pub use fetch::{HttpListingService, download_url};
