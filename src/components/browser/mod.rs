//! File browser UI components.
//!
//! Components:
//! - [`Browser`] - Main page: heading, file list, footer, share dialog
//! - [`FileList`] - Parent row and one row per directory entry
//! - [`ShareDialog`] - Modal with the scannable share link

#[allow(clippy::module_inception)]
mod browser;
mod file_list;
mod share_dialog;

pub use browser::Browser;
pub use file_list::FileList;
pub use share_dialog::ShareDialog;
