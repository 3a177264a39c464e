//! UI components built with Leptos.
//!
//! - [`browser`] - Directory listing page, file rows and share dialog
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;

pub use browser::Browser;
