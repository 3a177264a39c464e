//! Application configuration.
//!
//! Centralizes all configuration constants used by the browser application.
//! Service endpoints live in [`fileshare_core::config`].

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the footer.
pub const APP_NAME: &str = "File Share Tool";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Navigation
// =============================================================================

/// Clear the list as soon as a directory reported as empty is entered,
/// rather than keeping the parent's rows until its listing arrives.
pub const OPTIMISTIC_EMPTY_DIRS: bool = true;

/// Label of the parent-directory row.
pub const PARENT_ROW_LABEL: &str = "../";

// =============================================================================
// Share Dialog
// =============================================================================

/// Share code rendering.
pub mod share_code {
    /// Minimum rendered edge length in pixels.
    pub const MIN_SIZE_PX: u32 = 200;
    /// Module color.
    pub const DARK_COLOR: &str = "#000000";
    /// Background color.
    pub const LIGHT_COLOR: &str = "#ffffff";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
