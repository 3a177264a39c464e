//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as Parent, LuFile as File, LuFolder as Folder, LuGlobe as Network,
        LuShare2 as Share, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronLeft as Parent, BsFileEarmark as File, BsFolderFill as Folder,
        BsGlobe as Network, BsShare as Share, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(PARENT, Parent);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(SHARE, Share);
themed_icon!(CLOSE, Close);
themed_icon!(NETWORK, Network);
