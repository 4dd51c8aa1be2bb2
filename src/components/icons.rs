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
        LuFile as File, LuFolder as Folder, LuFolderOpen as Explorer, LuImage as FileImage,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFolder2 as Explorer,
        BsFolderFill as Folder, BsXLg as Close,
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

themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(EXPLORER, Explorer);
themed_icon!(CLOSE, Close);
