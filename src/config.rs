//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use log::LevelFilter;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the window title and logs.
pub const APP_NAME: &str = "Glance";

// =============================================================================
// Navigation
// =============================================================================

/// Directory listed at startup.
pub const DEFAULT_DIRECTORY: &str = "/home/";

/// Delay before the first directory read, giving the host time to inject
/// its command bridge (milliseconds).
pub const STARTUP_DELAY_MS: u32 = 500;

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

// =============================================================================
// UI Text
// =============================================================================

/// Shown in the listing area when the host bridge never appeared.
pub const BRIDGE_UNAVAILABLE_MESSAGE: &str =
    "Tauri API not available. Make sure you are running in Tauri environment.";

/// Placeholder text of the path field.
pub const PATH_PLACEHOLDER: &str = "Type a path and press Enter";

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
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
