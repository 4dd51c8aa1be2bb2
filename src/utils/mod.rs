//! Browser-side utilities.
//!
//! Provides:
//! - [`TauriHost`] - Host command bridge over Tauri `invoke`
//! - [`logger`] - Console backend for the `log` facade
//! - [`dom`] - Window access
//! - [`locale`] - Locale-aware name order

pub mod dom;
pub mod locale;
pub mod logger;
pub mod tauri;

pub use tauri::TauriHost;
