//! UI components built with Leptos.
//!
//! - [`explorer`] - Path field, listing grid and notice banner
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod explorer;
pub mod icons;

pub use explorer::Explorer;
