//! Host-independent listing pipeline for the Glance directory browser.
//!
//! This crate holds everything that does not need a browser:
//! - [`entry`] - Directory entries and name classification
//! - [`host`] - The asynchronous host command boundary
//! - [`listing`] - Sorting, classification and the per-pass item arena
//! - [`preview`] - Sequential image preview loading
//! - [`navigation`] - Current directory, path field and listing state
//! - [`pipeline`] - Drives navigations and item activation against a host
//! - [`error`] - Error types for each failure kind

pub mod entry;
pub mod error;
pub mod host;
pub mod listing;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod navigation;
pub mod pipeline;
pub mod preview;

pub use entry::{DirectoryEntry, EntryKind};
pub use error::{HostError, NavigationError, OpenError, PreviewError};
pub use host::HostBridge;
pub use listing::{IconSource, Listing, RenderPass, RenderedItem};
pub use navigation::{NavRequest, Navigator};
pub use pipeline::{Activation, ExplorerCell};
pub use preview::{PreviewHandle, PreviewJob, PreviewReport};
