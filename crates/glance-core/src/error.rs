//! Error types for the listing pipeline.
//!
//! Each failure kind of the browser has its own type:
//!
//! - [`HostError`] - A host command was rejected or could not be issued
//! - [`NavigationError`] - A directory could not be listed
//! - [`PreviewError`] - One image preview could not be produced or applied
//! - [`OpenError`] - A file could not be opened by the host

use thiserror::Error;

/// Failure reported by the host command boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host ran the command and returned an error message.
    #[error("{0}")]
    Rejected(String),
    /// The command bridge is not available in this environment.
    #[error("host bridge not available")]
    Unavailable,
    /// The command arguments could not be encoded for the host.
    #[error("invalid host request: {0}")]
    InvalidRequest(String),
    /// The host replied with a payload of the wrong shape.
    #[error("invalid host reply: {0}")]
    InvalidReply(String),
}

/// A directory could not be listed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The host refused to list the directory.
    #[error("Error navigating to \"{input}\": Error reading directory: {source}")]
    Listing {
        /// Path as requested (user input or folder path).
        input: String,
        #[source]
        source: HostError,
    },
    /// A newer navigation started before this one finished.
    #[error("navigation to \"{target}\" was superseded")]
    Superseded { target: String },
}

impl NavigationError {
    /// Whether the failure should be shown to the user.
    ///
    /// Superseded navigations are dropped without a message.
    pub fn is_reportable(&self) -> bool {
        matches!(self, Self::Listing { .. })
    }
}

/// One preview could not be produced or applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("failed to read image: {0}")]
    Host(#[from] HostError),
    #[error("image payload is empty")]
    EmptyPayload,
    /// The handle belongs to a render pass that has been replaced.
    #[error("preview belongs to a previous listing")]
    Stale,
    #[error("no placeholder for preview slot {0}")]
    MissingPlaceholder(usize),
}

/// A file could not be opened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenError {
    #[error("Error opening file: {source}")]
    Host {
        path: String,
        #[source]
        source: HostError,
    },
    #[error("Error opening file: {0} is not in the current listing")]
    UnknownItem(String),
}
