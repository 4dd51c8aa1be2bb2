//! The host command boundary.
//!
//! The browser never touches the filesystem. Everything goes through three
//! asynchronous commands fulfilled by the host process.

use serde::Serialize;

use crate::entry::DirectoryEntry;
use crate::error::HostError;

/// Command names understood by the host.
pub mod commands {
    pub const READ_DIRECTORY: &str = "read_directory";
    pub const READ_FILE_BINARY: &str = "read_file_binary";
    pub const OPEN_FILE: &str = "open_file";
}

/// Argument object sent with every command.
#[derive(Clone, Debug, Serialize)]
pub struct PathArgs<'a> {
    pub path: &'a str,
}

/// Asynchronous access to the host's filesystem commands.
///
/// Implementations run on a single-threaded executor, so the returned
/// futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait HostBridge {
    /// List the entries of a directory.
    async fn read_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, HostError>;

    /// Read a whole file as bytes.
    async fn read_file_binary(&self, path: &str) -> Result<Vec<u8>, HostError>;

    /// Ask the host OS to open a file with its default application.
    async fn open_file(&self, path: &str) -> Result<(), HostError>;
}
