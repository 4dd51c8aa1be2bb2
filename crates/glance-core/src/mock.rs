//! In-memory host for tests.
//!
//! Enabled for unit tests and behind the `mock` feature for integration
//! tests. Records every command it receives.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::entry::DirectoryEntry;
use crate::error::HostError;
use crate::host::HostBridge;

/// A command received by [`MockHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    ReadDirectory(String),
    ReadFileBinary(String),
    OpenFile(String),
}

#[derive(Default)]
pub struct MockHost {
    directories: HashMap<String, Vec<DirectoryEntry>>,
    files: HashMap<String, Result<Vec<u8>, String>>,
    unopenable: HashMap<String, String>,
    calls: RefCell<Vec<HostCall>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory listing under an exact path.
    pub fn with_dir(mut self, path: &str, entries: Vec<DirectoryEntry>) -> Self {
        self.directories.insert(path.to_string(), entries);
        self
    }

    pub fn with_file(mut self, path: &str, bytes: Vec<u8>) -> Self {
        self.files.insert(path.to_string(), Ok(bytes));
        self
    }

    pub fn with_failing_file(mut self, path: &str, message: &str) -> Self {
        self.files.insert(path.to_string(), Err(message.to_string()));
        self
    }

    /// Make `open_file` fail for this path.
    pub fn with_unopenable(mut self, path: &str, message: &str) -> Self {
        self.unopenable.insert(path.to_string(), message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn directory_reads(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::ReadDirectory(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn binary_reads(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::ReadFileBinary(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl HostBridge for MockHost {
    async fn read_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, HostError> {
        self.record(HostCall::ReadDirectory(path.to_string()));
        self.directories.get(path).cloned().ok_or_else(|| {
            HostError::Rejected(format!(
                "Failed to read directory: No such file or directory (os error 2): {path}"
            ))
        })
    }

    async fn read_file_binary(&self, path: &str) -> Result<Vec<u8>, HostError> {
        self.record(HostCall::ReadFileBinary(path.to_string()));
        match self.files.get(path) {
            Some(Ok(bytes)) => Ok(bytes.clone()),
            Some(Err(message)) => Err(HostError::Rejected(message.clone())),
            None => Err(HostError::Rejected(
                "No such file or directory (os error 2)".to_string(),
            )),
        }
    }

    async fn open_file(&self, path: &str) -> Result<(), HostError> {
        self.record(HostCall::OpenFile(path.to_string()));
        match self.unopenable.get(path) {
            Some(message) => Err(HostError::Rejected(message.clone())),
            None => Ok(()),
        }
    }
}
