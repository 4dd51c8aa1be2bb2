//! Directory entries as reported by the host, and name classification.

use serde::{Deserialize, Serialize};

/// Extensions (lowercase, without the dot) that get an inline preview.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "tif",
];

/// One filesystem object reported by `read_directory`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// File name without the parent path
    pub name: String,
    /// Full path as reported by the host
    pub path: String,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn dir(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir: false,
        }
    }

    /// Classify this entry for display.
    pub fn kind(&self) -> EntryKind {
        if self.is_dir {
            EntryKind::Folder
        } else if is_image_name(&self.name) {
            EntryKind::Image
        } else {
            EntryKind::File
        }
    }

    /// Dotfiles get a dimmed style; classification is unaffected.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Display classification of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    /// Any non-directory that is not an image
    File,
    /// A file with a previewable extension
    Image,
}

/// Lowercase text after the final `.`, if the name has a dot at all.
///
/// A leading dot counts here (`.png` yields `png`); see [`extension_label`]
/// for the stricter rule used in labels.
pub fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Whether the name's extension is one of [`IMAGE_EXTENSIONS`].
pub fn is_image_name(name: &str) -> bool {
    extension(name).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Extension label shown under generic file icons, including the dot.
///
/// Only a dot after the first character counts, so `.gitignore` has no label.
pub fn extension_label(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(&name[idx..]),
        _ => None,
    }
}
