//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`PathBar`] - Editable current-directory field
//! - [`Notice`] - Dismissible inline error banner
//! - [`FileList`] - Grid view of the current listing

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod notice;
mod pathbar;

pub use explorer::Explorer;
pub use file_list::FileList;
pub use notice::Notice;
pub use pathbar::PathBar;
