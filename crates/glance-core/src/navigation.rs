//! Navigation state: current directory, path field and listing.
//!
//! [`Navigator`] is the single owner of the browser's mutable state. All
//! changes are synchronous; the asynchronous host calls happen outside it
//! (see [`crate::pipeline`]) and feed their results back through
//! [`Navigator::complete`] and [`Navigator::apply_preview`].
//!
//! ## Invariants
//!
//! - `current` only changes when a directory read succeeds.
//! - A failed read restores the path field to `current`.
//! - Only the most recently issued request may commit.

use crate::entry::DirectoryEntry;
use crate::error::{HostError, NavigationError, OpenError, PreviewError};
use crate::listing::{Listing, NameOrder, fold_compare};
use crate::preview::{PreviewHandle, PreviewJob};

/// Path separator appended to typed targets.
pub const SEPARATOR: char = '/';

/// Treat every typed target as a directory by ensuring a trailing separator.
pub fn normalize(path: &str) -> String {
    if path.ends_with(SEPARATOR) {
        path.to_string()
    } else {
        format!("{path}{SEPARATOR}")
    }
}

/// An issued directory read, waiting for the host's reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRequest {
    generation: u64,
    /// What the user asked for, used in error messages
    input: String,
    /// Path sent to the host
    target: String,
}

impl NavRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Browser state with a single writer.
#[derive(Clone, Debug)]
pub struct Navigator {
    /// Last directory that listed successfully
    current: String,
    /// Contents of the path input
    path_field: String,
    listing: Listing,
    /// Inline error banner above the listing
    notice: Option<String>,
    /// Generation of the most recent request
    generation: u64,
    /// Name order within the folder and file groups
    order: NameOrder,
}

impl Navigator {
    /// Create the state for a start directory. Nothing is loaded yet.
    pub fn new(start: impl Into<String>) -> Self {
        let start = start.into();
        Self {
            path_field: start.clone(),
            current: start,
            listing: Listing::Loading,
            notice: None,
            generation: 0,
            order: fold_compare,
        }
    }

    /// Use a platform collator for name order.
    pub fn with_name_order(mut self, order: NameOrder) -> Self {
        self.order = order;
        self
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn path_field(&self) -> &str {
        &self.path_field
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mirror the user's typing.
    pub fn set_path_field(&mut self, value: impl Into<String>) {
        self.path_field = value.into();
    }

    /// Enter in the path field.
    pub fn submit(&mut self) -> Option<NavRequest> {
        let value = self.path_field.trim().to_string();
        if value.is_empty() {
            return None;
        }
        Some(self.request_path(&value))
    }

    /// The path field lost focus.
    ///
    /// An emptied field snaps back to the current directory without a
    /// reload; an unchanged one does nothing.
    pub fn blur(&mut self) -> Option<NavRequest> {
        let value = self.path_field.trim().to_string();
        if value.is_empty() {
            self.path_field = self.current.clone();
            None
        } else if value == self.current {
            None
        } else {
            Some(self.request_path(&value))
        }
    }

    /// Start a navigation to a typed path.
    pub fn request_path(&mut self, input: &str) -> NavRequest {
        let input = input.trim();
        self.begin(input.to_string(), normalize(input))
    }

    /// Start a navigation to a folder from the listing. Its path came from
    /// the host, so it is used as is.
    pub fn request_folder(&mut self, path: &str) -> NavRequest {
        self.begin(path.to_string(), path.to_string())
    }

    fn begin(&mut self, input: String, target: String) -> NavRequest {
        self.generation += 1;
        self.listing = Listing::Loading;
        self.path_field = target.clone();
        self.notice = None;

        NavRequest {
            generation: self.generation,
            input,
            target,
        }
    }

    /// Apply the host's reply to a request.
    ///
    /// On success, commits the target and returns the preview work for the
    /// new listing. On failure, shows the error in the listing area and
    /// restores the path field; `current` is untouched either way unless
    /// the read succeeded.
    pub fn complete(
        &mut self,
        request: &NavRequest,
        result: Result<Vec<DirectoryEntry>, HostError>,
    ) -> Result<Vec<PreviewJob>, NavigationError> {
        if request.generation != self.generation {
            return Err(NavigationError::Superseded {
                target: request.target.clone(),
            });
        }

        match result {
            Ok(entries) => {
                self.current = request.target.clone();
                self.path_field = request.target.clone();
                self.listing = Listing::render(request.generation, entries, self.order);
                Ok(self
                    .listing
                    .pass()
                    .map(|pass| pass.preview_jobs())
                    .unwrap_or_default())
            }
            Err(source) => {
                let err = NavigationError::Listing {
                    input: request.input.clone(),
                    source,
                };
                self.listing = Listing::Failed(err.to_string());
                self.path_field = self.current.clone();
                Err(err)
            }
        }
    }

    /// Put a decoded preview in place, if its listing is still shown.
    pub fn apply_preview(&mut self, handle: PreviewHandle, src: String) -> Result<(), PreviewError> {
        match self.listing.pass_mut() {
            Some(pass) => pass.patch(handle, src),
            None => Err(PreviewError::Stale),
        }
    }

    pub fn report_open_failure(&mut self, err: &OpenError) {
        self.notice = Some(err.to_string());
    }

    /// Replace the listing with a message, e.g. when the host is missing.
    pub fn report(&mut self, message: impl Into<String>) {
        self.listing = Listing::Failed(message.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::IconSource;

    fn listed(nav: &mut Navigator, input: &str, entries: Vec<DirectoryEntry>) -> Vec<PreviewJob> {
        let request = nav.request_path(input);
        nav.complete(&request, Ok(entries)).unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/home/user"), "/home/user/");
        assert_eq!(normalize("/home/user/"), "/home/user/");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn test_request_shows_loading_and_target() {
        let mut nav = Navigator::new("/home/");
        let request = nav.request_path("  /tmp ");
        assert_eq!(request.target(), "/tmp/");
        assert_eq!(request.input(), "/tmp");
        assert_eq!(nav.path_field(), "/tmp/");
        assert_eq!(nav.listing(), &Listing::Loading);
        assert_eq!(nav.current(), "/home/");
    }

    #[test]
    fn test_success_commits() {
        let mut nav = Navigator::new("/home/");
        let jobs = listed(
            &mut nav,
            "/home/user",
            vec![
                DirectoryEntry::file("a.png", "/home/user/a.png"),
                DirectoryEntry::file("b.txt", "/home/user/b.txt"),
            ],
        );
        assert_eq!(nav.current(), "/home/user/");
        assert_eq!(nav.path_field(), "/home/user/");
        assert_eq!(jobs.len(), 1);
        assert_eq!(nav.listing().pass().unwrap().len(), 2);
    }

    #[test]
    fn test_failure_restores_previous_path() {
        let mut nav = Navigator::new("/home/");
        listed(&mut nav, "/home/", vec![DirectoryEntry::dir("user", "/home/user")]);

        nav.set_path_field("/does/not/exist");
        let request = nav.submit().unwrap();
        let err = nav
            .complete(&request, Err(HostError::Rejected("not found".to_string())))
            .unwrap_err();

        assert!(err.is_reportable());
        assert_eq!(nav.current(), "/home/");
        assert_eq!(nav.path_field(), "/home/");
        assert_eq!(
            nav.listing().message(),
            Some("Error navigating to \"/does/not/exist\": Error reading directory: not found")
        );
    }

    #[test]
    fn test_superseded_request_is_dropped() {
        let mut nav = Navigator::new("/home/");
        let first = nav.request_path("/a");
        let second = nav.request_path("/b");

        let err = nav
            .complete(&first, Ok(vec![DirectoryEntry::file("x", "/a/x")]))
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::Superseded {
                target: "/a/".to_string()
            }
        );
        assert_eq!(nav.current(), "/home/");
        assert_eq!(nav.listing(), &Listing::Loading);

        nav.complete(&second, Ok(Vec::new())).unwrap();
        assert_eq!(nav.current(), "/b/");
        assert_eq!(nav.listing(), &Listing::Empty);
    }

    #[test]
    fn test_submit_ignores_blank() {
        let mut nav = Navigator::new("/home/");
        nav.set_path_field("   ");
        assert!(nav.submit().is_none());
        assert_eq!(nav.generation(), 0);
    }

    #[test]
    fn test_blur_rules() {
        let mut nav = Navigator::new("/home/");

        nav.set_path_field("");
        assert!(nav.blur().is_none());
        assert_eq!(nav.path_field(), "/home/");

        nav.set_path_field(" /home/ ");
        assert!(nav.blur().is_none());

        nav.set_path_field("/srv");
        let request = nav.blur().unwrap();
        assert_eq!(request.target(), "/srv/");
    }

    #[test]
    fn test_folder_request_is_verbatim() {
        let mut nav = Navigator::new("/home/");
        let request = nav.request_folder("/home/user/docs");
        assert_eq!(request.target(), "/home/user/docs");
        nav.complete(&request, Ok(Vec::new())).unwrap();
        assert_eq!(nav.current(), "/home/user/docs");
    }

    #[test]
    fn test_preview_after_navigation_is_stale() {
        let mut nav = Navigator::new("/home/");
        let jobs = listed(&mut nav, "/pics", vec![DirectoryEntry::file("a.png", "/pics/a.png")]);
        let handle = jobs[0].handle;

        // Navigating away while the preview is in flight
        let request = nav.request_path("/docs");
        assert_eq!(nav.apply_preview(handle, "data:".to_string()), Err(PreviewError::Stale));

        nav.complete(&request, Ok(vec![DirectoryEntry::file("b.png", "/docs/b.png")]))
            .unwrap();
        assert_eq!(nav.apply_preview(handle, "data:".to_string()), Err(PreviewError::Stale));
        assert_eq!(
            nav.listing().pass().unwrap().item("/docs/b.png").unwrap().icon,
            IconSource::Placeholder
        );
    }

    #[test]
    fn test_name_order_applies_to_listing() {
        let mut nav = Navigator::new("/").with_name_order(|a, b| b.cmp(a));
        listed(
            &mut nav,
            "/",
            vec![
                DirectoryEntry::file("a", "/a"),
                DirectoryEntry::file("b", "/b"),
            ],
        );
        let names: Vec<&str> = nav
            .listing()
            .pass()
            .unwrap()
            .items()
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_notice_cleared_by_navigation() {
        let mut nav = Navigator::new("/home/");
        nav.report_open_failure(&OpenError::UnknownItem("/x".to_string()));
        assert!(nav.notice().is_some());
        nav.request_path("/tmp");
        assert!(nav.notice().is_none());
    }
}
