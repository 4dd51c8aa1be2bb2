//! Listing area state and the per-pass item arena.
//!
//! A successful navigation turns the host's raw entries into a
//! [`RenderPass`]: the entries sorted, classified and given icons, with
//! every image carrying a [`PreviewHandle`] for the preview loader. The
//! whole pass exists before any preview is fetched, and it is replaced
//! wholesale by the next navigation.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::entry::{DirectoryEntry, EntryKind, extension_label};
use crate::error::PreviewError;
use crate::preview::{PreviewHandle, PreviewJob};

/// Shown while a directory read is in flight.
pub const LOADING_MESSAGE: &str = "Loading directory contents...";

/// Shown in place of the grid for an empty directory.
pub const EMPTY_MESSAGE: &str = "Directory is empty";

/// What the item's icon slot displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconSource {
    Folder,
    File,
    /// Image waiting for (or having failed) its preview
    Placeholder,
    /// Decoded preview as a `data:` URL, shared with the view
    Preview(Arc<str>),
}

/// View state for one entry during one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedItem {
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
    pub hidden: bool,
    pub icon: IconSource,
    /// `.ext` label under generic file icons
    pub extension_label: Option<String>,
    /// Set for images only
    pub preview: Option<PreviewHandle>,
}

impl RenderedItem {
    fn new(entry: DirectoryEntry, handle: PreviewHandle) -> Self {
        let kind = entry.kind();
        let hidden = entry.is_hidden();
        let (icon, extension_label, preview) = match kind {
            EntryKind::Folder => (IconSource::Folder, None, None),
            EntryKind::Image => (IconSource::Placeholder, None, Some(handle)),
            EntryKind::File => (
                IconSource::File,
                extension_label(&entry.name).map(str::to_string),
                None,
            ),
        };

        Self {
            name: entry.name,
            path: entry.path,
            kind,
            hidden,
            icon,
            extension_label,
            preview,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// Comparison of two display names.
pub type NameOrder = fn(&str, &str) -> Ordering;

/// Case- and accent-insensitive name order for hosts without a locale
/// collator. Punctuation and symbols sort before digits, digits before
/// letters.
pub fn fold_compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

fn collation_key(name: &str) -> Vec<(u8, char)> {
    name.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .map(|c| {
            let class = if c.is_alphabetic() {
                2
            } else if c.is_numeric() {
                1
            } else {
                0
            };
            (class, c)
        })
        .collect()
}

/// Sort entries for display: directories first, then by `compare` on the
/// name. The sort is stable, so equal names keep their host order.
pub fn sort_entries<F>(entries: &mut [DirectoryEntry], compare: F)
where
    F: Fn(&str, &str) -> Ordering,
{
    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| compare(&a.name, &b.name))
    });
}

/// All rendered items of one successful navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPass {
    generation: u64,
    items: Vec<RenderedItem>,
    /// Entry path -> slot in `items`
    slots: HashMap<String, usize>,
}

impl RenderPass {
    /// Build the full skeleton for a non-empty listing.
    pub fn new<F>(generation: u64, mut entries: Vec<DirectoryEntry>, compare: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering,
    {
        sort_entries(&mut entries, compare);

        let items: Vec<RenderedItem> = entries
            .into_iter()
            .enumerate()
            .map(|(slot, entry)| RenderedItem::new(entry, PreviewHandle { generation, slot }))
            .collect();
        let slots = items
            .iter()
            .enumerate()
            .map(|(slot, item)| (item.path.clone(), slot))
            .collect();

        Self {
            generation,
            items,
            slots,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn items(&self) -> &[RenderedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its full path.
    pub fn item(&self, path: &str) -> Option<&RenderedItem> {
        self.slots.get(path).and_then(|&slot| self.items.get(slot))
    }

    /// Preview work for every image, in listing order.
    pub fn preview_jobs(&self) -> Vec<PreviewJob> {
        self.items
            .iter()
            .filter_map(|item| {
                item.preview.map(|handle| PreviewJob {
                    handle,
                    path: item.path.clone(),
                })
            })
            .collect()
    }

    /// Replace a placeholder with a decoded preview.
    pub fn patch(&mut self, handle: PreviewHandle, src: impl Into<Arc<str>>) -> Result<(), PreviewError> {
        if handle.generation != self.generation {
            return Err(PreviewError::Stale);
        }
        match self.items.get_mut(handle.slot) {
            Some(item) if item.preview == Some(handle) => {
                item.icon = IconSource::Preview(src.into());
                Ok(())
            }
            _ => Err(PreviewError::MissingPlaceholder(handle.slot)),
        }
    }
}

/// Content of the listing area.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Listing {
    #[default]
    Loading,
    Empty,
    /// Error message replacing the grid
    Failed(String),
    Ready(RenderPass),
}

impl Listing {
    /// Render a directory read. An empty read is terminal for the pass.
    pub fn render<F>(generation: u64, entries: Vec<DirectoryEntry>, compare: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering,
    {
        if entries.is_empty() {
            Self::Empty
        } else {
            Self::Ready(RenderPass::new(generation, entries, compare))
        }
    }

    pub fn pass(&self) -> Option<&RenderPass> {
        match self {
            Self::Ready(pass) => Some(pass),
            _ => None,
        }
    }

    pub fn pass_mut(&mut self) -> Option<&mut RenderPass> {
        match self {
            Self::Ready(pass) => Some(pass),
            _ => None,
        }
    }

    /// Text shown instead of the grid, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Failed(message) => Some(message),
            Self::Ready(_) => None,
        }
    }

    /// Whether the message gets alert styling. An empty directory is
    /// styled like a failure; only the loading message is not.
    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(generation: u64, entries: Vec<DirectoryEntry>) -> RenderPass {
        RenderPass::new(generation, entries, fold_compare)
    }

    fn names(pass: &RenderPass) -> Vec<&str> {
        pass.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_sort_dirs_first_case_insensitive() {
        let pass = render(
            1,
            vec![
                DirectoryEntry::file("b.txt", "/b.txt"),
                DirectoryEntry::dir("A", "/A"),
                DirectoryEntry::file("a.txt", "/a.txt"),
            ],
        );
        assert_eq!(names(&pass), vec!["A", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut entries = vec![
            DirectoryEntry::file("Readme", "/x/Readme"),
            DirectoryEntry::dir("zeta", "/zeta"),
            DirectoryEntry::file("README", "/y/README"),
            DirectoryEntry::dir("Alpha", "/Alpha"),
            DirectoryEntry::file("readme", "/z/readme"),
        ];
        sort_entries(&mut entries, fold_compare);
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/Alpha", "/zeta", "/x/Readme", "/y/README", "/z/readme"]
        );
    }

    #[test]
    fn test_sorted_adjacent_pairs() {
        let pass = render(
            1,
            vec![
                DirectoryEntry::file("Zoo.md", "/Zoo.md"),
                DirectoryEntry::file("apple.png", "/apple.png"),
                DirectoryEntry::dir("src", "/src"),
                DirectoryEntry::file(".env", "/.env"),
                DirectoryEntry::dir("Docs", "/Docs"),
                DirectoryEntry::file("mango.rs", "/mango.rs"),
            ],
        );
        for pair in pass.items().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.is_dir() >= b.is_dir());
            if a.is_dir() == b.is_dir() {
                assert_ne!(fold_compare(&a.name, &b.name), Ordering::Greater);
            }
        }
    }

    #[test]
    fn test_icons_and_labels() {
        let pass = render(
            3,
            vec![
                DirectoryEntry::file("photo.JPG", "/photo.JPG"),
                DirectoryEntry::file("archive.tar.gz", "/archive.tar.gz"),
                DirectoryEntry::file(".gitignore", "/.gitignore"),
                DirectoryEntry::dir("music", "/music"),
            ],
        );

        let music = pass.item("/music").unwrap();
        assert_eq!(music.icon, IconSource::Folder);
        assert_eq!(music.preview, None);

        let photo = pass.item("/photo.JPG").unwrap();
        assert_eq!(photo.kind, EntryKind::Image);
        assert_eq!(photo.icon, IconSource::Placeholder);
        assert_eq!(photo.extension_label, None);
        assert_eq!(photo.preview.map(|h| h.generation), Some(3));

        let archive = pass.item("/archive.tar.gz").unwrap();
        assert_eq!(archive.kind, EntryKind::File);
        assert_eq!(archive.extension_label.as_deref(), Some(".gz"));

        let gitignore = pass.item("/.gitignore").unwrap();
        assert_eq!(gitignore.kind, EntryKind::File);
        assert!(gitignore.hidden);
        assert_eq!(gitignore.extension_label, None);
    }

    #[test]
    fn test_preview_jobs_in_listing_order() {
        let pass = render(
            1,
            vec![
                DirectoryEntry::file("c.png", "/c.png"),
                DirectoryEntry::file("notes.txt", "/notes.txt"),
                DirectoryEntry::file("A.gif", "/A.gif"),
                DirectoryEntry::dir("b.jpg", "/b.jpg"),
            ],
        );
        let jobs: Vec<String> = pass.preview_jobs().into_iter().map(|j| j.path).collect();
        assert_eq!(jobs, vec!["/A.gif", "/c.png"]);
    }

    #[test]
    fn test_patch_replaces_placeholder() {
        let mut pass = render(2, vec![DirectoryEntry::file("a.png", "/a.png")]);
        let job = pass.preview_jobs().remove(0);
        pass.patch(job.handle, "data:image/png;base64,AA==".to_string())
            .unwrap();
        assert_eq!(
            pass.item("/a.png").unwrap().icon,
            IconSource::Preview("data:image/png;base64,AA==".into())
        );
    }

    #[test]
    fn test_cloned_pass_shares_preview() {
        let mut pass = render(1, vec![DirectoryEntry::file("a.png", "/a.png")]);
        let job = pass.preview_jobs().remove(0);
        pass.patch(job.handle, "data:image/png;base64,AA==").unwrap();

        let copy = pass.clone();
        match (&pass.items()[0].icon, &copy.items()[0].icon) {
            (IconSource::Preview(a), IconSource::Preview(b)) => assert!(Arc::ptr_eq(a, b)),
            other => panic!("expected previews, got {other:?}"),
        }
    }

    #[test]
    fn test_patch_rejects_stale_and_non_image() {
        let mut pass = render(
            5,
            vec![
                DirectoryEntry::file("a.png", "/a.png"),
                DirectoryEntry::file("b.txt", "/b.txt"),
            ],
        );
        let stale = PreviewHandle {
            generation: 4,
            slot: 0,
        };
        assert_eq!(pass.patch(stale, String::new()), Err(PreviewError::Stale));

        let not_image = PreviewHandle {
            generation: 5,
            slot: 1,
        };
        assert_eq!(
            pass.patch(not_image, String::new()),
            Err(PreviewError::MissingPlaceholder(1))
        );

        let out_of_range = PreviewHandle {
            generation: 5,
            slot: 9,
        };
        assert_eq!(
            pass.patch(out_of_range, String::new()),
            Err(PreviewError::MissingPlaceholder(9))
        );
        assert_eq!(pass.item("/a.png").unwrap().icon, IconSource::Placeholder);
    }

    #[test]
    fn test_fold_compare_accents_and_symbols() {
        let pass = render(
            1,
            vec![
                DirectoryEntry::file("zebra.txt", "/zebra.txt"),
                DirectoryEntry::file("Éclair.txt", "/Éclair.txt"),
                DirectoryEntry::file("~backup.txt", "/~backup.txt"),
                DirectoryEntry::file("apple.txt", "/apple.txt"),
            ],
        );
        assert_eq!(
            names(&pass),
            vec!["~backup.txt", "apple.txt", "Éclair.txt", "zebra.txt"]
        );
        assert_eq!(fold_compare("École", "ecole"), Ordering::Equal);
        assert_eq!(fold_compare("10.txt", "a.txt"), Ordering::Less);
    }

    #[test]
    fn test_sort_uses_given_order() {
        let reversed = |a: &str, b: &str| b.cmp(a);
        let pass = RenderPass::new(
            1,
            vec![
                DirectoryEntry::file("a", "/a"),
                DirectoryEntry::dir("x", "/x"),
                DirectoryEntry::file("c", "/c"),
                DirectoryEntry::dir("y", "/y"),
            ],
            reversed,
        );
        assert_eq!(names(&pass), vec!["y", "x", "c", "a"]);
    }

    #[test]
    fn test_render_empty() {
        let listing = Listing::render(1, Vec::new(), fold_compare);
        assert_eq!(listing, Listing::Empty);
        assert_eq!(listing.message(), Some(EMPTY_MESSAGE));
        assert!(listing.pass().is_none());
        assert!(listing.is_alert());
        assert!(!Listing::Loading.is_alert());
    }
}
