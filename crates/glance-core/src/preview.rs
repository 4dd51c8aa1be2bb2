//! Sequential image preview loading.
//!
//! After a listing is rendered, every image placeholder is filled one at a
//! time, in listing order: read bytes from the host, encode them as a
//! `data:` URL, patch the placeholder. A failure at any step is logged and
//! dropped so it never affects the other previews.

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::entry::extension;
use crate::error::PreviewError;
use crate::host::HostBridge;

/// MIME type used when the extension has no specific mapping.
pub const DEFAULT_MIME: &str = "image/png";

/// Address of one placeholder within one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PreviewHandle {
    /// Render pass the placeholder belongs to
    pub generation: u64,
    /// Index of the item within that pass
    pub slot: usize,
}

/// One preview to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewJob {
    pub handle: PreviewHandle,
    pub path: String,
}

/// Outcome of one preview run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewReport {
    /// Paths attempted, in order
    pub attempted: Vec<String>,
    pub loaded: usize,
    pub failed: usize,
}

/// MIME type for an image path, by extension.
pub fn mime_for(path: &str) -> &'static str {
    match extension(path).as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => DEFAULT_MIME,
    }
}

/// Inline `data:` URL for an image's bytes.
pub fn data_url(path: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for(path), STANDARD.encode(bytes))
}

/// Read one image from the host and encode it.
pub async fn fetch_preview<H: HostBridge>(host: &H, path: &str) -> Result<String, PreviewError> {
    let bytes = host.read_file_binary(path).await?;
    if bytes.is_empty() {
        return Err(PreviewError::EmptyPayload);
    }
    Ok(data_url(path, &bytes))
}

/// Load every job in order, handing each encoded preview to `patch`.
///
/// Each job finishes (or fails) before the next one starts. Errors from the
/// host or from `patch` are counted and logged, never returned.
pub async fn load_previews<H, F>(host: &H, jobs: Vec<PreviewJob>, mut patch: F) -> PreviewReport
where
    H: HostBridge,
    F: FnMut(PreviewHandle, String) -> Result<(), PreviewError>,
{
    let mut report = PreviewReport::default();

    for job in jobs {
        report.attempted.push(job.path.clone());

        let result = match fetch_preview(host, &job.path).await {
            Ok(url) => patch(job.handle, url),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => report.loaded += 1,
            Err(PreviewError::Stale) => {
                log::debug!("dropping preview for {}: listing replaced", job.path);
                report.failed += 1;
            }
            Err(e) => {
                log::warn!("error loading image preview for {}: {}", job.path, e);
                report.failed += 1;
            }
        }
    }

    log::debug!(
        "previews done: {} loaded, {} failed",
        report.loaded,
        report.failed
    );
    report
}
