//! Drives navigations and item activation against a host.
//!
//! The [`Navigator`] lives behind an [`ExplorerCell`]: a `RefCell` in tests,
//! a reactive signal in the app. The pipeline only borrows it between host
//! calls, never across an `.await`.

use std::cell::RefCell;

use crate::error::{NavigationError, OpenError, PreviewError};
use crate::host::HostBridge;
use crate::navigation::{NavRequest, Navigator};
use crate::preview::{PreviewReport, load_previews};

/// Shared access to the browser state.
pub trait ExplorerCell {
    /// Run `f` against the state. Returns `None` if the state is gone
    /// (e.g. the view owning it was torn down).
    fn update<R>(&self, f: impl FnOnce(&mut Navigator) -> R) -> Option<R>;
}

impl ExplorerCell for RefCell<Navigator> {
    fn update<R>(&self, f: impl FnOnce(&mut Navigator) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// What activating a listing item did.
#[derive(Debug, PartialEq, Eq)]
pub enum Activation {
    /// A folder was entered (or the attempt failed and was reported)
    Navigated(Result<PreviewReport, NavigationError>),
    /// The host opened a file
    Opened,
}

/// Read the request's directory, render it, then load its previews.
pub async fn run_navigation<H, C>(
    host: &H,
    cell: &C,
    request: NavRequest,
) -> Result<PreviewReport, NavigationError>
where
    H: HostBridge,
    C: ExplorerCell,
{
    log::debug!("reading directory {}", request.target());
    let result = host.read_directory(request.target()).await;

    let jobs = cell
        .update(|nav| nav.complete(&request, result))
        .unwrap_or_else(|| {
            Err(NavigationError::Superseded {
                target: request.target().to_string(),
            })
        });

    let jobs = match jobs {
        Ok(jobs) => jobs,
        Err(e) if e.is_reportable() => {
            log::error!("{e}");
            return Err(e);
        }
        Err(e) => {
            log::debug!("{e}");
            return Err(e);
        }
    };

    log::info!(
        "listed {} ({} previews pending)",
        request.target(),
        jobs.len()
    );

    Ok(load_previews(host, jobs, |handle, src| {
        cell.update(|nav| nav.apply_preview(handle, src))
            .unwrap_or(Err(PreviewError::Stale))
    })
    .await)
}

/// Navigate to a typed path.
pub async fn navigate<H, C>(host: &H, cell: &C, input: &str) -> Result<PreviewReport, NavigationError>
where
    H: HostBridge,
    C: ExplorerCell,
{
    match cell.update(|nav| nav.request_path(input)) {
        Some(request) => run_navigation(host, cell, request).await,
        None => Err(NavigationError::Superseded {
            target: input.to_string(),
        }),
    }
}

/// Enter pressed in the path field with `value` typed.
pub async fn submit<H, C>(host: &H, cell: &C, value: String) -> Option<Result<PreviewReport, NavigationError>>
where
    H: HostBridge,
    C: ExplorerCell,
{
    let request = cell
        .update(|nav| {
            nav.set_path_field(value);
            nav.submit()
        })
        .flatten()?;
    Some(run_navigation(host, cell, request).await)
}

/// The path field lost focus with `value` typed.
pub async fn blur<H, C>(host: &H, cell: &C, value: String) -> Option<Result<PreviewReport, NavigationError>>
where
    H: HostBridge,
    C: ExplorerCell,
{
    let request = cell
        .update(|nav| {
            nav.set_path_field(value);
            nav.blur()
        })
        .flatten()?;
    Some(run_navigation(host, cell, request).await)
}

/// A listing item was clicked: enter folders, open files.
pub async fn activate<H, C>(host: &H, cell: &C, path: &str) -> Result<Activation, OpenError>
where
    H: HostBridge,
    C: ExplorerCell,
{
    let is_dir = cell
        .update(|nav| {
            nav.listing()
                .pass()
                .and_then(|pass| pass.item(path))
                .map(|item| item.is_dir())
        })
        .flatten();

    match is_dir {
        Some(true) => {
            let Some(request) = cell.update(|nav| nav.request_folder(path)) else {
                return Err(OpenError::UnknownItem(path.to_string()));
            };
            Ok(Activation::Navigated(
                run_navigation(host, cell, request).await,
            ))
        }
        Some(false) => open(host, cell, path).await.map(|()| Activation::Opened),
        None => {
            let err = OpenError::UnknownItem(path.to_string());
            log::warn!("{err}");
            cell.update(|nav| nav.report_open_failure(&err));
            Err(err)
        }
    }
}

/// Ask the host to open a file; failures become the inline notice.
pub async fn open<H, C>(host: &H, cell: &C, path: &str) -> Result<(), OpenError>
where
    H: HostBridge,
    C: ExplorerCell,
{
    log::debug!("opening {path}");
    match host.open_file(path).await {
        Ok(()) => {
            log::info!("opened {path}");
            Ok(())
        }
        Err(source) => {
            let err = OpenError::Host {
                path: path.to_string(),
                source,
            };
            log::error!("{err}");
            cell.update(|nav| nav.report_open_failure(&err));
            Err(err)
        }
    }
}
