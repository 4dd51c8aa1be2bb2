//! Root application module.
//!
//! Contains the main App component, AppContext definition, ExplorerState,
//! and the startup sequence.

use gloo_timers::future::TimeoutFuture;
use glance_core::pipeline::{self, ExplorerCell};
use glance_core::Navigator;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Explorer;
use crate::config::{APP_NAME, BRIDGE_UNAVAILABLE_MESSAGE, DEFAULT_DIRECTORY, STARTUP_DELAY_MS};
use crate::utils::{TauriHost, locale, tauri};

// ============================================================================
// ExplorerState
// ============================================================================

/// Browser state held in a Leptos signal.
///
/// The whole [`Navigator`] lives in one signal, so every change (typing,
/// navigation, preview patch) goes through a single writer and components
/// re-render from derived memos.
#[derive(Clone, Copy)]
pub struct ExplorerState {
    navigator: RwSignal<Navigator>,
}

impl ExplorerState {
    pub fn new(start: &str) -> Self {
        Self {
            navigator: RwSignal::new(
                Navigator::new(start).with_name_order(locale::compare_names),
            ),
        }
    }

    /// Read the state, tracking it in the current reactive scope.
    pub fn with<R>(&self, f: impl FnOnce(&Navigator) -> R) -> R {
        self.navigator.with(f)
    }

    /// Read the state without subscribing to it.
    pub fn with_untracked<R>(&self, f: impl FnOnce(&Navigator) -> R) -> R {
        self.navigator.with_untracked(f)
    }

    pub fn set_path_field(&self, value: String) {
        self.navigator.update(|nav| nav.set_path_field(value));
    }

    pub fn dismiss_notice(&self) {
        self.navigator.update(|nav| nav.dismiss_notice());
    }

    /// Replace the listing with a message.
    pub fn report(&self, message: &str) {
        self.navigator.update(|nav| nav.report(message));
    }
}

impl ExplorerCell for ExplorerState {
    fn update<R>(&self, f: impl FnOnce(&mut Navigator) -> R) -> Option<R> {
        self.navigator.try_update(f)
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`. Event handlers call the methods below,
/// which spawn the matching pipeline on the local executor. The pipeline
/// logs failures and reflects them in [`ExplorerState`]; the handlers only
/// trace the returned outcome.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Browser state (current directory, path field, listing).
    pub explorer: ExplorerState,
    /// Host command bridge.
    pub host: TauriHost,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            explorer: ExplorerState::new(DEFAULT_DIRECTORY),
            host: TauriHost,
        }
    }

    /// Enter pressed in the path field.
    pub fn submit_path(&self, value: String) {
        let ctx = *self;
        spawn_local(async move {
            let outcome = pipeline::submit(&ctx.host, &ctx.explorer, value).await;
            log::trace!("path submitted: {outcome:?}");
        });
    }

    /// Path field lost focus.
    pub fn blur_path(&self, value: String) {
        let ctx = *self;
        spawn_local(async move {
            let outcome = pipeline::blur(&ctx.host, &ctx.explorer, value).await;
            log::trace!("path field left: {outcome:?}");
        });
    }

    /// A listing item was clicked.
    pub fn activate(&self, path: String) {
        let ctx = *self;
        spawn_local(async move {
            let outcome = pipeline::activate(&ctx.host, &ctx.explorer, &path).await;
            log::trace!("activated {path}: {outcome:?}");
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for the host bridge, then list the default directory.
fn boot(ctx: AppContext) {
    spawn_local(async move {
        TimeoutFuture::new(STARTUP_DELAY_MS).await;

        if !tauri::is_available() {
            log::error!("Tauri API not available");
            ctx.explorer.report(BRIDGE_UNAVAILABLE_MESSAGE);
            return;
        }

        log::info!("{} ready, listing {}", APP_NAME, DEFAULT_DIRECTORY);
        let outcome = pipeline::navigate(&ctx.host, &ctx.explorer, DEFAULT_DIRECTORY).await;
        log::trace!("startup listing: {outcome:?}");
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the boot sequence
/// - Renders the Explorer inside an ErrorBoundary
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    boot(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #d9534f; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #d9534f; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            padding: 0.5rem 1.5rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload"
                    </button>
                </div>
            }
        >
            <Explorer />
        </ErrorBoundary>
    }
}
