//! Main explorer component.
//!
//! ## Layout
//!
//! - Path field on top
//! - Notice banner (only while an open error is pending)
//! - Scrollable grid listing filling the rest

use leptos::prelude::*;

use super::{FileList, Notice, PathBar};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    view! {
        <div class=css::explorer>
            <PathBar />
            <Notice />
            <div class=css::body>
                <FileList />
            </div>
        </div>
    }
}
