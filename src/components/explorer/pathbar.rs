//! Path field component.
//!
//! A single-line input showing the current directory. Enter navigates to
//! the typed path; leaving the field navigates too if the text changed, or
//! snaps back to the current directory if it was cleared.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PATH_PLACEHOLDER;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Read the current text of the input an event was fired on.
fn input_value(ev: &web_sys::Event) -> Option<String> {
    let target = ev.target()?;
    Some(target.unchecked_into::<web_sys::HtmlInputElement>().value())
}

/// Path field displayed at the top of the explorer.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let path_field = Memo::new(move |_| ctx.explorer.with(|nav| nav.path_field().to_string()));

    let handle_input = move |ev: ev::Event| {
        if let Some(value) = input_value(&ev) {
            ctx.explorer.set_path_field(value);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter"
            && let Some(value) = input_value(&ev)
        {
            ev.prevent_default();
            ctx.submit_path(value);
        }
    };

    let handle_blur = move |ev: ev::FocusEvent| {
        if let Some(value) = input_value(&ev) {
            ctx.blur_path(value);
        }
    };

    view! {
        <nav class=css::pathbar>
            <span class=css::icon aria-hidden="true"><Icon icon=ic::EXPLORER /></span>
            <input
                type="text"
                class=css::input
                aria-label="Current path"
                placeholder=PATH_PLACEHOLDER
                autocomplete="off"
                spellcheck="false"
                prop:value=path_field
                on:input=handle_input
                on:keydown=handle_keydown
                on:blur=handle_blur
            />
        </nav>
    }
}
