//! Inline error banner.
//!
//! Shows file-open failures above the listing without replacing it.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/notice.module.css");

#[component]
pub fn Notice() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let notice = Memo::new(move |_| ctx.explorer.with(|nav| nav.notice().map(str::to_string)));

    view! {
        {move || {
            notice.get().map(|message| view! {
                <div class=css::notice role="alert">
                    <span class=css::message>{message}</span>
                    <button
                        class=css::dismiss
                        aria-label="Dismiss"
                        on:click=move |_| ctx.explorer.dismiss_notice()
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            })
        }}
    }
}
