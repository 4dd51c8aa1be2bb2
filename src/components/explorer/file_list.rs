//! Grid listing of the current directory.
//!
//! Renders the listing state: a loading/empty/error message, or a grid of
//! items. The grid is keyed by render pass and slot; each cell tracks its
//! own icon, so a patched preview only re-renders that cell.

use glance_core::{IconSource, Navigator, RenderedItem};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// CSS classes for an item cell.
fn item_class(item: &RenderedItem) -> String {
    let mut classes = vec![css::item, if item.is_dir() { css::folder } else { css::file }];
    if item.hidden {
        classes.push(css::hidden);
    }
    classes.join(" ")
}

/// The item shown at `slot` of render pass `generation`, if still current.
fn lookup(nav: &Navigator, generation: u64, slot: usize) -> Option<&RenderedItem> {
    nav.listing()
        .pass()
        .filter(|pass| pass.generation() == generation)
        .and_then(|pass| pass.items().get(slot))
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // (message, is_alert) while there is no grid to show
    let message = Memo::new(move |_| {
        ctx.explorer.with(|nav| {
            let listing = nav.listing();
            listing
                .message()
                .map(|text| (text.to_string(), listing.is_alert()))
        })
    });

    // One (generation, slot) key per cell; cells read their own content
    let slots = Memo::new(move |_| {
        ctx.explorer.with(|nav| {
            nav.listing()
                .pass()
                .map(|pass| {
                    let generation = pass.generation();
                    (0..pass.len()).map(|slot| (generation, slot)).collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    view! {
        {move || message.get().map(|(text, is_alert)| {
            let class = if is_alert { css::error } else { css::loading };
            view! { <div class=class>{text}</div> }
        })}
        <Show when=move || message.get().is_none()>
            <div class=css::grid role="grid" aria-label="Directory contents">
                <For
                    each=move || slots.get()
                    key=|key: &(u64, usize)| *key
                    children=move |(generation, slot): (u64, usize)| {
                        view! { <FileItem generation=generation index=slot /> }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn FileItem(generation: u64, index: usize) -> impl IntoView {
    let slot = index;
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let Some(item) = ctx
        .explorer
        .with_untracked(|nav| lookup(nav, generation, slot).cloned())
    else {
        return ().into_any();
    };

    // Only this cell re-renders when its preview lands
    let icon = Memo::new(move |_| {
        ctx.explorer
            .with(|nav| lookup(nav, generation, slot).map(|item| item.icon.clone()))
    });

    let class = item_class(&item);
    let aria_label = if item.is_dir() {
        format!("Folder: {}", item.name)
    } else {
        format!("File: {}", item.name)
    };

    let path_for_click = item.path.clone();
    let handle_click = move |_: ev::MouseEvent| ctx.activate(path_for_click.clone());

    let path_for_key = item.path.clone();
    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ctx.activate(path_for_key.clone());
        }
    };

    let alt = item.name.clone();
    let icon_view = move || match icon.get() {
        Some(IconSource::Folder) => view! {
            <span class=css::icon><Icon icon=ic::FOLDER /></span>
        }
        .into_any(),
        Some(IconSource::File) => view! {
            <span class=css::icon><Icon icon=ic::FILE /></span>
        }
        .into_any(),
        Some(IconSource::Preview(src)) => view! {
            <img class=css::preview src=src.to_string() alt=alt.clone() />
        }
        .into_any(),
        Some(IconSource::Placeholder) | None => view! {
            <span class=format!("{} {}", css::icon, css::placeholder)>
                <Icon icon=ic::FILE_IMAGE />
            </span>
        }
        .into_any(),
    };

    view! {
        <div
            class=class
            on:click=handle_click
            on:keydown=handle_keydown
            role="gridcell"
            tabindex="0"
            title=item.path.clone()
            aria-label=aria_label
        >
            {icon_view}
            {item.extension_label.map(|ext| view! { <div class=css::fileType>{ext}</div> })}
            <div class=css::fileName>{item.name}</div>
        </div>
    }
    .into_any()
}
