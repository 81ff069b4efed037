//! File listing for the explorer view.
//!
//! Shows the current folder's children in stored order, either as a table
//! (name, modified, size) or as a grid of tiles. Clicking an entry enters a
//! folder or opens a file.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{ListedNode, ViewType};
use crate::utils::format::{aria_label, modified_column, size_column, tile_caption};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = Signal::derive(move || ctx.listing.with(|listing| listing.entries.clone()));
    let is_empty = Signal::derive(move || ctx.listing.with(|listing| listing.entries.is_empty()));

    view! {
        <Show
            when=move || !is_empty.get()
            fallback=|| view! { <p class=css::empty>"This folder is empty"</p> }
        >
            {move || match ctx.view_type.get() {
                ViewType::List => view! { <ListView entries=entries /> }.into_any(),
                ViewType::Grid => view! { <GridView entries=entries /> }.into_any(),
            }}
        </Show>
    }
}

// =============================================================================
// List
// =============================================================================

#[component]
fn ListView(entries: Signal<Vec<ListedNode>>) -> impl IntoView {
    view! {
        <table class=css::table aria-label="File list">
            <thead>
                <tr class=css::headerRow>
                    <th class=css::headerName>"Name"</th>
                    <th class=css::headerDate>"Modified"</th>
                    <th class=css::headerSize>"Size"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || entries.get()
                    key=|entry| entry.id.clone()
                    children=move |entry| view! { <ListRow entry=entry /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn ListRow(entry: ListedNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::for_node(&entry.node);
    let label = aria_label(&entry.node);
    let modified = modified_column(&entry.node);
    let size = size_column(&entry.node);
    let name = entry.node.name().to_string();
    let name_class = if entry.node.is_folder() {
        format!("{} {}", css::name, css::nameFolder)
    } else {
        css::name.to_string()
    };
    let id = entry.id;

    view! {
        <tr
            class=css::row
            on:click=move |_| ctx.activate(&id)
            tabindex="0"
            aria-label=label
        >
            <td class=css::nameCell>
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <span class=name_class>{name}</span>
            </td>
            <td class=css::date>{modified}</td>
            <td class=css::size>{size}</td>
        </tr>
    }
}

// =============================================================================
// Grid
// =============================================================================

#[component]
fn GridView(entries: Signal<Vec<ListedNode>>) -> impl IntoView {
    view! {
        <div class=css::grid role="grid" aria-label="File grid">
            <For
                each=move || entries.get()
                key=|entry| entry.id.clone()
                children=move |entry| view! { <GridTile entry=entry /> }
            />
        </div>
    }
}

#[component]
fn GridTile(entry: ListedNode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = ic::for_node(&entry.node);
    let label = aria_label(&entry.node);
    let caption = tile_caption(&entry.node);
    let name = entry.node.name().to_string();
    let id = entry.id;

    view! {
        <div
            class=css::tile
            on:click=move |_| ctx.activate(&id)
            role="gridcell"
            tabindex="0"
            aria-label=label
        >
            <span class=css::tileIcon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::tileName>{name}</span>
            {caption.map(|size| view! { <span class=css::tileCaption>{size}</span> })}
        </div>
    }
}
