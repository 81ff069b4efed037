//! Explorer header component.
//!
//! Contains the search box, the list/grid toggle and the upload button.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::ViewType;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with search and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let placeholder = format!("Search in {}", APP_NAME);
    let on_upload = move |_: leptos::ev::MouseEvent| ctx.upload_open.set(true);

    view! {
        <header class=css::header>
            // Search box (input only, no filtering)
            <div class=css::search>
                <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                <input class=css::searchInput type="search" placeholder=placeholder />
            </div>

            <div class=css::actionButtons>
                <ViewButton mode=ViewType::List title="List view" />
                <ViewButton mode=ViewType::Grid title="Grid view" />
                <button class=css::uploadButton on:click=on_upload title="Upload files">
                    <Icon icon=ic::UPLOAD />
                    "Upload"
                </button>
            </div>
        </header>
    }
}

/// Toggle button selecting one presentation; highlighted while active.
#[component]
fn ViewButton(mode: ViewType, title: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let icon = match mode {
        ViewType::List => ic::LIST,
        ViewType::Grid => ic::GRID,
    };
    let is_active = move || ctx.view_type.get() == mode;

    view! {
        <button
            class=move || {
                if is_active() {
                    format!("{} {}", css::actionButton, css::actionButtonActive)
                } else {
                    css::actionButton.to_string()
                }
            }
            on:click=move |_| ctx.set_view_type(mode)
            aria-pressed=move || is_active().to_string()
            title=title
        >
            <Icon icon=icon />
        </button>
    }
}
