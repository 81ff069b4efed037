//! Breadcrumb bar.
//!
//! Renders the trail from root to the current folder. Every segment is
//! clickable; clicking one truncates the trail back to it.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Crumb;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Breadcrumb bar displayed above the listing.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::pathbar aria-label="Breadcrumb">
            {move || {
                let trail = ctx.listing.with(|listing| listing.trail.clone());
                let last = trail.len().saturating_sub(1);

                trail
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| {
                        view! {
                            <>
                                {(idx > 0).then(|| view! {
                                    <span class=css::separator>
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </span>
                                })}
                                <Segment crumb=crumb is_root={idx == 0} is_current={idx == last} />
                            </>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// One clickable trail segment.
#[component]
fn Segment(crumb: Crumb, is_root: bool, is_current: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let Crumb { id, name } = crumb;
    let class = if is_current {
        format!("{} {}", css::segment, css::segmentCurrent)
    } else {
        css::segment.to_string()
    };

    view! {
        <button
            class=class
            on:click=move |_| ctx.navigate_to(&id)
            aria-current=is_current.then_some("page")
        >
            {is_root.then(|| view! { <span class=css::icon><Icon icon=ic::HOME /></span> })}
            <span class=css::label>{name}</span>
        </button>
    }
}
