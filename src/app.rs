//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that bridges the
//! [`DriveBrowser`] controller to Leptos signals.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::explorer::Explorer;
use crate::config::{BrowserConfig, UPLOAD_SIMULATED_MESSAGE};
use crate::core::{BrowserEvent, DriveBrowser, HierarchyStore};
use crate::models::{Listing, NodeId, ViewType};
use crate::utils::{dom, format};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The browser itself is not reactive. It lives in a local [`StoredValue`]
/// and pushes its events into the signals below through a subscription, so
/// components only ever read plain snapshots.
///
/// # Note
///
/// This struct is `Copy` because every field is an arena handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    browser: StoredValue<DriveBrowser, LocalStorage>,
    /// Current folder, its children and the breadcrumb trail.
    pub listing: RwSignal<Listing>,
    /// List or grid presentation.
    pub view_type: RwSignal<ViewType>,
    /// Whether the upload dialog is shown.
    pub upload_open: RwSignal<bool>,
}

impl AppContext {
    /// Creates a context positioned at the root of `store`.
    pub fn new(store: Arc<HierarchyStore>, config: &BrowserConfig) -> Self {
        let mut browser = DriveBrowser::new(store, config);

        let listing = RwSignal::new(browser.listing());
        let view_type = RwSignal::new(browser.view_type());
        let upload_open = RwSignal::new(false);

        browser.subscribe(move |event: &BrowserEvent| match event {
            BrowserEvent::ListingChanged(next) => listing.set(next.clone()),
            BrowserEvent::ViewTypeChanged(next) => view_type.set(*next),
            BrowserEvent::OpenRequested(request) => dom::alert(&format::open_message(request)),
            BrowserEvent::UploadRequested(_) => {
                upload_open.set(false);
                dom::alert(UPLOAD_SIMULATED_MESSAGE);
            }
        });

        Self {
            browser: StoredValue::new_local(browser),
            listing,
            view_type,
            upload_open,
        }
    }

    /// Navigate to a folder (listing entry or breadcrumb).
    pub fn navigate_to(&self, id: &NodeId) {
        self.browser.update_value(|browser| {
            browser.navigate_to(id.as_str());
        });
    }

    /// Open a file or enter a folder, depending on what `id` is.
    pub fn activate(&self, id: &NodeId) {
        self.browser.update_value(|browser| browser.activate(id.as_str()));
    }

    pub fn set_view_type(&self, view_type: ViewType) {
        self.browser
            .update_value(|browser| browser.set_view_type(view_type));
    }

    /// Submit the upload form with the picked file names.
    pub fn request_upload(&self, files: Vec<String>) {
        self.browser
            .update_value(move |browser| browser.request_upload(files));
    }
}

/// Root application component.
///
/// Loads the bundled drive, creates and provides the [`AppContext`] and
/// renders the explorer. A dataset that fails to load leaves an empty root.
#[component]
pub fn App(config: BrowserConfig) -> impl IntoView {
    let store = HierarchyStore::sample().unwrap_or_else(|err| {
        tracing::error!(%err, "failed to load drive dataset");
        HierarchyStore::empty()
    });

    let ctx = AppContext::new(Arc::new(store), &config);
    provide_context(ctx);

    view! { <Explorer /> }
}
