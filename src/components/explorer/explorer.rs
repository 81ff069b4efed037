//! Main explorer component.
//!
//! ## Layout
//!
//! - Header: search, view toggle, upload
//! - Breadcrumb bar
//! - File listing (list or grid)
//! - Upload dialog overlay

use leptos::prelude::*;

use super::pathbar::PathBar;
use super::upload::UploadDialog;
use super::{FileList, Header};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    view! {
        <div class=css::explorer>
            <Header />
            <PathBar />
            <main class=css::body>
                <FileList />
            </main>
            <UploadDialog />
        </div>
    }
}
