//! Upload dialog.
//!
//! Lets the user pick files for the current folder. Submitting only raises a
//! simulated upload; nothing is transferred or added to the drive.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom::selected_file_names;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Modal upload form, shown while `AppContext::upload_open` is set.
#[component]
pub fn UploadDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let input_ref = NodeRef::<html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let files = input_ref
            .get()
            .map(|input| selected_file_names(&input))
            .unwrap_or_default();
        ctx.request_upload(files);
    };

    let on_close = move |_: leptos::ev::MouseEvent| ctx.upload_open.set(false);

    view! {
        <Show when=move || ctx.upload_open.get()>
            <div class=css::overlay>
                <div class=css::dialog role="dialog" aria-modal="true" aria-labelledby="upload-title">
                    <div class=css::dialogHeader>
                        <h2 id="upload-title" class=css::dialogTitle>"Upload files"</h2>
                        <button class=css::actionButton on:click=on_close title="Close">
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                    <p class=css::dialogDescription>"Upload files to your current folder."</p>
                    <form on:submit=on_submit>
                        <input class=css::fileInput node_ref=input_ref id="file" type="file" multiple=true />
                        <div class=css::dialogFooter>
                            <button class=css::uploadButton type="submit">"Upload"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
