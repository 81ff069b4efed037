//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{HtmlInputElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Show a blocking browser alert.
///
/// Outside a browser (tests, native builds) the message is logged instead.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = window() {
            if window.alert_with_message(message).is_err() {
                tracing::warn!(message, "alert failed");
            }
            return;
        }
    }

    tracing::info!(message, "notification");
}

/// Names of the files currently picked in a file input.
pub fn selected_file_names(input: &HtmlInputElement) -> Vec<String> {
    let Some(files) = input.files() else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| file.name())
        .collect()
}
