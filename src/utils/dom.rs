//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Start a browser download of `url`, saving it as `file_name`.
///
/// Creates a temporary `<a download>` element, clicks it and removes it.
/// Returns `false` if any DOM step failed.
pub fn trigger_download(url: &str, file_name: &str) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Some(link) = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return false;
    };

    link.set_href(url);
    link.set_download(file_name);

    if body.append_child(&link).is_err() {
        return false;
    }
    link.click();
    link.remove();
    true
}
