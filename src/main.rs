//! Browser front end of the file-share service.
//!
//! Lists the served directory tree, downloads files and shows share links
//! as QR codes for other devices on the same network.

mod app;
mod components;
mod config;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    utils::log::info(&format!("{} v{} starting", config::APP_NAME, config::APP_VERSION));
    mount_to(root, App).forget();
}
