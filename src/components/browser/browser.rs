//! Main browser page.
//!
//! Heading with the current path, the file list card, a footer showing the
//! address other devices use, and the share dialog.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{FileList, ShareDialog};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION};

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// File browser page component.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let navigator = ctx.browser.navigator;

    let title = Signal::derive(move || navigator.with(|nav| nav.title()));
    let local_address =
        Signal::derive(move || navigator.with(|nav| nav.local_address().to_string()));

    view! {
        <div class=css::page>
            <h1 class=css::title>{title}</h1>

            <section class=css::card>
                <FileList />
            </section>

            <footer class=css::footer>
                <span>{format!("{} v{}", APP_NAME, APP_VERSION)}</span>
                <Show when=move || !local_address.get().is_empty()>
                    <span class=css::address title="Address used by share links">
                        <Icon icon=ic::NETWORK />
                        {local_address}
                    </span>
                </Show>
            </footer>

            <ShareDialog />
        </div>
    }
}
