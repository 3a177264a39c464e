//! Share dialog component.
//!
//! Modal showing the share link of a file as a QR code plus its text, so a
//! device on the same network can fetch the file.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::{log, qr};

stylance::import_crate_style!(css, "src/components/browser/share_dialog.module.css");

#[component]
pub fn ShareDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let share = ctx.share;

    let code_svg = Memo::new(move |_| {
        let url = share.url.get();
        if url.is_empty() {
            return None;
        }
        match qr::render_svg(&url) {
            Ok(svg) => Some(svg),
            Err(e) => {
                log::error(&format!("Failed to render share code: {}", e));
                None
            }
        }
    });

    view! {
        <Show when=move || share.is_open.get()>
            <div class=css::backdrop on:click=move |_| share.close()>
                <div
                    class=css::dialog
                    role="dialog"
                    aria-modal="true"
                    aria-label="Share file"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class=css::closeButton
                        on:click=move |_| share.close()
                        aria-label="Close"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                    {move || match code_svg.get() {
                        Some(svg) => view! { <div class=css::code inner_html=svg></div> }.into_any(),
                        None => view! {
                            <div class=css::codeError>"Link too long for a QR code"</div>
                        }
                        .into_any(),
                    }}
                    <a class=css::url href=move || share.url.get()>
                        {move || share.url.get()}
                    </a>
                </div>
            </div>
        </Show>
    }
}
