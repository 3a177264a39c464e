//! File list component.
//!
//! Displays the parent row followed by the current directory's entries in
//! server order. Activating a row opens the directory or downloads the file;
//! files carry a share button.

use fileshare_core::DirectoryEntry;
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PARENT_ROW_LABEL;

stylance::import_crate_style!(css, "src/components/browser/file_list.module.css");

/// Get icon for file/directory based on type
fn get_icon(entry: &DirectoryEntry) -> IconData {
    if entry.is_dir { ic::FOLDER } else { ic::FILE }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let navigator = ctx.browser.navigator;

    let entries = Signal::derive(move || navigator.with(|nav| nav.entries().to_vec()));

    view! {
        <div class=css::list role="list" aria-label="File list">
            <ParentRow />
            <For
                each=move || entries.get()
                key=|entry| entry.clone()
                children=move |entry| {
                    view! { <FileListItem entry=entry /> }
                }
            />
        </div>
    }
}

/// The `../` row leading to the parent directory.
#[component]
fn ParentRow() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::listItem role="listitem">
            <button
                class=css::rowButton
                on:click=move |_| ctx.browser.go_up()
                aria-label="Parent directory"
            >
                <span class=css::icon aria-hidden="true"><Icon icon=ic::PARENT /></span>
                <span class=format!("{} {}", css::name, css::nameDir)>{PARENT_ROW_LABEL}</span>
                <span class=css::date></span>
                <span class=css::size></span>
            </button>
            <span class=css::action></span>
        </div>
    }
}

#[component]
fn FileListItem(entry: DirectoryEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dir = entry.is_dir;
    let icon = get_icon(&entry);
    let summary = entry.summary();
    let modified = entry.modified_at.clone();

    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        format!("{} {}", css::name, css::nameFile)
    };

    let aria_label = if is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    let entry_for_open = entry.clone();
    let handle_open = move |_: leptos::ev::MouseEvent| {
        ctx.browser.enter(&entry_for_open);
    };

    // Directories are not shareable
    let share_button = (!is_dir).then(|| {
        let entry_for_share = entry.clone();
        let label = format!("Share {}", entry.name);
        view! {
            <button
                class=css::shareButton
                on:click=move |_| ctx.share_file(&entry_for_share)
                aria-label=label
                title="Share"
            >
                <Icon icon=ic::SHARE />
            </button>
        }
    });

    view! {
        <div class=css::listItem role="listitem">
            <button class=css::rowButton on:click=handle_open aria-label=aria_label>
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <span class=name_class>{entry.name.clone()}</span>
                <span class=css::date>{modified}</span>
                <span class=css::size>{summary}</span>
            </button>
            <span class=css::action>{share_button}</span>
        </div>
    }
}
