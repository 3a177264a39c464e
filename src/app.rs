//! Root application module.
//!
//! Contains the main App component, AppContext definition, BrowserState,
//! ShareDialogState, and application-level setup logic following Leptos
//! conventions.

use fileshare_core::{
    DirectoryEntry, EntryAction, ListingDisposition, ListingRequest, ListingService, Navigator,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Browser;
use crate::config::OPTIMISTIC_EMPTY_DIRS;
use crate::utils::{HttpListingService, dom, download_url, log};

// ============================================================================
// BrowserState
// ============================================================================

/// Directory browsing state managed with Leptos signals.
///
/// Wraps the [`Navigator`] state machine. Every navigation updates the
/// navigator synchronously and starts the listing fetch it asks for; the
/// response is handed back to the navigator, which drops it if the user has
/// moved on in the meantime.
///
/// # Note
///
/// This struct is `Copy` because its field is a Leptos signal, which is
/// cheap to copy (just a pointer to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct BrowserState {
    /// Current path, visible entries and share address.
    pub navigator: RwSignal<Navigator>,
}

impl BrowserState {
    /// Creates an uninitialized browser state (no listing loaded yet).
    pub fn new() -> Self {
        let navigator = Navigator::new().with_optimistic_empty(OPTIMISTIC_EMPTY_DIRS);
        Self {
            navigator: RwSignal::new(navigator),
        }
    }

    /// Replace the current path and reload its listing.
    ///
    /// `None` asks the service for its default root.
    pub fn set_path(&self, path: Option<String>) {
        if let Some(request) = self.navigator.try_update(|nav| nav.set_path(path)) {
            self.load(request);
        }
    }

    /// Activate a row: download a file or open a directory.
    pub fn enter(&self, entry: &DirectoryEntry) {
        if !entry.is_dir {
            let file_path = self.navigator.with_untracked(|nav| nav.file_path(&entry.name));
            self.download(&file_path, &entry.name);
            return;
        }

        if let Some(EntryAction::Navigate(request)) =
            self.navigator.try_update(|nav| nav.enter_entry(entry))
        {
            self.load(request);
        }
    }

    /// Move to the parent directory.
    ///
    /// A malformed current path is logged and leaves the state (and the
    /// view) untouched.
    pub fn go_up(&self) {
        match self.navigator.with_untracked(|nav| nav.parent_path()) {
            Ok(parent) => self.set_path(Some(parent)),
            Err(e) => log::error(&format!("Cannot go up: {}", e)),
        }
    }

    /// Share link for a file in the current directory.
    pub fn share_url(&self, file_name: &str) -> String {
        self.navigator.with_untracked(|nav| nav.share_url(file_name))
    }

    fn download(&self, file_path: &str, file_name: &str) {
        if !dom::trigger_download(&download_url(file_path), file_name) {
            log::error(&format!("Failed to start download of {}", file_path));
        }
    }

    /// Fetch a listing and hand the outcome back to the navigator.
    fn load(&self, request: ListingRequest) {
        log::info(&format!(
            "Switching path to: {}",
            request.path().unwrap_or("<default>")
        ));

        let navigator = self.navigator;
        spawn_local(async move {
            let outcome = HttpListingService.list(request.path()).await;

            // `None` when the view has been torn down before the response
            match navigator.try_update(|nav| nav.on_listing_result(&request, outcome)) {
                Some(ListingDisposition::Failed(message)) => {
                    log::warn(&format!("Listing failed: {}", message))
                }
                Some(ListingDisposition::Stale) => log::info(&format!(
                    "Dropped stale listing for {}",
                    request.path().unwrap_or("<default>")
                )),
                Some(ListingDisposition::Applied) | None => {}
            }
        });
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ShareDialogState
// ============================================================================

/// Share dialog state.
///
/// The URL outlives the dialog: closing keeps it, only the next share
/// replaces it.
#[derive(Clone, Copy)]
pub struct ShareDialogState {
    /// Whether the dialog is shown.
    pub is_open: RwSignal<bool>,
    /// Most recently resolved share URL.
    pub url: RwSignal<String>,
}

impl ShareDialogState {
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
            url: RwSignal::new(String::new()),
        }
    }

    /// Show the dialog for `url`.
    pub fn open(&self, url: String) {
        self.url.set(url);
        self.is_open.set(true);
    }

    pub fn close(&self) {
        self.is_open.set(false);
    }
}

impl Default for ShareDialogState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Directory browsing state.
    pub browser: BrowserState,

    /// Share dialog state.
    pub share: ShareDialogState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            browser: BrowserState::new(),
            share: ShareDialogState::new(),
        }
    }

    /// Resolve the share link of a file and open the share dialog.
    pub fn share_file(&self, entry: &DirectoryEntry) {
        self.share.open(self.browser.share_url(&entry.name));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Requests the service's default root listing
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    ctx.browser.set_path(None);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #c62828; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #616161; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #c62828; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Browser />
        </ErrorBoundary>
    }
}
