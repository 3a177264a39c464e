//! Navigation state machine.
//!
//! [`Navigator`] owns the current path, the visible entries and the service's
//! share address. Navigation operations update the path synchronously and
//! return a [`ListingRequest`]; the caller fetches it and feeds the outcome
//! back through [`Navigator::on_listing_result`].
//!
//! ## Path lifecycle
//!
//! - **Uninitialized**: `current_path` is `None` until the first listing
//!   arrives; the service then supplies its default root.
//! - **Loaded**: every navigation moves to a new path and requests its
//!   listing. Responses whose path is no longer current are dropped, so a
//!   slow listing never overwrites a directory the user has since entered.

use crate::error::NavigationError;
use crate::models::{DirectoryEntry, ListingOutcome};
use crate::path;
use crate::share::resolve_share_url;

/// A pending listing fetch, keyed by the path it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRequest {
    path: Option<String>,
}

impl ListingRequest {
    /// Path to list; `None` asks for the service's default root.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

/// What activating an entry asks the caller to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryAction {
    /// Download the file at this absolute path
    Download { file_path: String },
    /// The path changed; fetch this listing
    Navigate(ListingRequest),
}

/// How a listing outcome was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingDisposition {
    /// Entries (and possibly the path) were replaced
    Applied,
    /// The request's path is no longer current; nothing changed
    Stale,
    /// The listing failed; nothing changed
    Failed(String),
}

/// Navigation controller state for one browsing session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigator {
    current_path: Option<String>,
    entries: Vec<DirectoryEntry>,
    local_address: String,
    optimistic_empty: bool,
}

impl Navigator {
    /// Creates an uninitialized navigator with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear entries immediately when entering a directory reported as empty,
    /// instead of keeping the parent's rows until its listing arrives.
    pub fn with_optimistic_empty(mut self, enabled: bool) -> Self {
        self.optimistic_empty = enabled;
        self
    }

    /// Path whose contents are displayed (`None` before the first listing).
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    /// Entries of the most recently applied listing, in server order.
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Network address reported by the service.
    pub fn local_address(&self) -> &str {
        &self.local_address
    }

    /// Page heading for the current directory.
    pub fn title(&self) -> String {
        format!("Index of {}", self.current_path().unwrap_or_default())
    }

    /// Whether the path still awaits resolution by the service.
    fn is_sentinel(&self) -> bool {
        self.current_path.as_deref().is_none_or(str::is_empty)
    }

    /// Replace the current path and request its listing.
    ///
    /// Setting the current path again is a reload: a request is always
    /// returned.
    pub fn set_path(&mut self, path: Option<String>) -> ListingRequest {
        self.current_path = path.clone();
        ListingRequest { path }
    }

    /// Activate a row: download files, descend into directories.
    pub fn enter_entry(&mut self, entry: &DirectoryEntry) -> EntryAction {
        let child = self.file_path(&entry.name);

        if !entry.is_dir {
            return EntryAction::Download { file_path: child };
        }

        if self.optimistic_empty && entry.child_count() == 0 {
            self.entries.clear();
        }
        EntryAction::Navigate(self.set_path(Some(child)))
    }

    /// Move to the parent directory.
    ///
    /// Before the first listing (or while the path is the empty sentinel)
    /// this requests the service's default root via the empty path.
    pub fn go_up(&mut self) -> Result<ListingRequest, NavigationError> {
        let parent = self.parent_path()?;
        Ok(self.set_path(Some(parent)))
    }

    /// Path [`go_up`](Self::go_up) would move to, without moving.
    pub fn parent_path(&self) -> Result<String, NavigationError> {
        match self.current_path.as_deref() {
            None | Some("") => Ok(String::new()),
            Some(current) => path::parent_of(current),
        }
    }

    /// Apply the outcome of a listing request.
    ///
    /// Entries and path are updated together or not at all.
    pub fn on_listing_result(
        &mut self,
        request: &ListingRequest,
        outcome: ListingOutcome,
    ) -> ListingDisposition {
        if request.path != self.current_path {
            return ListingDisposition::Stale;
        }

        let listing = match outcome {
            ListingOutcome::Listing(listing) => listing,
            ListingOutcome::Failure { message } => return ListingDisposition::Failed(message),
        };

        if self.is_sentinel() {
            self.current_path = Some(listing.path);
        }
        self.entries = listing.entries;
        self.local_address = listing.local_address;
        ListingDisposition::Applied
    }

    /// Absolute path of a child of the current directory.
    pub fn file_path(&self, name: &str) -> String {
        path::join_child(self.current_path().unwrap_or_default(), name)
    }

    /// Share link for a file in the current directory.
    pub fn share_url(&self, file_name: &str) -> String {
        resolve_share_url(
            file_name,
            self.current_path().unwrap_or_default(),
            &self.local_address,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Listing;

    fn listing(path: &str, names: &[&str]) -> ListingOutcome {
        ListingOutcome::Listing(Listing {
            entries: names
                .iter()
                .map(|n| DirectoryEntry::file(*n, "2024/01/01 00:00:00", "1 B"))
                .collect(),
            local_address: "192.168.1.5:8000".to_string(),
            path: path.to_string(),
        })
    }

    fn names(nav: &Navigator) -> Vec<&str> {
        nav.entries().iter().map(|e| e.name.as_str()).collect()
    }

    /// Navigator already showing `path` with the given entries.
    fn loaded(path: &str, entries: &[&str]) -> Navigator {
        let mut nav = Navigator::new();
        let req = nav.set_path(Some(path.to_string()));
        nav.on_listing_result(&req, listing(path, entries));
        nav
    }

    #[test]
    fn test_first_listing_adopts_server_path() {
        let mut nav = Navigator::new();
        let req = nav.set_path(None);
        assert_eq!(req.path(), None);

        let disposition = nav.on_listing_result(&req, listing("/home/me", &["a"]));
        assert_eq!(disposition, ListingDisposition::Applied);
        assert_eq!(nav.current_path(), Some("/home/me"));
        assert_eq!(nav.local_address(), "192.168.1.5:8000");
        assert_eq!(names(&nav), ["a"]);
    }

    #[test]
    fn test_loaded_path_not_replaced_by_server_path() {
        let mut nav = loaded("/docs", &[]);
        let req = nav.set_path(Some("/docs".to_string()));
        nav.on_listing_result(&req, listing("/srv/docs", &["x"]));
        assert_eq!(nav.current_path(), Some("/docs"));
        assert_eq!(names(&nav), ["x"]);
    }

    #[test]
    fn test_set_path_same_value_still_requests() {
        let mut nav = loaded("/docs", &["a"]);
        let first = nav.set_path(Some("/docs".to_string()));
        let second = nav.set_path(Some("/docs".to_string()));
        assert_eq!(first.path(), Some("/docs"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_enter_directory() {
        let mut nav = loaded("/", &[]);
        let action = nav.enter_entry(&DirectoryEntry::directory("sub", "", 1, 1));
        assert_eq!(
            action,
            EntryAction::Navigate(ListingRequest {
                path: Some("/sub".to_string())
            })
        );
        assert_eq!(nav.current_path(), Some("/sub"));

        let mut nav = loaded("/docs", &[]);
        nav.enter_entry(&DirectoryEntry::directory("sub", "", 1, 1));
        assert_eq!(nav.current_path(), Some("/docs/sub"));
    }

    #[test]
    fn test_enter_file_downloads_without_navigation() {
        let mut nav = loaded("/docs", &["report.pdf"]);
        let action = nav.enter_entry(&DirectoryEntry::file("report.pdf", "", "1 KB"));
        assert_eq!(
            action,
            EntryAction::Download {
                file_path: "/docs/report.pdf".to_string()
            }
        );
        assert_eq!(nav.current_path(), Some("/docs"));
        assert_eq!(names(&nav), ["report.pdf"]);
    }

    #[test]
    fn test_stale_entries_visible_during_fetch() {
        let mut nav = loaded("/", &["a", "b"]);
        nav.enter_entry(&DirectoryEntry::directory("a", "", 0, 3));
        assert_eq!(names(&nav), ["a", "b"]);
    }

    #[test]
    fn test_optimistic_empty_clears_entries() {
        let mut nav = loaded("/", &["a", "b"]).with_optimistic_empty(true);
        nav.enter_entry(&DirectoryEntry::directory("empty", "", 0, 0));
        assert!(nav.entries().is_empty());
        assert_eq!(nav.current_path(), Some("/empty"));

        let mut nav = loaded("/", &["a", "b"]).with_optimistic_empty(true);
        nav.enter_entry(&DirectoryEntry::directory("full", "", 1, 0));
        assert_eq!(names(&nav), ["a", "b"]);
    }

    #[test]
    fn test_go_up() {
        let cases = [
            ("/a/b/c", "/a/b"),
            ("/a/b", "/a"),
            ("/foo", "/"),
            ("/", "/"),
        ];
        for (from, to) in cases {
            let mut nav = loaded(from, &[]);
            let req = nav.go_up().unwrap();
            assert_eq!(req.path(), Some(to), "parent of {}", from);
            assert_eq!(nav.current_path(), Some(to));
        }
    }

    #[test]
    fn test_go_up_uninitialized_requests_root_sentinel() {
        let mut nav = Navigator::new();
        let req = nav.go_up().unwrap();
        assert_eq!(req.path(), Some(""));
        assert_eq!(nav.current_path(), Some(""));

        // The empty sentinel resolves to the server path
        nav.on_listing_result(&req, listing("/home/me", &["x"]));
        assert_eq!(nav.current_path(), Some("/home/me"));
    }

    #[test]
    fn test_go_up_malformed_path() {
        let mut nav = loaded("relative", &["a"]);
        let err = nav.go_up().unwrap_err();
        assert_eq!(err, NavigationError::MalformedPath("relative".to_string()));
        assert_eq!(nav.current_path(), Some("relative"));
        assert_eq!(names(&nav), ["a"]);
    }

    #[test]
    fn test_parent_path_does_not_move() {
        let nav = loaded("/docs/sub", &["a"]);
        assert_eq!(nav.parent_path().unwrap(), "/docs");
        assert_eq!(nav.current_path(), Some("/docs/sub"));
        assert_eq!(Navigator::new().parent_path().unwrap(), "");
        assert!(loaded("relative", &[]).parent_path().is_err());
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut nav = loaded("/", &[]);
        let old = nav.set_path(Some("/old".to_string()));
        let new = nav.set_path(Some("/new".to_string()));

        let disposition = nav.on_listing_result(&old, listing("/old", &["old.txt"]));
        assert_eq!(disposition, ListingDisposition::Stale);
        assert_eq!(nav.current_path(), Some("/new"));
        assert!(nav.entries().is_empty());

        nav.on_listing_result(&new, listing("/new", &["new.txt"]));
        assert_eq!(names(&nav), ["new.txt"]);
    }

    #[test]
    fn test_first_load_response_stale_after_navigation() {
        let mut nav = Navigator::new();
        let initial = nav.set_path(None);
        nav.go_up().unwrap();
        assert_eq!(
            nav.on_listing_result(&initial, listing("/home/me", &["a"])),
            ListingDisposition::Stale
        );
        assert_eq!(nav.current_path(), Some(""));
    }

    #[test]
    fn test_failure_leaves_state() {
        let mut nav = loaded("/docs", &["a"]);
        let req = nav.set_path(Some("/docs".to_string()));
        let disposition = nav.on_listing_result(&req, ListingOutcome::failure("permission denied"));
        assert_eq!(
            disposition,
            ListingDisposition::Failed("permission denied".to_string())
        );
        assert_eq!(nav.current_path(), Some("/docs"));
        assert_eq!(names(&nav), ["a"]);
        assert_eq!(nav.local_address(), "192.168.1.5:8000");
    }

    #[test]
    fn test_share_url_uses_state() {
        let nav = loaded("/", &[]);
        assert_eq!(
            nav.share_url("report.pdf"),
            "http://192.168.1.5:8000/api/download?fname=/report.pdf"
        );
        let nav = loaded("/docs", &[]);
        assert_eq!(
            nav.share_url("report.pdf"),
            "http://192.168.1.5:8000/api/download?fname=/docs/report.pdf"
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(Navigator::new().title(), "Index of ");
        assert_eq!(loaded("/docs", &[]).title(), "Index of /docs");
    }
}
