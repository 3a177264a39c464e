//! Listing service seam and wire format.
//!
//! The service answers `GET /api/files?path=<path>` with either
//!
//! ```json
//! { "files": [...], "local_ip": "192.168.1.5:8000", "path": "/home/me" }
//! ```
//!
//! or a failure payload `{ "message": "..." }`. [`parse_listing`] maps both
//! onto [`ListingOutcome`].

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Deserializer};

use crate::error::FetchError;
use crate::models::{DirectoryEntry, Listing, ListingOutcome};

/// Future returned by [`ListingService::list`].
pub type ListingFuture<'a> = Pin<Box<dyn Future<Output = ListingOutcome> + 'a>>;

/// Remote listing service.
///
/// Each call issues exactly one request: no retries, no caching. Transport
/// failures must come back as [`ListingOutcome::Failure`].
pub trait ListingService {
    /// List the directory at `path`, or the service's default root for `None`.
    fn list<'a>(&'a self, path: Option<&'a str>) -> ListingFuture<'a>;
}

/// Raw response body. Every field is optional so that failure payloads and
/// malformed bodies decode and can be classified afterwards.
#[derive(Debug, Default, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    local_ip: Option<String>,
    #[serde(default)]
    path: Option<String>,
    /// Outer `None`: key absent. `Some(None)`: key present but `null`.
    #[serde(default, deserialize_with = "present")]
    files: Option<Option<Vec<DirectoryEntry>>>,
}

/// Marks a field as present, keeping an explicit `null` distinguishable from
/// a missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ListingResponse {
    fn into_outcome(self) -> ListingOutcome {
        if let Some(message) = self.message.filter(|m| !m.is_empty()) {
            return ListingOutcome::Failure { message };
        }

        // The service encodes an empty directory as `"files": null`
        let Some(files) = self.files else {
            return FetchError::MissingField("files").into();
        };
        let Some(local_address) = self.local_ip else {
            return FetchError::MissingField("local_ip").into();
        };
        let Some(path) = self.path else {
            return FetchError::MissingField("path").into();
        };

        Listing {
            entries: files.unwrap_or_default(),
            local_address,
            path,
        }
        .into()
    }
}

/// Decode a listing response body.
pub fn parse_listing(body: &str) -> ListingOutcome {
    match serde_json::from_str::<ListingResponse>(body) {
        Ok(response) => response.into_outcome(),
        Err(e) => FetchError::JsonParseError(e.to_string()).into(),
    }
}
