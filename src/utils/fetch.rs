//! Network access to the file-share service.
//!
//! Provides the browser implementation of [`ListingService`] and the URL
//! builders for listing and download requests. Requests are never timed out
//! or retried: a listing that never resolves leaves the last view in place.

use fileshare_core::config::{DOWNLOAD_ENDPOINT, FILE_PARAM, LISTING_ENDPOINT, PATH_PARAM};
use fileshare_core::{FetchError, ListingFuture, ListingService, parse_listing};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// =============================================================================
// URL Builders
// =============================================================================

/// Build a `key=value` query with the value URI-encoded.
fn query(endpoint: &str, key: &str, value: &str) -> String {
    let encoded = js_sys::encode_uri_component(value);
    format!("{}?{}={}", endpoint, key, String::from(encoded))
}

/// URL of the listing for `path`; `None` omits the query so the service
/// answers with its default root.
pub fn listing_url(path: Option<&str>) -> String {
    match path {
        Some(path) => query(LISTING_ENDPOINT, PATH_PARAM, path),
        None => LISTING_ENDPOINT.to_string(),
    }
}

/// Origin-relative download URL of a file.
pub fn download_url(file_path: &str) -> String {
    query(DOWNLOAD_ENDPOINT, FILE_PARAM, file_path)
}

// =============================================================================
// Listing Service
// =============================================================================

/// Listing service backed by the browser Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpListingService;

impl ListingService for HttpListingService {
    fn list<'a>(&'a self, path: Option<&'a str>) -> ListingFuture<'a> {
        Box::pin(async move {
            match fetch_text(&listing_url(path)).await {
                Ok(body) => parse_listing(&body),
                Err(e) => e.into(),
            }
        })
    }
}

/// Fetch text from a URL using the Fetch API.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| "Unknown error".to_string()))
        })?;
    let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
