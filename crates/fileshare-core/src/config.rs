//! Endpoint configuration for the remote file-share service.
//!
//! The service is served from the same origin as the browser application,
//! so listing and download endpoints are origin-relative.

// =============================================================================
// Service Endpoints
// =============================================================================

/// Directory listing endpoint (`GET /api/files?path=<path>`).
pub const LISTING_ENDPOINT: &str = "/api/files";

/// Raw file download endpoint (`GET /api/download?fname=<path>`).
pub const DOWNLOAD_ENDPOINT: &str = "/api/download";

/// Query parameter carrying the directory path of a listing request.
pub const PATH_PARAM: &str = "path";

/// Query parameter carrying the absolute file path of a download.
pub const FILE_PARAM: &str = "fname";

// =============================================================================
// Share Links
// =============================================================================

/// Scheme prefix of share links handed to other devices on the network.
pub const SHARE_SCHEME: &str = "http://";
