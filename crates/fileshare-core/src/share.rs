//! Share link construction.

use crate::config::{DOWNLOAD_ENDPOINT, FILE_PARAM, SHARE_SCHEME};
use crate::path::ROOT;

/// Build the absolute download URL of a file for use from another device.
///
/// `local_address` is the `host[:port]` the service reported in its last
/// listing. Only meaningful for files; a directory name yields a URL that
/// points at a non-file path.
pub fn resolve_share_url(file_name: &str, current_path: &str, local_address: &str) -> String {
    let prefix = format!("{}{}{}?{}=", SHARE_SCHEME, local_address, DOWNLOAD_ENDPOINT, FILE_PARAM);
    if current_path == ROOT {
        format!("{}{}{}", prefix, ROOT, file_name)
    } else {
        format!("{}{}/{}", prefix, current_path, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_url_at_root() {
        assert_eq!(
            resolve_share_url("report.pdf", "/", "192.168.1.5"),
            "http://192.168.1.5/api/download?fname=/report.pdf"
        );
    }

    #[test]
    fn test_share_url_in_subdirectory() {
        assert_eq!(
            resolve_share_url("report.pdf", "/docs", "192.168.1.5"),
            "http://192.168.1.5/api/download?fname=/docs/report.pdf"
        );
    }

    #[test]
    fn test_share_url_keeps_port() {
        assert_eq!(
            resolve_share_url("a.txt", "/home/me", "10.0.0.2:8000"),
            "http://10.0.0.2:8000/api/download?fname=/home/me/a.txt"
        );
    }
}
