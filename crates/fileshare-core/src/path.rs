//! Path rules for the remote directory tree.
//!
//! Paths are kept as `/`-delimited strings because the service addresses
//! directories by that same string in its query parameters.

use crate::error::NavigationError;

/// Root directory path.
pub const ROOT: &str = "/";

/// Path separator.
pub const SEPARATOR: char = '/';

/// Join a child name onto a directory path.
///
/// At the root the child becomes `/name`; everywhere else it is
/// `current/name`.
pub fn join_child(current: &str, name: &str) -> String {
    if current == ROOT {
        format!("{}{}", ROOT, name)
    } else {
        format!("{}{}{}", current, SEPARATOR, name)
    }
}

/// Compute the parent of a directory path.
///
/// The parent is everything before the last separator, or the root when the
/// last separator is the leading one. A path without any separator is
/// malformed.
pub fn parent_of(current: &str) -> Result<String, NavigationError> {
    match current.rfind(SEPARATOR) {
        Some(0) => Ok(ROOT.to_string()),
        Some(index) => Ok(current[..index].to_string()),
        None => Err(NavigationError::MalformedPath(current.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_child() {
        assert_eq!(join_child("/", "sub"), "/sub");
        assert_eq!(join_child("/docs", "sub"), "/docs/sub");
        assert_eq!(join_child("/a/b", "c.txt"), "/a/b/c.txt");
    }

    #[test]
    fn test_join_child_from_sentinel() {
        // The empty sentinel is not the root, so the separator is prepended
        assert_eq!(join_child("", "sub"), "/sub");
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("/a/b/c").unwrap(), "/a/b");
        assert_eq!(parent_of("/a/b").unwrap(), "/a");
        assert_eq!(parent_of("/foo").unwrap(), "/");
        assert_eq!(parent_of("/").unwrap(), "/");
        assert_eq!(parent_of("/Users/me/My Files").unwrap(), "/Users/me");
    }

    #[test]
    fn test_parent_of_trailing_separator() {
        // Only the last separator matters
        assert_eq!(parent_of("/a/b/").unwrap(), "/a/b");
    }

    #[test]
    fn test_parent_of_malformed() {
        assert_eq!(
            parent_of("relative"),
            Err(NavigationError::MalformedPath("relative".to_string()))
        );
    }
}
