use serde::{Deserialize, Serialize};

/// One item of a directory listing, as reported by the file-share service.
///
/// Timestamps and sizes are preformatted by the server and displayed verbatim.
/// Entries are replaced wholesale on every listing and never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// Base name of the entry
    #[serde(rename = "file_name")]
    pub name: String,
    /// Server-formatted modification time
    #[serde(rename = "file_modtime", default)]
    pub modified_at: String,
    /// Whether this entry is a directory
    #[serde(rename = "is_dir", default)]
    pub is_dir: bool,
    /// Server-formatted human-readable size (files only)
    #[serde(rename = "file_size", default)]
    pub size: String,
    /// Number of files directly inside (directories only)
    #[serde(rename = "sub_file_num", default)]
    pub child_file_count: u32,
    /// Number of directories directly inside (directories only)
    #[serde(rename = "sub_dir_num", default)]
    pub child_dir_count: u32,
}

impl DirectoryEntry {
    /// Create a file entry.
    pub fn file(
        name: impl Into<String>,
        modified_at: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            modified_at: modified_at.into(),
            size: size.into(),
            ..Default::default()
        }
    }

    /// Create a directory entry with its reported child counts.
    pub fn directory(
        name: impl Into<String>,
        modified_at: impl Into<String>,
        child_dir_count: u32,
        child_file_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            modified_at: modified_at.into(),
            is_dir: true,
            child_dir_count,
            child_file_count,
            ..Default::default()
        }
    }

    /// Total number of reported children (files + directories).
    pub fn child_count(&self) -> u32 {
        self.child_file_count.saturating_add(self.child_dir_count)
    }

    /// Text of the size column: child counts for directories, size for files.
    pub fn summary(&self) -> String {
        if self.is_dir {
            format!("{} dirs {} files", self.child_dir_count, self.child_file_count)
        } else {
            self.size.clone()
        }
    }
}
