use serde::{Deserialize, Serialize};

/// File extensions treated as videos for metadata enrichment
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".webm"];

/// Represents an entry in a directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Name of the file or folder
    pub name: String,
    /// Path relative to the listing root
    pub path: String,
    /// Type of entry
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// File size in bytes, when the lister provides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Video metadata, present only on entries with a recognized video
    /// extension: `Some(Some(_))` when the fetch succeeded, `Some(None)`
    /// (serialized as `null`) when it failed, `None` (omitted) otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Option<VideoMetadata>>,
}

impl DirectoryEntry {
    /// Whether this entry is a file whose name carries a video extension
    pub fn is_video(&self) -> bool {
        if self.entry_type != EntryType::File {
            return false;
        }
        let name = self.name.to_lowercase();
        VIDEO_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
    }
}

/// Type of directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
}

/// Result of listing a directory
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    /// The path that was listed
    pub path: String,
    /// Entries found in the directory
    pub entries: Vec<DirectoryEntry>,
}

/// Normalized video attributes sourced from the CDN API
///
/// Fields absent in the remote response stay unset; no defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub duration: Option<u64>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub encoding: Option<String>,
    pub status: Option<String>,
}

/// Body of a `/list-contents` reply
///
/// Serializes as `{"status":"success","contents":[...]}` or
/// `{"status":"error","message":"..."}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ListingResponse {
    Success { contents: Vec<DirectoryEntry> },
    Error { message: String },
}
