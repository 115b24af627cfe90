use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::{
    error::{Result, ShelfError},
    types::{DirectoryEntry, DirectoryListing, EntryType},
};

/// Core abstraction for directory listings
///
/// Implementors provide read-only listings from some backend (local
/// filesystem, object storage, etc.). The enricher only depends on this
/// trait, so tests substitute an in-memory implementation.
#[async_trait]
pub trait DirectoryLister: Send + Sync {
    /// List the contents of a directory
    ///
    /// Returns `ShelfError::NotFound` if the directory doesn't exist.
    /// Entry order is owned by the implementor and is preserved downstream.
    async fn list(&self, path: &str) -> Result<DirectoryListing>;

    /// Get a human-readable identifier for this lister (for logging/debugging)
    fn identifier(&self) -> String;
}

/// Local-filesystem lister rooted at a base directory
///
/// Request paths are resolved relative to the root; entries are sorted by
/// name so listing order is deterministic.
pub struct FsLister {
    root: PathBuf,
}

impl FsLister {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve a request path against the root, rejecting traversal
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => {
                    return Err(ShelfError::InvalidPath {
                        path: path.to_string(),
                    })
                }
            }
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl DirectoryLister for FsLister {
    async fn list(&self, path: &str) -> Result<DirectoryListing> {
        let dir = self.resolve(path)?;

        let mut read_dir = match fs::read_dir(&dir).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ShelfError::NotFound {
                    path: path.to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let base = path.trim_matches('/');
        let mut entries = Vec::new();
        while let Some(item) = read_dir.next_entry().await? {
            let name = item.file_name().to_string_lossy().into_owned();
            let file_type = item.file_type().await?;
            let entry_type = if file_type.is_dir() {
                EntryType::Directory
            } else {
                EntryType::File
            };
            let size = if entry_type == EntryType::File {
                Some(item.metadata().await?.len())
            } else {
                None
            };
            let entry_path = if base.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", base, name)
            };
            entries.push(DirectoryEntry {
                name,
                path: entry_path,
                entry_type,
                size,
                metadata: None,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(DirectoryListing {
            path: path.to_string(),
            entries,
        })
    }

    fn identifier(&self) -> String {
        format!("fs://{}", self.root.display())
    }
}
