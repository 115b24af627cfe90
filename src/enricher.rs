use std::sync::Arc;

use crate::{
    bunny::MetadataSource,
    error::Result,
    lister::DirectoryLister,
    types::{DirectoryEntry, ListingResponse},
};

/// Merges a directory listing with per-video metadata from the CDN
///
/// Both collaborators are injected as trait objects; the enricher owns no
/// state of its own and nothing is cached across calls.
pub struct MetadataEnricher {
    lister: Arc<dyn DirectoryLister>,
    metadata: Arc<dyn MetadataSource>,
}

impl MetadataEnricher {
    pub fn new(lister: Arc<dyn DirectoryLister>, metadata: Arc<dyn MetadataSource>) -> Self {
        Self { lister, metadata }
    }

    /// List `path` and attach metadata to every video-file entry
    ///
    /// A lister failure fails the whole call. A metadata fetch failure is
    /// confined to its entry: the entry gets an explicit `null` metadata
    /// field and processing continues. Entry order is the lister's order.
    pub async fn enrich(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        let listing = self.lister.list(path).await?;

        let mut entries = listing.entries;
        for entry in &mut entries {
            if !entry.is_video() {
                continue;
            }

            // The remote video id is the file name, verbatim
            let video_id = entry.name.clone();
            entry.metadata = match self.metadata.video_metadata(&video_id).await {
                Ok(record) => Some(Some(record)),
                Err(e) => {
                    tracing::warn!(entry = %entry.name, error = %e, "Metadata fetch failed");
                    Some(None)
                }
            };
        }

        Ok(entries)
    }

    /// Run [`enrich`](Self::enrich) and map the outcome to a response body
    pub async fn enrich_response(&self, path: &str) -> ListingResponse {
        match self.enrich(path).await {
            Ok(contents) => ListingResponse::Success { contents },
            Err(e) => ListingResponse::Error {
                message: e.to_string(),
            },
        }
    }
}
