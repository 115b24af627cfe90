pub mod bunny;
pub mod config;
pub mod enricher;
pub mod error;
pub mod lister;
pub mod server;
pub mod types;

pub use bunny::{BunnyClient, MetadataSource};
pub use config::ShelfConfig;
pub use enricher::MetadataEnricher;
pub use error::{Result, ShelfError};
pub use lister::{DirectoryLister, FsLister};
pub use server::AppState;
pub use types::{DirectoryEntry, DirectoryListing, EntryType, ListingResponse, VideoMetadata};
