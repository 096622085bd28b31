pub mod app_config;
pub mod archive;

pub use archive::{ArchiveError, OrderArchive};
