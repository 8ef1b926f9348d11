pub mod grouper;
pub mod selector;

pub use grouper::{ArchiveGroup, DirectoryListing, group_parts, identity_key, scan_directory};
pub use selector::select_entry;

/// Only names ending in this suffix are considered. Case-sensitive.
pub const ARCHIVE_EXTENSION: &str = ".rar";
