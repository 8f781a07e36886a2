pub mod config;
pub mod search;
pub mod types;

/// Status token stamped into filenames of posters that are linked to a
/// media-server item. System-generated, fixed casing.
pub const PLEX_TAG: &str = "--Plex--";

/// Status token for posters whose media-server item no longer exists.
pub const ORPHANED_TAG: &str = "--Orphaned--";
