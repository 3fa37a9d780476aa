//! Application configuration and constants

use std::path::{Path, PathBuf};

// === Storage ===
pub const RECORD_DIR: &str = ".media";
pub const RECORD_EXT: &str = "msgpack";

// === Cleanup ===
/// Records processed between two store cache flushes
pub const CACHE_CLEAR_INTERVAL: usize = 500;

/// Library root as given on the command line, made absolute when possible
pub fn library_root(path: &Path) -> PathBuf {
	path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Directory holding the attachment records of a library
pub fn record_dir(root: &Path) -> PathBuf {
	root.join(RECORD_DIR)
}
