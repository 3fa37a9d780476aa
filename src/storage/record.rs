//! Attachment record file format and I/O

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{record_dir, RECORD_EXT};
use crate::core::{Attachment, AttachmentId};

/// Save record to disk
pub fn save(root: &Path, attachment: &Attachment) -> Result<()> {
	let path = build_path(root, attachment.id());

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).context("Failed to create record directory")?;
	}

	let bytes = rmp_serde::to_vec_named(attachment).context("Failed to serialize record")?;
	fs::write(&path, bytes).with_context(|| format!("Failed to write record {}", path.display()))?;

	Ok(())
}

/// Load record from disk
pub fn load(path: &Path) -> Result<Attachment> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read record {}", path.display()))?;
	rmp_serde::from_slice(&bytes).with_context(|| format!("Failed to deserialize record {}", path.display()))
}

/// Build record path from id
pub fn build_path(root: &Path, id: AttachmentId) -> PathBuf {
	record_dir(root).join(format!("{}.{}", id.get(), RECORD_EXT))
}

/// Id encoded in a record file name, if it is one
pub fn parse_path(path: &Path) -> Option<AttachmentId> {
	if path.extension().and_then(|s| s.to_str()) != Some(RECORD_EXT) {
		return None;
	}
	let stem = path.file_stem()?.to_str()?;
	let id: AttachmentId = stem.parse().ok()?;

	// `042` or `+42` would alias the record `build_path` writes for 42
	(id.get().to_string() == stem).then_some(id)
}
