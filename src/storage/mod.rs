//! Attachment storage
//!
//! [`MediaStore`] is the seam the cleanup command works against. [`Library`]
//! is the on-disk implementation: a root directory of uploaded files plus a
//! `.media` directory holding one MessagePack record per attachment.

pub mod library;
pub mod record;

use anyhow::Result;
use std::path::PathBuf;

use crate::core::AttachmentId;

pub use library::Library;

pub trait MediaStore {
	/// Every attachment record, whatever its status
	fn attachment_ids(&mut self) -> Result<Vec<AttachmentId>>;

	/// Absolute path of the record's primary file, `None` when it has none
	fn attached_file(&mut self, id: AttachmentId) -> Result<Option<PathBuf>>;

	/// Permanently delete the record along with its files
	fn delete_attachment(&mut self, id: AttachmentId) -> Result<()>;

	/// Drop cached records to bound memory during long scans
	fn clear_cache(&mut self) {}
}
