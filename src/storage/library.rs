//! On-disk media library

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::{record, MediaStore};
use crate::config::record_dir;
use crate::core::{Attachment, AttachmentId};
use crate::ui;

pub struct Library {
	root: PathBuf,
	cache: HashMap<AttachmentId, Attachment>,
}

impl Library {
	/// Open an existing library rooted at `root`
	pub fn open(root: &Path) -> Result<Self> {
		let records = record_dir(root);
		if !records.is_dir() {
			bail!("No media library found at {} (missing {})", root.display(), records.display());
		}

		let root = std::path::absolute(root)
			.with_context(|| format!("Failed to resolve {}", root.display()))?;

		Ok(Self {
			root: normalize(&root),
			cache: HashMap::new(),
		})
	}

	/// Create the record directory if needed and open the library
	pub fn init(root: &Path) -> Result<Self> {
		let records = record_dir(root);
		fs::create_dir_all(&records)
			.with_context(|| format!("Failed to create {}", records.display()))?;
		Self::open(root)
	}

	pub fn insert(&mut self, attachment: &Attachment) -> Result<()> {
		record::save(&self.root, attachment)?;
		self.cache.remove(&attachment.id());
		Ok(())
	}

	/// Number of records currently held in memory
	pub fn cached(&self) -> usize {
		self.cache.len()
	}

	fn fetch(&mut self, id: AttachmentId) -> Result<&Attachment> {
		if !self.cache.contains_key(&id) {
			let attachment = record::load(&record::build_path(&self.root, id))?;
			self.cache.insert(id, attachment);
		}
		Ok(&self.cache[&id])
	}

	fn resolve(&self, attachment: &Attachment) -> Option<PathBuf> {
		attachment.attached_file().map(|file| self.root.join(file))
	}

	/// `path` with `.` and `..` folded, if it stays under the library root
	fn contained(&self, path: &Path) -> Option<PathBuf> {
		let path = normalize(path);
		path.starts_with(&self.root).then_some(path)
	}
}

impl MediaStore for Library {
	fn attachment_ids(&mut self) -> Result<Vec<AttachmentId>> {
		let dir = record_dir(&self.root);
		let entries = fs::read_dir(&dir).with_context(|| format!("Failed to list {}", dir.display()))?;

		let mut ids = Vec::new();
		for entry in entries {
			let path = entry.with_context(|| format!("Failed to list {}", dir.display()))?.path();
			match record::parse_path(&path) {
				Some(id) if path.is_file() => ids.push(id),
				_ => ui::debug(&format!("Ignoring {}", path.display())),
			}
		}

		ids.sort_unstable();
		Ok(ids)
	}

	fn attached_file(&mut self, id: AttachmentId) -> Result<Option<PathBuf>> {
		let attachment = self.fetch(id)?.clone();
		Ok(self.resolve(&attachment))
	}

	fn delete_attachment(&mut self, id: AttachmentId) -> Result<()> {
		let record_path = record::build_path(&self.root, id);
		if !record_path.is_file() {
			bail!("Attachment {} not found", id);
		}

		let attachment = self.fetch(id)?.clone();
		ui::debug(&format!(
			"Deleting {} \"{}\" ({})",
			id,
			attachment.title(),
			attachment.mime_type()
		));

		if let Some(file) = self.resolve(&attachment) {
			let dir = file.parent().unwrap_or(self.root.as_path()).to_path_buf();
			let candidates = attachment
				.sizes()
				.iter()
				.map(|size| dir.join(size))
				.chain(std::iter::once(file));

			for path in candidates {
				match self.contained(&path) {
					Some(path) => remove_if_exists(&path)?,
					None => ui::debug(&format!("Kept {}: outside the library", path.display())),
				}
			}
		}

		fs::remove_file(&record_path)
			.with_context(|| format!("Failed to delete record {}", record_path.display()))?;
		self.cache.remove(&id);

		Ok(())
	}

	fn clear_cache(&mut self) {
		ui::debug(&format!("Clearing {} cached records", self.cache.len()));
		self.cache.clear();
	}
}

/// Lexical only, symlinks are not followed
fn normalize(path: &Path) -> PathBuf {
	let mut out = PathBuf::new();
	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				out.pop();
			}
			other => out.push(other.as_os_str()),
		}
	}
	out
}

fn remove_if_exists(path: &Path) -> Result<()> {
	match fs::remove_file(path) {
		Ok(()) => {
			ui::debug(&format!("Deleted: {}", path.display()));
			Ok(())
		}
		Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
		Err(e) => Err(e).with_context(|| format!("Failed to delete {}", path.display())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	fn touch(path: &Path) {
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(path, b"data").unwrap();
	}

	#[test]
	fn open_requires_record_dir() {
		let dir = TempDir::new().unwrap();
		assert!(Library::open(dir.path()).is_err());
		assert!(Library::init(dir.path()).is_ok());
		assert!(Library::open(dir.path()).is_ok());
	}

	#[test]
	fn lists_ids_sorted_and_skips_foreign_files() {
		let dir = TempDir::new().unwrap();
		let mut library = Library::init(dir.path()).unwrap();
		for id in [30, 4, 12] {
			library.insert(&Attachment::new(AttachmentId::new(id), "a.png")).unwrap();
		}
		fs::write(record_dir(dir.path()).join("README.txt"), b"").unwrap();
		fs::write(record_dir(dir.path()).join("draft.msgpack"), b"").unwrap();
		fs::copy(
			record::build_path(dir.path(), AttachmentId::new(12)),
			record_dir(dir.path()).join("012.msgpack"),
		)
		.unwrap();

		let ids = library.attachment_ids().unwrap();
		assert_eq!(ids, vec![AttachmentId::new(4), AttachmentId::new(12), AttachmentId::new(30)]);
	}

	#[test]
	fn resolves_relative_and_absolute_paths() {
		let dir = TempDir::new().unwrap();
		let elsewhere = TempDir::new().unwrap();
		let absolute = elsewhere.path().join("b.png");
		let mut library = Library::init(dir.path()).unwrap();

		library.insert(&Attachment::new(AttachmentId::new(1), "2021/03/a.png")).unwrap();
		library.insert(&Attachment::new(AttachmentId::new(2), absolute.to_string_lossy())).unwrap();
		library.insert(&Attachment::detached(AttachmentId::new(3))).unwrap();

		assert_eq!(
			library.attached_file(AttachmentId::new(1)).unwrap(),
			Some(dir.path().join("2021/03/a.png"))
		);
		assert_eq!(library.attached_file(AttachmentId::new(2)).unwrap(), Some(absolute));
		assert_eq!(library.attached_file(AttachmentId::new(3)).unwrap(), None);
	}

	#[test]
	fn corrupt_record_fails_to_resolve() {
		let dir = TempDir::new().unwrap();
		let mut library = Library::init(dir.path()).unwrap();
		fs::write(record::build_path(dir.path(), AttachmentId::new(9)), b"\xc1garbage").unwrap();

		assert!(library.attached_file(AttachmentId::new(9)).is_err());
	}

	#[test]
	fn delete_removes_record_and_files() {
		let dir = TempDir::new().unwrap();
		let mut library = Library::init(dir.path()).unwrap();
		let id = AttachmentId::new(5);
		let file = dir.path().join("2019/07/dog.jpg");
		let thumb = dir.path().join("2019/07/dog-150x150.jpg");
		touch(&file);
		touch(&thumb);

		library
			.insert(
				&Attachment::new(id, "2019/07/dog.jpg")
					.with_size("dog-150x150.jpg")
					.with_size("dog-300x200.jpg"),
			)
			.unwrap();
		library.delete_attachment(id).unwrap();

		assert!(!file.exists());
		assert!(!thumb.exists());
		assert!(!record::build_path(dir.path(), id).exists());
		assert!(library.attachment_ids().unwrap().is_empty());
	}

	#[test]
	fn delete_keeps_files_outside_library() {
		let base = TempDir::new().unwrap();
		let elsewhere = TempDir::new().unwrap();
		let root = base.path().join("library");
		let mut library = Library::init(&root).unwrap();

		let sibling = base.path().join("precious.txt");
		let absolute = elsewhere.path().join("precious.txt");
		let escaped = base.path().join("escape.jpg");
		touch(&sibling);
		touch(&absolute);
		touch(&escaped);
		touch(&root.join("2019/gone-150x150.jpg"));

		library
			.insert(
				&Attachment::new(AttachmentId::new(1), "2019/gone.jpg")
					.with_size("gone-150x150.jpg")
					.with_size("../../precious.txt")
					.with_size(absolute.to_string_lossy()),
			)
			.unwrap();
		library.insert(&Attachment::new(AttachmentId::new(2), "../escape.jpg")).unwrap();

		library.delete_attachment(AttachmentId::new(1)).unwrap();
		library.delete_attachment(AttachmentId::new(2)).unwrap();

		assert!(!root.join("2019/gone-150x150.jpg").exists());
		assert!(sibling.exists());
		assert!(absolute.exists());
		assert!(escaped.exists());
		assert!(library.attachment_ids().unwrap().is_empty());
	}

	#[test]
	fn normalize_folds_dot_segments() {
		assert_eq!(normalize(Path::new("/srv/lib/2019/../../x.jpg")), PathBuf::from("/srv/x.jpg"));
		assert_eq!(normalize(Path::new("/srv/lib/./a/b.jpg")), PathBuf::from("/srv/lib/a/b.jpg"));
	}

	#[test]
	fn delete_unknown_id_fails() {
		let dir = TempDir::new().unwrap();
		let mut library = Library::init(dir.path()).unwrap();
		assert!(library.delete_attachment(AttachmentId::new(404)).is_err());
	}

	#[test]
	fn clear_cache_empties_memory() {
		let dir = TempDir::new().unwrap();
		let mut library = Library::init(dir.path()).unwrap();
		library.insert(&Attachment::new(AttachmentId::new(1), "a.png")).unwrap();
		library.attached_file(AttachmentId::new(1)).unwrap();
		assert_eq!(library.cached(), 1);

		library.clear_cache();
		assert_eq!(library.cached(), 0);
	}
}
