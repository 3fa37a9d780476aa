//! Attachment records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttachmentId(u64);

impl AttachmentId {
	pub fn new(id: u64) -> Self {
		Self(id)
	}

	pub fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for AttachmentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

impl FromStr for AttachmentId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse().map(Self)
	}
}

/// A media library entry pointing at an uploaded file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
	id: AttachmentId,
	#[serde(default)]
	title: String,
	#[serde(default)]
	mime_type: String,
	/// Relative to the library root, or absolute
	#[serde(default)]
	attached_file: Option<String>,
	/// Derived file names, stored next to the attached file
	#[serde(default)]
	sizes: Vec<String>,
}

impl Attachment {
	pub fn new(id: AttachmentId, attached_file: impl Into<String>) -> Self {
		Self {
			id,
			title: String::new(),
			mime_type: String::new(),
			attached_file: Some(attached_file.into()),
			sizes: Vec::new(),
		}
	}

	/// Record with no file attached at all
	pub fn detached(id: AttachmentId) -> Self {
		Self {
			id,
			title: String::new(),
			mime_type: String::new(),
			attached_file: None,
			sizes: Vec::new(),
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
		self.mime_type = mime_type.into();
		self
	}

	pub fn with_size(mut self, name: impl Into<String>) -> Self {
		self.sizes.push(name.into());
		self
	}

	pub fn id(&self) -> AttachmentId {
		self.id
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn mime_type(&self) -> &str {
		&self.mime_type
	}

	/// Attached file path, `None` when unset or empty
	pub fn attached_file(&self) -> Option<&str> {
		self.attached_file.as_deref().filter(|p| !p.is_empty())
	}

	pub fn sizes(&self) -> &[String] {
		&self.sizes
	}
}
