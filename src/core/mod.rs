//! Core domain types

pub mod attachment;
pub mod report;

pub use attachment::{Attachment, AttachmentId};
pub use report::{plural, CleanupReport, Outcome};
