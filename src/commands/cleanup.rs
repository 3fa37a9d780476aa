//! Cleanup command - remove attachments whose file is gone

use anyhow::Result;

use crate::config::CACHE_CLEAR_INTERVAL;
use crate::core::{plural, CleanupReport, Outcome};
use crate::storage::MediaStore;
use crate::ui;

/// Check every attachment of `store` and delete those whose file is missing.
///
/// Returns `None` when the store holds no attachment at all. Listing and
/// deletion failures abort the run; records already deleted stay deleted.
pub fn run<S: MediaStore + ?Sized>(store: &mut S, dry_run: bool) -> Result<Option<CleanupReport>> {
	let ids = store.attachment_ids()?;
	let count = ids.len();

	if count == 0 {
		ui::warn("No media found.");
		return Ok(None);
	}

	ui::info(&format!(
		"Found {} {} to check",
		count,
		plural(count, "attachment", "attachments")
	));
	if dry_run {
		ui::info("Dry run: nothing will be deleted");
	}

	let mut report = CleanupReport::new(dry_run);
	let mut progress = ui::Progress::new("Checking files", count);

	for (index, id) in ids.into_iter().enumerate() {
		if (index + 1) % CACHE_CLEAR_INTERVAL == 0 {
			store.clear_cache();
		}

		let outcome = match store.attached_file(id) {
			Ok(Some(path)) if path.is_file() => Outcome::Valid,
			Ok(Some(path)) => {
				ui::debug(&format!("Missing: {} {}", id, path.display()));
				if !dry_run {
					store.delete_attachment(id)?;
				}
				Outcome::Missing
			}
			Ok(None) => {
				ui::debug(&format!("Skipped {}: no attached file", id));
				Outcome::Unresolved
			}
			Err(e) => {
				ui::debug(&format!("Skipped {}: {:#}", id, e));
				Outcome::Unresolved
			}
		};

		report.record(outcome);
		progress.tick();
	}

	progress.finish();
	ui::success(&report.summary());

	Ok(Some(report))
}
