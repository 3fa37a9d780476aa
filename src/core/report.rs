//! Cleanup run counters and summary

/// What a single record check concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// File present on disk
	Valid,
	/// File absent, record removed (or would be, in a dry run)
	Missing,
	/// No path could be resolved for the record
	Unresolved,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
	pub total: usize,
	pub valid: usize,
	pub missing: usize,
	pub unresolved: usize,
	pub dry_run: bool,
}

impl CleanupReport {
	pub fn new(dry_run: bool) -> Self {
		Self {
			dry_run,
			..Self::default()
		}
	}

	pub fn record(&mut self, outcome: Outcome) {
		self.total += 1;
		match outcome {
			Outcome::Valid => self.valid += 1,
			Outcome::Missing => self.missing += 1,
			Outcome::Unresolved => self.unresolved += 1,
		}
	}

	pub fn is_consistent(&self) -> bool {
		self.total == self.valid + self.missing + self.unresolved
	}

	/// Number of records actually deleted by the run
	pub fn removed(&self) -> usize {
		if self.dry_run {
			0
		} else {
			self.missing
		}
	}

	pub fn summary(&self) -> String {
		let missing_noun = if self.dry_run {
			plural(self.missing, "missing attachment", "missing attachments")
		} else {
			plural(self.missing, "removed attachment", "removed attachments")
		};

		format!(
			"Found {} {}, {} {}, {} {} and {} {}.",
			self.total,
			plural(self.total, "attachment", "attachments"),
			self.valid,
			plural(self.valid, "valid attachment", "valid attachments"),
			self.missing,
			missing_noun,
			self.unresolved,
			plural(self.unresolved, "unresolved attachment", "unresolved attachments"),
		)
	}
}

pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
	if count == 1 {
		singular
	} else {
		plural
	}
}
