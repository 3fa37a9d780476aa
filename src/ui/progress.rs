//! Single-line progress bar on stderr

use colored::*;
use std::io::{self, IsTerminal, Write};

const BAR_WIDTH: usize = 30;

pub struct Progress {
	label: String,
	total: usize,
	current: usize,
	visible: bool,
}

impl Progress {
	/// Bar is only drawn when stderr is a terminal
	pub fn new(label: &str, total: usize) -> Self {
		Self {
			label: label.to_string(),
			total,
			current: 0,
			visible: io::stderr().is_terminal(),
		}
	}

	pub fn tick(&mut self) {
		self.current = (self.current + 1).min(self.total);
		if self.visible {
			self.draw();
		}
	}

	pub fn finish(&mut self) {
		if self.visible {
			self.draw();
			eprintln!();
		}
	}

	pub fn position(&self) -> usize {
		self.current
	}

	fn draw(&self) {
		let filled = if self.total == 0 {
			BAR_WIDTH
		} else {
			self.current * BAR_WIDTH / self.total
		};

		let mut stderr = io::stderr().lock();
		let _ = write!(
			stderr,
			"\r{} {}{} {}",
			self.label.bright_white(),
			"█".repeat(filled).bright_blue(),
			"░".repeat(BAR_WIDTH - filled).dimmed(),
			format!("[{}/{}]", self.current, self.total).bright_blue().bold(),
		);
		let _ = stderr.flush();
	}
}
