//! media - media library maintenance
//!
//! Command-line entry point; see `media --help`.

use anyhow::Result;
use clap::Parser;

use medialib::cli::{Cli, Command};
use medialib::commands;
use medialib::config;
use medialib::storage::Library;
use medialib::ui::{self, Log};

fn main() {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);

	if let Err(e) = run(cli) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	print_header();

	let root = config::library_root(&cli.path);
	ui::debug(&format!("Library: {}", root.display()));

	match cli.command {
		Command::Cleanup { dry_run } => {
			let mut library = Library::open(&root)?;
			commands::cleanup::run(&mut library, dry_run)?;
		}
	}

	Ok(())
}

fn print_header() {
	ui::header(&format!("─── Media v{} ───", env!("CARGO_PKG_VERSION")));
}
