use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "media",
	author,
	version,
	about = "Media library maintenance",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {media} {cleanup}                {cleanup_desc}
  {media} {cleanup} {dry_args}      {dry_desc}
  {media} {cleanup} {path_args}  {path_desc}",
		title = "Examples:".bright_blue().bold(),
		media = "media".bright_blue(),
		cleanup = "cleanup".yellow(),
		cleanup_desc = "Remove attachments whose file is missing".dimmed(),
		dry_args = "--dry-run",
		dry_desc = "Report only, delete nothing".dimmed(),
		path_args = "-p ./uploads/",
		path_desc = "Clean another library".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Library root (directory containing .media)
	#[arg(short = 'p', long = "path", global = true, default_value = ".")]
	pub path: PathBuf,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Remove attachments whose file no longer exists on disk
	Cleanup {
		/// Run the whole check and report, but delete nothing
		#[arg(long = "dry-run")]
		dry_run: bool,
	},
}
