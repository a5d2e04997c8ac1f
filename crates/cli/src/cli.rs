//! CLI schema for the keyscope binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect built-in and registered key bindings and commands.
#[derive(Debug, Parser)]
#[command(name = "keyscope", version, about)]
pub struct Cli {
	/// Directory to search for the help documentation file. May be given
	/// multiple times; the first directory containing the file wins.
	#[arg(long = "doc-dir", value_name = "DIR")]
	pub doc_dirs: Vec<PathBuf>,

	/// Name of the help documentation file on the search path.
	#[arg(long, value_name = "NAME", default_value = "index.txt")]
	pub doc_file: String,

	/// TOML file describing the live registrations to report over.
	#[arg(long, value_name = "FILE")]
	pub registrations: Option<PathBuf>,

	/// The primary trigger key, shown as <leader> in report tokens.
	#[arg(long, value_name = "KEY", default_value = " ")]
	pub leader: String,

	/// Host version string echoed in the report summary.
	#[arg(long, value_name = "VERSION", default_value = "unknown")]
	pub host_version: String,

	/// Enable debug logging on stderr.
	#[arg(short, long)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
	/// Print the merged key binding report.
	Bindings,
	/// Print the merged command report.
	Commands,
	/// Print only the bindings keyscope registered itself.
	OwnBindings,
}

impl Command {
	/// Registry name of the action this subcommand maps to.
	pub fn action_name(self) -> &'static str {
		match self {
			Command::Bindings => "keyscope-bindings",
			Command::Commands => "keyscope-commands",
			Command::OwnBindings => "keyscope-own-bindings",
		}
	}
}
