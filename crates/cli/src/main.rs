mod cli;
mod registrations;

use clap::Parser;
use keyscope_host::{Notifier, Presenter, SearchPathDoc, Severity};
use keyscope_report::{ReportBuilder, ReportConfig, find_action};

use crate::cli::Cli;
use crate::registrations::FileRegistry;

/// Presents report lines by printing them; the panel identity is irrelevant
/// on a terminal.
struct StdoutPresenter;

impl Presenter for StdoutPresenter {
	fn present(&self, _panel: &str, lines: &[String]) {
		for line in lines {
			println!("{line}");
		}
	}
}

/// Transient notifications go to stderr so they never mix with report text.
struct StderrNotifier;

impl Notifier for StderrNotifier {
	fn notify(&self, severity: Severity, message: &str) {
		let tag = match severity {
			Severity::Info => "info",
			Severity::Warning => "warning",
			Severity::Error => "error",
		};
		eprintln!("[{tag}] {message}");
	}
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
	tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

	let doc = SearchPathDoc::new(cli.doc_dirs, cli.doc_file);
	let registry = match &cli.registrations {
		Some(path) => FileRegistry::load(path)?,
		None => FileRegistry::default(),
	};
	let notifier = StderrNotifier;
	let config = ReportConfig { leader: cli.leader, host_version: cli.host_version };
	let builder = ReportBuilder::new(&doc, &registry, &notifier, config);

	let name = cli.command.action_name();
	let def = find_action(name).ok_or_else(|| anyhow::anyhow!("unknown action {name}"))?;
	builder.show(def, &StdoutPresenter);
	Ok(())
}
