//! Orchestration of one report request.

use std::sync::OnceLock;

use keyscope_base::{EntrySet, RecordKind};
use keyscope_helpdoc::{HintMap, parse_doc};
use keyscope_host::{
	DocSource, LiveRegistry, Notifier, Presenter, Severity, collect_live_bindings,
	collect_live_commands,
};
use tracing::info;

use crate::actions::{ActionDef, ReportAction};
use crate::format::{ReportMeta, render};
use crate::merge::merge;

/// Owner name keyscope attributes its own registrations under.
const OWN_NAME: &str = "keyscope";

/// Report-wide configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
	/// The configured primary trigger key, shown as `<leader>` in tokens.
	pub leader: String,
	/// Host version string echoed in the summary block.
	pub host_version: String,
}

impl Default for ReportConfig {
	fn default() -> Self {
		Self { leader: " ".to_string(), host_version: "unknown".to_string() }
	}
}

/// Static data scraped from the help documentation, parsed at most once.
struct StaticData {
	bindings: EntrySet,
	commands: EntrySet,
	available: bool,
}

/// Assembles reports from a doc source and a live registry.
///
/// Owns the once-per-process static-parse cache: the help file is read and
/// parsed on the first report request and reused for the rest of the
/// session, while live registrations are re-queried on every request. The
/// `OnceLock` keeps initialization race-free even under a multi-threaded
/// host.
pub struct ReportBuilder<'h> {
	doc: &'h dyn DocSource,
	registry: &'h dyn LiveRegistry,
	notifier: &'h dyn Notifier,
	config: ReportConfig,
	cache: OnceLock<StaticData>,
}

impl<'h> ReportBuilder<'h> {
	pub fn new(
		doc: &'h dyn DocSource,
		registry: &'h dyn LiveRegistry,
		notifier: &'h dyn Notifier,
		config: ReportConfig,
	) -> Self {
		Self { doc, registry, notifier, config, cache: OnceLock::new() }
	}

	/// Renders the merged key binding report.
	pub fn binding_report(&self) -> Vec<String> {
		let data = self.static_data();
		self.notify_if_degraded(data.available);
		let live = collect_live_bindings(self.registry);
		let merged = merge(&data.bindings, &live, RecordKind::Bindings);
		render(&merged, &self.meta("Keyscope: key bindings", RecordKind::Bindings, data.available))
	}

	/// Renders the merged command report.
	pub fn command_report(&self) -> Vec<String> {
		let data = self.static_data();
		self.notify_if_degraded(data.available);
		let live = collect_live_commands(self.registry);
		let merged = merge(&data.commands, &live, RecordKind::Commands);
		render(&merged, &self.meta("Keyscope: commands", RecordKind::Commands, data.available))
	}

	/// Renders only the bindings keyscope registered itself.
	///
	/// Purely a live-data view; the static source is not consulted.
	pub fn own_bindings_report(&self) -> Vec<String> {
		let live = filter_owned(collect_live_bindings(self.registry));
		let merged = merge(&EntrySet::new(), &live, RecordKind::Bindings);
		render(
			&merged,
			&self.meta("Keyscope: own key bindings", RecordKind::Bindings, true),
		)
	}

	/// Renders the report for `def` and hands it to the presenter.
	pub fn show(&self, def: &ActionDef, presenter: &dyn Presenter) {
		let lines = match def.action {
			ReportAction::Bindings => self.binding_report(),
			ReportAction::Commands => self.command_report(),
			ReportAction::OwnBindings => self.own_bindings_report(),
		};
		presenter.present(def.panel, &lines);
	}

	/// The degraded mode is worth a transient notice, never an error.
	fn notify_if_degraded(&self, static_available: bool) {
		if !static_available {
			self.notifier.notify(
				Severity::Info,
				"help documentation unavailable; showing live registrations only",
			);
		}
	}

	fn meta<'a>(
		&'a self,
		title: &'a str,
		kind: RecordKind,
		static_available: bool,
	) -> ReportMeta<'a> {
		ReportMeta {
			title,
			kind,
			leader: &self.config.leader,
			host_version: &self.config.host_version,
			static_available,
		}
	}

	fn static_data(&self) -> &StaticData {
		self.cache.get_or_init(|| match self.doc.read_doc() {
			Ok(text) => {
				let data = StaticData {
					bindings: parse_doc(&text, &HintMap::bindings(), RecordKind::Bindings),
					commands: parse_doc(&text, &HintMap::commands(), RecordKind::Commands),
					available: true,
				};
				info!(
					bindings = data.bindings.len(),
					commands = data.commands.len(),
					"parsed static help data"
				);
				data
			}
			Err(err) => {
				info!(%err, "static source unavailable, reports degrade to live data");
				StaticData {
					bindings: EntrySet::seeded(RecordKind::Bindings.categories()),
					commands: EntrySet::seeded(RecordKind::Commands.categories()),
					available: false,
				}
			}
		})
	}
}

fn filter_owned(set: EntrySet) -> EntrySet {
	let mut out = EntrySet::seeded(set.categories().collect::<Vec<_>>());
	for (category, entries) in set.iter() {
		for entry in entries {
			if entry.owner.as_deref() == Some(OWN_NAME) {
				out.push(category, entry.clone());
			}
		}
	}
	out
}
