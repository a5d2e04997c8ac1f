//! Pure rendering of a merged entry set into display lines.
//!
//! The formatter performs no I/O and consults nothing but its inputs, so
//! rendering the same set twice produces byte-identical lines. Column widths
//! are constants rather than content-derived for the same reason.

use keyscope_base::notation::symbolize_literals;
use keyscope_base::{Entry, EntrySet, Provenance, RecordKind};

/// Width of the title and section rules.
const RULE_WIDTH: usize = 78;
/// Fixed width of the token column.
const TOKEN_WIDTH: usize = 20;
/// Fixed width of the plugin/owner column (command reports only).
const OWNER_WIDTH: usize = 14;
/// Fixed width of the action column; longer text is cut with an ellipsis.
const ACTION_WIDTH: usize = 30;

const ELLIPSIS: char = '…';

const LEGEND_ORDER: [Provenance; 3] =
	[Provenance::StaticDoc, Provenance::LiveGlobal, Provenance::LiveLocal];

/// Summary metadata rendered alongside the entries.
#[derive(Debug, Clone)]
pub struct ReportMeta<'a> {
	/// Title block text.
	pub title: &'a str,
	/// Which record shape the rows carry (commands get an owner column).
	pub kind: RecordKind,
	/// Configured primary trigger, folded back to `<leader>` in tokens.
	pub leader: &'a str,
	/// Host version the static data was sourced from.
	pub host_version: &'a str,
	/// Whether the static source could be read this session.
	pub static_available: bool,
}

/// Renders the merged set into an ordered sequence of display lines.
pub fn render(set: &EntrySet, meta: &ReportMeta<'_>) -> Vec<String> {
	let mut lines = Vec::new();

	lines.push("=".repeat(RULE_WIDTH));
	lines.push(format!("  {}", meta.title));
	lines.push("=".repeat(RULE_WIDTH));
	lines.push(String::new());

	let counts = set.provenance_counts();
	lines.push(format!(
		"  Entries: {} total ({} built-in, {} registered, {} buffer-local)",
		counts.total(),
		counts.builtin,
		counts.registered,
		counts.local
	));
	let legend = LEGEND_ORDER
		.iter()
		.map(|p| format!("{} {}", p.indicator(), p.legend()))
		.collect::<Vec<_>>()
		.join("   ");
	lines.push(format!("  Legend:  {legend}"));
	if meta.static_available {
		lines.push(format!(
			"  Source:  bundled help documentation, host version {}",
			meta.host_version
		));
	} else {
		lines.push(format!(
			"  Source:  help documentation unavailable, live data only (host version {})",
			meta.host_version
		));
	}

	for (category, entries) in set.iter() {
		if entries.is_empty() {
			continue;
		}
		lines.push(String::new());
		lines.push(format!("{} ({})", category.label(), entries.len()));
		lines.push("-".repeat(RULE_WIDTH));
		lines.push(header_row(meta.kind));
		for entry in entries {
			lines.push(entry_row(entry, meta));
		}
	}

	lines.push(String::new());
	lines.push(tip_line(meta.kind).to_string());
	lines
}

fn header_row(kind: RecordKind) -> String {
	let row = match kind {
		RecordKind::Bindings => format!(
			"  P  {} {} Description",
			cell("Token", TOKEN_WIDTH),
			cell("Action", ACTION_WIDTH)
		),
		RecordKind::Commands => format!(
			"  P  {} {} {} Description",
			cell("Command", TOKEN_WIDTH),
			cell("Plugin", OWNER_WIDTH),
			cell("Action", ACTION_WIDTH)
		),
	};
	row.trim_end().to_string()
}

fn entry_row(entry: &Entry, meta: &ReportMeta<'_>) -> String {
	let token = symbolize_literals(&entry.token, meta.leader);
	let action = entry.action.as_deref().unwrap_or("");
	let row = match meta.kind {
		RecordKind::Bindings => format!(
			"  {}  {} {} {}",
			entry.provenance.indicator(),
			cell(&token, TOKEN_WIDTH),
			cell(action, ACTION_WIDTH),
			entry.description
		),
		RecordKind::Commands => format!(
			"  {}  {} {} {} {}",
			entry.provenance.indicator(),
			cell(&token, TOKEN_WIDTH),
			cell(entry.owner.as_deref().unwrap_or(""), OWNER_WIDTH),
			cell(action, ACTION_WIDTH),
			entry.description
		),
	};
	row.trim_end().to_string()
}

fn tip_line(kind: RecordKind) -> &'static str {
	match kind {
		RecordKind::Bindings => {
			"Tip: run the keyscope-commands action for the matching command report."
		}
		RecordKind::Commands => {
			"Tip: run the keyscope-bindings action for the matching binding report."
		}
	}
}

/// Pads or cuts `text` to exactly `width` characters; cut text ends in an
/// ellipsis so the loss is visible.
fn cell(text: &str, width: usize) -> String {
	let count = text.chars().count();
	if count > width {
		let mut out: String = text.chars().take(width - 1).collect();
		out.push(ELLIPSIS);
		out
	} else {
		let mut out = text.to_string();
		out.push_str(&" ".repeat(width - count));
		out
	}
}
