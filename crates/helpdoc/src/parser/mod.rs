//! Single-pass line scanner for the bundled help file.

use std::sync::LazyLock;

use keyscope_base::notation::normalize_key_token;
use keyscope_base::{BindingMode, Category, CommandScope, Entry, EntrySet, Provenance, RecordKind};
use regex::Regex;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Record line shape: a `*`-delimited tag, a whitespace run, a token, then
/// the description to end of line. The description may be absent.
static RECORD_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\*([^*\s]+)\*\s+(\S+)(?:\s+(.*?))?\s*$").expect("record pattern is valid")
});

/// Maps tag prefixes to categories and names the fallback category.
///
/// The same scan algorithm parses both the bindings and the commands
/// sub-format; only the hint map (and the record-kind selector) differ.
#[derive(Debug, Clone)]
pub struct HintMap {
	prefixes: Vec<(String, Category)>,
	default: Category,
	categories: Vec<Category>,
}

impl HintMap {
	/// A hint map with explicit prefixes, fallback, and category space.
	///
	/// `categories` lists every category the parser output must cover, even
	/// when no line matches it.
	pub fn new(
		prefixes: Vec<(String, Category)>,
		default: Category,
		categories: Vec<Category>,
	) -> Self {
		Self { prefixes, default, categories }
	}

	/// The standard hint map for the bindings sub-format.
	///
	/// Tags without a recognized mode prefix document normal-mode bindings,
	/// by far the most common case in the help file.
	pub fn bindings() -> Self {
		let prefix = |p: &str, mode: BindingMode| (p.to_string(), Category::Binding(mode));
		Self::new(
			vec![
				prefix("i_", BindingMode::Insert),
				prefix("v_", BindingMode::Visual),
				prefix("s_", BindingMode::Select),
				prefix("o_", BindingMode::OperatorPending),
				prefix("t_", BindingMode::Terminal),
				prefix("c_", BindingMode::Command),
			],
			Category::Binding(BindingMode::Normal),
			RecordKind::Bindings.categories(),
		)
	}

	/// The standard hint map for the commands sub-format.
	///
	/// Command tags carry no scope prefix; everything documented in the help
	/// file is by definition built in.
	pub fn commands() -> Self {
		Self::new(vec![], Category::Command(CommandScope::Builtin), RecordKind::Commands.categories())
	}

	/// Category for a tag; the first matching prefix wins.
	fn category_for(&self, tag: &str) -> Category {
		self.prefixes
			.iter()
			.find(|(prefix, _)| tag.starts_with(prefix.as_str()))
			.map(|(_, category)| *category)
			.unwrap_or(self.default)
	}
}

/// Parses the full text of the help file into categorized entries.
///
/// Single pass over the input. Every category in the hint map is present in
/// the output, empty when nothing matched; matched entries keep file order.
/// The record-kind selector discriminates the two sub-formats sharing the
/// file: command records document `:`-prefixed ex commands, binding records
/// everything else.
///
/// Tokens are rewritten from documentation notation into the host's
/// canonical notation before they are stored, so downstream consumers never
/// see the `CTRL-x` form.
pub fn parse_doc(text: &str, hints: &HintMap, kind: RecordKind) -> EntrySet {
	let mut set = EntrySet::seeded(hints.categories.iter().copied());
	let mut matched = 0usize;

	for line in text.lines() {
		let Some(caps) = RECORD_LINE.captures(line) else {
			continue;
		};
		let tag = &caps[1];
		let raw_token = &caps[2];

		let is_command_record = raw_token.starts_with(':');
		match kind {
			RecordKind::Bindings if is_command_record => continue,
			RecordKind::Commands if !is_command_record => continue,
			_ => {}
		}

		let token = normalize_key_token(raw_token);
		if token.is_empty() {
			continue;
		}
		let description = caps.get(3).map(|m| m.as_str()).unwrap_or_default();

		let entry = Entry::new(token, Provenance::StaticDoc).with_description(description);
		set.push(hints.category_for(tag), entry);
		matched += 1;
	}

	debug!(matched, total_lines = text.lines().count(), "parsed help documentation");
	set
}
