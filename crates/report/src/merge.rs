//! Merging of static and live entry sets.

use keyscope_base::{EntrySet, RecordKind};

/// Reserved prefix extensions use for non-user-facing indirection mappings.
/// Entries behind it are implementation detail, not bindings a user can type.
const INTERNAL_MARKER: &str = "<Plug>";

/// Merges the static and live sets into one categorized collection.
///
/// Per category, static entries come first and live entries after, each
/// side's internal order preserved: built-in items anchor the top of a
/// section, registrations layer on top. Noise entries are dropped; nothing
/// else is. In particular a token appearing in both sources is kept twice,
/// once per provenance; conflict resolution is out of scope.
pub fn merge(static_set: &EntrySet, live: &EntrySet, kind: RecordKind) -> EntrySet {
	let mut merged = EntrySet::seeded(kind.categories());
	for category in kind.categories() {
		let both = static_set.entries(category).iter().chain(live.entries(category));
		for entry in both {
			if is_noise(&entry.token, kind) {
				continue;
			}
			merged.push(category, entry.clone());
		}
	}
	merged
}

/// Internal-marker entries are never shown; ex-prompt pseudo-entries are not
/// key bindings and are dropped from the binding report.
fn is_noise(token: &str, kind: RecordKind) -> bool {
	token.starts_with(INTERNAL_MARKER)
		|| (kind == RecordKind::Bindings && token.starts_with(':'))
}

#[cfg(test)]
mod tests {
	use keyscope_base::{BindingMode, Category, Entry, Provenance};

	use super::*;

	fn set(category: Category, entries: Vec<Entry>) -> EntrySet {
		let mut out = EntrySet::new();
		for entry in entries {
			out.push(category, entry);
		}
		out
	}

	#[test]
	fn static_entries_precede_live_entries_in_original_order() {
		let cat = Category::Binding(BindingMode::Normal);
		let stat = set(
			cat,
			vec![
				Entry::new("dd", Provenance::StaticDoc),
				Entry::new("gg", Provenance::StaticDoc),
			],
		);
		let live = set(
			cat,
			vec![
				Entry::new("<leader>a", Provenance::LiveGlobal),
				Entry::new("<leader>b", Provenance::LiveLocal),
			],
		);

		let merged = merge(&stat, &live, RecordKind::Bindings);
		let tokens: Vec<_> = merged.entries(cat).iter().map(|e| e.token.as_str()).collect();
		assert_eq!(tokens, ["dd", "gg", "<leader>a", "<leader>b"]);
	}

	#[test]
	fn internal_marker_entries_are_filtered() {
		let cat = Category::Binding(BindingMode::Normal);
		let live = set(
			cat,
			vec![
				Entry::new("<Plug>SomeInternal", Provenance::LiveGlobal),
				Entry::new("<leader>x", Provenance::LiveGlobal),
			],
		);

		let merged = merge(&EntrySet::new(), &live, RecordKind::Bindings);
		let tokens: Vec<_> = merged.entries(cat).iter().map(|e| e.token.as_str()).collect();
		assert_eq!(tokens, ["<leader>x"]);
	}

	#[test]
	fn ex_prompt_pseudo_entries_are_dropped_from_binding_reports_only() {
		let bind_cat = Category::Binding(BindingMode::Normal);
		let live = set(bind_cat, vec![Entry::new(":Format", Provenance::LiveGlobal)]);
		let merged = merge(&EntrySet::new(), &live, RecordKind::Bindings);
		assert!(merged.is_empty());

		use keyscope_base::CommandScope;
		let cmd_cat = Category::Command(CommandScope::Global);
		let live = set(cmd_cat, vec![Entry::new(":Format", Provenance::LiveGlobal)]);
		let merged = merge(&EntrySet::new(), &live, RecordKind::Commands);
		assert_eq!(merged.entries(cmd_cat).len(), 1);
	}

	#[test]
	fn duplicate_tokens_across_provenances_are_both_kept() {
		let cat = Category::Binding(BindingMode::Normal);
		let stat = set(cat, vec![Entry::new("gg", Provenance::StaticDoc)]);
		let live = set(cat, vec![Entry::new("gg", Provenance::LiveGlobal)]);

		let merged = merge(&stat, &live, RecordKind::Bindings);
		assert_eq!(merged.entries(cat).len(), 2);
	}
}
