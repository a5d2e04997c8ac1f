//! Live registration collection.
//!
//! Walks every modal context (bindings) or both command scopes (commands),
//! queries global and buffer-local tables separately, and converts raw host
//! records into typed entries tagged with their provenance. Records with an
//! empty token are dropped at the boundary; the non-empty-token invariant
//! holds for everything past this point.

use keyscope_base::{BindingMode, Category, CommandScope, Entry, EntrySet, Provenance, RecordKind};
use tracing::debug;

use crate::attribution::infer_owner;
use crate::capability::{LiveRegistry, QueryScope, RawRegistration};

const SCOPES: [(QueryScope, Provenance); 2] = [
	(QueryScope::Global, Provenance::LiveGlobal),
	(QueryScope::BufferLocal, Provenance::LiveLocal),
];

/// Queries all currently registered bindings across every modal context.
pub fn collect_live_bindings(registry: &dyn LiveRegistry) -> EntrySet {
	let mut set = EntrySet::seeded(RecordKind::Bindings.categories());
	for mode in BindingMode::ALL {
		for (scope, provenance) in SCOPES {
			for raw in registry.bindings(mode, scope) {
				if let Some(entry) = entry_from_raw(raw, provenance) {
					set.push(Category::Binding(mode), entry);
				}
			}
		}
	}
	debug!(entries = set.len(), "collected live bindings");
	set
}

/// Queries user-registered commands in the global and buffer-local scope.
pub fn collect_live_commands(registry: &dyn LiveRegistry) -> EntrySet {
	let mut set = EntrySet::seeded(RecordKind::Commands.categories());
	for (scope, provenance, category) in [
		(QueryScope::Global, Provenance::LiveGlobal, CommandScope::Global),
		(QueryScope::BufferLocal, Provenance::LiveLocal, CommandScope::Local),
	] {
		for raw in registry.commands(scope) {
			if let Some(entry) = entry_from_raw(raw, provenance) {
				set.push(Category::Command(category), entry);
			}
		}
	}
	debug!(entries = set.len(), "collected live commands");
	set
}

fn entry_from_raw(raw: RawRegistration, provenance: Provenance) -> Option<Entry> {
	if raw.token.is_empty() {
		return None;
	}
	let owner = infer_owner(raw.description.as_deref(), raw.action.as_deref());
	let mut entry = Entry::new(raw.token, provenance)
		.with_description(raw.description.unwrap_or_default());
	entry.action = raw.action;
	entry.owner = owner;
	Some(entry)
}

#[cfg(test)]
mod tests {
	use keyscope_base::BindingMode;

	use super::*;
	use crate::fake::FakeHost;

	#[test]
	fn bindings_cover_every_mode_and_both_scopes() {
		let mut host = FakeHost::new();
		host.add_binding(
			BindingMode::Insert,
			QueryScope::Global,
			RawRegistration::new("<C-s>").with_description("save"),
		);
		host.add_binding(
			BindingMode::Insert,
			QueryScope::BufferLocal,
			RawRegistration::new("<C-l>").with_description("lsp thing"),
		);

		let set = collect_live_bindings(&host);
		assert_eq!(set.categories().count(), BindingMode::ALL.len());

		let insert = set.entries(Category::Binding(BindingMode::Insert));
		assert_eq!(insert.len(), 2);
		assert_eq!(insert[0].provenance, Provenance::LiveGlobal);
		assert_eq!(insert[1].provenance, Provenance::LiveLocal);
	}

	#[test]
	fn empty_tokens_are_dropped_at_the_boundary() {
		let mut host = FakeHost::new();
		host.add_binding(BindingMode::Normal, QueryScope::Global, RawRegistration::new(""));
		let set = collect_live_bindings(&host);
		assert!(set.is_empty());
	}

	#[test]
	fn owners_are_attributed_from_raw_text() {
		let mut host = FakeHost::new();
		host.add_command(
			QueryScope::Global,
			RawRegistration::new("Format").with_action("require('conform').format()"),
		);
		let set = collect_live_commands(&host);
		let global = set.entries(Category::Command(CommandScope::Global));
		assert_eq!(global[0].owner.as_deref(), Some("conform"));
	}

	#[test]
	fn commands_split_by_scope() {
		let mut host = FakeHost::new();
		host.add_command(QueryScope::Global, RawRegistration::new("Format"));
		host.add_command(QueryScope::BufferLocal, RawRegistration::new("LspRename"));

		let set = collect_live_commands(&host);
		assert_eq!(set.entries(Category::Command(CommandScope::Global)).len(), 1);
		let local = set.entries(Category::Command(CommandScope::Local));
		assert_eq!(local.len(), 1);
		assert_eq!(local[0].provenance, Provenance::LiveLocal);
	}
}
