//! Entries, provenance tags, and the ordered category collection.

use std::fmt;

use indexmap::IndexMap;

use crate::mode::{BindingMode, CommandScope};

/// Which of the two parallel record shapes a report is built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
	/// Key sequences bound to actions, one section per modal context.
	Bindings,
	/// Named commands, one section per scope.
	Commands,
}

impl RecordKind {
	/// The category a record falls into when no better hint is available.
	pub fn default_category(self) -> Category {
		match self {
			RecordKind::Bindings => Category::Binding(BindingMode::Normal),
			RecordKind::Commands => Category::Command(CommandScope::Builtin),
		}
	}

	/// All categories of this kind, in report section order.
	pub fn categories(self) -> Vec<Category> {
		match self {
			RecordKind::Bindings => {
				BindingMode::ALL.into_iter().map(Category::Binding).collect()
			}
			RecordKind::Commands => {
				CommandScope::ALL.into_iter().map(Category::Command).collect()
			}
		}
	}
}

/// The category an accepted entry belongs to.
///
/// Categories partition an [`EntrySet`] completely: every entry has exactly
/// one category at merge time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	Binding(BindingMode),
	Command(CommandScope),
}

impl Category {
	/// Human-readable section label.
	pub fn label(self) -> &'static str {
		match self {
			Category::Binding(mode) => mode.label(),
			Category::Command(scope) => scope.label(),
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Where an entry was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
	/// Scraped from the bundled help documentation.
	StaticDoc,
	/// Queried from the host's global registration table.
	LiveGlobal,
	/// Queried from the current buffer's local registration table.
	LiveLocal,
}

impl Provenance {
	/// One-character indicator used in report rows and the legend.
	pub fn indicator(self) -> char {
		match self {
			Provenance::StaticDoc => 'B',
			Provenance::LiveGlobal => 'G',
			Provenance::LiveLocal => 'L',
		}
	}

	/// One-word legend label.
	pub fn legend(self) -> &'static str {
		match self {
			Provenance::StaticDoc => "built-in",
			Provenance::LiveGlobal => "registered",
			Provenance::LiveLocal => "buffer-local",
		}
	}
}

/// A single binding or command record in the host's display notation.
///
/// This is the stable, fully-typed shape the pipeline operates on once host
/// data has crossed the boundary. `token` is always non-empty; everything
/// else is best effort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	/// Literal key sequence or command name.
	pub token: String,
	/// Human-readable explanation. May be empty for live-queried entries.
	pub description: String,
	/// Right-hand side / replacement text, when the host exposes one.
	pub action: Option<String>,
	/// Where the entry was discovered.
	pub provenance: Provenance,
	/// Best-effort attribution of the registering extension.
	pub owner: Option<String>,
}

impl Entry {
	/// Creates an entry with an empty description and no action or owner.
	pub fn new(token: impl Into<String>, provenance: Provenance) -> Self {
		Self {
			token: token.into(),
			description: String::new(),
			action: None,
			provenance,
			owner: None,
		}
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn with_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}

	pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
		self.owner = Some(owner.into());
		self
	}
}

/// Entry counts split by provenance, for the report summary block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProvenanceCounts {
	pub builtin: usize,
	pub registered: usize,
	pub local: usize,
}

impl ProvenanceCounts {
	pub fn total(self) -> usize {
		self.builtin + self.registered + self.local
	}
}

/// Ordered mapping from category to entry sequence.
///
/// Backed by an [`IndexMap`] so iteration follows insertion order, which is
/// what makes a rendered report byte-stable across runs. Sequences keep the
/// order entries were pushed in (file order for parsed entries, query order
/// for live ones).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
	map: IndexMap<Category, Vec<Entry>>,
}

impl EntrySet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a set with an empty sequence for every given category.
	///
	/// Parser output covers all categories in its hint map even when no line
	/// matched, so callers can rely on the category space being complete.
	pub fn seeded(categories: impl IntoIterator<Item = Category>) -> Self {
		let mut set = Self::new();
		for category in categories {
			set.map.entry(category).or_default();
		}
		set
	}

	/// Appends an entry to a category, creating the category if absent.
	pub fn push(&mut self, category: Category, entry: Entry) {
		self.map.entry(category).or_default().push(entry);
	}

	/// Entries of one category, empty when the category is absent.
	pub fn entries(&self, category: Category) -> &[Entry] {
		self.map.get(&category).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Iterates categories with their entry slices, in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (Category, &[Entry])> {
		self.map.iter().map(|(category, entries)| (*category, entries.as_slice()))
	}

	/// All categories present, including seeded-empty ones.
	pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
		self.map.keys().copied()
	}

	/// Total entry count across all categories.
	pub fn len(&self) -> usize {
		self.map.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Entry counts split by provenance.
	pub fn provenance_counts(&self) -> ProvenanceCounts {
		let mut counts = ProvenanceCounts::default();
		for entries in self.map.values() {
			for entry in entries {
				match entry.provenance {
					Provenance::StaticDoc => counts.builtin += 1,
					Provenance::LiveGlobal => counts.registered += 1,
					Provenance::LiveLocal => counts.local += 1,
				}
			}
		}
		counts
	}
}
