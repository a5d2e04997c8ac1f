//! File-backed stand-in for the host's live registration tables.
//!
//! The CLI has no running host to introspect, so "live" registrations are
//! loaded from a TOML file instead:
//!
//! ```toml
//! [[binding]]
//! mode = "insert"            # defaults to "normal"
//! scope = "buffer-local"     # defaults to "global"
//! token = "<C-s>"
//! action = "require('snip').expand()"
//! description = "Expand snippet"
//!
//! [[command]]
//! token = "Format"
//! action = "require('conform').format()"
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use keyscope_base::BindingMode;
use keyscope_host::{LiveRegistry, QueryScope, RawRegistration};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RegistrationsFile {
	#[serde(default)]
	binding: Vec<BindingRecord>,
	#[serde(default)]
	command: Vec<CommandRecord>,
}

#[derive(Debug, Deserialize)]
struct BindingRecord {
	#[serde(default)]
	mode: BindingMode,
	#[serde(default = "default_scope")]
	scope: QueryScope,
	#[serde(flatten)]
	raw: RawRegistration,
}

#[derive(Debug, Deserialize)]
struct CommandRecord {
	#[serde(default = "default_scope")]
	scope: QueryScope,
	#[serde(flatten)]
	raw: RawRegistration,
}

fn default_scope() -> QueryScope {
	QueryScope::Global
}

/// Registration tables loaded from a TOML file.
#[derive(Debug, Default)]
pub struct FileRegistry {
	bindings: HashMap<(BindingMode, QueryScope), Vec<RawRegistration>>,
	commands: HashMap<QueryScope, Vec<RawRegistration>>,
}

impl FileRegistry {
	/// Loads a registrations file.
	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let text = std::fs::read_to_string(path)
			.with_context(|| format!("reading registrations file {}", path.display()))?;
		Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
	}

	fn parse(text: &str) -> anyhow::Result<Self> {
		let file: RegistrationsFile = toml::from_str(text)?;
		let mut registry = Self::default();
		for record in file.binding {
			registry
				.bindings
				.entry((record.mode, record.scope))
				.or_default()
				.push(record.raw);
		}
		for record in file.command {
			registry.commands.entry(record.scope).or_default().push(record.raw);
		}
		Ok(registry)
	}
}

impl LiveRegistry for FileRegistry {
	fn bindings(&self, mode: BindingMode, scope: QueryScope) -> Vec<RawRegistration> {
		self.bindings.get(&(mode, scope)).cloned().unwrap_or_default()
	}

	fn commands(&self, scope: QueryScope) -> Vec<RawRegistration> {
		self.commands.get(&scope).cloned().unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_bindings_and_commands_with_defaults() {
		let registry = FileRegistry::parse(
			r#"
				[[binding]]
				token = "<leader>x"
				description = "Do X"

				[[binding]]
				mode = "insert"
				scope = "buffer-local"
				token = "<C-s>"

				[[command]]
				token = "Format"
				action = "require('conform').format()"
			"#,
		)
		.unwrap();

		let normal = registry.bindings(BindingMode::Normal, QueryScope::Global);
		assert_eq!(normal.len(), 1);
		assert_eq!(normal[0].token, "<leader>x");
		assert_eq!(normal[0].description.as_deref(), Some("Do X"));

		let insert = registry.bindings(BindingMode::Insert, QueryScope::BufferLocal);
		assert_eq!(insert.len(), 1);

		let commands = registry.commands(QueryScope::Global);
		assert_eq!(commands.len(), 1);
		assert_eq!(commands[0].action.as_deref(), Some("require('conform').format()"));
	}

	#[test]
	fn empty_file_is_an_empty_registry() {
		let registry = FileRegistry::parse("").unwrap();
		assert!(registry.bindings(BindingMode::Normal, QueryScope::Global).is_empty());
		assert!(registry.commands(QueryScope::Global).is_empty());
	}

	#[test]
	fn unknown_mode_is_rejected() {
		let err = FileRegistry::parse("[[binding]]\nmode = \"hybrid\"\ntoken = \"x\"\n");
		assert!(err.is_err());
	}
}
