//! Modal contexts and command scopes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A modal input context of the host editor.
///
/// Every mode can carry independent key bindings, so the report enumerates
/// all of them. The set is fixed by the host; there is no "custom mode".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingMode {
	#[default]
	Normal,
	Insert,
	Visual,
	Select,
	OperatorPending,
	Terminal,
	/// Command-line entry mode (the ex prompt).
	Command,
}

impl BindingMode {
	/// All modes, in the order sections appear in the report.
	pub const ALL: [BindingMode; 7] = [
		BindingMode::Normal,
		BindingMode::Insert,
		BindingMode::Visual,
		BindingMode::Select,
		BindingMode::OperatorPending,
		BindingMode::Terminal,
		BindingMode::Command,
	];

	/// Returns a simple string identifier for the mode.
	pub fn name(self) -> &'static str {
		match self {
			BindingMode::Normal => "normal",
			BindingMode::Insert => "insert",
			BindingMode::Visual => "visual",
			BindingMode::Select => "select",
			BindingMode::OperatorPending => "operator-pending",
			BindingMode::Terminal => "terminal",
			BindingMode::Command => "command",
		}
	}

	/// Human-readable section label for the report.
	pub fn label(self) -> &'static str {
		match self {
			BindingMode::Normal => "Normal mode",
			BindingMode::Insert => "Insert mode",
			BindingMode::Visual => "Visual mode",
			BindingMode::Select => "Select mode",
			BindingMode::OperatorPending => "Operator-pending mode",
			BindingMode::Terminal => "Terminal mode",
			BindingMode::Command => "Command-line mode",
		}
	}
}

impl fmt::Display for BindingMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for BindingMode {
	type Err = ParseModeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		BindingMode::ALL
			.into_iter()
			.find(|mode| mode.name() == s)
			.ok_or_else(|| ParseModeError { input: s.to_string() })
	}
}

/// Scope of a command entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandScope {
	/// Shipped with the host, sourced from documentation.
	#[default]
	Builtin,
	/// Explicitly registered, visible everywhere.
	Global,
	/// Registered against the current buffer only.
	Local,
}

impl CommandScope {
	/// All scopes, in report section order.
	pub const ALL: [CommandScope; 3] =
		[CommandScope::Builtin, CommandScope::Global, CommandScope::Local];

	/// Returns a simple string identifier for the scope.
	pub fn name(self) -> &'static str {
		match self {
			CommandScope::Builtin => "builtin",
			CommandScope::Global => "global",
			CommandScope::Local => "local",
		}
	}

	/// Human-readable section label for the report.
	pub fn label(self) -> &'static str {
		match self {
			CommandScope::Builtin => "Built-in commands",
			CommandScope::Global => "Global commands",
			CommandScope::Local => "Buffer-local commands",
		}
	}
}

impl FromStr for CommandScope {
	type Err = ParseModeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		CommandScope::ALL
			.into_iter()
			.find(|scope| scope.name() == s)
			.ok_or_else(|| ParseModeError { input: s.to_string() })
	}
}

/// Error returned when a mode or scope name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode or scope name: {input:?}")]
pub struct ParseModeError {
	/// The string that failed to parse.
	pub input: String,
}
