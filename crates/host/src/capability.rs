//! Capability traits and the typed boundary record.

use keyscope_base::BindingMode;
use serde::{Deserialize, Serialize};

/// Provides the text of the bundled help documentation.
pub trait DocSource {
	/// Reads the whole help file as text.
	///
	/// # Errors
	///
	/// Returns [`DocError::SourceUnavailable`] when the file cannot be
	/// located or read. Callers treat this as a degraded mode, never as a
	/// fatal condition.
	fn read_doc(&self) -> Result<String, DocError>;
}

/// Error raised by a [`DocSource`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocError {
	/// The help file was not found on the search path, or could not be read.
	#[error("help documentation not available")]
	SourceUnavailable,
}

/// Whether a query targets the global table or the current buffer's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryScope {
	Global,
	BufferLocal,
}

/// A registration record as the host hands it over.
///
/// Only `token` is required; hosts routinely omit the description, and some
/// registration styles have no separate action text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawRegistration {
	/// Literal key sequence or command name.
	pub token: String,
	/// Right-hand side / replacement text.
	#[serde(default)]
	pub action: Option<String>,
	/// Human-readable explanation.
	#[serde(default)]
	pub description: Option<String>,
}

impl RawRegistration {
	pub fn new(token: impl Into<String>) -> Self {
		Self { token: token.into(), action: None, description: None }
	}

	pub fn with_action(mut self, action: impl Into<String>) -> Self {
		self.action = Some(action.into());
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

/// Enumerates currently active, explicitly registered bindings and commands.
///
/// Queries reflect mutable runtime state and are never cached; the host
/// contract makes them simple, non-failing introspection calls, so the
/// methods return plain data.
pub trait LiveRegistry {
	/// Bindings registered for one modal context in one scope.
	fn bindings(&self, mode: BindingMode, scope: QueryScope) -> Vec<RawRegistration>;

	/// User-registered commands in one scope.
	fn commands(&self, scope: QueryScope) -> Vec<RawRegistration>;
}

/// Severity of a transient user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Info,
	Warning,
	Error,
}

/// Displays a one-line transient message to the user.
pub trait Notifier {
	fn notify(&self, severity: Severity, message: &str);
}

/// Presents rendered report lines in a read-only display surface.
///
/// `panel` is a logical identity the host can key open/focus/toggle
/// requests on; the presenter owns everything about how the surface looks.
pub trait Presenter {
	fn present(&self, panel: &str, lines: &[String]);
}
