//! In-memory host used by the test suites.
//!
//! Implements every capability trait over plain collections so the whole
//! pipeline can be exercised without a running host. Notifications and
//! presented reports are recorded for assertion.

use std::cell::RefCell;
use std::collections::HashMap;

use keyscope_base::BindingMode;

use crate::capability::{
	DocError, DocSource, LiveRegistry, Notifier, Presenter, QueryScope, RawRegistration, Severity,
};

/// A scriptable, recording host.
#[derive(Debug, Default)]
pub struct FakeHost {
	doc: Option<String>,
	bindings: HashMap<(BindingMode, QueryScope), Vec<RawRegistration>>,
	commands: HashMap<QueryScope, Vec<RawRegistration>>,
	/// Number of times the help documentation was read.
	pub doc_reads: RefCell<usize>,
	/// Notifications posted through [`Notifier`], oldest first.
	pub notices: RefCell<Vec<(Severity, String)>>,
	/// Reports handed to [`Presenter`], as (panel, lines) pairs.
	pub presented: RefCell<Vec<(String, Vec<String>)>>,
}

impl FakeHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes the help documentation available with the given text.
	pub fn set_doc(&mut self, text: impl Into<String>) {
		self.doc = Some(text.into());
	}

	pub fn add_binding(&mut self, mode: BindingMode, scope: QueryScope, raw: RawRegistration) {
		self.bindings.entry((mode, scope)).or_default().push(raw);
	}

	pub fn add_command(&mut self, scope: QueryScope, raw: RawRegistration) {
		self.commands.entry(scope).or_default().push(raw);
	}
}

impl DocSource for FakeHost {
	fn read_doc(&self) -> Result<String, DocError> {
		*self.doc_reads.borrow_mut() += 1;
		self.doc.clone().ok_or(DocError::SourceUnavailable)
	}
}

impl LiveRegistry for FakeHost {
	fn bindings(&self, mode: BindingMode, scope: QueryScope) -> Vec<RawRegistration> {
		self.bindings.get(&(mode, scope)).cloned().unwrap_or_default()
	}

	fn commands(&self, scope: QueryScope) -> Vec<RawRegistration> {
		self.commands.get(&scope).cloned().unwrap_or_default()
	}
}

impl Notifier for FakeHost {
	fn notify(&self, severity: Severity, message: &str) {
		self.notices.borrow_mut().push((severity, message.to_string()));
	}
}

impl Presenter for FakeHost {
	fn present(&self, panel: &str, lines: &[String]) {
		self.presented.borrow_mut().push((panel.to_string(), lines.to_vec()));
	}
}
