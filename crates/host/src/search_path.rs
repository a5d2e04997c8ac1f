//! Search-path lookup for the bundled help file.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::capability::{DocError, DocSource};

/// Locates a help file by name on an ordered list of directories.
///
/// Mirrors the host's runtime-path lookup: the first directory containing
/// the file wins, zero matches means the source is unavailable. A file that
/// exists but cannot be read is treated the same way; the report degrades
/// to live data either way.
#[derive(Debug, Clone)]
pub struct SearchPathDoc {
	dirs: Vec<PathBuf>,
	file_name: String,
}

impl SearchPathDoc {
	pub fn new(dirs: Vec<PathBuf>, file_name: impl Into<String>) -> Self {
		Self { dirs, file_name: file_name.into() }
	}

	/// First existing candidate on the search path, if any.
	fn locate(&self) -> Option<PathBuf> {
		self.dirs.iter().map(|dir| dir.join(&self.file_name)).find(|path| path.is_file())
	}
}

impl DocSource for SearchPathDoc {
	fn read_doc(&self) -> Result<String, DocError> {
		let Some(path) = self.locate() else {
			debug!(file = %self.file_name, "help file not found on search path");
			return Err(DocError::SourceUnavailable);
		};
		match std::fs::read_to_string(&path) {
			Ok(text) => {
				debug!(path = %path.display(), bytes = text.len(), "read help file");
				Ok(text)
			}
			Err(err) => {
				warn!(path = %path.display(), %err, "help file exists but could not be read");
				Err(DocError::SourceUnavailable)
			}
		}
	}
}
