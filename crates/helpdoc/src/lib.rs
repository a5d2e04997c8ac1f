//! # Help documentation parser
//!
//! The host does not expose its built-in bindings and commands through the
//! registration API; the only authoritative list is the help file bundled
//! with the application. This crate scrapes that file.
//!
//! The file is semi-tabular: most lines are prose, section headers or
//! separators, but record lines follow a fixed shape
//!
//! ```text
//! *tag*  token  description to end of line
//! ```
//!
//! where the `*`-delimited tag carries an optional mode prefix (`i_`, `v_`,
//! ...) and the token is written in the documentation's `CTRL-x` notation.
//! Lines that do not match the shape are expected and skipped silently.

mod parser;

pub use parser::{HintMap, parse_doc};
