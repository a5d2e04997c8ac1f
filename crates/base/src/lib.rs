//! Core data model shared by every keyscope crate.
//!
//! This crate defines the typed shape that host data is converted into at the
//! boundary (`Entry`), the fixed category space it is partitioned over
//! (`BindingMode`, `CommandScope`, `Category`), the insertion-ordered
//! category collection (`EntrySet`), and the key-notation helpers shared by
//! the documentation parser and the report formatter.

pub mod entry;
pub mod mode;
pub mod notation;

pub use entry::{Category, Entry, EntrySet, Provenance, ProvenanceCounts, RecordKind};
pub use mode::{BindingMode, CommandScope, ParseModeError};
