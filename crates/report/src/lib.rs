//! Report assembly.
//!
//! Combines the two entry sources into one report per record kind: the
//! static set scraped from the bundled help documentation (parsed once per
//! process, cached) and the live set queried from the host on every request.
//! The merged collection is rendered into a fixed-width columnar text block
//! and handed to whatever presenter the host provides.

pub mod actions;
pub mod builder;
pub mod format;
pub mod merge;

pub use actions::{ACTIONS, ActionDef, ReportAction, find_action};
pub use builder::{ReportBuilder, ReportConfig};
pub use format::{ReportMeta, render};
pub use merge::merge;
