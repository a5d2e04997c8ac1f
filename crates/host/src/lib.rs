//! Host capability boundary.
//!
//! Everything the pipeline needs from the host runtime is expressed as a
//! small trait here: locating and reading the bundled help file
//! ([`DocSource`]), enumerating live registrations ([`LiveRegistry`]),
//! posting transient notifications ([`Notifier`]) and presenting rendered
//! lines ([`Presenter`]). Host records cross the boundary as
//! [`RawRegistration`] values and are converted into the fully-typed
//! [`keyscope_base::Entry`] shape immediately, so nothing downstream touches
//! loosely-shaped host data.

pub mod attribution;
pub mod capability;
pub mod fake;
pub mod live;
pub mod search_path;

pub use capability::{
	DocError, DocSource, LiveRegistry, Notifier, Presenter, QueryScope, RawRegistration, Severity,
};
pub use live::{collect_live_bindings, collect_live_commands};
pub use search_path::SearchPathDoc;
