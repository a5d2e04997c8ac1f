//! Best-effort attribution of an entry to the extension that registered it.
//!
//! There is no structured provenance in the host's registration tables; the
//! only signal is convention. Three conventions cover most extensions in the
//! wild: a `Name: ` prefix in the description, a `[Name]` prefix in the
//! description, and a module-load expression in the action text. Anything
//! else yields no owner, which is never an error.

use std::sync::LazyLock;

use regex::Regex;

static NAME_PREFIX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^([A-Za-z][\w-]*):\s").expect("name prefix pattern is valid"));

static BRACKET_PREFIX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\[([^\]\s]+)\]").expect("bracket prefix pattern is valid"));

static REQUIRE_EXPR: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"require\(['"]([A-Za-z0-9_][A-Za-z0-9_./-]*)['"]\)"#)
		.expect("require pattern is valid")
});

/// Infers the probable registering extension from free text.
///
/// The description is consulted first (`Name: ...`, then `[Name] ...`), the
/// action text second (a `require('mod.path')` expression, attributed to the
/// root segment of the module path).
pub fn infer_owner(description: Option<&str>, action: Option<&str>) -> Option<String> {
	if let Some(desc) = description {
		if let Some(caps) = NAME_PREFIX.captures(desc) {
			return Some(caps[1].to_string());
		}
		if let Some(caps) = BRACKET_PREFIX.captures(desc) {
			return Some(caps[1].to_string());
		}
	}
	if let Some(action) = action
		&& let Some(caps) = REQUIRE_EXPR.captures(action)
	{
		let module = &caps[1];
		let root = module.split(['.', '/']).next().unwrap_or(module);
		return Some(root.to_string());
	}
	None
}
