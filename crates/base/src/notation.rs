//! Key-notation rewriting shared by the parser and the formatter.
//!
//! The bundled documentation writes control keys in a textual `CTRL-x`
//! notation, while the host's canonical display notation is the bracketed
//! `<C-x>` form. Live-queried tokens can go wrong the other way: the host
//! hands back literal byte values (a raw tab, a raw escape, the expanded
//! leader key) that have to be folded back into symbolic form before they
//! are laid out in fixed-width columns.

/// Alias substitutions applied after the generic control-key rule.
///
/// `CTRL-M` first becomes `<C-M>` under the generic rule and is then folded
/// to its canonical `<CR>` alias here, and likewise for the other control
/// characters that have a symbolic name of their own.
const SPECIAL_KEYS: &[(&str, &str)] = &[
	("<C-M>", "<CR>"),
	("<C-[>", "<Esc>"),
	("<C-H>", "<BS>"),
	("<C-J>", "<NL>"),
	("<C-I>", "<Tab>"),
];

/// Rewrites documentation key notation into the host's canonical notation.
///
/// Every `CTRL-x` occurrence becomes `<C-x>`; a trailing `CTRL-` with no key
/// character is left untouched. The special-case table is applied afterwards
/// so control characters with symbolic names render as `<CR>`, `<Esc>`,
/// `<BS>`, `<NL>` and `<Tab>`.
pub fn normalize_key_token(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut rest = raw;
	while let Some(idx) = rest.find("CTRL-") {
		out.push_str(&rest[..idx]);
		let after = &rest[idx + "CTRL-".len()..];
		let mut chars = after.chars();
		match chars.next() {
			Some(key) => {
				out.push_str("<C-");
				out.push(key);
				out.push('>');
				rest = chars.as_str();
			}
			None => {
				out.push_str("CTRL-");
				rest = "";
			}
		}
	}
	out.push_str(rest);

	for (from, to) in SPECIAL_KEYS {
		if out.contains(from) {
			out = out.replace(from, to);
		}
	}
	out
}

/// Folds literal byte values in a live-queried token back into symbolic form.
///
/// The host expands the configured leader key before storing a binding, so a
/// token that starts with the literal leader string reads as a bare space in
/// the report; rewrite it back to `<leader>`. Raw tab, carriage-return and
/// escape bytes are rewritten to their bracketed forms for the same reason.
pub fn symbolize_literals(token: &str, leader: &str) -> String {
	let mut out = if leader.is_empty() {
		token.to_string()
	} else {
		token.replace(leader, "<leader>")
	};
	out = out.replace('\t', "<Tab>");
	out = out.replace('\r', "<CR>");
	out = out.replace('\u{1b}', "<Esc>");
	out
}
