use keyscope_base::{BindingMode, Category, CommandScope, Provenance, RecordKind};

use super::*;

const DOC: &str = "\
==============================================================================
2. Editing commands                                     *editing*

Some prose about editing. Not a record line.

*dd*            dd              delete line
*i_CTRL-W*      CTRL-W          delete word before the cursor
*v_d*           d               delete the highlighted text
*:write*        :write          write the whole buffer to the current file
*CTRL-R*        CTRL-R          redo one undone change

 vim:tw=78:ts=8:ft=help:norl:
";

fn bindings(text: &str) -> EntrySet {
	parse_doc(text, &HintMap::bindings(), RecordKind::Bindings)
}

#[test]
fn parse_is_idempotent() {
	assert_eq!(bindings(DOC), bindings(DOC));
}

#[test]
fn pattern_free_input_yields_all_empty_categories() {
	let set = bindings("just prose\n\nand a header line\n");
	assert_eq!(set.categories().count(), BindingMode::ALL.len());
	assert!(set.is_empty());
}

#[test]
fn empty_input_yields_all_empty_categories() {
	let set = bindings("");
	assert_eq!(set.categories().count(), BindingMode::ALL.len());
	assert!(set.is_empty());
}

#[test]
fn tokens_are_normalized_to_canonical_notation() {
	let set = bindings(DOC);
	let insert = set.entries(Category::Binding(BindingMode::Insert));
	assert_eq!(insert.len(), 1);
	assert_eq!(insert[0].token, "<C-W>");

	let normal = set.entries(Category::Binding(BindingMode::Normal));
	assert!(normal.iter().any(|e| e.token == "<C-R>"));
}

#[test]
fn carriage_return_and_escape_aliases() {
	let doc = "*i_CTRL-M*  CTRL-M  begin a new line\n*i_CTRL-[*  CTRL-[  leave insert mode\n";
	let set = bindings(doc);
	let insert = set.entries(Category::Binding(BindingMode::Insert));
	let tokens: Vec<_> = insert.iter().map(|e| e.token.as_str()).collect();
	assert_eq!(tokens, ["<CR>", "<Esc>"]);
}

#[test]
fn mode_prefix_places_entry_regardless_of_file_position() {
	// The insert-mode record sits in the middle of prose-tagged lines; the
	// prefix alone decides the category.
	let set = bindings(DOC);
	let insert = set.entries(Category::Binding(BindingMode::Insert));
	assert_eq!(insert[0].description, "delete word before the cursor");

	let visual = set.entries(Category::Binding(BindingMode::Visual));
	assert_eq!(visual.len(), 1);
	assert_eq!(visual[0].token, "d");
}

#[test]
fn unprefixed_tag_falls_back_to_normal_mode() {
	let set = bindings(DOC);
	let normal = set.entries(Category::Binding(BindingMode::Normal));
	assert_eq!(normal[0].token, "dd");
	assert_eq!(normal[0].description, "delete line");
	assert_eq!(normal[0].provenance, Provenance::StaticDoc);
}

#[test]
fn command_records_are_excluded_from_the_binding_scan() {
	let set = bindings(DOC);
	for (_, entries) in set.iter() {
		assert!(entries.iter().all(|e| !e.token.starts_with(':')));
	}
}

#[test]
fn command_scan_takes_only_command_records() {
	let set = parse_doc(DOC, &HintMap::commands(), RecordKind::Commands);
	let builtin = set.entries(Category::Command(CommandScope::Builtin));
	assert_eq!(builtin.len(), 1);
	assert_eq!(builtin[0].token, ":write");
	assert_eq!(builtin[0].description, "write the whole buffer to the current file");
	assert!(set.entries(Category::Command(CommandScope::Global)).is_empty());
	assert!(set.entries(Category::Command(CommandScope::Local)).is_empty());
}

#[test]
fn record_without_description_is_kept() {
	let set = bindings("*gg*  gg\n");
	let normal = set.entries(Category::Binding(BindingMode::Normal));
	assert_eq!(normal.len(), 1);
	assert_eq!(normal[0].token, "gg");
	assert_eq!(normal[0].description, "");
}

#[test]
fn file_order_is_preserved_within_a_category() {
	let doc = "*zz*  zz  first\n*aa*  aa  second\n*mm*  mm  third\n";
	let set = bindings(doc);
	let tokens: Vec<_> = set
		.entries(Category::Binding(BindingMode::Normal))
		.iter()
		.map(|e| e.token.as_str())
		.collect();
	assert_eq!(tokens, ["zz", "aa", "mm"]);
}
