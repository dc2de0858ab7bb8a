//! Structure view tests.

use rstest::rstest;

use crate::helpers::tree_fixtures::*;
use ocaml_syntax::Position;
use ocaml_syntax::ide::{StructureEntry, StructureFilter, StructureKind, structure};

fn names(entries: &[StructureEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

fn kinds(entries: &[StructureEntry]) -> Vec<StructureKind> {
    entries.iter().map(|e| e.kind).collect()
}

#[test]
fn test_implementation_outline() {
    let outline = structure(&outline_source(), StructureFilter::default());
    assert_eq!(names(&outline), vec!["type t, u", "let x, f", "M", "E", "S"]);
    assert_eq!(
        kinds(&outline),
        vec![
            StructureKind::Types,
            StructureKind::Let,
            StructureKind::Module,
            StructureKind::Exception,
            StructureKind::ModuleType,
        ]
    );
}

#[test]
fn test_grouped_children() {
    let outline = structure(&outline_source(), StructureFilter::default());

    assert_eq!(names(&outline[0].children), vec!["t", "u"]);
    assert!(outline[0].children.iter().all(|c| c.kind == StructureKind::Type));

    assert_eq!(names(&outline[1].children), vec!["x", "f"]);
    assert_eq!(
        kinds(&outline[1].children),
        vec![StructureKind::Variable, StructureKind::Function]
    );
}

#[test]
fn test_nested_structures() {
    let outline = structure(&outline_source(), StructureFilter::default());

    let module = &outline[2];
    assert_eq!(names(&module.children), vec!["let g"]);
    assert_eq!(names(&module.children[0].children), vec!["g"]);
    assert_eq!(module.children[0].children[0].kind, StructureKind::Function);

    let module_type = &outline[4];
    assert_eq!(names(&module_type.children), vec!["val v"]);
    assert_eq!(module_type.children[0].kind, StructureKind::Value);
}

#[test]
fn test_hide_variables_drops_non_functions() {
    let filter = StructureFilter {
        hide_variables: true,
    };
    let outline = structure(&outline_source(), filter);
    assert_eq!(names(&outline[1].children), vec!["f"]);
    // the group keeps its full title
    assert_eq!(outline[1].name, "let x, f");
}

#[test]
fn test_interface_outline() {
    let outline = structure(&interface_source(), StructureFilter::default());
    assert_eq!(names(&outline), vec!["val x", "N"]);
    assert_eq!(names(&outline[1].children), vec!["val y"]);
}

#[test]
fn test_let_binding_names_outline() {
    let outline = structure(&let_binding_names(), StructureFilter::default());
    assert_eq!(
        names(&outline),
        vec![
            "let a",
            "let b,c",
            "let d,e,f",
            "let g,h",
            "let ( + )",
            "let ( + )",
            "let a,( + )",
            "let _",
            "let a",
            "let a",
        ]
    );
    assert!(outline[7].children.is_empty());
    assert_eq!(names(&outline[2].children), vec!["d", "e", "f"]);
}

#[rstest]
#[case(0, Position::new(0, 0))]
#[case(1, Position::new(1, 0))]
#[case(2, Position::new(2, 0))]
#[case(4, Position::new(4, 0))]
fn test_entry_span_starts_at_item(#[case] index: usize, #[case] start: Position) {
    let outline = structure(&outline_source(), StructureFilter::default());
    assert_eq!(outline[index].span.start, start);
}

#[test]
fn test_binding_entries_point_at_their_names() {
    let tree = outline_source();
    let outline = structure(&tree, StructureFilter::default());
    let g = &outline[2].children[0].children[0];
    assert_eq!(g.span.start, Position::new(2, "module M = struct let ".len()));
    assert_eq!(g.range.start(), offset_of(&tree, "g =", 0));
}

#[test]
fn test_record_pattern_bindings_list_punned_fields() {
    let tree = record_bindings();
    let outline = structure(&tree, StructureFilter::default());
    assert_eq!(names(&outline), vec!["let x,y", "let a,y", "let _", "let x"]);
    assert_eq!(names(&outline[0].children), vec!["x", "y"]);
    assert_eq!(outline[0].children[1].range.start(), offset_of(&tree, "y }", 0));
    assert!(outline[2].children.is_empty());
}
