//! Naming of let bindings over a file with every binding shape.

use rstest::rstest;

use crate::helpers::tree_fixtures::*;
use ocaml_syntax::ide::expand_structured_name;
use ocaml_syntax::SyntaxKind::{self, *};
use ocaml_syntax::syntax::ast::{BoundName, LetBinding};

fn binding(index: usize) -> LetBinding {
    top_level_bindings(&let_binding_names())
        .into_iter()
        .nth(index)
        .unwrap_or_else(|| panic!("no binding {index}"))
}

// =============================================================================
// NAMES
// =============================================================================

#[rstest]
#[case::simple(0, Some("a"))]
#[case::tuple(1, Some("b,c"))]
#[case::nested_tuple(2, Some("d,e,f"))]
#[case::or_pattern(3, Some("g,h"))]
#[case::spaced_operator(4, Some("( + )"))]
#[case::tight_operator(5, Some("( + )"))]
#[case::parenthesised_mix(6, Some("a,( + )"))]
#[case::wildcard(7, None)]
#[case::tuple_with_wildcard(8, Some("a"))]
#[case::nested_lets(9, Some("a"))]
fn test_binding_name(#[case] index: usize, #[case] expected: Option<&str>) {
    assert_eq!(binding(index).name().as_deref(), expected);
}

#[rstest]
#[case(0, 1)]
#[case(1, 2)]
#[case(2, 3)]
#[case(3, 2)]
#[case(6, 2)]
#[case(7, 0)]
#[case(8, 1)]
fn test_bound_name_count(#[case] index: usize, #[case] count: usize) {
    assert_eq!(binding(index).bound_names().len(), count);
}

#[test]
fn test_qualified_names() {
    assert_eq!(binding(0).qualified_name("Dummy").as_deref(), Some("Dummy.a"));
    assert_eq!(binding(2).qualified_name("Dummy").as_deref(), Some("Dummy.d,e,f"));
    assert_eq!(binding(4).qualified_name("Dummy").as_deref(), Some("Dummy.( + )"));
    assert_eq!(binding(7).qualified_name("Dummy"), None);
}

#[test]
fn test_qualified_name_expands_back_to_parts() {
    let qualified = binding(6).qualified_name("Dummy").unwrap();
    assert_eq!(
        expand_structured_name(&qualified, true),
        vec!["Dummy.a", "Dummy.( + )"]
    );
}

#[test]
fn test_name_identifier_only_for_single_names() {
    assert_eq!(binding(0).name_identifier().unwrap().name(), "a");
    assert_eq!(binding(4).name_identifier().unwrap().name(), "( + )");
    assert!(binding(1).name_identifier().is_none());
    assert!(binding(7).name_identifier().is_none());
}

#[test]
fn test_anonymous_binding() {
    assert!(binding(7).is_anonymous());
    assert!(!binding(8).is_anonymous());
}

// =============================================================================
// SCOPE AND SHAPE
// =============================================================================

#[test]
fn test_nested_let_bindings() {
    let nested = binding(9).nested_let_bindings();
    let names: Vec<String> = nested.iter().filter_map(|b| b.name()).collect();
    assert_eq!(names, vec!["b", "c"]);
    assert!(nested.iter().all(|b| !b.is_global()));
    assert!(binding(0).nested_let_bindings().is_empty());
}

#[test]
fn test_top_level_bindings_are_global() {
    assert!(top_level_bindings(&let_binding_names())
        .iter()
        .all(LetBinding::is_global));
}

#[test]
fn test_bindings_inside_modules_are_not_global() {
    let tree = outline_source();
    let inner = tree
        .syntax()
        .descendants()
        .filter_map(<LetBinding as ocaml_syntax::AstNode>::cast)
        .find(|b| b.name().as_deref() == Some("g"))
        .unwrap();
    assert!(!inner.is_global());
}

#[rstest]
#[case("x", false)]
#[case("f", true)]
#[case("g", true)]
fn test_function_or_variable(#[case] name: &str, #[case] is_function: bool) {
    let tree = outline_source();
    let found = tree
        .syntax()
        .descendants()
        .filter_map(<LetBinding as ocaml_syntax::AstNode>::cast)
        .find(|b| b.name().as_deref() == Some(name))
        .unwrap();
    assert_eq!(found.is_function(), is_function);
    assert_eq!(found.is_variable(), !is_function);
}

// =============================================================================
// RECORD PATTERNS
// =============================================================================

fn record_binding(index: usize) -> LetBinding {
    top_level_bindings(&record_bindings())
        .into_iter()
        .nth(index)
        .unwrap_or_else(|| panic!("no record binding {index}"))
}

#[rstest]
#[case::punned_fields(0, Some("x,y"))]
#[case::renamed_then_punned(1, Some("a,y"))]
#[case::nothing_bound(2, None)]
#[case::qualified_pun(3, Some("x"))]
fn test_record_binding_name(#[case] index: usize, #[case] expected: Option<&str>) {
    assert_eq!(record_binding(index).name().as_deref(), expected);
}

#[test]
fn test_punned_fields_are_not_anonymous() {
    assert!(!record_binding(0).is_anonymous());
    assert!(record_binding(2).is_anonymous());
}

#[test]
fn test_punned_names_point_at_their_fields() {
    let tree = record_bindings();
    let names = record_binding(0).bound_names();
    assert!(matches!(names[0], BoundName::Punned(_)));
    assert_eq!(names[1].range().start(), offset_of(&tree, "y }", 0));

    let renamed = record_binding(1).bound_names();
    assert!(matches!(renamed[0], BoundName::Value(_)));
    assert_eq!(renamed[0].range().start(), offset_of(&tree, "a;", 0));
}

// =============================================================================
// OPERATOR NAMES
// =============================================================================

#[rstest]
#[case::less_than(LT, "<", false, "( < )")]
#[case::spaced_equals(EQ, "=", true, "( = )")]
#[case::cons(COLON_COLON, "::", false, "( :: )")]
#[case::star(STAR, "*", true, "( * )")]
fn test_punctuation_operator_binding(
    #[case] kind: SyntaxKind,
    #[case] op: &str,
    #[case] spaced: bool,
    #[case] expected: &str,
) {
    let tree = implementation(|b| {
        let_item(b, |b| {
            let_binding(b, |b| operator_token_name(b, kind, op, spaced), unit_expr)
        })
    });
    let binding = top_level_bindings(&tree).remove(0);
    assert_eq!(binding.name().as_deref(), Some(expected));
    let name = binding.name_identifier().unwrap();
    assert!(name.is_operator());
    assert_eq!(name.operator().unwrap().text(), op);
}
