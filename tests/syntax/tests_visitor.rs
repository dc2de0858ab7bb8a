//! Visitor dispatch over whole files.

use rstest::rstest;

use crate::helpers::tree_fixtures::*;
use ocaml_syntax::syntax::ast::*;
use ocaml_syntax::syntax::walk;
use ocaml_syntax::{Family, RawTree, Visitor};

/// Counts family-level callbacks and keeps every let binding name.
#[derive(Default)]
struct Census {
    exprs: usize,
    patterns: usize,
    items: usize,
    others: usize,
    binding_names: Vec<Option<String>>,
}

impl Visitor for Census {
    fn visit_expr(&mut self, _node: &Expr) {
        self.exprs += 1;
    }

    fn visit_pattern(&mut self, _node: &Pattern) {
        self.patterns += 1;
    }

    fn visit_item(&mut self, _node: &Item) {
        self.items += 1;
    }

    fn visit_let_binding(&mut self, node: &LetBinding) {
        self.binding_names.push(node.name());
    }

    fn visit_any(&mut self, _node: &Node) {
        self.others += 1;
    }
}

fn census(tree: &RawTree) -> Census {
    let mut census = Census::default();
    walk(&tree.syntax(), &mut census).unwrap();
    census
}

fn count_family(tree: &RawTree, family: Family) -> usize {
    tree.syntax()
        .descendants()
        .filter(|node| node.kind().family() == Some(family))
        .count()
}

#[test]
fn test_two_lets_census() {
    // let x = 1 / let f y = y
    let census = census(&two_lets());
    assert_eq!(census.items, 2);
    assert_eq!(census.exprs, 2);
    assert_eq!(census.patterns, 1);
    assert_eq!(
        census.binding_names,
        vec![Some("x".to_string()), Some("f".to_string())]
    );
}

#[rstest]
#[case::outline(outline_source())]
#[case::interface(interface_source())]
#[case::let_names(let_binding_names())]
#[case::records(record_bindings())]
fn test_family_callbacks_match_family_tags(#[case] tree: RawTree) {
    let census = census(&tree);
    assert_eq!(census.exprs, count_family(&tree, Family::Expression));
    assert_eq!(census.patterns, count_family(&tree, Family::Pattern));
    assert_eq!(census.items, count_family(&tree, Family::Item));

    // every wrapped node lands in exactly one callback
    let total = census.exprs
        + census.patterns
        + census.items
        + census.others
        + census.binding_names.len();
    assert_eq!(total, tree.syntax().descendants().count());
}

#[test]
fn test_let_bindings_visited_in_preorder() {
    let census = census(&let_binding_names());
    let names: Vec<Option<&str>> = census.binding_names.iter().map(|n| n.as_deref()).collect();
    assert_eq!(
        names,
        vec![
            Some("a"),
            Some("b,c"),
            Some("d,e,f"),
            Some("g,h"),
            Some("( + )"),
            Some("( + )"),
            Some("a,( + )"),
            None,
            Some("a"),
            Some("a"),
            Some("b"),
            Some("c"),
        ]
    );
}

/// Records only module-level structure.
#[derive(Default)]
struct ModuleNames(Vec<String>);

impl Visitor for ModuleNames {
    fn visit_module_item(&mut self, node: &ModuleItem) {
        self.0.push(node.module_name().unwrap().name());
    }

    fn visit_module_type_item(&mut self, node: &ModuleTypeItem) {
        self.0.push(node.modtype_name().unwrap().name());
    }

    fn visit_module_spec(&mut self, node: &ModuleSpec) {
        self.0.push(node.module_name().unwrap().name());
    }
}

#[test]
fn test_kind_methods_override_family_defaults() {
    let mut names = ModuleNames::default();
    walk(&outline_source().syntax(), &mut names).unwrap();
    walk(&interface_source().syntax(), &mut names).unwrap();
    assert_eq!(names.0, vec!["M", "S", "N"]);
}

#[test]
fn test_walk_from_typed_node_covers_only_its_subtree() {
    let tree = outline_source();
    let module = tree
        .syntax()
        .descendants()
        .find_map(ModuleItem::cast)
        .unwrap();

    let mut census = Census::default();
    Node::from(module).walk(&mut census).unwrap();
    assert_eq!(census.items, 2); // the module item and its inner let
    assert_eq!(census.binding_names, vec![Some("g".to_string())]);
}
