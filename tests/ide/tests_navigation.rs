//! Offset lookup tests.

use crate::helpers::tree_fixtures::*;
use ocaml_syntax::SyntaxKind::{self, *};
use ocaml_syntax::ide::{ancestors, find_node_at_offset, node_path_at_offset};
use ocaml_syntax::{AstNode, TextSize};

#[test]
fn test_node_at_a_name() {
    let tree = two_lets();
    let node = find_node_at_offset(&tree.syntax(), offset_of(&tree, "x", 0)).unwrap();
    assert_eq!(node.kind(), VALUE_NAME);
    assert_eq!(node.text(), "x");
}

#[test]
fn test_path_is_innermost_first() {
    let tree = two_lets();
    let path = node_path_at_offset(&tree.syntax(), offset_of(&tree, "x", 0));
    let kinds: Vec<SyntaxKind> = path.iter().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![VALUE_NAME, LET_BINDING, LET_ITEM, IMPLEMENTATION]);
}

#[test]
fn test_boundary_prefers_significant_token() {
    let tree = two_lets();
    // end of `let`, start of the following space
    let node = find_node_at_offset(&tree.syntax(), TextSize::from(3)).unwrap();
    assert_eq!(node.kind(), LET_ITEM);
}

#[test]
fn test_end_of_file_reaches_last_token() {
    let tree = two_lets();
    let end = TextSize::of(tree.text().as_str());
    let path = node_path_at_offset(&tree.syntax(), end);
    let kinds: Vec<SyntaxKind> = path.iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            VALUE_NAME,
            VALUE_PATH,
            VALUE_PATH_EXPR,
            LET_BINDING,
            LET_ITEM,
            IMPLEMENTATION
        ]
    );
}

#[test]
fn test_offset_past_the_end() {
    let tree = two_lets();
    let past = TextSize::of(tree.text().as_str()) + TextSize::from(1);
    assert!(node_path_at_offset(&tree.syntax(), past).is_empty());
    assert!(find_node_at_offset(&tree.syntax(), past).is_none());
}

#[test]
fn test_typed_ancestors() {
    let tree = outline_source();
    let node = find_node_at_offset(&tree.syntax(), offset_of(&tree, "g =", 0)).unwrap();
    let kinds: Vec<SyntaxKind> = ancestors(&node).iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            LET_BINDING,
            LET_ITEM,
            STRUCT_MODULE_EXPR,
            MODULE_ITEM,
            IMPLEMENTATION
        ]
    );
}
