//! Type hint lookup against an external store.

use std::thread;

use crate::helpers::tree_fixtures::*;
use ocaml_syntax::ide::{TypeHintStore, UNKNOWN_TYPE, type_hint_at, type_hints_at};
use ocaml_syntax::{NodeKey, RawTree, SyntaxKind, TextSize};

/// Key of the `nth` node of `kind` in preorder.
fn key_of(tree: &RawTree, kind: SyntaxKind, nth: usize) -> NodeKey {
    let node = tree
        .syntax()
        .descendants()
        .filter(|node| node.kind() == kind)
        .nth(nth)
        .unwrap();
    NodeKey::of(&node)
}

/// `let x = 1 / let f y = y` with `x : int` and `f : int -> int`.
fn annotated() -> (RawTree, TypeHintStore) {
    let tree = two_lets();
    let store = TypeHintStore::new();
    store.insert(key_of(&tree, SyntaxKind::VALUE_NAME, 0), "int");
    store.insert(key_of(&tree, SyntaxKind::VALUE_NAME, 1), "int -> int");
    (tree, store)
}

#[test]
fn test_hint_on_a_name() {
    let (tree, store) = annotated();
    let hint = type_hint_at(&tree.syntax(), offset_of(&tree, "x", 0), &store).unwrap();
    assert_eq!(hint.ty, "int");
    assert_eq!(hint.key.kind(), Some(SyntaxKind::VALUE_NAME));
    assert_eq!(hint.range.start(), offset_of(&tree, "x", 0));
}

#[test]
fn test_binding_and_its_name_share_one_hint() {
    let (tree, store) = annotated();
    let hints = type_hints_at(&tree.syntax(), offset_of(&tree, "x", 0), &store);
    assert_eq!(hints.len(), 1);
}

#[test]
fn test_body_falls_back_to_the_enclosing_binding() {
    let (tree, store) = annotated();
    // `1` itself has no annotation, the binding of `x` does
    let hint = type_hint_at(&tree.syntax(), offset_of(&tree, "1", 0), &store).unwrap();
    assert_eq!(hint.ty, "int");

    // the parameter `y` sits inside the binding of `f`
    let hint = type_hint_at(&tree.syntax(), offset_of(&tree, "y", 0), &store).unwrap();
    assert_eq!(hint.ty, "int -> int");
}

#[test]
fn test_innermost_annotation_comes_first() {
    let (tree, store) = annotated();
    store.insert(key_of(&tree, SyntaxKind::CONSTANT_EXPR, 0), "");

    let hints = type_hints_at(&tree.syntax(), offset_of(&tree, "1", 0), &store);
    let types: Vec<&str> = hints.iter().map(|h| h.ty.as_str()).collect();
    assert_eq!(types, vec![UNKNOWN_TYPE, "int"]);
}

#[test]
fn test_no_hint_in_whitespace() {
    let (tree, store) = annotated();
    // between `let` and `x`
    let offset = TextSize::from(3);
    assert!(type_hint_at(&tree.syntax(), offset, &store).is_none());
}

#[test]
fn test_no_hint_without_annotations() {
    let tree = two_lets();
    let store = TypeHintStore::new();
    assert!(type_hint_at(&tree.syntax(), offset_of(&tree, "x", 0), &store).is_none());
}

#[test]
fn test_store_operations() {
    let (tree, store) = annotated();
    let x = key_of(&tree, SyntaxKind::VALUE_NAME, 0);
    assert_eq!(store.len(), 2);
    assert!(store.contains(&x));

    store.insert(x, "float");
    assert_eq!(store.get(&x).as_deref(), Some("float"));
    assert_eq!(store.len(), 2);

    assert_eq!(store.remove(&x).as_deref(), Some("float"));
    assert!(!store.contains(&x));

    store.clear();
    assert!(store.is_empty());
}

#[test]
fn test_store_is_filled_from_many_threads() {
    let tree = let_binding_names();
    let keys: Vec<NodeKey> = tree.syntax().descendants().map(|n| NodeKey::of(&n)).collect();
    let store = TypeHintStore::new();

    thread::scope(|scope| {
        for chunk in keys.chunks(8) {
            let store = &store;
            scope.spawn(move || {
                for key in chunk {
                    store.insert(*key, "unit");
                }
            });
        }
    });

    let distinct: std::collections::HashSet<NodeKey> = keys.iter().copied().collect();
    assert_eq!(store.len(), distinct.len());
}
