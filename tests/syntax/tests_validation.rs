//! Eager validation of fixture files.

use crate::helpers::tree_fixtures::*;
use ocaml_syntax::SyntaxKind::*;
use ocaml_syntax::syntax::{validate, validate_all};
use ocaml_syntax::{RawTree, SyntaxTreeError};

/// `let x =` with the body missing, then `module M = struct end` without
/// its name.
fn broken_source() -> RawTree {
    implementation(|b| {
        b.node(LET_ITEM, |b| {
            b.token(LET_KW, "let").whitespace(" ");
            b.node(LET_BINDING, |b| {
                value_name(b, "x");
                b.whitespace(" ").token(EQ, "=");
            });
        });
        newline(b);
        b.node(MODULE_ITEM, |b| {
            b.token(MODULE_KW, "module").whitespace(" ");
            b.token(EQ, "=").whitespace(" ");
            b.node(STRUCT_MODULE_EXPR, |b| {
                b.token(STRUCT_KW, "struct").whitespace(" ");
                b.token(END_KW, "end");
            });
        });
    })
}

#[test]
fn test_well_formed_fixtures_validate() {
    for tree in [outline_source(), interface_source(), let_binding_names(), two_lets()] {
        let report = validate(&tree.syntax());
        assert!(report.is_valid(), "unexpected defects: {:?}", report.errors);
        assert_eq!(report.nodes_checked, tree.syntax().descendants().count());
    }
}

#[test]
fn test_missing_children_are_all_reported() {
    let tree = broken_source();
    let report = validate(&tree.syntax());

    let missing: Vec<(ocaml_syntax::SyntaxKind, &str)> = report
        .errors
        .iter()
        .map(|err| match err {
            SyntaxTreeError::MissingRequiredChild {
                parent, expected, ..
            } => (*parent, *expected),
            other => panic!("unexpected defect {other:?}"),
        })
        .collect();
    assert_eq!(
        missing,
        vec![(LET_BINDING, "expression"), (MODULE_ITEM, "ModuleName")]
    );
}

#[test]
fn test_defect_range_points_at_the_incomplete_node() {
    let tree = broken_source();
    let report = validate(&tree.syntax());
    let binding = tree
        .syntax()
        .descendants()
        .find(|node| node.kind() == LET_BINDING)
        .unwrap();
    assert_eq!(report.errors[0].range(), binding.text_range());
}

#[test]
fn test_validate_all_reports_per_tree() {
    let trees = vec![two_lets(), broken_source(), outline_source()];
    let reports = validate_all(&trees);
    let valid: Vec<bool> = reports.iter().map(|r| r.is_valid()).collect();
    assert_eq!(valid, vec![true, false, true]);
    assert_eq!(reports[1].missing_children().count(), 2);
}
