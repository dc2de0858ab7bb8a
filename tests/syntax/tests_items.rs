//! Accessors of items and specifications over whole files.

use rstest::rstest;

use crate::helpers::tree_fixtures::*;
use ocaml_syntax::syntax::ast::*;
use ocaml_syntax::{Family, Node, SyntaxKind};

fn items_of(tree: &ocaml_syntax::RawTree) -> Vec<Item> {
    Implementation::cast(tree.syntax()).unwrap().items().collect()
}

// =============================================================================
// IMPLEMENTATION ITEMS
// =============================================================================

#[test]
fn test_implementation_items_in_source_order() {
    let tree = outline_source();
    let kinds: Vec<SyntaxKind> = items_of(&tree).iter().map(|item| item.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::TYPE_ITEM,
            SyntaxKind::LET_ITEM,
            SyntaxKind::MODULE_ITEM,
            SyntaxKind::EXCEPTION_ITEM,
            SyntaxKind::MODULE_TYPE_ITEM,
        ]
    );
}

#[test]
fn test_type_item_typedefs() {
    let tree = outline_source();
    let Item::Type(type_item) = &items_of(&tree)[0] else {
        panic!("expected a type item");
    };
    assert!(!type_item.is_nonrec());

    let typedefs: Vec<Typedef> = type_item.typedefs().collect();
    let names: Vec<String> = typedefs
        .iter()
        .map(|def| def.typeconstr_name().unwrap().name())
        .collect();
    assert_eq!(names, vec!["t", "u"]);

    let Some(TypeExpr::Constr(manifest)) = typedefs[1].type_expr() else {
        panic!("expected a constructor type");
    };
    assert_eq!(manifest.typeconstr_path().unwrap().path(), "string");
    assert!(typedefs[1].type_parameters().is_none());
    assert_eq!(typedefs[1].constr_decls().count(), 0);
}

#[test]
fn test_let_item_bindings() {
    let tree = outline_source();
    let Item::Let(let_item) = &items_of(&tree)[1] else {
        panic!("expected a let item");
    };
    assert!(!let_item.is_rec());

    let bindings: Vec<LetBinding> = let_item.let_bindings().collect();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].value_name().unwrap().name(), "x");
    assert_eq!(bindings[0].parameters().count(), 0);
    assert_eq!(bindings[1].value_name().unwrap().name(), "f");

    let params: Vec<Parameter> = bindings[1].parameters().collect();
    assert_eq!(params.len(), 1);
    assert!(params[0].label_name().is_none());
    assert_eq!(params[0].pattern().unwrap().text(), "y");
    assert!(matches!(bindings[1].expr(), Ok(Expr::ValuePath(_))));
}

#[test]
fn test_module_item_struct_body() {
    let tree = outline_source();
    let Item::Module(module) = &items_of(&tree)[2] else {
        panic!("expected a module item");
    };
    assert_eq!(module.module_name().unwrap().name(), "M");
    assert!(module.module_type().is_none());

    let Ok(ModuleExpr::Struct(body)) = module.module_expr() else {
        panic!("expected a struct body");
    };
    let inner: Vec<Item> = body.items().collect();
    assert_eq!(inner.len(), 1);
    let Item::Let(inner_let) = &inner[0] else {
        panic!("expected a let item inside the struct");
    };
    let binding = inner_let.let_bindings().next().unwrap();
    assert!(matches!(binding.expr(), Ok(Expr::Fun(_))));
}

#[test]
fn test_exception_and_module_type_items() {
    let tree = outline_source();
    let items = items_of(&tree);

    let Item::Exception(exception) = &items[3] else {
        panic!("expected an exception item");
    };
    let decl = exception.constr_decl().unwrap();
    assert_eq!(decl.constr_name().unwrap().name(), "E");
    assert_eq!(decl.type_exprs().count(), 0);

    let Item::ModuleType(module_type) = &items[4] else {
        panic!("expected a module type item");
    };
    assert_eq!(module_type.modtype_name().unwrap().name(), "S");
    let Some(ModuleType::Sig(sig)) = module_type.module_type() else {
        panic!("expected a signature");
    };
    let specs: Vec<Specification> = sig.specifications().collect();
    assert_eq!(specs.len(), 1);
    let Specification::Value(value) = &specs[0] else {
        panic!("expected a value spec");
    };
    assert_eq!(value.value_name().unwrap().name(), "v");
}

// =============================================================================
// INTERFACE SPECIFICATIONS
// =============================================================================

#[test]
fn test_interface_specifications() {
    let tree = interface_source();
    let root = UnitInterface::cast(tree.syntax()).unwrap();
    let specs: Vec<Specification> = root.specifications().collect();
    assert_eq!(specs.len(), 2);

    let Specification::Value(value) = &specs[0] else {
        panic!("expected a value spec");
    };
    let Ok(TypeExpr::Constr(ty)) = value.type_expr() else {
        panic!("expected a constructor type");
    };
    assert_eq!(ty.typeconstr_path().unwrap().path(), "int");

    let Specification::Module(module) = &specs[1] else {
        panic!("expected a module spec");
    };
    assert_eq!(module.module_name().unwrap().name(), "N");
    assert!(matches!(module.module_type(), Ok(ModuleType::Sig(_))));
}

#[test]
fn test_implementation_does_not_cast_to_interface() {
    let tree = outline_source();
    assert!(UnitInterface::cast(tree.syntax()).is_none());
    assert!(Implementation::cast(tree.syntax()).is_some());
}

// =============================================================================
// FAMILIES
// =============================================================================

#[rstest]
#[case(SyntaxKind::TYPE_ITEM, Family::Item)]
#[case(SyntaxKind::VALUE_SPEC, Family::Specification)]
#[case(SyntaxKind::STRUCT_MODULE_EXPR, Family::ModuleExpression)]
#[case(SyntaxKind::SIG_MODULE_TYPE, Family::ModuleType)]
#[case(SyntaxKind::CONSTR_TYPE, Family::TypeExpression)]
#[case(SyntaxKind::FUN_EXPR, Family::Expression)]
#[case(SyntaxKind::VALUE_NAME_PATTERN, Family::Pattern)]
fn test_fixture_nodes_report_their_family(#[case] kind: SyntaxKind, #[case] family: Family) {
    let trees = [outline_source(), interface_source()];
    let node = trees
        .iter()
        .flat_map(|tree| tree.syntax().descendants())
        .find(|node| node.kind() == kind)
        .unwrap_or_else(|| panic!("no {kind:?} in fixtures"));

    let typed = Node::from_raw(node).unwrap();
    assert_eq!(typed.family(), Some(family));
    assert_eq!(typed.kind(), kind);
}

#[rstest]
#[case(SyntaxKind::LET_BINDING)]
#[case(SyntaxKind::TYPEDEF)]
#[case(SyntaxKind::PARAMETER)]
#[case(SyntaxKind::MODULE_NAME)]
#[case(SyntaxKind::VALUE_NAME)]
fn test_standalone_nodes_have_no_family(#[case] kind: SyntaxKind) {
    let tree = outline_source();
    let node = tree
        .syntax()
        .descendants()
        .find(|node| node.kind() == kind)
        .unwrap();
    assert_eq!(Node::from_raw(node).unwrap().family(), None);
}
