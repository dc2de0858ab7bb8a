use super::*;

// ============================================================================
// Compilation units
// ============================================================================

ast_node!(
    /// Root of an implementation file (`.ml`).
    Implementation,
    IMPLEMENTATION,
    visit_implementation
);

impl Implementation {
    children_method!(items, Item);
}

ast_node!(
    /// Root of an interface file (`.mli`).
    UnitInterface,
    UNIT_INTERFACE,
    visit_unit_interface
);

impl UnitInterface {
    children_method!(specifications, Specification);
}

// ============================================================================
// Items (structure members)
// ============================================================================

ast_enum!(
    /// A member of a structure or implementation file.
    Item,
    "item",
    {
        Let(LetItem),
        Expr(ExprItem),
        External(ExternalItem),
        Type(TypeItem),
        Exception(ExceptionItem),
        Module(ModuleItem),
        ModuleType(ModuleTypeItem),
        Open(OpenItem),
        Include(IncludeItem),
        Class(ClassItem),
        ClassType(ClassTypeItem),
    }
);

ast_node!(
    /// `let [rec] b1 and b2`
    LetItem,
    LET_ITEM,
    visit_let_item
);

impl LetItem {
    has_token_method!(is_rec, REC_KW);
    children_method!(let_bindings, LetBinding);
}

ast_node!(
    /// A toplevel expression (`;; expr`).
    ExprItem,
    EXPR_ITEM,
    visit_expr_item
);

impl ExprItem {
    required_child_method!(expr, Expr);
}

ast_node!(ExternalItem, EXTERNAL_ITEM, visit_external_item);

impl ExternalItem {
    required_child_method!(value_name, ValueName);
    required_child_method!(type_expr, TypeExpr);

    /// The primitive names after `=`, quotes stripped.
    pub fn primitives(&self) -> Vec<String> {
        external_primitives(&self.0)
    }
}

ast_node!(TypeItem, TYPE_ITEM, visit_type_item);

impl TypeItem {
    has_token_method!(is_nonrec, NONREC_KW);
    children_method!(typedefs, Typedef);
}

ast_node!(ExceptionItem, EXCEPTION_ITEM, visit_exception_item);

impl ExceptionItem {
    required_child_method!(constr_decl, ConstrDecl);
}

ast_node!(
    /// `module M [: S] = module_expr`
    ModuleItem,
    MODULE_ITEM,
    visit_module_item
);

impl ModuleItem {
    has_token_method!(is_rec, REC_KW);
    required_child_method!(module_name, ModuleName);
    first_child_method!(module_type, ModuleType);
    required_child_method!(module_expr, ModuleExpr);
}

ast_node!(ModuleTypeItem, MODULE_TYPE_ITEM, visit_module_type_item);

impl ModuleTypeItem {
    required_child_method!(modtype_name, ModtypeName);
    first_child_method!(module_type, ModuleType);
}

ast_node!(OpenItem, OPEN_ITEM, visit_open_item);

impl OpenItem {
    required_child_method!(module_path, ModulePath);
}

ast_node!(IncludeItem, INCLUDE_ITEM, visit_include_item);

impl IncludeItem {
    required_child_method!(module_expr, ModuleExpr);
}

ast_node!(ClassItem, CLASS_ITEM, visit_class_item);

impl ClassItem {
    children_method!(class_bindings, ClassBinding);
}

ast_node!(ClassTypeItem, CLASS_TYPE_ITEM, visit_class_type_item);

impl ClassTypeItem {
    children_method!(class_type_defs, ClassTypeDef);
}

// ============================================================================
// Specifications (signature members)
// ============================================================================

ast_enum!(
    /// A member of a signature or interface file.
    Specification,
    "specification",
    {
        Value(ValueSpec),
        External(ExternalSpec),
        Type(TypeSpec),
        Exception(ExceptionSpec),
        Module(ModuleSpec),
        ModuleType(ModuleTypeSpec),
        Open(OpenSpec),
        Include(IncludeSpec),
        Class(ClassSpec),
        ClassType(ClassTypeSpec),
    }
);

ast_node!(
    /// `val x : typexpr`
    ValueSpec,
    VALUE_SPEC,
    visit_value_spec
);

impl ValueSpec {
    required_child_method!(value_name, ValueName);
    required_child_method!(type_expr, TypeExpr);
}

ast_node!(ExternalSpec, EXTERNAL_SPEC, visit_external_spec);

impl ExternalSpec {
    required_child_method!(value_name, ValueName);
    required_child_method!(type_expr, TypeExpr);

    /// The primitive names after `=`, quotes stripped.
    pub fn primitives(&self) -> Vec<String> {
        external_primitives(&self.0)
    }
}

ast_node!(TypeSpec, TYPE_SPEC, visit_type_spec);

impl TypeSpec {
    children_method!(typedefs, Typedef);
}

ast_node!(ExceptionSpec, EXCEPTION_SPEC, visit_exception_spec);

impl ExceptionSpec {
    required_child_method!(constr_decl, ConstrDecl);
}

ast_node!(ModuleSpec, MODULE_SPEC, visit_module_spec);

impl ModuleSpec {
    required_child_method!(module_name, ModuleName);
    required_child_method!(module_type, ModuleType);
}

ast_node!(ModuleTypeSpec, MODULE_TYPE_SPEC, visit_module_type_spec);

impl ModuleTypeSpec {
    required_child_method!(modtype_name, ModtypeName);
    first_child_method!(module_type, ModuleType);
}

ast_node!(OpenSpec, OPEN_SPEC, visit_open_spec);

impl OpenSpec {
    required_child_method!(module_path, ModulePath);
}

ast_node!(IncludeSpec, INCLUDE_SPEC, visit_include_spec);

impl IncludeSpec {
    required_child_method!(module_type, ModuleType);
}

ast_node!(ClassSpec, CLASS_SPEC, visit_class_spec);

impl ClassSpec {
    children_method!(class_spec_bindings, ClassSpecBinding);
}

ast_node!(ClassTypeSpec, CLASS_TYPE_SPEC, visit_class_type_spec);

impl ClassTypeSpec {
    children_method!(class_type_defs, ClassTypeDef);
}

fn external_primitives(node: &SyntaxNode) -> Vec<String> {
    node.significant_tokens()
        .into_iter()
        .filter(|t| t.kind() == SyntaxKind::STRING)
        .map(|t| t.text().trim_matches('"').to_string())
        .collect()
}

// ============================================================================
// Bindings
// ============================================================================

ast_node!(
    /// One binding of a `let`: `f x y = e`, `(a, b) = e`, `x : t = e`.
    ///
    /// A binding names either a single value (`value_name`) or destructures
    /// a pattern (`pattern`), never both.
    LetBinding,
    LET_BINDING,
    visit_let_binding
);

impl LetBinding {
    first_child_method!(value_name, ValueName);
    first_child_method!(pattern, Pattern);
    children_method!(parameters, Parameter);
    first_child_method!(type_expr, TypeExpr);
    required_child_method!(expr, Expr);
}

ast_node!(
    /// A function parameter: `x`, `(x : t)`, `~l`, `~l:p`, `?(l = e)`.
    Parameter,
    PARAMETER,
    visit_parameter
);

impl Parameter {
    first_child_method!(label_name, LabelName);
    first_child_method!(pattern, Pattern);
    first_child_method!(type_expr, TypeExpr);
    first_child_method!(default, Expr);
}

ast_node!(
    /// A labelled argument: `~l`, `~l:e`, `?l:e`.
    Argument,
    ARGUMENT,
    visit_argument
);

impl Argument {
    required_child_method!(label_name, LabelName);
    first_child_method!(expr, Expr);
}

ast_node!(
    /// `| p1 -> e1 | p2 when g -> e2`
    PatternMatching,
    PATTERN_MATCHING,
    visit_pattern_matching
);

impl PatternMatching {
    children_method!(match_cases, MatchCase);
}

ast_node!(MatchCase, MATCH_CASE, visit_match_case);

impl MatchCase {
    required_child_method!(pattern, Pattern);
    first_child_method!(guard, Guard);
    required_child_method!(expr, Expr);
}

ast_node!(
    /// `when expr`
    Guard,
    GUARD,
    visit_guard
);

impl Guard {
    required_child_method!(expr, Expr);
}

ast_node!(
    /// `field [: t] [= expr]` inside a record expression.
    FieldExpr,
    FIELD_EXPR,
    visit_field_expr
);

impl FieldExpr {
    required_child_method!(field, Field);
    first_child_method!(type_expr, TypeExpr);
    first_child_method!(expr, Expr);
}

// ============================================================================
// Type definitions
// ============================================================================

ast_node!(
    /// One `['a] t = ...` of a type definition.
    Typedef,
    TYPEDEF,
    visit_typedef
);

impl Typedef {
    first_child_method!(type_parameters, TypeParameters);
    required_child_method!(typeconstr_name, TypeconstrName);
    has_token_method!(is_private, PRIVATE_KW);
    // manifest: `t = int` or `t = M.t = A | B`
    first_child_method!(type_expr, TypeExpr);
    children_method!(constr_decls, ConstrDecl);
    children_method!(field_decls, FieldDecl);
}

ast_node!(TypeParameters, TYPE_PARAMETERS, visit_type_parameters);

impl TypeParameters {
    children_method!(type_exprs, TypeExpr);
}

ast_node!(
    /// `C`, `C of t1 * t2`, or an exception declaration.
    ConstrDecl,
    CONSTR_DECL,
    visit_constr_decl
);

impl ConstrDecl {
    required_child_method!(constr_name, ConstrName);
    children_method!(type_exprs, TypeExpr);
}

ast_node!(
    /// `[mutable] f : typexpr` inside a record type.
    FieldDecl,
    FIELD_DECL,
    visit_field_decl
);

impl FieldDecl {
    has_token_method!(is_mutable, MUTABLE_KW);
    required_child_method!(field, Field);
    required_child_method!(type_expr, TypeExpr);
}
