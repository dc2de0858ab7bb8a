use super::*;

// ============================================================================
// Module expressions
// ============================================================================

ast_enum!(
    /// Any module expression.
    ModuleExpr,
    "module expression",
    {
        Path(PathModuleExpr),
        Struct(StructModuleExpr),
        Functor(FunctorModuleExpr),
        Apply(ApplyModuleExpr),
        Paren(ParenModuleExpr),
        Unpack(UnpackModuleExpr),
    }
);

ast_node!(PathModuleExpr, PATH_MODULE_EXPR, visit_path_module_expr);

impl PathModuleExpr {
    required_child_method!(module_path, ModulePath);
}

ast_node!(
    /// `struct ... end`
    StructModuleExpr,
    STRUCT_MODULE_EXPR,
    visit_struct_module_expr
);

impl StructModuleExpr {
    children_method!(items, Item);
}

ast_node!(
    /// `functor (X : S) -> module_expr`
    FunctorModuleExpr,
    FUNCTOR_MODULE_EXPR,
    visit_functor_module_expr
);

impl FunctorModuleExpr {
    required_child_method!(module_name, ModuleName);
    first_child_method!(module_type, ModuleType);
    required_child_method!(module_expr, ModuleExpr);
}

ast_node!(ApplyModuleExpr, APPLY_MODULE_EXPR, visit_apply_module_expr);

impl ApplyModuleExpr {
    children_method!(module_exprs, ModuleExpr);
}

ast_node!(ParenModuleExpr, PAREN_MODULE_EXPR, visit_paren_module_expr);

impl ParenModuleExpr {
    required_child_method!(module_expr, ModuleExpr);
    first_child_method!(module_type, ModuleType);
}

ast_node!(
    /// `(val expr : S)`
    UnpackModuleExpr,
    UNPACK_MODULE_EXPR,
    visit_unpack_module_expr
);

impl UnpackModuleExpr {
    required_child_method!(expr, Expr);
    first_child_method!(module_type, ModuleType);
}

// ============================================================================
// Module types
// ============================================================================

ast_enum!(
    /// Any module type.
    ModuleType,
    "module type",
    {
        Path(PathModuleType),
        Sig(SigModuleType),
        Functor(FunctorModuleType),
        With(WithModuleType),
        Paren(ParenModuleType),
        Typeof(TypeofModuleType),
    }
);

ast_node!(PathModuleType, PATH_MODULE_TYPE, visit_path_module_type);

impl PathModuleType {
    required_child_method!(modtype_path, ModtypePath);
}

ast_node!(
    /// `sig ... end`
    SigModuleType,
    SIG_MODULE_TYPE,
    visit_sig_module_type
);

impl SigModuleType {
    children_method!(specifications, Specification);
}

ast_node!(
    /// `functor (X : S) -> T`: parameter type then result type.
    FunctorModuleType,
    FUNCTOR_MODULE_TYPE,
    visit_functor_module_type
);

impl FunctorModuleType {
    required_child_method!(module_name, ModuleName);
    children_method!(module_types, ModuleType);
}

ast_node!(
    /// `S with type t = int and module M = N`
    WithModuleType,
    WITH_MODULE_TYPE,
    visit_with_module_type
);

impl WithModuleType {
    required_child_method!(module_type, ModuleType);
    children_method!(constraints, WithConstraint);
}

ast_node!(ParenModuleType, PAREN_MODULE_TYPE, visit_paren_module_type);

impl ParenModuleType {
    required_child_method!(module_type, ModuleType);
}

ast_node!(
    /// `module type of module_expr`
    TypeofModuleType,
    TYPEOF_MODULE_TYPE,
    visit_typeof_module_type
);

impl TypeofModuleType {
    required_child_method!(module_expr, ModuleExpr);
}

ast_node!(
    /// One `type ... = ...` or `module ... = ...` constraint of a `with` clause.
    WithConstraint,
    WITH_CONSTRAINT,
    visit_with_constraint
);

impl WithConstraint {
    first_child_method!(type_parameters, TypeParameters);
    first_child_method!(typeconstr_path, TypeconstrPath);
    first_child_method!(type_expr, TypeExpr);
    children_method!(module_paths, ModulePath);
    has_token_method!(is_module, MODULE_KW);
}
