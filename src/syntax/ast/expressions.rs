use super::*;

// ============================================================================
// Expression family
// ============================================================================

ast_enum!(
    /// Any expression.
    Expr,
    "expression",
    {
        ValuePath(ValuePathExpr),
        Constant(ConstantExpr),
        Constr(ConstrExpr),
        Paren(ParenExpr),
        Typed(TypedExpr),
        Coerce(CoerceExpr),
        BeginEnd(BeginEndExpr),
        Tuple(TupleExpr),
        List(ListExpr),
        Array(ArrayExpr),
        Record(RecordExpr),
        FieldAccess(FieldAccessExpr),
        FieldAssign(FieldAssignExpr),
        ArrayGet(ArrayGetExpr),
        Apply(ApplyExpr),
        Prefix(PrefixExpr),
        Infix(InfixExpr),
        If(IfExpr),
        While(WhileExpr),
        For(ForExpr),
        Sequence(SequenceExpr),
        Match(MatchExpr),
        Function(FunctionExpr),
        Fun(FunExpr),
        Try(TryExpr),
        Let(LetExpr),
        LetModule(LetModuleExpr),
        LocalOpen(LocalOpenExpr),
        Assert(AssertExpr),
        Lazy(LazyExpr),
        New(NewExpr),
        MethodCall(MethodCallExpr),
        Object(ObjectExpr),
        InstVarAssign(InstVarAssignExpr),
        PolyVariant(PolyVariantExpr),
        ObjectCopy(ObjectCopyExpr),
    }
);

impl Expr {
    /// Check if this expression evaluates to a function (`fun`/`function`).
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Fun(_) | Self::Function(_))
    }
}

// ============================================================================
// Atoms
// ============================================================================

ast_node!(ValuePathExpr, VALUE_PATH_EXPR, visit_value_path_expr);

impl ValuePathExpr {
    required_child_method!(value_path, ValuePath);
}

ast_node!(
    /// A literal: integer, float, char, string, `true`/`false`.
    ConstantExpr,
    CONSTANT_EXPR,
    visit_constant_expr
);

impl ConstantExpr {
    pub fn constant(&self) -> Option<SyntaxToken> {
        self.0.significant_tokens().into_iter().next()
    }
}

ast_node!(ConstrExpr, CONSTR_EXPR, visit_constr_expr);

impl ConstrExpr {
    required_child_method!(constr_path, ConstrPath);
    first_child_method!(expr, Expr);
}

ast_node!(
    /// `( expr )`, or `()` when the expression is absent.
    ParenExpr,
    PAREN_EXPR,
    visit_paren_expr
);

impl ParenExpr {
    first_child_method!(expr, Expr);
}

ast_node!(
    /// `( expr : typexpr )`
    TypedExpr,
    TYPED_EXPR,
    visit_typed_expr
);

impl TypedExpr {
    first_child_method!(expr, Expr);
    first_child_method!(type_expr, TypeExpr);
}

ast_node!(
    /// `( expr :> typexpr )` or `( expr : typexpr :> typexpr )`
    CoerceExpr,
    COERCE_EXPR,
    visit_coerce_expr
);

impl CoerceExpr {
    required_child_method!(expr, Expr);
    children_method!(type_exprs, TypeExpr);
}

ast_node!(BeginEndExpr, BEGIN_END_EXPR, visit_begin_end_expr);

impl BeginEndExpr {
    first_child_method!(expr, Expr);
}

// ============================================================================
// Aggregates
// ============================================================================

ast_node!(TupleExpr, TUPLE_EXPR, visit_tuple_expr);

impl TupleExpr {
    children_method!(exprs, Expr);
}

ast_node!(ListExpr, LIST_EXPR, visit_list_expr);

impl ListExpr {
    children_method!(exprs, Expr);
}

ast_node!(ArrayExpr, ARRAY_EXPR, visit_array_expr);

impl ArrayExpr {
    children_method!(exprs, Expr);
}

ast_node!(
    /// `{ f = e; ... }` or `{ base with f = e; ... }`
    RecordExpr,
    RECORD_EXPR,
    visit_record_expr
);

impl RecordExpr {
    // `with` base of a functional update
    first_child_method!(expr, Expr);
    children_method!(field_exprs, FieldExpr);
}

ast_node!(FieldAccessExpr, FIELD_ACCESS_EXPR, visit_field_access_expr);

impl FieldAccessExpr {
    required_child_method!(expr, Expr);
    required_child_method!(field, Field);
}

ast_node!(
    /// `expr.field <- expr`
    FieldAssignExpr,
    FIELD_ASSIGN_EXPR,
    visit_field_assign_expr
);

impl FieldAssignExpr {
    children_method!(exprs, Expr);
    required_child_method!(field, Field);
}

ast_node!(ArrayGetExpr, ARRAY_GET_EXPR, visit_array_get_expr);

impl ArrayGetExpr {
    children_method!(exprs, Expr);
}

// ============================================================================
// Operators and application
// ============================================================================

ast_node!(
    /// `f a ~l:b`: the applied function is the first expression child.
    ApplyExpr,
    APPLY_EXPR,
    visit_apply_expr
);

impl ApplyExpr {
    required_child_method!(function, Expr);
    children_method!(exprs, Expr);
    children_method!(arguments, Argument);
}

ast_node!(PrefixExpr, PREFIX_EXPR, visit_prefix_expr);

impl PrefixExpr {
    required_child_method!(expr, Expr);

    pub fn operator(&self) -> Option<SyntaxToken> {
        find_token(&self.0, &[SyntaxKind::OPERATOR])
    }
}

ast_node!(InfixExpr, INFIX_EXPR, visit_infix_expr);

impl InfixExpr {
    children_method!(exprs, Expr);

    pub fn operator(&self) -> Option<SyntaxToken> {
        find_operator_token(&self.0)
    }
}

// ============================================================================
// Control flow
// ============================================================================

ast_node!(
    /// `if c then a else b`: expressions in source order.
    IfExpr,
    IF_EXPR,
    visit_if_expr
);

impl IfExpr {
    children_method!(exprs, Expr);
    has_token_method!(has_else, ELSE_KW);
}

ast_node!(
    /// `while cond do body done`
    WhileExpr,
    WHILE_EXPR,
    visit_while_expr
);

impl WhileExpr {
    children_method!(exprs, Expr);
}

ast_node!(
    /// `for i = a to b do body done`
    ForExpr,
    FOR_EXPR,
    visit_for_expr
);

impl ForExpr {
    required_child_method!(value_name, ValueName);
    children_method!(exprs, Expr);
    has_token_method!(is_downto, DOWNTO_KW);
}

ast_node!(SequenceExpr, SEQUENCE_EXPR, visit_sequence_expr);

impl SequenceExpr {
    children_method!(exprs, Expr);
}

ast_node!(MatchExpr, MATCH_EXPR, visit_match_expr);

impl MatchExpr {
    first_child_method!(expr, Expr);
    first_child_method!(pattern_matching, PatternMatching);
}

ast_node!(FunctionExpr, FUNCTION_EXPR, visit_function_expr);

impl FunctionExpr {
    first_child_method!(pattern_matching, PatternMatching);
}

ast_node!(FunExpr, FUN_EXPR, visit_fun_expr);

impl FunExpr {
    children_method!(parameters, Parameter);
    first_child_method!(type_expr, TypeExpr);
    first_child_method!(expr, Expr);
}

ast_node!(TryExpr, TRY_EXPR, visit_try_expr);

impl TryExpr {
    first_child_method!(expr, Expr);
    first_child_method!(pattern_matching, PatternMatching);
}

// ============================================================================
// Local definitions
// ============================================================================

ast_node!(
    /// `let [rec] b1 and b2 in body`
    LetExpr,
    LET_EXPR,
    visit_let_expr
);

impl LetExpr {
    has_token_method!(is_rec, REC_KW);
    children_method!(let_bindings, LetBinding);
    // body after `in`
    required_child_method!(expr, Expr);
}

ast_node!(LetModuleExpr, LET_MODULE_EXPR, visit_let_module_expr);

impl LetModuleExpr {
    required_child_method!(module_name, ModuleName);
    required_child_method!(module_expr, ModuleExpr);
    required_child_method!(expr, Expr);
}

ast_node!(
    /// `let open M in e` or `M.(e)`
    LocalOpenExpr,
    LOCAL_OPEN_EXPR,
    visit_local_open_expr
);

impl LocalOpenExpr {
    required_child_method!(module_path, ModulePath);
    first_child_method!(expr, Expr);
}

ast_node!(AssertExpr, ASSERT_EXPR, visit_assert_expr);

impl AssertExpr {
    required_child_method!(expr, Expr);
}

ast_node!(LazyExpr, LAZY_EXPR, visit_lazy_expr);

impl LazyExpr {
    required_child_method!(expr, Expr);
}

// ============================================================================
// Objects
// ============================================================================

ast_node!(NewExpr, NEW_EXPR, visit_new_expr);

impl NewExpr {
    required_child_method!(class_path, ClassPath);
}

ast_node!(
    /// `expr # method`
    MethodCallExpr,
    METHOD_CALL_EXPR,
    visit_method_call_expr
);

impl MethodCallExpr {
    required_child_method!(expr, Expr);
    required_child_method!(method_name, MethodName);
}

ast_node!(ObjectExpr, OBJECT_EXPR, visit_object_expr);

impl ObjectExpr {
    first_child_method!(class_body, ClassBody);
}

ast_node!(
    /// `inst_var <- expr`
    InstVarAssignExpr,
    INST_VAR_ASSIGN_EXPR,
    visit_inst_var_assign_expr
);

impl InstVarAssignExpr {
    required_child_method!(inst_var_name, InstVarName);
    required_child_method!(expr, Expr);
}

ast_node!(
    /// `` `Tag `` or `` `Tag expr ``
    PolyVariantExpr,
    POLY_VARIANT_EXPR,
    visit_poly_variant_expr
);

impl PolyVariantExpr {
    /// The tag name without its backquote.
    pub fn tag(&self) -> Option<String> {
        poly_variant_tag(&self.0)
    }

    first_child_method!(expr, Expr);
}

ast_node!(
    /// `{< x = e; y = f >}`
    ObjectCopyExpr,
    OBJECT_COPY_EXPR,
    visit_object_copy_expr
);

impl ObjectCopyExpr {
    children_method!(overrides, InstVarOverride);
}

ast_node!(
    /// `x = e` inside an object copy; `x` alone reuses the variable `x`.
    InstVarOverride,
    INST_VAR_OVERRIDE,
    visit_inst_var_override
);

impl InstVarOverride {
    required_child_method!(inst_var_name, InstVarName);
    first_child_method!(expr, Expr);
}
