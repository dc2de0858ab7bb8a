use super::*;

// ============================================================================
// Type expression family
// ============================================================================

ast_enum!(
    /// Any type expression.
    TypeExpr,
    "type expression",
    {
        Var(VarType),
        Any(AnyType),
        Constr(ConstrType),
        Arrow(ArrowType),
        Tuple(TupleType),
        Paren(ParenType),
        Alias(AliasType),
        ClassPath(ClassPathType),
        Object(ObjectType),
        Poly(PolyType),
        Package(PackageType),
        PolyVariant(PolyVariantType),
    }
);

ast_node!(
    /// `'a`
    VarType,
    VAR_TYPE,
    visit_var_type
);

impl VarType {
    /// The variable name without its quote.
    pub fn name(&self) -> Option<String> {
        find_token(&self.0, &[SyntaxKind::LIDENT, SyntaxKind::UIDENT]).map(|t| t.text().to_string())
    }
}

ast_node!(AnyType, ANY_TYPE, visit_any_type);

ast_node!(
    /// `int`, `'a list`, `(int, string) Hashtbl.t`
    ConstrType,
    CONSTR_TYPE,
    visit_constr_type
);

impl ConstrType {
    required_child_method!(typeconstr_path, TypeconstrPath);
    children_method!(type_exprs, TypeExpr);
}

ast_node!(ArrowType, ARROW_TYPE, visit_arrow_type);

impl ArrowType {
    first_child_method!(label_name, LabelName);
    children_method!(type_exprs, TypeExpr);
}

ast_node!(TupleType, TUPLE_TYPE, visit_tuple_type);

impl TupleType {
    children_method!(type_exprs, TypeExpr);
}

ast_node!(ParenType, PAREN_TYPE, visit_paren_type);

impl ParenType {
    children_method!(type_exprs, TypeExpr);
}

ast_node!(
    /// `typexpr as 'a`; the alias variable stays a token pair.
    AliasType,
    ALIAS_TYPE,
    visit_alias_type
);

impl AliasType {
    required_child_method!(type_expr, TypeExpr);
}

ast_node!(
    /// `#class_path`, optionally applied: `(int, 'a) #c`
    ClassPathType,
    CLASS_PATH_TYPE,
    visit_class_path_type
);

impl ClassPathType {
    required_child_method!(class_path, ClassPath);
    children_method!(type_exprs, TypeExpr);
}

ast_node!(
    /// `< m : t; .. >`
    ObjectType,
    OBJECT_TYPE,
    visit_object_type
);

impl ObjectType {
    children_method!(method_types, MethodType);
    has_token_method!(is_open, DOT_DOT);
}

ast_node!(
    /// `'a 'b. typexpr`; bound variables are tokens, the body the only child.
    PolyType,
    POLY_TYPE,
    visit_poly_type
);

impl PolyType {
    required_child_method!(type_expr, TypeExpr);
}

ast_node!(
    /// `(module S)`
    PackageType,
    PACKAGE_TYPE,
    visit_package_type
);

impl PackageType {
    required_child_method!(modtype_path, ModtypePath);
}

ast_node!(
    /// `` [ `A | `B of int ] ``, `` [> `A ] `` or `` [< `A | `B > `A ] ``
    PolyVariantType,
    POLY_VARIANT_TYPE,
    visit_poly_variant_type
);

impl PolyVariantType {
    children_method!(tag_specs, TagSpec);
    /// Inherited rows such as `t` in `` [ t | `A ] ``.
    children_method!(type_exprs, TypeExpr);

    /// `[> ...]`: at least these tags.
    pub fn is_lower_bound(&self) -> bool {
        self.opening_bound() == Some(SyntaxKind::GT)
    }

    /// `[< ...]`: at most these tags.
    pub fn is_upper_bound(&self) -> bool {
        self.opening_bound() == Some(SyntaxKind::LT)
    }

    fn opening_bound(&self) -> Option<SyntaxKind> {
        let mut tokens = self
            .0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia());
        tokens.next().filter(|t| t.kind() == SyntaxKind::L_BRACKET)?;
        tokens
            .next()
            .map(|t| t.kind())
            .filter(|kind| matches!(kind, SyntaxKind::GT | SyntaxKind::LT))
    }
}

ast_node!(
    /// `` `A `` or `` `B of int & string `` inside a polymorphic variant type.
    TagSpec,
    TAG_SPEC,
    visit_tag_spec
);

impl TagSpec {
    /// The tag name without its backquote.
    pub fn tag(&self) -> Option<String> {
        poly_variant_tag(&self.0)
    }

    children_method!(type_exprs, TypeExpr);
}
