use super::*;

// ============================================================================
// Pattern family
// ============================================================================

ast_enum!(
    /// Any pattern.
    Pattern,
    "pattern",
    {
        ValueName(ValueNamePattern),
        Wildcard(WildcardPattern),
        Constant(ConstantPattern),
        Alias(AliasPattern),
        Paren(ParenPattern),
        Tuple(TuplePattern),
        Or(OrPattern),
        Constr(ConstrPattern),
        Record(RecordPattern),
        List(ListPattern),
        Cons(ConsPattern),
        Array(ArrayPattern),
        Lazy(LazyPattern),
        Exception(ExceptionPattern),
        PolyVariant(PolyVariantPattern),
        HashType(HashTypePattern),
        Range(RangePattern),
    }
);

impl Pattern {
    /// Names bound by this pattern, in source order.
    ///
    /// Constructor names, wildcards and record fields followed by their own
    /// pattern bind nothing themselves; a punned field (`{ x }`) binds `x`.
    pub fn bound_names(&self) -> Vec<BoundName> {
        self.syntax()
            .descendants()
            .filter_map(|node| {
                let parent = node.parent()?;
                match (node.kind(), parent.kind()) {
                    (
                        SyntaxKind::VALUE_NAME,
                        SyntaxKind::VALUE_NAME_PATTERN | SyntaxKind::ALIAS_PATTERN,
                    ) => ValueName::cast(node).map(BoundName::Value),
                    (SyntaxKind::FIELD, SyntaxKind::FIELD_PATTERN) => {
                        let field = FieldPattern::cast(parent)?;
                        if field.pattern().is_some() {
                            return None;
                        }
                        Field::cast(node).map(BoundName::Punned)
                    }
                    _ => None,
                }
            })
            .collect()
    }
}

/// A value name introduced by a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoundName {
    /// `x` in `let x = ...` or `let (x, _) = ...`
    Value(ValueName),
    /// `x` in `let { x; _ } = ...`, named after the record field.
    Punned(Field),
}

impl BoundName {
    pub fn name(&self) -> String {
        match self {
            Self::Value(name) => name.name(),
            Self::Punned(field) => field.short_name().unwrap_or_else(|| field.name()),
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Value(name) => name.syntax(),
            Self::Punned(field) => field.syntax(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.syntax().text_range()
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::of(self.syntax())
    }
}

ast_node!(ValueNamePattern, VALUE_NAME_PATTERN, visit_value_name_pattern);

impl ValueNamePattern {
    required_child_method!(value_name, ValueName);
}

ast_node!(
    /// `_`
    WildcardPattern,
    WILDCARD_PATTERN,
    visit_wildcard_pattern
);

ast_node!(ConstantPattern, CONSTANT_PATTERN, visit_constant_pattern);

impl ConstantPattern {
    pub fn constant(&self) -> Option<SyntaxToken> {
        self.0.significant_tokens().into_iter().next()
    }
}

ast_node!(
    /// `pattern as value_name`
    AliasPattern,
    ALIAS_PATTERN,
    visit_alias_pattern
);

impl AliasPattern {
    required_child_method!(pattern, Pattern);
    required_child_method!(value_name, ValueName);
}

ast_node!(
    /// `( pattern )` or `( pattern : typexpr )`
    ParenPattern,
    PAREN_PATTERN,
    visit_paren_pattern
);

impl ParenPattern {
    first_child_method!(pattern, Pattern);
    first_child_method!(type_expr, TypeExpr);
}

ast_node!(TuplePattern, TUPLE_PATTERN, visit_tuple_pattern);

impl TuplePattern {
    children_method!(patterns, Pattern);
}

ast_node!(
    /// `p1 | p2`
    OrPattern,
    OR_PATTERN,
    visit_or_pattern
);

impl OrPattern {
    children_method!(patterns, Pattern);
}

ast_node!(ConstrPattern, CONSTR_PATTERN, visit_constr_pattern);

impl ConstrPattern {
    required_child_method!(constr_path, ConstrPath);
    first_child_method!(pattern, Pattern);
}

ast_node!(
    /// `{ f = p; g : t = q; _ }`
    RecordPattern,
    RECORD_PATTERN,
    visit_record_pattern
);

impl RecordPattern {
    children_method!(field_patterns, FieldPattern);
    /// Check for a trailing `; _` (the record may have more fields).
    pub fn is_open(&self) -> bool {
        self.0.has_token(SyntaxKind::UNDERSCORE)
    }
}

ast_node!(
    /// `f`, `f = p` or `f : t = p` inside a record pattern.
    FieldPattern,
    FIELD_PATTERN,
    visit_field_pattern
);

impl FieldPattern {
    required_child_method!(field, Field);
    first_child_method!(type_expr, TypeExpr);
    // absent when the field is punned
    first_child_method!(pattern, Pattern);
}

ast_node!(ListPattern, LIST_PATTERN, visit_list_pattern);

impl ListPattern {
    children_method!(patterns, Pattern);
}

ast_node!(
    /// `head :: tail`
    ConsPattern,
    CONS_PATTERN,
    visit_cons_pattern
);

impl ConsPattern {
    children_method!(patterns, Pattern);
}

ast_node!(ArrayPattern, ARRAY_PATTERN, visit_array_pattern);

impl ArrayPattern {
    children_method!(patterns, Pattern);
}

ast_node!(LazyPattern, LAZY_PATTERN, visit_lazy_pattern);

impl LazyPattern {
    required_child_method!(pattern, Pattern);
}

ast_node!(ExceptionPattern, EXCEPTION_PATTERN, visit_exception_pattern);

impl ExceptionPattern {
    required_child_method!(pattern, Pattern);
}

ast_node!(
    /// `` `Tag `` or `` `Tag p ``
    PolyVariantPattern,
    POLY_VARIANT_PATTERN,
    visit_poly_variant_pattern
);

impl PolyVariantPattern {
    /// The tag name without its backquote.
    pub fn tag(&self) -> Option<String> {
        poly_variant_tag(&self.0)
    }

    first_child_method!(pattern, Pattern);
}

ast_node!(
    /// `#t`: any tag of the polymorphic variant type `t`.
    HashTypePattern,
    HASH_TYPE_PATTERN,
    visit_hash_type_pattern
);

impl HashTypePattern {
    required_child_method!(typeconstr_path, TypeconstrPath);
}

ast_node!(
    /// `'a'..'z'`
    RangePattern,
    RANGE_PATTERN,
    visit_range_pattern
);

impl RangePattern {
    children_method!(bounds, ConstantPattern);
}
