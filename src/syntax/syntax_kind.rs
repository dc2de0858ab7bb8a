//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the OCaml syntax tree.
//! Node kinds are grouped by capability family (see [`Family`]); the grouping
//! follows the nonterminals of the OCaml reference grammar.

/// All syntax kinds (tokens and nodes) of the OCaml grammar
///
/// Tokens are leaves of the raw tree (identifiers, keywords, punctuation).
/// Nodes are composite (expressions, patterns, items, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    LIDENT,             // value, field, type constructor names
    UIDENT,             // module and constructor names
    INT,                // 42
    FLOAT,              // 3.14
    CHAR,               // 'c'
    STRING,             // "hello"
    OPERATOR,           // + ** <*> ...

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,            // (
    R_PAREN,            // )
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_BRACKET_PIPE,     // [|
    PIPE_R_BRACKET,     // |]
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACE_LT,         // {<
    GT_R_BRACE,         // >}
    COMMA,              // ,
    SEMI,               // ;
    SEMI_SEMI,          // ;;
    COLON,              // :
    COLON_COLON,        // ::
    COLON_GT,           // :>
    COLON_EQ,           // :=
    DOT,                // .
    DOT_DOT,            // ..
    EQ,                 // =
    LT,                 // <
    GT,                 // >
    LT_MINUS,           // <-
    MINUS_GT,           // ->
    PIPE,               // |
    STAR,               // *
    HASH,               // #
    QUOTE,              // '
    BACKQUOTE,          // `
    UNDERSCORE,         // _
    TILDE,              // ~
    QUESTION,           // ?

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    AND_KW,
    AS_KW,
    ASSERT_KW,
    BEGIN_KW,
    CLASS_KW,
    CONSTRAINT_KW,
    DO_KW,
    DONE_KW,
    DOWNTO_KW,
    ELSE_KW,
    END_KW,
    EXCEPTION_KW,
    EXTERNAL_KW,
    FALSE_KW,
    FOR_KW,
    FUN_KW,
    FUNCTION_KW,
    FUNCTOR_KW,
    IF_KW,
    IN_KW,
    INCLUDE_KW,
    INHERIT_KW,
    INITIALIZER_KW,
    LAZY_KW,
    LET_KW,
    MATCH_KW,
    METHOD_KW,
    MODULE_KW,
    MUTABLE_KW,
    NEW_KW,
    NONREC_KW,
    OBJECT_KW,
    OF_KW,
    OPEN_KW,
    PRIVATE_KW,
    REC_KW,
    SIG_KW,
    STRUCT_KW,
    THEN_KW,
    TO_KW,
    TRUE_KW,
    TRY_KW,
    TYPE_KW,
    VAL_KW,
    VIRTUAL_KW,
    WHEN_KW,
    WHILE_KW,
    WITH_KW,

    // =========================================================================
    // NODES - Compilation units
    // =========================================================================
    IMPLEMENTATION,
    UNIT_INTERFACE,

    // =========================================================================
    // NODES - Names and paths (leaves of the typed tree)
    // =========================================================================
    VALUE_NAME,
    CONSTR_NAME,
    TYPECONSTR_NAME,
    FIELD,
    MODULE_NAME,
    MODTYPE_NAME,
    CLASS_NAME,
    METHOD_NAME,
    INST_VAR_NAME,
    LABEL_NAME,

    VALUE_PATH,
    CONSTR_PATH,
    MODULE_PATH,
    MODTYPE_PATH,
    CLASS_PATH,
    TYPECONSTR_PATH,

    // =========================================================================
    // NODES - Expressions
    // =========================================================================
    VALUE_PATH_EXPR,
    CONSTANT_EXPR,
    CONSTR_EXPR,
    PAREN_EXPR,
    TYPED_EXPR,
    COERCE_EXPR,
    BEGIN_END_EXPR,
    TUPLE_EXPR,
    LIST_EXPR,
    ARRAY_EXPR,
    RECORD_EXPR,
    FIELD_ACCESS_EXPR,
    FIELD_ASSIGN_EXPR,
    ARRAY_GET_EXPR,
    APPLY_EXPR,
    PREFIX_EXPR,
    INFIX_EXPR,
    IF_EXPR,
    WHILE_EXPR,
    FOR_EXPR,
    SEQUENCE_EXPR,
    MATCH_EXPR,
    FUNCTION_EXPR,
    FUN_EXPR,
    TRY_EXPR,
    LET_EXPR,
    LET_MODULE_EXPR,
    LOCAL_OPEN_EXPR,
    ASSERT_EXPR,
    LAZY_EXPR,
    NEW_EXPR,
    METHOD_CALL_EXPR,
    OBJECT_EXPR,
    INST_VAR_ASSIGN_EXPR,
    POLY_VARIANT_EXPR,
    OBJECT_COPY_EXPR,

    // =========================================================================
    // NODES - Patterns
    // =========================================================================
    VALUE_NAME_PATTERN,
    WILDCARD_PATTERN,
    CONSTANT_PATTERN,
    ALIAS_PATTERN,
    PAREN_PATTERN,
    TUPLE_PATTERN,
    OR_PATTERN,
    CONSTR_PATTERN,
    RECORD_PATTERN,
    LIST_PATTERN,
    CONS_PATTERN,
    ARRAY_PATTERN,
    LAZY_PATTERN,
    EXCEPTION_PATTERN,
    POLY_VARIANT_PATTERN,
    HASH_TYPE_PATTERN,
    RANGE_PATTERN,

    // =========================================================================
    // NODES - Type expressions
    // =========================================================================
    VAR_TYPE,
    ANY_TYPE,
    CONSTR_TYPE,
    ARROW_TYPE,
    TUPLE_TYPE,
    PAREN_TYPE,
    ALIAS_TYPE,
    CLASS_PATH_TYPE,
    OBJECT_TYPE,
    POLY_TYPE,
    PACKAGE_TYPE,
    POLY_VARIANT_TYPE,

    // =========================================================================
    // NODES - Module expressions and module types
    // =========================================================================
    PATH_MODULE_EXPR,
    STRUCT_MODULE_EXPR,
    FUNCTOR_MODULE_EXPR,
    APPLY_MODULE_EXPR,
    PAREN_MODULE_EXPR,
    UNPACK_MODULE_EXPR,

    PATH_MODULE_TYPE,
    SIG_MODULE_TYPE,
    FUNCTOR_MODULE_TYPE,
    WITH_MODULE_TYPE,
    PAREN_MODULE_TYPE,
    TYPEOF_MODULE_TYPE,

    // =========================================================================
    // NODES - Class expressions and class types
    // =========================================================================
    PATH_CLASS_EXPR,
    OBJECT_CLASS_EXPR,
    FUN_CLASS_EXPR,
    APPLY_CLASS_EXPR,
    LET_CLASS_EXPR,
    PAREN_CLASS_EXPR,

    PATH_CLASS_TYPE,
    CLASS_BODY_TYPE,
    ARROW_CLASS_TYPE,

    // =========================================================================
    // NODES - Specifications (signature members)
    // =========================================================================
    VALUE_SPEC,
    EXTERNAL_SPEC,
    TYPE_SPEC,
    EXCEPTION_SPEC,
    MODULE_SPEC,
    MODULE_TYPE_SPEC,
    OPEN_SPEC,
    INCLUDE_SPEC,
    CLASS_SPEC,
    CLASS_TYPE_SPEC,

    // =========================================================================
    // NODES - Items (structure members)
    // =========================================================================
    LET_ITEM,
    EXPR_ITEM,
    EXTERNAL_ITEM,
    TYPE_ITEM,
    EXCEPTION_ITEM,
    MODULE_ITEM,
    MODULE_TYPE_ITEM,
    OPEN_ITEM,
    INCLUDE_ITEM,
    CLASS_ITEM,
    CLASS_TYPE_ITEM,

    // =========================================================================
    // NODES - Class members
    // =========================================================================
    INHERIT_FIELD,
    VAL_FIELD,
    METHOD_FIELD,
    CONSTRAINT_FIELD,
    INITIALIZER_FIELD,

    INHERIT_SPEC,
    VAL_FIELD_SPEC,
    METHOD_SPEC,
    CONSTRAINT_SPEC,

    // =========================================================================
    // NODES - Standalone composites
    // =========================================================================
    LET_BINDING,
    PARAMETER,
    ARGUMENT,
    PATTERN_MATCHING,
    MATCH_CASE,
    GUARD,
    FIELD_EXPR,
    FIELD_PATTERN,
    TYPEDEF,
    TYPE_PARAMETERS,
    CONSTR_DECL,
    FIELD_DECL,
    TAG_SPEC,
    CLASS_BODY,
    INST_VAR_OVERRIDE,
    CLASS_BINDING,
    CLASS_SPEC_BINDING,
    CLASS_TYPE_DEF,
    METHOD_TYPE,
    WITH_CONSTRAINT,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

/// Capability families: the shared categories many concrete node kinds
/// belong to.
///
/// A node kind belongs to at most one family. Kinds outside every family are
/// either leaves (names, paths) or standalone composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Expression,
    Pattern,
    TypeExpression,
    ModuleExpression,
    ModuleType,
    ClassExpression,
    ClassType,
    Specification,
    Item,
}

impl Family {
    pub const ALL: [Family; 9] = [
        Family::Expression,
        Family::Pattern,
        Family::TypeExpression,
        Family::ModuleExpression,
        Family::ModuleType,
        Family::ClassExpression,
        Family::ClassType,
        Family::Specification,
        Family::Item,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expression => "expression",
            Self::Pattern => "pattern",
            Self::TypeExpression => "type expression",
            Self::ModuleExpression => "module expression",
            Self::ModuleType => "module type",
            Self::ClassExpression => "class expression",
            Self::ClassType => "class type",
            Self::Specification => "specification",
            Self::Item => "item",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::AND_KW as u16) && (self as u16) <= (Self::WITH_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::QUESTION as u16)
    }

    /// Check if this token can name an infix operator (`*`, `=`, `<`, `::`, ...).
    ///
    /// Most operators lex as `OPERATOR`; the rest share a token with other
    /// punctuation.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Self::OPERATOR
                | Self::STAR
                | Self::EQ
                | Self::LT
                | Self::GT
                | Self::COLON_COLON
                | Self::COLON_EQ
                | Self::PIPE
        )
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT | Self::FLOAT | Self::CHAR | Self::STRING | Self::TRUE_KW | Self::FALSE_KW
        )
    }

    /// Check if this kind labels a composite node of the typed tree.
    ///
    /// `ERROR` is a raw-tree label without a typed counterpart.
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::IMPLEMENTATION as u16) && (self as u16) <= (Self::WITH_CONSTRAINT as u16)
    }

    /// Check if this kind is a leaf of the typed tree (a name or a path).
    pub fn is_leaf_node(self) -> bool {
        (self as u16) >= (Self::VALUE_NAME as u16) && (self as u16) <= (Self::TYPECONSTR_PATH as u16)
    }

    /// The capability family this node kind belongs to, if any.
    pub fn family(self) -> Option<Family> {
        use SyntaxKind::*;
        let family = match self {
            VALUE_PATH_EXPR | CONSTANT_EXPR | CONSTR_EXPR | PAREN_EXPR | TYPED_EXPR
            | COERCE_EXPR | BEGIN_END_EXPR | TUPLE_EXPR | LIST_EXPR | ARRAY_EXPR | RECORD_EXPR
            | FIELD_ACCESS_EXPR | FIELD_ASSIGN_EXPR | ARRAY_GET_EXPR | APPLY_EXPR | PREFIX_EXPR
            | INFIX_EXPR | IF_EXPR | WHILE_EXPR | FOR_EXPR | SEQUENCE_EXPR | MATCH_EXPR
            | FUNCTION_EXPR | FUN_EXPR | TRY_EXPR | LET_EXPR | LET_MODULE_EXPR
            | LOCAL_OPEN_EXPR | ASSERT_EXPR | LAZY_EXPR | NEW_EXPR | METHOD_CALL_EXPR
            | OBJECT_EXPR | INST_VAR_ASSIGN_EXPR | POLY_VARIANT_EXPR
            | OBJECT_COPY_EXPR => Family::Expression,

            VALUE_NAME_PATTERN | WILDCARD_PATTERN | CONSTANT_PATTERN | ALIAS_PATTERN
            | PAREN_PATTERN | TUPLE_PATTERN | OR_PATTERN | CONSTR_PATTERN | RECORD_PATTERN
            | LIST_PATTERN | CONS_PATTERN | ARRAY_PATTERN | LAZY_PATTERN
            | EXCEPTION_PATTERN | POLY_VARIANT_PATTERN | HASH_TYPE_PATTERN
            | RANGE_PATTERN => Family::Pattern,

            VAR_TYPE | ANY_TYPE | CONSTR_TYPE | ARROW_TYPE | TUPLE_TYPE | PAREN_TYPE
            | ALIAS_TYPE | CLASS_PATH_TYPE | OBJECT_TYPE | POLY_TYPE | PACKAGE_TYPE
            | POLY_VARIANT_TYPE => {
                Family::TypeExpression
            }

            PATH_MODULE_EXPR | STRUCT_MODULE_EXPR | FUNCTOR_MODULE_EXPR | APPLY_MODULE_EXPR
            | PAREN_MODULE_EXPR | UNPACK_MODULE_EXPR => Family::ModuleExpression,

            PATH_MODULE_TYPE | SIG_MODULE_TYPE | FUNCTOR_MODULE_TYPE | WITH_MODULE_TYPE
            | PAREN_MODULE_TYPE | TYPEOF_MODULE_TYPE => Family::ModuleType,

            PATH_CLASS_EXPR | OBJECT_CLASS_EXPR | FUN_CLASS_EXPR | APPLY_CLASS_EXPR
            | LET_CLASS_EXPR | PAREN_CLASS_EXPR => Family::ClassExpression,

            PATH_CLASS_TYPE | CLASS_BODY_TYPE | ARROW_CLASS_TYPE => Family::ClassType,

            VALUE_SPEC | EXTERNAL_SPEC | TYPE_SPEC | EXCEPTION_SPEC | MODULE_SPEC
            | MODULE_TYPE_SPEC | OPEN_SPEC | INCLUDE_SPEC | CLASS_SPEC | CLASS_TYPE_SPEC => {
                Family::Specification
            }

            LET_ITEM | EXPR_ITEM | EXTERNAL_ITEM | TYPE_ITEM | EXCEPTION_ITEM | MODULE_ITEM
            | MODULE_TYPE_ITEM | OPEN_ITEM | INCLUDE_ITEM | CLASS_ITEM | CLASS_TYPE_ITEM => {
                Family::Item
            }

            _ => return None,
        };
        Some(family)
    }

    /// Map a raw label back to its kind; `None` for tags outside the taxonomy.
    pub fn from_raw(raw: u16) -> Option<SyntaxKind> {
        if raw < SyntaxKind::__LAST as u16 {
            // Safety: `SyntaxKind` is `repr(u16)` with contiguous discriminants
            // starting at 0, and `raw` is bounds-checked above
            Some(unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) })
        } else {
            None
        }
    }

    /// Every kind in the taxonomy, in discriminant order.
    pub fn all() -> impl Iterator<Item = SyntaxKind> {
        (0..SyntaxKind::__LAST as u16).filter_map(SyntaxKind::from_raw)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OCamlLanguage {}

impl rowan::Language for OCamlLanguage {
    type Kind = SyntaxKind;

    // Tags outside the taxonomy read as `ERROR`; the raw tag stays available
    // through `RawNodeExt::label` for diagnostics.
    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SyntaxKind::from_raw(raw.0).unwrap_or(SyntaxKind::ERROR)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<OCamlLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<OCamlLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<OCamlLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<OCamlLanguage>;
