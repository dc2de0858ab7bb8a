use super::*;

ast_enum!(
    /// Any node of the typed tree.
    ///
    /// Family members are reached through their family variant, so an
    /// `IF_EXPR` node reads as `Node::Expr(Expr::If(..))`.
    Node,
    "node",
    {
        Implementation(Implementation),
        UnitInterface(UnitInterface),

        Expr(Expr),
        Pattern(Pattern),
        TypeExpr(TypeExpr),
        ModuleExpr(ModuleExpr),
        ModuleType(ModuleType),
        ClassExpr(ClassExpr),
        ClassType(ClassType),
        Specification(Specification),
        Item(Item),

        ClassField(ClassField),
        ClassFieldSpec(ClassFieldSpec),

        LetBinding(LetBinding),
        Parameter(Parameter),
        Argument(Argument),
        PatternMatching(PatternMatching),
        MatchCase(MatchCase),
        Guard(Guard),
        FieldExpr(FieldExpr),
        FieldPattern(FieldPattern),
        Typedef(Typedef),
        TypeParameters(TypeParameters),
        ConstrDecl(ConstrDecl),
        FieldDecl(FieldDecl),
        TagSpec(TagSpec),
        ClassBody(ClassBody),
        InstVarOverride(InstVarOverride),
        ClassBinding(ClassBinding),
        ClassSpecBinding(ClassSpecBinding),
        ClassTypeDef(ClassTypeDef),
        MethodType(MethodType),
        WithConstraint(WithConstraint),

        ValueName(ValueName),
        ConstrName(ConstrName),
        TypeconstrName(TypeconstrName),
        Field(Field),
        ModuleName(ModuleName),
        ModtypeName(ModtypeName),
        ClassName(ClassName),
        MethodName(MethodName),
        InstVarName(InstVarName),
        LabelName(LabelName),
        ValuePath(ValuePath),
        ConstrPath(ConstrPath),
        ModulePath(ModulePath),
        ModtypePath(ModtypePath),
        ClassPath(ClassPath),
        TypeconstrPath(TypeconstrPath),
    }
);

impl Node {
    /// Wrap a raw node in the typed variant for its label.
    ///
    /// Fails with `UnrecognizedLabel` when the label names no node kind: a
    /// token kind, `ERROR`, or a tag outside the taxonomy.
    pub fn from_raw(raw: SyntaxNode) -> Result<Node, SyntaxTreeError> {
        let label = raw.label().0;
        let range = raw.text_range();
        Node::cast(raw).ok_or_else(|| {
            tracing::debug!(label, range = ?range, "raw label has no node kind");
            SyntaxTreeError::UnrecognizedLabel { label, range }
        })
    }

    /// The typed parent, if there is one and it is recognised.
    pub fn parent(&self) -> Option<Node> {
        self.syntax().parent().and_then(Node::cast)
    }

    /// Typed ancestors from the parent outward, skipping unrecognised nodes.
    pub fn ancestors(&self) -> impl Iterator<Item = Node> {
        self.syntax().ancestors().skip(1).filter_map(Node::cast)
    }

    /// Typed children in source order, skipping unrecognised nodes.
    pub fn children(&self) -> impl Iterator<Item = Node> {
        self.syntax().children().filter_map(Node::cast)
    }

    /// Visit this node and every node below it in preorder.
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), SyntaxTreeError> {
        crate::syntax::visitor::walk(self.syntax(), visitor)
    }
}

/// Lift concrete family members straight into [`Node`] through their family.
macro_rules! node_from_member {
    ($union:ident: $($ty:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$union($union::from(node))
                }
            }
        )+
    };
}

node_from_member!(Expr:
    ValuePathExpr, ConstantExpr, ConstrExpr, ParenExpr, TypedExpr, CoerceExpr, BeginEndExpr,
    TupleExpr, ListExpr, ArrayExpr, RecordExpr, FieldAccessExpr, FieldAssignExpr, ArrayGetExpr,
    ApplyExpr, PrefixExpr, InfixExpr, IfExpr, WhileExpr, ForExpr, SequenceExpr, MatchExpr,
    FunctionExpr, FunExpr, TryExpr, LetExpr, LetModuleExpr, LocalOpenExpr, AssertExpr, LazyExpr,
    NewExpr, MethodCallExpr, ObjectExpr, InstVarAssignExpr, PolyVariantExpr, ObjectCopyExpr,
);
node_from_member!(Pattern:
    ValueNamePattern, WildcardPattern, ConstantPattern, AliasPattern, ParenPattern, TuplePattern,
    OrPattern, ConstrPattern, RecordPattern, ListPattern, ConsPattern, ArrayPattern, LazyPattern,
    ExceptionPattern, PolyVariantPattern, HashTypePattern, RangePattern,
);
node_from_member!(TypeExpr:
    VarType, AnyType, ConstrType, ArrowType, TupleType, ParenType, AliasType, ClassPathType,
    ObjectType, PolyType, PackageType, PolyVariantType,
);
node_from_member!(ModuleExpr:
    PathModuleExpr, StructModuleExpr, FunctorModuleExpr, ApplyModuleExpr, ParenModuleExpr,
    UnpackModuleExpr,
);
node_from_member!(ModuleType:
    PathModuleType, SigModuleType, FunctorModuleType, WithModuleType, ParenModuleType,
    TypeofModuleType,
);
node_from_member!(ClassExpr:
    PathClassExpr, ObjectClassExpr, FunClassExpr, ApplyClassExpr, LetClassExpr, ParenClassExpr,
);
node_from_member!(ClassType: PathClassType, ClassBodyType, ArrowClassType);
node_from_member!(Specification:
    ValueSpec, ExternalSpec, TypeSpec, ExceptionSpec, ModuleSpec, ModuleTypeSpec, OpenSpec,
    IncludeSpec, ClassSpec, ClassTypeSpec,
);
node_from_member!(Item:
    LetItem, ExprItem, ExternalItem, TypeItem, ExceptionItem, ModuleItem, ModuleTypeItem,
    OpenItem, IncludeItem, ClassItem, ClassTypeItem,
);
node_from_member!(ClassField:
    InheritField, ValField, MethodField, ConstraintField, InitializerField,
);
node_from_member!(ClassFieldSpec: InheritSpec, ValFieldSpec, MethodSpec, ConstraintSpec);
