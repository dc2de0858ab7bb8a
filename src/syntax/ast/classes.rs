use super::*;

// ============================================================================
// Class expressions
// ============================================================================

ast_enum!(
    /// Any class expression.
    ClassExpr,
    "class expression",
    {
        Path(PathClassExpr),
        Object(ObjectClassExpr),
        Fun(FunClassExpr),
        Apply(ApplyClassExpr),
        Let(LetClassExpr),
        Paren(ParenClassExpr),
    }
);

ast_node!(
    /// `['a] class_path`
    PathClassExpr,
    PATH_CLASS_EXPR,
    visit_path_class_expr
);

impl PathClassExpr {
    required_child_method!(class_path, ClassPath);
    children_method!(type_exprs, TypeExpr);
}

ast_node!(
    /// `object ... end`
    ObjectClassExpr,
    OBJECT_CLASS_EXPR,
    visit_object_class_expr
);

impl ObjectClassExpr {
    first_child_method!(class_body, ClassBody);
}

ast_node!(FunClassExpr, FUN_CLASS_EXPR, visit_fun_class_expr);

impl FunClassExpr {
    children_method!(parameters, Parameter);
    first_child_method!(class_expr, ClassExpr);
}

ast_node!(ApplyClassExpr, APPLY_CLASS_EXPR, visit_apply_class_expr);

impl ApplyClassExpr {
    required_child_method!(class_expr, ClassExpr);
    children_method!(exprs, Expr);
    children_method!(arguments, Argument);
}

ast_node!(LetClassExpr, LET_CLASS_EXPR, visit_let_class_expr);

impl LetClassExpr {
    has_token_method!(is_rec, REC_KW);
    children_method!(let_bindings, LetBinding);
    required_child_method!(class_expr, ClassExpr);
}

ast_node!(ParenClassExpr, PAREN_CLASS_EXPR, visit_paren_class_expr);

impl ParenClassExpr {
    first_child_method!(class_expr, ClassExpr);
    first_child_method!(class_type, ClassType);
}

// ============================================================================
// Class types
// ============================================================================

ast_enum!(
    /// Any class type.
    ClassType,
    "class type",
    {
        Path(PathClassType),
        Body(ClassBodyType),
        Arrow(ArrowClassType),
    }
);

ast_node!(PathClassType, PATH_CLASS_TYPE, visit_path_class_type);

impl PathClassType {
    required_child_method!(class_path, ClassPath);
    children_method!(type_exprs, TypeExpr);
}

ast_node!(
    /// `object ('self) field_specs end`
    ClassBodyType,
    CLASS_BODY_TYPE,
    visit_class_body_type
);

impl ClassBodyType {
    first_child_method!(type_expr, TypeExpr);
    children_method!(field_specs, ClassFieldSpec);
}

ast_node!(
    /// `[?label:] typexpr -> class_type`
    ArrowClassType,
    ARROW_CLASS_TYPE,
    visit_arrow_class_type
);

impl ArrowClassType {
    first_child_method!(label_name, LabelName);
    children_method!(type_exprs, TypeExpr);
    required_child_method!(class_type, ClassType);
}

// ============================================================================
// Class bodies
// ============================================================================

ast_node!(
    /// The inside of `object ... end`: an optional self pattern then fields.
    ClassBody,
    CLASS_BODY,
    visit_class_body
);

impl ClassBody {
    // self pattern: `(self)` in `object (self) ... end`
    first_child_method!(pattern, Pattern);
    first_child_method!(type_expr, TypeExpr);
    children_method!(class_fields, ClassField);
}

ast_enum!(
    /// A member of a class body.
    ClassField,
    "class field",
    {
        Inherit(InheritField),
        Val(ValField),
        Method(MethodField),
        Constraint(ConstraintField),
        Initializer(InitializerField),
    }
);

ast_node!(
    /// `inherit class_expr [as name]`
    InheritField,
    INHERIT_FIELD,
    visit_inherit_field
);

impl InheritField {
    required_child_method!(class_expr, ClassExpr);
    first_child_method!(value_name, ValueName);
}

ast_node!(
    /// `val [mutable] [virtual] x [: t] [= e]`
    ValField,
    VAL_FIELD,
    visit_val_field
);

impl ValField {
    has_token_method!(is_mutable, MUTABLE_KW);
    has_token_method!(is_virtual, VIRTUAL_KW);
    required_child_method!(inst_var_name, InstVarName);
    first_child_method!(type_expr, TypeExpr);
    first_child_method!(expr, Expr);
}

ast_node!(
    /// `method [private] [virtual] m params [: t] [= e]`
    MethodField,
    METHOD_FIELD,
    visit_method_field
);

impl MethodField {
    has_token_method!(is_private, PRIVATE_KW);
    has_token_method!(is_virtual, VIRTUAL_KW);
    required_child_method!(method_name, MethodName);
    children_method!(parameters, Parameter);
    first_child_method!(type_expr, TypeExpr);
    first_child_method!(expr, Expr);
}

ast_node!(
    /// `constraint t1 = t2`
    ConstraintField,
    CONSTRAINT_FIELD,
    visit_constraint_field
);

impl ConstraintField {
    children_method!(type_exprs, TypeExpr);
}

ast_node!(InitializerField, INITIALIZER_FIELD, visit_initializer_field);

impl InitializerField {
    required_child_method!(expr, Expr);
}

// ============================================================================
// Class body types
// ============================================================================

ast_enum!(
    /// A member of a class body type.
    ClassFieldSpec,
    "class field specification",
    {
        Inherit(InheritSpec),
        Val(ValFieldSpec),
        Method(MethodSpec),
        Constraint(ConstraintSpec),
    }
);

ast_node!(InheritSpec, INHERIT_SPEC, visit_inherit_spec);

impl InheritSpec {
    required_child_method!(class_type, ClassType);
}

ast_node!(ValFieldSpec, VAL_FIELD_SPEC, visit_val_field_spec);

impl ValFieldSpec {
    has_token_method!(is_mutable, MUTABLE_KW);
    has_token_method!(is_virtual, VIRTUAL_KW);
    required_child_method!(inst_var_name, InstVarName);
    required_child_method!(type_expr, TypeExpr);
}

ast_node!(MethodSpec, METHOD_SPEC, visit_method_spec);

impl MethodSpec {
    has_token_method!(is_private, PRIVATE_KW);
    has_token_method!(is_virtual, VIRTUAL_KW);
    required_child_method!(method_name, MethodName);
    required_child_method!(type_expr, TypeExpr);
}

ast_node!(ConstraintSpec, CONSTRAINT_SPEC, visit_constraint_spec);

impl ConstraintSpec {
    children_method!(type_exprs, TypeExpr);
}

// ============================================================================
// Class definitions
// ============================================================================

ast_node!(
    /// One `[virtual] ['a] name params [: class_type] = class_expr` of a class item.
    ClassBinding,
    CLASS_BINDING,
    visit_class_binding
);

impl ClassBinding {
    has_token_method!(is_virtual, VIRTUAL_KW);
    first_child_method!(type_parameters, TypeParameters);
    required_child_method!(class_name, ClassName);
    children_method!(parameters, Parameter);
    first_child_method!(class_type, ClassType);
    required_child_method!(class_expr, ClassExpr);
}

ast_node!(
    /// One `[virtual] ['a] name : class_type` of a class specification.
    ClassSpecBinding,
    CLASS_SPEC_BINDING,
    visit_class_spec_binding
);

impl ClassSpecBinding {
    has_token_method!(is_virtual, VIRTUAL_KW);
    first_child_method!(type_parameters, TypeParameters);
    required_child_method!(class_name, ClassName);
    required_child_method!(class_type, ClassType);
}

ast_node!(
    /// One `[virtual] ['a] name = class_body_type` of a `class type` definition.
    ClassTypeDef,
    CLASS_TYPE_DEF,
    visit_class_type_def
);

impl ClassTypeDef {
    has_token_method!(is_virtual, VIRTUAL_KW);
    first_child_method!(type_parameters, TypeParameters);
    required_child_method!(class_name, ClassName);
    required_child_method!(class_type, ClassType);
}

ast_node!(
    /// `m : typexpr` inside an object type.
    MethodType,
    METHOD_TYPE,
    visit_method_type
);

impl MethodType {
    required_child_method!(method_name, MethodName);
    required_child_method!(type_expr, TypeExpr);
}
