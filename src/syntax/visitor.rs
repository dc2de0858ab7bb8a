//! Double-dispatch visitor over the typed tree.
//!
//! `node.accept(visitor)` calls the visit method of the node's concrete kind.
//! Every visit method has a default, so a visitor only overrides what it
//! cares about and everything else falls back one level:
//!
//! ```text
//! visit_if_expr  →  visit_expr  →  visit_any
//! visit_guard    →  visit_any
//! ```
//!
//! `visit_any` does nothing by default.

use super::ast::*;
use super::error::SyntaxTreeError;
use super::syntax_kind::SyntaxNode;

/// Default concrete visits of one family: wrap the node and hand it to the
/// family's visit method.
macro_rules! family_defaults {
    ($family_visit:ident($family:ident) { $($visit:ident($ty:ident)),+ $(,)? }) => {
        $(
            fn $visit(&mut self, node: &$ty) {
                self.$family_visit(&$family::from(node.clone()))
            }
        )+
    };
}

/// Default concrete visits of kinds outside the families: straight to `visit_any`.
macro_rules! any_defaults {
    ($($visit:ident($ty:ident)),+ $(,)?) => {
        $(
            fn $visit(&mut self, node: &$ty) {
                self.visit_any(&Node::from(node.clone()))
            }
        )+
    };
}

/// Visitor trait for typed OCaml syntax nodes.
///
/// Implement this trait to define custom behavior per node kind, per family,
/// or for every node at once. Default implementations delegate upward and end
/// in a no-op.
pub trait Visitor {
    /// Catch-all for every node no more specific method handled.
    fn visit_any(&mut self, _node: &Node) {}

    // ------------------------------------------------------------------------
    // Families
    // ------------------------------------------------------------------------

    fn visit_expr(&mut self, node: &Expr) {
        self.visit_any(&Node::Expr(node.clone()))
    }

    fn visit_pattern(&mut self, node: &Pattern) {
        self.visit_any(&Node::Pattern(node.clone()))
    }

    fn visit_type_expr(&mut self, node: &TypeExpr) {
        self.visit_any(&Node::TypeExpr(node.clone()))
    }

    fn visit_module_expr(&mut self, node: &ModuleExpr) {
        self.visit_any(&Node::ModuleExpr(node.clone()))
    }

    fn visit_module_type(&mut self, node: &ModuleType) {
        self.visit_any(&Node::ModuleType(node.clone()))
    }

    fn visit_class_expr(&mut self, node: &ClassExpr) {
        self.visit_any(&Node::ClassExpr(node.clone()))
    }

    fn visit_class_type(&mut self, node: &ClassType) {
        self.visit_any(&Node::ClassType(node.clone()))
    }

    fn visit_specification(&mut self, node: &Specification) {
        self.visit_any(&Node::Specification(node.clone()))
    }

    fn visit_item(&mut self, node: &Item) {
        self.visit_any(&Node::Item(node.clone()))
    }

    // ------------------------------------------------------------------------
    // Family members
    // ------------------------------------------------------------------------

    family_defaults!(visit_expr(Expr) {
        visit_value_path_expr(ValuePathExpr),
        visit_constant_expr(ConstantExpr),
        visit_constr_expr(ConstrExpr),
        visit_paren_expr(ParenExpr),
        visit_typed_expr(TypedExpr),
        visit_coerce_expr(CoerceExpr),
        visit_begin_end_expr(BeginEndExpr),
        visit_tuple_expr(TupleExpr),
        visit_list_expr(ListExpr),
        visit_array_expr(ArrayExpr),
        visit_record_expr(RecordExpr),
        visit_field_access_expr(FieldAccessExpr),
        visit_field_assign_expr(FieldAssignExpr),
        visit_array_get_expr(ArrayGetExpr),
        visit_apply_expr(ApplyExpr),
        visit_prefix_expr(PrefixExpr),
        visit_infix_expr(InfixExpr),
        visit_if_expr(IfExpr),
        visit_while_expr(WhileExpr),
        visit_for_expr(ForExpr),
        visit_sequence_expr(SequenceExpr),
        visit_match_expr(MatchExpr),
        visit_function_expr(FunctionExpr),
        visit_fun_expr(FunExpr),
        visit_try_expr(TryExpr),
        visit_let_expr(LetExpr),
        visit_let_module_expr(LetModuleExpr),
        visit_local_open_expr(LocalOpenExpr),
        visit_assert_expr(AssertExpr),
        visit_lazy_expr(LazyExpr),
        visit_new_expr(NewExpr),
        visit_method_call_expr(MethodCallExpr),
        visit_object_expr(ObjectExpr),
        visit_inst_var_assign_expr(InstVarAssignExpr),
        visit_poly_variant_expr(PolyVariantExpr),
        visit_object_copy_expr(ObjectCopyExpr),
    });

    family_defaults!(visit_pattern(Pattern) {
        visit_value_name_pattern(ValueNamePattern),
        visit_wildcard_pattern(WildcardPattern),
        visit_constant_pattern(ConstantPattern),
        visit_alias_pattern(AliasPattern),
        visit_paren_pattern(ParenPattern),
        visit_tuple_pattern(TuplePattern),
        visit_or_pattern(OrPattern),
        visit_constr_pattern(ConstrPattern),
        visit_record_pattern(RecordPattern),
        visit_list_pattern(ListPattern),
        visit_cons_pattern(ConsPattern),
        visit_array_pattern(ArrayPattern),
        visit_lazy_pattern(LazyPattern),
        visit_exception_pattern(ExceptionPattern),
        visit_poly_variant_pattern(PolyVariantPattern),
        visit_hash_type_pattern(HashTypePattern),
        visit_range_pattern(RangePattern),
    });

    family_defaults!(visit_type_expr(TypeExpr) {
        visit_var_type(VarType),
        visit_any_type(AnyType),
        visit_constr_type(ConstrType),
        visit_arrow_type(ArrowType),
        visit_tuple_type(TupleType),
        visit_paren_type(ParenType),
        visit_alias_type(AliasType),
        visit_class_path_type(ClassPathType),
        visit_object_type(ObjectType),
        visit_poly_type(PolyType),
        visit_package_type(PackageType),
        visit_poly_variant_type(PolyVariantType),
    });

    family_defaults!(visit_module_expr(ModuleExpr) {
        visit_path_module_expr(PathModuleExpr),
        visit_struct_module_expr(StructModuleExpr),
        visit_functor_module_expr(FunctorModuleExpr),
        visit_apply_module_expr(ApplyModuleExpr),
        visit_paren_module_expr(ParenModuleExpr),
        visit_unpack_module_expr(UnpackModuleExpr),
    });

    family_defaults!(visit_module_type(ModuleType) {
        visit_path_module_type(PathModuleType),
        visit_sig_module_type(SigModuleType),
        visit_functor_module_type(FunctorModuleType),
        visit_with_module_type(WithModuleType),
        visit_paren_module_type(ParenModuleType),
        visit_typeof_module_type(TypeofModuleType),
    });

    family_defaults!(visit_class_expr(ClassExpr) {
        visit_path_class_expr(PathClassExpr),
        visit_object_class_expr(ObjectClassExpr),
        visit_fun_class_expr(FunClassExpr),
        visit_apply_class_expr(ApplyClassExpr),
        visit_let_class_expr(LetClassExpr),
        visit_paren_class_expr(ParenClassExpr),
    });

    family_defaults!(visit_class_type(ClassType) {
        visit_path_class_type(PathClassType),
        visit_class_body_type(ClassBodyType),
        visit_arrow_class_type(ArrowClassType),
    });

    family_defaults!(visit_specification(Specification) {
        visit_value_spec(ValueSpec),
        visit_external_spec(ExternalSpec),
        visit_type_spec(TypeSpec),
        visit_exception_spec(ExceptionSpec),
        visit_module_spec(ModuleSpec),
        visit_module_type_spec(ModuleTypeSpec),
        visit_open_spec(OpenSpec),
        visit_include_spec(IncludeSpec),
        visit_class_spec(ClassSpec),
        visit_class_type_spec(ClassTypeSpec),
    });

    family_defaults!(visit_item(Item) {
        visit_let_item(LetItem),
        visit_expr_item(ExprItem),
        visit_external_item(ExternalItem),
        visit_type_item(TypeItem),
        visit_exception_item(ExceptionItem),
        visit_module_item(ModuleItem),
        visit_module_type_item(ModuleTypeItem),
        visit_open_item(OpenItem),
        visit_include_item(IncludeItem),
        visit_class_item(ClassItem),
        visit_class_type_item(ClassTypeItem),
    });

    // ------------------------------------------------------------------------
    // Kinds outside the families
    // ------------------------------------------------------------------------

    any_defaults!(
        visit_implementation(Implementation),
        visit_unit_interface(UnitInterface),
        visit_let_binding(LetBinding),
        visit_parameter(Parameter),
        visit_argument(Argument),
        visit_pattern_matching(PatternMatching),
        visit_match_case(MatchCase),
        visit_guard(Guard),
        visit_field_expr(FieldExpr),
        visit_field_pattern(FieldPattern),
        visit_typedef(Typedef),
        visit_type_parameters(TypeParameters),
        visit_constr_decl(ConstrDecl),
        visit_field_decl(FieldDecl),
        visit_tag_spec(TagSpec),
        visit_class_body(ClassBody),
        visit_inst_var_override(InstVarOverride),
        visit_inherit_field(InheritField),
        visit_val_field(ValField),
        visit_method_field(MethodField),
        visit_constraint_field(ConstraintField),
        visit_initializer_field(InitializerField),
        visit_inherit_spec(InheritSpec),
        visit_val_field_spec(ValFieldSpec),
        visit_method_spec(MethodSpec),
        visit_constraint_spec(ConstraintSpec),
        visit_class_binding(ClassBinding),
        visit_class_spec_binding(ClassSpecBinding),
        visit_class_type_def(ClassTypeDef),
        visit_method_type(MethodType),
        visit_with_constraint(WithConstraint),
        visit_value_name(ValueName),
        visit_constr_name(ConstrName),
        visit_typeconstr_name(TypeconstrName),
        visit_field(Field),
        visit_module_name(ModuleName),
        visit_modtype_name(ModtypeName),
        visit_class_name(ClassName),
        visit_method_name(MethodName),
        visit_inst_var_name(InstVarName),
        visit_label_name(LabelName),
        visit_value_path(ValuePath),
        visit_constr_path(ConstrPath),
        visit_module_path(ModulePath),
        visit_modtype_path(ModtypePath),
        visit_class_path(ClassPath),
        visit_typeconstr_path(TypeconstrPath),
    );
}

/// Dispatch every node under `root` (inclusive) to `visitor`, in preorder.
///
/// Stops at the first raw node whose label has no typed kind.
pub fn walk<V: Visitor + ?Sized>(root: &SyntaxNode, visitor: &mut V) -> Result<(), SyntaxTreeError> {
    tracing::trace!(root = ?root.kind(), range = ?root.text_range(), "walking syntax tree");
    for raw in root.descendants() {
        Node::from_raw(raw)?.accept(visitor);
    }
    Ok(())
}
