//! Eager validation of a whole tree.
//!
//! Accessors check their required children lazily, on each call. For batch
//! tools that want every defect up front, [`validate`] walks the tree once,
//! wraps every raw node and calls every required accessor, collecting the
//! failures instead of stopping at the first.

use rayon::prelude::*;

use super::ast::*;
use super::error::SyntaxTreeError;
use super::raw::RawTree;
use super::syntax_kind::SyntaxNode;
use super::visitor::Visitor;

/// Defects found by one eager validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of raw nodes wrapped (including unrecognised ones).
    pub nodes_checked: usize,
    /// Every defect, in preorder of the node it was raised on.
    pub errors: Vec<SyntaxTreeError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn missing_children(&self) -> impl Iterator<Item = &SyntaxTreeError> {
        self.errors.iter().filter(|e| e.is_missing_child())
    }
}

/// Validate every node under `root` (inclusive).
pub fn validate(root: &SyntaxNode) -> ValidationReport {
    let mut checker = RequiredChildren::default();
    let mut nodes_checked = 0;

    for raw in root.descendants() {
        nodes_checked += 1;
        match Node::from_raw(raw) {
            Ok(node) => node.accept(&mut checker),
            Err(err) => checker.errors.push(err),
        }
    }

    tracing::debug!(
        nodes = nodes_checked,
        defects = checker.errors.len(),
        "validated syntax tree"
    );

    ValidationReport {
        nodes_checked,
        errors: checker.errors,
    }
}

/// Validate many trees in parallel, one report per tree in input order.
pub fn validate_all(trees: &[RawTree]) -> Vec<ValidationReport> {
    trees.par_iter().map(|tree| validate(&tree.syntax())).collect()
}

/// Visitor calling the required accessors of each kind it is dispatched.
#[derive(Default)]
struct RequiredChildren {
    errors: Vec<SyntaxTreeError>,
}

impl RequiredChildren {
    fn record<T>(&mut self, result: Result<T, SyntaxTreeError>) {
        if let Err(err) = result {
            self.errors.push(err);
        }
    }
}

macro_rules! check_required {
    ($($visit:ident($ty:ident) => [$($accessor:ident),+]),+ $(,)?) => {
        $(
            fn $visit(&mut self, node: &$ty) {
                $(self.record(node.$accessor());)+
            }
        )+
    };
}

impl Visitor for RequiredChildren {
    check_required!(
        visit_value_path_expr(ValuePathExpr) => [value_path],
        visit_constr_expr(ConstrExpr) => [constr_path],
        visit_coerce_expr(CoerceExpr) => [expr],
        visit_field_access_expr(FieldAccessExpr) => [expr, field],
        visit_field_assign_expr(FieldAssignExpr) => [field],
        visit_apply_expr(ApplyExpr) => [function],
        visit_prefix_expr(PrefixExpr) => [expr],
        visit_for_expr(ForExpr) => [value_name],
        visit_let_expr(LetExpr) => [expr],
        visit_let_module_expr(LetModuleExpr) => [module_name, module_expr, expr],
        visit_local_open_expr(LocalOpenExpr) => [module_path],
        visit_assert_expr(AssertExpr) => [expr],
        visit_lazy_expr(LazyExpr) => [expr],
        visit_new_expr(NewExpr) => [class_path],
        visit_method_call_expr(MethodCallExpr) => [expr, method_name],
        visit_inst_var_assign_expr(InstVarAssignExpr) => [inst_var_name, expr],

        visit_value_name_pattern(ValueNamePattern) => [value_name],
        visit_alias_pattern(AliasPattern) => [pattern, value_name],
        visit_constr_pattern(ConstrPattern) => [constr_path],
        visit_lazy_pattern(LazyPattern) => [pattern],
        visit_exception_pattern(ExceptionPattern) => [pattern],
        visit_hash_type_pattern(HashTypePattern) => [typeconstr_path],

        visit_constr_type(ConstrType) => [typeconstr_path],
        visit_alias_type(AliasType) => [type_expr],
        visit_class_path_type(ClassPathType) => [class_path],
        visit_poly_type(PolyType) => [type_expr],
        visit_package_type(PackageType) => [modtype_path],

        visit_path_module_expr(PathModuleExpr) => [module_path],
        visit_functor_module_expr(FunctorModuleExpr) => [module_name, module_expr],
        visit_paren_module_expr(ParenModuleExpr) => [module_expr],
        visit_unpack_module_expr(UnpackModuleExpr) => [expr],
        visit_path_module_type(PathModuleType) => [modtype_path],
        visit_functor_module_type(FunctorModuleType) => [module_name],
        visit_with_module_type(WithModuleType) => [module_type],
        visit_paren_module_type(ParenModuleType) => [module_type],
        visit_typeof_module_type(TypeofModuleType) => [module_expr],

        visit_path_class_expr(PathClassExpr) => [class_path],
        visit_apply_class_expr(ApplyClassExpr) => [class_expr],
        visit_let_class_expr(LetClassExpr) => [class_expr],
        visit_path_class_type(PathClassType) => [class_path],
        visit_arrow_class_type(ArrowClassType) => [class_type],
        visit_inherit_field(InheritField) => [class_expr],
        visit_val_field(ValField) => [inst_var_name],
        visit_method_field(MethodField) => [method_name],
        visit_initializer_field(InitializerField) => [expr],
        visit_inherit_spec(InheritSpec) => [class_type],
        visit_val_field_spec(ValFieldSpec) => [inst_var_name, type_expr],
        visit_method_spec(MethodSpec) => [method_name, type_expr],
        visit_class_binding(ClassBinding) => [class_name, class_expr],
        visit_class_spec_binding(ClassSpecBinding) => [class_name, class_type],
        visit_class_type_def(ClassTypeDef) => [class_name, class_type],
        visit_method_type(MethodType) => [method_name, type_expr],

        visit_expr_item(ExprItem) => [expr],
        visit_external_item(ExternalItem) => [value_name, type_expr],
        visit_exception_item(ExceptionItem) => [constr_decl],
        visit_module_item(ModuleItem) => [module_name, module_expr],
        visit_module_type_item(ModuleTypeItem) => [modtype_name],
        visit_open_item(OpenItem) => [module_path],
        visit_include_item(IncludeItem) => [module_expr],

        visit_value_spec(ValueSpec) => [value_name, type_expr],
        visit_external_spec(ExternalSpec) => [value_name, type_expr],
        visit_exception_spec(ExceptionSpec) => [constr_decl],
        visit_module_spec(ModuleSpec) => [module_name, module_type],
        visit_module_type_spec(ModuleTypeSpec) => [modtype_name],
        visit_open_spec(OpenSpec) => [module_path],
        visit_include_spec(IncludeSpec) => [module_type],

        visit_let_binding(LetBinding) => [expr],
        visit_argument(Argument) => [label_name],
        visit_match_case(MatchCase) => [pattern, expr],
        visit_guard(Guard) => [expr],
        visit_field_expr(FieldExpr) => [field],
        visit_field_pattern(FieldPattern) => [field],
        visit_typedef(Typedef) => [typeconstr_name],
        visit_constr_decl(ConstrDecl) => [constr_name],
        visit_field_decl(FieldDecl) => [field, type_expr],
        visit_inst_var_override(InstVarOverride) => [inst_var_name],

        visit_value_path(ValuePath) => [value_name],
        visit_constr_path(ConstrPath) => [constr_name],
        visit_modtype_path(ModtypePath) => [modtype_name],
        visit_class_path(ClassPath) => [class_name],
        visit_typeconstr_path(TypeconstrPath) => [typeconstr_name],
    );
}
