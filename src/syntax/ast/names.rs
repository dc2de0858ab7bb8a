use super::*;

/// Text of every significant token under `node`, concatenated.
fn path_text(node: &SyntaxNode) -> String {
    node.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
        .map(|t| t.text().to_string())
        .collect()
}

// ============================================================================
// Names
// ============================================================================

ast_node!(
    /// A lowercase value name, or an operator in parentheses (`( + )`).
    ValueName,
    VALUE_NAME,
    visit_value_name
);

impl ValueName {
    /// The operator token of an operator name such as `( < )`.
    pub fn operator(&self) -> Option<SyntaxToken> {
        find_operator_token(&self.0)
    }

    pub fn is_operator(&self) -> bool {
        self.operator().is_some()
    }

    /// The name as written, with operator names normalised to `( op )`.
    ///
    /// `(+)`, `( + )`, `(<)` and `(\n=\n)` read `( + )`, `( + )`, `( < )`
    /// and `( = )`.
    pub fn name(&self) -> String {
        match self.operator() {
            Some(op) => format!("( {} )", op.text()),
            None => leaf_text(&self.0),
        }
    }
}

ast_node!(ConstrName, CONSTR_NAME, visit_constr_name);

impl ConstrName {
    pub fn name(&self) -> String {
        leaf_text(&self.0)
    }
}

ast_node!(TypeconstrName, TYPECONSTR_NAME, visit_typeconstr_name);

impl TypeconstrName {
    pub fn name(&self) -> String {
        leaf_text(&self.0)
    }
}

ast_node!(
    /// A record field reference, possibly qualified (`M.f`).
    Field,
    FIELD,
    visit_field
);

impl Field {
    pub fn name(&self) -> String {
        leaf_text(&self.0)
    }

    /// The field name without its module qualifier.
    pub fn short_name(&self) -> Option<String> {
        self.0
            .significant_tokens()
            .into_iter()
            .rev()
            .find(|t| t.kind() == SyntaxKind::LIDENT)
            .map(|t| t.text().to_string())
    }
}

ast_node!(ModuleName, MODULE_NAME, visit_module_name);

impl ModuleName {
    pub fn name(&self) -> String {
        leaf_text(&self.0)
    }
}

ast_node!(ModtypeName, MODTYPE_NAME, visit_modtype_name);

impl ModtypeName {
    pub fn name(&self) -> String {
        leaf_text(&self.0)
    }
}

ast_node!(ClassName, CLASS_NAME, visit_class_name);

impl ClassName {
    pub fn name(&self) -> String {
        leaf_text(&self.0)
    }
}

ast_node!(MethodName, METHOD_NAME, visit_method_name);

impl MethodName {
    pub fn name(&self) -> String {
        leaf_text(&self.0)
    }
}

ast_node!(InstVarName, INST_VAR_NAME, visit_inst_var_name);

impl InstVarName {
    pub fn name(&self) -> String {
        leaf_text(&self.0)
    }
}

ast_node!(
    /// Label of a labelled or optional parameter/argument (`~x`, `?x`).
    LabelName,
    LABEL_NAME,
    visit_label_name
);

impl LabelName {
    /// The label without its `~`/`?` marker.
    pub fn name(&self) -> String {
        find_token(&self.0, &[SyntaxKind::LIDENT])
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    has_token_method!(is_optional, QUESTION);
}

// ============================================================================
// Paths
// ============================================================================

ast_node!(
    /// `A.B.C`: a dotted sequence of module names.
    ModulePath,
    MODULE_PATH,
    visit_module_path
);

impl ModulePath {
    children_method!(module_names, ModuleName);

    pub fn segments(&self) -> Vec<String> {
        self.module_names().map(|m| m.name()).collect()
    }

    pub fn path(&self) -> String {
        self.segments().join(".")
    }
}

ast_node!(ValuePath, VALUE_PATH, visit_value_path);

impl ValuePath {
    first_child_method!(module_path, ModulePath);
    required_child_method!(value_name, ValueName);

    pub fn path(&self) -> String {
        path_text(&self.0)
    }
}

ast_node!(ConstrPath, CONSTR_PATH, visit_constr_path);

impl ConstrPath {
    first_child_method!(module_path, ModulePath);
    required_child_method!(constr_name, ConstrName);

    pub fn path(&self) -> String {
        path_text(&self.0)
    }
}

ast_node!(ModtypePath, MODTYPE_PATH, visit_modtype_path);

impl ModtypePath {
    first_child_method!(module_path, ModulePath);
    required_child_method!(modtype_name, ModtypeName);

    pub fn path(&self) -> String {
        path_text(&self.0)
    }
}

ast_node!(ClassPath, CLASS_PATH, visit_class_path);

impl ClassPath {
    first_child_method!(module_path, ModulePath);
    required_child_method!(class_name, ClassName);

    pub fn path(&self) -> String {
        path_text(&self.0)
    }
}

ast_node!(TypeconstrPath, TYPECONSTR_PATH, visit_typeconstr_path);

impl TypeconstrPath {
    first_child_method!(module_path, ModulePath);
    required_child_method!(typeconstr_name, TypeconstrName);

    pub fn path(&self) -> String {
        path_text(&self.0)
    }
}
