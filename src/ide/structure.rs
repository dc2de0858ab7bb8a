//! Structure view: an outline of the definitions of a file.
//!
//! Items and specifications become entries; nested structures and
//! signatures become children. Let items and type items group their
//! bindings under one entry (`let a, b`, `type t, u`).

use crate::base::{LineIndex, Span, TextRange};
use crate::syntax::ast::*;
use crate::syntax::{RawTree, Visitor};

/// What an outline entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Let,
    Function,
    Variable,
    Types,
    Type,
    Value,
    External,
    Exception,
    Module,
    ModuleType,
    Class,
    ClassType,
}

/// One node of the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureEntry {
    pub name: String,
    pub kind: StructureKind,
    pub range: TextRange,
    pub span: Span,
    pub children: Vec<StructureEntry>,
}

/// Toggles of the structure view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructureFilter {
    /// Drop let bindings that are not functions.
    pub hide_variables: bool,
}

impl StructureFilter {
    pub fn is_visible(&self, entry: &StructureEntry) -> bool {
        !(self.hide_variables && entry.kind == StructureKind::Variable)
    }
}

/// Outline of a whole file, in source order.
pub fn structure(tree: &RawTree, filter: StructureFilter) -> Vec<StructureEntry> {
    let index = LineIndex::new(&tree.text());
    let mut builder = StructureBuilder::new(&index, filter);
    for node in tree.syntax().children().filter_map(Node::cast) {
        node.accept(&mut builder);
    }
    builder.entries
}

struct StructureBuilder<'a> {
    index: &'a LineIndex,
    filter: StructureFilter,
    entries: Vec<StructureEntry>,
}

impl<'a> StructureBuilder<'a> {
    fn new(index: &'a LineIndex, filter: StructureFilter) -> Self {
        Self {
            index,
            filter,
            entries: Vec::new(),
        }
    }

    fn entry(&self, name: String, kind: StructureKind, node: &impl AstNode) -> StructureEntry {
        self.entry_at(name, kind, node.range())
    }

    fn entry_at(&self, name: String, kind: StructureKind, range: TextRange) -> StructureEntry {
        StructureEntry {
            name,
            kind,
            range,
            span: self.index.span(range),
            children: Vec::new(),
        }
    }

    fn push(&mut self, entry: StructureEntry) {
        if self.filter.is_visible(&entry) {
            self.entries.push(entry);
        }
    }

    /// Outline of a nested structure or signature.
    fn nested(&self, members: impl Iterator<Item = Node>) -> Vec<StructureEntry> {
        let mut inner = StructureBuilder::new(self.index, self.filter);
        for member in members {
            member.accept(&mut inner);
        }
        inner.entries
    }

    fn module_expr_children(&self, module_expr: Option<ModuleExpr>) -> Vec<StructureEntry> {
        match module_expr {
            Some(ModuleExpr::Struct(body)) => self.nested(body.items().map(Node::Item)),
            Some(ModuleExpr::Functor(functor)) => {
                self.module_expr_children(functor.module_expr().ok())
            }
            Some(ModuleExpr::Paren(paren)) => self.module_expr_children(paren.module_expr().ok()),
            _ => Vec::new(),
        }
    }

    fn module_type_children(&self, module_type: Option<ModuleType>) -> Vec<StructureEntry> {
        match module_type {
            Some(ModuleType::Sig(sig)) => self.nested(sig.specifications().map(Node::Specification)),
            Some(ModuleType::Functor(functor)) => {
                self.module_type_children(functor.module_types().last())
            }
            Some(ModuleType::With(with)) => self.module_type_children(with.module_type().ok()),
            Some(ModuleType::Paren(paren)) => self.module_type_children(paren.module_type().ok()),
            _ => Vec::new(),
        }
    }

    fn binding_entries(&self, bindings: AstChildren<LetBinding>) -> Vec<StructureEntry> {
        let mut children = Vec::new();
        for binding in bindings {
            let kind = if binding.is_function() {
                StructureKind::Function
            } else {
                StructureKind::Variable
            };
            for name in binding.bound_names() {
                let entry = self.entry_at(name.name(), kind, name.range());
                if self.filter.is_visible(&entry) {
                    children.push(entry);
                }
            }
        }
        children
    }

    fn typedef_entries(&self, typedefs: AstChildren<Typedef>) -> Vec<StructureEntry> {
        typedefs
            .filter_map(|def| {
                let name = def.typeconstr_name().ok()?.name();
                Some(self.entry(name, StructureKind::Type, &def))
            })
            .collect()
    }

    fn group(
        &mut self,
        keyword: &str,
        kind: StructureKind,
        node: &impl AstNode,
        children: Vec<StructureEntry>,
    ) {
        let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
        let mut entry = self.entry(format!("{keyword} {}", names.join(", ")), kind, node);
        entry.children = children;
        self.push(entry);
    }
}

impl Visitor for StructureBuilder<'_> {
    fn visit_let_item(&mut self, node: &LetItem) {
        let bindings = node.let_bindings();
        let names: Vec<String> = node
            .let_bindings()
            .map(|b| b.name().unwrap_or_else(|| "_".to_string()))
            .collect();
        let mut entry = self.entry(format!("let {}", names.join(", ")), StructureKind::Let, node);
        entry.children = self.binding_entries(bindings);
        self.push(entry);
    }

    fn visit_type_item(&mut self, node: &TypeItem) {
        let children = self.typedef_entries(node.typedefs());
        self.group("type", StructureKind::Types, node, children);
    }

    fn visit_type_spec(&mut self, node: &TypeSpec) {
        let children = self.typedef_entries(node.typedefs());
        self.group("type", StructureKind::Types, node, children);
    }

    fn visit_value_spec(&mut self, node: &ValueSpec) {
        if let Ok(name) = node.value_name() {
            let entry = self.entry(format!("val {}", name.name()), StructureKind::Value, node);
            self.push(entry);
        }
    }

    fn visit_external_item(&mut self, node: &ExternalItem) {
        if let Ok(name) = node.value_name() {
            let entry = self.entry(name.name(), StructureKind::External, node);
            self.push(entry);
        }
    }

    fn visit_external_spec(&mut self, node: &ExternalSpec) {
        if let Ok(name) = node.value_name() {
            let entry = self.entry(name.name(), StructureKind::External, node);
            self.push(entry);
        }
    }

    fn visit_exception_item(&mut self, node: &ExceptionItem) {
        if let Ok(name) = node.constr_decl().and_then(|decl| decl.constr_name()) {
            let entry = self.entry(name.name(), StructureKind::Exception, node);
            self.push(entry);
        }
    }

    fn visit_exception_spec(&mut self, node: &ExceptionSpec) {
        if let Ok(name) = node.constr_decl().and_then(|decl| decl.constr_name()) {
            let entry = self.entry(name.name(), StructureKind::Exception, node);
            self.push(entry);
        }
    }

    fn visit_module_item(&mut self, node: &ModuleItem) {
        let Ok(name) = node.module_name() else {
            return;
        };
        let mut entry = self.entry(name.name(), StructureKind::Module, node);
        entry.children = match node.module_expr() {
            Ok(module_expr) => self.module_expr_children(Some(module_expr)),
            Err(_) => self.module_type_children(node.module_type()),
        };
        self.push(entry);
    }

    fn visit_module_spec(&mut self, node: &ModuleSpec) {
        let Ok(name) = node.module_name() else {
            return;
        };
        let mut entry = self.entry(name.name(), StructureKind::Module, node);
        entry.children = self.module_type_children(node.module_type().ok());
        self.push(entry);
    }

    fn visit_module_type_item(&mut self, node: &ModuleTypeItem) {
        let Ok(name) = node.modtype_name() else {
            return;
        };
        let mut entry = self.entry(name.name(), StructureKind::ModuleType, node);
        entry.children = self.module_type_children(node.module_type());
        self.push(entry);
    }

    fn visit_module_type_spec(&mut self, node: &ModuleTypeSpec) {
        let Ok(name) = node.modtype_name() else {
            return;
        };
        let mut entry = self.entry(name.name(), StructureKind::ModuleType, node);
        entry.children = self.module_type_children(node.module_type());
        self.push(entry);
    }

    fn visit_class_item(&mut self, node: &ClassItem) {
        for binding in node.class_bindings() {
            if let Ok(name) = binding.class_name() {
                let entry = self.entry(name.name(), StructureKind::Class, &binding);
                self.push(entry);
            }
        }
    }

    fn visit_class_spec(&mut self, node: &ClassSpec) {
        for binding in node.class_spec_bindings() {
            if let Ok(name) = binding.class_name() {
                let entry = self.entry(name.name(), StructureKind::Class, &binding);
                self.push(entry);
            }
        }
    }

    fn visit_class_type_item(&mut self, node: &ClassTypeItem) {
        for def in node.class_type_defs() {
            if let Ok(name) = def.class_name() {
                let entry = self.entry(name.name(), StructureKind::ClassType, &def);
                self.push(entry);
            }
        }
    }

    fn visit_class_type_spec(&mut self, node: &ClassTypeSpec) {
        for def in node.class_type_defs() {
            if let Ok(name) = def.class_name() {
                let entry = self.entry(name.name(), StructureKind::ClassType, &def);
                self.push(entry);
            }
        }
    }
}
