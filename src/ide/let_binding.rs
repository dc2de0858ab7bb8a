//! Naming of let bindings.
//!
//! A binding either names one value (`let f x = ...`, `let ( + ) = ...`) or
//! destructures a pattern (`let (a, b) = ...`). Destructuring bindings are
//! named by the values they bind, joined with `,`: `let ((d, e), f)` is named
//! `d,e,f`. A binding that binds nothing (`let _ = ...`) is anonymous.

use rowan::WalkEvent;

use crate::syntax::ast::{AstNode, BoundName, LetBinding, ValueName};
use crate::syntax::{SyntaxKind, SyntaxNode};

impl LetBinding {
    /// The value names this binding binds, in source order.
    pub fn bound_names(&self) -> Vec<BoundName> {
        match (self.value_name(), self.pattern()) {
            (Some(name), _) => vec![BoundName::Value(name)],
            (None, Some(pattern)) => pattern.bound_names(),
            (None, None) => Vec::new(),
        }
    }

    /// `a`, `( + )`, `b,c`; `None` when nothing is bound.
    pub fn name(&self) -> Option<String> {
        let names = self.bound_names();
        if names.is_empty() {
            return None;
        }
        Some(
            names
                .iter()
                .map(BoundName::name)
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// The name leaf, for bindings of a single value name only.
    pub fn name_identifier(&self) -> Option<ValueName> {
        self.value_name()
    }

    /// `module.name`, or `None` for an anonymous binding.
    pub fn qualified_name(&self, module: &str) -> Option<String> {
        self.name().map(|name| format!("{module}.{name}"))
    }

    pub fn is_anonymous(&self) -> bool {
        self.bound_names().is_empty()
    }

    /// Check if the binding defines a function: it takes parameters or its
    /// body is a `fun`/`function` expression.
    pub fn is_function(&self) -> bool {
        self.parameters().next().is_some() || self.expr().is_ok_and(|expr| expr.is_function())
    }

    pub fn is_variable(&self) -> bool {
        !self.is_function()
    }

    /// Check if the binding belongs to a `let` item at the top of an
    /// implementation file.
    pub fn is_global(&self) -> bool {
        let Some(item) = self.syntax().parent() else {
            return false;
        };
        item.kind() == SyntaxKind::LET_ITEM
            && item
                .parent()
                .is_some_and(|root| root.kind() == SyntaxKind::IMPLEMENTATION)
    }

    /// Bindings of the `let ... in` expressions in this binding's body.
    ///
    /// `let a = let b = 5 in let c = 6 in b * c` yields `b` then `c`. The
    /// bodies of the nested bindings themselves are not searched.
    pub fn nested_let_bindings(&self) -> Vec<LetBinding> {
        let Ok(body) = self.expr() else {
            return Vec::new();
        };
        collect_let_expr_bindings(body.syntax())
    }
}

fn collect_let_expr_bindings(body: &SyntaxNode) -> Vec<LetBinding> {
    let mut found = Vec::new();
    let mut walk = body.preorder();
    while let Some(event) = walk.next() {
        let WalkEvent::Enter(node) = event else {
            continue;
        };
        if let Some(binding) = LetBinding::cast(node.clone()) {
            let in_let_expr = node
                .parent()
                .is_some_and(|parent| parent.kind() == SyntaxKind::LET_EXPR);
            if in_let_expr {
                found.push(binding);
            }
            walk.skip_subtree();
        }
    }
    found
}

/// Split a structured binding name into the names it is made of.
///
/// With `qualified`, the module prefix of `name` is put back on every part:
/// `Dummy.a,b` expands to `Dummy.a` and `Dummy.b`.
pub fn expand_structured_name(name: &str, qualified: bool) -> Vec<String> {
    let (prefix, names) = if qualified {
        split_module_prefix(name)
    } else {
        ("", name)
    };
    names
        .split(',')
        .filter(|part| !part.is_empty())
        .map(|part| format!("{prefix}{part}"))
        .collect()
}

/// `Dummy.a,( +. )` splits into `Dummy.` and `a,( +. )`.
fn split_module_prefix(name: &str) -> (&str, &str) {
    let head_end = name.find([',', '(']).unwrap_or(name.len());
    match name[..head_end].rfind('.') {
        Some(dot) => name.split_at(dot + 1),
        None => ("", name),
    }
}
