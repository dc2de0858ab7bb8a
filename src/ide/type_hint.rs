//! Type hints from an external annotation source.
//!
//! The tree itself carries no types. A compiler or annotation reader fills a
//! [`TypeHintStore`] keyed by [`NodeKey`]; [`type_hint_at`] then answers
//! "what is the type of the expression under the cursor".

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::base::{TextRange, TextSize};
use crate::syntax::ast::{LetBinding, Node};
use crate::syntax::{AstNode, NodeKey, SyntaxNode, Visitor};

/// Shown for nodes whose annotation has no type text.
pub const UNKNOWN_TYPE: &str = "<unknown type>";

/// Inferred types by node identity, shared between threads.
#[derive(Debug, Default)]
pub struct TypeHintStore {
    types: RwLock<FxHashMap<NodeKey, String>>,
}

impl TypeHintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the type of a node, replacing any previous annotation.
    pub fn insert(&self, key: NodeKey, ty: impl Into<String>) {
        self.types.write().insert(key, ty.into());
    }

    pub fn get(&self, key: &NodeKey) -> Option<String> {
        self.types.read().get(key).cloned()
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.types.read().contains_key(key)
    }

    pub fn remove(&self, key: &NodeKey) -> Option<String> {
        self.types.write().remove(key)
    }

    /// Drop every annotation, e.g. after the file was edited.
    pub fn clear(&self) {
        self.types.write().clear();
    }

    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}

/// A node under the cursor together with its annotated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeHint {
    pub key: NodeKey,
    pub range: TextRange,
    pub ty: String,
}

/// Every annotated node covering `offset`, innermost first.
///
/// Offsets inside whitespace or comments have no candidates.
pub fn type_hints_at(root: &SyntaxNode, offset: TextSize, store: &TypeHintStore) -> Vec<TypeHint> {
    if !root.text_range().contains_inclusive(offset) {
        return Vec::new();
    }
    let Some(token) = root.token_at_offset(offset).right_biased() else {
        return Vec::new();
    };
    if token.kind().is_trivia() {
        return Vec::new();
    }
    let Some(parent) = token.parent() else {
        return Vec::new();
    };

    let mut hints = Vec::new();
    for node in parent.ancestors().filter_map(Node::cast) {
        let mut target = HintTarget::default();
        node.accept(&mut target);
        let Some(key) = target.key else {
            continue;
        };
        // a let binding and its name share one annotation
        if hints.iter().any(|hint: &TypeHint| hint.key == key) {
            continue;
        }
        if let Some(ty) = store.get(&key) {
            let ty = if ty.is_empty() { UNKNOWN_TYPE.to_string() } else { ty };
            hints.push(TypeHint {
                key,
                range: key.range,
                ty,
            });
        }
    }
    tracing::trace!(offset = u32::from(offset), hints = hints.len(), "type hints at offset");
    hints
}

/// The innermost annotated node covering `offset`.
pub fn type_hint_at(root: &SyntaxNode, offset: TextSize, store: &TypeHintStore) -> Option<TypeHint> {
    type_hints_at(root, offset, store).into_iter().next()
}

/// Which key carries the annotation of a node.
///
/// Annotation sources type the name of a let binding, not the binding.
#[derive(Default)]
struct HintTarget {
    key: Option<NodeKey>,
}

impl Visitor for HintTarget {
    fn visit_let_binding(&mut self, node: &LetBinding) {
        self.key = node.name_identifier().map(|name| name.key());
    }

    fn visit_any(&mut self, node: &Node) {
        self.key = Some(node.key());
    }
}
