//! Raw tree adapter: read-only view over the parse engine's output.
//!
//! The raw tree is a rowan green tree. A [`RawTree`] owns the immutable green
//! arena and can be shared across threads; [`SyntaxNode`] handles are created
//! per reader from it and expose label, children, range and parent.

use rowan::{GreenNode, NodeOrToken, TextRange};

use super::syntax_kind::{SyntaxKind, SyntaxNode, SyntaxToken};

/// An immutable raw tree produced by the parse engine.
///
/// Cloning is cheap (the green tree is reference counted) and the value is
/// `Send + Sync`, so every thread can obtain its own root with [`Self::syntax`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawTree {
    green: GreenNode,
}

impl RawTree {
    pub fn new(green: GreenNode) -> Self {
        Self { green }
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Full source text covered by the tree.
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }

    /// Re-resolve a [`NodeKey`] against a fresh root of this tree.
    pub fn node_for_key(&self, key: NodeKey) -> Option<SyntaxNode> {
        key.resolve(&self.syntax())
    }
}

/// Identity of a raw node within one tree: its raw label and source range.
///
/// Unlike a [`SyntaxNode`] handle, a key is `Send + Sync`, so external stores
/// (inferred types, indexes) can be keyed by node identity from any thread.
/// When nodes of the same label share a range the key names the innermost one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub label: u16,
    pub range: TextRange,
}

impl NodeKey {
    pub fn of(node: &SyntaxNode) -> Self {
        Self {
            label: node.label().0,
            range: node.text_range(),
        }
    }

    /// The taxonomy kind of the keyed node, if its label is known.
    pub fn kind(&self) -> Option<SyntaxKind> {
        SyntaxKind::from_raw(self.label)
    }

    /// Find the node this key names under `root`.
    pub fn resolve(&self, root: &SyntaxNode) -> Option<SyntaxNode> {
        if !root.text_range().contains_range(self.range) {
            return None;
        }
        let start = match root.covering_element(self.range) {
            NodeOrToken::Node(node) => node,
            NodeOrToken::Token(token) => token.parent()?,
        };
        start
            .ancestors()
            .find(|node| node.text_range() == self.range && node.label().0 == self.label)
    }
}

/// The four raw-tree operations the typed layer is built on.
///
/// `children`, `parent` and `text_range` come straight from rowan; this trait
/// adds the raw label and the helpers leaves need to read their tokens.
pub trait RawNodeExt {
    /// The raw grammar label, including tags the taxonomy does not know.
    fn label(&self) -> rowan::SyntaxKind;

    fn key(&self) -> NodeKey;

    /// Direct child tokens that are not whitespace or comments, in source order.
    fn significant_tokens(&self) -> Vec<SyntaxToken>;

    /// Check if this node has a direct child token of the specified kind.
    fn has_token(&self, kind: SyntaxKind) -> bool;
}

impl RawNodeExt for SyntaxNode {
    fn label(&self) -> rowan::SyntaxKind {
        self.green().kind()
    }

    fn key(&self) -> NodeKey {
        NodeKey::of(self)
    }

    fn significant_tokens(&self) -> Vec<SyntaxToken> {
        self.children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .collect()
    }

    fn has_token(&self, kind: SyntaxKind) -> bool {
        self.children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == kind)
    }
}
