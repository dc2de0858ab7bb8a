//! Event interface a parse engine drives to produce a [`RawTree`].
//!
//! Builds a rowan GreenNode tree from start/token/finish events. The builder
//! does not check the grammar: labels that the taxonomy cannot wrap surface
//! later as `UnrecognizedLabel` when the node is read.

use rowan::{Checkpoint, GreenNodeBuilder};

use super::raw::RawTree;
use super::syntax_kind::SyntaxKind;

/// Green tree builder keyed by [`SyntaxKind`]
pub struct TreeBuilder {
    builder: GreenNodeBuilder<'static>,
    depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            depth: 0,
        }
    }

    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        self.builder.start_node(kind.into());
        self.depth += 1;
        self
    }

    /// Start a node with a raw tag, bypassing the taxonomy.
    pub fn start_raw_node(&mut self, label: u16) -> &mut Self {
        self.builder.start_node(rowan::SyntaxKind(label));
        self.depth += 1;
        self
    }

    /// Close the innermost open node.
    ///
    /// # Panics
    ///
    /// Panics if no node is open.
    pub fn finish_node(&mut self) -> &mut Self {
        assert!(self.depth > 0, "finish_node called with no open node");
        self.builder.finish_node();
        self.depth -= 1;
        self
    }

    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        self.builder.token(kind.into(), text);
        self
    }

    pub fn whitespace(&mut self, text: &str) -> &mut Self {
        self.token(SyntaxKind::WHITESPACE, text)
    }

    /// Build a complete node: start, run `build` for its children, finish.
    pub fn node(&mut self, kind: SyntaxKind, build: impl FnOnce(&mut Self)) -> &mut Self {
        self.start_node(kind);
        build(self);
        self.finish_node()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        self.builder.checkpoint()
    }

    /// Wrap everything emitted since `checkpoint` in a new node.
    pub fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) -> &mut Self {
        self.builder.start_node_at(checkpoint, kind.into());
        self.depth += 1;
        self
    }

    /// Number of nodes started but not yet finished.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Take the finished tree.
    ///
    /// # Panics
    ///
    /// Panics if a node is still open, or if the events did not produce
    /// exactly one root node.
    pub fn finish(self) -> RawTree {
        assert_eq!(self.depth, 0, "finish called with {} open node(s)", self.depth);
        let green = self.builder.finish();
        tracing::trace!(kind = ?green.kind(), "finished raw tree");
        RawTree::new(green)
    }
}
