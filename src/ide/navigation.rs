//! Offset-based lookup of typed nodes.

use crate::base::TextSize;
use crate::syntax::SyntaxNode;
use crate::syntax::ast::{AstNode, Node};

/// The smallest typed node whose range covers `offset`.
///
/// At a boundary between two tokens the token to the right wins, unless it
/// is trivia and the left one is not.
pub fn find_node_at_offset(root: &SyntaxNode, offset: TextSize) -> Option<Node> {
    node_path_at_offset(root, offset).into_iter().next()
}

/// Every typed node covering `offset`, innermost first, ending at the root.
pub fn node_path_at_offset(root: &SyntaxNode, offset: TextSize) -> Vec<Node> {
    if !root.text_range().contains_inclusive(offset) {
        return Vec::new();
    }
    let token = root
        .token_at_offset(offset)
        .max_by_key(|token| !token.kind().is_trivia());
    let start = match token.and_then(|token| token.parent()) {
        Some(parent) => parent,
        None => root.clone(),
    };
    start.ancestors().filter_map(Node::cast).collect()
}

/// Typed ancestors of `node`, from its parent to the root.
pub fn ancestors(node: &Node) -> Vec<Node> {
    node.ancestors().collect()
}
