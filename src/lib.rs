//! # ocaml-syntax
//!
//! Typed syntax tree for OCaml source, layered over an untyped rowan tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Outline, type hints, offset lookup
//!   ↓
//! syntax    → SyntaxKind taxonomy, raw tree, typed AST, Visitor, validation
//!   ↓
//! base      → Primitives (Position, Span, LineIndex, TextRange)
//! ```
//!
//! A parse engine drives a [`syntax::TreeBuilder`] to produce a
//! [`syntax::RawTree`]. Typed views are created on demand with
//! [`syntax::Node::from_raw`] or [`syntax::AstNode::cast`]; required children
//! are checked when their accessor is called, or all at once with
//! [`syntax::validate`].

// ============================================================================
// MODULES (dependency order: base → syntax → ide)
// ============================================================================

/// Foundation types: Position, Span, LineIndex
pub mod base;

/// Syntax: kinds, raw tree, typed AST, visitor, validation
pub mod syntax;

/// IDE features: structure view, type hints, navigation
pub mod ide;

// Re-export foundation types
pub use base::{LineIndex, Position, Span, TextRange, TextSize};

// Re-export the core of the typed tree
pub use syntax::{
    AstNode, Family, Node, NodeKey, RawTree, SyntaxKind, SyntaxNode, SyntaxTreeError,
    TreeBuilder, Visitor,
};
