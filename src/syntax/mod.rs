// Typed OCaml syntax tree over a rowan raw tree
pub mod ast;
pub mod builder;
pub mod error;
pub mod raw;
pub mod syntax_kind;
pub mod validate;
pub mod visitor;

pub use ast::{AstChildren, AstNode, Node};
pub use builder::TreeBuilder;
pub use error::SyntaxTreeError;
pub use raw::{NodeKey, RawNodeExt, RawTree};
pub use syntax_kind::{
    Family, OCamlLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};
pub use validate::{ValidationReport, validate, validate_all};
pub use visitor::{Visitor, walk};

// Re-export Position and Span from base for convenience
pub use crate::base::{LineIndex, Position, Span};
