//! Defects raised while wrapping or querying the typed tree.

use rowan::TextRange;
use thiserror::Error;

use super::syntax_kind::SyntaxKind;

/// A grammar/taxonomy inconsistency found while reading the tree.
///
/// These are never the result of ordinary missing syntax: optional children
/// are reported as `None` and lists as empty iterators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxTreeError {
    /// A required single-child accessor found no convertible child.
    #[error("{parent:?} at {range:?} is missing its required {expected} child")]
    MissingRequiredChild {
        parent: SyntaxKind,
        expected: &'static str,
        range: TextRange,
    },

    /// A raw node carries a label that maps to no typed node kind.
    #[error("raw label {label} at {range:?} has no node kind")]
    UnrecognizedLabel { label: u16, range: TextRange },
}

impl SyntaxTreeError {
    /// The source range of the node the defect was raised on.
    pub fn range(&self) -> TextRange {
        match self {
            Self::MissingRequiredChild { range, .. } | Self::UnrecognizedLabel { range, .. } => {
                *range
            }
        }
    }

    pub fn is_missing_child(&self) -> bool {
        matches!(self, Self::MissingRequiredChild { .. })
    }
}
