//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each concrete node kind is a newtype over one [`SyntaxNode`] with typed
//! accessors for its children. Kinds that share a capability family are
//! gathered in a tagged enum per family ([`Expr`], [`Pattern`], ...), and
//! [`Node`] gathers the families and the standalone kinds.
//!
//! Accessors come in three shapes:
//! - required child: `Result<T, SyntaxTreeError>`, `MissingRequiredChild` when absent
//! - optional child: `Option<T>`
//! - child list: [`AstChildren<T>`] in source order
//!
//! Children are looked up lazily on each call; nothing is validated up front.

use std::marker::PhantomData;

use rowan::TextRange;

use super::error::SyntaxTreeError;
use super::raw::{NodeKey, RawNodeExt};
use super::syntax_kind::{Family, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken};
use super::visitor::Visitor;

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    /// Name used when reporting a missing child of this type.
    const NAME: &'static str;

    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    fn kind(&self) -> SyntaxKind {
        self.syntax().kind()
    }

    fn range(&self) -> TextRange {
        self.syntax().text_range()
    }

    /// Identity of the wrapped raw node, for external stores.
    fn key(&self) -> NodeKey {
        NodeKey::of(self.syntax())
    }

    fn family(&self) -> Option<Family> {
        self.kind().family()
    }

    /// Source text of the node, trivia included.
    fn text(&self) -> String {
        self.syntax().text().to_string()
    }
}

/// Iterator over the children of a node that convert to `N`, in source order.
#[derive(Debug, Clone)]
pub struct AstChildren<N> {
    inner: SyntaxNodeChildren,
    _marker: PhantomData<N>,
}

impl<N> AstChildren<N> {
    fn new(parent: &SyntaxNode) -> Self {
        Self {
            inner: parent.children(),
            _marker: PhantomData,
        }
    }
}

impl<N: AstNode> Iterator for AstChildren<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.inner.find_map(N::cast)
    }
}

// ============================================================================
// Accessor policies
// ============================================================================

/// First child convertible to `N`, or a `MissingRequiredChild` defect.
pub(crate) fn required_child<N: AstNode>(parent: &SyntaxNode) -> Result<N, SyntaxTreeError> {
    optional_child(parent).ok_or_else(|| {
        tracing::debug!(
            parent = ?parent.kind(),
            expected = N::NAME,
            range = ?parent.text_range(),
            "required child missing"
        );
        SyntaxTreeError::MissingRequiredChild {
            parent: parent.kind(),
            expected: N::NAME,
            range: parent.text_range(),
        }
    })
}

/// First child convertible to `N`, if any.
pub(crate) fn optional_child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
    parent.children().find_map(N::cast)
}

/// Every child convertible to `N`, in source order.
pub(crate) fn child_list<N: AstNode>(parent: &SyntaxNode) -> AstChildren<N> {
    AstChildren::new(parent)
}

/// Concatenated text of the significant tokens of a leaf node.
///
/// Whitespace and comments inside the leaf are dropped, so `M . x` reads `M.x`.
fn leaf_text(node: &SyntaxNode) -> String {
    node.significant_tokens()
        .iter()
        .map(|t| t.text())
        .collect()
}

/// First direct child token that can name an operator.
fn find_operator_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind().is_operator())
}

/// The tag of a polymorphic variant node: the identifier after its backquote.
fn poly_variant_tag(node: &SyntaxNode) -> Option<String> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .skip_while(|t| t.kind() != SyntaxKind::BACKQUOTE)
        .find(|t| matches!(t.kind(), SyntaxKind::UIDENT | SyntaxKind::LIDENT))
        .map(|t| t.text().to_string())
}

/// First token of one of the given kinds among the direct children.
fn find_token(node: &SyntaxNode, kinds: &[SyntaxKind]) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| kinds.contains(&t.kind()))
}

// ============================================================================
// Helper macros
// ============================================================================

/// Declare a concrete node kind: the newtype, its `AstNode` impl and its
/// `accept` entry point, which calls `$visit` on the visitor.
macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $visit:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            const NAME: &'static str = stringify!($name);

            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }

        impl $name {
            /// Dispatch to this kind's visit method.
            pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
                visitor.$visit(self)
            }
        }
    };
}

/// Declare a tagged enum over several node types.
///
/// The enum accepts the union of its members' labels and `accept` is an
/// exhaustive match forwarding to the member.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident, $label:literal, { $($variant:ident($ty:ident)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($ty)),+
        }

        impl AstNode for $name {
            const NAME: &'static str = $label;

            fn can_cast(kind: SyntaxKind) -> bool {
                $(<$ty as AstNode>::can_cast(kind))||+
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                let kind = node.kind();
                $(
                    if <$ty as AstNode>::can_cast(kind) {
                        return <$ty as AstNode>::cast(node).map(Self::$variant);
                    }
                )+
                None
            }

            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(it) => it.syntax()),+
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(node: $ty) -> Self {
                    Self::$variant(node)
                }
            }
        )+

        impl $name {
            /// Dispatch to the visit method of the wrapped kind.
            pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
                match self {
                    $(Self::$variant(it) => it.accept(visitor)),+
                }
            }
        }
    };
}

/// Macro to generate a method returning the required child of a specific AST type.
macro_rules! required_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the required `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Result<$type, SyntaxTreeError> {
            required_child(&self.0)
        }
    };
}

/// Macro to generate a method that finds the first child of a specific AST type.
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            optional_child(&self.0)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> AstChildren<$type> {
            child_list(&self.0)
        }
    };
}

/// Macro to generate boolean property methods that check for a specific token kind.
macro_rules! has_token_method {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("Check if this node has the `", stringify!($kind), "` token.")]
        pub fn $name(&self) -> bool {
            self.0.has_token(SyntaxKind::$kind)
        }
    };
}

mod classes;
mod expressions;
mod items;
mod modules;
mod names;
mod node;
mod patterns;
mod types;

pub use self::classes::*;
pub use self::expressions::*;
pub use self::items::*;
pub use self::modules::*;
pub use self::names::*;
pub use self::node::*;
pub use self::patterns::*;
pub use self::types::*;
