//! IDE features built on the typed tree.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a tree in, return data out
//! 2. **No editor types**: Uses our own types, converted at the editor boundary
//! 3. **Composable**: Built on typed accessors and the [`Visitor`](crate::syntax::Visitor)
//!
//! ## Usage
//!
//! ```ignore
//! use ocaml_syntax::ide::{StructureFilter, structure};
//!
//! let outline = structure(&tree, StructureFilter::default());
//! ```

mod let_binding;
mod navigation;
mod structure;
mod type_hint;

pub use let_binding::expand_structured_name;
pub use navigation::{ancestors, find_node_at_offset, node_path_at_offset};
pub use structure::{StructureEntry, StructureFilter, StructureKind, structure};
pub use type_hint::{TypeHint, TypeHintStore, UNKNOWN_TYPE, type_hint_at, type_hints_at};
