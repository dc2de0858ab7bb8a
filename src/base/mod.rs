//! Foundation types shared by the syntax and IDE layers.
//!
//! - [`Position`], [`Span`] - 0-indexed line/column locations
//! - [`LineIndex`] - byte offset to line/column conversion
//! - [`TextRange`], [`TextSize`] - byte offsets, re-exported from rowan
//!
//! This module has NO dependencies on other crate modules.

mod position;

pub use position::{LineIndex, Position, Span};
pub use rowan::{TextRange, TextSize};
