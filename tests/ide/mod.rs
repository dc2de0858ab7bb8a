//! IDE feature tests
//!
//! Tests for:
//! - Let binding names
//! - Structure view
//! - Type hints
//! - Offset lookup

pub mod tests_let_binding;
pub mod tests_navigation;
pub mod tests_structure;
pub mod tests_type_hint;
