//! Typed tree tests
//!
//! Tests for:
//! - Item and specification accessors
//! - Visitor dispatch over whole files
//! - Eager validation

pub mod tests_items;
pub mod tests_validation;
pub mod tests_visitor;
