//! Shared test helpers.
//!
//! There is no parser in this crate, so fixtures are built node by node
//! through [`TreeBuilder`](ocaml_syntax::TreeBuilder), with the source text in
//! a comment next to each one.

#![allow(dead_code)]
