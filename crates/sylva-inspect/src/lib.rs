//! # sylva-inspect
//!
//! Introspection and pattern matching over Sylva expression trees.
//!
//! This crate provides:
//! - Node classification predicates and strict scalar coercion
//! - Named-element lookup on ordered containers
//! - Call pattern matching, plain and qualification-aware, with
//!   caller-supplied recognizers
//! - Formula recognition, deconstruction, and one-sided construction
//!
//! ## Design Principles
//!
//! - **Queries, not validation**: matcher and classifier predicates are
//!   total and degrade ill-shaped input to `false`
//! - **Explicit failures**: the two operations with shape preconditions
//!   (`coerce_to_bool`, the formula accessors) return typed errors
//! - **Read-only**: nothing here rewrites a tree; the only writes are the
//!   names setter and one-sided formula construction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attrs;
pub mod calls;
pub mod classify;
pub mod formula;

#[cfg(test)]
mod proptests;

pub use attrs::{has_name_at, names, set_names};
pub use calls::{
    is_call_to, is_qualified_call, is_qualified_call_matching, matches_call,
    matches_namespaced_call, QUALIFIERS,
};
pub use classify::{
    coerce_to_bool, is_atomic, is_empty, is_list, is_null, is_object, is_scalar_atomic,
    is_string, is_symbolic, is_vector, symbol_equals, symbol_from_string, TypeError,
};
pub use formula::{
    is_formula, is_one_sided, lhs, make_one_sided, rhs, scope_of, FormulaError,
};
