//! # sylva-expr
//!
//! Expression-tree data model for the Sylva metaprogramming toolkit.
//!
//! This crate provides:
//! - A closed sum type for code-as-data expression nodes
//! - Typed optional attributes (names mapping, class tag, scope reference)
//! - Opaque handles to host-owned lexical scopes
//!
//! ## Design Principles
//!
//! - **Closed variants**: every consumer matches exhaustively, so adding a
//!   node kind is a compile error until all consumers handle it
//! - **Typed attributes**: the names mapping and scope reference are fields
//!   on the variants that carry them, not a generic attribute bag
//! - **Non-owning scopes**: lexical scopes live in the host runtime; this
//!   crate only stores copyable handles to them

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod expr;
pub mod scope;

pub use expr::{Atomic, AtomicKind, AtomicValue, Call, Complex, Expr, List, Symbol};
pub use scope::ScopeRef;
