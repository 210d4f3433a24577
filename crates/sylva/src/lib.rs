//! # Sylva
//!
//! Structural introspection for code-as-data expression trees.
//!
//! Sylva lets metaprogramming tooling ask structural questions about an
//! expression tree without re-deriving tree-walking logic at every call
//! site: "is this a call to `f`, possibly qualified as `ns::f` or
//! `obj$f`?", "what is the right-hand side of this formula, and in which
//! scope should it be evaluated?"
//!
//! ## Features
//!
//! - **Node classification**: total predicates over a closed node enum
//! - **Call pattern matching**: plain, qualification-prefixed, and
//!   namespace-pinned, with caller-supplied recognizers
//! - **Formulas**: recognition, left/right deconstruction, and one-sided
//!   construction bound to a host scope
//!
//! ## Quick Start
//!
//! ```rust
//! use sylva::prelude::*;
//!
//! // pkg::foo(1)
//! let call = Expr::call(
//!     Expr::call(
//!         Expr::symbol("::"),
//!         [Expr::symbol("pkg"), Expr::symbol("foo")],
//!     ),
//!     [Expr::integer([Some(1)])],
//! );
//!
//! assert!(is_qualified_call(&call));
//! assert!(matches_call(&call, |sym| symbol_equals(sym, "foo")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sylva_expr as expr;
pub use sylva_inspect as inspect;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sylva_expr::{
        Atomic, AtomicKind, AtomicValue, Call, Complex, Expr, List, ScopeRef, Symbol,
    };
    pub use sylva_inspect::{
        coerce_to_bool, has_name_at, is_atomic, is_call_to, is_empty, is_formula, is_list,
        is_null, is_object, is_one_sided, is_qualified_call, is_qualified_call_matching,
        is_scalar_atomic, is_string, is_symbolic, is_vector, lhs, make_one_sided,
        matches_call, matches_namespaced_call, names, rhs, scope_of, set_names,
        symbol_equals, symbol_from_string, FormulaError, TypeError, QUALIFIERS,
    };
}
