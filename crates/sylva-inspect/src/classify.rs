//! Node classification predicates.
//!
//! Every predicate here is total: ill-shaped input classifies as `false`
//! rather than erroring. The two conversions with shape preconditions,
//! [`coerce_to_bool`] and [`symbol_from_string`], return [`TypeError`]
//! when the precondition fails.

use sylva_expr::{AtomicValue, Expr, Symbol};
use thiserror::Error;

/// Error raised when an operation demands a node shape the input lacks.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The input was not a length-1 logical atomic.
    #[error("`{argument}` must be a scalar logical")]
    ExpectedScalarLogical {
        /// Name of the offending argument.
        argument: &'static str,
    },

    /// The input was not a length-1 non-empty string atomic.
    #[error("`{argument}` must be a scalar string")]
    ExpectedScalarString {
        /// Name of the offending argument.
        argument: &'static str,
    },
}

/// Returns true if `x` is the null marker.
#[must_use]
pub fn is_null(x: &Expr) -> bool {
    matches!(x, Expr::Null)
}

/// Returns true if `x` can appear as code: a symbol or a call.
#[must_use]
pub fn is_symbolic(x: &Expr) -> bool {
    matches!(x, Expr::Symbol(_) | Expr::Call(_))
}

/// Returns true if `x` is an atomic vector of any kind.
#[must_use]
pub fn is_atomic(x: &Expr) -> bool {
    matches!(x, Expr::Atomic(_))
}

/// Returns true if `x` is an atomic vector holding exactly one scalar.
#[must_use]
pub fn is_scalar_atomic(x: &Expr) -> bool {
    is_atomic(x) && x.len() == 1
}

/// Returns true if `x` is a heterogeneous list.
#[must_use]
pub fn is_list(x: &Expr) -> bool {
    matches!(x, Expr::List(_))
}

/// Returns true if `x` is a vector: atomic or list.
#[must_use]
pub fn is_vector(x: &Expr) -> bool {
    matches!(x, Expr::Atomic(_) | Expr::List(_))
}

/// Returns true if `x` is a string atomic vector.
#[must_use]
pub fn is_string(x: &Expr) -> bool {
    matches!(
        x,
        Expr::Atomic(atomic) if matches!(atomic.values, AtomicValue::Str(_))
    )
}

/// Returns true if `x` carries a class-like tag.
#[must_use]
pub fn is_object(x: &Expr) -> bool {
    x.class().is_some()
}

/// Returns true if `x` has length 0.
#[must_use]
pub fn is_empty(x: &Expr) -> bool {
    x.is_empty()
}

/// Returns true if `x` is a symbol spelled exactly `name`.
///
/// Comparison is byte equality; no case folding or normalization.
#[must_use]
pub fn symbol_equals(x: &Expr, name: &str) -> bool {
    match x {
        Expr::Symbol(sym) => sym.name() == name,
        _ => false,
    }
}

/// Strictly coerces a length-1 logical atomic to a boolean.
///
/// The missing-value marker coerces to `false`. Anything that is not a
/// length-1 logical atomic is an error; there is no implicit truthiness
/// for other kinds.
///
/// # Errors
///
/// Returns [`TypeError::ExpectedScalarLogical`] for any other shape.
pub fn coerce_to_bool(x: &Expr) -> Result<bool, TypeError> {
    match x {
        Expr::Atomic(atomic) => match atomic.values {
            AtomicValue::Logical(ref values) if values.len() == 1 => {
                Ok(values[0].unwrap_or(false))
            }
            _ => Err(TypeError::ExpectedScalarLogical { argument: "x" }),
        },
        _ => Err(TypeError::ExpectedScalarLogical { argument: "x" }),
    }
}

/// Converts a length-1 string atomic into a symbol.
///
/// # Errors
///
/// Returns [`TypeError::ExpectedScalarString`] unless `x` is a length-1
/// string atomic with a non-empty value; symbol names are never empty.
pub fn symbol_from_string(x: &Expr) -> Result<Symbol, TypeError> {
    match x {
        Expr::Atomic(atomic) => match atomic.values {
            AtomicValue::Str(ref values) if values.len() == 1 && !values[0].is_empty() => {
                Ok(Symbol::new(values[0].clone()))
            }
            _ => Err(TypeError::ExpectedScalarString { argument: "x" }),
        },
        _ => Err(TypeError::ExpectedScalarString { argument: "x" }),
    }
}
