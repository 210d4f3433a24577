//! Named-element lookup on ordered containers.
//!
//! Thin accessors over the names mapping a container node may carry.
//! Length agreement between a container and its names mapping is the
//! caller's precondition; this layer only reads and writes the mapping.

use sylva_expr::Expr;

/// Returns the names mapping attached to `x`, if any.
#[must_use]
pub fn names(x: &Expr) -> Option<&[String]> {
    x.names()
}

/// Attaches or replaces the names mapping on `x`.
///
/// Callers must ensure `names.len()` equals the container's length; that
/// is not validated here. Leaf nodes cannot carry names and are left
/// unchanged.
pub fn set_names(x: &mut Expr, names: Vec<String>) {
    x.set_names(Some(names));
}

/// Returns true if element `i` of `x` has a non-empty name.
///
/// False when no names mapping is attached, when the entry at `i` is the
/// empty string, and when `i` is out of range.
#[must_use]
pub fn has_name_at(x: &Expr, i: usize) -> bool {
    names(x)
        .and_then(|names| names.get(i))
        .is_some_and(|name| !name.is_empty())
}
