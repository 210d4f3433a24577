//! Call pattern matching.
//!
//! Recognizes plain calls, qualification-prefixed calls such as
//! `pkg::fn(...)` or `obj$fn(...)`, and calls matching a caller-supplied
//! recognizer either directly or through a qualification prefix.
//!
//! A qualification prefix is structurally a nested call: in `pkg::fn(x)`
//! the outer call's head is itself the call `::`(`pkg`, `fn`). Every
//! matcher below peels that one layer through [`qualifying_head`] before
//! inspecting the name beneath it.
//!
//! All matchers are total queries: ill-shaped input returns `false`.

use sylva_expr::{Call, Expr};

use crate::classify::symbol_equals;

/// The four qualification prefixes recognized in call position.
pub const QUALIFIERS: [&str; 4] = ["$", "@", "::", ":::"];

/// Returns true if `x` is a call whose head is the symbol `name`.
///
/// Covers both function-application and pairlist shapes, which the tree
/// model represents uniformly as calls.
#[must_use]
pub fn is_call_to(x: &Expr, name: &str) -> bool {
    match x {
        Expr::Call(call) => symbol_equals(&call.head, name),
        _ => false,
    }
}

/// Peels the qualification layer off a call's head.
///
/// Returns the qualifying call (`::`(`pkg`, `fn`) in `pkg::fn(...)`) when
/// `x` is a call whose head is itself a call to one of [`QUALIFIERS`].
fn qualifying_head(x: &Expr) -> Option<&Call> {
    let Expr::Call(call) = x else {
        return None;
    };
    let Expr::Call(head) = call.head.as_ref() else {
        return None;
    };
    QUALIFIERS
        .iter()
        .any(|qualifier| symbol_equals(&head.head, qualifier))
        .then_some(head)
}

/// Returns true if `x` is a call wrapped in a qualification prefix,
/// such as `pkg::fn(...)`, `obj$fn(...)`, or `obj@fn(...)`.
#[must_use]
pub fn is_qualified_call(x: &Expr) -> bool {
    qualifying_head(x).is_some()
}

/// Returns true if `x` is a qualified call whose right-hand name
/// satisfies `recognizer`.
///
/// The recognizer sees the second sub-argument of the qualifying head:
/// `fn` in `pkg::fn(...)`. A qualifying call with fewer than two
/// sub-arguments never matches.
pub fn is_qualified_call_matching(x: &Expr, recognizer: impl Fn(&Expr) -> bool) -> bool {
    match qualifying_head(x) {
        Some(head) => head.args.get(1).is_some_and(recognizer),
        None => false,
    }
}

/// Returns true if `x` is a call to something matching `recognizer`,
/// plainly or through a qualification prefix.
pub fn matches_call(x: &Expr, recognizer: impl Fn(&Expr) -> bool) -> bool {
    match x {
        Expr::Call(call) => {
            recognizer(&call.head) || is_qualified_call_matching(x, recognizer)
        }
        _ => false,
    }
}

/// Like [`matches_call`], but a qualified match must use `::` with
/// `namespace` as its left operand.
///
/// An unqualified call still matches when its bare head satisfies
/// `recognizer`; the namespace restriction only bites when a
/// qualification prefix is present.
pub fn matches_namespaced_call(
    x: &Expr,
    recognizer: impl Fn(&Expr) -> bool,
    namespace: &str,
) -> bool {
    let Expr::Call(call) = x else {
        return false;
    };
    if recognizer(&call.head) {
        return true;
    }
    match qualifying_head(x) {
        Some(head) if symbol_equals(&head.head, "::") => {
            matches!(
                head.args.as_slice(),
                [ns, name, ..] if symbol_equals(ns, namespace) && recognizer(name)
            )
        }
        _ => false,
    }
}
