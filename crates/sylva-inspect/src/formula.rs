//! Formula recognition, deconstruction, and construction.
//!
//! A formula is a call whose head symbol is `~` or `:=`, carrying one
//! operand (one-sided, `~rhs`) or two (two-sided, `lhs ~ rhs`) and an
//! attached scope reference recording where it was created. The engine
//! here never evaluates inside that scope; it only attaches and reads
//! the handle.

use sylva_expr::{Call, Expr, ScopeRef};
use thiserror::Error;

use crate::calls::is_call_to;

/// Head symbols that mark a formula.
const FORMULA_HEADS: [&str; 2] = ["~", ":="];

/// Class tag attached to constructed formulas.
const FORMULA_CLASS: &str = "formula";

/// Errors raised by the formula accessors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    /// The input is not shaped like a formula at all.
    #[error("`x` is not a formula")]
    NotAFormula,

    /// Formula-shaped, but with an operand count outside {1, 2}.
    #[error("invalid formula: expected 1 or 2 operands, found {found}")]
    Malformed {
        /// The operand count actually present.
        found: usize,
    },
}

/// Returns true if `x` is shaped like a formula: a call headed by the
/// symbol `~` or `:=`.
///
/// This is a shape pre-check only; operand count is not examined.
#[must_use]
pub fn is_formula(x: &Expr) -> bool {
    FORMULA_HEADS.iter().any(|head| is_call_to(x, head))
}

/// Returns true if `x` is a one-sided formula: formula-shaped with
/// exactly one operand and no left-hand side.
#[must_use]
pub fn is_one_sided(x: &Expr) -> bool {
    match x {
        Expr::Call(call) => is_formula(x) && call.args.len() == 1,
        _ => false,
    }
}

fn formula_call(f: &Expr) -> Result<&Call, FormulaError> {
    match f {
        Expr::Call(call) if is_formula(f) => Ok(call),
        _ => Err(FormulaError::NotAFormula),
    }
}

/// Returns the right-hand side of a formula.
///
/// # Errors
///
/// [`FormulaError::NotAFormula`] if `f` is not formula-shaped;
/// [`FormulaError::Malformed`] if the operand count is not 1 or 2.
pub fn rhs(f: &Expr) -> Result<&Expr, FormulaError> {
    let call = formula_call(f)?;
    match call.args.as_slice() {
        [rhs] | [_, rhs] => Ok(rhs),
        other => Err(FormulaError::Malformed { found: other.len() }),
    }
}

/// Returns the left-hand side of a formula, or `None` for a one-sided
/// formula.
///
/// # Errors
///
/// [`FormulaError::NotAFormula`] if `f` is not formula-shaped;
/// [`FormulaError::Malformed`] if the operand count is not 1 or 2.
pub fn lhs(f: &Expr) -> Result<Option<&Expr>, FormulaError> {
    let call = formula_call(f)?;
    match call.args.as_slice() {
        [_] => Ok(None),
        [lhs, _] => Ok(Some(lhs)),
        other => Err(FormulaError::Malformed { found: other.len() }),
    }
}

/// Returns the scope reference attached to a formula, if any.
///
/// Reads whatever scope attribute is present; a formula built outside
/// [`make_one_sided`] may carry none.
///
/// # Errors
///
/// [`FormulaError::NotAFormula`] if `f` is not formula-shaped.
pub fn scope_of(f: &Expr) -> Result<Option<ScopeRef>, FormulaError> {
    Ok(formula_call(f)?.env)
}

/// Constructs a one-sided formula `~rhs` bound to `scope`.
///
/// The result is tagged with the formula class and carries `scope` as
/// its scope reference. This is the only node construction in the core.
#[must_use]
pub fn make_one_sided(rhs: Expr, scope: ScopeRef) -> Expr {
    let mut call = Call::new(Expr::symbol("~"), [rhs]);
    call.class = Some(FORMULA_CLASS.to_string());
    call.env = Some(scope);
    Expr::Call(call)
}
