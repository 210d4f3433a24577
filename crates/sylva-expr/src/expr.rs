//! Expression node types.
//!
//! This module defines the code-as-data tree shape consumed by the
//! introspection layer: symbols, calls, atomic vectors, lists, and the
//! null marker, plus the typed attributes some of them carry.

use std::fmt;

use crate::scope::ScopeRef;

/// A node in the code-as-data expression tree.
///
/// This enum represents all possible node shapes. Calls cover both
/// function-application and pairlist forms uniformly; formulas are calls
/// whose head is the `~` or `:=` symbol, recognized by shape rather than
/// stored as a distinct variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // === Leaves ===
    /// The canonical empty/absent marker.
    Null,

    /// A name that stands for a binding, compared by exact spelling.
    Symbol(Symbol),

    // === Containers ===
    /// Function application or pairlist: a head plus ordered arguments.
    Call(Call),

    /// A homogeneous vector of scalar values.
    Atomic(Atomic),

    /// A heterogeneous ordered container.
    List(List),
}

/// A symbol node.
///
/// Invariant: the name is never the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    /// Creates a symbol from a non-empty name.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `name` is empty.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "symbol names must be non-empty");
        Self { name }
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A call node: a head expression applied to ordered arguments.
///
/// The head is itself an expression and may be a nested qualified-access
/// call such as `pkg::fn` or `obj$fn`. The optional attributes are the
/// only ones this model carries: the per-argument names mapping, a
/// class-like tag, and a scope reference (present on formula nodes).
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The expression in call position.
    pub head: Box<Expr>,
    /// The ordered arguments, head excluded.
    pub args: Vec<Expr>,
    /// Per-argument names; `None` means every argument is unnamed.
    pub names: Option<Vec<String>>,
    /// Class-like tag, e.g. `"formula"`.
    pub class: Option<String>,
    /// Scope reference attached to formula nodes.
    pub env: Option<ScopeRef>,
}

impl Call {
    /// Creates a call with no attributes attached.
    pub fn new(head: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            head: Box::new(head),
            args: args.into_iter().collect(),
            names: None,
            class: None,
            env: None,
        }
    }
}

/// A complex scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

/// The scalar kind of an atomic vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomicKind {
    /// Three-valued booleans (`true`, `false`, missing).
    Logical,
    /// Signed integers, with a missing marker.
    Integer,
    /// Double-precision floats.
    Real,
    /// Complex numbers.
    Complex,
    /// Character strings.
    Str,
    /// Raw bytes.
    Raw,
}

impl fmt::Display for AtomicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AtomicKind::Logical => "logical",
            AtomicKind::Integer => "integer",
            AtomicKind::Real => "real",
            AtomicKind::Complex => "complex",
            AtomicKind::Str => "string",
            AtomicKind::Raw => "raw",
        };
        write!(f, "{name}")
    }
}

/// The values of an atomic vector, one payload per kind.
///
/// `None` entries in the logical and integer payloads are the host
/// runtime's missing-value marker.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomicValue {
    /// Logical values with missing markers.
    Logical(Vec<Option<bool>>),
    /// Integer values with missing markers.
    Integer(Vec<Option<i64>>),
    /// Real values.
    Real(Vec<f64>),
    /// Complex values.
    Complex(Vec<Complex>),
    /// String values.
    Str(Vec<String>),
    /// Raw bytes.
    Raw(Vec<u8>),
}

impl AtomicValue {
    /// Returns the scalar kind of this payload.
    #[must_use]
    pub fn kind(&self) -> AtomicKind {
        match self {
            AtomicValue::Logical(_) => AtomicKind::Logical,
            AtomicValue::Integer(_) => AtomicKind::Integer,
            AtomicValue::Real(_) => AtomicKind::Real,
            AtomicValue::Complex(_) => AtomicKind::Complex,
            AtomicValue::Str(_) => AtomicKind::Str,
            AtomicValue::Raw(_) => AtomicKind::Raw,
        }
    }

    /// Returns the number of scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            AtomicValue::Logical(v) => v.len(),
            AtomicValue::Integer(v) => v.len(),
            AtomicValue::Real(v) => v.len(),
            AtomicValue::Complex(v) => v.len(),
            AtomicValue::Str(v) => v.len(),
            AtomicValue::Raw(v) => v.len(),
        }
    }

    /// Returns true if the payload holds no scalars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An atomic vector node.
#[derive(Debug, Clone, PartialEq)]
pub struct Atomic {
    /// The homogeneous scalar payload.
    pub values: AtomicValue,
    /// Per-element names; `None` means every element is unnamed.
    pub names: Option<Vec<String>>,
    /// Class-like tag.
    pub class: Option<String>,
}

impl Atomic {
    /// Creates an atomic vector with no attributes attached.
    #[must_use]
    pub fn new(values: AtomicValue) -> Self {
        Self {
            values,
            names: None,
            class: None,
        }
    }
}

/// A heterogeneous list node.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    /// The ordered elements.
    pub elements: Vec<Expr>,
    /// Per-element names; `None` means every element is unnamed.
    pub names: Option<Vec<String>>,
    /// Class-like tag.
    pub class: Option<String>,
}

impl List {
    /// Creates a list with no attributes attached.
    pub fn new(elements: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            names: None,
            class: None,
        }
    }
}

impl Expr {
    /// Returns the host-runtime length of this node.
    ///
    /// Null has length 0, a symbol has length 1, a call counts its head
    /// plus its arguments, and atomics and lists count their elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Expr::Null => 0,
            Expr::Symbol(_) => 1,
            Expr::Call(call) => 1 + call.args.len(),
            Expr::Atomic(atomic) => atomic.values.len(),
            Expr::List(list) => list.elements.len(),
        }
    }

    /// Returns true if this node has length 0.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the names mapping, if one is attached.
    #[must_use]
    pub fn names(&self) -> Option<&[String]> {
        match self {
            Expr::Null | Expr::Symbol(_) => None,
            Expr::Call(call) => call.names.as_deref(),
            Expr::Atomic(atomic) => atomic.names.as_deref(),
            Expr::List(list) => list.names.as_deref(),
        }
    }

    /// Attaches or removes the names mapping.
    ///
    /// Leaf nodes cannot carry names; setting names on them is a no-op.
    pub fn set_names(&mut self, names: Option<Vec<String>>) {
        match self {
            Expr::Null | Expr::Symbol(_) => {}
            Expr::Call(call) => call.names = names,
            Expr::Atomic(atomic) => atomic.names = names,
            Expr::List(list) => list.names = names,
        }
    }

    /// Returns the class tag, if one is attached.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        match self {
            Expr::Null | Expr::Symbol(_) => None,
            Expr::Call(call) => call.class.as_deref(),
            Expr::Atomic(atomic) => atomic.class.as_deref(),
            Expr::List(list) => list.class.as_deref(),
        }
    }

    /// Returns the attached scope reference, if any.
    ///
    /// Only call nodes carry one; it is attached by formula construction.
    #[must_use]
    pub fn scope(&self) -> Option<ScopeRef> {
        match self {
            Expr::Call(call) => call.env,
            _ => None,
        }
    }

    /// Extracts the symbol if this node is one.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Expr::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Extracts the call if this node is one.
    #[must_use]
    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Extracts the atomic vector if this node is one.
    #[must_use]
    pub fn as_atomic(&self) -> Option<&Atomic> {
        match self {
            Expr::Atomic(atomic) => Some(atomic),
            _ => None,
        }
    }

    /// Extracts the list if this node is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Expr::List(list) => Some(list),
            _ => None,
        }
    }
}

// === Convenience Constructors ===

impl Expr {
    /// Creates a symbol node.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(Symbol::new(name))
    }

    /// Creates a call node with unnamed arguments and no attributes.
    pub fn call(head: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Call(Call::new(head, args))
    }

    /// Creates a logical atomic vector.
    pub fn logical(values: impl IntoIterator<Item = Option<bool>>) -> Self {
        Expr::Atomic(Atomic::new(AtomicValue::Logical(
            values.into_iter().collect(),
        )))
    }

    /// Creates an integer atomic vector.
    pub fn integer(values: impl IntoIterator<Item = Option<i64>>) -> Self {
        Expr::Atomic(Atomic::new(AtomicValue::Integer(
            values.into_iter().collect(),
        )))
    }

    /// Creates a real atomic vector.
    pub fn real(values: impl IntoIterator<Item = f64>) -> Self {
        Expr::Atomic(Atomic::new(AtomicValue::Real(values.into_iter().collect())))
    }

    /// Creates a complex atomic vector.
    pub fn complex(values: impl IntoIterator<Item = Complex>) -> Self {
        Expr::Atomic(Atomic::new(AtomicValue::Complex(
            values.into_iter().collect(),
        )))
    }

    /// Creates a string atomic vector.
    pub fn strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Expr::Atomic(Atomic::new(AtomicValue::Str(
            values.into_iter().map(Into::into).collect(),
        )))
    }

    /// Creates a raw atomic vector.
    pub fn raw(values: impl IntoIterator<Item = u8>) -> Self {
        Expr::Atomic(Atomic::new(AtomicValue::Raw(values.into_iter().collect())))
    }

    /// Creates a list node.
    pub fn list(elements: impl IntoIterator<Item = Expr>) -> Self {
        Expr::List(List::new(elements))
    }
}
