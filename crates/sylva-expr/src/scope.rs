//! Opaque scope-reference handles.
//!
//! Lexical scopes are created, owned, and collected by the host runtime.
//! This module only defines the lightweight handle that expression nodes
//! carry to point at one.

use std::fmt;

/// A non-owning reference to a lexical scope in the host runtime.
///
/// This is a lightweight 32-bit handle that can be copied freely. The
/// core never creates, destroys, or dereferences scopes; it only attaches
/// a handle to a formula node and reads it back.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeRef(u32);

impl ScopeRef {
    /// The process-wide default scope.
    pub const GLOBAL: ScopeRef = ScopeRef(0);

    /// Creates a handle from a raw scope identifier.
    ///
    /// Identifiers are assigned by the host runtime; this crate attaches
    /// no meaning to them beyond equality.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier of this handle.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ScopeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scope({})", self.0)
    }
}

impl fmt::Display for ScopeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<scope:{}>", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_equality() {
        let s1 = ScopeRef::new(7);
        let s2 = ScopeRef::new(7);
        let s3 = ScopeRef::new(8);

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
        assert_ne!(s1, ScopeRef::GLOBAL);
    }

    #[test]
    fn test_scope_size() {
        // Handles stay pointer-free and 4 bytes wide
        assert_eq!(std::mem::size_of::<ScopeRef>(), 4);
    }
}
