//! Static information about a compiled expression.

use rockstar_core::{ValueKind, ValueKinds};

/// What the generator knows about the value an expression leaves on the
/// stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprInfo {
    /// Kinds the value may have at runtime.
    pub kinds: ValueKinds,
}

impl ExprInfo {
    pub fn new(kinds: ValueKinds) -> Self {
        Self { kinds }
    }

    pub fn of(kind: ValueKind) -> Self {
        Self::new(kind.as_kinds())
    }

    pub fn any() -> Self {
        Self::new(ValueKinds::ANY)
    }

    pub fn is_number(&self) -> bool {
        self.kinds.is_exactly(ValueKind::Number)
    }

    pub fn is_text(&self) -> bool {
        self.kinds.is_exactly(ValueKind::Text)
    }
}
