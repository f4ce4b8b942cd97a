//! Runtime type tags and compile-time kind sets.

use bitflags::bitflags;
use std::fmt;

/// The type tag of a [`Value`](crate::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Text,
    Boolean,
    Mysterious,
    Null,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Text => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Mysterious => "mysterious",
            ValueKind::Null => "null",
        }
    }

    pub fn as_kinds(self) -> ValueKinds {
        match self {
            ValueKind::Number => ValueKinds::NUMBER,
            ValueKind::Text => ValueKinds::TEXT,
            ValueKind::Boolean => ValueKinds::BOOLEAN,
            ValueKind::Mysterious => ValueKinds::MYSTERIOUS,
            ValueKind::Null => ValueKinds::NULL,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// The set of kinds an expression may evaluate to.
    ///
    /// The code generator uses this to pick typed instructions when an
    /// operand is guaranteed to be a number, to reject operand pairs that
    /// can never work, and to fall back to tag-checked instructions
    /// everywhere else. Storage slots default to [`ValueKinds::ANY`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ValueKinds: u8 {
        const NUMBER = 1 << 0;
        const TEXT = 1 << 1;
        const BOOLEAN = 1 << 2;
        const MYSTERIOUS = 1 << 3;
        const NULL = 1 << 4;
        const ANY = Self::NUMBER.bits()
            | Self::TEXT.bits()
            | Self::BOOLEAN.bits()
            | Self::MYSTERIOUS.bits()
            | Self::NULL.bits();
    }
}

impl ValueKinds {
    /// The kind, when exactly one is possible.
    pub fn single(self) -> Option<ValueKind> {
        if self == ValueKinds::NUMBER {
            Some(ValueKind::Number)
        } else if self == ValueKinds::TEXT {
            Some(ValueKind::Text)
        } else if self == ValueKinds::BOOLEAN {
            Some(ValueKind::Boolean)
        } else if self == ValueKinds::MYSTERIOUS {
            Some(ValueKind::Mysterious)
        } else if self == ValueKinds::NULL {
            Some(ValueKind::Null)
        } else {
            None
        }
    }

    /// True when every possible value has `kind`.
    pub fn is_exactly(self, kind: ValueKind) -> bool {
        self == kind.as_kinds()
    }

    pub fn may_be(self, kind: ValueKind) -> bool {
        self.contains(kind.as_kinds())
    }

    /// Human readable description for diagnostics.
    pub fn describe(self) -> String {
        match self.single() {
            Some(kind) => kind.name().to_string(),
            None if self == ValueKinds::ANY => "any value".to_string(),
            None => {
                let names: Vec<&str> = [
                    ValueKind::Number,
                    ValueKind::Text,
                    ValueKind::Boolean,
                    ValueKind::Mysterious,
                    ValueKind::Null,
                ]
                .into_iter()
                .filter(|k| self.may_be(*k))
                .map(ValueKind::name)
                .collect();
                names.join(" or ")
            }
        }
    }
}

impl From<ValueKind> for ValueKinds {
    fn from(kind: ValueKind) -> Self {
        kind.as_kinds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_only_for_one_flag() {
        assert_eq!(ValueKinds::TEXT.single(), Some(ValueKind::Text));
        assert_eq!((ValueKinds::TEXT | ValueKinds::NUMBER).single(), None);
        assert_eq!(ValueKinds::ANY.single(), None);
    }

    #[test]
    fn any_may_be_everything() {
        for kind in [
            ValueKind::Number,
            ValueKind::Text,
            ValueKind::Boolean,
            ValueKind::Mysterious,
            ValueKind::Null,
        ] {
            assert!(ValueKinds::ANY.may_be(kind));
            assert!(!ValueKinds::ANY.is_exactly(kind));
        }
    }

    #[test]
    fn describe_lists_members() {
        assert_eq!(ValueKinds::NUMBER.describe(), "number");
        assert_eq!(ValueKinds::ANY.describe(), "any value");
        assert_eq!(
            (ValueKinds::NUMBER | ValueKinds::NULL).describe(),
            "number or null"
        );
    }
}
