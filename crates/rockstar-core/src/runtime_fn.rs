//! Identities of the runtime support routines generated code calls into.
//!
//! Call instructions reference a routine by a deterministic 64-bit hash of
//! its name, stored in the constant pool. The same name always produces the
//! same hash, so compiled programs do not depend on enum discriminants.

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Seed that keeps runtime routine hashes apart from any other hashed names.
const RUNTIME_SEED: u64 = 0x52_4f_43_4b_53_54_41_52;

/// A runtime support routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeFn {
    /// `to_text(value) -> text`: the textual form used for output.
    ToText,
    /// `add(left, right)`: number addition or string concatenation,
    /// chosen by the operands' tags.
    Add,
    /// `concat(left, right)`: textual forms joined.
    Concat,
}

impl RuntimeFn {
    pub const ALL: [RuntimeFn; 3] = [RuntimeFn::ToText, RuntimeFn::Add, RuntimeFn::Concat];

    pub fn name(self) -> &'static str {
        match self {
            RuntimeFn::ToText => "to_text",
            RuntimeFn::Add => "add",
            RuntimeFn::Concat => "concat",
        }
    }

    pub fn arity(self) -> u8 {
        match self {
            RuntimeFn::ToText => 1,
            RuntimeFn::Add | RuntimeFn::Concat => 2,
        }
    }

    pub fn hash(self) -> RuntimeFnHash {
        RuntimeFnHash::from_name(self.name())
    }

    pub fn from_hash(hash: RuntimeFnHash) -> Option<RuntimeFn> {
        RuntimeFn::ALL.into_iter().find(|f| f.hash() == hash)
    }
}

impl fmt::Display for RuntimeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hash identifying a runtime routine.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuntimeFnHash(pub u64);

impl RuntimeFnHash {
    pub fn from_name(name: &str) -> Self {
        RuntimeFnHash(xxh64(name.as_bytes(), RUNTIME_SEED))
    }
}

impl fmt::Debug for RuntimeFnHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuntimeFnHash({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_deterministic_and_distinct() {
        assert_eq!(RuntimeFn::Add.hash(), RuntimeFnHash::from_name("add"));
        assert_ne!(RuntimeFn::Add.hash(), RuntimeFn::Concat.hash());
        assert_ne!(RuntimeFn::ToText.hash(), RuntimeFn::Concat.hash());
    }

    #[test]
    fn lookup_by_hash() {
        for f in RuntimeFn::ALL {
            assert_eq!(RuntimeFn::from_hash(f.hash()), Some(f));
        }
        assert_eq!(RuntimeFn::from_hash(RuntimeFnHash::from_name("listen")), None);
    }
}
