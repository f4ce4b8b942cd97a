//! Constant pool for a compiled unit.

use ordered_float::OrderedFloat;
use rockstar_core::{RuntimeFnHash, Value};
use rustc_hash::FxHashMap;
use std::fmt;

/// Values stored in the constant pool.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Number(f64),
    Text(String),
    /// Identity of a runtime routine, referenced by `CallRuntime`.
    RuntimeFn(RuntimeFnHash),
}

impl Constant {
    /// The value a `Constant` instruction pushes. Routine hashes are not
    /// values.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Constant::Number(n) => Some(Value::Number(*n)),
            Constant::Text(s) => Some(Value::Text(s.clone())),
            Constant::RuntimeFn(_) => None,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Number(n) => write!(f, "{n}"),
            Constant::Text(s) => write!(f, "{s:?}"),
            Constant::RuntimeFn(hash) => write!(f, "{hash:?}"),
        }
    }
}

/// Unit-level constant pool with deduplication.
#[derive(Debug, Clone, Default)]
pub struct ConstantPool {
    constants: Vec<Constant>,
    index: FxHashMap<ConstantKey, u32>,
}

/// Hashable form of [`Constant`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ConstantKey {
    Number(OrderedFloat<f64>),
    Text(String),
    RuntimeFn(RuntimeFnHash),
}

impl ConstantPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or get existing constant, returns index.
    pub fn add(&mut self, constant: Constant) -> u32 {
        let key = Self::to_key(&constant);

        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }

        let idx = self.constants.len() as u32;
        self.constants.push(constant);
        self.index.insert(key, idx);
        idx
    }

    pub fn add_number(&mut self, value: f64) -> u32 {
        self.add(Constant::Number(value))
    }

    pub fn add_text(&mut self, value: &str) -> u32 {
        self.add(Constant::Text(value.to_string()))
    }

    pub fn add_runtime_fn(&mut self, hash: RuntimeFnHash) -> u32 {
        self.add(Constant::RuntimeFn(hash))
    }

    pub fn get(&self, index: u32) -> Option<&Constant> {
        self.constants.get(index as usize)
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    fn to_key(constant: &Constant) -> ConstantKey {
        match constant {
            Constant::Number(v) => ConstantKey::Number(OrderedFloat(*v)),
            Constant::Text(s) => ConstantKey::Text(s.clone()),
            Constant::RuntimeFn(h) => ConstantKey::RuntimeFn(*h),
        }
    }
}
