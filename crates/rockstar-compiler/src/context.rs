//! Per-compilation state.
//!
//! A [`CompilationContext`] is created fresh for every program and owns the
//! mutable state that lives across statements: the pronoun history and the
//! storage allocator. Nothing here is shared between compilations.

use rockstar_core::{CompileError, Span, ValueKinds};
use rockstar_parser::ast::VariableRef;

use crate::names::{NameNormalizer, PronounHistory, VariableIdentity};
use crate::options::{CompileOptions, UnboundPolicy};
use crate::storage::{SlotId, StorageAllocator};

type Result<T> = std::result::Result<T, CompileError>;

pub struct CompilationContext<'v> {
    normalizer: NameNormalizer<'v>,
    history: PronounHistory,
    storage: StorageAllocator,
    unbound_reads: UnboundPolicy,
}

impl<'v> CompilationContext<'v> {
    pub fn new(options: &'v CompileOptions) -> Self {
        Self {
            normalizer: NameNormalizer::new(options.vocabulary()),
            history: PronounHistory::new(),
            storage: StorageAllocator::new(options.unit_name()),
            unbound_reads: options.unbound_reads(),
        }
    }

    /// Resolve a reference to its identity, updating the pronoun history.
    pub fn identity(&mut self, variable: &VariableRef<'_>) -> Result<VariableIdentity> {
        self.normalizer
            .normalize(variable.text, variable.span, &mut self.history)
    }

    /// The slot a store to `identity` writes, created on first use.
    pub fn slot_for(&mut self, identity: &VariableIdentity, span: Span) -> Result<SlotId> {
        self.storage.slot_for(identity.canonical_name(), None, span)
    }

    /// The slot a read of `identity` loads from.
    ///
    /// `Ok(None)` means the variable was never assigned and the policy
    /// says to read it as mysterious.
    pub fn slot_to_read(
        &self,
        identity: &VariableIdentity,
        span: Span,
    ) -> Result<Option<SlotId>> {
        match self.storage.lookup(identity.canonical_name()) {
            Some(id) => Ok(Some(id)),
            None => match self.unbound_reads {
                UnboundPolicy::Error => Err(CompileError::UnboundVariable {
                    name: identity.canonical_name().to_string(),
                    span,
                }),
                UnboundPolicy::Mysterious => Ok(None),
            },
        }
    }

    /// Kinds a slot is declared to hold.
    pub fn declared_kinds(&self, slot: SlotId) -> ValueKinds {
        self.storage.slot(slot).declared
    }

    pub fn history(&self) -> &PronounHistory {
        &self.history
    }

    pub fn storage(&self) -> &StorageAllocator {
        &self.storage
    }

    pub fn into_storage(self) -> StorageAllocator {
        self.storage
    }
}
