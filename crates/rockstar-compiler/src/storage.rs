//! Storage slots of a compiled unit.
//!
//! Every distinct canonical name gets exactly one slot, a field of the
//! generated unit that lives for the whole program. Slots are created on
//! first assignment and handed out again on every later reference.

use rockstar_core::{CompileError, Span, ValueKinds};
use rustc_hash::FxHashMap;

/// Replaces spaces when turning a canonical name into a field name.
pub const SLOT_SEPARATOR: &str = "__";

/// Handle of a storage slot; also its field index in the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u16);

impl SlotId {
    pub(crate) fn new(index: u16) -> Self {
        Self(index)
    }

    pub fn index(self) -> u16 {
        self.0
    }
}

/// A named field of the generated unit.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageSlot {
    pub id: SlotId,
    /// Target-legal field name, e.g. `my__thing`.
    pub slot_name: String,
    pub canonical_name: String,
    /// Kinds the slot is declared to hold.
    pub declared: ValueKinds,
}

/// Slot field name for a canonical name.
pub fn slot_name(canonical_name: &str) -> String {
    canonical_name.replace(' ', SLOT_SEPARATOR)
}

/// Maps canonical names to the slots of one unit.
#[derive(Debug, Clone)]
pub struct StorageAllocator {
    owner: String,
    slots: Vec<StorageSlot>,
    by_name: FxHashMap<String, SlotId>,
}

impl StorageAllocator {
    /// An empty allocator for the unit called `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            slots: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// The unit that declares every slot of this allocator.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The slot for `canonical_name`, creating it on first use.
    ///
    /// A new slot is declared with `declared`, or [`ValueKinds::ANY`] when
    /// the caller does not narrow it. An existing slot is returned as is.
    pub fn slot_for(
        &mut self,
        canonical_name: &str,
        declared: Option<ValueKinds>,
        span: Span,
    ) -> Result<SlotId, CompileError> {
        if let Some(&id) = self.by_name.get(canonical_name) {
            return Ok(id);
        }

        let index = u16::try_from(self.slots.len()).map_err(|_| CompileError::LimitExceeded {
            message: format!(
                "unit '{}' cannot hold more than {} variables",
                self.owner,
                u16::MAX as u32 + 1
            ),
            span,
        })?;
        let id = SlotId::new(index);
        let slot = StorageSlot {
            id,
            slot_name: slot_name(canonical_name),
            canonical_name: canonical_name.to_string(),
            declared: declared.unwrap_or(ValueKinds::ANY),
        };
        log::debug!(
            "declared field {}.{} ({})",
            self.owner,
            slot.slot_name,
            slot.declared.describe()
        );

        self.slots.push(slot);
        self.by_name.insert(canonical_name.to_string(), id);
        Ok(id)
    }

    /// The existing slot for `canonical_name`, if one was ever created.
    pub fn lookup(&self, canonical_name: &str) -> Option<SlotId> {
        self.by_name.get(canonical_name).copied()
    }

    pub fn slot(&self, id: SlotId) -> &StorageSlot {
        &self.slots[id.index() as usize]
    }

    pub fn slots(&self) -> &[StorageSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn into_slots(self) -> Vec<StorageSlot> {
        self.slots
    }
}
