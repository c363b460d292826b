//! Slot assignment: which sources occupy the visible slots.
//!
//! The assignment is an ordered list of registry sources, never longer than
//! the current capacity and never containing the same source twice. Slot 0
//! is the first element.

use multiwatch_types::{Capacity, Registry, Source, SourceId};
use tracing::debug;

/// Result of toggling a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Source appended to the first free slot
    Added { slot: usize },
    /// Source removed; later slots shifted left
    Removed { slot: usize },
    /// Wall was full; source took over the last slot
    Replaced { slot: usize, evicted: Source },
    /// Identifier not in the registry; nothing changed
    Unknown,
}

impl ToggleOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, ToggleOutcome::Unknown)
    }
}

/// Current capacity and the ordered sources occupying the slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    capacity: Capacity,
    slots: Vec<Source>,
}

impl SlotAssignment {
    /// Initial assignment: the first `capacity` registry entries, in order.
    pub fn new(registry: &Registry, capacity: Capacity) -> Self {
        Self {
            capacity,
            slots: registry.iter().take(capacity.slots()).cloned().collect(),
        }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Assigned sources in slot order.
    pub fn slots(&self) -> &[Source] {
        &self.slots
    }

    /// Source shown in slot `index`, if the slot is occupied.
    pub fn slot(&self, index: usize) -> Option<&Source> {
        self.slots.get(index)
    }

    pub fn position(&self, id: &SourceId) -> Option<usize> {
        self.slots.iter().position(|s| &s.id == id)
    }

    pub fn contains(&self, id: &SourceId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity.slots()
    }

    /// Add or remove a source.
    ///
    /// An assigned source is removed and the slots after it shift left. An
    /// unassigned source is appended, or replaces the occupant of the last
    /// slot when the wall is full. Unknown identifiers are ignored.
    pub fn toggle(&mut self, registry: &Registry, id: &SourceId) -> ToggleOutcome {
        let Some(source) = registry.get(id) else {
            debug!("Ignoring toggle of unknown source {}", id);
            return ToggleOutcome::Unknown;
        };

        if let Some(slot) = self.position(id) {
            self.slots.remove(slot);
            return ToggleOutcome::Removed { slot };
        }

        if self.is_full() {
            let slot = self.capacity.slots() - 1;
            let evicted = std::mem::replace(&mut self.slots[slot], source.clone());
            ToggleOutcome::Replaced { slot, evicted }
        } else {
            self.slots.push(source.clone());
            ToggleOutcome::Added {
                slot: self.slots.len() - 1,
            }
        }
    }

    /// Change the number of slots, dropping sources that no longer fit.
    ///
    /// Returns the dropped sources. They are not remembered; growing the
    /// wall again leaves the new slots empty.
    pub fn resize(&mut self, capacity: Capacity) -> Vec<Source> {
        self.capacity = capacity;
        if self.slots.len() > capacity.slots() {
            self.slots.split_off(capacity.slots())
        } else {
            Vec::new()
        }
    }
}
