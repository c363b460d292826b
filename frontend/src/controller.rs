//! Wall controller: owns the wall state and notifies observers on change.
//!
//! All state lives in one controller instance. Every command runs to
//! completion, including observer notification, before the next one is
//! handled.

use crate::embed::EmbedSettings;
use crate::input::{command_for_click, command_for_key, ClickTarget, Key, WallCommand};
use crate::view::{badge_views, slot_views, BadgeView, SlotView};
use crate::wall::{SlotAssignment, ToggleOutcome};
use multiwatch_types::{Capacity, Registry, SourceId};
use tracing::{debug, info};

/// Which parts of the wall a command changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallChange {
    /// Slot contents changed
    pub assignment: bool,
    /// Grid size changed
    pub capacity: bool,
    /// Layout picker opened or closed
    pub picker: bool,
}

impl WallChange {
    pub fn is_empty(&self) -> bool {
        !(self.assignment || self.capacity || self.picker)
    }

    fn merge(self, other: WallChange) -> WallChange {
        WallChange {
            assignment: self.assignment || other.assignment,
            capacity: self.capacity || other.capacity,
            picker: self.picker || other.picker,
        }
    }
}

/// Callback invoked after every command that changed the wall.
pub type Observer = Box<dyn FnMut(&WallChange, &WallController)>;

pub struct WallController {
    registry: Registry,
    assignment: SlotAssignment,
    embed: EmbedSettings,
    picker_open: bool,
    observers: Vec<Observer>,
}

impl WallController {
    /// Create a controller with the first `capacity` sources assigned.
    pub fn new(registry: Registry, capacity: Capacity, embed: EmbedSettings) -> Self {
        let assignment = SlotAssignment::new(&registry, capacity);
        info!(
            "Wall ready: {} sources, {} slots, {} assigned",
            registry.len(),
            capacity,
            assignment.len()
        );
        Self {
            registry,
            assignment,
            embed,
            picker_open: false,
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers run in registration order.
    pub fn subscribe(&mut self, observer: impl FnMut(&WallChange, &WallController) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn assignment(&self) -> &SlotAssignment {
        &self.assignment
    }

    pub fn capacity(&self) -> Capacity {
        self.assignment.capacity()
    }

    pub fn embed(&self) -> &EmbedSettings {
        &self.embed
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn slot_views(&self) -> Vec<SlotView<'_>> {
        slot_views(&self.assignment, &self.embed)
    }

    pub fn badge_views(&self) -> Vec<BadgeView<'_>> {
        badge_views(&self.registry, &self.assignment)
    }

    /// Apply a command and notify observers if anything changed.
    pub fn dispatch(&mut self, command: WallCommand) -> WallChange {
        let change = match command {
            WallCommand::Toggle(id) => self.apply_toggle(&id),
            WallCommand::Resize(capacity) => self
                .apply_resize(capacity)
                .merge(self.set_picker(false)),
            WallCommand::OpenPicker => self.set_picker(true),
            WallCommand::ClosePicker => self.set_picker(false),
        };

        if !change.is_empty() {
            self.notify(&change);
        }
        change
    }

    /// Handle a click on one of the wall's targets.
    pub fn click(&mut self, target: ClickTarget) -> WallChange {
        match command_for_click(target) {
            Some(command) => self.dispatch(command),
            None => WallChange::default(),
        }
    }

    /// Handle a key press.
    pub fn key(&mut self, key: Key) -> WallChange {
        match command_for_key(key, self.picker_open) {
            Some(command) => self.dispatch(command),
            None => WallChange::default(),
        }
    }

    pub fn toggle(&mut self, id: &SourceId) -> WallChange {
        self.dispatch(WallCommand::Toggle(id.clone()))
    }

    pub fn resize(&mut self, capacity: Capacity) -> WallChange {
        self.dispatch(WallCommand::Resize(capacity))
    }

    fn apply_toggle(&mut self, id: &SourceId) -> WallChange {
        let outcome = self.assignment.toggle(&self.registry, id);
        match &outcome {
            ToggleOutcome::Added { slot } => debug!("Assigned {} to slot {}", id, slot),
            ToggleOutcome::Removed { slot } => debug!("Removed {} from slot {}", id, slot),
            ToggleOutcome::Replaced { slot, evicted } => {
                debug!("Replaced {} with {} in slot {}", evicted.id, id, slot)
            }
            ToggleOutcome::Unknown => {}
        }
        WallChange {
            assignment: outcome.changed(),
            ..WallChange::default()
        }
    }

    fn apply_resize(&mut self, capacity: Capacity) -> WallChange {
        let previous = self.assignment.capacity();
        let dropped = self.assignment.resize(capacity);
        if previous != capacity {
            info!(
                "Layout changed from {} to {} slots ({} sources dropped)",
                previous,
                capacity,
                dropped.len()
            );
        }
        WallChange {
            assignment: !dropped.is_empty(),
            capacity: previous != capacity,
            picker: false,
        }
    }

    fn set_picker(&mut self, open: bool) -> WallChange {
        let changed = self.picker_open != open;
        self.picker_open = open;
        WallChange {
            picker: changed,
            ..WallChange::default()
        }
    }

    fn notify(&mut self, change: &WallChange) {
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer(change, self);
        }
        self.observers = observers;
    }
}

impl std::fmt::Debug for WallController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WallController")
            .field("registry", &self.registry)
            .field("assignment", &self.assignment)
            .field("embed", &self.embed)
            .field("picker_open", &self.picker_open)
            .field("observers", &self.observers.len())
            .finish()
    }
}
