//! User input mapping.
//!
//! Translates clicks and key presses into wall commands. Both shells feed
//! their raw events through here so the keyboard and click contract is the
//! same in the browser and the native preview.

use multiwatch_types::{Capacity, SourceId};
use tracing::debug;

/// A state transition requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallCommand {
    /// Add or remove a source from the wall
    Toggle(SourceId),
    /// Switch to another grid size
    Resize(Capacity),
    /// Show the layout picker
    OpenPicker,
    /// Hide the layout picker
    ClosePicker,
}

/// Something the user clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A badge in the channel bar
    SourceBadge(SourceId),
    /// An option inside the layout picker, carrying its raw slot count
    LayoutOption(u32),
    /// The toolbar button that opens the picker
    LayoutButton,
    /// The picker's close button
    PickerClose,
    /// The dimmed area around the picker
    PickerBackdrop,
}

/// A key press, reduced to what the wall cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        if key == "Escape" {
            return Key::Escape;
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

/// Command for a click, if the click does anything.
pub fn command_for_click(target: ClickTarget) -> Option<WallCommand> {
    match target {
        ClickTarget::SourceBadge(id) => Some(WallCommand::Toggle(id)),
        ClickTarget::LayoutOption(slots) => match Capacity::try_from(slots) {
            Ok(capacity) => Some(WallCommand::Resize(capacity)),
            Err(e) => {
                debug!("Ignoring layout option: {}", e);
                None
            }
        },
        ClickTarget::LayoutButton => Some(WallCommand::OpenPicker),
        ClickTarget::PickerClose | ClickTarget::PickerBackdrop => Some(WallCommand::ClosePicker),
    }
}

/// Command for a key press.
///
/// Escape always closes the picker. Layout digits only apply while the
/// picker is closed.
pub fn command_for_key(key: Key, picker_open: bool) -> Option<WallCommand> {
    match key {
        Key::Escape => Some(WallCommand::ClosePicker),
        Key::Char(_) if picker_open => None,
        Key::Char(c) => Capacity::from_digit(c).map(WallCommand::Resize),
        Key::Other => None,
    }
}
