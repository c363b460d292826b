//! View models projected from the wall state.
//!
//! Both the browser markup and the native preview draw from these, so the
//! two surfaces always agree on what each slot and badge shows.

use crate::embed::EmbedSettings;
use crate::wall::SlotAssignment;
use multiwatch_types::{Registry, Source};

/// What a single grid slot displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotView<'a> {
    Live {
        index: usize,
        source: &'a Source,
        embed_url: String,
    },
    Empty {
        index: usize,
    },
}

impl SlotView<'_> {
    pub fn index(&self) -> usize {
        match self {
            SlotView::Live { index, .. } | SlotView::Empty { index } => *index,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, SlotView::Live { .. })
    }
}

/// A selectable entry in the channel bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView<'a> {
    pub source: &'a Source,
    pub initials: String,
    pub active: bool,
}

/// One view per visible slot, `0..capacity`.
pub fn slot_views<'a>(assignment: &'a SlotAssignment, embed: &EmbedSettings) -> Vec<SlotView<'a>> {
    (0..assignment.capacity().slots())
        .map(|index| match assignment.slot(index) {
            Some(source) => SlotView::Live {
                index,
                source,
                embed_url: embed.embed_url(&source.id),
            },
            None => SlotView::Empty { index },
        })
        .collect()
}

/// One badge per registry entry, in registry order.
pub fn badge_views<'a>(registry: &'a Registry, assignment: &SlotAssignment) -> Vec<BadgeView<'a>> {
    registry
        .iter()
        .map(|source| BadgeView {
            source,
            initials: initials(&source.name),
            active: assignment.contains(&source.id),
        })
        .collect()
}

/// Avatar text for a display name: first letter of the first two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiwatch_types::{Capacity, SourceId};

    fn registry() -> Registry {
        Registry::new(vec![
            Source::new("UC1", "RonnyBons"),
            Source::new("UC2", "Fahrul Reyza"),
            Source::new("UC3", "Dipiwww"),
        ])
        .unwrap()
    }

    #[test]
    fn initials_from_words() {
        assert_eq!(initials("Fahrul Reyza"), "FR");
        assert_eq!(initials("RonnyBons"), "R");
        assert_eq!(initials("the quick brown fox"), "TQ");
        assert_eq!(initials("  spaced   out "), "SO");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn slots_cover_capacity_with_empty_tail() {
        let reg = registry();
        let wall = SlotAssignment::new(&reg, Capacity::Four);
        let views = slot_views(&wall, &EmbedSettings::default());

        assert_eq!(views.len(), 4);
        assert!(views[..3].iter().all(SlotView::is_live));
        assert_eq!(views[3], SlotView::Empty { index: 3 });
        match &views[1] {
            SlotView::Live {
                source, embed_url, ..
            } => {
                assert_eq!(source.name, "Fahrul Reyza");
                assert!(embed_url.contains("channel=UC2"));
            }
            other => panic!("expected live slot, got {:?}", other),
        }
    }

    #[test]
    fn badges_mark_assigned_sources() {
        let reg = registry();
        let mut wall = SlotAssignment::new(&reg, Capacity::Two);
        wall.toggle(&reg, &SourceId::new("UC1"));

        let badges = badge_views(&reg, &wall);
        let active: Vec<bool> = badges.iter().map(|b| b.active).collect();
        assert_eq!(active, vec![false, true, false]);
        assert_eq!(badges[1].initials, "FR");
    }
}
