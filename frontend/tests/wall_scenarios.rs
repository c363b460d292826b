//! End-to-end wall behavior through the public controller API.

use multiwatch_frontend::embed::EmbedSettings;
use multiwatch_frontend::render::{render_channel_bar, render_grid};
use multiwatch_frontend::{ClickTarget, Key, WallCommand, WallConfig, WallController};
use multiwatch_types::{Capacity, Registry, Source, SourceId};

fn registry(ids: &[&str]) -> Registry {
    Registry::new(ids.iter().map(|id| Source::new(*id, format!("Channel {}", id))).collect())
        .unwrap()
}

fn assigned(wall: &WallController) -> Vec<String> {
    wall.assignment()
        .slots()
        .iter()
        .map(|s| s.id.to_string())
        .collect()
}

#[test]
fn five_sources_four_slots_scenario() {
    let mut wall = WallController::new(
        registry(&["A", "B", "C", "D", "E"]),
        Capacity::Four,
        EmbedSettings::default(),
    );
    assert_eq!(assigned(&wall), vec!["A", "B", "C", "D"]);

    wall.click(ClickTarget::SourceBadge(SourceId::new("E")));
    assert_eq!(assigned(&wall), vec!["A", "B", "C", "E"]);

    wall.click(ClickTarget::SourceBadge(SourceId::new("E")));
    assert_eq!(assigned(&wall), vec!["A", "B", "C"]);

    wall.key(Key::Char('2'));
    assert_eq!(wall.capacity(), Capacity::Two);
    assert_eq!(assigned(&wall), vec!["A", "B"]);
}

#[test]
fn single_slot_overwrite_scenario() {
    let mut wall = WallController::new(
        registry(&["A", "B"]),
        Capacity::One,
        EmbedSettings::default(),
    );
    assert_eq!(assigned(&wall), vec!["A"]);

    wall.toggle(&SourceId::new("B"));
    assert_eq!(assigned(&wall), vec!["B"]);
}

#[test]
fn picker_flow_from_button_to_layout() {
    let mut wall = WallController::new(
        registry(&["A", "B", "C", "D", "E", "F", "G"]),
        Capacity::Four,
        EmbedSettings::default(),
    );

    wall.click(ClickTarget::LayoutButton);
    assert!(wall.picker_open());

    // Digits do nothing while choosing
    wall.key(Key::Char('9'));
    assert_eq!(wall.capacity(), Capacity::Four);

    wall.click(ClickTarget::LayoutOption(6));
    assert!(!wall.picker_open());
    assert_eq!(wall.capacity(), Capacity::Six);
    // Growing leaves new slots empty
    assert_eq!(assigned(&wall), vec!["A", "B", "C", "D"]);

    wall.dispatch(WallCommand::OpenPicker);
    wall.click(ClickTarget::PickerBackdrop);
    assert!(!wall.picker_open());
}

#[test]
fn rendered_page_matches_state() {
    let mut wall = WallController::new(
        registry(&["A", "B", "C"]),
        Capacity::Two,
        EmbedSettings::default(),
    );
    wall.toggle(&SourceId::new("A"));

    let grid = render_grid(&wall.slot_views());
    assert_eq!(grid.matches("player-card loaded").count(), 1);
    assert!(grid.contains("Channel B"));
    assert!(grid.contains("Empty slot"));
    assert!(grid.contains("live_stream?channel=B&amp;autoplay=1&amp;mute=1"));

    let bar = render_channel_bar(&wall.badge_views());
    assert_eq!(bar.matches("channel-badge active").count(), 1);
    assert!(bar.contains(r#"data-source-id="B""#));
}

#[test]
fn embedded_configuration_boots_a_full_wall() {
    let config = WallConfig::embedded().unwrap();
    let wall = WallController::new(config.registry, config.default_capacity, config.embed);

    assert_eq!(wall.capacity(), Capacity::Four);
    assert_eq!(wall.assignment().len(), 4);
    assert_eq!(wall.badge_views().iter().filter(|b| b.active).count(), 4);
    assert_eq!(wall.badge_views().len(), 13);
}
