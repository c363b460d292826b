//! HTML markup for the browser wall.
//!
//! Produces the inner markup of the grid, the channel bar and the layout
//! picker. Display names and identifiers come from operator configuration and
//! are always escaped before they reach the markup.

use crate::embed::PLAYER_ALLOW;
use crate::view::{BadgeView, SlotView};
use multiwatch_types::Capacity;
use std::fmt::Write;

const PLACEHOLDER_ICON: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><rect x="2" y="4" width="20" height="16" rx="3"/><path d="M10 9l5 3-5 3V9z"/></svg>"#;

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Markup for every slot card, in slot order.
pub fn render_grid(slots: &[SlotView<'_>]) -> String {
    let mut html = String::new();
    for slot in slots {
        render_player_card(&mut html, slot);
    }
    html
}

fn render_player_card(html: &mut String, slot: &SlotView<'_>) {
    let loaded = if slot.is_live() { " loaded" } else { "" };
    let _ = write!(
        html,
        r#"<div class="player-card{}" data-index="{}"><div class="player-wrapper">"#,
        loaded,
        slot.index()
    );

    if let SlotView::Live { embed_url, .. } = slot {
        let _ = write!(
            html,
            r#"<iframe src="{}" allow="{}" allowfullscreen loading="lazy"></iframe>"#,
            escape_html(embed_url),
            PLAYER_ALLOW
        );
    }

    let _ = write!(
        html,
        r#"<div class="player-overlay"><div class="player-placeholder">{}<p>No stream assigned</p></div></div></div>"#,
        PLACEHOLDER_ICON
    );

    match slot {
        SlotView::Live { source, .. } => {
            let _ = write!(
                html,
                r#"<div class="player-info"><span class="player-channel-name">{}</span><span class="player-badge"><span class="player-badge-dot"></span>LIVE</span></div>"#,
                escape_html(&source.name)
            );
        }
        SlotView::Empty { .. } => {
            html.push_str(
                r#"<div class="player-info"><span class="player-channel-name player-channel-empty">Empty slot</span></div>"#,
            );
        }
    }

    html.push_str("</div>");
}

/// Markup for the channel bar badges.
pub fn render_channel_bar(badges: &[BadgeView<'_>]) -> String {
    let mut html = String::new();
    for (index, badge) in badges.iter().enumerate() {
        let active = if badge.active { " active" } else { "" };
        let _ = write!(
            html,
            r#"<div class="channel-badge{}" data-channel-index="{}" data-source-id="{}"><div class="channel-badge-avatar">{}</div><span class="channel-badge-name">{}</span><span class="channel-badge-status"></span></div>"#,
            active,
            index,
            escape_html(badge.source.id.as_str()),
            escape_html(&badge.initials),
            escape_html(&badge.source.name)
        );
    }
    html
}

/// Markup for the layout picker options, marking the current layout active.
pub fn render_layout_options(current: Capacity) -> String {
    let mut html = String::new();
    for capacity in Capacity::ALL {
        let active = if capacity == current { " active" } else { "" };
        let _ = write!(
            html,
            r#"<button type="button" class="layout-option{}" data-layout="{}"><span class="layout-option-count">{}</span><span class="layout-option-label">{}</span></button>"#,
            active,
            capacity,
            capacity,
            capacity.label()
        );
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::EmbedSettings;
    use crate::view::{badge_views, slot_views};
    use crate::wall::SlotAssignment;
    use multiwatch_types::{Registry, Source};

    fn registry() -> Registry {
        Registry::new(vec![
            Source::new("UC1", "Rey"),
            Source::new("UC2", "<script>alert('x')</script>"),
            Source::new("UC\"3", "Tom & Jerry"),
        ])
        .unwrap()
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn grid_renders_one_card_per_slot() {
        let reg = registry();
        let wall = SlotAssignment::new(&reg, Capacity::Four);
        let html = render_grid(&slot_views(&wall, &EmbedSettings::default()));

        assert_eq!(html.matches(r#"class="player-card"#).count(), 4);
        assert_eq!(html.matches("player-card loaded").count(), 3);
        assert_eq!(html.matches("<iframe").count(), 3);
        assert_eq!(html.matches("LIVE").count(), 3);
        assert!(html.contains(r#"data-index="3""#));
        assert!(html.contains("Empty slot"));
    }

    #[test]
    fn hostile_names_are_escaped() {
        let reg = registry();
        let wall = SlotAssignment::new(&reg, Capacity::Four);

        let grid = render_grid(&slot_views(&wall, &EmbedSettings::default()));
        assert!(!grid.contains("<script>"));
        assert!(grid.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(grid.contains("Tom &amp; Jerry"));

        let bar = render_channel_bar(&badge_views(&reg, &wall));
        assert!(!bar.contains("<script>"));
        assert!(bar.contains(r#"data-source-id="UC&quot;3""#));
    }

    #[test]
    fn channel_bar_marks_active_badges() {
        let reg = registry();
        let wall = SlotAssignment::new(&reg, Capacity::One);
        let bar = render_channel_bar(&badge_views(&reg, &wall));

        assert_eq!(bar.matches("channel-badge active").count(), 1);
        assert!(bar.contains(r#"<div class="channel-badge active" data-channel-index="0" data-source-id="UC1">"#));
        assert!(bar.contains(r#"<div class="channel-badge-avatar">T&amp;</div>"#));
    }

    #[test]
    fn layout_options_mark_current() {
        let html = render_layout_options(Capacity::Six);
        assert_eq!(html.matches("layout-option active").count(), 1);
        assert!(html.contains(r#"class="layout-option active" data-layout="6""#));
        for n in ["1", "2", "4", "6", "9"] {
            assert!(html.contains(&format!(r#"data-layout="{}""#, n)));
        }
    }
}
