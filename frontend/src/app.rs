//! Native preview of the wall.
//!
//! Draws the same slots and badges as the browser page. Native windows cannot
//! host the external player, so each live slot links to its player URL
//! instead of embedding it.

use crate::config::WallConfig;
use crate::controller::WallController;
use crate::input::{ClickTarget, Key};
use crate::view::{BadgeView, SlotView};
use egui::{Color32, Context, RichText, Stroke, Vec2};
use multiwatch_types::{Capacity, SourceId};

const CARD_SPACING: f32 = 8.0;
const CARD_INNER_MARGIN: f32 = 10.0;

const CARD_FILL: Color32 = Color32::from_rgb(0x1a, 0x1b, 0x26);
const CARD_FILL_LIVE: Color32 = Color32::from_rgb(0x24, 0x28, 0x3b);
const CARD_STROKE: Color32 = Color32::from_rgb(0x34, 0x3b, 0x58);
const LIVE_RED: Color32 = Color32::from_rgb(0xf7, 0x76, 0x8e);
const MUTED_TEXT: Color32 = Color32::from_rgb(0x56, 0x5f, 0x89);

/// Layout digit keys handled by the preview.
const LAYOUT_KEYS: [(egui::Key, char); 5] = [
    (egui::Key::Num1, '1'),
    (egui::Key::Num2, '2'),
    (egui::Key::Num4, '4'),
    (egui::Key::Num6, '6'),
    (egui::Key::Num9, '9'),
];

pub struct MultiwatchApp {
    controller: WallController,
}

impl MultiwatchApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: WallConfig) -> Self {
        let mut controller =
            WallController::new(config.registry, config.default_capacity, config.embed);

        let ctx = cc.egui_ctx.clone();
        controller.subscribe(move |change, wall| {
            tracing::trace!(
                "Wall changed ({:?}), {} of {} slots assigned",
                change,
                wall.assignment().len(),
                wall.capacity()
            );
            ctx.request_repaint();
        });

        Self { controller }
    }

    fn handle_keyboard(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.key(Key::Escape);
        }
        for (key, digit) in LAYOUT_KEYS {
            if ctx.input(|i| i.key_pressed(key)) {
                self.controller.key(Key::Char(digit));
            }
        }
    }

    fn render_toolbar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Multiwatch");
                ui.separator();
                let label = format!("Layout: {}", self.controller.capacity().label());
                if ui.button(label).clicked() {
                    self.controller.click(ClickTarget::LayoutButton);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} channels", self.controller.registry().len()));
                });
            });
        });
    }

    fn render_channel_bar(&mut self, ctx: &Context) {
        let mut clicked: Option<SourceId> = None;

        egui::TopBottomPanel::bottom("channel_bar").show(ctx, |ui| {
            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for badge in self.controller.badge_views() {
                        if badge_button(ui, &badge).clicked() {
                            clicked = Some(badge.source.id.clone());
                        }
                    }
                });
            });
        });

        if let Some(id) = clicked {
            self.controller.click(ClickTarget::SourceBadge(id));
        }
    }

    fn render_grid(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (cols, rows) = self.controller.capacity().grid();
            let available = ui.available_size();
            let card_size = Vec2::new(
                (available.x - CARD_SPACING * (cols as f32 - 1.0)) / cols as f32,
                (available.y - CARD_SPACING * (rows as f32 - 1.0)) / rows as f32,
            );

            egui::Grid::new("wall_grid")
                .spacing([CARD_SPACING, CARD_SPACING])
                .show(ui, |ui| {
                    for slot in self.controller.slot_views() {
                        player_card(ui, &slot, card_size);
                        if (slot.index() + 1) % cols == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    }

    fn render_layout_picker(&mut self, ctx: &Context) {
        if !self.controller.picker_open() {
            return;
        }

        let current = self.controller.capacity();
        let mut open = true;
        let mut chosen: Option<Capacity> = None;

        egui::Window::new("Choose layout")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for capacity in Capacity::ALL {
                        let text = format!("{}\n{}", capacity, capacity.label());
                        if ui.selectable_label(capacity == current, text).clicked() {
                            chosen = Some(capacity);
                        }
                    }
                });
            });

        if let Some(capacity) = chosen {
            self.controller.click(ClickTarget::LayoutOption(capacity.into()));
        } else if !open {
            self.controller.click(ClickTarget::PickerClose);
        }
    }
}

impl eframe::App for MultiwatchApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);
        self.render_toolbar(ctx);
        self.render_channel_bar(ctx);
        self.render_grid(ctx);
        self.render_layout_picker(ctx);
    }
}

fn badge_button(ui: &mut egui::Ui, badge: &BadgeView<'_>) -> egui::Response {
    let text = format!("{}  {}", badge.initials, badge.source.name);
    let text = if badge.active {
        RichText::new(text).strong()
    } else {
        RichText::new(text)
    };
    ui.selectable_label(badge.active, text)
}

fn player_card(ui: &mut egui::Ui, slot: &SlotView<'_>, size: Vec2) {
    let fill = if slot.is_live() { CARD_FILL_LIVE } else { CARD_FILL };
    let inner = size - Vec2::splat(CARD_INNER_MARGIN * 2.0);

    egui::Frame::new()
        .fill(fill)
        .corner_radius(8.0)
        .stroke(Stroke::new(1.0, CARD_STROKE))
        .inner_margin(CARD_INNER_MARGIN)
        .show(ui, |ui| {
            ui.set_min_size(inner.max(Vec2::ZERO));
            ui.set_max_size(inner.max(Vec2::ZERO));

            match slot {
                SlotView::Live {
                    source, embed_url, ..
                } => {
                    ui.horizontal(|ui| {
                        ui.strong(&source.name);
                        ui.colored_label(LIVE_RED, "● LIVE");
                    });
                    ui.add_space(4.0);
                    ui.hyperlink_to("Open player", embed_url);
                }
                SlotView::Empty { .. } => {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new("No stream assigned").color(MUTED_TEXT));
                    });
                }
            }
        });
}
