//! Browser binding for the wall.
//!
//! Mounts the controller onto the page skeleton in `index.html`, renders the
//! markup from [`crate::render`] into it and routes clicks and key presses
//! back into the controller. Uses one delegated listener per event type, so
//! re-rendered markup never needs new handlers.

use crate::config::WallConfig;
use crate::controller::{WallChange, WallController};
use crate::input::{ClickTarget, Key};
use crate::render::{render_channel_bar, render_grid, render_layout_options};
use multiwatch_types::SourceId;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent};

/// Error type for mounting the wall onto the page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("No window")]
    NoWindow,

    #[error("No document")]
    NoDocument,

    #[error("Missing page element #{0}")]
    MissingElement(&'static str),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(format!("{:?}", value))
    }
}

const GRID_ID: &str = "videoGrid";
const CHANNEL_LIST_ID: &str = "channelList";
const CHANNEL_COUNT_ID: &str = "channelCount";
const LAYOUT_BUTTON_ID: &str = "btnLayout";
const MODAL_ID: &str = "layoutModal";
const MODAL_CLOSE_ID: &str = "modalClose";
const LAYOUT_OPTIONS_ID: &str = "layoutOptions";

/// Page elements the wall renders into.
struct Elements {
    grid: Element,
    channel_list: Element,
    channel_count: Element,
    modal: Element,
    layout_options: Element,
}

impl Elements {
    fn find(document: &Document) -> Result<Self, WebError> {
        let get = |id: &'static str| {
            document
                .get_element_by_id(id)
                .ok_or(WebError::MissingElement(id))
        };

        // Only looked up to fail early on a broken skeleton; clicks are delegated.
        get(LAYOUT_BUTTON_ID)?;
        get(MODAL_CLOSE_ID)?;

        Ok(Self {
            grid: get(GRID_ID)?,
            channel_list: get(CHANNEL_LIST_ID)?,
            channel_count: get(CHANNEL_COUNT_ID)?,
            modal: get(MODAL_ID)?,
            layout_options: get(LAYOUT_OPTIONS_ID)?,
        })
    }

    fn render(&self, change: &WallChange, wall: &WallController) -> Result<(), WebError> {
        if change.assignment || change.capacity {
            self.grid
                .set_attribute("data-layout", &wall.capacity().to_string())?;
            self.grid.set_inner_html(&render_grid(&wall.slot_views()));
            self.channel_list
                .set_inner_html(&render_channel_bar(&wall.badge_views()));
        }
        if change.capacity {
            self.layout_options
                .set_inner_html(&render_layout_options(wall.capacity()));
        }
        if change.picker {
            self.modal
                .class_list()
                .toggle_with_force("open", wall.picker_open())?;
        }
        Ok(())
    }

    fn render_all(&self, wall: &WallController) -> Result<(), WebError> {
        self.channel_count
            .set_text_content(Some(&wall.registry().len().to_string()));
        self.render(
            &WallChange {
                assignment: true,
                capacity: true,
                picker: true,
            },
            wall,
        )
    }
}

/// Work out what a click landed on.
fn click_target(target: &Element) -> Result<Option<ClickTarget>, WebError> {
    if target.id() == MODAL_ID {
        return Ok(Some(ClickTarget::PickerBackdrop));
    }
    if target.closest(&format!("#{}", MODAL_CLOSE_ID))?.is_some() {
        return Ok(Some(ClickTarget::PickerClose));
    }
    if let Some(option) = target.closest(".layout-option[data-layout]")? {
        let slots = option
            .get_attribute("data-layout")
            .and_then(|value| value.parse::<u32>().ok());
        return Ok(slots.map(ClickTarget::LayoutOption));
    }
    if let Some(badge) = target.closest(".channel-badge[data-source-id]")? {
        return Ok(badge
            .get_attribute("data-source-id")
            .map(|id| ClickTarget::SourceBadge(SourceId::new(id))));
    }
    if target.closest(&format!("#{}", LAYOUT_BUTTON_ID))?.is_some() {
        return Ok(Some(ClickTarget::LayoutButton));
    }
    Ok(None)
}

/// Mount the wall onto the current page.
pub fn start(config: WallConfig) -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    let elements = Rc::new(Elements::find(&document)?);

    let mut controller =
        WallController::new(config.registry, config.default_capacity, config.embed);
    elements.render_all(&controller)?;

    {
        let elements = Rc::clone(&elements);
        controller.subscribe(move |change, wall| {
            if let Err(e) = elements.render(change, wall) {
                tracing::error!("Failed to render wall: {}", e);
            }
        });
    }

    let controller = Rc::new(RefCell::new(controller));

    {
        let controller = Rc::clone(&controller);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            match click_target(&target) {
                Ok(Some(target)) => {
                    controller.borrow_mut().click(target);
                }
                Ok(None) => {}
                Err(e) => tracing::error!("Failed to resolve click: {}", e),
            }
        });
        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        on_click.forget();
    }

    {
        let controller = Rc::clone(&controller);
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key = Key::from_dom_key(&event.key());
            if key != Key::Other {
                controller.borrow_mut().key(key);
            }
        });
        document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }

    tracing::info!("Wall mounted");
    Ok(())
}
