//! Floating field: absolutely positioned bubbles over the main column.
//!
//! Each bubble is its own stack layer, offset by container padding. The
//! bubble being dragged is drawn last and without a mouse area, so grid
//! slots underneath keep receiving hover events.

use iced::widget::{container, mouse_area, Stack};
use iced::{mouse, Element, Length, Padding, Point};

use muse_core::IdeaKind;

use crate::constants::{BUBBLE_EDGE_RESERVE, DRAG_SCALE};
use crate::drag::{ActiveDrag, DragSource};
use crate::msg::{DragMessage, Message};
use crate::state::Muse;
use crate::widgets::bubble::{bubble, BubbleLook};

pub fn view_field(state: &Muse) -> Element<'_, Message> {
    let dims = state.window.dims;
    let active = state.drag.active();
    let ideas = state.controller.ideas();

    let mut layers: Vec<Element<'_, Message>> = Vec::with_capacity(ideas.len() + 1);

    for (index, (idea, motion)) in ideas.iter().zip(&state.field.motions).enumerate() {
        if active.is_some_and(|d| d.source == DragSource::Bubble(index)) {
            continue;
        }
        let look = BubbleLook {
            scale: motion.scale(),
            opacity: motion.opacity(),
            ..BubbleLook::resting(idea.kind)
        };
        let element = mouse_area(bubble(idea.text.as_str(), look))
            .on_press(Message::Drag(DragMessage::Press(DragSource::Bubble(index))))
            .interaction(mouse::Interaction::Grab);
        layers.push(place(
            element.into(),
            Point::new(motion.x.position, motion.y.position),
            dims,
        ));
    }

    if let Some(drag) = active {
        if let Some(layer) = dragged_layer(state, drag) {
            layers.push(layer);
        }
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The element under the pointer during a live drag.
fn dragged_layer<'a>(state: &'a Muse, drag: &'a ActiveDrag) -> Option<Element<'a, Message>> {
    let dims = state.window.dims;
    let delta = drag.delta();

    match drag.source {
        DragSource::Bubble(index) => {
            let idea = state.controller.ideas().get(index)?;
            let home = state.field.field.position(index)?;
            let look = BubbleLook {
                scale: DRAG_SCALE,
                lifted: true,
                ..BubbleLook::resting(idea.kind)
            };
            Some(place(
                bubble(idea.text.as_str(), look).into(),
                Point::new(home.x + delta.x, home.y + delta.y),
                dims,
            ))
        }
        DragSource::FusionResult(_) => {
            let look = BubbleLook {
                scale: DRAG_SCALE,
                opacity: 0.9,
                lifted: true,
                ..BubbleLook::resting(IdeaKind::Fused)
            };
            let label = drag.payload.preview_text();
            Some(place(bubble(label, look).into(), drag.current_pos, dims))
        }
    }
}

/// Offset `element` to `at`, clamped so it stays on screen.
fn place<'a>(element: Element<'a, Message>, at: Point, dims: (f32, f32)) -> Element<'a, Message> {
    let x = at.x.clamp(0.0, (dims.0 - BUBBLE_EDGE_RESERVE).max(0.0));
    let y = at.y.clamp(0.0, (dims.1 - BUBBLE_EDGE_RESERVE).max(0.0));
    container(element)
        .padding(Padding {
            top: y,
            left: x,
            right: 0.0,
            bottom: 0.0,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
