//! Drag domain handler.
//!
//! Presses arrive as messages from the draggable elements; moves and
//! releases arrive as raw window events routed here by the window handler.

use std::time::Instant;

use iced::Point;

use super::grid::drop_on_hovered;
use crate::drag::{ActiveDrag, DragPayload, DragSource};
use crate::msg::DragMessage;
use crate::state::Muse;

pub fn update(state: &mut Muse, msg: DragMessage) {
    match msg {
        DragMessage::Press(source) => press(state, source),
    }
}

/// Text carried by a drag from `source`.
fn payload_for(state: &Muse, source: DragSource) -> Option<DragPayload> {
    let text = match source {
        DragSource::Bubble(index) => &state.controller.ideas().get(index)?.text,
        DragSource::FusionResult(index) => &state.controller.history().get(index)?.result_text,
    };
    Some(DragPayload::Text(text.clone()))
}

fn press(state: &mut Muse, source: DragSource) {
    let Some(payload) = payload_for(state, source) else {
        tracing::warn!(?source, "Press on a stale drag source");
        return;
    };
    state.drag.press(source, payload, state.window.cursor);
}

pub fn cursor_moved(state: &mut Muse, position: Point, now: Instant) {
    if state.drag.move_to(position, now) {
        tracing::debug!(source = ?state.drag.active_source(), "Drag started");
    }
}

/// Finish the drag: drop into the hovered slot or move the bubble.
pub fn released(state: &mut Muse, now: Instant) {
    let Some(active) = state.drag.release(now) else {
        return;
    };

    let dropped = drop_on_hovered(&mut state.grid, active.payload.text()).is_some();

    if let DragSource::Bubble(index) = active.source {
        if dropped {
            spring_home(state, index, &active);
        } else {
            commit_move(state, index, &active);
        }
    }
}

/// Escape: abandon the drag. A dragged bubble springs back.
pub fn cancel(state: &mut Muse) {
    let active = state.drag.active().cloned();
    state.drag.cancel();
    if let Some(active) = active {
        if let DragSource::Bubble(index) = active.source {
            spring_home(state, index, &active);
        }
        tracing::debug!("Drag cancelled");
    }
}

/// Bubble keeps its position; animate back from where it was let go.
fn spring_home(state: &mut Muse, index: usize, active: &ActiveDrag) {
    let (Some(home), Some(motion)) = (
        state.field.field.position(index),
        state.field.motions.get_mut(index),
    ) else {
        return;
    };
    let delta = active.delta();
    motion.release(
        (home.x + delta.x, home.y + delta.y),
        (0.0, 0.0),
        (home.x, home.y),
    );
}

/// Commit `old + delta` and let release velocity carry the bubble past it.
fn commit_move(state: &mut Muse, index: usize, active: &ActiveDrag) {
    let delta = active.delta();
    let Some(target) = state.field.field.commit_drag(index, delta.x, delta.y) else {
        return;
    };
    if let Some(motion) = state.field.motions.get_mut(index) {
        motion.release(
            (target.x, target.y),
            (active.velocity.x, active.velocity.y),
            (target.x, target.y),
        );
    }
    tracing::debug!(index, x = target.x, y = target.y, "Bubble moved");
}
