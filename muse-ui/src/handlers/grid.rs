//! Grid domain handler.
//!
//! Takes only `&mut GridState`. Combining hands the selection to the
//! session domain as an `Action`.

use super::HandlerResult;
use crate::msg::{Action, GridMessage};
use crate::state::GridState;

pub fn update(grid: &mut GridState, msg: GridMessage) -> HandlerResult {
    match msg {
        GridMessage::Remove(index, text) => {
            if grid.grid.remove(&text, index) {
                tracing::debug!(slot = index, %text, "Removed from grid");
            }
            HandlerResult::none()
        }
        GridMessage::Combine => match grid.grid.combine() {
            Some(selected) => HandlerResult::action(Action::Fuse(selected)),
            None => HandlerResult::none(),
        },
        GridMessage::SlotEntered(index) => {
            grid.hovered = Some(index);
            HandlerResult::none()
        }
        GridMessage::SlotExited(index) => {
            if grid.hovered == Some(index) {
                grid.hovered = None;
            }
            HandlerResult::none()
        }
    }
}

/// Drop `text` into the hovered slot, if any. Returns the slot it landed in.
pub fn drop_on_hovered(grid: &mut GridState, text: &str) -> Option<usize> {
    let slot = grid.hovered?;
    if grid.grid.drop(text, slot) {
        tracing::debug!(slot, %text, "Dropped into grid");
        Some(slot)
    } else {
        tracing::debug!(slot, "Slot occupied; drop ignored");
        None
    }
}
