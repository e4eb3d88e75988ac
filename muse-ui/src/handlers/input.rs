//! Input domain handler.
//!
//! Takes only `&mut InputState`; submission is returned as an `Action`
//! for the coordinator.

use iced::widget::text_editor;

use super::HandlerResult;
use crate::msg::{Action, InputMessage};
use crate::state::InputState;

pub fn update(input: &mut InputState, msg: InputMessage) -> HandlerResult {
    match msg {
        InputMessage::EditorAction(action) => editor_action(input, action),
        InputMessage::Submit => submit(input),
    }
}

fn editor_action(input: &mut InputState, action: text_editor::Action) -> HandlerResult {
    input.content.perform(action);
    HandlerResult::none()
}

/// The theme stays in the editor; later rounds reuse it.
fn submit(input: &InputState) -> HandlerResult {
    let theme = input.text();
    if theme.trim().is_empty() {
        return HandlerResult::none();
    }
    HandlerResult::action(Action::Generate(theme))
}
