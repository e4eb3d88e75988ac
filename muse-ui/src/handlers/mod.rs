//! Handler modules for the Muse application.
//!
//! Handlers are organized by domain:
//! - `input`: theme editor, submission
//! - `session`: remote generate/fuse calls and their results, reset
//! - `grid`: slot hover, removal, combine
//! - `drag`: press, move, release of bubbles and history tokens
//! - `window`: raw event routing, resize
//! - `tick`: per-frame animation and bubble placement

pub mod drag;
pub mod grid;
pub mod input;
pub mod session;
pub mod tick;
pub mod window;

use iced::Task;

use crate::msg::{Action, Message};

/// Result of processing a domain message.
pub struct HandlerResult {
    pub task: Task<Message>,
    pub actions: Vec<Action>,
}

impl HandlerResult {
    /// No task, no actions.
    pub fn none() -> Self {
        Self {
            task: Task::none(),
            actions: Vec::new(),
        }
    }

    /// Single action, no task.
    pub fn action(action: Action) -> Self {
        Self {
            task: Task::none(),
            actions: vec![action],
        }
    }
}
