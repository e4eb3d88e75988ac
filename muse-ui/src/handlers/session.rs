//! Session domain handler.
//!
//! Spawns the remote generate/fuse calls as `Task`s and applies their
//! results to the controller when they come back.

use iced::Task;

use muse_core::FusionOutcome;

use crate::msg::{Message, SessionMessage};
use crate::state::Muse;

pub fn update(state: &mut Muse, msg: SessionMessage) -> Task<Message> {
    match msg {
        SessionMessage::Generated(result) => generated(state, result),
        SessionMessage::Fused(result) => fused(state, result),
        SessionMessage::DismissError => {
            state.controller.dismiss_error();
            Task::none()
        }
        SessionMessage::Reset => {
            reset(state);
            Task::none()
        }
    }
}

/// Start a generation round. Ignored when the theme is blank or a call is
/// already running.
pub fn spawn_generate(state: &mut Muse, theme: String) -> Task<Message> {
    let Some(job) = state.controller.begin_generate(&theme) else {
        tracing::debug!("Generate ignored: blank theme or busy");
        return Task::none();
    };

    tracing::info!(theme = %job.theme, follow_up = job.follow_up, "Generating ideas");
    let service = state.service.clone();
    Task::perform(
        async move {
            service
                .generate_ideas(&job)
                .await
                .map_err(|e| e.to_string())
        },
        |result| Message::Session(SessionMessage::Generated(result)),
    )
}

/// Start a fusion of `selected`, in slot order.
pub fn spawn_fuse(state: &mut Muse, selected: Vec<String>) -> Task<Message> {
    let Some(job) = state.controller.begin_fuse(selected) else {
        tracing::debug!("Fuse ignored: too few selections or busy");
        return Task::none();
    };

    tracing::info!(inputs = job.selected.len(), "Fusing ideas");
    let service = state.service.clone();
    Task::perform(
        async move { service.fuse_ideas(&job).await.map_err(|e| e.to_string()) },
        |result| Message::Session(SessionMessage::Fused(result)),
    )
}

/// New ideas get their bubbles on the following frames.
fn generated(state: &mut Muse, result: Result<Vec<String>, String>) -> Task<Message> {
    if let Ok(added) = state.controller.finish_generate(result) {
        tracing::debug!(count = added.len(), "Queued bubbles for placement");
    }
    Task::none()
}

fn fused(state: &mut Muse, result: Result<FusionOutcome, String>) -> Task<Message> {
    if let Ok(Some(record)) = state.controller.finish_fuse(result) {
        tracing::debug!(result = %record.result_text, score = %record.score_text, "Fusion applied");
    }
    state.sync_grid();
    Task::none()
}

/// Drop ideas, bubbles, history and grid contents. The theme text stays.
pub fn reset(state: &mut Muse) {
    state.controller.reset();
    state.field.clear();
    state.drag.cancel();
    state.grid.hovered = None;
    state.sync_grid();
    tracing::info!("Session reset");
}
