//! Domain error types.

use muse_llm::LlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MuseError {
    #[error("model request failed: {0}")]
    Llm(#[from] LlmError),

    #[error("theme is empty")]
    EmptyTheme,

    #[error("a request is already in flight")]
    Busy,

    #[error("fusion needs at least 2 ideas, got {0}")]
    NotEnoughSelections(usize),
}
