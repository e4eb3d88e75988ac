//! Message types for the Muse application.
//!
//! Messages are organized into domains:
//! - `InputMessage`: theme editor and submit
//! - `SessionMessage`: remote results, error banner, reset
//! - `GridMessage`: slot hover, removal and combine
//! - `DragMessage`: presses on draggable elements
//! - `WindowMessage`: raw window events (cursor, release, resize)
//!
//! Cross-domain effects are returned by handlers as `Action` values.

use std::time::Instant;

use iced::widget::text_editor;
use iced::Event;

use muse_core::FusionOutcome;

use crate::drag::DragSource;

// =============================================================================
// Top-Level Message (Router)
// =============================================================================

/// Top-level messages; routed to domain handlers.
#[derive(Debug, Clone)]
pub enum Message {
    Input(InputMessage),
    Session(SessionMessage),
    Grid(GridMessage),
    Drag(DragMessage),
    Window(WindowMessage),
    /// Animation frame.
    Tick(Instant),
}

// =============================================================================
// Input Domain
// =============================================================================

#[derive(Debug, Clone)]
pub enum InputMessage {
    /// Editor action (typing, cursor movement, etc.).
    EditorAction(text_editor::Action),
    /// Generate button pressed.
    Submit,
}

// =============================================================================
// Session Domain
// =============================================================================

/// Errors travel as strings; `iced` messages must be `Clone`.
#[derive(Debug, Clone)]
pub enum SessionMessage {
    Generated(Result<Vec<String>, String>),
    Fused(Result<FusionOutcome, String>),
    DismissError,
    /// Start over: drop ideas, history and the grid.
    Reset,
}

// =============================================================================
// Grid Domain
// =============================================================================

#[derive(Debug, Clone)]
pub enum GridMessage {
    /// Click on a filled slot's tag.
    Remove(usize, String),
    /// Combine button pressed.
    Combine,
    SlotEntered(usize),
    SlotExited(usize),
}

// =============================================================================
// Drag Domain
// =============================================================================

#[derive(Debug, Clone)]
pub enum DragMessage {
    /// Mouse went down on a bubble or a history token.
    Press(DragSource),
}

// =============================================================================
// Window Domain
// =============================================================================

#[derive(Debug, Clone)]
pub enum WindowMessage {
    Event(Event),
}

// =============================================================================
// Cross-Domain Actions
// =============================================================================

/// Returned by handlers when they need another domain to act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a generation round for this theme.
    Generate(String),
    /// Fuse these texts, in slot order.
    Fuse(Vec<String>),
}

impl Message {
    pub fn input(msg: InputMessage) -> Self {
        Message::Input(msg)
    }

    pub fn session(msg: SessionMessage) -> Self {
        Message::Session(msg)
    }

    pub fn grid(msg: GridMessage) -> Self {
        Message::Grid(msg)
    }
}
