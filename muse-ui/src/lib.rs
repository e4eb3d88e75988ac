//! Muse UI - Iced-based frontend for the Muse slogan generator.
//!
//! Built using the Iced GUI framework following the Elm architecture.
//!
//! # Module Organization
//!
//! - `app`: Main application coordinator (update, view, subscription)
//! - `state`: Application state (Muse struct)
//! - `msg`: Message types that drive the update loop
//! - `handlers`: Per-domain update functions
//! - `ui`: View rendering modules
//! - `widgets`: Bubble, busy indicator and particle backdrop
//! - `drag` / `animation`: Drag state machine and bubble springs

// Shared constants (no dependencies)
pub mod constants;

pub mod animation;
pub mod cli;
pub mod drag;
pub mod theme;
pub mod widgets;

// Message types (depends on drag)
pub mod msg;

// State (depends on animation, drag, widgets)
pub mod state;

// UI views (depends on msg, state, widgets)
pub mod ui;

// Handlers (depends on msg, state)
pub mod handlers;

pub mod app;

#[cfg(test)]
mod tests;

pub use state::{Muse, MuseSettings};
