//! Window domain handler.
//!
//! Routes raw events: cursor and button events drive the drag state
//! machine, resizes move the anchor and the particle bounds.

use std::time::Instant;

use iced::keyboard::{self, key::Named, Key};
use iced::{mouse, window, Event, Size};

use super::drag;
use crate::msg::WindowMessage;
use crate::state::Muse;

pub fn update(state: &mut Muse, msg: WindowMessage) {
    match msg {
        WindowMessage::Event(event) => handle_event(state, event),
    }
}

fn handle_event(state: &mut Muse, event: Event) {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            state.window.cursor = position;
            drag::cursor_moved(state, position, Instant::now());
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            drag::released(state, Instant::now());
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => drag::cancel(state),
        Event::Window(window::Event::Resized(size)) => resized(state, size),
        _ => {}
    }
}

fn resized(state: &mut Muse, size: Size) {
    state.window.dims = (size.width, size.height);
    state.particles.resize(state.window.dims);
    tracing::debug!(width = size.width, height = size.height, "Window resized");
}
