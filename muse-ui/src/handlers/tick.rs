//! Per-frame work: particle drift, bubble springs and bubble placement.

use std::time::Instant;

use muse_core::PlacementOutcome;

use crate::constants::MAX_FRAME_STEP;
use crate::state::Muse;

pub fn update(state: &mut Muse, now: Instant) {
    let dt = match state.window.last_frame {
        Some(last) => now
            .saturating_duration_since(last)
            .as_secs_f32()
            .min(MAX_FRAME_STEP),
        None => 0.0,
    };
    state.window.last_frame = Some(now);

    advance(state, dt);
    place_pending(state);
}

/// Step every animation by `dt` seconds.
pub fn advance(state: &mut Muse, dt: f32) {
    state.window.clock += dt;
    state.particles.advance(dt);
    state.field.step(dt);
}

/// Position at most one idea that has no bubble yet.
pub fn place_pending(state: &mut Muse) -> PlacementOutcome {
    let anchor = state.window.anchor_rect();
    let idea_count = state.controller.ideas().len();
    state.field.place_next(idea_count, &anchor)
}
