//! Internal drag state machine - Pending/Active/Inactive with hysteresis.
//!
//! The 5px threshold prevents swallowing clicks on draggable elements.
//! A press that is released before the threshold is crossed is a click and
//! moves nothing.

use std::time::{Duration, Instant};

use iced::{Point, Vector};

/// Drag hysteresis threshold in pixels (squared for faster comparison).
pub const DRAG_THRESHOLD_SQ: f32 = 25.0; // 5px

/// Weight of the newest sample in the velocity estimate.
const VELOCITY_SMOOTHING: f32 = 0.35;

/// A pointer held still this long before release throws with no momentum.
pub const MOMENTUM_WINDOW: Duration = Duration::from_millis(100);

/// The drag state machine.
#[derive(Debug, Clone)]
pub struct DragState {
    pub status: DragStatus,
}

impl DragState {
    pub fn new() -> Self {
        Self {
            status: DragStatus::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, DragStatus::Active(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, DragStatus::Pending { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.status, DragStatus::Inactive)
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.status {
            DragStatus::Active(drag) => Some(drag),
            _ => None,
        }
    }

    /// The source currently being dragged, once the drag is live.
    pub fn active_source(&self) -> Option<DragSource> {
        self.active().map(|d| d.source)
    }

    /// Mouse went down on a draggable element.
    pub fn press(&mut self, source: DragSource, payload: DragPayload, origin: Point) {
        self.status = DragStatus::Pending {
            origin,
            payload,
            source,
        };
    }

    /// Feed a cursor move. Returns true when this move activated the drag.
    pub fn move_to(&mut self, position: Point, now: Instant) -> bool {
        match &mut self.status {
            DragStatus::Inactive => false,
            DragStatus::Pending {
                origin,
                payload,
                source,
            } => {
                let d = position - *origin;
                if d.x * d.x + d.y * d.y <= DRAG_THRESHOLD_SQ {
                    return false;
                }
                self.status = DragStatus::Active(ActiveDrag {
                    payload: payload.clone(),
                    origin: *origin,
                    current_pos: position,
                    source: *source,
                    velocity: Vector::ZERO,
                    last_move: now,
                });
                true
            }
            DragStatus::Active(drag) => {
                let dt = now.duration_since(drag.last_move).as_secs_f32();
                if dt > 0.0 {
                    let step = position - drag.current_pos;
                    let sample = Vector::new(step.x / dt, step.y / dt);
                    drag.velocity = drag.velocity * (1.0 - VELOCITY_SMOOTHING)
                        + sample * VELOCITY_SMOOTHING;
                }
                drag.current_pos = position;
                drag.last_move = now;
                false
            }
        }
    }

    /// Mouse released at `now`. Returns the live drag, if there was one.
    ///
    /// The velocity fades linearly over [`MOMENTUM_WINDOW`] since the last
    /// move, so a pointer that stopped before letting go carries nothing.
    pub fn release(&mut self, now: Instant) -> Option<ActiveDrag> {
        match std::mem::replace(&mut self.status, DragStatus::Inactive) {
            DragStatus::Active(mut drag) => {
                let held = now.saturating_duration_since(drag.last_move);
                let carry = 1.0 - held.as_secs_f32() / MOMENTUM_WINDOW.as_secs_f32();
                drag.velocity = drag.velocity * carry.clamp(0.0, 1.0);
                Some(drag)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.status = DragStatus::Inactive;
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum DragStatus {
    /// No drag in progress.
    Inactive,
    /// Mouse is down on a draggable element, hasn't moved 5px yet.
    Pending {
        origin: Point,
        payload: DragPayload,
        source: DragSource,
    },
    /// Mouse has moved >5px from origin - drag is live.
    /// The bubble follows the cursor, grid slots highlight.
    Active(ActiveDrag),
}

#[derive(Debug, Clone)]
pub struct ActiveDrag {
    pub payload: DragPayload,
    pub origin: Point,
    pub current_pos: Point,
    pub source: DragSource,
    /// Smoothed pointer velocity (px/s), used as release momentum.
    pub velocity: Vector,
    pub last_move: Instant,
}

impl ActiveDrag {
    /// Total offset since the press.
    pub fn delta(&self) -> Vector {
        self.current_pos - self.origin
    }
}

/// Where a drag started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// A floating bubble, by idea index.
    Bubble(usize),
    /// A result token in the fusion history, by record index.
    FusionResult(usize),
}

/// What's being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// Plain text; the only format grid slots accept.
    Text(String),
}

impl DragPayload {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(s) => s,
        }
    }

    /// Short display text for the ghost preview (max 24 chars).
    pub fn preview_text(&self) -> String {
        let text = self.text();
        if text.chars().count() > 24 {
            let head: String = text.chars().take(21).collect();
            format!("{head}...")
        } else {
            text.to_string()
        }
    }
}
