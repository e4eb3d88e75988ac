//! Bubble placement for the floating field.
//!
//! Rejection sampling around an anchor rectangle (the theme input box): pick
//! one of seven zones at random, jitter a candidate inside it, and accept the
//! candidate if it keeps a minimum distance from every bubble already placed.
//! Up to `max_attempts` draws are made for one idea. When all of them fail the
//! idea stays unpositioned until the idea count changes again; nothing retries
//! in between. With enough bubbles on screen new ones can silently fail to
//! place.

use rand::Rng;

/// A point relative to the field container's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

/// Directional zone around the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Left,
    TopLeft,
    Right,
    CenterLeft,
    CenterRight,
    BottomLeft,
    BottomRight,
}

impl Zone {
    pub const ALL: [Zone; 7] = [
        Zone::Left,
        Zone::TopLeft,
        Zone::Right,
        Zone::CenterLeft,
        Zone::CenterRight,
        Zone::BottomLeft,
        Zone::BottomRight,
    ];

    /// Uniform pick over all seven zones.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Zone {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Tuning for the placement search. Units are logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Gap between the anchor edge and the zone.
    pub margin: f32,
    /// Width of the uniform jitter window.
    pub jitter: f32,
    /// Candidates must be strictly farther than this from every placed bubble.
    pub min_distance: f32,
    pub max_attempts: usize,
    /// Extra leftward shift for the left-hand zones.
    pub side_shift: f32,
    /// Extra downward shift for the center zones.
    pub center_drop: f32,
    /// Extra downward shift for the bottom zones.
    pub bottom_drop: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: 120.0,
            jitter: 50.0,
            min_distance: 100.0,
            max_attempts: 30,
            side_shift: 150.0,
            center_drop: 100.0,
            bottom_drop: 250.0,
        }
    }
}

impl PlacementConfig {
    /// One candidate point (window coordinates) inside `zone`.
    pub fn candidate<R: Rng + ?Sized>(&self, zone: Zone, anchor: &Rect, rng: &mut R) -> Position {
        let mut unit = || rng.gen_range(0.0f32..1.0);
        let (m, j) = (self.margin, self.jitter);

        let (x, y) = match zone {
            Zone::Left => (
                anchor.left() - m - unit() * j - self.side_shift,
                anchor.top() + unit() * anchor.height,
            ),
            Zone::TopLeft => (
                anchor.left() - m + unit() * j,
                anchor.top() - m + unit() * j,
            ),
            Zone::Right => (
                anchor.right() + m + unit() * j,
                anchor.top() + unit() * anchor.height,
            ),
            Zone::CenterLeft => (
                anchor.left() - m + unit() * j - self.side_shift,
                anchor.top() + unit() * anchor.height + self.center_drop,
            ),
            Zone::CenterRight => (
                anchor.right() + m + unit() * j,
                anchor.top() + unit() * anchor.height + self.center_drop,
            ),
            Zone::BottomLeft => (
                anchor.left() - m + unit() * j - self.side_shift,
                anchor.bottom() + m + unit() * j + self.bottom_drop,
            ),
            Zone::BottomRight => (
                anchor.right() + m + unit() * j,
                anchor.bottom() + m + unit() * j + self.bottom_drop,
            ),
        };
        Position::new(x, y)
    }

    /// Search for a position far enough from `existing`.
    ///
    /// `container` is the field container's origin in window coordinates;
    /// the returned position is relative to it.
    pub fn place<R: Rng + ?Sized>(
        &self,
        anchor: &Rect,
        container: Position,
        existing: &[Position],
        rng: &mut R,
    ) -> Option<Position> {
        for attempt in 0..self.max_attempts {
            let zone = Zone::random(rng);
            let raw = self.candidate(zone, anchor, rng);
            let candidate = Position::new(raw.x - container.x, raw.y - container.y);

            if existing
                .iter()
                .all(|p| candidate.distance(*p) > self.min_distance)
            {
                tracing::debug!(?zone, attempt, x = candidate.x, y = candidate.y, "Placed bubble");
                return Some(candidate);
            }
        }
        None
    }
}

/// What one call to [`FloatingField::place_next`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    /// Nothing pending, or the pending idea already failed at this idea count.
    Idle,
    Placed { index: usize, position: Position },
    Failed { index: usize },
}

/// Positions of the bubbles on the field, index-aligned with the idea list.
#[derive(Debug, Clone, Default)]
pub struct FloatingField {
    config: PlacementConfig,
    positions: Vec<Position>,
    /// Idea count at the last failed attempt.
    stalled_at: Option<usize>,
}

impl FloatingField {
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            config,
            positions: Vec::new(),
            stalled_at: None,
        }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    /// Whether an idea is still waiting for a position.
    pub fn has_pending(&self, idea_count: usize) -> bool {
        idea_count > self.positions.len() && self.stalled_at != Some(idea_count)
    }

    /// Place at most one pending idea.
    pub fn place_next<R: Rng + ?Sized>(
        &mut self,
        idea_count: usize,
        anchor: &Rect,
        container: Position,
        rng: &mut R,
    ) -> PlacementOutcome {
        if !self.has_pending(idea_count) {
            return PlacementOutcome::Idle;
        }

        let index = self.positions.len();
        match self.config.place(anchor, container, &self.positions, rng) {
            Some(position) => {
                self.positions.push(position);
                self.stalled_at = None;
                PlacementOutcome::Placed { index, position }
            }
            None => {
                tracing::warn!(
                    index,
                    attempts = self.config.max_attempts,
                    "No free spot for bubble; leaving it unplaced"
                );
                self.stalled_at = Some(idea_count);
                PlacementOutcome::Failed { index }
            }
        }
    }

    /// Commit a finished drag: `old + delta`.
    pub fn commit_drag(&mut self, index: usize, dx: f32, dy: f32) -> Option<Position> {
        let position = self.positions.get_mut(index)?;
        *position = position.offset(dx, dy);
        Some(*position)
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.stalled_at = None;
    }
}
