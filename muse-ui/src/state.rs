//! Application state for the Muse UI.
//!
//! State is organized into domains, each mutated only by its handler:
//! - `InputState`: the theme editor
//! - `FieldState`: bubble positions, their motion and the placement RNG
//! - `GridState`: the combination grid and the slot under the cursor
//! - `WindowState`: window dimensions and the derived anchor rectangle
//!
//! The session itself (ideas, fusion history, busy flag) is owned by
//! `muse_core::GenerationController`.

use std::time::Instant;

use iced::widget::text_editor;
use iced::Point;
use rand::rngs::StdRng;
use rand::SeedableRng;

use muse_core::{
    CombinationGrid, ControllerOptions, FloatingField, GenerationController, IdeaService,
    PlacementConfig, PlacementOutcome, Position, Rect,
};

use crate::animation::BubbleMotion;
use crate::constants::{
    BUTTON_HEIGHT, EDITOR_HEIGHT, PANEL_GUTTER, PANEL_MAX_WIDTH, SECTION_SPACING, TITLE_HEIGHT,
    TOP_PADDING, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::drag::DragState;
use crate::widgets::particles::ParticleField;

/// Startup configuration handed to the application.
#[derive(Clone)]
pub struct MuseSettings {
    pub service: IdeaService,
    pub controller: ControllerOptions,
    pub placement: PlacementConfig,
    /// Fixed RNG seed for reproducible bubble layout.
    pub seed: Option<u64>,
}

// =============================================================================
// Input Domain State
// =============================================================================

/// State for the theme input.
#[derive(Default)]
pub struct InputState {
    pub content: text_editor::Content,
}

impl InputState {
    pub fn text(&self) -> String {
        self.content.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.content = text_editor::Content::with_text(text);
    }
}

// =============================================================================
// Field Domain State
// =============================================================================

/// Bubble layout plus per-bubble animation, index-aligned with the ideas.
pub struct FieldState {
    pub field: FloatingField,
    pub motions: Vec<BubbleMotion>,
    pub rng: StdRng,
}

impl FieldState {
    pub fn new(config: PlacementConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            field: FloatingField::new(config),
            motions: Vec::new(),
            rng,
        }
    }

    /// Place at most one pending idea and start its spawn animation.
    pub fn place_next(&mut self, idea_count: usize, anchor: &Rect) -> PlacementOutcome {
        let outcome = self
            .field
            .place_next(idea_count, anchor, Position::ORIGIN, &mut self.rng);
        if let PlacementOutcome::Placed { position, .. } = outcome {
            self.motions.push(BubbleMotion::spawn(position.x, position.y));
        }
        outcome
    }

    pub fn clear(&mut self) {
        self.field.clear();
        self.motions.clear();
    }

    /// Advance every bubble's springs. Returns whether any is still moving.
    pub fn step(&mut self, dt: f32) -> bool {
        let mut moving = false;
        for motion in &mut self.motions {
            moving |= motion.step(dt);
        }
        moving
    }
}

// =============================================================================
// Grid Domain State
// =============================================================================

#[derive(Default)]
pub struct GridState {
    pub grid: CombinationGrid,
    /// Slot under the cursor, tracked from enter/exit events.
    pub hovered: Option<usize>,
}

// =============================================================================
// Window Domain State
// =============================================================================

pub struct WindowState {
    /// Window dimensions in logical pixels.
    pub dims: (f32, f32),
    /// Last known cursor position.
    pub cursor: Point,
    /// Previous frame time, for animation steps.
    pub last_frame: Option<Instant>,
    /// Seconds since start, drives the busy indicator.
    pub clock: f32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            dims: (WINDOW_WIDTH, WINDOW_HEIGHT),
            cursor: Point::ORIGIN,
            last_frame: None,
            clock: 0.0,
        }
    }
}

impl WindowState {
    /// Width of the input panel for the current window width.
    pub fn panel_width(&self) -> f32 {
        (self.dims.0 - 2.0 * PANEL_GUTTER).clamp(0.0, PANEL_MAX_WIDTH)
    }

    /// The theme input plus its button, in window coordinates.
    ///
    /// Bubbles are placed around this rectangle.
    pub fn anchor_rect(&self) -> Rect {
        let width = self.panel_width();
        Rect::new(
            (self.dims.0 - width) / 2.0,
            TOP_PADDING + TITLE_HEIGHT + SECTION_SPACING,
            width,
            EDITOR_HEIGHT + SECTION_SPACING + BUTTON_HEIGHT,
        )
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// The main Muse application state.
pub struct Muse {
    pub controller: GenerationController,
    pub service: IdeaService,
    pub input: InputState,
    pub field: FieldState,
    pub grid: GridState,
    pub drag: DragState,
    pub window: WindowState,
    pub particles: ParticleField,
}

impl Muse {
    pub fn new(settings: MuseSettings) -> Self {
        let controller = GenerationController::new(settings.controller);
        let grid = GridState {
            grid: CombinationGrid::with_key(controller.grid_key()),
            hovered: None,
        };
        let window = WindowState::default();
        let mut field = FieldState::new(settings.placement, settings.seed);
        let particles = ParticleField::new(window.dims, &mut field.rng);

        Self {
            controller,
            service: settings.service,
            input: InputState::default(),
            field,
            grid,
            drag: DragState::new(),
            window,
            particles,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.controller.is_busy()
    }

    /// Clear the grid if the controller's grid key moved on.
    pub fn sync_grid(&mut self) {
        if self.grid.grid.sync_key(self.controller.grid_key()) {
            tracing::debug!(key = self.controller.grid_key(), "Grid reset");
        }
    }
}
