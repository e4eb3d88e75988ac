//! Shared constants for the Muse UI.
//!
//! The main column is pinned to the top of the window with fixed heights so
//! the anchor rectangle (theme input + button) can be computed from the
//! window size alone.

/// Initial window size.
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 900.0;

/// Space above the title.
pub const TOP_PADDING: f32 = 40.0;
pub const TITLE_HEIGHT: f32 = 56.0;
/// Vertical gap between main-column sections.
pub const SECTION_SPACING: f32 = 24.0;

/// Input panel width cap (and side gutter when the window is narrow).
pub const PANEL_MAX_WIDTH: f32 = 672.0;
pub const PANEL_GUTTER: f32 = 16.0;
pub const EDITOR_HEIGHT: f32 = 128.0;
pub const BUTTON_HEIGHT: f32 = 48.0;

/// Grid cell edge length.
pub const SLOT_SIZE: f32 = 96.0;
pub const SLOT_SPACING: f32 = 8.0;

pub const BUBBLE_FONT_SIZE: f32 = 14.0;
/// Keeps bubbles from being pushed past the right/bottom window edge.
pub const BUBBLE_EDGE_RESERVE: f32 = 48.0;
/// Scale while a bubble is being dragged.
pub const DRAG_SCALE: f32 = 1.1;
/// Scale a new bubble springs in from.
pub const SPAWN_SCALE: f32 = 0.3;

/// Bubble spring.
pub const SPRING_STIFFNESS: f32 = 60.0;
pub const SPRING_DAMPING: f32 = 12.0;

/// Longest frame step fed to the animations (seconds).
pub const MAX_FRAME_STEP: f32 = 0.05;

pub const PARTICLE_COUNT: usize = 100;

/// Bars in the busy indicator.
pub const BRAINWAVE_BARS: usize = 9;
