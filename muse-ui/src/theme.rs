//! Muse theme - semantic colors and styling.

use iced::gradient::Linear;
use iced::{Background, Border, Color, Degrees, Gradient};

/// Muse color palette.
pub struct MuseTheme;

impl MuseTheme {
    // Backgrounds
    pub const BG_PRIMARY: Color = Color::from_rgb(0.078, 0.078, 0.094);
    pub const BG_PANEL: Color = Color::from_rgb(0.102, 0.102, 0.110);
    pub const BG_TAG: Color = Color::from_rgb(0.180, 0.180, 0.188);

    // Foregrounds
    pub const FG_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const FG_TAG: Color = Color::from_rgb(0.765, 0.765, 0.765);
    pub const FG_MUTED: Color = Color::from_rgb(0.42, 0.45, 0.50);
    pub const FG_PLACEHOLDER: Color = Color::from_rgb(0.333, 0.333, 0.333);

    // Accents
    pub const ACCENT_PRIMARY: Color = Color::from_rgb(0.0, 0.341, 1.0);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.110, 0.431, 1.0);
    pub const ACCENT_PURPLE: Color = Color::from_rgb(0.494, 0.133, 0.808);
    pub const BRAINWAVE: Color = Color::from_rgb(0.847, 0.706, 0.996);

    // Status colors
    pub const ERROR: Color = Color::from_rgb(0.9, 0.3, 0.3);

    // Borders
    pub const BORDER_DEFAULT: Color = Color::from_rgb(0.165, 0.165, 0.180);
    pub const BORDER_FUSED: Color = Color::from_rgb(1.0, 0.863, 0.502);
    pub const BORDER_RECORD: Color = Color::from_rgb(0.914, 0.835, 1.0);

    // Bubble gradients
    pub const BUBBLE_NORMAL: (Color, Color) = (
        Color::from_rgb(0.137, 0.137, 0.157),
        Color::from_rgb(0.110, 0.110, 0.125),
    );
    pub const BUBBLE_FUSED: (Color, Color) = (
        Color::from_rgb(1.0, 0.843, 0.0),
        Color::from_rgb(1.0, 0.722, 0.0),
    );
    pub const TOKEN_GOLD: (Color, Color) = (
        Color::from_rgb(1.0, 0.843, 0.0),
        Color::from_rgb(1.0, 0.647, 0.0),
    );
}

impl MuseTheme {
    /// Top-left to bottom-right gradient, faded by `alpha`.
    pub fn diagonal(colors: (Color, Color), alpha: f32) -> Background {
        Background::Gradient(Gradient::Linear(
            Linear::new(Degrees(135.0))
                .add_stop(0.0, fade(colors.0, alpha))
                .add_stop(1.0, fade(colors.1, alpha)),
        ))
    }

    pub fn rounded(color: Color, radius: f32) -> Border {
        Border {
            color,
            width: 1.0,
            radius: radius.into(),
        }
    }
}

/// Multiply a color's alpha.
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
