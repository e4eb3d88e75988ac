//! Idea bubble and fusion token builders.
//!
//! `iced` has no widget transforms, so scale is applied to font size and
//! padding, and opacity to every color.

use iced::widget::text::IntoFragment;
use iced::widget::{container, text, Container};
use iced::{Color, Font, Padding, Shadow, Vector};

use muse_core::IdeaKind;

use crate::constants::BUBBLE_FONT_SIZE;
use crate::theme::{fade, MuseTheme};

/// How a bubble is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleLook {
    pub kind: IdeaKind,
    pub scale: f32,
    pub opacity: f32,
    /// Being dragged: drawn with a deeper shadow.
    pub lifted: bool,
}

impl BubbleLook {
    pub fn resting(kind: IdeaKind) -> Self {
        Self {
            kind,
            scale: 1.0,
            opacity: 1.0,
            lifted: false,
        }
    }
}

/// A rounded, gradient-filled phrase bubble.
pub fn bubble<'a, Message: 'a>(
    label: impl IntoFragment<'a>,
    look: BubbleLook,
) -> Container<'a, Message> {
    let (colors, border, fg) = match look.kind {
        IdeaKind::Normal => (MuseTheme::BUBBLE_NORMAL, MuseTheme::BORDER_DEFAULT, Color::WHITE),
        IdeaKind::Fused => (MuseTheme::BUBBLE_FUSED, MuseTheme::BORDER_FUSED, Color::BLACK),
    };
    let alpha = look.opacity;
    let shadow_offset = if look.lifted { 6.0 } else { 1.0 };

    container(
        text(label)
            .size(BUBBLE_FONT_SIZE * look.scale)
            .font(Font {
                weight: iced::font::Weight::Medium,
                ..Font::DEFAULT
            })
            .color(fade(fg, alpha)),
    )
    .padding(Padding {
        top: 8.0 * look.scale,
        bottom: 8.0 * look.scale,
        left: 16.0 * look.scale,
        right: 16.0 * look.scale,
    })
    .style(move |_theme| container::Style {
        background: Some(MuseTheme::diagonal(colors, alpha)),
        border: MuseTheme::rounded(fade(border, alpha), 12.0 * look.scale),
        shadow: Shadow {
            color: fade(Color::from_rgba(0.0, 0.0, 0.0, 0.4), alpha),
            offset: Vector::new(0.0, shadow_offset),
            blur_radius: shadow_offset * 3.0,
        },
        ..Default::default()
    })
}

/// The gold result token in the fusion history.
pub fn gold_token<'a, Message: 'a>(label: &'a str) -> Container<'a, Message> {
    container(
        text(label)
            .size(BUBBLE_FONT_SIZE)
            .font(Font {
                weight: iced::font::Weight::Semibold,
                ..Font::DEFAULT
            })
            .color(Color::BLACK),
    )
    .padding([4, 12])
    .style(|_theme| container::Style {
        background: Some(MuseTheme::diagonal(MuseTheme::TOKEN_GOLD, 1.0)),
        border: MuseTheme::rounded(MuseTheme::BORDER_FUSED, 12.0),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    })
}
