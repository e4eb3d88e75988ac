//! The 3x3 combination grid and its combine button.

use iced::widget::{button, column, container, mouse_area, text, Column, Row, Space};
use iced::{mouse, Alignment, Background, Border, Element, Length};

use muse_core::{GRID_COLUMNS, MIN_FUSION_INPUTS};

use crate::constants::{SLOT_SIZE, SLOT_SPACING};
use crate::msg::{GridMessage, Message};
use crate::state::Muse;
use crate::theme::{fade, MuseTheme};

pub fn view_grid(state: &Muse) -> Element<'_, Message> {
    let grid = &state.grid.grid;
    let dragging = state.drag.is_active();

    let rows = grid.slots().chunks(GRID_COLUMNS).enumerate().map(|(r, chunk)| {
        let cells = chunk.iter().enumerate().map(|(c, slot)| {
            let index = r * GRID_COLUMNS + c;
            let highlighted = dragging && state.grid.hovered == Some(index);
            view_slot(index, slot.as_deref(), highlighted)
        });
        Row::with_children(cells).spacing(SLOT_SPACING).into()
    });

    let mut content = column![Column::with_children(rows).spacing(SLOT_SPACING)]
        .spacing(16)
        .align_x(Alignment::Center);

    if grid.filled_count() >= MIN_FUSION_INPUTS {
        let busy = state.is_busy();
        let combine = button(text("✨ 合成点子").size(15))
            .on_press_maybe((!busy).then_some(Message::grid(GridMessage::Combine)))
            .padding([8, 20])
            .style(|_theme, status| {
                let bg = match status {
                    button::Status::Hovered | button::Status::Pressed => MuseTheme::ACCENT_HOVER,
                    button::Status::Disabled => fade(MuseTheme::ACCENT_PRIMARY, 0.5),
                    button::Status::Active => MuseTheme::ACCENT_PRIMARY,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: MuseTheme::FG_PRIMARY,
                    border: Border {
                        radius: 12.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            });
        content = content.push(combine);
    }

    content.into()
}

/// One drop target. Hover is reported through enter/exit so a release can be
/// matched to a slot.
fn view_slot(index: usize, item: Option<&str>, highlighted: bool) -> Element<'_, Message> {
    let number = text((index + 1).to_string())
        .size(10)
        .color(MuseTheme::FG_MUTED);

    let body: Element<'_, Message> = match item {
        Some(tag) => mouse_area(
            container(text(tag).size(12).color(MuseTheme::FG_TAG))
                .padding([2, 8])
                .style(|_theme| container::Style {
                    background: Some(Background::Color(MuseTheme::BG_TAG)),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        )
        .on_press(Message::grid(GridMessage::Remove(index, tag.to_string())))
        .interaction(mouse::Interaction::Pointer)
        .into(),
        None => Space::with_height(Length::Shrink).into(),
    };

    let cell = container(column![
        number,
        container(body).center_x(Length::Fill).center_y(Length::Fill),
    ])
    .padding(4)
    .width(Length::Fixed(SLOT_SIZE))
    .height(Length::Fixed(SLOT_SIZE))
    .style(move |_theme| container::Style {
        background: Some(Background::Color(MuseTheme::BG_PANEL)),
        border: MuseTheme::rounded(
            if highlighted {
                MuseTheme::ACCENT_PRIMARY
            } else {
                MuseTheme::BORDER_DEFAULT
            },
            12.0,
        ),
        ..Default::default()
    });

    mouse_area(cell)
        .on_enter(Message::grid(GridMessage::SlotEntered(index)))
        .on_exit(Message::grid(GridMessage::SlotExited(index)))
        .into()
}
