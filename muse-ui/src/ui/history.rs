//! Fusion history: one row per record, with a draggable result token.

use iced::widget::{column, container, mouse_area, row, scrollable, text, Column, Space};
use iced::{mouse, Alignment, Background, Element, Font, Length};

use muse_core::FusionRecord;

use crate::drag::DragSource;
use crate::msg::{DragMessage, Message};
use crate::state::Muse;
use crate::theme::MuseTheme;
use crate::widgets::bubble::gold_token;

const HISTORY_MAX_WIDTH: f32 = 768.0;

pub fn view_history(state: &Muse) -> Element<'_, Message> {
    let history = state.controller.history();
    if history.is_empty() {
        return Space::with_height(Length::Shrink).into();
    }

    let rows = history
        .iter()
        .enumerate()
        .map(|(index, record)| view_record(index, record));

    let panel = column![
        text("🧬 融合记录")
            .size(20)
            .font(Font {
                weight: iced::font::Weight::Semibold,
                ..Font::DEFAULT
            })
            .color(MuseTheme::ACCENT_PURPLE),
        text("可拖动结果再次融合 💡")
            .size(13)
            .color(MuseTheme::FG_MUTED),
        scrollable(Column::with_children(rows).spacing(8)).height(Length::Fill),
    ]
    .spacing(8);

    container(panel)
        .padding(16)
        .max_width(HISTORY_MAX_WIDTH)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(MuseTheme::BG_PANEL)),
            border: MuseTheme::rounded(MuseTheme::BORDER_DEFAULT, 16.0),
            ..Default::default()
        })
        .into()
}

fn view_record(index: usize, record: &FusionRecord) -> Element<'_, Message> {
    let details = column![
        text(format!("组合: {}", record.combination_label())).size(13),
        text(format!("评分: {}", record.score_text))
            .size(13)
            .color(MuseTheme::FG_MUTED),
    ]
    .spacing(2)
    .width(Length::Fill);

    let token = mouse_area(gold_token(&record.result_text))
        .on_press(Message::Drag(DragMessage::Press(DragSource::FusionResult(index))))
        .interaction(mouse::Interaction::Grab);

    container(row![details, token].spacing(16).align_y(Alignment::Center))
        .padding(12)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            border: MuseTheme::rounded(MuseTheme::BORDER_RECORD, 8.0),
            ..Default::default()
        })
        .into()
}
