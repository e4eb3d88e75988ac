//! Theme input panel: editor, generate button, error banner.

use iced::widget::{button, column, container, row, text, text_editor, Space};
use iced::{Alignment, Background, Border, Element, Length};

use crate::constants::{BUTTON_HEIGHT, EDITOR_HEIGHT, SECTION_SPACING};
use crate::msg::{InputMessage, Message, SessionMessage};
use crate::state::Muse;
use crate::theme::{fade, MuseTheme};
use crate::widgets::brainwave::brainwave;

const PLACEHOLDER: &str = "输入你的产品或品牌，例如“冥想健身房”";

/// The anchor panel. Its height is fixed so bubble placement can be
/// computed from the window size.
pub fn view_input(state: &Muse) -> Element<'_, Message> {
    let busy = state.is_busy();

    let editor = text_editor(&state.input.content)
        .placeholder(PLACEHOLDER)
        .on_action(|action| Message::Input(InputMessage::EditorAction(action)))
        .height(Length::Fixed(EDITOR_HEIGHT))
        .padding(16)
        .size(16)
        .style(|_theme, status| {
            let border_color = match status {
                text_editor::Status::Focused => MuseTheme::ACCENT_PRIMARY,
                _ => MuseTheme::BORDER_DEFAULT,
            };
            text_editor::Style {
                background: Background::Color(MuseTheme::BG_PANEL),
                border: MuseTheme::rounded(border_color, 12.0),
                icon: MuseTheme::FG_MUTED,
                placeholder: MuseTheme::FG_PLACEHOLDER,
                value: MuseTheme::FG_PRIMARY,
                selection: fade(MuseTheme::ACCENT_PRIMARY, 0.4),
            }
        });

    let label: Element<'_, Message> = if busy {
        brainwave(state.window.clock)
    } else if state.controller.has_generated_once() {
        text("绞尽脑汁").size(16).into()
    } else {
        text("寻求灵感").size(16).into()
    };

    let submit = button(
        container(label)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press_maybe((!busy).then_some(Message::Input(InputMessage::Submit)))
    .width(Length::Fill)
    .height(Length::Fixed(BUTTON_HEIGHT))
    .style(|_theme, status| {
        let (bg, alpha) = match status {
            button::Status::Hovered | button::Status::Pressed => (MuseTheme::ACCENT_HOVER, 1.0),
            button::Status::Disabled => (MuseTheme::ACCENT_PRIMARY, 0.5),
            button::Status::Active => (MuseTheme::ACCENT_PRIMARY, 1.0),
        };
        button::Style {
            background: Some(Background::Color(fade(bg, alpha))),
            text_color: MuseTheme::FG_PRIMARY,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    column![editor, submit]
        .spacing(SECTION_SPACING)
        .width(Length::Fixed(state.window.panel_width()))
        .into()
}

/// Last failed call, with a dismiss button. Empty when there is none.
pub fn view_error(state: &Muse) -> Element<'_, Message> {
    let Some(error) = state.controller.last_error() else {
        return Space::with_height(Length::Shrink).into();
    };

    let dismiss = button(text("×").size(14))
        .on_press(Message::Session(SessionMessage::DismissError))
        .padding([0, 8])
        .style(|_theme, _status| button::Style {
            background: None,
            text_color: MuseTheme::ERROR,
            ..Default::default()
        });

    container(
        row![
            text(format!("请求失败：{error}"))
                .size(13)
                .color(MuseTheme::ERROR)
                .width(Length::Fill),
            dismiss,
        ]
        .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .width(Length::Fixed(state.window.panel_width()))
    .style(|_theme| container::Style {
        background: Some(Background::Color(fade(MuseTheme::ERROR, 0.12))),
        border: MuseTheme::rounded(fade(MuseTheme::ERROR, 0.5), 8.0),
        ..Default::default()
    })
    .into()
}
