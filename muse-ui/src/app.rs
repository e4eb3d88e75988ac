//! Main Muse application using Iced's Elm architecture.
//!
//! This module is a thin coordinator that routes messages to domain handlers.
//! Cross-domain effects are handled via the Action enum.

use iced::widget::{button, canvas, column, container, row, stack, text, Space};
use iced::{event, Alignment, Background, Element, Font, Length, Size, Subscription, Task, Theme};

use crate::constants::{SECTION_SPACING, TITLE_HEIGHT, TOP_PADDING, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::handlers::{self, HandlerResult};
use crate::msg::{Action, Message, SessionMessage, WindowMessage};
use crate::state::{Muse, MuseSettings};
use crate::theme::MuseTheme;
use crate::ui::{view_error, view_field, view_grid, view_history, view_input};
use crate::widgets::particles::ParticleLayer;

/// Run the Muse application.
pub fn run(settings: MuseSettings) -> iced::Result {
    iced::application("创意广告词生成器", update, view)
        .subscription(subscription)
        .theme(|_| Theme::Dark)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .antialiasing(true)
        .run_with(move || (Muse::new(settings), Task::none()))
}

// =============================================================================
// Update - Domain Router & Action Processor
// =============================================================================

/// The update function - routes messages to domain handlers.
pub fn update(state: &mut Muse, message: Message) -> Task<Message> {
    match message {
        Message::Input(msg) => {
            let result = handlers::input::update(&mut state.input, msg);
            finish(state, result)
        }
        Message::Grid(msg) => {
            let result = handlers::grid::update(&mut state.grid, msg);
            finish(state, result)
        }
        Message::Session(msg) => handlers::session::update(state, msg),
        Message::Drag(msg) => {
            handlers::drag::update(state, msg);
            Task::none()
        }
        Message::Window(msg) => {
            handlers::window::update(state, msg);
            Task::none()
        }
        Message::Tick(now) => {
            handlers::tick::update(state, now);
            Task::none()
        }
    }
}

fn finish(state: &mut Muse, result: HandlerResult) -> Task<Message> {
    let action_tasks = process_actions(state, result.actions);
    Task::batch([result.task, action_tasks])
}

/// Process cross-domain actions returned by handlers.
fn process_actions(state: &mut Muse, actions: Vec<Action>) -> Task<Message> {
    let tasks: Vec<Task<Message>> = actions
        .into_iter()
        .map(|action| match action {
            Action::Generate(theme) => handlers::session::spawn_generate(state, theme),
            Action::Fuse(selected) => handlers::session::spawn_fuse(state, selected),
        })
        .collect();
    Task::batch(tasks)
}

// =============================================================================
// View
// =============================================================================

pub fn view(state: &Muse) -> Element<'_, Message> {
    let backdrop = canvas(ParticleLayer::new(&state.particles))
        .width(Length::Fill)
        .height(Length::Fill);

    let title = container(
        text("创意广告词生成器 💡")
            .size(36)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(MuseTheme::FG_PRIMARY),
    )
    .center_y(Length::Fixed(TITLE_HEIGHT));

    // Fixed spacers above the input keep the anchor rectangle predictable.
    let main = column![
        Space::with_height(Length::Fixed(TOP_PADDING)),
        title,
        Space::with_height(Length::Fixed(SECTION_SPACING)),
        view_input(state),
        Space::with_height(Length::Fixed(SECTION_SPACING)),
        view_error(state),
        view_hint(state),
        Space::with_height(Length::Fixed(SECTION_SPACING)),
        view_grid(state),
        Space::with_height(Length::Fixed(SECTION_SPACING)),
        view_history(state),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .padding([0, 16])
    .align_x(Alignment::Center);

    let content = stack![backdrop, main, view_field(state)]
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(MuseTheme::BG_PRIMARY)),
            ..Default::default()
        })
        .into()
}

/// Instructions line, plus a reset link once there is something to clear.
fn view_hint(state: &Muse) -> Element<'_, Message> {
    let hint = text("拖动漂浮的广告词到下方九宫格，组合后将自动生成新说法 💫")
        .size(13)
        .color(MuseTheme::FG_MUTED);

    let has_session =
        !state.controller.ideas().is_empty() || !state.controller.history().is_empty();
    if !has_session {
        return hint.into();
    }

    let reset = button(text("重新开始").size(13))
        .on_press_maybe(
            (!state.is_busy()).then_some(Message::session(SessionMessage::Reset)),
        )
        .padding([0, 4])
        .style(|_theme, status| button::Style {
            background: None,
            text_color: match status {
                button::Status::Hovered => MuseTheme::ACCENT_HOVER,
                _ => MuseTheme::FG_MUTED,
            },
            ..Default::default()
        });

    row![hint, reset]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}

// =============================================================================
// Subscriptions
// =============================================================================

pub fn subscription(_state: &Muse) -> Subscription<Message> {
    Subscription::batch([
        // Cursor, button, key and resize events -> Window messages
        event::listen_with(|event, _status, _window| {
            Some(Message::Window(WindowMessage::Event(event)))
        }),
        // Particles drift continuously, so frames always run.
        iced::window::frames().map(Message::Tick),
    ])
}
