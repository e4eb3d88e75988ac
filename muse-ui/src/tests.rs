//! Headless state machine tests for the Muse UI.
//!
//! These tests verify state transitions without rendering. Following the Elm
//! architecture pattern: construct State, send Message, assert State changed.
//! Remote calls are never run; their results are fed back as messages.

use std::time::{Duration, Instant};

use iced::{mouse, window, Event, Point, Size};

use muse_core::{ControllerOptions, FusionOutcome, IdeaService, PlacementConfig};
use muse_llm::{create_llm_client, LlmConfig};

use crate::app::update;
use crate::drag::DragSource;
use crate::handlers;
use crate::msg::{
    DragMessage, GridMessage, InputMessage, Message, SessionMessage, WindowMessage,
};
use crate::state::{Muse, MuseSettings};

fn settings(float_fused_results: bool) -> MuseSettings {
    let provider = create_llm_client(&LlmConfig::new("sk-test")).unwrap();
    MuseSettings {
        service: IdeaService::new(provider, "gpt-4o", 0.65),
        controller: ControllerOptions {
            float_fused_results,
        },
        placement: PlacementConfig::default(),
        seed: Some(42),
    }
}

fn muse() -> Muse {
    Muse::new(settings(false))
}

fn send(state: &mut Muse, message: Message) {
    let _ = update(state, message);
}

fn cursor_to(state: &mut Muse, x: f32, y: f32) {
    send(
        state,
        Message::Window(WindowMessage::Event(Event::Mouse(
            mouse::Event::CursorMoved {
                position: Point::new(x, y),
            },
        ))),
    );
}

fn release(state: &mut Muse) {
    send(
        state,
        Message::Window(WindowMessage::Event(Event::Mouse(
            mouse::Event::ButtonReleased(mouse::Button::Left),
        ))),
    );
}

/// Submit a theme and feed back `ideas` as the model reply.
fn generate(state: &mut Muse, ideas: &[&str]) {
    state.input.set_text("茶饮店");
    send(state, Message::Input(InputMessage::Submit));
    assert!(state.is_busy());
    send(
        state,
        Message::Session(SessionMessage::Generated(Ok(ideas
            .iter()
            .map(|s| s.to_string())
            .collect()))),
    );
}

/// Run frames until nothing is left to place.
fn settle_placement(state: &mut Muse) {
    let start = Instant::now();
    for i in 0..20 {
        send(state, Message::Tick(start + Duration::from_millis(16 * i)));
    }
}

/// Drag bubble 0 by (dx, dy) from its current spot.
fn drag_first_bubble(state: &mut Muse, dx: f32, dy: f32) -> Point {
    let home = state.field.field.position(0).unwrap();
    let grab = Point::new(home.x + 10.0, home.y + 10.0);
    cursor_to(state, grab.x, grab.y);
    send(state, Message::Drag(DragMessage::Press(DragSource::Bubble(0))));
    cursor_to(state, grab.x + dx, grab.y + dy);
    grab
}

#[test]
fn blank_theme_submit_is_ignored() {
    let mut state = muse();
    state.input.set_text("   ");
    send(&mut state, Message::Input(InputMessage::Submit));
    assert!(!state.is_busy());
}

#[test]
fn generated_ideas_get_bubbles_one_per_frame() {
    let mut state = muse();
    generate(&mut state, &["一杯清茶", "慢享时光", "茶香四溢"]);
    assert!(!state.is_busy());
    assert_eq!(state.controller.ideas().len(), 3);
    assert!(state.field.field.positions().is_empty());

    send(&mut state, Message::Tick(Instant::now()));
    assert_eq!(state.field.field.positions().len(), 1);

    settle_placement(&mut state);
    let placed = state.field.field.positions().len();
    assert!(placed >= 1 && placed <= 3);
    assert_eq!(state.field.motions.len(), placed);
}

#[test]
fn second_round_changes_button_state() {
    let mut state = muse();
    assert!(!state.controller.has_generated_once());
    generate(&mut state, &["一杯清茶"]);
    assert!(state.controller.has_generated_once());
    generate(&mut state, &["叶落杯中"]);
    assert_eq!(state.controller.ideas().len(), 2);
}

#[test]
fn failed_generation_shows_dismissable_error() {
    let mut state = muse();
    state.input.set_text("茶饮店");
    send(&mut state, Message::Input(InputMessage::Submit));
    send(
        &mut state,
        Message::Session(SessionMessage::Generated(Err("API error (500): boom".into()))),
    );

    assert!(!state.is_busy());
    assert!(state.controller.last_error().unwrap().contains("boom"));
    assert!(state.controller.ideas().is_empty());

    send(&mut state, Message::Session(SessionMessage::DismissError));
    assert!(state.controller.last_error().is_none());
}

#[test]
fn bubble_dropped_on_slot_fills_it_and_stays_put() {
    let mut state = muse();
    generate(&mut state, &["一杯清茶"]);
    settle_placement(&mut state);
    let home = state.field.field.position(0).unwrap();

    drag_first_bubble(&mut state, 30.0, 40.0);
    assert!(state.drag.is_active());
    send(&mut state, Message::grid(GridMessage::SlotEntered(4)));
    release(&mut state);

    assert!(state.drag.is_idle());
    assert_eq!(state.grid.grid.slot(4), Some("一杯清茶"));
    assert_eq!(state.field.field.position(0), Some(home));
    assert_eq!(state.field.motions[0].x.target, home.x);
}

#[test]
fn bubble_dropped_elsewhere_moves_by_total_delta() {
    let mut state = muse();
    generate(&mut state, &["一杯清茶"]);
    settle_placement(&mut state);
    let home = state.field.field.position(0).unwrap();

    drag_first_bubble(&mut state, 30.0, 40.0);
    release(&mut state);

    let moved = state.field.field.position(0).unwrap();
    assert!((moved.x - (home.x + 30.0)).abs() < 1e-3);
    assert!((moved.y - (home.y + 40.0)).abs() < 1e-3);
    assert_eq!(state.field.motions[0].x.target, moved.x);
    assert!(state.grid.grid.is_empty());
}

#[test]
fn bubble_held_still_before_release_lands_without_momentum() {
    let mut state = muse();
    generate(&mut state, &["一杯清茶"]);
    settle_placement(&mut state);

    drag_first_bubble(&mut state, 30.0, 40.0);
    handlers::drag::released(&mut state, Instant::now() + Duration::from_secs(1));

    let motion = &state.field.motions[0];
    assert_eq!(motion.x.velocity, 0.0);
    assert_eq!(motion.y.velocity, 0.0);
    assert_eq!(motion.x.position, motion.x.target);
}

#[test]
fn click_without_drag_moves_nothing() {
    let mut state = muse();
    generate(&mut state, &["一杯清茶"]);
    settle_placement(&mut state);
    let home = state.field.field.position(0).unwrap();

    drag_first_bubble(&mut state, 2.0, 2.0);
    assert!(state.drag.is_pending());
    send(&mut state, Message::grid(GridMessage::SlotEntered(0)));
    release(&mut state);

    assert_eq!(state.field.field.position(0), Some(home));
    assert!(state.grid.grid.is_empty());
}

#[test]
fn occupied_slot_rejects_second_drop() {
    let mut state = muse();
    generate(&mut state, &["一杯清茶"]);
    settle_placement(&mut state);
    state.grid.grid.drop("先来的", 4);

    drag_first_bubble(&mut state, 30.0, 40.0);
    send(&mut state, Message::grid(GridMessage::SlotEntered(4)));
    release(&mut state);

    assert_eq!(state.grid.grid.slot(4), Some("先来的"));
}

#[test]
fn leaving_slot_clears_hover() {
    let mut state = muse();
    send(&mut state, Message::grid(GridMessage::SlotEntered(2)));
    send(&mut state, Message::grid(GridMessage::SlotEntered(3)));
    send(&mut state, Message::grid(GridMessage::SlotExited(2)));
    assert_eq!(state.grid.hovered, Some(3));
    send(&mut state, Message::grid(GridMessage::SlotExited(3)));
    assert_eq!(state.grid.hovered, None);
}

#[test]
fn cancelled_drag_springs_home() {
    let mut state = muse();
    generate(&mut state, &["一杯清茶"]);
    settle_placement(&mut state);
    let home = state.field.field.position(0).unwrap();

    drag_first_bubble(&mut state, 80.0, 0.0);
    handlers::drag::cancel(&mut state);

    assert!(state.drag.is_idle());
    assert_eq!(state.field.field.position(0), Some(home));
    assert!((state.field.motions[0].x.position - (home.x + 80.0)).abs() < 1e-3);
    assert_eq!(state.field.motions[0].x.target, home.x);
}

#[test]
fn combine_fuses_and_clears_grid() {
    let mut state = muse();
    state.grid.grid.drop("科技改变", 6);
    state.grid.grid.drop("生活更美", 1);

    send(&mut state, Message::grid(GridMessage::Combine));
    assert!(state.is_busy());

    send(
        &mut state,
        Message::Session(SessionMessage::Fused(Ok(FusionOutcome {
            result: "未来生活".into(),
            score: "8分".into(),
        }))),
    );

    assert!(!state.is_busy());
    let record = &state.controller.history()[0];
    assert_eq!(record.source_texts, vec!["生活更美", "科技改变"]);
    assert_eq!(record.result_text, "未来生活");
    assert!(state.grid.grid.is_empty());
    assert_eq!(state.grid.grid.key(), state.controller.grid_key());
    assert!(state.controller.ideas().is_empty());
}

#[test]
fn combine_with_one_slot_does_nothing() {
    let mut state = muse();
    state.grid.grid.drop("孤单", 0);
    send(&mut state, Message::grid(GridMessage::Combine));
    assert!(!state.is_busy());
}

#[test]
fn failed_fusion_keeps_grid() {
    let mut state = muse();
    state.grid.grid.drop("甲", 0);
    state.grid.grid.drop("乙", 1);
    send(&mut state, Message::grid(GridMessage::Combine));
    send(
        &mut state,
        Message::Session(SessionMessage::Fused(Err("timed out".into()))),
    );

    assert_eq!(state.grid.grid.filled_count(), 2);
    assert!(state.controller.history().is_empty());
    assert_eq!(state.controller.last_error(), Some("timed out"));
}

#[test]
fn fusion_result_token_drags_into_grid() {
    let mut state = muse();
    state.grid.grid.drop("甲", 0);
    state.grid.grid.drop("乙", 1);
    send(&mut state, Message::grid(GridMessage::Combine));
    send(
        &mut state,
        Message::Session(SessionMessage::Fused(Ok(FusionOutcome {
            result: "甲乙合一".into(),
            score: "7分".into(),
        }))),
    );

    cursor_to(&mut state, 900.0, 700.0);
    send(
        &mut state,
        Message::Drag(DragMessage::Press(DragSource::FusionResult(0))),
    );
    cursor_to(&mut state, 600.0, 500.0);
    send(&mut state, Message::grid(GridMessage::SlotEntered(8)));
    release(&mut state);

    assert_eq!(state.grid.grid.slot(8), Some("甲乙合一"));
}

#[test]
fn float_fused_results_become_gold_bubbles() {
    let mut state = Muse::new(settings(true));
    state.grid.grid.drop("甲", 0);
    state.grid.grid.drop("乙", 1);
    send(&mut state, Message::grid(GridMessage::Combine));
    send(
        &mut state,
        Message::Session(SessionMessage::Fused(Ok(FusionOutcome {
            result: "甲乙合一".into(),
            score: "7分".into(),
        }))),
    );

    assert!(state.controller.ideas()[0].is_fused());
    settle_placement(&mut state);
    assert_eq!(state.field.field.positions().len(), 1);
}

#[test]
fn reset_clears_session_but_keeps_theme() {
    let mut state = muse();
    generate(&mut state, &["一杯清茶", "慢享时光"]);
    settle_placement(&mut state);
    state.grid.grid.drop("一杯清茶", 0);

    send(&mut state, Message::Session(SessionMessage::Reset));

    assert!(state.controller.ideas().is_empty());
    assert!(state.field.field.positions().is_empty());
    assert!(state.field.motions.is_empty());
    assert!(state.grid.grid.is_empty());
    assert!(!state.controller.has_generated_once());
    assert_eq!(state.input.text().trim(), "茶饮店");
}

#[test]
fn resize_moves_anchor() {
    let mut state = muse();
    let before = state.window.anchor_rect();
    send(
        &mut state,
        Message::Window(WindowMessage::Event(Event::Window(window::Event::Resized(
            Size::new(600.0, 500.0),
        )))),
    );

    let after = state.window.anchor_rect();
    assert_eq!(state.window.dims, (600.0, 500.0));
    assert_eq!(after.width, 600.0 - 32.0);
    assert_eq!(after.x, 16.0);
    assert_eq!(after.y, before.y);
}
