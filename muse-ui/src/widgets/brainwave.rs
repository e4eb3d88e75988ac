//! Busy indicator: a row of bars pulsing out of phase.

use iced::widget::{container, Row};
use iced::{Alignment, Background, Border, Element, Length};

use crate::constants::BRAINWAVE_BARS;
use crate::theme::MuseTheme;

const BAR_WIDTH: f32 = 4.0;
const BAR_MAX_HEIGHT: f32 = 20.0;
/// Seconds per pulse.
const PERIOD: f32 = 1.0;
/// Delay between neighbouring bars, in seconds.
const STAGGER: f32 = 0.1;

/// Height of bar `index` at time `clock` (seconds).
pub fn bar_height(index: usize, clock: f32) -> f32 {
    let t = (clock - index as f32 * STAGGER) / PERIOD;
    let pulse = 0.5 - 0.5 * (t * std::f32::consts::TAU).cos();
    BAR_MAX_HEIGHT * (0.3 + 0.7 * pulse)
}

pub fn brainwave<'a, Message: 'a>(clock: f32) -> Element<'a, Message> {
    let bars = (0..BRAINWAVE_BARS).map(|i| {
        container("")
            .width(Length::Fixed(BAR_WIDTH))
            .height(Length::Fixed(bar_height(i, clock)))
            .style(|_theme| container::Style {
                background: Some(Background::Color(MuseTheme::BRAINWAVE)),
                border: Border {
                    radius: (BAR_WIDTH / 2.0).into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    });

    Row::with_children(bars)
        .spacing(BAR_WIDTH)
        .height(Length::Fixed(BAR_MAX_HEIGHT))
        .align_y(Alignment::End)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_stay_within_bounds() {
        for step in 0..100 {
            let clock = step as f32 * 0.037;
            for i in 0..BRAINWAVE_BARS {
                let h = bar_height(i, clock);
                assert!(h >= BAR_MAX_HEIGHT * 0.3 - 1e-4 && h <= BAR_MAX_HEIGHT + 1e-4);
            }
        }
    }

    #[test]
    fn neighbouring_bars_are_out_of_phase() {
        assert_ne!(bar_height(0, 0.25), bar_height(1, 0.25));
    }
}
