// SPDX-License-Identifier: MPL-2.0
//! Visibility-gated count-up statistic.
//!
//! The view wraps the number in a [`Sensor`](crate::ui::widgets::Sensor)
//! that is armed only while the counter is dormant, so the visibility report
//! reaches [`update`] at most once per counter.

pub mod state;

pub use state::{CounterState, Phase};

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::sensor;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Contextual data needed to render a counter.
pub struct ViewContext<'a> {
    pub state: &'a CounterState,
    pub label: &'a str,
    pub prefix: Option<&'a str>,
    pub suffix: Option<&'a str>,
    /// Draws the value with the brand color.
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The counter crossed the visibility threshold.
    BecameVisible,
    /// One animation frame elapsed.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Started,
    Finished,
}

/// Process a counter message and return the corresponding event.
pub fn update(state: &mut CounterState, message: Message) -> Event {
    match message {
        Message::BecameVisible => {
            if state.trigger() {
                Event::Started
            } else {
                Event::None
            }
        }
        Message::Tick => {
            if state.tick() {
                Event::Finished
            } else {
                Event::None
            }
        }
    }
}

/// Render the counter as a stat cell.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let cell = stat_cell(
        ctx.state.display(ctx.prefix, ctx.suffix),
        ctx.label.to_string(),
        ctx.highlight,
    );

    sensor(cell)
        .on_visible_maybe(visibility_message(ctx.state))
        .into()
}

/// The message the visibility sensor is armed with. Only a dormant counter
/// listens; once triggered it never asks again.
#[must_use]
pub fn visibility_message(state: &CounterState) -> Option<Message> {
    state.is_dormant().then_some(Message::BecameVisible)
}

/// Static stat cell rendered like a finished counter.
pub fn static_view<'a, M: 'a>(value: &str, label: &str, highlight: bool) -> Element<'a, M> {
    stat_cell(value.to_string(), label.to_string(), highlight)
}

fn stat_cell<'a, M: 'a>(value: String, label: String, highlight: bool) -> Element<'a, M> {
    let value = Text::new(value)
        .size(typography::TITLE_LG)
        .style(styles::text::emphasis(highlight));
    let label = Text::new(label)
        .size(typography::BODY)
        .style(styles::text::secondary);

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(value)
            .push(label),
    )
    .padding(spacing::MD)
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::STAT_MIN_HEIGHT))
    .style(styles::container::card(None))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::{CounterDuration, FrameInterval};

    fn counter(target: u64) -> CounterState {
        CounterState::new(target, CounterDuration::default(), FrameInterval::default())
    }

    #[test]
    fn sensor_is_armed_only_while_dormant() {
        let mut state = counter(2);
        assert_eq!(visibility_message(&state), Some(Message::BecameVisible));

        update(&mut state, Message::BecameVisible);
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(visibility_message(&state), None);

        while state.phase() == Phase::Running {
            update(&mut state, Message::Tick);
        }
        assert_eq!(visibility_message(&state), None);
    }

    #[test]
    fn counter_view_renders_dormant_and_running() {
        let mut state = counter(650);
        {
            let _element = view(ViewContext {
                state: &state,
                label: "DBs Administered",
                prefix: None,
                suffix: Some("+"),
                highlight: true,
            });
        }

        state.trigger();
        let _element = view(ViewContext {
            state: &state,
            label: "DBs Administered",
            prefix: None,
            suffix: Some("+"),
            highlight: false,
        });
    }

    #[test]
    fn static_view_renders() {
        let _element: Element<'_, Message> = static_view("SQL", "Server 2016-2025", false);
    }

    #[test]
    fn visibility_starts_counter_once() {
        let mut state = counter(40);
        assert_eq!(update(&mut state, Message::BecameVisible), Event::Started);
        assert_eq!(update(&mut state, Message::BecameVisible), Event::None);
        assert_eq!(state.phase(), Phase::Running);
    }

    #[test]
    fn ticks_before_visibility_are_ignored() {
        let mut state = counter(40);
        assert_eq!(update(&mut state, Message::Tick), Event::None);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn last_tick_reports_finished() {
        let mut state = counter(0);
        update(&mut state, Message::BecameVisible);
        assert_eq!(update(&mut state, Message::Tick), Event::Finished);
        assert_eq!(update(&mut state, Message::Tick), Event::None);
    }
}
