// SPDX-License-Identifier: MPL-2.0
//! Statistics bar below the hero.
//!
//! Text stats render as fixed cells. Counter stats render through
//! [`counter::view`] and their messages come back tagged with the stat index.

use super::frame;
use crate::content::Stat;
use crate::ui::counter::{self, CounterState};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{Container, Row};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub stats: &'a [Stat],
    /// Same length as `stats`; `Some` exactly where the stat is a counter.
    pub counters: &'a [Option<CounterState>],
}

/// Render the bar. Messages carry the index of the counter that sent them.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, (usize, counter::Message)> {
    let row = ctx
        .stats
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (index, stat)| {
            row.push(Container::new(cell(index, stat, ctx.counters.get(index))).width(Length::Fill))
        });

    Container::new(frame(row))
        .width(Length::Fill)
        .style(styles::container::band)
        .into()
}

fn cell<'a>(
    index: usize,
    stat: &'a Stat,
    slot: Option<&'a Option<CounterState>>,
) -> Element<'a, (usize, counter::Message)> {
    match (stat, slot) {
        (Stat::Counter(entry), Some(Some(state))) => counter::view(counter::ViewContext {
            state,
            label: &entry.label,
            prefix: entry.prefix.as_deref(),
            suffix: entry.suffix.as_deref(),
            highlight: entry.highlight,
        })
        .map(move |message| (index, message)),
        (Stat::Counter(entry), _) => {
            // No state to animate; show the final value.
            let value = format!(
                "{}{}{}",
                entry.prefix.as_deref().unwrap_or_default(),
                entry.target,
                entry.suffix.as_deref().unwrap_or_default()
            );
            counter::static_view(&value, &entry.label, entry.highlight)
        }
        (
            Stat::Text {
                value,
                label,
                highlight,
            },
            _,
        ) => counter::static_view(value, label, *highlight),
    }
}
