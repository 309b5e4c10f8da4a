// SPDX-License-Identifier: MPL-2.0
//! Core expertise cards.

use super::{bullet, titled};
use crate::content::ExpertiseCard;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a, M: 'a>(i18n: &I18n, cards: &'a [ExpertiseCard]) -> Element<'a, M> {
    let row = cards.iter().fold(
        Row::new().spacing(spacing::LG).align_y(Vertical::Top),
        |row, card| row.push(card_view(card)),
    );

    titled(i18n.tr("section-expertise"), row)
}

fn card_view<'a, M: 'a>(card: &'a ExpertiseCard) -> Element<'a, M> {
    let color = styles::container::accent_color(card.accent);
    let title = Text::new(card.title.clone())
        .size(typography::TITLE_SM)
        .style(styles::text::fixed(color));

    let body = card.items.iter().fold(
        Column::new().spacing(spacing::SM).push(title),
        |column, item| column.push(bullet(item)),
    );

    Container::new(body)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(Some(card.accent)))
        .into()
}
