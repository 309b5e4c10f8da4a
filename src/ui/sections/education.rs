// SPDX-License-Identifier: MPL-2.0
//! Degrees on the left, honors and awards on the right.

use super::titled;
use crate::content::{Accent, Award, Degree};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a, M: 'a>(i18n: &I18n, degrees: &'a [Degree], awards: &'a [Award]) -> Element<'a, M> {
    let degrees = degrees.iter().fold(
        Column::new().spacing(spacing::MD).width(Length::Fill),
        |column, degree| column.push(degree_card(i18n, degree)),
    );

    let mut body = Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Top)
        .push(degrees);

    if !awards.is_empty() {
        let heading = Text::new(i18n.tr("section-awards"))
            .size(typography::TITLE_SM)
            .style(styles::text::primary);
        let list = awards.iter().fold(
            Column::new()
                .spacing(spacing::MD)
                .width(Length::Fill)
                .push(heading),
            |column, award| column.push(award_card(award)),
        );
        body = body.push(list);
    }

    titled(i18n.tr("section-education"), body)
}

fn degree_card<'a, M: 'a>(i18n: &I18n, degree: &'a Degree) -> Element<'a, M> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(degree.title.clone())
                .size(typography::TITLE_SM)
                .style(styles::text::primary),
        )
        .push(
            Text::new(format!("{} · {}", degree.institution, degree.years))
                .size(typography::BODY)
                .style(styles::text::secondary),
        );

    if let Some(grade) = &degree.grade {
        column = column.push(
            Text::new(i18n.tr_with_args("education-grade", &[("grade", grade.as_str())]))
                .size(typography::BODY)
                .style(styles::text::brand),
        );
    }

    Container::new(column)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(None))
        .into()
}

fn award_card<'a, M: 'a>(award: &'a Award) -> Element<'a, M> {
    let star = Text::new("★")
        .size(typography::TITLE_SM)
        .style(styles::text::fixed(styles::container::accent_color(
            Accent::Amber,
        )));

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(award.title.clone())
                .size(typography::BODY_LG)
                .style(styles::text::primary),
        )
        .push(
            Text::new(award.issuer.clone())
                .size(typography::CAPTION)
                .style(styles::text::secondary),
        );

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(star)
            .push(details),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card(Some(Accent::Amber)))
    .into()
}
