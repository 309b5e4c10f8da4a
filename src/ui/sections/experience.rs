// SPDX-License-Identifier: MPL-2.0
//! Professional experience timeline.

use super::{bullet, titled};
use crate::content::Job;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Element, Length, Padding};

pub fn view<'a, M: 'a>(i18n: &I18n, jobs: &'a [Job]) -> Element<'a, M> {
    let timeline = jobs
        .iter()
        .fold(Column::new().width(Length::Fill), |column, job| {
            column.push(entry(job))
        });

    titled(i18n.tr("section-experience"), timeline)
}

fn entry<'a, M: 'a>(job: &'a Job) -> Element<'a, M> {
    let dot = Container::new(Space::new())
        .width(Length::Fixed(sizing::TIMELINE_DOT))
        .height(Length::Fixed(sizing::TIMELINE_DOT))
        .style(styles::container::timeline_dot(job.current));

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(job.title.clone())
                .size(typography::TITLE_SM)
                .style(styles::text::emphasis(job.current)),
        )
        .push(
            Text::new(format!("{} · {}", job.company, job.period))
                .size(typography::BODY)
                .style(styles::text::secondary),
        );

    let details = job
        .highlights
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, line| {
            column.push(bullet(line))
        });

    let body = Column::new()
        .spacing(spacing::SM)
        .padding(Padding {
            bottom: spacing::XL,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .push(header)
        .push(details);

    Row::new()
        .spacing(spacing::LG)
        .push(dot)
        .push(body)
        .into()
}
