// SPDX-License-Identifier: MPL-2.0
//! Opening section: badge, name, role, summary and calls to action.

use super::{frame, CopyTarget, Message};
use crate::app::section::Section;
use crate::content::Profile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let profile = ctx.profile;
    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    if let Some(badge) = &profile.badge {
        column = column.push(
            Container::new(Text::new(badge.clone()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::container::badge),
        );
    }

    column = column.push(
        Text::new(profile.name.clone())
            .size(typography::DISPLAY)
            .style(styles::text::primary),
    );

    let mut role = Row::new().spacing(spacing::XS).push(
        Text::new(profile.role.clone())
            .size(typography::TITLE_MD)
            .style(styles::text::secondary),
    );
    if let Some(accent) = &profile.role_accent {
        role = role.push(
            Text::new(accent.clone())
                .size(typography::TITLE_MD)
                .style(styles::text::brand),
        );
    }
    column = column.push(role);

    if !profile.summary.is_empty() {
        column = column.push(
            Container::new(
                Text::new(profile.summary.clone())
                    .size(typography::BODY_LG)
                    .center()
                    .style(styles::text::secondary),
            )
            .max_width(720.0),
        );
    }

    let mut actions = Row::new().spacing(spacing::MD).align_y(Vertical::Center).push(
        button(Text::new(format!("{} ↓", ctx.i18n.tr("hero-view-experience"))))
            .padding([spacing::SM, spacing::LG])
            .on_press(Message::Navigate(Section::Experience))
            .style(styles::button::primary),
    );
    if profile.email.is_some() {
        actions = actions.push(
            button(Text::new(ctx.i18n.tr("hero-contact")))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::Copy(CopyTarget::Email))
                .style(styles::button::outline),
        );
    }
    column = column.push(actions);

    frame(column)
}
