// SPDX-License-Identifier: MPL-2.0
//! Page footer: contact links and copyright line.

use super::{CopyTarget, Message};
use crate::content::Profile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    /// Year shown in the copyright line.
    pub year: i32,
}

/// Current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut links = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
    if let Some(email) = &ctx.profile.email {
        links = links.push(link(email.clone(), CopyTarget::Email));
    }
    if ctx.profile.linkedin.is_some() {
        links = links.push(link(ctx.i18n.tr("footer-linkedin"), CopyTarget::LinkedIn));
    }

    let year = ctx.year.to_string();
    let copyright = Text::new(ctx.i18n.tr_with_args(
        "footer-copyright",
        &[("year", year.as_str()), ("name", ctx.profile.name.as_str())],
    ))
    .size(typography::CAPTION)
    .style(styles::text::secondary);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(links)
            .push(copyright),
    )
    .padding([spacing::XL, spacing::LG])
    .center_x(Length::Fill)
    .style(styles::container::band)
    .into()
}

fn link<'a>(label: String, target: CopyTarget) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .height(sizing::BUTTON_HEIGHT)
        .on_press(Message::Copy(target))
        .style(styles::button::link)
        .into()
}
