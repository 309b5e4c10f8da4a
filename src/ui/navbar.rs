// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned to the top of the window.
//!
//! Shows the logo and one entry per page section. Selecting an entry marks
//! it active and asks the application to scroll to that section.

use crate::app::section::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub logo: &'a str,
    pub logo_accent: Option<&'a str>,
    pub active: Section,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
///
/// The application marks the section active once it knows where it is.
pub fn update(message: Message) -> Event {
    match message {
        Message::Select(section) => Event::ScrollTo(section),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut logo = Row::new().push(
        Text::new(ctx.logo.to_string())
            .size(typography::TITLE_MD)
            .style(styles::text::primary),
    );
    if let Some(accent) = ctx.logo_accent {
        logo = logo.push(
            Text::new(accent.to_string())
                .size(typography::TITLE_MD)
                .style(styles::text::brand),
        );
    }

    let entries = Section::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &section| {
            row.push(
                button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .on_press(Message::Select(section))
                    .style(styles::button::nav(section == ctx.active)),
            )
        });

    let bar = Row::new()
        .align_y(Vertical::Center)
        .padding([0.0, spacing::LG])
        .height(Length::Fill)
        .push(logo)
        .push(Space::new().width(Length::Fill))
        .push(entries);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}
