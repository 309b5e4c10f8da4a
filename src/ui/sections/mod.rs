// SPDX-License-Identifier: MPL-2.0
//! Page sections, top to bottom.
//!
//! Purely presentational sections are generic over the message type. The
//! hero and footer emit [`Message`]; the stats bar and gallery forward the
//! messages of the widgets they host.

pub mod education;
pub mod experience;
pub mod expertise;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod stats;
pub mod technologies;

use crate::app::section::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// What a contact control copies to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Email,
    LinkedIn,
}

/// Messages emitted by the hero and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Section),
    Copy(CopyTarget),
}

/// Centers `content` in a column no wider than the page width.
pub fn frame<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill),
    )
    .padding([spacing::SECTION, spacing::LG])
    .center_x(Length::Fill)
    .into()
}

/// A titled page section.
pub fn titled<'a, M: 'a>(title: String, body: impl Into<Element<'a, M>>) -> Element<'a, M> {
    frame(
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(
                Text::new(title)
                    .size(typography::TITLE_LG)
                    .style(styles::text::primary),
            )
            .push(body),
    )
}

/// Bullet line used by cards and the timeline.
pub fn bullet<'a, M: 'a>(text: &str) -> Element<'a, M> {
    iced::widget::Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new("▹")
                .size(typography::BODY)
                .style(styles::text::brand),
        )
        .push(
            Text::new(text.to_string())
                .size(typography::BODY)
                .style(styles::text::secondary),
        )
        .into()
}
