// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Each toast is a small card with a severity-colored border and glyph.
//! Clicking anywhere on it dismisses it.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &Notification, i18n: &I18n) -> Element<'a, Message> {
        let accent = notification.severity().color();

        let glyph = Text::new(notification.severity().glyph())
            .size(typography::BODY_LG)
            .style(styles::text::fixed(accent));

        let message = Text::new(notification.text(i18n))
            .size(typography::BODY)
            .width(Length::Fill);

        let dismiss = Text::new("×")
            .size(typography::BODY_LG)
            .style(styles::text::secondary);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(message)
            .push(dismiss);

        button(
            Container::new(content)
                .width(Length::Fixed(sizing::TOAST_WIDTH))
                .padding(spacing::SM)
                .style(move |theme: &Theme| toast_container_style(theme, accent)),
        )
        .padding(0)
        .on_press(Message::Dismiss(notification.id()))
        .style(styles::button::bare)
        .into()
    }

    /// Renders every visible toast, stacked in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &Manager, i18n: &I18n) -> Element<'a, Message> {
        if manager.visible_count() == 0 {
            return Space::new().into();
        }

        let toasts = manager
            .visible()
            .fold(Column::new().spacing(spacing::XS), |column, notification| {
                column.push(Self::view(notification, i18n))
            })
            .align_x(alignment::Horizontal::Right);

        Container::new(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let colors = ColorScheme::of(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;
    use crate::ui::notifications::Notification;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS_500);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let _empty = Toast::view_overlay(&manager, &i18n);

        manager.push(Notification::warning("notification-config-load-error"));
        let _shown = Toast::view_overlay(&manager, &i18n);
    }
}
