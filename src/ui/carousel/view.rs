// SPDX-License-Identifier: MPL-2.0
//! Inline carousel and lightbox rendering.

use super::{CarouselState, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{
    button, center, image, mouse_area, opaque, Column, Container, Row, Space, Stack, Text,
};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a CarouselState,
    /// One entry per item; `None` draws the alt-text placeholder.
    pub handles: &'a [Option<Handle>],
}

/// Render the inline carousel: picture, arrows, indicators and position.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let picture = button(picture(&ctx, Length::Fixed(sizing::CAROUSEL_HEIGHT)))
        .padding(0)
        .width(Length::Fill)
        .on_press(Message::OpenModal)
        .style(styles::button::bare);

    let arrows = Row::new()
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .push(arrow("‹", Message::Previous))
        .push(Space::new().width(Length::Fill))
        .push(arrow("›", Message::Next));

    // Arrows sit above the picture so their clicks never reach it.
    let stage = Stack::new()
        .width(Length::Fill)
        .push(
            Container::new(picture)
                .width(Length::Fill)
                .style(styles::container::media_frame),
        )
        .push(arrows);

    let hint = Text::new(ctx.i18n.tr("carousel-open-hint"))
        .size(typography::CAPTION)
        .style(styles::text::secondary);

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(stage)
        .push(indicators(ctx.state))
        .push(position(&ctx))
        .push(hint)
        .into()
}

/// Render the lightbox layer, to be stacked over the whole page.
///
/// Clicking the backdrop closes it; clicks inside the framed content are
/// absorbed.
pub fn modal<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new("×").size(typography::TITLE_MD))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::CloseModal)
        .style(styles::button::carousel_arrow);

    let caption = Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                Text::new(ctx.state.current().alt_text.clone())
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(position(&ctx)),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::container::caption);

    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close);

    let body = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(arrow("‹", Message::Previous))
        .push(
            Container::new(picture(&ctx, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(arrow("›", Message::Next));

    let content = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(body)
        .push(caption);

    opaque(
        mouse_area(
            center(opaque(content))
                .padding(spacing::XXL)
                .style(styles::container::backdrop),
        )
        .on_press(Message::CloseModal),
    )
}

fn picture<'a>(ctx: &ViewContext<'a>, height: Length) -> Element<'a, Message> {
    let index = ctx.state.current_index();
    match ctx.handles.get(index).cloned().flatten() {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Contain)
            .into(),
        None => placeholder(ctx, height),
    }
}

fn placeholder<'a>(ctx: &ViewContext<'a>, height: Length) -> Element<'a, Message> {
    let item = ctx.state.current();
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(Text::new(item.alt_text.clone()).size(typography::TITLE_SM))
            .push(Text::new(ctx.i18n.tr("media-unavailable")).size(typography::CAPTION)),
    )
    .center_x(Length::Fill)
    .center_y(height)
    .style(styles::container::media_placeholder)
    .into()
}

fn arrow<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::TITLE_LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(sizing::CAROUSEL_ARROW))
    .height(Length::Fixed(sizing::CAROUSEL_ARROW))
    .padding(0)
    .on_press(message)
    .style(styles::button::carousel_arrow)
    .into()
}

fn indicators<'a>(state: &CarouselState) -> Element<'a, Message> {
    let current = state.current_index();
    (0..state.len())
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            let active = index == current;
            let width = if active {
                sizing::INDICATOR_ACTIVE_WIDTH
            } else {
                sizing::INDICATOR
            };
            row.push(
                button(Space::new())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(sizing::INDICATOR))
                    .padding(0)
                    .on_press(Message::JumpTo(index))
                    .style(styles::button::indicator(active)),
            )
        })
        .into()
}

fn position<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = (ctx.state.current_index() + 1).to_string();
    let total = ctx.state.len().to_string();
    Text::new(
        ctx.i18n
            .tr_with_args(
                "carousel-position",
                &[("current", current.as_str()), ("total", total.as_str())],
            ),
    )
    .size(typography::CAPTION)
    .style(styles::text::secondary)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MediaItem;
    use crate::ui::state::AutoAdvanceInterval;

    fn state() -> CarouselState {
        CarouselState::new(
            vec![
                MediaItem::new("a.jpg", "first"),
                MediaItem::new("b.jpg", "second"),
            ],
            AutoAdvanceInterval::default(),
        )
        .expect("non-empty carousel")
    }

    #[test]
    fn inline_view_renders_with_placeholders() {
        let i18n = I18n::default();
        let state = state();
        let handles = vec![None, None];
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            handles: &handles,
        });
    }

    #[test]
    fn modal_view_renders() {
        let i18n = I18n::default();
        let mut state = state();
        state.open_modal();
        let handles = vec![Some(Handle::from_path("a.jpg")), None];
        let _element = modal(ViewContext {
            i18n: &i18n,
            state: &state,
            handles: &handles,
        });
    }

    #[test]
    fn view_tolerates_short_handle_list() {
        let i18n = I18n::default();
        let state = state();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            handles: &[],
        });
    }
}
