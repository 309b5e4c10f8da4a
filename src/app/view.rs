// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a navbar above one scrollable column of sections. The
//! lightbox and the toasts are stacked on top of it.

use super::page::{PageWidgets, WidgetKey};
use super::section::Section;
use super::{Message, PAGE_SCROLLABLE_ID};
use crate::content::Portfolio;
use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::sections::{
    education, experience, expertise, footer, gallery, hero, stats, technologies,
};
use crate::ui::styles;
use crate::ui::widgets::sensor;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub widgets: &'a PageWidgets,
    pub active: Section,
    pub notifications: &'a notifications::Manager,
    pub year: i32,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        logo: ctx.portfolio.logo(),
        logo_accent: ctx.portfolio.profile.logo_accent.as_deref(),
        active: ctx.active,
    })
    .map(Message::Navbar);

    let page = Scrollable::new(sensor(page_content(&ctx)).on_bounds(Message::ContentMeasured))
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::Scrolled);

    let base = Container::new(
        Column::new()
            .push(navbar_view)
            .push(page)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(state) = ctx.widgets.carousel().filter(|state| state.is_modal_open()) {
        let key = ctx.widgets.carousel_key();
        layers = layers.push(
            carousel::modal(carousel::ViewContext {
                i18n: ctx.i18n,
                state,
                handles: ctx.widgets.handles(),
            })
            .map(move |message| Message::Carousel(key, message)),
        );
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn page_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let portfolio = ctx.portfolio;
    let generation = ctx.widgets.generation();

    let hero_view = hero::view(hero::ViewContext {
        i18n: ctx.i18n,
        profile: &portfolio.profile,
    })
    .map(Message::Section);

    let stats_view = stats::view(stats::ViewContext {
        stats: &portfolio.stats,
        counters: ctx.widgets.counters(),
    })
    .map(move |(index, message)| {
        Message::Counter(WidgetKey { generation, index }, message)
    });

    let mut column = Column::new()
        .width(Length::Fill)
        .push(anchored(Section::Home, hero_view))
        .push(stats_view)
        .push(anchored(
            Section::Expertise,
            expertise::view::<Message>(ctx.i18n, &portfolio.expertise),
        ))
        .push(anchored(
            Section::Experience,
            Container::new(experience::view::<Message>(ctx.i18n, &portfolio.jobs))
                .width(Length::Fill)
                .style(styles::container::band),
        ))
        .push(anchored(
            Section::Education,
            education::view::<Message>(ctx.i18n, &portfolio.education, &portfolio.awards),
        ));

    if let Some(gallery_view) =
        gallery::view(ctx.i18n, ctx.widgets.carousel(), ctx.widgets.handles())
    {
        let key = ctx.widgets.carousel_key();
        column = column.push(
            Container::new(gallery_view.map(move |message| Message::Carousel(key, message)))
                .width(Length::Fill)
                .style(styles::container::band),
        );
    }

    column
        .push(technologies::view::<Message>(ctx.i18n, &portfolio.technologies))
        .push(
            footer::view(footer::ViewContext {
                i18n: ctx.i18n,
                profile: &portfolio.profile,
                year: ctx.year,
            })
            .map(Message::Section),
        )
        .into()
}

/// Reports where `content` starts so the navbar can scroll to it.
fn anchored<'a>(
    section: Section,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    sensor(content)
        .on_bounds(move |bounds| Message::SectionMeasured(section, bounds))
        .into()
}
