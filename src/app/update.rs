// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! `App::update` builds an [`UpdateContext`] over its fields and routes each
//! message to one of the handlers below.

use super::config::Config;
use super::page::{PageWidgets, WidgetKey};
use super::section::{Anchors, Section};
use super::{Message, Shortcut, PAGE_SCROLLABLE_ID};
use crate::content::{self, LoadedContent};
use crate::ui::carousel::{self, Event as CarouselEvent};
use crate::ui::counter::{self, Event as CounterEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{self, CopyTarget};
use crate::ui::state::SmoothScroll;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{Rectangle, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view over the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub content: &'a mut LoadedContent,
    pub content_path: Option<&'a PathBuf>,
    pub widgets: &'a mut PageWidgets,
    pub anchors: &'a mut Anchors,
    pub active: &'a mut Section,
    pub scroll_offset: &'a mut f32,
    pub smooth_scroll: &'a mut Option<SmoothScroll>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ScrollTo(section) => start_smooth_scroll(ctx, section, Instant::now()),
    }
}

pub fn handle_section_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::Navigate(section) => start_smooth_scroll(ctx, section, Instant::now()),
        sections::Message::Copy(target) => copy_to_clipboard(ctx, target),
    }
}

/// Marks `section` active and starts animating towards it. Sections that
/// have not been laid out yet are ignored and stay inactive.
pub fn start_smooth_scroll(
    ctx: &mut UpdateContext<'_>,
    section: Section,
    now: Instant,
) -> Task<Message> {
    let Some(target) = ctx.anchors.offset_of(section) else {
        log::debug!("Anchor for {section:?} not measured yet, ignoring");
        return Task::none();
    };
    log::debug!(
        "Scrolling from {:.0} to {target:.0} for {section:?}",
        *ctx.scroll_offset
    );
    *ctx.active = section;
    *ctx.smooth_scroll = Some(SmoothScroll::new(*ctx.scroll_offset, target, now));
    Task::none()
}

pub fn handle_scroll_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let Some(animation) = ctx.smooth_scroll.as_mut() else {
        return Task::none();
    };
    let y = animation.sample(now);
    if animation.is_finished(now) {
        *ctx.smooth_scroll = None;
    }
    operation::scroll_to(Id::new(PAGE_SCROLLABLE_ID), AbsoluteOffset { x: 0.0, y })
}

/// Records the scroll position; a position the animation did not ask for
/// means the user took over and the animation stops.
pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, viewport: Viewport) -> Task<Message> {
    track_offset(ctx, viewport.absolute_offset().y)
}

fn track_offset(ctx: &mut UpdateContext<'_>, offset: f32) -> Task<Message> {
    *ctx.scroll_offset = offset;
    if ctx
        .smooth_scroll
        .as_mut()
        .is_some_and(|animation| !animation.follows(offset))
    {
        log::debug!("Smooth scroll interrupted at {offset:.0}");
        *ctx.smooth_scroll = None;
    }
    Task::none()
}

pub fn handle_content_measured(ctx: &mut UpdateContext<'_>, bounds: Rectangle) -> Task<Message> {
    ctx.anchors.set_content_top(bounds.y);
    Task::none()
}

pub fn handle_section_measured(
    ctx: &mut UpdateContext<'_>,
    section: Section,
    bounds: Rectangle,
) -> Task<Message> {
    ctx.anchors.set(section, bounds.y);
    Task::none()
}

pub fn handle_counter_message(
    ctx: &mut UpdateContext<'_>,
    key: WidgetKey,
    message: counter::Message,
) -> Task<Message> {
    let Some(state) = ctx.widgets.counter_mut(key) else {
        log::trace!("Dropping {message:?} for unmounted counter {key:?}");
        return Task::none();
    };
    match counter::update(state, message) {
        CounterEvent::Started => log::debug!("Counter {} started", key.index),
        CounterEvent::Finished => log::debug!("Counter {} reached {}", key.index, state.target()),
        CounterEvent::None => {}
    }
    Task::none()
}

pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    key: WidgetKey,
    message: carousel::Message,
) -> Task<Message> {
    let Some(state) = ctx.widgets.carousel_mut(key) else {
        log::trace!("Dropping {message:?} for unmounted carousel {key:?}");
        return Task::none();
    };
    match carousel::update(state, message) {
        CarouselEvent::ModalOpened => {
            log::debug!("Opened lightbox on item {}", state.current_index());
        }
        CarouselEvent::ModalClosed => log::debug!("Closed lightbox"),
        CarouselEvent::None => {}
    }
    Task::none()
}

/// Arrow keys and Escape only act while the lightbox is open.
pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    let modal_message = match shortcut {
        Shortcut::Reload => return reload_content(ctx),
        Shortcut::CloseModal => carousel::Message::CloseModal,
        Shortcut::Previous => carousel::Message::Previous,
        Shortcut::Next => carousel::Message::Next,
    };
    if !ctx.widgets.is_modal_open() {
        return Task::none();
    }
    let key = ctx.widgets.carousel_key();
    handle_carousel_message(ctx, key, modal_message)
}

/// Re-reads the content file and remounts every widget under a new
/// generation.
pub fn reload_content(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let (loaded, warning) = content::load(ctx.content_path.map(PathBuf::as_path));
    *ctx.content = loaded;
    *ctx.widgets = PageWidgets::mount(ctx.widgets.generation() + 1, ctx.content, ctx.config);
    *ctx.smooth_scroll = None;

    match warning {
        Some(key) => ctx.notifications.push(Notification::warning(key)),
        None => ctx
            .notifications
            .push(Notification::info("notification-content-reloaded")),
    }
    Task::none()
}

fn copy_to_clipboard(ctx: &mut UpdateContext<'_>, target: CopyTarget) -> Task<Message> {
    let profile = &ctx.content.portfolio.profile;
    let value = match target {
        CopyTarget::Email => profile.email.clone(),
        CopyTarget::LinkedIn => profile.linkedin.clone(),
    };
    let Some(value) = value else {
        return Task::none();
    };

    ctx.notifications
        .push(Notification::success("notification-copied").with_arg("target", value.clone()));
    iced::clipboard::write(value)
}
