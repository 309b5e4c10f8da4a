// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::page::WidgetKey;
use super::section::Section;
use crate::ui::carousel;
use crate::ui::counter;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use iced::widget::scrollable::Viewport;
use iced::Rectangle;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Section(sections::Message),
    Counter(WidgetKey, counter::Message),
    Carousel(WidgetKey, carousel::Message),
    /// The page scrollable moved, by the user or by a smooth scroll step.
    Scrolled(Viewport),
    /// Layout bounds of the scrolled page content.
    ContentMeasured(Rectangle),
    SectionMeasured(Section, Rectangle),
    /// One step of the smooth scroll animation.
    ScrollFrame(Instant),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification auto-dismiss
    Shortcut(Shortcut),
}

/// Keyboard shortcuts handled at the application level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    CloseModal,
    Previous,
    Next,
    /// Re-read the content file and remount every widget.
    Reload,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional portfolio file; takes precedence over `[content].path`.
    pub content: Option<String>,
}
