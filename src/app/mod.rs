// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct wires together the loaded content, the mounted widgets,
//! localization and settings, and translates messages into side effects
//! such as scroll animations, clipboard writes or content reloads.

pub mod config;
mod message;
pub mod page;
pub mod paths;
pub mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};
pub use page::{PageWidgets, WidgetKey};
pub use section::{Anchors, Section};
pub use subscription::shortcut_for;

use crate::content::{self, LoadedContent};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::sections::footer;
use crate::ui::state::{FrameInterval, SmoothScroll};
use crate::ui::theming::AppTheme;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Id of the scrollable holding the page sections.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    content: LoadedContent,
    /// File the content was read from; `None` for the embedded content.
    content_path: Option<PathBuf>,
    widgets: PageWidgets,
    anchors: Anchors,
    active: Section,
    /// Last vertical offset reported by the page scrollable.
    scroll_offset: f32,
    smooth_scroll: Option<SmoothScroll>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("generation", &self.widgets.generation())
            .field("active", &self.active)
            .field("content_path", &self.content_path)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let (content, _) = content::load(None);
        Self::from_parts(Config::default(), I18n::default(), content, None)
    }
}

impl App {
    /// Loads settings and content, then mounts the page widgets.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let content_path = flags
            .content
            .map(PathBuf::from)
            .or_else(|| config.content.path.clone());
        log::info!(
            "Starting with content from {}",
            content_path
                .as_ref()
                .map_or_else(|| "embedded portfolio".to_string(), |p| p.display().to_string())
        );

        let (content, content_warning) = content::load(content_path.as_deref());
        let mut app = Self::from_parts(config, i18n, content, content_path);

        // Show warnings for config/content loading issues
        for key in [config_warning, content_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn from_parts(
        config: Config,
        i18n: I18n,
        content: LoadedContent,
        content_path: Option<PathBuf>,
    ) -> Self {
        let widgets = PageWidgets::mount(1, &content, &config);
        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            config,
            content,
            content_path,
            widgets,
            anchors: Anchors::default(),
            active: Section::Home,
            scroll_offset: 0.0,
            smooth_scroll: None,
            notifications: notifications::Manager::new(),
            year: footer::current_year(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let name = &self.content.portfolio.profile.name;
        if name.is_empty() {
            app_name
        } else {
            format!("{name} - {app_name}")
        }
    }

    fn theme(&self) -> Theme {
        self.theme.to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let widget_sub = subscription::create_widget_subscription(&self.widgets);
        let scroll_sub = subscription::create_scroll_subscription(
            self.smooth_scroll.is_some(),
            FrameInterval::from_setting(self.config.counter.frame_interval_ms),
        );
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, widget_sub, scroll_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &self.config,
            content: &mut self.content,
            content_path: self.content_path.as_ref(),
            widgets: &mut self.widgets,
            anchors: &mut self.anchors,
            active: &mut self.active,
            scroll_offset: &mut self.scroll_offset,
            smooth_scroll: &mut self.smooth_scroll,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Section(section_message) => {
                update::handle_section_message(&mut ctx, section_message)
            }
            Message::Counter(key, counter_message) => {
                update::handle_counter_message(&mut ctx, key, counter_message)
            }
            Message::Carousel(key, carousel_message) => {
                update::handle_carousel_message(&mut ctx, key, carousel_message)
            }
            Message::Scrolled(viewport) => update::handle_scrolled(&mut ctx, viewport),
            Message::ContentMeasured(bounds) => update::handle_content_measured(&mut ctx, bounds),
            Message::SectionMeasured(section, bounds) => {
                update::handle_section_measured(&mut ctx, section, bounds)
            }
            Message::ScrollFrame(now) => update::handle_scroll_frame(&mut ctx, now),
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            portfolio: &self.content.portfolio,
            widgets: &self.widgets,
            active: self.active,
            notifications: &self.notifications,
            year: self.year,
        })
    }
}
