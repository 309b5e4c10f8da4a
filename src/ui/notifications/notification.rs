// SPDX-License-Identifier: MPL-2.0
//! A single toast: severity, localized message key and lifetime.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level; drives the accent color and how long the toast stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Short glyph drawn before the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// Time on screen before the toast dismisses itself.
    #[must_use]
    pub fn lifetime(self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(6),
            Severity::Error => Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    shown_at: Instant,
}

impl Notification {
    /// Creates a notification whose text is the i18n `message_key`,
    /// resolved at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Same key and same arguments.
    #[must_use]
    pub fn says_same_as(&self, other: &Notification) -> bool {
        self.message_key == other.message_key && self.message_args == other.message_args
    }

    /// Restarts the lifetime from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.shown_at = now;
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.severity.lifetime()
    }

    /// Localized message text.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        if self.message_args.is_empty() {
            return i18n.tr(&self.message_key);
        }
        let args: Vec<(&str, &str)> = self
            .message_args
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.message_key, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        assert_ne!(
            Notification::success("a").id(),
            Notification::success("a").id()
        );
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn worse_severities_stay_longer() {
        assert!(Severity::Warning.lifetime() > Severity::Success.lifetime());
        assert!(Severity::Error.lifetime() > Severity::Warning.lifetime());
    }

    #[test]
    fn expiry_follows_lifetime() {
        let notification = Notification::success("done");
        let start = Instant::now();
        let mut fresh = notification.clone();
        fresh.restart(start);
        assert!(!fresh.is_expired(start + Duration::from_millis(2900)));
        assert!(fresh.is_expired(start + Duration::from_secs(3)));
    }

    #[test]
    fn same_message_detection_includes_args() {
        let a = Notification::success("notification-copied").with_arg("target", "mail");
        let b = Notification::success("notification-copied").with_arg("target", "mail");
        let c = Notification::success("notification-copied").with_arg("target", "link");
        assert!(a.says_same_as(&b));
        assert!(!a.says_same_as(&c));
    }

    #[test]
    fn text_interpolates_arguments() {
        let i18n = I18n::new(Some("en-US".to_string()), &Default::default());
        let text = Notification::success("notification-copied")
            .with_arg("target", "someone@example.com")
            .text(&i18n);
        assert!(text.contains("someone@example.com"));
    }
}
