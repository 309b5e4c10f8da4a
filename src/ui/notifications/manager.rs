// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` limits how many toasts are on screen, queues the rest and
//! expires them on a periodic tick.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On screen, newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, or queues it when the screen is full.
    ///
    /// A notification saying the same thing as one already on screen only
    /// restarts that one's lifetime.
    pub fn push(&mut self, notification: Notification) {
        if let Some(existing) = self
            .visible
            .iter_mut()
            .find(|shown| shown.says_same_as(&notification))
        {
            existing.restart(Instant::now());
            return;
        }

        log::debug!("Notification: {}", notification.message_key());
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Removes every visible notification whose lifetime ended by `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Queued toasts get their full lifetime once they appear.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.restart(now);
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn duplicate_message_is_not_stacked() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-copied").with_arg("target", "x"));
        manager.push(Notification::success("notification-copied").with_arg("target", "x"));
        assert_eq!(manager.visible_count(), 1);

        manager.push(Notification::success("notification-copied").with_arg("target", "y"));
        assert_eq!(manager.visible_count(), 2);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::success("visible-0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        manager.push(Notification::success("queued"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::success("temp").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn tick_expires_old_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("short"));
        manager.push(Notification::error("long"));

        let later = Instant::now() + Duration::from_secs(4);
        manager.tick(later);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Notification::message_key),
            Some("long")
        );

        manager.tick(Instant::now() + Duration::from_secs(60));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::warning("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }
}
