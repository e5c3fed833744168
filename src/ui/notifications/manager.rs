// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle manager.
//!
//! Holds the active notifications, caps how many are shown at once, and
//! sweeps out expired ones on each tick. When the cap is reached, the
//! oldest active notification is evicted to make room for the new one.

use super::notification::{InvalidNotification, Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications displayed simultaneously.
pub const MAX_VISIBLE: usize = 5;

/// Messages the notification system handles.
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the dismiss button on a notification.
    Dismiss(NotificationId),
    /// Periodic tick to sweep expired notifications.
    Tick,
}

/// Manages active notifications.
///
/// Insertion order is preserved, so iteration over [`Manager::active`]
/// always yields oldest first.
#[derive(Debug, Default)]
pub struct Manager {
    active: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification, evicting the oldest one first when the
    /// display is already full. Returns the notification's ID.
    pub fn show(&mut self, notification: Notification) -> NotificationId {
        if self.active.len() >= MAX_VISIBLE {
            self.active.pop_front();
        }
        let id = notification.id();
        self.active.push_back(notification);
        id
    }

    /// Shows a success notification.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNotification::EmptyMessage`] for a blank message.
    pub fn show_success(
        &mut self,
        message: impl Into<String>,
    ) -> Result<NotificationId, InvalidNotification> {
        Ok(self.show(Notification::success(message)?))
    }

    /// Shows an info notification.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNotification::EmptyMessage`] for a blank message.
    pub fn show_info(
        &mut self,
        message: impl Into<String>,
    ) -> Result<NotificationId, InvalidNotification> {
        Ok(self.show(Notification::info(message)?))
    }

    /// Shows a warning notification.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNotification::EmptyMessage`] for a blank message.
    pub fn show_warning(
        &mut self,
        message: impl Into<String>,
    ) -> Result<NotificationId, InvalidNotification> {
        Ok(self.show(Notification::warning(message)?))
    }

    /// Shows an error notification.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNotification::EmptyMessage`] for a blank message.
    pub fn show_error(
        &mut self,
        message: impl Into<String>,
    ) -> Result<NotificationId, InvalidNotification> {
        Ok(self.show(Notification::error(message)?))
    }

    /// Removes a notification by ID.
    ///
    /// Returns `true` if the notification was active, `false` if the ID is
    /// unknown or was already removed. Safe to call repeatedly with the
    /// same ID.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id() != id);
        self.active.len() != before
    }

    /// Removes all active notifications.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Sweeps out notifications that have expired at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.active.retain(|n| !n.is_expired(now));
    }

    /// Sweeps out notifications that have expired at the current instant.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Returns the active notifications, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns whether there are any active notifications.
    ///
    /// Used to gate the tick subscription so the app doesn't wake up
    /// every 100ms while idle.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether there are no active notifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::Kind;
    use std::time::Duration;

    #[test]
    fn show_returns_the_notifications_id() {
        let mut manager = Manager::new();
        let notification = Notification::success("saved").unwrap();
        let expected = notification.id();

        assert_eq!(manager.show(notification), expected);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn active_yields_oldest_first() {
        let mut manager = Manager::new();
        manager.show_info("first").unwrap();
        manager.show_info("second").unwrap();
        manager.show_info("third").unwrap();

        let messages: Vec<_> = manager.active().map(Notification::message).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.show_info(format!("toast {i}")).unwrap();
        }
        assert_eq!(manager.len(), MAX_VISIBLE);

        manager.show_info("newest").unwrap();

        assert_eq!(manager.len(), MAX_VISIBLE);
        let messages: Vec<_> = manager.active().map(Notification::message).collect();
        assert_eq!(messages[0], "toast 1");
        assert_eq!(messages[MAX_VISIBLE - 1], "newest");
    }

    #[test]
    fn remove_is_idempotent() {
        let mut manager = Manager::new();
        let id = manager.show_success("done").unwrap();

        assert!(manager.remove(id));
        assert!(!manager.remove(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_unknown_id_returns_false() {
        let mut manager = Manager::new();
        manager.show_success("done").unwrap();

        let foreign = Notification::info("elsewhere").unwrap().id();
        assert!(!manager.remove(foreign));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut manager = Manager::new();
        manager.show_info("a").unwrap();
        let middle = manager.show_info("b").unwrap();
        manager.show_info("c").unwrap();

        manager.remove(middle);

        let messages: Vec<_> = manager.active().map(Notification::message).collect();
        assert_eq!(messages, ["a", "c"]);
    }

    #[test]
    fn tick_at_sweeps_only_expired() {
        let mut manager = Manager::new();
        let short = Notification::with_lifetime(Kind::Info, "short", Duration::from_millis(100))
            .unwrap();
        let long = Notification::with_lifetime(Kind::Info, "long", Duration::from_secs(60))
            .unwrap();
        let start = short.created_at();
        manager.show(short);
        manager.show(long);

        manager.tick_at(start + Duration::from_millis(50));
        assert_eq!(manager.len(), 2);

        manager.tick_at(start + Duration::from_millis(200));
        let messages: Vec<_> = manager.active().map(Notification::message).collect();
        assert_eq!(messages, ["long"]);
    }

    #[test]
    fn tick_on_empty_manager_is_a_noop() {
        let mut manager = Manager::new();
        manager.tick_at(Instant::now() + Duration::from_secs(3600));
        assert!(manager.is_empty());
    }

    #[test]
    fn dismiss_message_removes_notification() {
        let mut manager = Manager::new();
        let id = manager.show_warning("careful").unwrap();

        manager.handle_message(Message::Dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut manager = Manager::new();
        manager.show_info("one").unwrap();
        manager.show_error("two").unwrap();

        manager.clear();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn blank_message_is_rejected_without_side_effects() {
        let mut manager = Manager::new();
        assert!(manager.show_error("  ").is_err());
        assert!(manager.is_empty());
    }
}
