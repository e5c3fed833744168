// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum used
//! throughout the notification system, plus the constructor-level
//! validation that keeps malformed notifications out of the manager.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids are never reused within a process, so a stale auto-dismiss for an
/// already removed notification can never hit a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind determines default display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed successfully (green, 4s).
    #[default]
    Success,
    /// Informational message (blue, 4s).
    Info,
    /// Warning that doesn't block operation (orange, 5s).
    Warning,
    /// Error requiring attention (red, 5s).
    Error,
}

impl Kind {
    /// Returns the primary color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Returns the default lifetime for this kind.
    #[must_use]
    pub fn default_lifetime(&self) -> Duration {
        match self {
            Kind::Success | Kind::Info => Duration::from_millis(4000),
            Kind::Warning | Kind::Error => Duration::from_millis(5000),
        }
    }
}

/// Rejected notification input.
///
/// Raised at construction so misuse is caught at the call site instead of
/// producing a blank or immortal toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNotification {
    /// The message was empty (or whitespace only).
    EmptyMessage,
    /// A caller-supplied lifetime of zero.
    ZeroLifetime,
}

impl fmt::Display for InvalidNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidNotification::EmptyMessage => write!(f, "notification message is empty"),
            InvalidNotification::ZeroLifetime => write!(f, "notification lifetime must be positive"),
        }
    }
}

impl std::error::Error for InvalidNotification {}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Kind (determines color and default lifetime).
    kind: Kind,
    /// Human-readable message, immutable after creation.
    message: String,
    /// When this notification was created.
    created_at: Instant,
    /// How long the notification stays before auto-dismissal.
    lifetime: Duration,
}

impl Notification {
    /// Creates a new notification with the kind's default lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNotification::EmptyMessage`] when `message` is empty
    /// or whitespace only.
    pub fn new(kind: Kind, message: impl Into<String>) -> Result<Self, InvalidNotification> {
        Self::build(kind, message.into(), kind.default_lifetime())
    }

    /// Creates a new notification with a caller-supplied lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNotification::ZeroLifetime`] for a zero duration and
    /// [`InvalidNotification::EmptyMessage`] for an empty message.
    pub fn with_lifetime(
        kind: Kind,
        message: impl Into<String>,
        lifetime: Duration,
    ) -> Result<Self, InvalidNotification> {
        if lifetime.is_zero() {
            return Err(InvalidNotification::ZeroLifetime);
        }
        Self::build(kind, message.into(), lifetime)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Result<Self, InvalidNotification> {
        Self::new(Kind::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Result<Self, InvalidNotification> {
        Self::new(Kind::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Result<Self, InvalidNotification> {
        Self::new(Kind::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Result<Self, InvalidNotification> {
        Self::new(Kind::Error, message)
    }

    fn build(kind: Kind, message: String, lifetime: Duration) -> Result<Self, InvalidNotification> {
        if message.trim().is_empty() {
            return Err(InvalidNotification::EmptyMessage);
        }
        Ok(Self {
            id: NotificationId::new(),
            kind,
            message,
            created_at: Instant::now(),
            lifetime,
        })
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the lifetime assigned at creation.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Returns the instant at which this notification expires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.created_at + self.lifetime
    }

    /// Returns whether this notification has expired at `now`.
    ///
    /// Taking `now` explicitly keeps expiry testable without waiting on
    /// wall-clock time.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("saved").unwrap();
        let n2 = Notification::success("saved").unwrap();
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        let success = Kind::Success.color();
        let info = Kind::Info.color();
        let warning = Kind::Warning.color();
        let error = Kind::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn default_lifetimes_follow_kind() {
        assert_eq!(Kind::Success.default_lifetime(), Duration::from_millis(4000));
        assert_eq!(Kind::Info.default_lifetime(), Duration::from_millis(4000));
        assert_eq!(Kind::Warning.default_lifetime(), Duration::from_millis(5000));
        assert_eq!(Kind::Error.default_lifetime(), Duration::from_millis(5000));
    }

    #[test]
    fn empty_message_is_rejected() {
        assert_eq!(
            Notification::success("").unwrap_err(),
            InvalidNotification::EmptyMessage
        );
        assert_eq!(
            Notification::error("   ").unwrap_err(),
            InvalidNotification::EmptyMessage
        );
    }

    #[test]
    fn zero_lifetime_is_rejected() {
        assert_eq!(
            Notification::with_lifetime(Kind::Info, "hi", Duration::ZERO).unwrap_err(),
            InvalidNotification::ZeroLifetime
        );
    }

    #[test]
    fn custom_lifetime_overrides_kind_default() {
        let n = Notification::with_lifetime(Kind::Success, "long", Duration::from_secs(60))
            .unwrap();
        assert_eq!(n.lifetime(), Duration::from_secs(60));
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::success("m").unwrap().kind(), Kind::Success);
        assert_eq!(Notification::info("m").unwrap().kind(), Kind::Info);
        assert_eq!(Notification::warning("m").unwrap().kind(), Kind::Warning);
        assert_eq!(Notification::error("m").unwrap().kind(), Kind::Error);
    }

    #[test]
    fn expiry_is_relative_to_deadline() {
        let n = Notification::success("saved").unwrap();
        let created = n.created_at();

        assert!(!n.is_expired(created));
        assert!(!n.is_expired(created + Duration::from_millis(3999)));
        assert!(n.is_expired(created + Duration::from_millis(4000)));
        assert!(n.is_expired(created + Duration::from_secs(10)));
    }
}
