// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with kinds and validation
//! - [`manager`] - `Manager` for the active set and expiry lifecycle
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//!
//! // Show a notification and keep its id for later removal
//! let id = manager.show(Notification::success("Image saved")?);
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 4s for success/info, 5s for warnings and errors
//! - Max visible toasts: 5 (showing a sixth evicts the oldest)
//! - Position: bottom-right corner, oldest on top
//! - Accessibility: sufficient contrast, screen reader support

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{InvalidNotification, Kind, Notification, NotificationId};
pub use toast::Toast;
