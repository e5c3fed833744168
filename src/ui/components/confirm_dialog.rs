// SPDX-License-Identifier: MPL-2.0
//! Reusable confirmation dialog with consistent styling.
//!
//! The dialog shows a title, an explanatory message, and a pair of
//! confirm/cancel buttons. It is rendered as a centered panel and the
//! caller decides how to overlay it on the underlying screen.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::confirm_dialog::ConfirmDialog;
//!
//! ConfirmDialog::new("Sign out?")
//!     .message("Your favorites stay on this device.")
//!     .confirm("Sign out", Message::ConfirmSignOut)
//!     .cancel("Cancel", Message::CancelSignOut)
//!     .view()
//! ```

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Configuration for the confirmation dialog.
#[derive(Debug, Clone)]
pub struct ConfirmDialog<Message> {
    title: String,
    message: Option<String>,
    confirm_label: String,
    confirm_message: Option<Message>,
    cancel_label: String,
    cancel_message: Option<Message>,
    destructive: bool,
}

impl<Message: Clone + 'static> ConfirmDialog<Message> {
    /// Creates a new dialog with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            confirm_label: "OK".to_string(),
            confirm_message: None,
            cancel_label: "Cancel".to_string(),
            cancel_message: None,
            destructive: false,
        }
    }

    /// Sets the explanatory message under the title.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the confirm button label and the message it emits.
    pub fn confirm(mut self, label: impl Into<String>, message: Message) -> Self {
        self.confirm_label = label.into();
        self.confirm_message = Some(message);
        self
    }

    /// Sets the cancel button label and the message it emits.
    pub fn cancel(mut self, label: impl Into<String>, message: Message) -> Self {
        self.cancel_label = label.into();
        self.cancel_message = Some(message);
        self
    }

    /// Marks the confirm action as destructive (red confirm button).
    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }

    /// Renders the dialog panel.
    pub fn view<'a>(self) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(self.title).size(typography::TITLE_SM));

        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY));
        }

        let mut confirm_button = button(Text::new(self.confirm_label));
        confirm_button = if self.destructive {
            confirm_button.style(styles::button::danger)
        } else {
            confirm_button.style(styles::button::primary)
        };
        if let Some(message) = self.confirm_message {
            confirm_button = confirm_button.on_press(message);
        }

        let mut cancel_button =
            button(Text::new(self.cancel_label)).style(styles::button::secondary);
        if let Some(message) = self.cancel_message {
            cancel_button = cancel_button.on_press(message);
        }

        let buttons = Row::new()
            .spacing(spacing::SM)
            .push(cancel_button)
            .push(confirm_button);

        content = content.push(
            Container::new(buttons)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

        Container::new(content)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::panel)
            .into()
    }
}
