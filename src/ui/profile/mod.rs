// SPDX-License-Identifier: MPL-2.0
//! Profile screen for the signed-in account.
//!
//! Shows the account details with editable email and display name, a
//! favorites summary, and the sign-out flow. Signing out asks for
//! confirmation first because it also clears the remembered username.

use crate::accounts::Profile;
use crate::error::AccountError;
use crate::ui::components::ConfirmDialog;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, stack, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Profile screen state, holding the in-progress form edits.
#[derive(Debug, Clone, Default)]
pub struct State {
    email: String,
    display_name: String,
    error: Option<&'static str>,
    confirm_sign_out: bool,
}

/// Messages emitted by the profile screen.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    DisplayNameChanged(String),
    Save,
    RequestSignOut,
    ConfirmSignOut,
    CancelSignOut,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user submitted the profile form.
    Save { email: String, display_name: String },
    SignOut,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the form fields from the given profile, dropping any
    /// in-progress edits and validation error.
    pub fn load(&mut self, profile: &Profile) {
        self.email = profile.email.as_str().to_owned();
        self.display_name = profile.display_name.clone().unwrap_or_default();
        self.error = None;
        self.confirm_sign_out = false;
    }

    /// Shows the validation message for a failed save.
    pub fn set_error(&mut self, error: &AccountError) {
        self.error = Some(error.message());
    }

    /// Processes a message and returns the event for the parent to act on.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(email) => {
                self.email = email;
                self.error = None;
                Event::None
            }
            Message::DisplayNameChanged(display_name) => {
                self.display_name = display_name;
                self.error = None;
                Event::None
            }
            Message::Save => Event::Save {
                email: self.email.clone(),
                display_name: self.display_name.clone(),
            },
            Message::RequestSignOut => {
                self.confirm_sign_out = true;
                Event::None
            }
            Message::ConfirmSignOut => {
                self.confirm_sign_out = false;
                Event::SignOut
            }
            Message::CancelSignOut => {
                self.confirm_sign_out = false;
                Event::None
            }
        }
    }

    /// Renders the profile screen for the given account.
    pub fn view<'a>(&'a self, profile: &'a Profile, favorite_count: usize) -> Element<'a, Message> {
        let mut details = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(profile.username.as_str()).size(typography::TITLE_MD))
            .push(
                text_input("Email", &self.email)
                    .on_input(Message::EmailChanged)
                    .padding(spacing::XS),
            )
            .push(
                text_input("Display name (optional)", &self.display_name)
                    .on_input(Message::DisplayNameChanged)
                    .padding(spacing::XS),
            );

        if let Some(error) = self.error {
            details = details.push(
                Text::new(error)
                    .size(typography::BODY_SM)
                    .color(palette::ERROR_500),
            );
        }

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(Text::new("Save changes"))
                    .on_press(Message::Save)
                    .style(styles::button::primary),
            )
            .push(
                button(Text::new("Sign out"))
                    .on_press(Message::RequestSignOut)
                    .style(styles::button::danger),
            );

        details = details
            .push(actions)
            .push(
                Text::new(format!("{favorite_count} favorite photos"))
                    .size(typography::BODY_SM),
            );

        let panel = Container::new(details)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .style(styles::container::panel);

        let screen: Element<'a, Message> = Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();

        if self.confirm_sign_out {
            let dialog = ConfirmDialog::new("Sign out?")
                .message("Your favorites and settings stay on this device.")
                .confirm("Sign out", Message::ConfirmSignOut)
                .cancel("Stay signed in", Message::CancelSignOut)
                .destructive()
                .view();

            let overlay = Container::new(dialog)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center);

            stack(vec![screen, overlay.into()]).into()
        } else {
            screen
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Email, Username};

    fn profile() -> Profile {
        Profile {
            username: Username::parse("alice").unwrap(),
            email: Email::parse("alice@example.com").unwrap(),
            display_name: None,
        }
    }

    #[test]
    fn load_prefills_the_form() {
        let mut state = State::new();
        state.set_error(&AccountError::InvalidEmail);

        state.load(&Profile {
            display_name: Some("Alice".to_string()),
            ..profile()
        });

        assert_eq!(state.email, "alice@example.com");
        assert_eq!(state.display_name, "Alice");
        assert!(state.error.is_none());
    }

    #[test]
    fn save_emits_the_edited_fields() {
        let mut state = State::new();
        state.load(&profile());
        state.update(Message::EmailChanged("new@example.com".to_string()));
        state.update(Message::DisplayNameChanged("Alice L".to_string()));

        match state.update(Message::Save) {
            Event::Save {
                email,
                display_name,
            } => {
                assert_eq!(email, "new@example.com");
                assert_eq!(display_name, "Alice L");
            }
            other => panic!("expected Save event, got {other:?}"),
        }
    }

    #[test]
    fn typing_clears_the_error() {
        let mut state = State::new();
        state.set_error(&AccountError::InvalidEmail);

        state.update(Message::EmailChanged("a@example.com".to_string()));
        assert!(state.error.is_none());
    }

    #[test]
    fn sign_out_requires_confirmation() {
        let mut state = State::new();

        let event = state.update(Message::RequestSignOut);
        assert!(matches!(event, Event::None));
        assert!(state.confirm_sign_out);

        let event = state.update(Message::ConfirmSignOut);
        assert!(matches!(event, Event::SignOut));
        assert!(!state.confirm_sign_out);
    }

    #[test]
    fn cancel_keeps_the_session() {
        let mut state = State::new();
        state.update(Message::RequestSignOut);

        let event = state.update(Message::CancelSignOut);
        assert!(matches!(event, Event::None));
        assert!(!state.confirm_sign_out);
    }

    #[test]
    fn profile_renders_with_and_without_dialog() {
        let account = profile();
        let mut state = State::new();
        state.load(&account);
        {
            let _element = state.view(&account, 3);
        }

        state.update(Message::RequestSignOut);
        let _element = state.view(&account, 3);
    }
}
