// SPDX-License-Identifier: MPL-2.0
//! Sign-in and registration screen.
//!
//! The form performs no account logic itself. Submissions are propagated
//! as events and the parent application runs them against the account
//! store, feeding any failure back through [`State::set_error`].

use crate::error::AccountError;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Which form is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    SignIn,
    Register,
}

/// Auth screen state.
#[derive(Debug, Clone, Default)]
pub struct State {
    mode: Mode,
    username: String,
    email: String,
    password: String,
    error: Option<&'static str>,
}

/// Messages emitted by the auth screen.
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    SwitchMode,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    SignIn { username: String, password: String },
    Register {
        username: String,
        email: String,
        password: String,
    },
}

impl State {
    /// Creates a sign-in form, optionally prefilled with the username
    /// remembered from the previous session.
    #[must_use]
    pub fn new(remembered_username: Option<&str>) -> Self {
        Self {
            username: remembered_username.unwrap_or_default().to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Records a failed submission so the form can show why.
    pub fn set_error(&mut self, error: &AccountError) {
        self.error = Some(error.message());
    }

    /// Processes a message and returns the event for the parent to act on.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::UsernameChanged(value) => {
                self.username = value;
                self.error = None;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                self.error = None;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                self.error = None;
                Event::None
            }
            Message::SwitchMode => {
                self.mode = match self.mode {
                    Mode::SignIn => Mode::Register,
                    Mode::Register => Mode::SignIn,
                };
                self.error = None;
                Event::None
            }
            Message::Submit => match self.mode {
                Mode::SignIn => Event::SignIn {
                    username: self.username.clone(),
                    password: self.password.clone(),
                },
                Mode::Register => Event::Register {
                    username: self.username.clone(),
                    email: self.email.clone(),
                    password: self.password.clone(),
                },
            },
        }
    }

    /// Renders the form for the current mode.
    pub fn view(&self) -> Element<'_, Message> {
        let (title, submit_label, switch_label) = match self.mode {
            Mode::SignIn => ("Sign in", "Sign in", "No account yet? Register"),
            Mode::Register => ("Register", "Create account", "Have an account? Sign in"),
        };

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(Text::new(title).size(typography::TITLE_MD))
            .push(
                text_input("Username", &self.username)
                    .on_input(Message::UsernameChanged)
                    .padding(spacing::XS),
            );

        if self.mode == Mode::Register {
            form = form.push(
                text_input("Email", &self.email)
                    .on_input(Message::EmailChanged)
                    .padding(spacing::XS),
            );
        }

        form = form.push(
            text_input("Password", &self.password)
                .on_input(Message::PasswordChanged)
                .on_submit(Message::Submit)
                .secure(true)
                .padding(spacing::XS),
        );

        if let Some(error) = self.error {
            form = form.push(
                Text::new(error)
                    .size(typography::BODY_SM)
                    .color(palette::ERROR_500),
            );
        }

        form = form
            .push(
                button(Text::new(submit_label))
                    .on_press(Message::Submit)
                    .width(Length::Fill)
                    .style(styles::button::primary),
            )
            .push(
                button(Text::new(switch_label))
                    .on_press(Message::SwitchMode)
                    .style(styles::button::link),
            );

        let panel = Container::new(form)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::panel);

        Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_submission_carries_the_credentials() {
        let mut state = State::new(None);
        state.update(Message::UsernameChanged("alice".to_string()));
        state.update(Message::PasswordChanged("hunter2hunter2".to_string()));

        match state.update(Message::Submit) {
            Event::SignIn { username, password } => {
                assert_eq!(username, "alice");
                assert_eq!(password, "hunter2hunter2");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn register_submission_includes_email() {
        let mut state = State::new(None);
        state.update(Message::SwitchMode);
        state.update(Message::UsernameChanged("alice".to_string()));
        state.update(Message::EmailChanged("alice@example.com".to_string()));
        state.update(Message::PasswordChanged("hunter2hunter2".to_string()));

        match state.update(Message::Submit) {
            Event::Register { email, .. } => assert_eq!(email, "alice@example.com"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn switching_mode_clears_the_error() {
        let mut state = State::new(None);
        state.set_error(&AccountError::WrongPassword);
        assert!(state.error.is_some());

        state.update(Message::SwitchMode);
        assert!(state.error.is_none());
        assert_eq!(state.mode(), Mode::Register);
    }

    #[test]
    fn remembered_username_prefills_the_form() {
        let state = State::new(Some("alice"));
        assert_eq!(state.username, "alice");
    }

    #[test]
    fn typing_clears_a_stale_error() {
        let mut state = State::new(None);
        state.set_error(&AccountError::UnknownUser);

        state.update(Message::UsernameChanged("bob".to_string()));
        assert!(state.error.is_none());
    }

    #[test]
    fn both_modes_render() {
        let mut state = State::new(Some("alice"));
        {
            let _element = state.view();
        }

        state.update(Message::SwitchMode);
        let _element = state.view();
    }
}
