// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows the app title on the left and, depending on session
//! state, either the signed-in username with gallery/profile navigation
//! or a sign-in shortcut on the right.

use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    /// Username of the signed-in account, if any.
    pub username: Option<&'a str>,
    /// Whether the gallery screen is currently shown.
    pub on_gallery: bool,
    /// Whether the profile screen is currently shown.
    pub on_profile: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenGallery,
    OpenProfile,
    OpenSignIn,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenGallery,
    OpenProfile,
    OpenSignIn,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenGallery => Event::OpenGallery,
        Message::OpenProfile => Event::OpenProfile,
        Message::OpenSignIn => Event::OpenSignIn,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Kameravue").size(typography::TITLE_MD);

    let gallery_button = nav_button("Gallery", Message::OpenGallery, ctx.on_gallery);
    let theme_button = button(Text::new("\u{25D0}"))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::link);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(gallery_button);

    match ctx.username {
        Some(name) => {
            row = row
                .push(nav_button(name, Message::OpenProfile, ctx.on_profile))
                .push(theme_button);
        }
        None => {
            row = row
                .push(nav_button("Sign in", Message::OpenSignIn, false))
                .push(theme_button);
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .style(bar_style)
        .into()
}

fn nav_button(label: &str, message: Message, selected: bool) -> Element<'_, Message> {
    let text = Text::new(label.to_owned());
    let base = button(text).padding([spacing::XS, spacing::SM]);

    if selected {
        base.style(styles::button::primary).into()
    } else {
        base.on_press(message)
            .style(styles::button::secondary)
            .into()
    }
}

fn bar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_renders_signed_out() {
        let ctx = ViewContext {
            username: None,
            on_gallery: true,
            on_profile: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_renders_signed_in() {
        let ctx = ViewContext {
            username: Some("alice"),
            on_gallery: false,
            on_profile: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn messages_map_to_events() {
        assert!(matches!(update(Message::OpenGallery), Event::OpenGallery));
        assert!(matches!(update(Message::OpenProfile), Event::OpenProfile));
        assert!(matches!(update(Message::OpenSignIn), Event::OpenSignIn));
        assert!(matches!(update(Message::ToggleTheme), Event::ToggleTheme));
    }
}
