// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, with the navbar on top and the
//! toast overlay stacked above everything.

use super::{Message, Screen};
use crate::accounts::Profile;
use crate::app::persisted_state::AppState;
use crate::ui::auth;
use crate::ui::gallery;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::profile;
use iced::widget::{stack, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub gallery: &'a gallery::State,
    pub auth: &'a auth::State,
    pub profile: &'a profile::State,
    pub session: Option<&'a Profile>,
    pub app_state: &'a AppState,
    pub notifications: &'a Manager,
    pub grid_columns: u16,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        username: ctx.session.map(Profile::display_label),
        on_gallery: ctx.screen == Screen::Gallery,
        on_profile: ctx.screen == Screen::Profile,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => ctx
            .gallery
            .view(&ctx.app_state.favorites, ctx.grid_columns)
            .map(Message::Gallery),
        Screen::Auth => ctx.auth.view().map(Message::Auth),
        Screen::Profile => view_profile(&ctx),
    };

    let content = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    stack(vec![content.into(), toasts]).into()
}

fn view_profile<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.session {
        Some(profile) => ctx
            .profile
            .view(profile, ctx.app_state.favorites.len())
            .map(Message::Profile),
        // No session: fall back to the sign-in form
        None => ctx.auth.view().map(Message::Auth),
    }
}
