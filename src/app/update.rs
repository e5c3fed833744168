// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for different
//! parts of the application. Each handler receives an [`UpdateContext`]
//! with mutable access to the application state it may touch.

use super::{persisted_state::AppState, Message, Screen};
use crate::accounts::AccountStore;
use crate::config::{self, Config};
use crate::error::Error;
use crate::library::PhotoLibrary;
use crate::media::{self, ImageData};
use crate::ui::auth::{self, Event as AuthEvent};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{Kind, Manager, Notification};
use crate::ui::profile::{self, Event as ProfileEvent};
use crate::ui::state::ScrollMemory;
use crate::ui::theming::ThemeMode;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state passed to message handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub gallery: &'a mut gallery::State,
    pub auth: &'a mut auth::State,
    pub profile: &'a mut profile::State,
    pub session: &'a mut Option<crate::accounts::Profile>,
    pub accounts: &'a mut AccountStore,
    pub config: &'a mut Config,
    pub app_state: &'a mut AppState,
    pub scroll_memory: &'a mut ScrollMemory,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut Manager,
}

/// Shows a toast, dropping it silently if the text is somehow blank.
fn notify(manager: &mut Manager, kind: Kind, text: impl Into<String>) {
    if let Ok(notification) = Notification::new(kind, text) {
        manager.show(notification);
    }
}

/// Persists the config, converting a failure into a warning toast.
fn persist_config(ctx: &mut UpdateContext<'_>) {
    if let Err(error) = config::save(ctx.config) {
        notify(
            ctx.notifications,
            Kind::Warning,
            format!("Settings could not be saved: {error}"),
        );
    }
}

/// Persists the session state, converting a failure into a warning toast.
fn persist_app_state(ctx: &mut UpdateContext<'_>) {
    if let Some(warning) = ctx.app_state.save() {
        notify(ctx.notifications, Kind::Warning, warning);
    }
}

/// Restores the gallery scroll offset remembered for the current
/// directory, if it has not expired.
pub fn restore_scroll(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.screen != Screen::Gallery || ctx.gallery.detail_open() {
        return Task::none();
    }

    let Some(key) = ctx.gallery.scroll_key() else {
        return Task::none();
    };

    match ctx.scroll_memory.recall(&key) {
        Some(offset) => operation::scroll_to(Id::new(gallery::SCROLLABLE_ID), offset),
        None => Task::none(),
    }
}

/// Opens the native directory picker, starting from the most recently
/// used photos directory when one is known.
fn open_directory_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title("Choose a photos folder");

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::DirectoryChosen,
    )
}

/// Kicks off an asynchronous scan of `directory`.
pub fn scan_directory(directory: PathBuf, sort_order: config::SortOrder) -> Task<Message> {
    Task::perform(
        async move { PhotoLibrary::scan(&directory, sort_order) },
        Message::LibraryScanned,
    )
}

/// Handles messages from the gallery screen.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.update(message) {
        GalleryEvent::None => Task::none(),
        GalleryEvent::PickDirectory => {
            let last = ctx
                .gallery
                .library()
                .directory()
                .map(PathBuf::from)
                .or_else(|| ctx.app_state.last_photos_directory.clone());
            open_directory_dialog(last)
        }
        GalleryEvent::SortChanged(order) => {
            ctx.config.gallery.sort_order = Some(order);
            persist_config(ctx);
            Task::none()
        }
        GalleryEvent::ToggleFavorite(path) => {
            ctx.app_state.toggle_favorite(&path);
            persist_app_state(ctx);
            Task::none()
        }
        GalleryEvent::LoadPhoto(path) => Task::perform(
            async move { media::load_image(&path) },
            Message::PhotoLoaded,
        ),
        GalleryEvent::DetailClosed => restore_scroll(ctx),
        GalleryEvent::Scrolled(offset) => {
            if let Some(key) = ctx.gallery.scroll_key() {
                ctx.scroll_memory.remember(key, offset);
            }
            Task::none()
        }
    }
}

/// Handles the result of the directory picker.
pub fn handle_directory_chosen(
    ctx: &mut UpdateContext<'_>,
    directory: Option<PathBuf>,
) -> Task<Message> {
    let Some(directory) = directory else {
        // User cancelled the dialog
        return Task::none();
    };

    scan_directory(directory, ctx.gallery.sort_order())
}

/// Handles the result of a directory scan.
pub fn handle_library_scanned(
    ctx: &mut UpdateContext<'_>,
    result: Result<PhotoLibrary, Error>,
) -> Task<Message> {
    match result {
        Ok(library) => {
            let directory = library.directory().map(PathBuf::from);
            let count = library.len();

            ctx.gallery.set_library(library);

            if let Some(directory) = directory {
                ctx.config.gallery.photos_dir = Some(directory.clone());
                persist_config(ctx);
                ctx.app_state.last_photos_directory = Some(directory);
                persist_app_state(ctx);
            }

            notify(
                ctx.notifications,
                Kind::Success,
                format!("Loaded {count} photos"),
            );

            restore_scroll(ctx)
        }
        Err(error) => {
            notify(
                ctx.notifications,
                Kind::Error,
                format!("Could not read the folder: {error}"),
            );
            Task::none()
        }
    }
}

/// Handles the decode result for the photo opened in the detail view.
pub fn handle_photo_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    if let Err(error) = &result {
        notify(
            ctx.notifications,
            Kind::Error,
            format!("Could not open the photo: {error}"),
        );
    }
    handle_gallery_message(ctx, gallery::Message::PhotoLoaded(result))
}

/// Handles messages from the sign-in and registration forms.
pub fn handle_auth_message(ctx: &mut UpdateContext<'_>, message: auth::Message) -> Task<Message> {
    match ctx.auth.update(message) {
        AuthEvent::None => Task::none(),
        AuthEvent::SignIn { username, password } => {
            match ctx.accounts.sign_in(&username, &password) {
                Ok(profile) => complete_sign_in(ctx, profile, "Signed in as"),
                Err(error) => {
                    ctx.auth.set_error(&error);
                    Task::none()
                }
            }
        }
        AuthEvent::Register {
            username,
            email,
            password,
        } => match ctx.accounts.register(&username, &email, &password) {
            Ok(profile) => complete_sign_in(ctx, profile, "Account created for"),
            Err(error) => {
                ctx.auth.set_error(&error);
                Task::none()
            }
        },
    }
}

/// Stores the session, remembers the username, and returns to the gallery.
fn complete_sign_in(
    ctx: &mut UpdateContext<'_>,
    profile: crate::accounts::Profile,
    greeting: &str,
) -> Task<Message> {
    notify(
        ctx.notifications,
        Kind::Success,
        format!("{greeting} {}", profile.username),
    );

    ctx.app_state.remembered_username = Some(profile.username.as_str().to_owned());
    persist_app_state(ctx);

    ctx.profile.load(&profile);
    *ctx.session = Some(profile);
    *ctx.screen = Screen::Gallery;

    restore_scroll(ctx)
}

/// Handles messages from the profile screen.
pub fn handle_profile_message(
    ctx: &mut UpdateContext<'_>,
    message: profile::Message,
) -> Task<Message> {
    match ctx.profile.update(message) {
        ProfileEvent::None => Task::none(),
        ProfileEvent::Save {
            email,
            display_name,
        } => {
            let Some(username) = ctx
                .session
                .as_ref()
                .map(|profile| profile.username.as_str().to_owned())
            else {
                return Task::none();
            };

            match ctx.accounts.update_profile(&username, &email, &display_name) {
                Ok(profile) => {
                    ctx.profile.load(&profile);
                    *ctx.session = Some(profile);
                    notify(ctx.notifications, Kind::Success, "Profile updated");
                }
                Err(error) => ctx.profile.set_error(&error),
            }
            Task::none()
        }
        ProfileEvent::SignOut => {
            *ctx.session = None;
            ctx.app_state.remembered_username = None;
            persist_app_state(ctx);

            *ctx.auth = auth::State::new(None);
            *ctx.screen = Screen::Gallery;
            notify(ctx.notifications, Kind::Info, "Signed out");

            restore_scroll(ctx)
        }
    }
}

/// Handles messages from the navigation bar.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::OpenGallery => {
            *ctx.screen = Screen::Gallery;
            restore_scroll(ctx)
        }
        NavbarEvent::OpenProfile => {
            *ctx.screen = if let Some(profile) = ctx.session.as_ref() {
                // Drop any stale form edits from a previous visit
                ctx.profile.load(profile);
                Screen::Profile
            } else {
                Screen::Auth
            };
            Task::none()
        }
        NavbarEvent::OpenSignIn => {
            *ctx.screen = Screen::Auth;
            Task::none()
        }
        NavbarEvent::ToggleTheme => {
            *ctx.theme_mode = if ctx.theme_mode.is_dark() {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            ctx.config.general.theme_mode = *ctx.theme_mode;
            persist_config(ctx);
            Task::none()
        }
    }
}
