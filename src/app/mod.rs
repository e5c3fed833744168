// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the gallery, accounts, and settings
//! and translates messages into side effects like config persistence or
//! image decoding. This file intentionally keeps policy decisions
//! (window size, persistence format, theme selection) close to the main
//! update loop so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::accounts::{AccountStore, Profile};
use crate::config::{self, Config};
use crate::ui::auth;
use crate::ui::gallery;
use crate::ui::notifications::{Kind, Manager, Notification};
use crate::ui::profile;
use crate::ui::state::ScrollMemory;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 500;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state that bridges UI components, accounts, and
/// persisted preferences.
pub struct App {
    screen: Screen,
    gallery: gallery::State,
    auth: auth::State,
    profile: profile::State,
    /// The signed-in account, if any.
    session: Option<Profile>,
    accounts: AccountStore,
    config: Config,
    /// Persisted application state (favorites, last directory, etc.).
    app_state: persisted_state::AppState,
    /// Remembered gallery scroll offsets, keyed by directory.
    scroll_memory: ScrollMemory,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.session.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Gallery,
            gallery: gallery::State::default(),
            auth: auth::State::default(),
            profile: profile::State::new(),
            session: None,
            accounts: AccountStore::in_memory(),
            config: Config::default(),
            app_state: persisted_state::AppState::default(),
            scroll_memory: ScrollMemory::default(),
            theme_mode: ThemeMode::System,
            notifications: Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off an
    /// asynchronous directory scan based on `Flags` from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app_state, state_warning) = persisted_state::AppState::load();

        let sort_order = config.gallery.sort_order.unwrap_or_default();

        let (accounts, accounts_warning) = match paths::get_app_data_dir() {
            Some(dir) => match AccountStore::open(&dir) {
                Ok(store) => (store, None),
                Err(_) => (
                    AccountStore::in_memory(),
                    Some("Account data could not be read, sign-ins will not persist"),
                ),
            },
            None => (
                AccountStore::in_memory(),
                Some("No writable data location, sign-ins will not persist"),
            ),
        };

        let mut app = App {
            screen: Screen::Gallery,
            gallery: gallery::State::new(sort_order),
            auth: auth::State::new(app_state.remembered_username.as_deref()),
            accounts,
            theme_mode: config.general.theme_mode,
            app_state,
            config,
            ..Self::default()
        };

        // Show warnings for config/state loading issues
        if let Some(warning) = config_warning {
            if let Ok(notification) = Notification::new(Kind::Warning, warning) {
                app.notifications.show(notification);
            }
        }
        if let Some(warning) = state_warning {
            if let Ok(notification) = Notification::new(Kind::Warning, warning) {
                app.notifications.show(notification);
            }
        }
        if let Some(warning) = accounts_warning {
            if let Ok(notification) = Notification::new(Kind::Warning, warning) {
                app.notifications.show(notification);
            }
        }

        // Startup directory: CLI flag, then config, then the last session
        let startup_dir = flags
            .photos_dir
            .map(PathBuf::from)
            .or_else(|| app.config.gallery.photos_dir.clone())
            .or_else(|| app.app_state.last_photos_directory.clone());

        let task = match startup_dir {
            Some(dir) if dir.is_dir() => update::scan_directory(dir, sort_order),
            _ => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.gallery.library().directory() {
            Some(dir) => {
                let folder = dir
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dir.to_string_lossy().into_owned());
                format!("{folder} - Kameravue")
            }
            None => "Kameravue".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            gallery: &mut self.gallery,
            auth: &mut self.auth,
            profile: &mut self.profile,
            session: &mut self.session,
            accounts: &mut self.accounts,
            config: &mut self.config,
            app_state: &mut self.app_state,
            scroll_memory: &mut self.scroll_memory,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Auth(auth_message) => update::handle_auth_message(&mut ctx, auth_message),
            Message::Profile(profile_message) => {
                update::handle_profile_message(&mut ctx, profile_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Sweep expired toasts
                self.notifications.tick();
                Task::none()
            }
            Message::DirectoryChosen(directory) => {
                update::handle_directory_chosen(&mut ctx, directory)
            }
            Message::LibraryScanned(result) => update::handle_library_scanned(&mut ctx, result),
            Message::PhotoLoaded(result) => update::handle_photo_loaded(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            gallery: &self.gallery,
            auth: &self.auth,
            profile: &self.profile,
            session: self.session.as_ref(),
            app_state: &self.app_state,
            notifications: &self.notifications,
            grid_columns: self.config.grid_columns(),
        })
    }
}
