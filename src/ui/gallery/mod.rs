// SPDX-License-Identifier: MPL-2.0
//! Gallery screen showing the photo grid and the single-photo detail view.
//!
//! The grid is rendered inside a scrollable whose offset is reported to the
//! parent application, so scroll position can be restored when the user
//! comes back from the detail view or from another screen.

use crate::config::SortOrder;
use crate::domain::gallery::{DateRangeFilter, GalleryFilter, Photo};
use crate::error::Error;
use crate::library::PhotoLibrary;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::{Local, NaiveDate, TimeZone};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{
    button, checkbox, image as image_widget, pick_list, scrollable, text_input, Column, Container,
    Id, Row, Space, Text,
};
use iced::{alignment, Element, Length};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::SystemTime;

/// Identifier of the gallery grid scrollable, used for scroll restoration.
pub const SCROLLABLE_ID: &str = "gallery-grid";

/// A photo opened in the detail view, with its decode state.
#[derive(Debug, Clone)]
struct Detail {
    photo: Photo,
    image: Option<ImageData>,
    error: Option<String>,
}

/// Gallery screen state.
#[derive(Debug, Clone, Default)]
pub struct State {
    library: PhotoLibrary,
    filter: GalleryFilter,
    sort_order: SortOrder,
    detail: Option<Detail>,
    filter_panel_open: bool,
    /// Raw text of the date-range inputs; parsed into the filter on change.
    date_from: String,
    date_to: String,
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native directory picker.
    ChooseDirectory,
    SortOrderSelected(SortOrder),
    ToggleFilterPanel,
    QueryChanged(String),
    FavoritesOnlyToggled(bool),
    DateFromChanged(String),
    DateToChanged(String),
    ClearFilters,
    ToggleFavorite(PathBuf),
    OpenPhoto(PathBuf),
    CloseDetail,
    /// Decode result for the photo opened in the detail view.
    PhotoLoaded(Result<ImageData, Error>),
    Scrolled(AbsoluteOffset),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user asked for the native directory picker.
    PickDirectory,
    /// The sort order changed and should be persisted.
    SortChanged(SortOrder),
    /// A photo's favorite flag should be flipped and persisted.
    ToggleFavorite(PathBuf),
    /// A photo was opened and its full image should be decoded.
    LoadPhoto(PathBuf),
    /// The detail view was closed; the grid scroll position can be restored.
    DetailClosed,
    /// The grid scrolled to a new offset worth remembering.
    Scrolled(AbsoluteOffset),
}

impl State {
    #[must_use]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..Self::default()
        }
    }

    /// Replaces the photo library, dropping any open detail view.
    pub fn set_library(&mut self, library: PhotoLibrary) {
        self.library = library;
        self.detail = None;
    }

    #[must_use]
    pub fn library(&self) -> &PhotoLibrary {
        &self.library
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Key under which this gallery's scroll offset is remembered.
    /// One entry per scanned directory, so switching directories does not
    /// inherit a stale offset.
    #[must_use]
    pub fn scroll_key(&self) -> Option<String> {
        self.library
            .directory()
            .map(|dir| dir.to_string_lossy().into_owned())
    }

    /// Whether the detail view is currently open.
    #[must_use]
    pub fn detail_open(&self) -> bool {
        self.detail.is_some()
    }

    /// Stores the decode result for the photo in the detail view.
    fn set_detail_image(&mut self, result: Result<ImageData, Error>) {
        if let Some(detail) = self.detail.as_mut() {
            match result {
                Ok(image) => detail.image = Some(image),
                Err(error) => detail.error = Some(error.to_string()),
            }
        }
    }

    /// Rebuilds the date-range filter from the raw input text. Text that
    /// does not parse as a date leaves that bound open.
    fn sync_date_range(&mut self) {
        let start = parse_day(&self.date_from).and_then(start_of_day);
        let end = parse_day(&self.date_to).and_then(end_of_day);

        self.filter.date_range = if start.is_none() && end.is_none() {
            None
        } else {
            Some(DateRangeFilter { start, end })
        };
    }

    /// Photos that pass the active filters, in library order.
    fn visible_photos<'a>(&'a self, favorites: &BTreeSet<PathBuf>) -> Vec<&'a Photo> {
        self.library
            .photos()
            .iter()
            .filter(|photo| {
                self.filter.matches(
                    photo.title(),
                    favorites.contains(photo.path()),
                    photo.modified(),
                )
            })
            .collect()
    }

    /// Processes a message and returns the event for the parent to act on.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ChooseDirectory => Event::PickDirectory,
            Message::SortOrderSelected(order) => {
                self.sort_order = order;
                self.library.sort(order);
                Event::SortChanged(order)
            }
            Message::ToggleFilterPanel => {
                self.filter_panel_open = !self.filter_panel_open;
                Event::None
            }
            Message::QueryChanged(query) => {
                self.filter.title_query = query;
                Event::None
            }
            Message::FavoritesOnlyToggled(enabled) => {
                self.filter.favorite = if enabled {
                    crate::domain::gallery::FavoriteFilter::FavoritesOnly
                } else {
                    crate::domain::gallery::FavoriteFilter::All
                };
                Event::None
            }
            Message::DateFromChanged(text) => {
                self.date_from = text;
                self.sync_date_range();
                Event::None
            }
            Message::DateToChanged(text) => {
                self.date_to = text;
                self.sync_date_range();
                Event::None
            }
            Message::ClearFilters => {
                self.filter.clear();
                self.date_from.clear();
                self.date_to.clear();
                Event::None
            }
            Message::ToggleFavorite(path) => Event::ToggleFavorite(path),
            Message::OpenPhoto(path) => {
                if let Some(photo) = self.library.find(&path) {
                    self.detail = Some(Detail {
                        photo: photo.clone(),
                        image: None,
                        error: None,
                    });
                    Event::LoadPhoto(path)
                } else {
                    Event::None
                }
            }
            Message::CloseDetail => {
                self.detail = None;
                Event::DetailClosed
            }
            Message::PhotoLoaded(result) => {
                self.set_detail_image(result);
                Event::None
            }
            Message::Scrolled(offset) => Event::Scrolled(offset),
        }
    }

    /// Renders the gallery screen.
    pub fn view<'a>(
        &'a self,
        favorites: &BTreeSet<PathBuf>,
        grid_columns: u16,
    ) -> Element<'a, Message> {
        if let Some(detail) = &self.detail {
            return view_detail(detail, favorites.contains(detail.photo.path()));
        }

        let toolbar = self.view_toolbar();

        let mut content = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .push(toolbar);

        if self.filter_panel_open {
            content = content.push(self.view_filter_panel());
        }

        let body: Element<'_, Message> = if self.library.directory().is_none() {
            empty_state("No photos yet", "Choose a folder to get started")
        } else {
            let visible = self.visible_photos(favorites);
            if visible.is_empty() {
                if self.filter.is_active() {
                    empty_state("Nothing matches", "Try clearing the filters")
                } else {
                    empty_state("This folder has no photos", "Choose another folder")
                }
            } else {
                view_grid(&visible, favorites, grid_columns)
            }
        };

        content.push(body).into()
    }

    fn view_toolbar(&self) -> Element<'_, Message> {
        let choose_button = button(Text::new("Choose folder"))
            .on_press(Message::ChooseDirectory)
            .style(styles::button::primary);

        let sort_picker = pick_list(
            SortOrder::ALL,
            Some(self.sort_order),
            Message::SortOrderSelected,
        );

        let search = text_input("Search by title", &self.filter.title_query)
            .on_input(Message::QueryChanged)
            .width(Length::Fixed(sizing::SEARCH_WIDTH));

        let filter_label = if self.filter.is_active() {
            format!("Filters ({})", self.filter.active_count())
        } else {
            "Filters".to_string()
        };
        let filter_button = button(Text::new(filter_label))
            .on_press(Message::ToggleFilterPanel)
            .style(styles::button::secondary);

        let count = Text::new(format!("{} photos", self.library.len()))
            .size(typography::BODY_SM);

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(choose_button)
            .push(sort_picker)
            .push(search)
            .push(filter_button)
            .push(Space::new().width(Length::Fill))
            .push(count)
            .into()
    }

    fn view_filter_panel(&self) -> Element<'_, Message> {
        let favorites_only = checkbox(self.filter.favorite.is_active())
            .label("Favorites only")
            .on_toggle(Message::FavoritesOnlyToggled);

        let from_input = text_input("From (YYYY-MM-DD)", &self.date_from)
            .on_input(Message::DateFromChanged)
            .width(Length::Fixed(sizing::DATE_WIDTH));

        let to_input = text_input("To (YYYY-MM-DD)", &self.date_to)
            .on_input(Message::DateToChanged)
            .width(Length::Fixed(sizing::DATE_WIDTH));

        let clear_button = button(Text::new("Clear"))
            .on_press(Message::ClearFilters)
            .style(styles::button::link);

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(favorites_only)
            .push(from_input)
            .push(to_input)
            .push(clear_button);

        Container::new(row)
            .padding(spacing::SM)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into()
    }
}

/// Renders the thumbnail grid inside the tracked scrollable.
fn view_grid<'a>(
    photos: &[&'a Photo],
    favorites: &BTreeSet<PathBuf>,
    grid_columns: u16,
) -> Element<'a, Message> {
    let columns = grid_columns.max(1) as usize;
    let mut grid = Column::new().spacing(spacing::SM);

    for chunk in photos.chunks(columns) {
        let mut row = Row::new().spacing(spacing::SM);
        for photo in chunk {
            row = row.push(view_thumbnail(photo, favorites.contains(photo.path())));
        }
        grid = grid.push(row);
    }

    scrollable(Container::new(grid).width(Length::Fill).padding(spacing::XS))
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset()))
        .height(Length::Fill)
        .into()
}

/// Renders a single thumbnail card with title and favorite toggle.
fn view_thumbnail(photo: &Photo, is_favorite: bool) -> Element<'_, Message> {
    let thumbnail = image_widget(image_widget::Handle::from_path(photo.path()))
        .width(Length::Fixed(sizing::THUMBNAIL_SIZE))
        .height(Length::Fixed(sizing::THUMBNAIL_SIZE));

    let open_button = button(thumbnail)
        .on_press(Message::OpenPhoto(photo.path().to_path_buf()))
        .padding(0.0);

    let glyph = if is_favorite { "\u{2605}" } else { "\u{2606}" };
    let favorite_button = button(Text::new(glyph))
        .on_press(Message::ToggleFavorite(photo.path().to_path_buf()))
        .padding(spacing::XXS)
        .style(styles::button::link);

    let caption = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(photo.title())
                .size(typography::BODY_SM)
                .width(Length::Fill),
        )
        .push(favorite_button);

    let card = Column::new()
        .spacing(spacing::XXS)
        .push(open_button)
        .push(caption);

    let style = if is_favorite {
        styles::container::card_selected
    } else {
        styles::container::card
    };

    Container::new(card).padding(spacing::XS).style(style).into()
}

/// Renders the single-photo detail view.
fn view_detail(detail: &Detail, is_favorite: bool) -> Element<'_, Message> {
    let back_button = button(Text::new("\u{2190} Back"))
        .on_press(Message::CloseDetail)
        .style(styles::button::secondary);

    let glyph = if is_favorite { "\u{2605}" } else { "\u{2606}" };
    let favorite_button = button(Text::new(glyph))
        .on_press(Message::ToggleFavorite(detail.photo.path().to_path_buf()))
        .style(styles::button::link);

    let modified: chrono::DateTime<chrono::Local> = detail.photo.modified().into();
    let modified_label = Text::new(modified.format("%Y-%m-%d %H:%M").to_string())
        .size(typography::CAPTION);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(back_button)
        .push(Text::new(detail.photo.title()).size(typography::TITLE_SM))
        .push(favorite_button)
        .push(Space::new().width(Length::Fill))
        .push(modified_label);

    let body: Element<'_, Message> = if let Some(error) = &detail.error {
        Text::new(error.clone()).size(typography::BODY).into()
    } else if let Some(image) = &detail.image {
        image_widget(image.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        Text::new("Loading\u{2026}").size(typography::BODY).into()
    };

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(header)
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .into()
}

fn parse_day(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Local midnight at the start of `date`.
fn start_of_day(date: NaiveDate) -> Option<SystemTime> {
    let datetime = Local
        .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
        .earliest()?;
    Some(SystemTime::from(datetime))
}

/// Last second of `date`, so the upper bound stays inclusive.
fn end_of_day(date: NaiveDate) -> Option<SystemTime> {
    let datetime = Local
        .from_local_datetime(&date.and_hms_opt(23, 59, 59)?)
        .latest()?;
    Some(SystemTime::from(datetime))
}

fn empty_state<'a>(title: &'a str, hint: &'a str) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(Text::new(hint).size(typography::BODY_SM));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
