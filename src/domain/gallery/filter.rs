// SPDX-License-Identifier: MPL-2.0
//! Gallery filtering types for the domain layer.
//!
//! This module contains pure filter types without I/O operations.
//! Favorite membership and file timestamps are supplied by the caller,
//! so every check here stays synchronous and testable.
//!
//! # Available Filters
//!
//! - [`FavoriteFilter`]: Filter by favorite status
//! - [`DateRangeFilter`]: Filter by modification date range
//! - Title query: case-insensitive substring match on the photo title
//! - [`GalleryFilter`]: Combined filter with AND logic

use std::time::SystemTime;

// =============================================================================
// Favorite Filter
// =============================================================================

/// Filter by favorite status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteFilter {
    /// Show all photos.
    #[default]
    All,
    /// Show only photos marked as favorites.
    FavoritesOnly,
}

impl FavoriteFilter {
    /// Returns `true` if this filter matches the given favorite status.
    ///
    /// This is a pure domain check without I/O.
    #[must_use]
    pub fn matches_favorite(&self, is_favorite: bool) -> bool {
        match self {
            Self::All => true,
            Self::FavoritesOnly => is_favorite,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Date Range Filter
// =============================================================================

/// Filter by date range.
///
/// Filters photos based on their modification date.
/// Both `start` and `end` bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateRangeFilter {
    /// Start of the date range (inclusive). `None` means no lower bound.
    pub start: Option<SystemTime>,
    /// End of the date range (inclusive). `None` means no upper bound.
    pub end: Option<SystemTime>,
}

impl DateRangeFilter {
    /// Returns `true` if the given timestamp matches this date range filter.
    #[must_use]
    pub fn matches_time(&self, file_time: SystemTime) -> bool {
        if let Some(start) = self.start {
            if file_time < start {
                return false;
            }
        }

        if let Some(end) = self.end {
            if file_time > end {
                return false;
            }
        }

        true
    }

    /// Returns `true` if this filter has any active bounds.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

// =============================================================================
// Composite Gallery Filter
// =============================================================================

/// Combined gallery filter with AND logic.
///
/// All active filters must match for a photo to be included.
/// When no filters are active, all photos match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryFilter {
    /// Filter by favorite status.
    pub favorite: FavoriteFilter,
    /// Filter by date range. `None` means no date filtering.
    pub date_range: Option<DateRangeFilter>,
    /// Case-insensitive substring match on the photo title.
    /// Whitespace-only queries count as empty.
    pub title_query: String,
}

impl GalleryFilter {
    /// Creates a new filter with no active criteria (matches all photos).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a photo with the given attributes passes all
    /// active criteria.
    #[must_use]
    pub fn matches(&self, title: &str, is_favorite: bool, modified: SystemTime) -> bool {
        if !self.favorite.matches_favorite(is_favorite) {
            return false;
        }
        if !self.matches_title(title) {
            return false;
        }
        if let Some(range) = &self.date_range {
            if !range.matches_time(modified) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if the title contains the query, ignoring case.
    /// An empty or whitespace-only query matches every title.
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        let query = self.title_query.trim();
        if query.is_empty() {
            return true;
        }
        title.to_lowercase().contains(&query.to_lowercase())
    }

    /// Returns `true` if the title query is non-empty.
    #[must_use]
    pub fn has_title_query(&self) -> bool {
        !self.title_query.trim().is_empty()
    }

    /// Returns `true` if any filter is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.favorite.is_active()
            || self.has_title_query()
            || self
                .date_range
                .as_ref()
                .is_some_and(DateRangeFilter::is_active)
    }

    /// Returns the number of active filter criteria.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.favorite.is_active() {
            count += 1;
        }
        if self.has_title_query() {
            count += 1;
        }
        if self
            .date_range
            .as_ref()
            .is_some_and(DateRangeFilter::is_active)
        {
            count += 1;
        }
        count
    }

    /// Resets all filters to their default (inactive) state.
    pub fn clear(&mut self) {
        self.favorite = FavoriteFilter::default();
        self.date_range = None;
        self.title_query.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // -------------------------------------------------------------------------
    // FavoriteFilter tests
    // -------------------------------------------------------------------------

    #[test]
    fn favorite_filter_all_matches_everything() {
        let filter = FavoriteFilter::All;
        assert!(filter.matches_favorite(true));
        assert!(filter.matches_favorite(false));
        assert!(!filter.is_active());
    }

    #[test]
    fn favorite_filter_favorites_only() {
        let filter = FavoriteFilter::FavoritesOnly;
        assert!(filter.matches_favorite(true));
        assert!(!filter.matches_favorite(false));
        assert!(filter.is_active());
    }

    // -------------------------------------------------------------------------
    // DateRangeFilter tests
    // -------------------------------------------------------------------------

    #[test]
    fn date_range_filter_no_bounds_matches_all() {
        let filter = DateRangeFilter::default();
        let now = SystemTime::now();
        assert!(filter.matches_time(now));
        assert!(!filter.is_active());
    }

    #[test]
    fn date_range_filter_with_start_bound() {
        let now = SystemTime::now();

        let filter = DateRangeFilter {
            start: Some(SystemTime::UNIX_EPOCH),
            end: None,
        };

        assert!(filter.matches_time(now));
        assert!(filter.is_active());

        let filter_future_start = DateRangeFilter {
            start: Some(now + Duration::from_secs(86400)),
            end: None,
        };
        assert!(!filter_future_start.matches_time(SystemTime::UNIX_EPOCH));
    }

    #[test]
    fn date_range_filter_with_end_bound() {
        let now = SystemTime::now();
        let future = now + Duration::from_secs(86400);

        let filter = DateRangeFilter {
            start: None,
            end: Some(future),
        };

        assert!(filter.matches_time(now));

        let far_future = now + Duration::from_secs(86400 * 2);
        assert!(!filter.matches_time(far_future));
    }

    #[test]
    fn date_range_filter_with_both_bounds() {
        let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1000);
        let end = SystemTime::UNIX_EPOCH + Duration::from_secs(2000);
        let middle = SystemTime::UNIX_EPOCH + Duration::from_secs(1500);

        let filter = DateRangeFilter {
            start: Some(start),
            end: Some(end),
        };

        assert!(filter.matches_time(middle));
        assert!(filter.matches_time(start)); // Inclusive
        assert!(filter.matches_time(end)); // Inclusive
        assert!(!filter.matches_time(SystemTime::UNIX_EPOCH));
        assert!(!filter.matches_time(SystemTime::UNIX_EPOCH + Duration::from_secs(3000)));
    }

    // -------------------------------------------------------------------------
    // GalleryFilter (composite) tests
    // -------------------------------------------------------------------------

    #[test]
    fn gallery_filter_default_is_inactive() {
        let filter = GalleryFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.active_count(), 0);
        assert!(filter.matches("sunset", false, SystemTime::now()));
    }

    #[test]
    fn gallery_filter_with_favorite_only() {
        let filter = GalleryFilter {
            favorite: FavoriteFilter::FavoritesOnly,
            ..GalleryFilter::default()
        };
        assert!(filter.is_active());
        assert_eq!(filter.active_count(), 1);
        assert!(filter.matches("sunset", true, SystemTime::now()));
        assert!(!filter.matches("sunset", false, SystemTime::now()));
    }

    #[test]
    fn title_query_matches_case_insensitively() {
        let filter = GalleryFilter {
            title_query: "Sun".to_string(),
            ..GalleryFilter::default()
        };
        assert!(filter.is_active());
        assert_eq!(filter.active_count(), 1);
        assert!(filter.matches_title("sunset"));
        assert!(filter.matches_title("RISING SUN"));
        assert!(!filter.matches_title("moonrise"));
    }

    #[test]
    fn whitespace_only_query_is_inactive() {
        let filter = GalleryFilter {
            title_query: "   ".to_string(),
            ..GalleryFilter::default()
        };
        assert!(!filter.is_active());
        assert!(filter.matches_title("anything"));
    }

    #[test]
    fn gallery_filter_combines_all_criteria() {
        let filter = GalleryFilter {
            favorite: FavoriteFilter::FavoritesOnly,
            date_range: Some(DateRangeFilter {
                start: Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1000)),
                end: None,
            }),
            title_query: "sun".to_string(),
        };

        assert!(filter.is_active());
        assert_eq!(filter.active_count(), 3);

        let inside = SystemTime::UNIX_EPOCH + Duration::from_secs(2000);
        assert!(filter.matches("sunset", true, inside));
        assert!(!filter.matches("sunset", false, inside));
        assert!(!filter.matches("moonrise", true, inside));
        assert!(!filter.matches("sunset", true, SystemTime::UNIX_EPOCH));
    }

    #[test]
    fn gallery_filter_clear() {
        let mut filter = GalleryFilter {
            favorite: FavoriteFilter::FavoritesOnly,
            date_range: Some(DateRangeFilter {
                start: Some(SystemTime::UNIX_EPOCH),
                end: None,
            }),
            title_query: "sun".to_string(),
        };

        assert!(filter.is_active());
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.active_count(), 0);
    }
}
