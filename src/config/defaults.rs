// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Grid layout bounds
//! - **Scroll memory**: Scroll restoration entry lifetime

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of thumbnail columns in the gallery grid.
pub const DEFAULT_GRID_COLUMNS: u16 = 4;

/// Minimum number of thumbnail columns.
pub const MIN_GRID_COLUMNS: u16 = 2;

/// Maximum number of thumbnail columns.
pub const MAX_GRID_COLUMNS: u16 = 8;

// ==========================================================================
// Scroll Memory Defaults
// ==========================================================================

/// How long a remembered scroll offset stays valid (in seconds).
pub const DEFAULT_SCROLL_MEMORY_TTL_SECS: u64 = 30 * 60;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Grid validation
    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);

    // Scroll memory validation
    assert!(DEFAULT_SCROLL_MEMORY_TTL_SECS > 0);
};
