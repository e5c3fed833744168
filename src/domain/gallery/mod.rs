// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! This module contains core gallery types that are independent of any
//! presentation or infrastructure concerns.

pub mod filter;
pub mod types;

// Re-export commonly used types
pub use filter::{DateRangeFilter, FavoriteFilter, GalleryFilter};
pub use types::{Photo, RawImage};
