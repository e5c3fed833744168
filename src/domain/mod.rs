// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`account`]: Account value objects ([`Username`](account::Username),
//!   [`Email`](account::Email))
//! - [`gallery`]: Gallery types ([`Photo`](gallery::Photo), [`RawImage`](gallery::RawImage),
//!   [`GalleryFilter`](gallery::GalleryFilter))

pub mod account;
pub mod gallery;
