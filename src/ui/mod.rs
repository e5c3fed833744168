// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Photo grid with filters, sorting, and the detail view
//! - [`auth`] - Sign-in and registration forms
//! - [`profile`] - Account details and sign-out flow
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (scroll memory)
//! - [`components`] - Reusable UI components (confirmation dialog)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Top navigation bar
//! - [`notifications`] - Toast notification system for user feedback

pub mod auth;
pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod navbar;
pub mod notifications;
pub mod profile;
pub mod state;
pub mod styles;
pub mod theming;
