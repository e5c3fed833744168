// SPDX-License-Identifier: MPL-2.0
//! `kameravue` is a local-first photo gallery built with the Iced GUI framework.
//!
//! It scans a folder of photos into a filterable, sortable grid with
//! per-device favorites, local accounts, and toast notifications for
//! user feedback.

#![doc(html_root_url = "https://docs.rs/kameravue/0.1.0")]

pub mod accounts;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod library;
pub mod media;
pub mod ui;
