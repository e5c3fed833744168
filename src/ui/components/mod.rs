// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared between screens.

pub mod confirm_dialog;

pub use confirm_dialog::ConfirmDialog;
