// SPDX-License-Identifier: MPL-2.0
//! UI state helpers shared across screens.

pub mod scroll_memory;

pub use scroll_memory::ScrollMemory;
