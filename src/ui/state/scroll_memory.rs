// SPDX-License-Identifier: MPL-2.0
//! Scroll position memory.
//!
//! Remembers the last scroll offset for each gallery view so returning
//! from the detail screen lands where the user left off. Entries expire
//! after a TTL and the whole map is session-scoped; nothing here is
//! persisted across restarts.

use crate::config::defaults::DEFAULT_SCROLL_MEMORY_TTL_SECS;
use iced::widget::scrollable::AbsoluteOffset;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a remembered offset stays valid.
pub const DEFAULT_TTL: Duration = Duration::from_secs(DEFAULT_SCROLL_MEMORY_TTL_SECS);

#[derive(Debug, Clone, Copy)]
struct Entry {
    offset: AbsoluteOffset,
    stored_at: Instant,
}

/// Session-scoped cache of scroll offsets, keyed per view.
#[derive(Debug)]
pub struct ScrollMemory {
    entries: HashMap<String, Entry>,
    ttl: Duration,
}

impl Default for ScrollMemory {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ScrollMemory {
    /// Creates a memory whose entries expire after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Stores the offset for `key`, replacing any previous entry.
    pub fn remember(&mut self, key: impl Into<String>, offset: AbsoluteOffset) {
        self.remember_at(key, offset, Instant::now());
    }

    /// Stores the offset for `key` with an explicit timestamp.
    pub fn remember_at(&mut self, key: impl Into<String>, offset: AbsoluteOffset, now: Instant) {
        self.entries.insert(
            key.into(),
            Entry {
                offset,
                stored_at: now,
            },
        );
    }

    /// Returns the remembered offset for `key`, if still valid.
    pub fn recall(&mut self, key: &str) -> Option<AbsoluteOffset> {
        self.recall_at(key, Instant::now())
    }

    /// Returns the remembered offset for `key` at an explicit instant.
    ///
    /// An expired entry is dropped and reported as missing.
    pub fn recall_at(&mut self, key: &str, now: Instant) -> Option<AbsoluteOffset> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.stored_at) > self.ttl {
            self.entries.remove(key);
            return None;
        }
        Some(entry.offset)
    }

    /// Drops the entry for `key`, if any.
    pub fn forget(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drops every remembered offset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of remembered entries, including not-yet-swept
    /// expired ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no offsets are remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset(x: f32, y: f32) -> AbsoluteOffset {
        AbsoluteOffset { x, y }
    }

    #[test]
    fn recall_returns_remembered_offset() {
        let mut memory = ScrollMemory::default();
        let now = Instant::now();

        memory.remember_at("gallery:/pics", offset(0.0, 420.0), now);
        let recalled = memory.recall_at("gallery:/pics", now);

        assert_eq!(recalled.map(|o| o.y), Some(420.0));
    }

    #[test]
    fn recall_of_unknown_key_is_none() {
        let mut memory = ScrollMemory::default();
        assert!(memory.recall_at("gallery:/nowhere", Instant::now()).is_none());
    }

    #[test]
    fn remember_overwrites_previous_entry() {
        let mut memory = ScrollMemory::default();
        let now = Instant::now();

        memory.remember_at("k", offset(0.0, 100.0), now);
        memory.remember_at("k", offset(0.0, 250.0), now);

        assert_eq!(memory.recall_at("k", now).map(|o| o.y), Some(250.0));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn expired_entry_is_dropped_on_recall() {
        let ttl = Duration::from_secs(60);
        let mut memory = ScrollMemory::new(ttl);
        let stored = Instant::now();

        memory.remember_at("k", offset(0.0, 50.0), stored);

        // Just inside the TTL
        assert!(memory.recall_at("k", stored + ttl).is_some());

        memory.remember_at("k", offset(0.0, 50.0), stored);
        assert!(memory.recall_at("k", stored + ttl + Duration::from_secs(1)).is_none());
        assert!(memory.is_empty());
    }

    #[test]
    fn forget_and_clear_drop_entries() {
        let mut memory = ScrollMemory::default();
        let now = Instant::now();

        memory.remember_at("a", offset(0.0, 1.0), now);
        memory.remember_at("b", offset(0.0, 2.0), now);

        memory.forget("a");
        assert!(memory.recall_at("a", now).is_none());
        assert_eq!(memory.len(), 1);

        memory.clear();
        assert!(memory.is_empty());
    }

    #[test]
    fn keys_are_independent() {
        let mut memory = ScrollMemory::default();
        let now = Instant::now();

        memory.remember_at("gallery:/a", offset(0.0, 10.0), now);
        memory.remember_at("gallery:/b", offset(0.0, 20.0), now);

        assert_eq!(memory.recall_at("gallery:/a", now).map(|o| o.y), Some(10.0));
        assert_eq!(memory.recall_at("gallery:/b", now).map(|o| o.y), Some(20.0));
    }
}
