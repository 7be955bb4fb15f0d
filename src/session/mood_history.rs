// Bounded mood history, newest first

use std::collections::VecDeque;

use super::message::{MonotonicClock, MoodEntry};

/// Entries kept by default
pub const DEFAULT_MOOD_HISTORY_LIMIT: usize = 7;

/// Most recent mood entries. Index 0 is the newest; the oldest entry is
/// dropped once the limit is exceeded.
#[derive(Debug, Clone)]
pub struct MoodHistory {
    entries: VecDeque<MoodEntry>,
    limit: usize,
    clock: MonotonicClock,
}

impl Default for MoodHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MOOD_HISTORY_LIMIT)
    }

    /// A limit of zero is raised to one
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit + 1),
            limit,
            clock: MonotonicClock::default(),
        }
    }

    /// Record an entry, then truncate to the limit
    pub fn append_entry(&mut self, label: impl Into<String>, emoji: impl Into<String>) -> &MoodEntry {
        let entry = MoodEntry::new(label.into(), emoji.into(), self.clock.now());
        self.entries.push_front(entry);
        self.entries.truncate(self.limit);
        &self.entries[0]
    }

    /// Newest entry
    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.front()
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &MoodEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
