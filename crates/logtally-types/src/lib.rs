//! Shared types for logtally
//!
//! This crate contains the data model passed between the log core and the
//! command-line front end.

use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// Levels
// ============================================================================

/// Levels that always appear in a [`LevelCounts`], in display order
pub const CANONICAL_LEVELS: [&str; 4] = ["INFO", "DEBUG", "ERROR", "WARNING"];

/// Normalize a level token for counting and comparison
pub fn normalize_level(level: &str) -> String {
    level.to_uppercase()
}

/// Check whether a normalized level is one of the canonical four
pub fn is_canonical(level: &str) -> bool {
    CANONICAL_LEVELS.contains(&level)
}

// ============================================================================
// Log Types
// ============================================================================

/// A single well-formed log line: `DATE TIME LEVEL MESSAGE...`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// First field, kept verbatim
    pub date: String,

    /// Second field, kept verbatim
    pub time: String,

    /// Third field, stored as read (compare via [`LogRecord::normalized_level`])
    pub level: String,

    /// Rest of the line with internal whitespace preserved
    pub message: String,
}

impl LogRecord {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            level: level.into(),
            message: message.into(),
        }
    }

    /// Upper-cased level used as the counting key
    pub fn normalized_level(&self) -> String {
        normalize_level(&self.level)
    }
}

/// Record count per normalized level
///
/// The canonical levels are present from construction, so a lookup of any of
/// them never misses. Other levels only appear once they have been counted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelCounts {
    counts: BTreeMap<String, usize>,
}

impl Default for LevelCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelCounts {
    /// All canonical levels at zero
    pub fn new() -> Self {
        let counts = CANONICAL_LEVELS
            .iter()
            .map(|level| (level.to_string(), 0))
            .collect();
        Self { counts }
    }

    /// Count one occurrence of `level` (normalized before insertion)
    pub fn record(&mut self, level: &str) {
        *self.counts.entry(normalize_level(level)).or_insert(0) += 1;
    }

    /// Count for a level, case-insensitive; 0 if never seen
    pub fn get(&self, level: &str) -> usize {
        self.counts
            .get(&normalize_level(level))
            .copied()
            .unwrap_or(0)
    }

    /// Sum over every level
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Canonical levels in display order
    pub fn canonical(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        CANONICAL_LEVELS
            .iter()
            .map(|level| (*level, self.get(level)))
    }

    /// Non-canonical levels, sorted by name
    pub fn extra(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .filter(|(level, _)| !is_canonical(level))
            .map(|(level, count)| (level.as_str(), *count))
    }

    /// Every level, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(level, count)| (level.as_str(), *count))
    }
}
