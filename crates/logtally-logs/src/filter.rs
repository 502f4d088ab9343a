use logtally_types::{LogRecord, normalize_level};

/// Selects records whose level equals a query, ignoring case
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelFilter {
    /// Normalized query
    level: String,
}

impl LevelFilter {
    pub fn new(level: &str) -> Self {
        Self {
            level: normalize_level(level),
        }
    }

    /// The query, upper-cased
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Check if a record matches this filter
    pub fn matches(&self, record: &LogRecord) -> bool {
        record.normalized_level() == self.level
    }

    /// Matching records in their original order
    pub fn apply(&self, records: &[LogRecord]) -> Vec<LogRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// Records whose level matches `level` case-insensitively, in order
///
/// No match is not an error; the result is simply empty.
pub fn by_level(records: &[LogRecord], level: &str) -> Vec<LogRecord> {
    LevelFilter::new(level).apply(records)
}
