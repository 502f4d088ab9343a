use crate::error::ParseError;
use logtally_types::LogRecord;

/// Number of leading single-token fields before the message
const HEADER_FIELDS: usize = 3;

/// Field separator: Unicode whitespace plus the ASCII file, group, record and
/// unit separators (0x1C-0x1F)
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Strip separators from both ends of a line
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(is_separator)
}

/// Parser for `DATE TIME LEVEL MESSAGE...` lines
pub struct LineParser;

impl LineParser {
    /// Parse a raw line into a LogRecord
    ///
    /// The line is trimmed, the first three whitespace-separated tokens
    /// become `date`, `time` and `level`, and whatever follows becomes the
    /// message with its internal spacing untouched.
    pub fn parse(line: &str) -> Result<LogRecord, ParseError> {
        let trimmed = trim_line(line);
        let mut header = [""; HEADER_FIELDS];
        let mut rest = trimmed;

        for slot in header.iter_mut() {
            let Some((field, tail)) = Self::next_field(rest) else {
                return Err(Self::malformed(trimmed));
            };
            *slot = field;
            rest = tail;
        }

        let [date, time, level] = header;
        Ok(LogRecord::new(date, time, level, rest))
    }

    /// Split off one token, returning it with the remainder left-trimmed
    fn next_field(s: &str) -> Option<(&str, &str)> {
        let (field, tail) = s.split_once(is_separator)?;
        let tail = tail.trim_start_matches(is_separator);
        // A trimmed line never ends in a separator, so an empty tail means
        // there was nothing after the separator.
        if tail.is_empty() {
            return None;
        }
        Some((field, tail))
    }

    fn malformed(trimmed: &str) -> ParseError {
        ParseError::Malformed {
            fields: trimmed
                .split(is_separator)
                .filter(|token| !token.is_empty())
                .count(),
        }
    }
}
