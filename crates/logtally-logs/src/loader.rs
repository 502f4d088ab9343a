use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::parser::{LineParser, trim_line};
use logtally_types::LogRecord;

/// Placeholder path reported by [`load_from_reader`] errors
const READER_PATH: &str = "<input>";

/// Read a log file and parse every line, in file order
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Blank lines are skipped and
/// malformed lines are dropped without error.
/// The file is closed before this returns, on success and failure alike.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<LogRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
    read_records(BufReader::new(file), path)
}

/// Same as [`load`] for an already-open source
pub fn load_from_reader(reader: impl BufRead) -> Result<Vec<LogRecord>, LoadError> {
    read_records(reader, Path::new(READER_PATH))
}

fn read_records(mut reader: impl BufRead, path: &Path) -> Result<Vec<LogRecord>, LoadError> {
    let mut records = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0usize;
    let mut skipped = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        if read == 0 {
            break;
        }

        for raw in split_lines(&buf) {
            line_number += 1;

            let line = std::str::from_utf8(raw).map_err(|_| LoadError::Encoding {
                path: path.to_path_buf(),
                line: line_number,
            })?;

            if trim_line(line).is_empty() {
                continue;
            }

            match LineParser::parse(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    debug!(line = line_number, error = %e, "skipping malformed log line");
                }
            }
        }
    }

    info!(
        path = %path.display(),
        records = records.len(),
        skipped,
        "loaded log file"
    );

    Ok(records)
}

/// Break one `\n`-terminated chunk into lines, honoring lone `\r` breaks
///
/// The chunk's own `\n` or `\r\n` terminator is removed first so it does not
/// produce an extra empty line.
fn split_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let body = body.strip_suffix(b"\r").unwrap_or(body);
    body.split(|&b| b == b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadErrorKind;
    use std::io::{Cursor, Write};
    use std::path::PathBuf;

    #[test]
    fn test_load_from_reader_skips_blank_and_malformed() {
        let input = "\n2024-01-01 10:00:00 INFO up\n   \nbad line\nx y z\n2024-01-01 10:00:01 DEBUG tick tock\n";
        let records = load_from_reader(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "up");
        assert_eq!(records[1].level, "DEBUG");
        assert_eq!(records[1].message, "tick tock");
    }

    #[test]
    fn test_load_preserves_file_order() {
        let input = "d t ERROR first\nd t INFO second\nd t error third\n";
        let records = load_from_reader(Cursor::new(input)).unwrap();
        let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_load_last_line_without_newline() {
        let records = load_from_reader(Cursor::new("d t INFO no newline")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "no newline");
    }

    #[test]
    fn test_load_cr_only_line_endings() {
        let input = "2024-01-01 10:00:00 INFO a\r2024-01-01 10:00:01 ERROR b\r";
        let records = load_from_reader(Cursor::new(input)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, "INFO");
        assert_eq!(records[0].message, "a");
        assert_eq!(records[1].level, "ERROR");
        assert_eq!(records[1].message, "b");
    }

    #[test]
    fn test_load_mixed_line_endings() {
        let input = "d t INFO one\r\nd t DEBUG two\rd t ERROR three\n\r\rbad\r\nd t WARNING four";
        let records = load_from_reader(Cursor::new(input)).unwrap();
        let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_encoding_line_counts_cr_breaks() {
        let err = load_from_reader(Cursor::new(&b"d t INFO a\rd t INFO b\r\xff\n"[..])).unwrap_err();
        match err {
            LoadError::Encoding { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_empty_input() {
        let records = load_from_reader(Cursor::new("")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("nope.log")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.kind(), LoadErrorKind::FileAccess);
    }

    #[test]
    fn test_load_directory_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::FileAccess);
    }

    #[test]
    fn test_load_invalid_utf8_reports_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"d t INFO fine\nd t ERROR \xff\xfe broken\n")
            .unwrap();

        let err = load(file.path()).unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Encoding);
        match err {
            LoadError::Encoding { line, path } => {
                assert_eq!(line, 2);
                assert_eq!(path, file.path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_reader_error_path() {
        let err = load_from_reader(Cursor::new(&b"\xc3\x28 x y z\n"[..])).unwrap_err();
        assert_eq!(err.path(), &PathBuf::from(READER_PATH));
    }
}
