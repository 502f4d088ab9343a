use logtally_types::{LevelCounts, LogRecord};

/// Count records per upper-cased level
///
/// The canonical levels are always present in the result, at 0 when no
/// record carried them.
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for record in records {
        counts.record(&record.level);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use logtally_types::CANONICAL_LEVELS;
    use proptest::prelude::*;

    fn record(level: &str) -> LogRecord {
        LogRecord::new("2024-01-01", "10:00:00", level, "msg")
    }

    #[test]
    fn test_empty_input_has_canonical_zeros() {
        let counts = count_by_level(&[]);
        let canonical: Vec<_> = counts.canonical().collect();
        assert_eq!(
            canonical,
            vec![("INFO", 0), ("DEBUG", 0), ("ERROR", 0), ("WARNING", 0)]
        );
        assert_eq!(counts.iter().count(), 4);
    }

    #[test]
    fn test_levels_are_case_folded() {
        let records = vec![record("INFO"), record("error"), record("Error"), record("warning")];
        let counts = count_by_level(&records);
        assert_eq!(counts.get("INFO"), 1);
        assert_eq!(counts.get("ERROR"), 2);
        assert_eq!(counts.get("WARNING"), 1);
        assert_eq!(counts.get("DEBUG"), 0);
    }

    #[test]
    fn test_non_canonical_levels_are_counted() {
        let records = vec![record("trace"), record("TRACE"), record("info")];
        let counts = count_by_level(&records);
        assert_eq!(counts.get("TRACE"), 2);
        assert_eq!(counts.iter().count(), 5);
        assert_eq!(counts.extra().collect::<Vec<_>>(), vec![("TRACE", 2)]);
    }

    fn level() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("info".to_string()),
            Just("DEBUG".to_string()),
            Just("Error".to_string()),
            Just("WARNING".to_string()),
            "[A-Za-z]{1,8}",
        ]
    }

    proptest! {
        #[test]
        fn prop_total_equals_record_count(levels in prop::collection::vec(level(), 0..64)) {
            let records: Vec<_> = levels.iter().map(|l| record(l)).collect();
            let counts = count_by_level(&records);
            prop_assert_eq!(counts.total(), records.len());
            for canonical in CANONICAL_LEVELS {
                prop_assert!(counts.iter().any(|(l, _)| l == canonical));
            }
        }

        #[test]
        fn prop_counting_is_idempotent(levels in prop::collection::vec(level(), 0..64)) {
            let records: Vec<_> = levels.iter().map(|l| record(l)).collect();
            prop_assert_eq!(count_by_level(&records), count_by_level(&records));
        }
    }
}
