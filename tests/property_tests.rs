//! Property-based tests for async_dual_logger using proptest

use async_dual_logger::prelude::*;
use async_dual_logger::{basename, format_record, level_label, ThreadIds};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::io;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(level.to_string(), level.to_str());
    }

    /// Test that LogLevel ordering matches its discriminant
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Raw values map to a known label or the placeholder, never panic
    #[test]
    fn test_level_label_is_total(raw in any::<u8>()) {
        let label = level_label(raw);
        match LogLevel::from_u8(raw) {
            Some(level) => prop_assert_eq!(label, level.to_str()),
            None => prop_assert_eq!(label, "UNKNOWN"),
        }
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// basename never contains a separator and is a suffix of the path
    #[test]
    fn test_basename_strips_directories(
        dirs in prop::collection::vec("[a-z]{1,8}", 0..5),
        separators in prop::collection::vec(prop_oneof![Just('/'), Just('\\')], 5),
        name in "[a-z]{1,8}\\.(rs|cpp|h)",
    ) {
        let mut path = String::new();
        for (dir, sep) in dirs.iter().zip(separators.iter()) {
            path.push_str(dir);
            path.push(*sep);
        }
        path.push_str(&name);

        let base = basename(&path);
        prop_assert_eq!(base, name.as_str());
        prop_assert!(!base.contains('/') && !base.contains('\\'));
        prop_assert!(path.ends_with(base));
    }

    /// A fixed record and time always format to the documented layout
    #[test]
    fn test_format_is_deterministic(
        level in any_level(),
        message in "[ -~]{0,60}",
        function in "[a-z_]{1,16}",
        line in any::<u32>(),
        millis in 0i64..1000,
        pid in any::<u32>(),
        tid in any::<u64>(),
    ) {
        let at = Utc.with_ymd_and_hms(2024, 6, 22, 10, 0, 0).single().unwrap()
            + chrono::Duration::milliseconds(millis);
        let record = LogRecord::new(level, message.clone(), "/src/app/main.rs", function.clone(), line);
        let ids = ThreadIds::new(pid, tid);

        let first = format_record(&record, &at, ids);
        let second = format_record(&record, &at, ids);
        prop_assert_eq!(&first, &second);

        let expected = format!(
            "[2024-06-22 10:00:00.{:03}] [{}] [{}/{}]: {} (main.rs {}:{})",
            millis, level.to_str(), pid, tid, message, function, line
        );
        prop_assert_eq!(first, expected);
    }
}

// ============================================================================
// Engine Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The number of written records equals the number at or above the threshold
    #[test]
    fn test_threshold_filtering(
        threshold in any_level(),
        levels in prop::collection::vec(any_level(), 0..64),
    ) {
        let logger = Logger::builder()
            .console_writer(io::sink())
            .start()
            .unwrap();
        logger.set_min_level(threshold);

        for (i, level) in levels.iter().enumerate() {
            logger.log(*level, "p", "p.rs", "prop", i as u32).unwrap();
        }
        logger.stop().unwrap();

        let expected = levels.iter().filter(|l| **l >= threshold).count() as u64;
        prop_assert_eq!(logger.metrics().written(), expected);
        prop_assert_eq!(logger.metrics().filtered(), levels.len() as u64 - expected);
    }
}
