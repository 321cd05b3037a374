//! Property-based tests for level_logger using proptest

use level_logger::prelude::*;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Clone, Default)]
struct CaptureSink {
    lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl Sink for CaptureSink {
    fn emit(&self, level: LogLevel, line: &str) {
        self.lines.lock().push((level, line.to_string()));
    }
}

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

fn any_filter() -> impl Strategy<Value = LevelFilter> {
    prop_oneof![
        Just(LevelFilter::Trace),
        Just(LevelFilter::Debug),
        Just(LevelFilter::Info),
        Just(LevelFilter::Warn),
        Just(LevelFilter::Error),
        Just(LevelFilter::Off),
    ]
}

// ============================================================================
// Level ordering and parsing
// ============================================================================

proptest! {
    /// LogLevel string conversions roundtrip
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// LogLevel ordering is consistent with its numeric priority
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 <= level2, (level1 as u8) <= (level2 as u8));
        prop_assert_eq!(level1 < level2, (level1 as u8) < (level2 as u8));
    }

    /// Parsing is case-insensitive for levels and filters
    #[test]
    fn test_parse_case_insensitive(level in any_level(), upper in any::<bool>()) {
        let text = if upper {
            level.to_str().to_uppercase()
        } else {
            level.to_str().to_lowercase()
        };
        prop_assert_eq!(text.parse::<LogLevel>().unwrap(), level);
        prop_assert_eq!(
            text.parse::<LevelFilter>().unwrap(),
            LevelFilter::from(level)
        );
    }

    /// enabled() agrees with the numeric priority comparison
    #[test]
    fn test_enabled_matches_priority(level in any_level(), filter in any_filter()) {
        prop_assert_eq!(filter.enabled(level), (level as u8) >= (filter as u8));
    }
}

// ============================================================================
// Threshold dispatch
// ============================================================================

proptest! {
    /// A call emits exactly once iff it passes the threshold, zero otherwise
    #[test]
    fn test_emission_count(level in any_level(), filter in any_filter()) {
        let sink = CaptureSink::default();
        let logger = Logger::builder()
            .level(filter)
            .sink(sink.clone())
            .build();

        logger.log(level, &[&"x"]);

        let expected = usize::from(filter.enabled(level));
        let lines = sink.lines.lock();
        prop_assert_eq!(lines.len(), expected);
        if let Some((emitted, line)) = lines.first() {
            prop_assert_eq!(*emitted, level);
            prop_assert_eq!(line.as_str(), "x");
        }
    }
}

// ============================================================================
// Default formatter
// ============================================================================

proptest! {
    /// Literal prefixes without directives pass through space-joined
    #[test]
    fn test_literal_prefixes_pass_through(
        texts in prop::collection::vec("[a-zA-Z0-9]{1,8}", 0..4)
    ) {
        let sink = CaptureSink::default();
        let logger = Logger::builder()
            .prefixes(texts.clone())
            .sink(sink.clone())
            .build();

        logger.log(LogLevel::Info, &[]);

        let lines = sink.lines.lock();
        let expected = texts.join(" ");
        prop_assert_eq!(lines[0].1.as_str(), expected.as_str());
    }

    /// The default formatter is total over arbitrary input, directives
    /// included
    #[test]
    fn test_formatter_total(
        prefixes in prop::collection::vec(".*", 0..4),
        args in prop::collection::vec(".*", 0..4)
    ) {
        let _ = TextFormat.format(LogLevel::Info, &prefixes, &args);
    }

    /// Without directives the output always contains every argument in order
    #[test]
    fn test_arguments_preserved_in_order(
        args in prop::collection::vec("[a-z]{1,6}", 1..5)
    ) {
        let line = TextFormat.format(LogLevel::Info, &[], &args);
        prop_assert_eq!(line, args.join(" "));
    }
}
