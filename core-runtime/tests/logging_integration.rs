//! Integration tests for logging system

use bridge_traits::{LogEntry, LogLevel, LoggerSink, MemorySink};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig, TracingSink};
use std::sync::Arc;

#[test]
fn test_global_initialization_happens_once() {
    // Only this test installs the global subscriber in this process.
    let mirror = Arc::new(MemorySink::default());
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Verbose)
        .with_logger_sink(mirror.clone());

    init_logging(config).unwrap();

    let entry = LogEntry::new(LogLevel::Info, "search", "[onComplete] search")
        .with_field("tag", "search")
        .with_field("event", "complete");
    TracingSink.log(entry).unwrap();

    let mirrored = mirror.entries();
    assert!(mirrored
        .iter()
        .any(|e| e.message == "[onComplete] search" && e.field("tag") == Some("search")));

    let second = init_logging(LoggingConfig::default());
    assert!(second.is_err());
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warn)
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warn);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
}

#[test]
fn test_format_selection() {
    #[cfg(debug_assertions)]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[cfg(not(debug_assertions))]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
    }
}

#[test]
fn test_tracing_sink_accepts_every_level() {
    assert_eq!(TracingSink.min_level(), LogLevel::Verbose);
    for level in [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ] {
        assert!(TracingSink.log(LogEntry::new(level, "t", "m")).is_ok());
    }
}
