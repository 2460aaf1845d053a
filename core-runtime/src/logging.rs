//! # Logging & Tracing Infrastructure
//!
//! Provides structured logging with the `tracing` crate, supporting:
//! - JSON, pretty-print and compact output formats
//! - Module-level filtering
//! - A `LoggerSink` backed by `tracing` for tap log entries
//! - Mirroring of `tracing` events into a host `LoggerSink`
//!
//! ## Overview
//!
//! Tap entries produced by `core-rxlog` go to whatever `LoggerSink` the
//! `RxLogger` was configured with. [`TracingSink`] re-emits them as `tracing`
//! events under the `rxlog` target, so they flow through the subscriber that
//! [`init_logging`] installs alongside every other event in the process.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//! use bridge_traits::LogLevel;
//!
//! #[core_async::main]
//! async fn main() {
//!     let config = LoggingConfig::default()
//!         .with_format(LogFormat::Pretty)
//!         .with_level(LogLevel::Verbose);
//!
//!     init_logging(config).expect("Failed to initialize logging");
//!
//!     tracing::info!("Application started");
//! }
//! ```
//!
//! ## LoggerSink mirroring
//!
//! Provide a sink through [`LoggingConfig::with_logger_sink`] to mirror every
//! event that survives filtering into a host pipeline. Do not mirror into a
//! [`TracingSink`]; that would feed events back into `tracing`.

use crate::error::{Error, Result};

use bridge_traits::error::Result as SinkResult;
use bridge_traits::{LogEntry, LogLevel, LoggerSink};

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    filter::EnvFilter,
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
    Layer,
};

/// `tracing` target used for every tap log entry.
pub const RXLOG_TARGET: &str = "rxlog";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Structured JSON format for machine parsing
    Json,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Minimum log level
    pub level: LogLevel,
    /// Custom filter string (e.g., "rxlog=trace,core_rxlog=debug")
    pub filter: Option<String>,
    /// Optional sink receiving a copy of every event
    pub logger_sink: Option<Arc<dyn LoggerSink>>,
    /// Display target module in logs
    pub display_target: bool,
    /// Display thread info
    pub display_thread_info: bool,
}

impl fmt::Debug for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingConfig")
            .field("format", &self.format)
            .field("level", &self.level)
            .field("filter", &self.filter)
            .field(
                "logger_sink",
                &self.logger_sink.as_ref().map(|_| "LoggerSink { ... }"),
            )
            .field("display_target", &self.display_target)
            .field("display_thread_info", &self.display_thread_info)
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            filter: None,
            logger_sink: None,
            display_target: true,
            display_thread_info: false,
        }
    }
}

impl LoggingConfig {
    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set minimum log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set custom filter string
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set a sink that mirrors every event
    pub fn with_logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    /// Enable or disable target display
    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }

    /// Enable or disable thread info
    pub fn with_thread_info(mut self, display: bool) -> Self {
        self.display_thread_info = display;
        self
    }
}

/// Initialize the logging system
///
/// This should be called once during application startup. Subsequent calls
/// will return an error.
///
/// # Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - The filter string is invalid
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;
    let mirror = LoggerSinkLayer::new(config.logger_sink.clone());
    let registry = tracing_subscriber::registry().with(filter).with(mirror);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_target(config.display_target)
                    .with_thread_ids(config.display_thread_info)
                    .with_thread_names(config.display_thread_info)
                    .with_writer(io::stdout),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(config.display_target)
                    .with_thread_ids(config.display_thread_info)
                    .with_thread_names(config.display_thread_info)
                    .with_writer(io::stdout),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(config.display_target)
                    .with_thread_ids(config.display_thread_info)
                    .with_thread_names(config.display_thread_info)
                    .with_writer(io::stdout),
            )
            .try_init(),
    };

    result.map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Verbose => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let filter_string = if let Some(custom_filter) = &config.filter {
        custom_filter.clone()
    } else {
        // Tap output and our crates at the configured level, everything else at warn
        let base_level = level_directive(config.level);
        format!(
            "warn,{}={},core_rxlog={},core_runtime={}",
            RXLOG_TARGET, base_level, base_level, base_level
        )
    };

    EnvFilter::try_new(filter_string)
        .map_err(|e| Error::Config(format!("Invalid log filter: {}", e)))
}

/// `LoggerSink` that forwards tap entries into `tracing`.
///
/// Every entry becomes an event under the [`RXLOG_TARGET`] target. `Verbose`
/// maps to `TRACE`. The entry's own target and its `tag`, `event` and
/// `flavor` fields are carried as event fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LoggerSink for TracingSink {
    fn log(&self, entry: LogEntry) -> SinkResult<()> {
        let origin = entry.target.as_str();
        let tag = entry.field("tag").unwrap_or_default();
        let event = entry.field("event").unwrap_or_default();
        let flavor = entry.field("flavor").unwrap_or_default();
        let message = entry.message.as_str();

        match entry.level {
            LogLevel::Verbose => {
                tracing::trace!(target: "rxlog", origin, tag, event, flavor, "{}", message)
            }
            LogLevel::Debug => {
                tracing::debug!(target: "rxlog", origin, tag, event, flavor, "{}", message)
            }
            LogLevel::Info => {
                tracing::info!(target: "rxlog", origin, tag, event, flavor, "{}", message)
            }
            LogLevel::Warn => {
                tracing::warn!(target: "rxlog", origin, tag, event, flavor, "{}", message)
            }
            LogLevel::Error => {
                tracing::error!(target: "rxlog", origin, tag, event, flavor, "{}", message)
            }
        }
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        // Level filtering is left to the installed subscriber.
        LogLevel::Verbose
    }
}

/// Layer that forwards events to a `LoggerSink` implementation.
pub struct LoggerSinkLayer {
    sink: Option<Arc<dyn LoggerSink>>,
}

impl LoggerSinkLayer {
    pub fn new(sink: Option<Arc<dyn LoggerSink>>) -> Self {
        Self { sink }
    }
}

impl<S> Layer<S> for LoggerSinkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = self.sink.as_ref() else {
            return;
        };

        let metadata = event.metadata();
        let level = tracing_level_to_log_level(*metadata.level());

        if level < sink.min_level() {
            return;
        }

        let mut visitor = SinkVisitor::default();
        event.record(&mut visitor);

        let message = visitor
            .message
            .unwrap_or_else(|| metadata.name().to_string());

        let mut entry = LogEntry::new(level, metadata.target(), message);

        for (key, value) in visitor.fields {
            entry = entry.with_field(key, value);
        }

        // `tracing` cannot be used from inside a layer without recursing.
        if let Err(err) = sink.log(entry) {
            eprintln!("LoggerSink error: {}", err);
        }
    }
}

#[derive(Default)]
struct SinkVisitor {
    message: Option<String>,
    fields: HashMap<String, String>,
}

impl SinkVisitor {
    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for SinkVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_value(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.record_value(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{:?}", value));
    }
}

fn tracing_level_to_log_level(level: tracing::Level) -> LogLevel {
    match level {
        tracing::Level::TRACE => LogLevel::Verbose,
        tracing::Level::DEBUG => LogLevel::Debug,
        tracing::Level::INFO => LogLevel::Info,
        tracing::Level::WARN => LogLevel::Warn,
        tracing::Level::ERROR => LogLevel::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{BridgeError, MemorySink};
    use mockall::mock;

    mock! {
        pub Sink {}

        impl LoggerSink for Sink {
            fn log(&self, entry: LogEntry) -> SinkResult<()>;
            fn min_level(&self) -> LogLevel;
        }
    }

    #[test]
    fn test_logging_config_builder() {
        let config = LoggingConfig::default()
            .with_format(LogFormat::Json)
            .with_level(LogLevel::Debug)
            .with_filter("rxlog=trace")
            .with_target(true)
            .with_thread_info(true);

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.filter, Some("rxlog=trace".to_string()));
        assert!(config.display_target);
        assert!(config.display_thread_info);
        assert!(config.logger_sink.is_none());
    }

    #[test]
    fn test_default_format() {
        #[cfg(debug_assertions)]
        assert_eq!(LogFormat::default(), LogFormat::Pretty);

        #[cfg(not(debug_assertions))]
        assert_eq!(LogFormat::default(), LogFormat::Json);
    }

    #[test]
    fn test_build_filter_maps_verbose_to_trace() {
        let config = LoggingConfig::default().with_level(LogLevel::Verbose);
        let filter = build_filter(&config).unwrap();
        assert!(filter.to_string().contains("rxlog=trace"));
    }

    #[test]
    fn test_build_custom_filter() {
        let config = LoggingConfig::default().with_filter("core_rxlog=debug");
        let filter = build_filter(&config).unwrap();
        assert!(filter.to_string().contains("core_rxlog=debug"));
    }

    #[test]
    fn test_build_invalid_filter() {
        let config = LoggingConfig::default().with_filter("rxlog=verbose");
        assert!(matches!(build_filter(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_logger_sink_layer_forwards_event() {
        let sink = Arc::new(MemorySink::default());
        let trait_sink: Arc<dyn LoggerSink> = sink.clone();
        let layer = LoggerSinkLayer::new(Some(trait_sink));
        let subscriber = tracing_subscriber::registry().with(layer);
        let _guard = tracing::subscriber::set_default(subscriber);

        tracing::info!(target: "test.target", user = "alice", "hello world");

        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.target, "test.target");
        assert_eq!(entry.message, "hello world");
        assert_eq!(entry.field("user"), Some("alice"));
    }

    #[test]
    fn test_logger_sink_layer_respects_sink_level() {
        let sink = Arc::new(MemorySink::new(LogLevel::Warn));
        let trait_sink: Arc<dyn LoggerSink> = sink.clone();
        let subscriber = tracing_subscriber::registry().with(LoggerSinkLayer::new(Some(trait_sink)));
        let _guard = tracing::subscriber::set_default(subscriber);

        tracing::info!("dropped");
        tracing::error!("kept");

        assert_eq!(sink.messages(), vec!["kept"]);
    }

    #[test]
    fn test_logger_sink_layer_swallows_sink_errors() {
        let mut sink = MockSink::new();
        sink.expect_min_level().return_const(LogLevel::Verbose);
        sink.expect_log()
            .times(1)
            .returning(|_| Err(BridgeError::OperationFailed("host logger offline".into())));

        let trait_sink: Arc<dyn LoggerSink> = Arc::new(sink);
        let subscriber = tracing_subscriber::registry().with(LoggerSinkLayer::new(Some(trait_sink)));
        let _guard = tracing::subscriber::set_default(subscriber);

        tracing::warn!("still fine");
    }

    #[test]
    fn test_tracing_sink_reemits_entry() {
        let mirror = Arc::new(MemorySink::default());
        let trait_sink: Arc<dyn LoggerSink> = mirror.clone();
        let subscriber = tracing_subscriber::registry().with(LoggerSinkLayer::new(Some(trait_sink)));
        let _guard = tracing::subscriber::set_default(subscriber);

        let entry = LogEntry::new(LogLevel::Verbose, "feed", "[subscribe] feed [Thread:main]")
            .with_field("tag", "feed")
            .with_field("event", "subscribe")
            .with_field("flavor", "observable");
        TracingSink.log(entry).unwrap();

        let entries = mirror.entries();
        assert_eq!(entries.len(), 1);
        let mirrored = &entries[0];
        assert_eq!(mirrored.level, LogLevel::Verbose);
        assert_eq!(mirrored.target, RXLOG_TARGET);
        assert_eq!(mirrored.message, "[subscribe] feed [Thread:main]");
        assert_eq!(mirrored.field("origin"), Some("feed"));
        assert_eq!(mirrored.field("tag"), Some("feed"));
        assert_eq!(mirrored.field("event"), Some("subscribe"));
        assert_eq!(mirrored.field("flavor"), Some("observable"));
    }

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(tracing_level_to_log_level(tracing::Level::TRACE), LogLevel::Verbose);
        assert_eq!(tracing_level_to_log_level(tracing::Level::ERROR), LogLevel::Error);
    }
}
