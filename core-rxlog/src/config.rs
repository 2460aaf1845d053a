//! # Logger Configuration
//!
//! [`RxLogConfig`] holds the injected collaborators of an [`RxLogger`]:
//! the sink entries are written to, the provider naming the current
//! execution context, and the level threshold.
//!
//! ## Defaults
//!
//! - sink: `core_runtime::logging::TracingSink` when the `tracing-sink`
//!   feature is enabled, otherwise a sink must be injected
//! - context: [`ThreadContext`]
//! - target: `"rxlog"`
//! - min level: [`LogLevel::Verbose`]
//!
//! ## Usage
//!
//! ```ignore
//! use core_rxlog::{RxLogConfig, RxLogger};
//! use bridge_traits::{LogLevel, MemorySink};
//! use std::sync::Arc;
//!
//! let logger = RxLogger::new(
//!     RxLogConfig::builder()
//!         .sink(Arc::new(MemorySink::default()))
//!         .min_level(LogLevel::Debug)
//!         .build()?,
//! );
//! ```
//!
//! [`RxLogger`]: crate::RxLogger

use std::fmt;
use std::sync::Arc;

use bridge_traits::{ExecutionContext, LogLevel, LoggerSink, ThreadContext};

use crate::error::{Error, Result};

const DEFAULT_TARGET: &str = "rxlog";

/// Validated logger configuration.
#[derive(Clone)]
pub struct RxLogConfig {
    pub sink: Arc<dyn LoggerSink>,
    pub context: Arc<dyn ExecutionContext>,
    /// Target recorded on every entry.
    pub target: String,
    /// Entries below this level are skipped before they are formatted.
    pub min_level: LogLevel,
}

impl RxLogConfig {
    pub fn builder() -> RxLogConfigBuilder {
        RxLogConfigBuilder::default()
    }
}

impl fmt::Debug for RxLogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RxLogConfig")
            .field("sink", &"LoggerSink { ... }")
            .field("context", &"ExecutionContext { ... }")
            .field("target", &self.target)
            .field("min_level", &self.min_level)
            .finish()
    }
}

/// Builder for [`RxLogConfig`].
#[derive(Default)]
pub struct RxLogConfigBuilder {
    sink: Option<Arc<dyn LoggerSink>>,
    context: Option<Arc<dyn ExecutionContext>>,
    target: Option<String>,
    min_level: Option<LogLevel>,
}

impl RxLogConfigBuilder {
    pub fn sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Sets the provider used for the `[Thread:...]` suffix.
    pub fn context(mut self, context: Arc<dyn ExecutionContext>) -> Self {
        self.context = Some(context);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the target is empty
    /// - [`Error::CapabilityMissing`] if no sink was injected and the
    ///   `tracing-sink` feature is disabled
    pub fn build(self) -> Result<RxLogConfig> {
        let target = self.target.unwrap_or_else(|| DEFAULT_TARGET.to_string());
        if target.trim().is_empty() {
            return Err(Error::Config("Log target cannot be empty".to_string()));
        }

        let sink = match self.sink {
            Some(sink) => sink,
            None => provide_default_sink()?,
        };
        let context = self
            .context
            .unwrap_or_else(|| Arc::new(ThreadContext));
        let min_level = self.min_level.unwrap_or(LogLevel::Verbose);

        tracing::debug!(target = %target, min_level = %min_level.as_str(), "rxlog configured");

        Ok(RxLogConfig {
            sink,
            context,
            target,
            min_level,
        })
    }
}

#[cfg(feature = "tracing-sink")]
fn provide_default_sink() -> Result<Arc<dyn LoggerSink>> {
    use core_runtime::logging::TracingSink;

    let sink: Arc<dyn LoggerSink> = Arc::new(TracingSink);
    Ok(sink)
}

#[cfg(not(feature = "tracing-sink"))]
fn provide_default_sink() -> Result<Arc<dyn LoggerSink>> {
    Err(Error::CapabilityMissing {
        capability: "LoggerSink".to_string(),
        message: "A LoggerSink implementation is required. \
                 Enable the 'tracing-sink' feature to forward entries to tracing, \
                 or inject a sink with .sink()."
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::MemorySink;

    #[test]
    fn test_builder_with_injected_sink() {
        let config = RxLogConfig::builder()
            .sink(Arc::new(MemorySink::default()))
            .target("search")
            .min_level(LogLevel::Debug)
            .build()
            .unwrap();

        assert_eq!(config.target, "search");
        assert_eq!(config.min_level, LogLevel::Debug);
    }

    #[test]
    fn test_builder_defaults() {
        let config = RxLogConfig::builder()
            .sink(Arc::new(MemorySink::default()))
            .build()
            .unwrap();

        assert_eq!(config.target, "rxlog");
        assert_eq!(config.min_level, LogLevel::Verbose);
        assert!(!config.context.name().is_empty());
    }

    #[test]
    fn test_empty_target_rejected() {
        let result = RxLogConfig::builder()
            .sink(Arc::new(MemorySink::default()))
            .target("  ")
            .build();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[cfg(feature = "tracing-sink")]
    #[test]
    fn test_tracing_sink_is_default() {
        assert!(RxLogConfig::builder().build().is_ok());
    }

    #[cfg(not(feature = "tracing-sink"))]
    #[test]
    fn test_missing_sink_is_reported() {
        let result = RxLogConfig::builder().build();

        match result {
            Err(Error::CapabilityMissing { capability, .. }) => {
                assert_eq!(capability, "LoggerSink");
            }
            other => panic!("expected CapabilityMissing, got {:?}", other),
        }
    }
}
