//! Shared fixtures for the instrumentation tests.

#![allow(dead_code)]

use std::fmt;
use std::sync::Arc;

use bridge_traits::{FixedContext, LogLevel, MemorySink};
use core_rxlog::{RxLogConfig, RxLogger};

/// A logger writing into a fresh `MemorySink`, with the context named `main`.
pub fn capture() -> (RxLogger, Arc<MemorySink>) {
    capture_at(LogLevel::Verbose)
}

pub fn capture_at(min_level: LogLevel) -> (RxLogger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    let config = RxLogConfig::builder()
        .sink(sink.clone())
        .context(Arc::new(FixedContext::new("main")))
        .min_level(min_level)
        .build()
        .expect("valid test config");
    (RxLogger::new(config), sink)
}

/// Upstream error used across the suites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boom(pub &'static str);

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Boom {}
