//! # Core Runtime Module
//!
//! Process-level logging infrastructure for RxLog:
//! - `tracing-subscriber` bootstrap (`init_logging`)
//! - `TracingSink`, the default destination for tap log entries
//! - `LoggerSinkLayer`, mirroring `tracing` events into a host `LoggerSink`
//!
//! ## Overview
//!
//! The instrumentation core writes into an injected `LoggerSink` and never
//! touches global state. This crate is where a host opts into the global
//! `tracing` pipeline, once, at startup.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
