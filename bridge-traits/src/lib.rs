//! # Host Bridge Traits
//!
//! Collaborator contracts the instrumentation core is written against.
//!
//! ## Overview
//!
//! The core never decides where log lines go or how threads are named. Both
//! are capabilities supplied by the host and injected at configuration time:
//!
//! - [`LoggerSink`](sink::LoggerSink) - Leveled, structured log writes
//! - [`ExecutionContext`](context::ExecutionContext) - Name of the thread/worker observing a signal
//!
//! ## Provided Implementations
//!
//! | Trait | Implementation | Use |
//! |-------|----------------|-----|
//! | `LoggerSink` | [`ConsoleLogger`](sink::ConsoleLogger) | Development output (text or JSON lines) |
//! | `LoggerSink` | [`MemorySink`](sink::MemorySink) | Capturing sink for tests and diagnostics |
//! | `ExecutionContext` | [`ThreadContext`](context::ThreadContext) | Current OS thread name |
//! | `ExecutionContext` | [`FixedContext`](context::FixedContext) | Deterministic name for tests |
//!
//! A `tracing`-backed sink lives in `core-runtime`.
//!
//! ## Error Handling
//!
//! Bridge operations report failures through [`BridgeError`](error::BridgeError).
//! Callers inside instrumented streams discard these errors; they are surfaced
//! only where a host calls a sink directly (for example `flush`).
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync`; implementations are shared across
//! executor threads behind `Arc`.

pub mod context;
pub mod error;
pub mod platform;
pub mod sink;

pub use error::BridgeError;

// Re-export commonly used types
pub use context::{ExecutionContext, FixedContext, ThreadContext};
pub use sink::{ConsoleLogger, LogEntry, LogLevel, LoggerSink, MemorySink};
