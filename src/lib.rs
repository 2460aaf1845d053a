//! Workspace facade crate.
//!
//! Re-exports the instrumentation core (`core-rxlog`) together with the sink
//! contracts it is wired against, so host applications can depend on a single
//! crate. The `tracing-sink` feature (on by default) also pulls in the
//! `tracing`-backed sink and the logging bootstrap from `core-runtime`.

pub use bridge_traits::{ExecutionContext, LogEntry, LogLevel, LoggerSink, MemorySink};
pub use core_rxlog::*;

#[cfg(feature = "tracing-sink")]
pub use core_runtime::logging;
