//! One transformer per lifecycle event.
//!
//! Each function returns a [`LogTransformer`] applying just that tap. The
//! tap is only attached where the flavor can emit the event; applying
//! [`complete`] to a `Single` yields a transparent pass-through.
//!
//! ```ignore
//! use core_rxlog::taps;
//!
//! let quiet = taps::error(&logger, "search").single(fetch());
//! ```

use std::sync::Arc;

use crate::logger::{LogTransformer, RxLogger};
use crate::selector::LogEvent;

/// Logs `[subscribe] {tag} [Thread:{context}]` on the first poll.
pub fn subscribe(logger: &RxLogger, tag: impl Into<Arc<str>>) -> LogTransformer {
    logger.tap(tag, LogEvent::Subscribe)
}

/// Logs each value with its `Debug` rendering.
pub fn next_data(logger: &RxLogger, tag: impl Into<Arc<str>>) -> LogTransformer {
    logger.tap(tag, LogEvent::NextData)
}

/// Logs each value's occurrence only.
pub fn next_event(logger: &RxLogger, tag: impl Into<Arc<str>>) -> LogTransformer {
    logger.tap(tag, LogEvent::NextEvent)
}

pub fn error(logger: &RxLogger, tag: impl Into<Arc<str>>) -> LogTransformer {
    logger.tap(tag, LogEvent::Error)
}

pub fn complete(logger: &RxLogger, tag: impl Into<Arc<str>>) -> LogTransformer {
    logger.tap(tag, LogEvent::Complete)
}

/// Logs once on error or completion of a multi-value stream.
pub fn terminate(logger: &RxLogger, tag: impl Into<Arc<str>>) -> LogTransformer {
    logger.tap(tag, LogEvent::Terminate)
}

/// Logs when the stream is dropped before it terminated.
pub fn dispose(logger: &RxLogger, tag: impl Into<Arc<str>>) -> LogTransformer {
    logger.tap(tag, LogEvent::Dispose)
}
