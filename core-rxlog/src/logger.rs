//! The logger handle and the transformers it hands out.
//!
//! [`RxLogger`] bundles the injected sink, the execution-context provider and
//! the level threshold. It is cheap to clone and carries no per-stream state;
//! every call to [`RxLogger::log`], [`RxLogger::log_lifecycle`] or
//! [`RxLogger::log_with`] returns an independent [`LogTransformer`] that can
//! be applied to any number of streams.

use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use bridge_traits::{ExecutionContext, LogEntry, LogLevel, LoggerSink};
use futures_core::Stream;

use crate::config::RxLogConfig;
use crate::error::Result;
use crate::flavor::{Completable, Flavor, FlavorKind, Maybe, Observable, Opaque, Single};
use crate::logged::Logged;
use crate::selector::{LogEvent, LogSelector, TapPlan};
use crate::tap::{TapChain, TapRecord};

/// Handle used to instrument streams.
#[derive(Clone)]
pub struct RxLogger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    sink: Arc<dyn LoggerSink>,
    context: Arc<dyn ExecutionContext>,
    target: String,
    min_level: LogLevel,
}

impl RxLogger {
    /// Creates a logger from a validated configuration.
    pub fn new(config: RxLogConfig) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                sink: config.sink,
                context: config.context,
                target: config.target,
                min_level: config.min_level,
            }),
        }
    }

    /// Shorthand for a logger writing to `sink` with default settings.
    pub fn with_sink(sink: Arc<dyn LoggerSink>) -> Result<Self> {
        RxLogConfig::builder().sink(sink).build().map(Self::new)
    }

    /// Logs every event, values included.
    pub fn log(&self, tag: impl Into<Arc<str>>) -> LogTransformer {
        self.log_with(tag, LogSelector::FULL)
    }

    /// Logs every event, values reduced to their occurrence.
    ///
    /// Prefer this on busy streams or streams carrying large payloads.
    pub fn log_lifecycle(&self, tag: impl Into<Arc<str>>) -> LogTransformer {
        self.log_with(tag, LogSelector::LIFECYCLE)
    }

    /// Logs the events named by `selector`.
    pub fn log_with(
        &self,
        tag: impl Into<Arc<str>>,
        selector: impl Into<LogSelector>,
    ) -> LogTransformer {
        LogTransformer {
            logger: self.clone(),
            tag: tag.into(),
            selector: selector.into(),
        }
    }

    /// A single tap for `event`.
    pub fn tap(&self, tag: impl Into<Arc<str>>, event: LogEvent) -> LogTransformer {
        self.log_with(tag, event)
    }

    pub fn target(&self) -> &str {
        &self.inner.target
    }

    pub fn min_level(&self) -> LogLevel {
        self.inner.min_level
    }

    /// Whether an entry at `level` would reach the sink.
    ///
    /// Calls the sink directly; tap dispatch performs the same check behind
    /// its unwind guard.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.inner.min_level && level >= self.inner.sink.min_level()
    }

    /// Flushes the sink. Call once when shutting down.
    pub fn flush(&self) -> Result<()> {
        self.inner.sink.flush()?;
        Ok(())
    }

    /// Writes one tap entry. Never fails and never panics.
    ///
    /// Every call into the sink or the context provider, including
    /// `LoggerSink::min_level`, happens inside the unwind guard.
    pub(crate) fn dispatch(&self, record: &TapRecord<'_>) {
        let level = record.event.level();
        if level < self.inner.min_level {
            return;
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            if level < self.inner.sink.min_level() {
                return Ok(());
            }

            let context = record
                .event
                .includes_context()
                .then(|| self.inner.context.name());
            let message = record.message(context.as_deref());

            let mut entry = LogEntry::new(level, self.inner.target.as_str(), message)
                .with_field("tag", record.tag)
                .with_field("event", record.event.as_str())
                .with_field("flavor", record.flavor.as_str());
            if let Some(context) = context {
                entry = entry.with_field("thread", context);
            }

            self.inner.sink.log(entry)
        }));

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::trace!(tag = record.tag, event = %record.event, error = %err, "log sink rejected tap entry");
            }
            Err(_) => {
                tracing::trace!(tag = record.tag, event = %record.event, "tap entry dropped after panic while logging");
            }
        }
    }
}

impl fmt::Debug for RxLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RxLogger")
            .field("sink", &"LoggerSink { ... }")
            .field("context", &"ExecutionContext { ... }")
            .field("target", &self.inner.target)
            .field("min_level", &self.inner.min_level)
            .finish()
    }
}

/// Reusable recipe for instrumenting streams with one tag and selector.
///
/// Apply it with the flavor-specific methods, or through the fluent
/// [`LogStreamExt`](crate::ext::LogStreamExt) and
/// [`LogFutureExt`](crate::ext::LogFutureExt) traits.
#[derive(Clone, Debug)]
pub struct LogTransformer {
    logger: RxLogger,
    tag: Arc<str>,
    selector: LogSelector,
}

impl LogTransformer {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Selector as requested, before flavor filtering.
    pub fn selector(&self) -> LogSelector {
        self.selector
    }

    /// The taps this transformer layers onto a stream of `flavor`.
    pub fn plan(&self, flavor: FlavorKind) -> TapPlan {
        self.selector.plan(flavor)
    }

    /// Wraps `upstream` as flavor `K`.
    pub fn apply<S, K: Flavor>(&self, upstream: S) -> Logged<S, K> {
        let selector = if K::RENDERS_VALUES {
            self.selector
        } else {
            self.selector.without_values()
        };
        let taps = TapChain::new(
            self.logger.clone(),
            Arc::clone(&self.tag),
            selector,
            K::KIND,
        );
        Logged::new(upstream, taps)
    }

    /// Instruments a multi-value stream.
    pub fn observable<S, T, E>(&self, upstream: S) -> Logged<S, Observable>
    where
        S: Stream<Item = std::result::Result<T, E>>,
        T: fmt::Debug,
        E: fmt::Display,
    {
        self.apply(upstream)
    }

    /// Instruments a future producing exactly one value.
    pub fn single<F, T, E>(&self, upstream: F) -> Logged<F, Single>
    where
        F: Future<Output = std::result::Result<T, E>>,
        T: fmt::Debug,
        E: fmt::Display,
    {
        self.apply(upstream)
    }

    /// Instruments a future producing at most one value.
    pub fn maybe<F, T, E>(&self, upstream: F) -> Logged<F, Maybe>
    where
        F: Future<Output = std::result::Result<Option<T>, E>>,
        T: fmt::Debug,
        E: fmt::Display,
    {
        self.apply(upstream)
    }

    /// Instruments a multi-value stream whose items have no `Debug` impl.
    pub fn observable_opaque<S, T, E>(&self, upstream: S) -> Logged<S, Opaque<Observable>>
    where
        S: Stream<Item = std::result::Result<T, E>>,
        E: fmt::Display,
    {
        self.apply(upstream)
    }

    /// Instruments a single-value future whose value has no `Debug` impl.
    pub fn single_opaque<F, T, E>(&self, upstream: F) -> Logged<F, Opaque<Single>>
    where
        F: Future<Output = std::result::Result<T, E>>,
        E: fmt::Display,
    {
        self.apply(upstream)
    }

    pub fn maybe_opaque<F, T, E>(&self, upstream: F) -> Logged<F, Opaque<Maybe>>
    where
        F: Future<Output = std::result::Result<Option<T>, E>>,
        E: fmt::Display,
    {
        self.apply(upstream)
    }

    /// Instruments a future producing no value.
    pub fn completable<F, E>(&self, upstream: F) -> Logged<F, Completable>
    where
        F: Future<Output = std::result::Result<(), E>>,
        E: fmt::Display,
    {
        self.apply(upstream)
    }
}
