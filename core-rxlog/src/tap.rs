//! Event taps.
//!
//! A [`TapChain`] holds the taps one composition call layered onto a stream,
//! tracks where that stream is in its lifecycle, and turns each observed
//! signal into at most one log entry per tap.
//!
//! Taps are side-effect only: they never see a signal before the downstream
//! consumer could, never hold one back, and never fail.

use std::fmt;
use std::sync::Arc;
use std::thread;

use crate::flavor::{ErrorView, FlavorKind, Signal};
use crate::logger::RxLogger;
use crate::selector::{LogEvent, LogSelector, TapPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Not polled yet.
    Idle,
    Subscribed,
    /// Error, completion or the only value has been observed.
    Terminated,
}

/// Taps for one instrumented stream.
pub(crate) struct TapChain {
    logger: RxLogger,
    tag: Arc<str>,
    flavor: FlavorKind,
    plan: TapPlan,
    phase: Phase,
}

impl TapChain {
    pub(crate) fn new(
        logger: RxLogger,
        tag: Arc<str>,
        selector: LogSelector,
        flavor: FlavorKind,
    ) -> Self {
        Self {
            logger,
            tag,
            flavor,
            plan: selector.plan(flavor),
            phase: Phase::Idle,
        }
    }

    pub(crate) fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn plan(&self) -> TapPlan {
        self.plan
    }

    pub(crate) fn flavor(&self) -> FlavorKind {
        self.flavor
    }

    /// Called at the top of every poll; the first one is the subscription.
    pub(crate) fn on_poll(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Subscribed;
        if self.plan.contains(LogEvent::Subscribe) {
            self.emit(LogEvent::Subscribe, Detail::None);
        }
    }

    pub(crate) fn on_signal(&mut self, signal: Signal<'_>) {
        if self.phase == Phase::Terminated {
            return;
        }
        if signal.is_terminal() {
            self.phase = Phase::Terminated;
        }

        for event in self.plan.iter() {
            let detail = match (event, &signal) {
                (LogEvent::Terminate, Signal::Error(_) | Signal::Complete) => Detail::None,
                (LogEvent::Error, Signal::Error(view)) => Detail::Error(*view),
                (LogEvent::Complete, Signal::Complete) => Detail::None,
                (LogEvent::NextData, _) => match signal.value() {
                    Some(value) => Detail::Value(value),
                    None => continue,
                },
                (LogEvent::NextEvent, Signal::Next(_) | Signal::Success(_)) => Detail::None,
                _ => continue,
            };
            self.emit(event, detail);
        }
    }

    fn emit(&self, event: LogEvent, detail: Detail<'_>) {
        self.logger.dispatch(&TapRecord {
            event,
            flavor: self.flavor,
            tag: &self.tag,
            detail,
        });
    }
}

impl Drop for TapChain {
    fn drop(&mut self) {
        // Dropped mid-stream: the consumer cancelled. Stay quiet while unwinding.
        if self.phase == Phase::Subscribed
            && self.plan.contains(LogEvent::Dispose)
            && !thread::panicking()
        {
            self.emit(LogEvent::Dispose, Detail::None);
        }
    }
}

impl fmt::Debug for TapChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapChain")
            .field("tag", &self.tag)
            .field("flavor", &self.flavor)
            .field("plan", &self.plan)
            .field("phase", &self.phase)
            .finish()
    }
}

/// Payload attached to one tap entry.
#[derive(Clone, Copy)]
pub(crate) enum Detail<'a> {
    None,
    Value(&'a dyn fmt::Debug),
    Error(ErrorView<'a>),
}

/// Everything needed to render one tap entry.
pub(crate) struct TapRecord<'a> {
    pub(crate) event: LogEvent,
    pub(crate) flavor: FlavorKind,
    pub(crate) tag: &'a str,
    pub(crate) detail: Detail<'a>,
}

impl TapRecord<'_> {
    /// Renders the log line. `context` is required for subscribe/next lines.
    pub(crate) fn message(&self, context: Option<&str>) -> String {
        let tag = self.tag;
        let context = context.unwrap_or_default();

        match (self.event, self.detail) {
            (LogEvent::Subscribe, _) => format!("[subscribe] {} [Thread:{}]", tag, context),
            (LogEvent::NextData, Detail::Value(value)) => format!(
                "[{}] {} {:?} [Thread:{}]",
                self.flavor.next_label(),
                tag,
                value,
                context
            ),
            (LogEvent::NextData | LogEvent::NextEvent, _) => format!(
                "[{}] {} [Thread:{}]",
                self.flavor.next_label(),
                tag,
                context
            ),
            (LogEvent::Error, Detail::Error(view)) => {
                format!("[onError] {} - {}", tag, view.describe())
            }
            (LogEvent::Error, _) => format!("[onError] {}", tag),
            (LogEvent::Complete, _) => format!("[onComplete] {}", tag),
            (LogEvent::Terminate, _) => format!("[terminate] {}", tag),
            (LogEvent::Dispose, _) => format!("[dispose] {}", tag),
        }
    }
}
