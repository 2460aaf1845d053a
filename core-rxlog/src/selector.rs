//! Event selection.
//!
//! A [`LogSelector`] is the compact configuration deciding which lifecycle
//! events get a tap. [`LogSelector::plan`] resolves it against a stream flavor
//! into the ordered set of taps that will actually be layered.

use std::fmt;

use bitflags::bitflags;
use bridge_traits::LogLevel;

use crate::flavor::FlavorKind;

bitflags! {
    /// Set of lifecycle events to log.
    ///
    /// Bit values match the integer constants hosts may already store in
    /// configuration files, so `LogSelector::from_mask(20)` is
    /// `ERROR | SUBSCRIBE`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LogSelector: u32 {
        /// Each value, including its `Debug` rendering.
        const NEXT_DATA = 1;
        /// Each value, without rendering it.
        const NEXT_EVENT = 1 << 1;
        const ERROR = 1 << 2;
        const COMPLETE = 1 << 3;
        const SUBSCRIBE = 1 << 4;
        /// Error or completion, whichever comes first.
        const TERMINATE = 1 << 5;
        /// Cancellation before a terminal signal.
        const DISPOSE = 1 << 6;

        /// Every event except value emission.
        const BASE = Self::ERROR.bits()
            | Self::COMPLETE.bits()
            | Self::SUBSCRIBE.bits()
            | Self::TERMINATE.bits()
            | Self::DISPOSE.bits();
        /// The `log` preset.
        const FULL = Self::BASE.bits() | Self::NEXT_DATA.bits();
        /// The `log_lifecycle` preset.
        const LIFECYCLE = Self::BASE.bits() | Self::NEXT_EVENT.bits();
    }
}

impl LogSelector {
    /// Builds a selector from a raw mask. Unknown bits are dropped.
    pub fn from_mask(mask: u32) -> Self {
        Self::from_bits_truncate(mask)
    }

    /// Resolves this selector for one flavor.
    ///
    /// Bits the flavor cannot emit are dropped, and when both next variants
    /// are requested only `NEXT_DATA` survives.
    pub fn plan(self, flavor: FlavorKind) -> TapPlan {
        let mut enabled = self & flavor.capabilities();
        if enabled.contains(Self::NEXT_DATA) {
            enabled.remove(Self::NEXT_EVENT);
        }
        TapPlan { enabled }
    }
}

impl LogSelector {
    /// Replaces `NEXT_DATA` with `NEXT_EVENT`, for payloads that are never
    /// rendered.
    pub fn without_values(self) -> Self {
        if self.contains(Self::NEXT_DATA) {
            (self - Self::NEXT_DATA) | Self::NEXT_EVENT
        } else {
            self
        }
    }
}

impl From<u32> for LogSelector {
    fn from(mask: u32) -> Self {
        Self::from_mask(mask)
    }
}

impl From<LogEvent> for LogSelector {
    fn from(event: LogEvent) -> Self {
        event.selector()
    }
}

/// A single tap category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogEvent {
    Subscribe,
    Terminate,
    Error,
    Complete,
    NextData,
    NextEvent,
    Dispose,
}

impl LogEvent {
    /// The order taps are layered onto a stream.
    pub const COMPOSITION_ORDER: [LogEvent; 7] = [
        LogEvent::Subscribe,
        LogEvent::Terminate,
        LogEvent::Error,
        LogEvent::Complete,
        LogEvent::NextData,
        LogEvent::NextEvent,
        LogEvent::Dispose,
    ];

    pub fn selector(self) -> LogSelector {
        match self {
            LogEvent::Subscribe => LogSelector::SUBSCRIBE,
            LogEvent::Terminate => LogSelector::TERMINATE,
            LogEvent::Error => LogSelector::ERROR,
            LogEvent::Complete => LogSelector::COMPLETE,
            LogEvent::NextData => LogSelector::NEXT_DATA,
            LogEvent::NextEvent => LogSelector::NEXT_EVENT,
            LogEvent::Dispose => LogSelector::DISPOSE,
        }
    }

    /// Level every entry for this event is written at.
    pub fn level(self) -> LogLevel {
        match self {
            LogEvent::Subscribe | LogEvent::Terminate | LogEvent::Dispose => LogLevel::Verbose,
            LogEvent::NextData | LogEvent::NextEvent => LogLevel::Debug,
            LogEvent::Complete => LogLevel::Info,
            LogEvent::Error => LogLevel::Error,
        }
    }

    /// Whether entries for this event name the execution context.
    pub fn includes_context(self) -> bool {
        matches!(
            self,
            LogEvent::Subscribe | LogEvent::NextData | LogEvent::NextEvent
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogEvent::Subscribe => "subscribe",
            LogEvent::Terminate => "terminate",
            LogEvent::Error => "error",
            LogEvent::Complete => "complete",
            LogEvent::NextData | LogEvent::NextEvent => "next",
            LogEvent::Dispose => "dispose",
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The taps a selector resolves to for one flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapPlan {
    enabled: LogSelector,
}

impl TapPlan {
    /// Resolved selector: legal bits only, next-variant precedence applied.
    pub fn selector(&self) -> LogSelector {
        self.enabled
    }

    pub fn contains(&self, event: LogEvent) -> bool {
        self.enabled.contains(event.selector())
    }

    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Enabled taps in composition order.
    pub fn iter(&self) -> impl Iterator<Item = LogEvent> + '_ {
        LogEvent::COMPOSITION_ORDER
            .into_iter()
            .filter(move |event| self.contains(*event))
    }
}
