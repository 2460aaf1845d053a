//! Stream flavors and their capability descriptors.
//!
//! Four shapes of asynchronous source are instrumented by the same adapter:
//!
//! | Marker | Shape | Value event | Completes without value |
//! |--------|-------|-------------|-------------------------|
//! | [`Observable`] | `Stream<Item = Result<T, E>>` | `onNext`, repeatable | yes |
//! | [`Single`] | `Future<Output = Result<T, E>>` | `onSuccess`, once | no |
//! | [`Maybe`] | `Future<Output = Result<Option<T>, E>>` | `onSuccess`, at most once | yes |
//! | [`Completable`] | `Future<Output = Result<(), E>>` | none | yes |
//!
//! A marker's [`Flavor`] impl names its capabilities; its [`Classify`] impl
//! maps each raw output onto a lifecycle [`Signal`].
//!
//! Value rendering needs `T: Debug`. Payloads without a `Debug` impl are
//! instrumented through [`Opaque`], which reports values by occurrence only.

use std::any;
use std::fmt;
use std::marker::PhantomData;

use crate::selector::{LogEvent, LogSelector};

/// Closed set of stream flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlavorKind {
    Observable,
    Single,
    Maybe,
    Completable,
}

impl FlavorKind {
    /// Events this flavor can emit.
    pub fn capabilities(self) -> LogSelector {
        match self {
            FlavorKind::Observable => LogSelector::all(),
            FlavorKind::Single => {
                LogSelector::SUBSCRIBE
                    | LogSelector::NEXT_DATA
                    | LogSelector::NEXT_EVENT
                    | LogSelector::ERROR
                    | LogSelector::DISPOSE
            }
            FlavorKind::Maybe => {
                LogSelector::SUBSCRIBE
                    | LogSelector::NEXT_DATA
                    | LogSelector::NEXT_EVENT
                    | LogSelector::ERROR
                    | LogSelector::COMPLETE
                    | LogSelector::DISPOSE
            }
            FlavorKind::Completable => {
                LogSelector::SUBSCRIBE
                    | LogSelector::ERROR
                    | LogSelector::COMPLETE
                    | LogSelector::DISPOSE
            }
        }
    }

    pub fn supports(self, event: LogEvent) -> bool {
        self.capabilities().contains(event.selector())
    }

    /// Label used for value events in log messages.
    pub fn next_label(self) -> &'static str {
        match self {
            FlavorKind::Observable => "onNext",
            _ => "onSuccess",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlavorKind::Observable => "observable",
            FlavorKind::Single => "single",
            FlavorKind::Maybe => "maybe",
            FlavorKind::Completable => "completable",
        }
    }
}

impl fmt::Display for FlavorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time flavor marker.
pub trait Flavor {
    const KIND: FlavorKind;
    /// Whether classified values carry a renderable payload.
    const RENDERS_VALUES: bool = true;
}

/// Maps a raw output `O` of a flavor onto a lifecycle signal.
pub trait Classify<O>: Flavor {
    fn classify(output: &O) -> Signal<'_>;
}

/// Multi-value stream of `Result<T, E>` items.
#[derive(Debug, Clone, Copy, Default)]
pub struct Observable;

/// Future resolving to exactly one value or an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Single;

/// Future resolving to zero or one value, or an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Maybe;

/// Future resolving to completion or an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Completable;

impl Flavor for Observable {
    const KIND: FlavorKind = FlavorKind::Observable;
}

impl Flavor for Single {
    const KIND: FlavorKind = FlavorKind::Single;
}

impl Flavor for Maybe {
    const KIND: FlavorKind = FlavorKind::Maybe;
}

impl Flavor for Completable {
    const KIND: FlavorKind = FlavorKind::Completable;
}

/// Flavor `K` with values that are never rendered.
///
/// `NEXT_DATA` taps degrade to `NEXT_EVENT`, so `T` needs no `Debug` impl.
pub struct Opaque<K>(PhantomData<fn() -> K>);

impl<K: Flavor> Flavor for Opaque<K> {
    const KIND: FlavorKind = K::KIND;
    const RENDERS_VALUES: bool = false;
}

impl<T, E> Classify<Option<Result<T, E>>> for Opaque<Observable>
where
    E: fmt::Display,
{
    fn classify(output: &Option<Result<T, E>>) -> Signal<'_> {
        match output {
            Some(Ok(_)) => Signal::Next(None),
            Some(Err(error)) => Signal::Error(ErrorView::new(error)),
            None => Signal::Complete,
        }
    }
}

impl<T, E> Classify<Result<T, E>> for Opaque<Single>
where
    E: fmt::Display,
{
    fn classify(output: &Result<T, E>) -> Signal<'_> {
        match output {
            Ok(_) => Signal::Success(None),
            Err(error) => Signal::Error(ErrorView::new(error)),
        }
    }
}

impl<T, E> Classify<Result<Option<T>, E>> for Opaque<Maybe>
where
    E: fmt::Display,
{
    fn classify(output: &Result<Option<T>, E>) -> Signal<'_> {
        match output {
            Ok(Some(_)) => Signal::Success(None),
            Ok(None) => Signal::Complete,
            Err(error) => Signal::Error(ErrorView::new(error)),
        }
    }
}

impl<T, E> Classify<Option<Result<T, E>>> for Observable
where
    T: fmt::Debug,
    E: fmt::Display,
{
    fn classify(output: &Option<Result<T, E>>) -> Signal<'_> {
        match output {
            Some(Ok(value)) => Signal::Next(Some(value)),
            Some(Err(error)) => Signal::Error(ErrorView::new(error)),
            None => Signal::Complete,
        }
    }
}

impl<T, E> Classify<Result<T, E>> for Single
where
    T: fmt::Debug,
    E: fmt::Display,
{
    fn classify(output: &Result<T, E>) -> Signal<'_> {
        match output {
            Ok(value) => Signal::Success(Some(value)),
            Err(error) => Signal::Error(ErrorView::new(error)),
        }
    }
}

impl<T, E> Classify<Result<Option<T>, E>> for Maybe
where
    T: fmt::Debug,
    E: fmt::Display,
{
    fn classify(output: &Result<Option<T>, E>) -> Signal<'_> {
        match output {
            Ok(Some(value)) => Signal::Success(Some(value)),
            Ok(None) => Signal::Complete,
            Err(error) => Signal::Error(ErrorView::new(error)),
        }
    }
}

impl<E> Classify<Result<(), E>> for Completable
where
    E: fmt::Display,
{
    fn classify(output: &Result<(), E>) -> Signal<'_> {
        match output {
            Ok(()) => Signal::Complete,
            Err(error) => Signal::Error(ErrorView::new(error)),
        }
    }
}

/// One observed lifecycle signal.
#[derive(Debug, Clone, Copy)]
pub enum Signal<'a> {
    /// A value; more may follow. `None` when the flavor does not render values.
    Next(Option<&'a dyn fmt::Debug>),
    /// The only value; the source is finished.
    Success(Option<&'a dyn fmt::Debug>),
    Error(ErrorView<'a>),
    Complete,
}

impl Signal<'_> {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Signal::Next(_))
    }

    pub(crate) fn value(&self) -> Option<&dyn fmt::Debug> {
        match self {
            Signal::Next(value) | Signal::Success(value) => *value,
            _ => None,
        }
    }
}

/// Borrowed upstream error plus its type name.
#[derive(Clone, Copy)]
pub struct ErrorView<'a> {
    error: &'a dyn fmt::Display,
    kind: &'static str,
}

impl<'a> ErrorView<'a> {
    pub fn new<E: fmt::Display>(error: &'a E) -> Self {
        Self {
            error,
            kind: short_type_name::<E>(),
        }
    }

    /// The error's message, or its type name when the message is empty.
    pub fn describe(&self) -> String {
        let message = self.error.to_string();
        if message.is_empty() {
            self.kind.to_string()
        } else {
            message
        }
    }
}

impl fmt::Debug for ErrorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorView")
            .field("kind", &self.kind)
            .field("message", &self.describe())
            .finish()
    }
}

/// Last path segment of a type name, without generic arguments.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
