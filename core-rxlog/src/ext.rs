//! Fluent extension traits.
//!
//! ```ignore
//! use core_rxlog::{LogFutureExt, LogStreamExt};
//!
//! let search = logger.log("search");
//! let results = query_stream().logged(&search);
//! let user = fetch_user().logged_single(&logger.log_lifecycle("user"));
//! ```

use std::fmt;
use std::future::Future;

use futures_core::Stream;

use crate::flavor::{Completable, Maybe, Observable, Opaque, Single};
use crate::logged::Logged;
use crate::logger::LogTransformer;

/// Instruments a multi-value stream of `Result<T, E>` items.
pub trait LogStreamExt: Stream + Sized {
    fn logged<T, E>(self, transformer: &LogTransformer) -> Logged<Self, Observable>
    where
        Self: Stream<Item = Result<T, E>>,
        T: fmt::Debug,
        E: fmt::Display,
    {
        transformer.observable(self)
    }

    /// Like [`logged`](LogStreamExt::logged) for items without a `Debug` impl.
    fn logged_opaque<T, E>(self, transformer: &LogTransformer) -> Logged<Self, Opaque<Observable>>
    where
        Self: Stream<Item = Result<T, E>>,
        E: fmt::Display,
    {
        transformer.observable_opaque(self)
    }
}

impl<S: Stream> LogStreamExt for S {}

/// Instruments a future as one of the single-shot flavors.
///
/// The flavor is picked by the method, since a `Result<Option<T>, E>`
/// future may equally be a `Single` carrying an optional value.
pub trait LogFutureExt: Future + Sized {
    fn logged_single<T, E>(self, transformer: &LogTransformer) -> Logged<Self, Single>
    where
        Self: Future<Output = Result<T, E>>,
        T: fmt::Debug,
        E: fmt::Display,
    {
        transformer.single(self)
    }

    fn logged_maybe<T, E>(self, transformer: &LogTransformer) -> Logged<Self, Maybe>
    where
        Self: Future<Output = Result<Option<T>, E>>,
        T: fmt::Debug,
        E: fmt::Display,
    {
        transformer.maybe(self)
    }

    fn logged_single_opaque<T, E>(
        self,
        transformer: &LogTransformer,
    ) -> Logged<Self, Opaque<Single>>
    where
        Self: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        transformer.single_opaque(self)
    }

    fn logged_maybe_opaque<T, E>(
        self,
        transformer: &LogTransformer,
    ) -> Logged<Self, Opaque<Maybe>>
    where
        Self: Future<Output = Result<Option<T>, E>>,
        E: fmt::Display,
    {
        transformer.maybe_opaque(self)
    }

    fn logged_completable<E>(self, transformer: &LogTransformer) -> Logged<Self, Completable>
    where
        Self: Future<Output = Result<(), E>>,
        E: fmt::Display,
    {
        transformer.completable(self)
    }
}

impl<F: Future> LogFutureExt for F {}
