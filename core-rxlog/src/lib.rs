//! # RxLog Core
//!
//! Lifecycle logging for asynchronous streams.
//!
//! ## Overview
//!
//! A tag plus a [`LogSelector`] turns into a [`LogTransformer`]. Applying it to
//! a stream or future wraps it in a [`Logged`] adapter that writes one entry
//! per selected lifecycle event (subscribe, each value, error, completion,
//! termination, dispose) and otherwise behaves exactly like the upstream.
//!
//! Four flavors are supported:
//!
//! | Flavor | Rust shape |
//! |--------|------------|
//! | [`Observable`] | `Stream<Item = Result<T, E>>` |
//! | [`Single`] | `Future<Output = Result<T, E>>` |
//! | [`Maybe`] | `Future<Output = Result<Option<T>, E>>` |
//! | [`Completable`] | `Future<Output = Result<(), E>>` |
//!
//! Events a flavor cannot emit are ignored, so any selector is valid for any
//! flavor. Rendering values requires `T: Debug`; payloads without one go
//! through the `*_opaque` entry points, which log values by occurrence only.
//!
//! ## Usage
//!
//! ```ignore
//! use core_rxlog::{LogSelector, LogStreamExt, RxLogConfig, RxLogger};
//!
//! let logger = RxLogger::new(RxLogConfig::builder().build()?);
//!
//! let ticks = interval_stream(period).map(Ok::<_, Infallible>).logged(&logger.log("ticks"));
//! let user = logger
//!     .log_with("user", LogSelector::ERROR | LogSelector::SUBSCRIBE)
//!     .single(fetch_user(id));
//! ```
//!
//! ## Guarantees
//!
//! - Values, errors and completion reach the consumer unchanged.
//! - A failing sink or a panicking `Debug` impl never affects the stream.
//! - Entries below the configured level are never formatted.

pub mod config;
pub mod error;
pub mod ext;
pub mod flavor;
pub mod logged;
pub mod logger;
pub mod selector;
mod tap;
pub mod taps;

pub use config::{RxLogConfig, RxLogConfigBuilder};
pub use error::{Error, Result};
pub use ext::{LogFutureExt, LogStreamExt};
pub use flavor::{
    Classify, Completable, Flavor, FlavorKind, Maybe, Observable, Opaque, Signal, Single,
};
pub use logged::Logged;
pub use logger::{LogTransformer, RxLogger};
pub use selector::{LogEvent, LogSelector, TapPlan};
