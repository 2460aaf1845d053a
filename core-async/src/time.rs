//! Time-related abstractions.
//!
//! Re-exports `tokio::time` primitives and adds [`interval_stream`], a ticking
//! source shaped as a `futures` stream so it can be fed straight into stream
//! combinators and instrumentation.
//!
//! # Examples
//!
//! ```rust
//! use core_async::time::{sleep, Duration, Instant};
//!
//! async fn example() {
//!     let start = Instant::now();
//!
//!     sleep(Duration::from_millis(5)).await;
//!
//!     let elapsed = start.elapsed();
//!     println!("Took {:?}", elapsed);
//! }
//! ```

use futures::stream::{self, Stream};

pub use tokio::time::{interval, interval_at, sleep, timeout, Interval, Sleep, Timeout};

pub use std::time::{Duration, Instant};

/// Error returned by [`timeout`] when the deadline expires.
pub use tokio::time::error::Elapsed as TimeoutError;

/// Creates a stream that yields `0, 1, 2, ...`, one value per `period`.
///
/// The first value arrives after one full period rather than immediately.
///
/// # Examples
///
/// ```rust
/// use core_async::time::{interval_stream, Duration};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let ticks: Vec<u64> = interval_stream(Duration::from_millis(1))
///     .take(3)
///     .collect()
///     .await;
/// assert_eq!(ticks, vec![0, 1, 2]);
/// # }
/// ```
pub fn interval_stream(period: Duration) -> impl Stream<Item = u64> + Send {
    let start = tokio::time::Instant::now() + period;
    let ticker = interval_at(start, period);

    stream::unfold((ticker, 0u64), |(mut ticker, count)| async move {
        ticker.tick().await;
        Some((count, (ticker, count.wrapping_add(1))))
    })
}
