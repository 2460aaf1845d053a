//! Runtime-agnostic async helpers for RxLog.
//!
//! The instrumentation core never schedules anything itself; it only wraps
//! streams and futures that somebody else drives. This crate is the one place
//! the workspace touches an executor, so the demo and the test suites can drive
//! instrumented streams without depending on Tokio directly.
//!
//! # Modules
//!
//! - `runtime`: Blocking entry point (`block_on`) and runtime handles
//! - `task`: Task spawning and execution
//! - `time`: Sleep, timeout and interval streams
//!
//! # Examples
//!
//! ```rust
//! use core_async::task;
//! use core_async::time::{sleep, Duration};
//!
//! async fn example() {
//!     let handle = task::spawn(async {
//!         sleep(Duration::from_millis(10)).await;
//!         42
//!     });
//!
//!     assert_eq!(handle.await.unwrap(), 42);
//! }
//! ```

// Re-export the async entry-point/test macros so downstream crates never need
// direct Tokio dependencies.
pub use core_async_macros::{main, test};

pub mod runtime;
pub mod task;
pub mod time;

// Re-export commonly used types at crate root for convenience
pub use task::spawn;
pub use time::{interval_stream, sleep, Duration, Instant};
