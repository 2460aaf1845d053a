//! Thread-safety helper bounds shared by every bridge trait.
//!
//! Sinks and context providers are held behind `Arc<dyn ...>` and invoked from
//! whichever executor thread polls an instrumented stream, so every bridge
//! implementation must be shareable across threads.

/// Marker trait for bridge implementations that may be shared across tasks.
pub trait PlatformSendSync: Send + Sync {}

impl<T> PlatformSendSync for T where T: Send + Sync {}
