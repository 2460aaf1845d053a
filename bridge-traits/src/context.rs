//! Execution context naming.
//!
//! Instrumented streams annotate some log lines with the name of the thread or
//! worker the signal was observed on. The name is opaque to the core; hosts may
//! substitute their own provider (for instance a fixed name in tests).

use std::thread;

use crate::platform::PlatformSendSync;

/// Reports a human-readable name for the current execution context.
pub trait ExecutionContext: PlatformSendSync {
    fn name(&self) -> String;
}

/// Names the current OS thread.
///
/// Unnamed threads fall back to their `ThreadId` debug representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadContext;

impl ExecutionContext for ThreadContext {
    fn name(&self) -> String {
        let current = thread::current();
        match current.name() {
            Some(name) => name.to_string(),
            None => format!("{:?}", current.id()),
        }
    }
}

/// Always reports the same name.
#[derive(Debug, Clone)]
pub struct FixedContext {
    name: String,
}

impl FixedContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ExecutionContext for FixedContext {
    fn name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_context_uses_thread_name() {
        let name = thread::Builder::new()
            .name("rx-worker".to_string())
            .spawn(|| ThreadContext.name())
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(name, "rx-worker");
    }

    #[test]
    fn test_thread_context_falls_back_to_id() {
        let name = thread::spawn(|| ThreadContext.name()).join().unwrap();
        assert!(name.starts_with("ThreadId("));
    }

    #[test]
    fn test_fixed_context() {
        let context = FixedContext::new("main");
        assert_eq!(context.name(), "main");
    }
}
