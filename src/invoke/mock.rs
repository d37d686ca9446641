//! Mock invoker for testing.
//!
//! Returns a canned result and records every request it receives.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{InvocationRequest, InvocationResult, Invoker};

/// Mock invoker that returns a fixed result without spawning anything.
///
/// Clones share the same call log, so a test can hand one clone to a
/// handler and inspect the calls through another.
#[derive(Debug, Clone)]
pub struct MockInvoker {
    /// Result returned for every call.
    result: InvocationResult,
    /// Requests received so far, in call order.
    calls: Arc<Mutex<Vec<InvocationRequest>>>,
}

impl Default for MockInvoker {
    fn default() -> Self {
        Self::succeeding("")
    }
}

impl MockInvoker {
    /// Creates a mock that answers every call with `result`.
    pub fn new(result: InvocationResult) -> Self {
        Self {
            result,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a mock whose calls succeed with `output`.
    pub fn succeeding(output: impl Into<String>) -> Self {
        Self::new(InvocationResult::success(output))
    }

    /// Creates a mock whose calls fail with `error_message`.
    pub fn failing(error_message: impl Into<String>) -> Self {
        Self::new(InvocationResult::failure(error_message))
    }

    /// Returns the requests received so far.
    pub fn calls(&self) -> Vec<InvocationRequest> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Returns how many times the mock was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Invoker for MockInvoker {
    async fn invoke(&self, request: InvocationRequest) -> InvocationResult {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }
        self.result.clone()
    }
}
