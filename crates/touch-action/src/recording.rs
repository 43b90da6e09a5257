//! Executor that records forwarded gestures and replays scripted results

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::anchor::Anchor;
use crate::executor::GestureExecutor;
use crate::types::GestureRequest;

/// Exactly what reached the executor for one call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardedGesture {
    pub anchor: Anchor,
    pub request: GestureRequest,
}

/// Records every call; answers with queued results, then `T::default()`
pub struct RecordingExecutor<T, E> {
    calls: Mutex<Vec<ForwardedGesture>>,
    responses: Mutex<VecDeque<Result<T, E>>>,
}

impl<T, E> RecordingExecutor<T, E> {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub fn respond_with(self, result: Result<T, E>) -> Self {
        self.push_response(result);
        self
    }

    pub fn push_response(&self, result: Result<T, E>) {
        self.responses.lock().push_back(result);
    }

    pub fn calls(&self) -> Vec<ForwardedGesture> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl<T, E> Default for RecordingExecutor<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T, E> GestureExecutor for RecordingExecutor<T, E>
where
    T: Default + Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    type Output = T;
    type Error = E;

    async fn perform_gesture(&self, anchor: Anchor, request: GestureRequest) -> Result<T, E> {
        self.calls.lock().push(ForwardedGesture { anchor, request });
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(T::default()))
    }
}
