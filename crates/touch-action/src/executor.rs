//! The gesture-execution seam
//!
//! Implementations translate a forwarded request into automation-server calls
//! (touch/multi-action endpoints), resolve coordinates against the anchor, and
//! decide which requests are valid. Entry points never look inside.

use async_trait::async_trait;
use std::sync::Arc;

use crate::anchor::Anchor;
use crate::types::GestureRequest;

#[async_trait]
pub trait GestureExecutor: Send + Sync {
    /// Whatever the executor reports on success
    type Output: Send;

    /// Failures raised by the executor, returned to callers as-is
    type Error: std::error::Error + Send + Sync + 'static;

    async fn perform_gesture(
        &self,
        anchor: Anchor,
        request: GestureRequest,
    ) -> Result<Self::Output, Self::Error>;
}

#[async_trait]
impl<T> GestureExecutor for Arc<T>
where
    T: GestureExecutor + ?Sized,
{
    type Output = T::Output;
    type Error = T::Error;

    async fn perform_gesture(
        &self,
        anchor: Anchor,
        request: GestureRequest,
    ) -> Result<Self::Output, Self::Error> {
        (**self).perform_gesture(anchor, request).await
    }
}
