//! Executor that accepts every gesture without contacting a server

use async_trait::async_trait;
use std::convert::Infallible;
use touch_action::{Anchor, ForwardedGesture, GestureExecutor, GestureRequest};
use tracing::{debug, info};

/// Logs each step and echoes the forwarded payload back
#[derive(Clone, Copy, Debug, Default)]
pub struct DryRunExecutor;

#[async_trait]
impl GestureExecutor for DryRunExecutor {
    type Output = ForwardedGesture;
    type Error = Infallible;

    async fn perform_gesture(
        &self,
        anchor: Anchor,
        request: GestureRequest,
    ) -> Result<ForwardedGesture, Infallible> {
        for (index, step) in request.steps().iter().enumerate() {
            debug!(index, step = %step, "dry-run step");
        }
        info!(
            anchor = %anchor,
            steps = request.len(),
            sequence = request.is_sequence(),
            "Dry-run gesture accepted"
        );
        Ok(ForwardedGesture { anchor, request })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use touch_action::{SessionHandle, SessionId, StepRecord, TouchPrimitive};

    #[tokio::test]
    async fn element_tap_echoes_anchor_and_request() {
        let session = SessionHandle::new(SessionId::from("s-1"), Arc::new(DryRunExecutor));
        let forwarded = session
            .element("screen")
            .touch_action(StepRecord::new(TouchPrimitive::Tap).at(30, 20))
            .await
            .unwrap();

        assert_eq!(forwarded.anchor.element_id().unwrap().as_str(), "screen");
        assert_eq!(
            forwarded.request,
            StepRecord::new(TouchPrimitive::Tap).at(30, 20).into()
        );
    }
}
