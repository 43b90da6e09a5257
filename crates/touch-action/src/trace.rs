use tracing::{span, Level, Span};

use crate::anchor::Anchor;
use crate::types::GestureRequest;

#[derive(Clone, Default)]
pub struct GestureTracer;

impl GestureTracer {
    pub fn span(&self, command: &'static str, anchor: &Anchor, request: &GestureRequest) -> Span {
        span!(
            Level::INFO,
            "touch.gesture",
            command = command,
            anchor = %anchor,
            steps = request.len()
        )
    }
}
