//! Session-scoped touch action

use tracing::Instrument;
use touchwire_core_types::SessionId;

use crate::{
    anchor::Anchor, executor::GestureExecutor, trace::GestureTracer, types::GestureRequest,
};

/// Perform a gesture against the session viewport
///
/// Steps without `element` use viewport coordinates. A step's own `element`
/// makes its coordinates relative to that element.
pub async fn touch_action<E>(
    executor: &E,
    session: &SessionId,
    request: impl Into<GestureRequest>,
) -> Result<E::Output, E::Error>
where
    E: GestureExecutor + ?Sized,
{
    let anchor = Anchor::session(session.clone());
    let request = request.into();
    let span = GestureTracer.span("browser.touchAction", &anchor, &request);
    executor
        .perform_gesture(anchor, request)
        .instrument(span)
        .await
}
