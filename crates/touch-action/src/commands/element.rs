//! Element-scoped touch action

use tracing::Instrument;

use crate::{
    anchor::{Anchor, ElementRef},
    executor::GestureExecutor,
    trace::GestureTracer,
    types::GestureRequest,
};

/// Perform a gesture anchored to `element`
///
/// Steps that omit coordinates and `element` act on the anchor element;
/// `x`/`y` alone are offsets from it.
pub async fn touch_action<E>(
    executor: &E,
    element: &ElementRef,
    request: impl Into<GestureRequest>,
) -> Result<E::Output, E::Error>
where
    E: GestureExecutor + ?Sized,
{
    let anchor = Anchor::element(element.clone());
    let request = request.into();
    let span = GestureTracer.span("element.touchAction", &anchor, &request);
    executor
        .perform_gesture(anchor, request)
        .instrument(span)
        .await
}
