use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{oneshot, Mutex};
use tokio_test::{assert_pending, assert_ready, task};
use touch_action::{
    commands, ActionStep, Anchor, ElementRef, ForwardedGesture, GestureExecutor, GestureRequest,
    RecordingExecutor, SessionHandle, SessionId, StepRecord, TouchPrimitive,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
enum RemoteError {
    #[error("no such element: {0}")]
    NoSuchElement(String),
    #[error("invalid action: {0}")]
    InvalidAction(String),
}

type Recorder = RecordingExecutor<u32, RemoteError>;

fn session(executor: Arc<Recorder>) -> SessionHandle<Recorder> {
    SessionHandle::new(SessionId::from("session-1"), executor)
}

fn drag_request() -> GestureRequest {
    vec![
        StepRecord::new(TouchPrimitive::Press).at(200, 200).into(),
        StepRecord::new(TouchPrimitive::MoveTo).at(200, 300).into(),
        TouchPrimitive::Release.into(),
    ]
    .into()
}

#[tokio::test]
async fn session_drag_is_forwarded_once_in_order() {
    let executor = Arc::new(Recorder::new());
    let session = session(executor.clone());

    session.touch_action(drag_request()).await.unwrap();

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        ForwardedGesture {
            anchor: Anchor::session("session-1".into()),
            request: drag_request(),
        }
    );
    let names: Vec<_> = calls[0]
        .request
        .steps()
        .iter()
        .map(|step| step.primitive().name())
        .collect();
    assert_eq!(names, ["press", "moveTo", "release"]);
}

#[tokio::test]
async fn element_tap_is_anchored_to_the_element() {
    let executor = Arc::new(Recorder::new());
    let screen = session(executor.clone()).element("screen");

    screen.touch_action(TouchPrimitive::Tap).await.unwrap();
    screen
        .touch_action(StepRecord::new(TouchPrimitive::Tap).at(30, 20))
        .await
        .unwrap();

    let expected_anchor = Anchor::element(ElementRef::new("session-1".into(), "screen".into()));
    let calls = executor.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].anchor, expected_anchor);
    assert_eq!(
        calls[0].request,
        GestureRequest::Single(ActionStep::Named(TouchPrimitive::Tap))
    );
    assert_eq!(calls[1].anchor, expected_anchor);
    assert_eq!(
        calls[1].request,
        GestureRequest::Single(ActionStep::Detailed(StepRecord {
            action: TouchPrimitive::Tap,
            x: Some(30),
            y: Some(20),
            element: None,
            ms: None,
            count: None,
            duration: None,
        }))
    );
}

#[tokio::test]
async fn drag_to_other_element_keeps_step_target() {
    let executor = Arc::new(Recorder::new());
    let session = session(executor.clone());
    let source = session.element("source");
    let target = session.element("target");

    let request: GestureRequest = [
        ActionStep::from(TouchPrimitive::Press),
        StepRecord::new(TouchPrimitive::MoveTo)
            .on(target.id().clone())
            .into(),
        TouchPrimitive::Release.into(),
    ]
    .into_iter()
    .collect();
    source.touch_action(request.clone()).await.unwrap();

    let calls = executor.calls();
    assert_eq!(calls[0].anchor.session_id(), session.id());
    assert_eq!(calls[0].anchor.element_id().unwrap().as_str(), "source");
    assert_eq!(calls[0].request, request);
}

#[tokio::test]
async fn bare_and_structured_release_are_forwarded_distinctly() {
    let executor = Arc::new(Recorder::new());
    let session = session(executor.clone());

    session.touch_action(TouchPrimitive::Release).await.unwrap();
    session
        .touch_action(StepRecord::new(TouchPrimitive::Release))
        .await
        .unwrap();

    let calls = executor.calls();
    assert_eq!(
        calls[0].request,
        GestureRequest::Single(ActionStep::Named(TouchPrimitive::Release))
    );
    assert_eq!(
        calls[1].request,
        GestureRequest::Single(ActionStep::Detailed(StepRecord::new(
            TouchPrimitive::Release
        )))
    );
    assert_ne!(calls[0].request, calls[1].request);
}

#[tokio::test]
async fn executor_result_is_returned_unchanged() {
    let executor = Arc::new(Recorder::new().respond_with(Ok(42)));
    let value = session(executor).touch_action(TouchPrimitive::Tap).await;
    assert_eq!(value, Ok(42));
}

#[tokio::test]
async fn executor_errors_propagate_unchanged() {
    let executor = Arc::new(
        Recorder::new()
            .respond_with(Err(RemoteError::NoSuchElement("ghost".into())))
            .respond_with(Err(RemoteError::InvalidAction("moveTo without x".into()))),
    );
    let session = session(executor.clone());

    let err = session
        .element("ghost")
        .touch_action(TouchPrimitive::Tap)
        .await
        .unwrap_err();
    assert_eq!(err, RemoteError::NoSuchElement("ghost".into()));

    let err = session
        .touch_action(StepRecord::new(TouchPrimitive::MoveTo))
        .await
        .unwrap_err();
    assert_eq!(err, RemoteError::InvalidAction("moveTo without x".into()));
    assert_eq!(executor.call_count(), 2);
}

#[tokio::test]
async fn empty_sequence_reaches_the_executor() {
    let executor = Arc::new(Recorder::new());
    session(executor.clone())
        .touch_action(GestureRequest::Sequence(Vec::new()))
        .await
        .unwrap();
    assert_eq!(executor.calls()[0].request, GestureRequest::Sequence(Vec::new()));
}

#[tokio::test]
async fn free_functions_take_the_anchor_explicitly() {
    let executor = Recorder::new();
    let session_id = SessionId::from("s-2");
    let element = ElementRef::new(session_id.clone(), "e-3".into());

    commands::browser::touch_action(&executor, &session_id, TouchPrimitive::Release)
        .await
        .unwrap();
    commands::element::touch_action(&executor, &element, TouchPrimitive::Release)
        .await
        .unwrap();

    let calls = executor.calls();
    assert_eq!(calls[0].anchor, Anchor::session(session_id));
    assert_eq!(calls[1].anchor, Anchor::element(element));
}

/// Holds each call open until the test releases it.
struct GatedExecutor {
    gate: Mutex<Option<oneshot::Receiver<Result<&'static str, RemoteError>>>>,
}

#[async_trait]
impl GestureExecutor for GatedExecutor {
    type Output = &'static str;
    type Error = RemoteError;

    async fn perform_gesture(
        &self,
        _anchor: Anchor,
        _request: GestureRequest,
    ) -> Result<&'static str, RemoteError> {
        let gate = self.gate.lock().await.take().expect("gate already used");
        gate.await.expect("gate sender dropped")
    }
}

#[test]
fn entry_point_stays_pending_until_executor_resolves() {
    let (tx, rx) = oneshot::channel();
    let executor = Arc::new(GatedExecutor {
        gate: Mutex::new(Some(rx)),
    });
    let session = SessionHandle::new(SessionId::from("s-async"), executor);

    let mut call = task::spawn(session.touch_action(TouchPrimitive::Tap));
    assert_pending!(call.poll());
    assert_pending!(call.poll());

    tx.send(Ok("done")).unwrap();
    assert!(call.is_woken());
    let result = assert_ready!(call.poll());
    assert_eq!(result, Ok("done"));
}

#[test]
fn entry_point_resolves_with_executor_error_when_released() {
    let (tx, rx) = oneshot::channel();
    let executor = Arc::new(GatedExecutor {
        gate: Mutex::new(Some(rx)),
    });
    let session = SessionHandle::new(SessionId::from("s-async"), executor);
    let element = session.element("e-1");

    let mut call = task::spawn(element.touch_action(TouchPrimitive::LongPress));
    assert_pending!(call.poll());

    tx.send(Err(RemoteError::NoSuchElement("e-1".into())))
        .unwrap();
    let result = assert_ready!(call.poll());
    assert_eq!(result, Err(RemoteError::NoSuchElement("e-1".into())));
}
