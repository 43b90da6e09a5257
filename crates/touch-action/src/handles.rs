use std::sync::Arc;
use touchwire_core_types::{ElementId, SessionId};

use crate::{
    anchor::ElementRef, commands, executor::GestureExecutor, types::GestureRequest,
};

/// An automation session bound to the executor that serves it
pub struct SessionHandle<E: ?Sized> {
    id: SessionId,
    executor: Arc<E>,
}

impl<E: GestureExecutor + ?Sized> SessionHandle<E> {
    pub fn new(id: SessionId, executor: Arc<E>) -> Self {
        Self { id, executor }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Handle for an element already located in this session
    pub fn element(&self, id: impl Into<ElementId>) -> ElementHandle<E> {
        ElementHandle {
            reference: ElementRef::new(self.id.clone(), id.into()),
            executor: Arc::clone(&self.executor),
        }
    }

    pub async fn touch_action(
        &self,
        request: impl Into<GestureRequest>,
    ) -> Result<E::Output, E::Error> {
        commands::browser::touch_action(self.executor.as_ref(), &self.id, request).await
    }
}

impl<E: ?Sized> Clone for SessionHandle<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            executor: Arc::clone(&self.executor),
        }
    }
}

/// A located element; gestures performed through it are anchored to it
pub struct ElementHandle<E: ?Sized> {
    reference: ElementRef,
    executor: Arc<E>,
}

impl<E: GestureExecutor + ?Sized> ElementHandle<E> {
    /// Id to put in another gesture's `element` field (e.g. a drop target)
    pub fn id(&self) -> &ElementId {
        &self.reference.element
    }

    pub async fn touch_action(
        &self,
        request: impl Into<GestureRequest>,
    ) -> Result<E::Output, E::Error> {
        commands::element::touch_action(self.executor.as_ref(), &self.reference, request).await
    }
}

impl<E: ?Sized> Clone for ElementHandle<E> {
    fn clone(&self) -> Self {
        Self {
            reference: self.reference.clone(),
            executor: Arc::clone(&self.executor),
        }
    }
}
