//! Anchors: what a gesture's coordinates are resolved against

use serde::{Deserialize, Serialize};
use std::fmt;
use touchwire_core_types::{ElementId, SessionId};

/// A located element inside a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementRef {
    pub session: SessionId,
    pub element: ElementId,
}

impl ElementRef {
    pub fn new(session: SessionId, element: ElementId) -> Self {
        Self { session, element }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session={} element={}", self.session, self.element)
    }
}

/// Invocation context handed to the executor together with every request
///
/// `Session` means steps without an `element` resolve against the viewport;
/// `Element` means they resolve against that element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum Anchor {
    Session { session: SessionId },
    Element(ElementRef),
}

impl Anchor {
    pub fn session(session: SessionId) -> Self {
        Anchor::Session { session }
    }

    pub fn element(element: ElementRef) -> Self {
        Anchor::Element(element)
    }

    pub fn session_id(&self) -> &SessionId {
        match self {
            Anchor::Session { session } => session,
            Anchor::Element(element) => &element.session,
        }
    }

    pub fn element_id(&self) -> Option<&ElementId> {
        match self {
            Anchor::Session { .. } => None,
            Anchor::Element(element) => Some(&element.element),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Session { session } => write!(f, "session={}", session),
            Anchor::Element(element) => write!(f, "{}", element),
        }
    }
}
