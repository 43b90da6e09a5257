//! Core data types for touch gestures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use touchwire_core_types::ElementId;

use crate::errors::TouchActionError;

/// Primitive touch operations that can be chained into a gesture
///
/// Parameter conventions understood by automation servers:
/// - press, longPress, tap: element, (x, y), or both
/// - moveTo: x and y
/// - wait: `ms`
/// - release: nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TouchPrimitive {
    Press,
    LongPress,
    Tap,
    MoveTo,
    Wait,
    Release,
}

impl TouchPrimitive {
    pub const ALL: [TouchPrimitive; 6] = [
        TouchPrimitive::Press,
        TouchPrimitive::LongPress,
        TouchPrimitive::Tap,
        TouchPrimitive::MoveTo,
        TouchPrimitive::Wait,
        TouchPrimitive::Release,
    ];

    /// Wire name of the primitive
    pub fn name(self) -> &'static str {
        match self {
            TouchPrimitive::Press => "press",
            TouchPrimitive::LongPress => "longPress",
            TouchPrimitive::Tap => "tap",
            TouchPrimitive::MoveTo => "moveTo",
            TouchPrimitive::Wait => "wait",
            TouchPrimitive::Release => "release",
        }
    }

    /// Whether servers interpret `x`/`y`/`element` for this primitive
    pub fn accepts_position(self) -> bool {
        matches!(
            self,
            TouchPrimitive::Press
                | TouchPrimitive::LongPress
                | TouchPrimitive::Tap
                | TouchPrimitive::MoveTo
        )
    }

    /// Whether servers interpret `ms` for this primitive
    pub fn accepts_duration(self) -> bool {
        matches!(self, TouchPrimitive::Wait)
    }
}

impl fmt::Display for TouchPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TouchPrimitive {
    type Err = TouchActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TouchPrimitive::ALL
            .into_iter()
            .find(|primitive| primitive.name() == s)
            .ok_or_else(|| TouchActionError::UnknownPrimitive(s.to_string()))
    }
}

/// Structured form of a step: `{ action, x?, y?, element?, ms?, count?, duration? }`
///
/// Keys outside this set are rejected, so a misspelled `X` cannot silently
/// turn into a step without an `x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepRecord {
    pub action: TouchPrimitive,

    /// Horizontal offset in pixels (viewport or anchor relative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,

    /// Vertical offset in pixels (viewport or anchor relative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,

    /// Element this step targets instead of the anchor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementId>,

    /// Duration in milliseconds, used by `wait`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms: Option<u64>,

    /// Number of taps, used by `tap`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    /// Hold time in milliseconds, used by `longPress`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl StepRecord {
    pub fn new(action: TouchPrimitive) -> Self {
        Self {
            action,
            x: None,
            y: None,
            element: None,
            ms: None,
            count: None,
            duration: None,
        }
    }

    pub fn at(mut self, x: i64, y: i64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn on(mut self, element: impl Into<ElementId>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn lasting(mut self, ms: u64) -> Self {
        self.ms = Some(ms);
        self
    }

    pub fn times(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn held_for(mut self, duration: u64) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;
        if let Some(x) = self.x {
            write!(f, " x={}", x)?;
        }
        if let Some(y) = self.y {
            write!(f, " y={}", y)?;
        }
        if let Some(element) = &self.element {
            write!(f, " element={}", element)?;
        }
        if let Some(ms) = self.ms {
            write!(f, " ms={}", ms)?;
        }
        if let Some(count) = self.count {
            write!(f, " count={}", count)?;
        }
        if let Some(duration) = self.duration {
            write!(f, " duration={}", duration)?;
        }
        Ok(())
    }
}

/// One step of a gesture, either a bare primitive name or a structured record
///
/// The two forms are kept apart; `"release"` and `{action: "release"}` stay
/// distinguishable all the way to the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionStep {
    Named(TouchPrimitive),
    Detailed(StepRecord),
}

impl ActionStep {
    pub fn primitive(&self) -> TouchPrimitive {
        match self {
            ActionStep::Named(primitive) => *primitive,
            ActionStep::Detailed(record) => record.action,
        }
    }
}

impl From<TouchPrimitive> for ActionStep {
    fn from(primitive: TouchPrimitive) -> Self {
        ActionStep::Named(primitive)
    }
}

impl From<StepRecord> for ActionStep {
    fn from(record: StepRecord) -> Self {
        ActionStep::Detailed(record)
    }
}

impl fmt::Display for ActionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionStep::Named(primitive) => write!(f, "{}", primitive),
            ActionStep::Detailed(record) => write!(f, "{}", record),
        }
    }
}

/// A single step or an ordered chain of steps executed as one gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GestureRequest {
    Sequence(Vec<ActionStep>),
    Single(ActionStep),
}

impl GestureRequest {
    /// Steps in execution order
    pub fn steps(&self) -> &[ActionStep] {
        match self {
            GestureRequest::Sequence(steps) => steps,
            GestureRequest::Single(step) => std::slice::from_ref(step),
        }
    }

    pub fn len(&self) -> usize {
        self.steps().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps().is_empty()
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, GestureRequest::Sequence(_))
    }
}

impl From<ActionStep> for GestureRequest {
    fn from(step: ActionStep) -> Self {
        GestureRequest::Single(step)
    }
}

impl From<TouchPrimitive> for GestureRequest {
    fn from(primitive: TouchPrimitive) -> Self {
        GestureRequest::Single(primitive.into())
    }
}

impl From<StepRecord> for GestureRequest {
    fn from(record: StepRecord) -> Self {
        GestureRequest::Single(record.into())
    }
}

impl From<Vec<ActionStep>> for GestureRequest {
    fn from(steps: Vec<ActionStep>) -> Self {
        GestureRequest::Sequence(steps)
    }
}

impl FromIterator<ActionStep> for GestureRequest {
    fn from_iter<I: IntoIterator<Item = ActionStep>>(iter: I) -> Self {
        GestureRequest::Sequence(iter.into_iter().collect())
    }
}
