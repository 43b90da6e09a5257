//! Touch gestures for mobile automation sessions
//!
//! This crate provides the typed surface for chaining touch primitives into gestures:
//! - 6 primitives: press, longPress, tap, moveTo, wait, release
//! - Session-scoped and element-scoped `touch_action` entry points
//! - The `GestureExecutor` seam that talks to the automation server
//!
//! The entry points forward requests verbatim; the executor owns validation and the wire protocol.

pub mod anchor;
pub mod commands;
pub mod errors;
pub mod executor;
mod handles;
pub mod recording;
pub mod trace;
pub mod types;

pub use anchor::*;
pub use errors::*;
pub use executor::*;
pub use handles::*;
pub use recording::*;
pub use types::*;

pub use touchwire_core_types::{ElementId, SessionId};
