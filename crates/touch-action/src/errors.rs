//! Error types for parsing touch primitives
//!
//! Gesture forwarding itself has no error kinds: failures come back as the
//! executor's own error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TouchActionError {
    /// Name does not match any known touch primitive
    #[error("Unknown touch primitive: {0}")]
    UnknownPrimitive(String),
}
