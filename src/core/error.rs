//! # Navigation Errors
//!
//! The failure modes of the navigation core. A correctly wired menu never
//! produces any of these at runtime: they are configuration mistakes that
//! should surface at startup or in tests.

use thiserror::Error;

/// Errors raised by the navigation model and controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// A rendering path referenced a label the model does not define.
    #[error("unknown navigation label: {0:?}")]
    UnknownLabel(String),
    /// Two entries share the same label.
    #[error("duplicate navigation label: {0:?}")]
    DuplicateLabel(String),
    /// A configured entry is neither a valid simple nor a valid structured entry.
    #[error("invalid navigation entry {label:?}: {reason}")]
    InvalidEntry { label: String, reason: String },
    /// More than one label marked open on the same surface.
    #[error("inconsistent interaction state: {0}")]
    InconsistentState(String),
}
