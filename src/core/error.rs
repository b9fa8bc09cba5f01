//! Errors reported by workflow queries.

use thiserror::Error;

/// Errors that can occur when querying a loaded workflow graph.
///
/// Every variant is reported synchronously to the caller. Nothing is
/// retried internally since queries perform no I/O.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Unknown area '{area}'")]
    UnknownArea { area: String },

    #[error("Unknown state '{state}' in area '{area}'")]
    UnknownState { area: String, state: String },

    #[error("Unknown condition '{condition}' in area '{area}'")]
    UnknownCondition { area: String, condition: String },

    #[error("No transition for operation '{operation}' from state '{from}' in area '{area}'")]
    NoTransition {
        area: String,
        operation: String,
        from: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl WorkflowError {
    pub(crate) fn unknown_area(area: &str) -> Self {
        Self::UnknownArea {
            area: area.to_string(),
        }
    }

    pub(crate) fn unknown_state(area: &str, state: &str) -> Self {
        Self::UnknownState {
            area: area.to_string(),
            state: state.to_string(),
        }
    }
}
