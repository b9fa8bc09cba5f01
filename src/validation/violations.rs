//! Definition violations reported by load-time validation.

use thiserror::Error;

/// One broken invariant of a workflow definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("area '{area}' is declared more than once")]
    DuplicateArea { area: String },

    #[error("state '{state}' is declared more than once in area '{area}'")]
    DuplicateState { area: String, state: String },

    #[error("condition '{condition}' is declared more than once in {scope}")]
    DuplicateCondition { scope: String, condition: String },

    #[error("state '{state}' in area '{area}' uses the name reserved for terminal transitions")]
    ReservedStateName { area: String, state: String },

    #[error("initial state '{state}' of area '{area}' is not declared")]
    UnknownInitialState { area: String, state: String },

    #[error("activity in area '{area}' has an empty operation")]
    EmptyOperation { area: String },

    #[error("activity '{operation}' in area '{area}' departs from undeclared state '{state}'")]
    UnknownSourceState {
        area: String,
        operation: String,
        state: String,
    },

    #[error("activity '{operation}' in area '{area}' leads to undeclared state '{state}'")]
    UnknownDestinationState {
        area: String,
        operation: String,
        state: String,
    },

    #[error("activity '{operation}' in area '{area}' excludes undeclared state '{state}'")]
    UnknownExcludedState {
        area: String,
        operation: String,
        state: String,
    },
}
