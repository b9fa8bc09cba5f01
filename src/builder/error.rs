//! Build errors for graph, area and activity builders.

use crate::validation::DefinitionViolation;
use thiserror::Error;

/// Errors that can occur when building a workflow graph.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Activity operation not specified. Pass a non-empty name to ActivityBuilder::new")]
    MissingOperation,

    #[error("Area name not specified. Pass a non-empty name to AreaBuilder::new")]
    MissingAreaName,

    #[error("Workflow graph is invalid ({} violation(s)): {}", .0.len(), join(.0))]
    Invalid(Vec<DefinitionViolation>),
}

fn join(violations: &[DefinitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
