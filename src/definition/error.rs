//! Definition loading error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while loading or saving a workflow definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Definition version is not supported by this version
    #[error("Unsupported definition version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Settings name a matcher the registry does not know
    #[error("Unknown matcher '{0}'")]
    UnknownMatcher(String),

    /// The definition parsed but does not form a valid graph
    #[error(transparent)]
    Build(#[from] BuildError),
}
