//! Workflow states and transition destinations.
//!
//! States are identified by name within their area. A transition either
//! lands on a named state or leaves the process through the terminal
//! sentinel, which has no successor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker rendered in place of a state name for terminal transitions.
pub const TERMINAL_MARKER: &str = "None";

/// A named node of the workflow graph.
///
/// # Example
///
/// ```rust
/// use statusflow::core::State;
///
/// let draft = State::new("EMRASCUNHO").describe("Draft");
/// assert_eq!(draft.name(), "EMRASCUNHO");
/// assert_eq!(draft.description(), Some("Draft"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Attach a human-readable description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        State::new(name)
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        State::new(name)
    }
}

/// Where a transition leads.
///
/// Serialized as an optional state name: `null` (or an absent field) is the
/// terminal sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Destination {
    /// The transition lands on the named state.
    State(String),
    /// The transition leaves the process; there is no next state.
    #[default]
    Terminal,
}

impl Destination {
    pub fn state(name: impl Into<String>) -> Self {
        Destination::State(name.into())
    }

    /// Name of the destination state, `None` for the terminal sentinel.
    pub fn state_name(&self) -> Option<&str> {
        match self {
            Destination::State(name) => Some(name),
            Destination::Terminal => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Destination::Terminal)
    }
}

impl From<Option<String>> for Destination {
    fn from(name: Option<String>) -> Self {
        name.map_or(Destination::Terminal, Destination::State)
    }
}

impl From<Destination> for Option<String> {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::State(name) => Some(name),
            Destination::Terminal => None,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.state_name().unwrap_or(TERMINAL_MARKER))
    }
}
