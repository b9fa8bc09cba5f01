//! Activities: guarded, directed transitions between states.

use super::state::Destination;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The state(s) an activity departs from.
///
/// Serialized as an optional state name: an absent `from` means the
/// activity departs from every state of its area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ActivitySource {
    /// Departs from exactly this state.
    State(String),
    /// Departs from any state of the area not listed in the exclusion set.
    #[default]
    Any,
}

impl ActivitySource {
    pub fn state(name: impl Into<String>) -> Self {
        ActivitySource::State(name.into())
    }

    pub fn state_name(&self) -> Option<&str> {
        match self {
            ActivitySource::State(name) => Some(name),
            ActivitySource::Any => None,
        }
    }

    pub fn includes(&self, state: &str) -> bool {
        match self {
            ActivitySource::State(name) => name == state,
            ActivitySource::Any => true,
        }
    }
}

impl From<Option<String>> for ActivitySource {
    fn from(name: Option<String>) -> Self {
        name.map_or(ActivitySource::Any, ActivitySource::State)
    }
}

impl From<ActivitySource> for Option<String> {
    fn from(source: ActivitySource) -> Self {
        match source {
            ActivitySource::State(name) => Some(name),
            ActivitySource::Any => None,
        }
    }
}

/// A directed edge of the workflow graph, labeled by an operation.
///
/// Activities are not unique: several may share a source state and an
/// operation, in which case their conditions tell them apart and definition
/// order breaks ties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub(crate) operation: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) from: ActivitySource,
    #[serde(default)]
    pub(crate) to: Destination,
    /// Names of the conditions that must all hold, in evaluation order.
    #[serde(default)]
    pub(crate) conditions: Vec<String>,
    /// Source states under which the activity is suppressed.
    #[serde(default)]
    pub(crate) but: BTreeSet<String>,
}

impl Activity {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Human-readable label: the description, falling back to the operation.
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.operation)
    }

    pub fn source(&self) -> &ActivitySource {
        &self.from
    }

    pub fn destination(&self) -> &Destination {
        &self.to
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn exclusions(&self) -> &BTreeSet<String> {
        &self.but
    }

    pub fn is_conditional(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Whether `state` is in the "but-not-from" set.
    pub fn excludes(&self, state: &str) -> bool {
        self.but.contains(state)
    }

    /// Whether the activity leaves `state`: the source includes it and the
    /// exclusion set does not suppress it. Conditions are not consulted.
    pub fn departs_from(&self, state: &str) -> bool {
        self.from.includes(state) && !self.excludes(state)
    }
}
