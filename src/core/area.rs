//! Areas: named subgraphs owning states, activities and local conditions.

use super::activity::Activity;
use super::condition::Condition;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How the resolver selects candidate activities within an area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Candidates must depart from the context's source state.
    #[default]
    Source,
    /// Candidates are selected by operation alone, across all states.
    /// Used by pseudo-areas of automatic transitions where the caller
    /// knows the operation but has no meaningful source state.
    Operation,
}

/// A named, immutable subgraph of the workflow.
#[derive(Clone, Debug)]
pub struct Area {
    name: String,
    initial: Option<String>,
    lookup: LookupMode,
    states: Vec<State>,
    state_names: HashSet<String>,
    activities: Vec<Activity>,
    conditions: HashMap<String, Condition>,
}

impl Area {
    /// Assemble an area. Callers are expected to have validated the parts;
    /// see [`crate::builder::GraphBuilder::build`].
    pub(crate) fn new(
        name: String,
        initial: Option<String>,
        lookup: LookupMode,
        states: Vec<State>,
        activities: Vec<Activity>,
        conditions: Vec<Condition>,
    ) -> Self {
        let state_names = states.iter().map(|s| s.name().to_string()).collect();
        let conditions = conditions
            .into_iter()
            .map(|c| (c.name().to_string(), c))
            .collect();

        Self {
            name,
            initial,
            lookup,
            states,
            state_names,
            activities,
            conditions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The designated starting state, if the definition names one.
    pub fn initial_state(&self) -> Option<&str> {
        self.initial.as_deref()
    }

    pub fn lookup(&self) -> LookupMode {
        self.lookup
    }

    pub fn is_operation_only(&self) -> bool {
        self.lookup == LookupMode::Operation
    }

    /// States in definition order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.state_names.contains(name)
    }

    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|s| s.name() == name)
    }

    /// Activities in definition order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Activities leaving `state`, with their definition index.
    /// Exclusion sets are honoured; conditions are not evaluated.
    pub fn departures<'a>(
        &'a self,
        state: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Activity)> + 'a {
        self.activities
            .iter()
            .enumerate()
            .filter(move |(_, activity)| activity.departs_from(state))
    }

    /// Condition declared locally in this area.
    pub fn local_condition(&self, name: &str) -> Option<&Condition> {
        self.conditions.get(name)
    }

    pub fn local_conditions(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.values()
    }
}
