//! Builders for areas and whole workflow graphs.

use crate::builder::activity::ActivityBuilder;
use crate::builder::error::BuildError;
use crate::core::{Area, Condition, GraphModel, LookupMode, State};
use crate::validation;
use stillwater::validation::Validation;

/// Builder for one area: its states, activities and local conditions.
#[derive(Clone, Debug)]
pub struct AreaBuilder {
    name: String,
    initial: Option<String>,
    lookup: LookupMode,
    states: Vec<State>,
    activities: Vec<ActivityBuilder>,
    conditions: Vec<Condition>,
}

impl AreaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: None,
            lookup: LookupMode::Source,
            states: Vec::new(),
            activities: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Designate the state new processes start in (optional).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Accepts a bare name or a described [`State`].
    pub fn state(mut self, state: impl Into<State>) -> Self {
        self.states.push(state.into());
        self
    }

    /// Declare several states at once, in order.
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    pub fn lookup(mut self, lookup: LookupMode) -> Self {
        self.lookup = lookup;
        self
    }

    /// Declare a condition visible only inside this area.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add an activity. Definition order is kept and decides which match
    /// wins when several activities apply.
    pub fn activity(mut self, activity: ActivityBuilder) -> Self {
        self.activities.push(activity);
        self
    }

    /// Build the area without checking it against the rest of the graph.
    pub fn build(self) -> Result<Area, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::MissingAreaName);
        }

        let activities = self
            .activities
            .into_iter()
            .map(ActivityBuilder::build)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Area::new(
            self.name,
            self.initial,
            self.lookup,
            self.states,
            activities,
            self.conditions,
        ))
    }
}

/// Builder for a complete, validated [`GraphModel`].
///
/// `build` reports every broken invariant at once rather than stopping at
/// the first one.
///
/// # Example
///
/// ```
/// use statusflow::builder::{ActivityBuilder, AreaBuilder, GraphBuilder, BuildError};
///
/// let result = GraphBuilder::new()
///     .area(
///         AreaBuilder::new("Review")
///             .initial("Missing")
///             .state("Draft")
///             .activity(ActivityBuilder::new("Submit").from("Draft").to("Nowhere")),
///     )
///     .build();
///
/// match result {
///     Err(BuildError::Invalid(violations)) => assert_eq!(violations.len(), 2),
///     other => panic!("expected violations, got {other:?}"),
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    areas: Vec<AreaBuilder>,
    conditions: Vec<Condition>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a condition visible from every area.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add multiple global conditions at once.
    pub fn conditions(mut self, conditions: impl IntoIterator<Item = Condition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    pub fn area(mut self, area: AreaBuilder) -> Self {
        self.areas.push(area);
        self
    }

    /// Build and validate the graph.
    pub fn build(self) -> Result<GraphModel, BuildError> {
        let areas = self
            .areas
            .into_iter()
            .map(AreaBuilder::build)
            .collect::<Result<Vec<_>, _>>()?;

        assemble(areas, self.conditions)
    }
}

/// Validate prebuilt areas and index them into a model.
pub(crate) fn assemble(
    areas: Vec<Area>,
    conditions: Vec<Condition>,
) -> Result<GraphModel, BuildError> {
    match validation::validate(&areas, &conditions) {
        Validation::Success(()) => Ok(GraphModel::new(areas, conditions)),
        Validation::Failure(violations) => Err(BuildError::Invalid(
            violations.iter().cloned().collect(),
        )),
    }
}
