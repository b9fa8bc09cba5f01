//! The engine facade: one shared graph, the queries callers need.
//!
//! [`WorkflowEngine`] holds the published [`GraphModel`] behind a
//! [`GraphHandle`] and runs every query against a snapshot of it, so a
//! concurrent [`reload`](WorkflowEngine::reload) never changes the graph
//! under a query in flight.
//!
//! # Example
//!
//! ```rust
//! use statusflow::builder::{ActivityBuilder, AreaBuilder, GraphBuilder};
//! use statusflow::core::Destination;
//! use statusflow::engine::WorkflowEngine;
//! use statusflow::search::SearchMode;
//!
//! let model = GraphBuilder::new()
//!     .area(
//!         AreaBuilder::new("Review")
//!             .initial("Draft")
//!             .states(["Draft", "Submitted"])
//!             .activity(ActivityBuilder::new("Submit").from("Draft").to("Submitted"))
//!             .activity(ActivityBuilder::new("Delete").from("Draft")),
//!     )
//!     .build()?;
//! let engine = WorkflowEngine::new(model);
//!
//! let context = engine.context().at("Draft", "Review").with_operation("Submit");
//! assert_eq!(engine.next_status(&context)?, Destination::state("Submitted"));
//! assert_eq!(engine.initial_status("Review")?, "Draft");
//!
//! let transitions = engine.transitions(&context, SearchMode::Depth)?;
//! assert_eq!(transitions, vec!["Draft--[Submit]-->Submitted", "Draft--[Delete]-->None"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod access;
mod handle;

pub use access::{AccessControl, PermitIf};
pub use handle::GraphHandle;

use crate::context::{ParameterEvaluator, QueryContext};
use crate::core::{Activity, Destination, GraphModel, WorkflowError};
use crate::definition::{DefinitionError, WorkflowDefinition};
use crate::matching::{ConditionMatcher, ExactMatch, MatcherRegistry};
use crate::resolver;
use crate::search::{self, SearchMode};
use crate::visitor::{TransitionList, Visitor};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Facade over a loaded workflow graph.
pub struct WorkflowEngine {
    graph: GraphHandle,
    matcher: Arc<dyn ConditionMatcher>,
}

impl WorkflowEngine {
    /// Engine over `model` whose contexts match conditions exactly.
    pub fn new(model: GraphModel) -> Self {
        Self::with_matcher(model, Arc::new(ExactMatch))
    }

    pub fn with_matcher(model: GraphModel, matcher: Arc<dyn ConditionMatcher>) -> Self {
        Self {
            graph: GraphHandle::new(model),
            matcher,
        }
    }

    /// Build an engine from a definition, resolving its matcher setting
    /// through `registry`.
    pub fn from_definition(
        definition: WorkflowDefinition,
        registry: &MatcherRegistry,
    ) -> Result<Self, DefinitionError> {
        let matcher = definition.matcher(registry)?;
        let model = definition.into_model()?;
        Ok(Self::with_matcher(model, matcher))
    }

    pub fn from_json(json: &str, registry: &MatcherRegistry) -> Result<Self, DefinitionError> {
        Self::from_definition(WorkflowDefinition::from_json(json)?, registry)
    }

    /// Snapshot of the published model.
    pub fn model(&self) -> Arc<GraphModel> {
        self.graph.snapshot()
    }

    /// Default matcher handed to new contexts.
    pub fn matcher(&self) -> Arc<dyn ConditionMatcher> {
        Arc::clone(&self.matcher)
    }

    /// A fresh context carrying the engine's matcher.
    pub fn context(&self) -> QueryContext {
        QueryContext::with_strategy(self.matcher())
    }

    /// A fresh context with `evaluator` installed.
    pub fn context_with_evaluator(&self, evaluator: Arc<dyn ParameterEvaluator>) -> QueryContext {
        self.context().with_evaluator(evaluator)
    }

    /// Where the context's operation leads from its source state.
    pub fn next_status(&self, context: &QueryContext) -> Result<Destination, WorkflowError> {
        resolver::resolve_next(&self.graph.snapshot(), context)
    }

    /// Activities available from the context's source state, narrowed by
    /// `access` when one is supplied.
    pub fn activities(
        &self,
        context: &QueryContext,
        access: Option<&dyn AccessControl>,
    ) -> Result<Vec<Activity>, WorkflowError> {
        let model = self.graph.snapshot();
        let mut listed = resolver::list_activities(&model, context)?;

        if let Some(access) = access {
            let before = listed.len();
            listed = access.permitted(context, listed);
            debug!(
                area = %context.area(),
                before,
                after = listed.len(),
                "access control applied"
            );
        }

        Ok(listed.into_iter().cloned().collect())
    }

    /// The state new processes in `area` start in: the designated initial
    /// state, else the first declared one.
    pub fn initial_status(&self, area: &str) -> Result<String, WorkflowError> {
        let model = self.graph.snapshot();
        let area = model.area(area)?;

        area.initial_state()
            .or_else(|| area.states().first().map(|state| state.name()))
            .map(str::to_string)
            .ok_or_else(|| {
                WorkflowError::InvalidArgument(format!(
                    "area '{}' declares no states",
                    area.name()
                ))
            })
    }

    /// Walk from the context's source state in its area.
    pub fn run<V: Visitor>(
        &self,
        context: &QueryContext,
        mode: SearchMode,
        visitor: V,
    ) -> Result<V::Output, WorkflowError> {
        let model = self.graph.snapshot();
        search::walk(
            &model,
            context.area(),
            context.source_state(),
            context,
            mode,
            visitor,
        )
    }

    /// [`run`](Self::run) with the default [`TransitionList`] visitor.
    pub fn transitions(
        &self,
        context: &QueryContext,
        mode: SearchMode,
    ) -> Result<Vec<String>, WorkflowError> {
        self.run(context, mode, TransitionList::new())
    }

    pub fn list_areas(&self) -> Vec<String> {
        self.graph.snapshot().area_names()
    }

    /// Evaluate one named condition against the context.
    pub fn check_conditions(
        &self,
        name: &str,
        context: &QueryContext,
    ) -> Result<bool, WorkflowError> {
        resolver::check_conditions(&self.graph.snapshot(), name, context)
    }

    /// Label of the first activity carrying `operation`, in area then
    /// definition order.
    pub fn activity_description(&self, operation: &str) -> Option<String> {
        self.graph
            .snapshot()
            .find_activity(operation)
            .map(|(_, activity)| activity.label().to_string())
    }

    /// Publish a new model. Queries already running keep the old one.
    pub fn reload(&self, model: GraphModel) -> u64 {
        self.graph.replace(model)
    }

    /// Validate and publish a new definition. The matcher is unchanged.
    pub fn reload_definition(&self, definition: WorkflowDefinition) -> Result<u64, DefinitionError> {
        Ok(self.reload(definition.into_model()?))
    }

    pub fn generation(&self) -> u64 {
        self.graph.generation()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.graph.loaded_at()
    }
}

impl fmt::Debug for WorkflowEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkflowEngine")
            .field("graph", &self.graph)
            .field("matcher", &self.matcher.name())
            .finish()
    }
}
