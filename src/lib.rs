//! Statusflow: a read-only workflow graph engine
//!
//! A workflow is a set of named areas, each a small graph of states joined
//! by activities. Activities may be guarded by conditions over multi-valued
//! request parameters, and suppressed from listed source states. The engine
//! answers a handful of questions about a loaded graph and never changes it.
//!
//! # Core Concepts
//!
//! - **Area**: a named subgraph, e.g. one screen or one document type
//! - **Activity**: a guarded edge from a source state, possibly any state,
//!   to a destination state or out of the process
//! - **Condition**: parameter name to accepted values, AND across
//!   parameters and OR within one; a missing parameter never matches
//! - **Walk**: breadth or depth traversal of everything reachable, safe on
//!   cyclic graphs and reported through a visitor
//!
//! # Example
//!
//! ```rust
//! use statusflow::builder::{ActivityBuilder, AreaBuilder, GraphBuilder};
//! use statusflow::core::{Condition, Destination};
//! use statusflow::engine::WorkflowEngine;
//!
//! let model = GraphBuilder::new()
//!     .condition(Condition::new("NATIONAL").require("Finalidade", ["1", "2", "3"]))
//!     .area(
//!         AreaBuilder::new("Requests")
//!             .initial("Issued")
//!             .states(["Issued", "UnderReview", "Cancelled"])
//!             .activity(
//!                 ActivityBuilder::new("Take")
//!                     .from("Issued")
//!                     .to("UnderReview")
//!                     .when("NATIONAL"),
//!             )
//!             .activity(
//!                 ActivityBuilder::new("Cancel")
//!                     .from_any()
//!                     .but(["Cancelled"])
//!                     .to("Cancelled"),
//!             ),
//!     )
//!     .build()?;
//!
//! let engine = WorkflowEngine::new(model);
//! let context = engine
//!     .context()
//!     .at("Issued", "Requests")
//!     .with_parameter("Finalidade", ["2"]);
//!
//! assert_eq!(engine.activities(&context, None)?.len(), 2);
//! assert_eq!(
//!     engine.next_status(&context.clone().with_operation("Take"))?,
//!     Destination::state("UnderReview")
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod context;
pub mod core;
pub mod definition;
pub mod engine;
pub mod matching;
pub mod resolver;
pub mod search;
pub mod validation;
pub mod visitor;

// Re-export commonly used types
pub use builder::{ActivityBuilder, AreaBuilder, BuildError, GraphBuilder};
pub use context::{ParameterEvaluator, Parameters, QueryContext};
pub use crate::core::{
    Activity, ActivitySource, Area, Condition, Destination, GraphModel, LookupMode, State,
    WorkflowError,
};
pub use definition::{DefinitionError, WorkflowDefinition};
pub use engine::{AccessControl, GraphHandle, WorkflowEngine};
pub use matching::{ConditionMatcher, ExactMatch, MatcherRegistry, PartialMatch};
pub use search::SearchMode;
pub use visitor::{TransitionList, Visitor};
