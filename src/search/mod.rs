//! Traversal of the reachable subgraph.
//!
//! A walk starts at one state of an area and reports every eligible
//! transition it reaches to a [`Visitor`], in an order fixed by the
//! [`SearchMode`]. Eligibility is the resolver's rule without the operation
//! filter: a walk follows every operation a state offers.
//!
//! Walks are cycle-safe. Each transition (an activity leaving a given
//! state) is reported at most once, so a walk ends after at most as many
//! visits as there are transitions reachable from the start.

mod breadth;
mod depth;

use crate::context::QueryContext;
use crate::core::{GraphModel, WorkflowError};
use crate::resolver::Eligibility;
use crate::visitor::Visitor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Order in which a walk discovers and reports transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// States are expanded once each in discovery order (FIFO). All
    /// eligible activities of a state are reported together.
    #[default]
    #[serde(alias = "width")]
    Breadth,
    /// After reporting a transition into a state, the walk descends into
    /// that state before finishing the current one. Transitions already
    /// reported are skipped on re-entry.
    Depth,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchMode::Breadth => "breadth",
            SearchMode::Depth => "depth",
        })
    }
}

impl FromStr for SearchMode {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "breadth" | "width" | "bfs" => Ok(SearchMode::Breadth),
            "depth" | "dfs" => Ok(SearchMode::Depth),
            other => Err(WorkflowError::InvalidArgument(format!(
                "unknown search mode '{other}'"
            ))),
        }
    }
}

/// Walk the subgraph reachable from `start` in `area`.
///
/// Unknown area or start state fail before the visitor sees anything.
/// `finish` is called exactly once and its value is returned.
///
/// # Example
///
/// ```rust
/// use statusflow::builder::{ActivityBuilder, AreaBuilder, GraphBuilder};
/// use statusflow::context::QueryContext;
/// use statusflow::search::{walk, SearchMode};
/// use statusflow::visitor::TransitionList;
///
/// let model = GraphBuilder::new()
///     .area(
///         AreaBuilder::new("Review")
///             .states(["Draft", "Submitted"])
///             .activity(ActivityBuilder::new("Submit").from("Draft").to("Submitted"))
///             .activity(ActivityBuilder::new("Revise").from("Submitted").to("Draft")),
///     )
///     .build()
///     .unwrap();
///
/// let transitions = walk(
///     &model,
///     "Review",
///     "Draft",
///     &QueryContext::new(),
///     SearchMode::Breadth,
///     TransitionList::new(),
/// )
/// .unwrap();
///
/// assert_eq!(
///     transitions,
///     vec!["Draft--[Submit]-->Submitted", "Submitted--[Revise]-->Draft"]
/// );
/// ```
pub fn walk<V: Visitor>(
    model: &GraphModel,
    area: &str,
    start: &str,
    context: &QueryContext,
    mode: SearchMode,
    mut visitor: V,
) -> Result<V::Output, WorkflowError> {
    let area = model.area(area)?;
    let start = area
        .state(start)
        .ok_or_else(|| WorkflowError::unknown_state(area.name(), start))?
        .name();

    debug!(area = %area.name(), start = %start, mode = %mode, "walk started");

    let eligibility = Eligibility::new(model, area, context);
    let reported = match mode {
        SearchMode::Breadth => breadth::walk(area, start, &eligibility, &mut visitor),
        SearchMode::Depth => depth::walk(area, start, &eligibility, &mut visitor),
    };

    debug!(area = %area.name(), start = %start, reported, "walk finished");

    Ok(visitor.finish())
}
