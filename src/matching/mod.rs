//! Condition matching strategies.
//!
//! A matcher decides whether a [`Condition`] is satisfied by a context's
//! parameters. The query context carries the strategy to use, so callers can
//! swap semantics without touching the resolver or the traversal engine.
//!
//! All matchers must be pure: the same condition and parameter snapshot
//! always give the same answer, and nothing is mutated.
//!
//! # Example
//!
//! ```rust
//! use statusflow::context::Parameters;
//! use statusflow::core::Condition;
//! use statusflow::matching::{ConditionMatcher, ExactMatch};
//!
//! let destruction = Condition::new("DESTRUICAO")
//!     .require("Finalidade", ["3"])
//!     .require("Orgao", ["1", "2"]);
//!
//! let mut params = Parameters::new();
//! params.insert("Finalidade", ["3"]);
//! params.insert("Orgao", ["1"]);
//! assert!(ExactMatch.matches(&destruction, &params));
//!
//! params.insert("Finalidade", ["2"]);
//! assert!(!ExactMatch.matches(&destruction, &params));
//! ```

mod registry;

pub use registry::MatcherRegistry;

use crate::context::Parameters;
use crate::core::Condition;
use std::collections::BTreeSet;

/// Strategy for evaluating a condition against context parameters.
pub trait ConditionMatcher: Send + Sync {
    /// Name the strategy is registered under.
    fn name(&self) -> &str;

    /// Whether `condition` holds for `parameters`.
    fn matches(&self, condition: &Condition, parameters: &Parameters) -> bool;
}

/// Default strategy: AND across declared parameters, OR within each.
///
/// A parameter the condition declares but the context lacks fails the
/// match. Absence is never a wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactMatch;

impl ConditionMatcher for ExactMatch {
    fn name(&self) -> &str {
        "exact"
    }

    fn matches(&self, condition: &Condition, parameters: &Parameters) -> bool {
        condition.requirements().all(|(name, accepted)| {
            parameters
                .get(name)
                .is_some_and(|values| intersects(accepted, values))
        })
    }
}

/// Lenient strategy: parameters missing from the context are skipped.
///
/// Every parameter the context does supply must still intersect the
/// accepted values. Useful for previews where part of the context is not
/// known yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PartialMatch;

impl ConditionMatcher for PartialMatch {
    fn name(&self) -> &str {
        "partial"
    }

    fn matches(&self, condition: &Condition, parameters: &Parameters) -> bool {
        condition.requirements().all(|(name, accepted)| {
            parameters
                .get(name)
                .is_none_or(|values| intersects(accepted, values))
        })
    }
}

fn intersects(accepted: &BTreeSet<String>, values: &[String]) -> bool {
    values.iter().any(|v| accepted.contains(v))
}
