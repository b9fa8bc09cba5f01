//! The single eligibility test shared by the resolver and the walk.

use crate::context::{Parameters, QueryContext};
use crate::core::{Activity, Area, GraphModel};
use crate::matching::ConditionMatcher;
use std::borrow::Cow;
use tracing::warn;

/// Guard evaluation bound to one area and one parameter snapshot.
///
/// The evaluator (if any) runs once when this is built, so every activity
/// of a query is judged against the same parameters.
pub(crate) struct Eligibility<'a> {
    model: &'a GraphModel,
    area: &'a Area,
    parameters: Cow<'a, Parameters>,
    matcher: &'a dyn ConditionMatcher,
}

impl<'a> Eligibility<'a> {
    pub(crate) fn new(model: &'a GraphModel, area: &'a Area, context: &'a QueryContext) -> Self {
        Self {
            model,
            area,
            parameters: context.effective_parameters(),
            matcher: context.matcher(),
        }
    }

    /// Whether every condition of `activity` holds, in order.
    ///
    /// A condition name that resolves nowhere makes the activity ineligible
    /// rather than failing the query.
    pub(crate) fn guards_hold(&self, activity: &Activity) -> bool {
        activity.conditions().iter().all(|name| {
            match self.model.condition(Some(self.area), name) {
                Some(condition) => self.matcher.matches(condition, &self.parameters),
                None => {
                    warn!(
                        area = %self.area.name(),
                        operation = %activity.operation(),
                        condition = %name,
                        "unknown condition, activity treated as ineligible"
                    );
                    false
                }
            }
        })
    }
}
