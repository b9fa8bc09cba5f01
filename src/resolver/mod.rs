//! Transition resolution.
//!
//! Given a query context, the resolver filters an area's activities down to
//! the applicable ones and picks the next state. Everything here is a pure
//! function of the graph and the context.
//!
//! Selection rules, applied in order:
//! 1. the activity departs from the context's source state (skipped for
//!    operation-only areas, where any state qualifies);
//! 2. its operation equals the context's operation, unless that is empty;
//! 3. its exclusion set does not contain the source state;
//! 4. all its conditions hold under the context's matcher.
//!
//! Matches keep the graph's definition order.

mod eligibility;

pub(crate) use eligibility::Eligibility;

use crate::context::QueryContext;
use crate::core::{Activity, Area, Destination, GraphModel, WorkflowError};
use tracing::debug;

/// Activities applicable under `context`, in definition order.
///
/// # Example
///
/// ```rust
/// use statusflow::builder::{ActivityBuilder, AreaBuilder, GraphBuilder};
/// use statusflow::context::QueryContext;
/// use statusflow::resolver::list_activities;
///
/// let model = GraphBuilder::new()
///     .area(
///         AreaBuilder::new("Review")
///             .initial("Draft")
///             .states(["Draft", "Submitted"])
///             .activity(ActivityBuilder::new("Submit").from("Draft").to("Submitted"))
///             .activity(ActivityBuilder::new("Delete").from("Draft")),
///     )
///     .build()
///     .unwrap();
///
/// let context = QueryContext::new().at("Draft", "Review");
/// let activities = list_activities(&model, &context).unwrap();
/// assert_eq!(activities.len(), 2);
/// ```
pub fn list_activities<'m>(
    model: &'m GraphModel,
    context: &QueryContext,
) -> Result<Vec<&'m Activity>, WorkflowError> {
    let area = model.area(context.area())?;
    let source = checked_source(area, context)?;
    let eligibility = Eligibility::new(model, area, context);
    let operation = context.operation();

    let selected: Vec<&'m Activity> = area
        .activities()
        .iter()
        .filter(|activity| area.is_operation_only() || activity.source().includes(source))
        .filter(|activity| operation.is_empty() || activity.operation() == operation)
        .filter(|activity| !activity.excludes(source))
        .filter(|activity| eligibility.guards_hold(activity))
        .collect();

    debug!(
        area = %area.name(),
        source = %source,
        operation = %operation,
        count = selected.len(),
        "listed activities"
    );

    Ok(selected)
}

/// The destination of the first applicable activity for the context's
/// operation.
///
/// Several activities may match; the first in definition order wins so the
/// answer is deterministic.
pub fn resolve_next(
    model: &GraphModel,
    context: &QueryContext,
) -> Result<Destination, WorkflowError> {
    if context.operation().is_empty() {
        return Err(WorkflowError::InvalidArgument(
            "an operation is required to resolve the next state".to_string(),
        ));
    }

    let candidates = list_activities(model, context)?;
    let Some(activity) = candidates.first() else {
        return Err(WorkflowError::NoTransition {
            area: context.area().to_string(),
            operation: context.operation().to_string(),
            from: context.source_state().to_string(),
        });
    };

    debug!(
        area = %context.area(),
        operation = %context.operation(),
        destination = %activity.destination(),
        "resolved next state"
    );

    Ok(activity.destination().clone())
}

/// Evaluate one named condition against the context.
///
/// The condition is looked up in the context's area first, then among the
/// model-wide conditions. An empty context area consults only the latter.
pub fn check_conditions(
    model: &GraphModel,
    name: &str,
    context: &QueryContext,
) -> Result<bool, WorkflowError> {
    let area = match context.area() {
        "" => None,
        area => Some(model.area(area)?),
    };

    let condition =
        model
            .condition(area, name)
            .ok_or_else(|| WorkflowError::UnknownCondition {
                area: context.area().to_string(),
                condition: name.to_string(),
            })?;

    Ok(context
        .matcher()
        .matches(condition, &context.effective_parameters()))
}

/// The source state the context names, checked against the area.
fn checked_source<'c>(area: &Area, context: &'c QueryContext) -> Result<&'c str, WorkflowError> {
    let source = context.source_state();

    if area.is_operation_only() {
        if !source.is_empty() && !area.has_state(source) {
            return Err(WorkflowError::unknown_state(area.name(), source));
        }
        return Ok(source);
    }

    if source.is_empty() {
        return Err(WorkflowError::InvalidArgument(format!(
            "a source state is required in area '{}'",
            area.name()
        )));
    }
    if !area.has_state(source) {
        return Err(WorkflowError::unknown_state(area.name(), source));
    }

    Ok(source)
}
