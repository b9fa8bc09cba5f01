//! Caller-specific filtering of listed activities.

use crate::context::QueryContext;
use crate::core::Activity;

/// Narrows the activities a caller may see.
///
/// Invoked by [`WorkflowEngine::activities`](super::WorkflowEngine::activities)
/// after eligibility filtering. Implementations should keep the order of the
/// candidates they let through.
pub trait AccessControl: Send + Sync {
    fn permitted<'a>(
        &self,
        context: &QueryContext,
        candidates: Vec<&'a Activity>,
    ) -> Vec<&'a Activity>;
}

/// Access control from a per-activity predicate.
///
/// ```rust
/// use statusflow::engine::{AccessControl, PermitIf};
/// use statusflow::context::QueryContext;
/// use statusflow::core::Activity;
///
/// let no_deletes = PermitIf::new(|_: &QueryContext, activity: &Activity| {
///     !activity.operation().starts_with("Apagar")
/// });
/// # let _: &dyn AccessControl = &no_deletes;
/// ```
pub struct PermitIf<F> {
    predicate: F,
}

impl<F> PermitIf<F>
where
    F: Fn(&QueryContext, &Activity) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> AccessControl for PermitIf<F>
where
    F: Fn(&QueryContext, &Activity) -> bool + Send + Sync,
{
    fn permitted<'a>(
        &self,
        context: &QueryContext,
        candidates: Vec<&'a Activity>,
    ) -> Vec<&'a Activity> {
        candidates
            .into_iter()
            .filter(|activity| (self.predicate)(context, *activity))
            .collect()
    }
}
