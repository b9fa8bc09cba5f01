//! Per-query context.
//!
//! A [`QueryContext`] names where a question is asked (area, source state),
//! what is being asked (operation) and the multi-valued parameters guards
//! are checked against. It also carries the matcher strategy and, optionally,
//! an evaluator that derives extra parameters.
//!
//! Contexts never own the graph; they refer to it by area and state names.
//! They are cheap to build per request and can be reused with [`reset`].
//!
//! [`reset`]: QueryContext::reset

mod evaluator;
mod parameters;

pub use evaluator::ParameterEvaluator;
pub use parameters::Parameters;

use crate::matching::{ConditionMatcher, ExactMatch};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Mutable bag of query inputs.
///
/// # Example
///
/// ```rust
/// use statusflow::context::QueryContext;
///
/// let context = QueryContext::new()
///     .at("EMITIDO", "BarraBotoesPDM")
///     .with_operation("SOLICITAR_CANCELAMENTO")
///     .with_parameter("Finalidade", ["2"])
///     .with_parameter("Orgao", ["1"]);
///
/// assert_eq!(context.area(), "BarraBotoesPDM");
/// assert_eq!(context.source_state(), "EMITIDO");
/// assert_eq!(context.len(), 2);
/// ```
#[derive(Clone)]
pub struct QueryContext {
    area: String,
    operation: String,
    source_state: String,
    parameters: Parameters,
    matcher: Arc<dyn ConditionMatcher>,
    evaluator: Option<Arc<dyn ParameterEvaluator>>,
}

impl QueryContext {
    /// An empty context using the exact matcher.
    pub fn new() -> Self {
        Self::with_strategy(Arc::new(ExactMatch))
    }

    /// An empty context using the given matcher.
    pub fn with_strategy(matcher: Arc<dyn ConditionMatcher>) -> Self {
        Self {
            area: String::new(),
            operation: String::new(),
            source_state: String::new(),
            parameters: Parameters::new(),
            matcher,
            evaluator: None,
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = operation.into();
        self
    }

    pub fn with_source_state(mut self, state: impl Into<String>) -> Self {
        self.source_state = state.into();
        self
    }

    /// Set source state and area together.
    pub fn at(self, state: impl Into<String>, area: impl Into<String>) -> Self {
        self.with_source_state(state).with_area(area)
    }

    pub fn with_parameter<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.parameters.insert(name, values);
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn ConditionMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_evaluator(mut self, evaluator: Arc<dyn ParameterEvaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// Clear area, operation, source state and parameters.
    ///
    /// The matcher and evaluator are kept so a configured context can be
    /// reused for the next query.
    pub fn reset(&mut self) -> &mut Self {
        self.area.clear();
        self.operation.clear();
        self.source_state.clear();
        self.parameters.clear();
        self
    }

    pub fn set_area(&mut self, area: impl Into<String>) -> &mut Self {
        self.area = area.into();
        self
    }

    pub fn set_operation(&mut self, operation: impl Into<String>) -> &mut Self {
        self.operation = operation.into();
        self
    }

    pub fn set_source_state(&mut self, state: impl Into<String>) -> &mut Self {
        self.source_state = state.into();
        self
    }

    pub fn set_matcher(&mut self, matcher: Arc<dyn ConditionMatcher>) -> &mut Self {
        self.matcher = matcher;
        self
    }

    pub fn set_evaluator(&mut self, evaluator: Option<Arc<dyn ParameterEvaluator>>) -> &mut Self {
        self.evaluator = evaluator;
        self
    }

    pub fn insert<I, V>(&mut self, name: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.parameters.insert(name, values);
        self
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn source_state(&self) -> &str {
        &self.source_state
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.parameters.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn matcher(&self) -> &dyn ConditionMatcher {
        self.matcher.as_ref()
    }

    pub fn has_evaluator(&self) -> bool {
        self.evaluator.is_some()
    }

    /// Parameters as guards see them: the evaluator's output when one is
    /// installed, the raw parameters otherwise.
    pub fn effective_parameters(&self) -> Cow<'_, Parameters> {
        match &self.evaluator {
            Some(evaluator) => {
                let mut derived = self.parameters.clone();
                evaluator.evaluate(&mut derived);
                Cow::Owned(derived)
            }
            None => Cow::Borrowed(&self.parameters),
        }
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext")
            .field("area", &self.area)
            .field("operation", &self.operation)
            .field("source_state", &self.source_state)
            .field("parameters", &self.parameters)
            .field("matcher", &self.matcher.name())
            .field("evaluator", &self.evaluator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::PartialMatch;

    #[test]
    fn new_context_is_empty_and_exact() {
        let context = QueryContext::new();
        assert_eq!(context.area(), "");
        assert_eq!(context.operation(), "");
        assert_eq!(context.source_state(), "");
        assert!(context.is_empty());
        assert_eq!(context.matcher().name(), "exact");
    }

    #[test]
    fn reset_keeps_strategy() {
        let mut context = QueryContext::new()
            .at("EMITIDO", "BarraBotoesPDM")
            .with_operation("AssumirPDM")
            .with_parameter("Orgao", ["1"])
            .with_matcher(Arc::new(PartialMatch));

        context.reset();

        assert_eq!(context.area(), "");
        assert_eq!(context.operation(), "");
        assert_eq!(context.source_state(), "");
        assert!(context.is_empty());
        assert_eq!(context.matcher().name(), "partial");
    }

    #[test]
    fn setters_chain_in_place() {
        let mut context = QueryContext::new();
        context
            .set_area("Automatico")
            .set_operation("ULTIMO_ITEM_CANCELADO_PDM")
            .insert("Finalidade", ["2"]);

        assert_eq!(context.area(), "Automatico");
        assert_eq!(context.get("Finalidade"), Some(&["2".to_string()][..]));
        assert_eq!(context.keys().collect::<Vec<_>>(), vec!["Finalidade"]);
    }

    #[test]
    fn evaluator_works_on_a_copy() {
        let context = QueryContext::new()
            .with_parameter("Finalidade", ["3"])
            .with_evaluator(Arc::new(|params: &mut Parameters| {
                params.insert("Orgao", ["1"]);
            }));

        let effective = context.effective_parameters();
        assert!(effective.contains("Orgao"));
        assert!(!context.parameters().contains("Orgao"));
    }

    #[test]
    fn without_evaluator_parameters_are_borrowed() {
        let context = QueryContext::new().with_parameter("Finalidade", ["3"]);
        assert!(matches!(context.effective_parameters(), Cow::Borrowed(_)));
    }
}
