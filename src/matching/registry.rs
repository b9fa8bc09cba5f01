//! Matchers registered by name, resolved at configuration time.

use super::{ConditionMatcher, ExactMatch, PartialMatch};
use crate::core::WorkflowError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of matcher strategies keyed by their name.
///
/// Definitions name their default matcher as text; the registry turns that
/// name into a strategy value once, when the engine is configured.
#[derive(Clone)]
pub struct MatcherRegistry {
    matchers: HashMap<String, Arc<dyn ConditionMatcher>>,
}

impl MatcherRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self {
            matchers: HashMap::new(),
        }
    }

    /// A registry holding the built-in `exact` and `partial` strategies.
    pub fn new() -> Self {
        Self::empty().with(ExactMatch).with(PartialMatch)
    }

    /// Register a strategy under its own name, replacing any previous one.
    pub fn register(&mut self, matcher: Arc<dyn ConditionMatcher>) {
        self.matchers.insert(matcher.name().to_string(), matcher);
    }

    pub fn with<M: ConditionMatcher + 'static>(mut self, matcher: M) -> Self {
        self.register(Arc::new(matcher));
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ConditionMatcher>> {
        self.matchers.get(name).cloned()
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ConditionMatcher>, WorkflowError> {
        self.get(name)
            .ok_or_else(|| WorkflowError::InvalidArgument(format!("unknown matcher '{name}'")))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.matchers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherRegistry")
            .field("matchers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Parameters;
    use crate::core::Condition;

    struct Never;

    impl ConditionMatcher for Never {
        fn name(&self) -> &str {
            "never"
        }

        fn matches(&self, _condition: &Condition, _parameters: &Parameters) -> bool {
            false
        }
    }

    #[test]
    fn defaults_are_registered() {
        let registry = MatcherRegistry::new();
        assert_eq!(registry.names(), vec!["exact", "partial"]);
        assert_eq!(registry.resolve("exact").unwrap().name(), "exact");
    }

    #[test]
    fn unknown_name_is_invalid_argument() {
        let registry = MatcherRegistry::new();
        assert!(matches!(
            registry.resolve("fuzzy"),
            Err(WorkflowError::InvalidArgument(_))
        ));
    }

    #[test]
    fn custom_strategies_can_be_registered() {
        let registry = MatcherRegistry::empty().with(Never);
        let never = registry.resolve("never").unwrap();
        assert!(!never.matches(&Condition::new("ANY"), &Parameters::new()));
        assert!(registry.get("exact").is_none());
    }
}
