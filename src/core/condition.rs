//! Named guards over context parameters.
//!
//! A condition maps parameter names to the set of values it accepts. How a
//! context is judged against those requirements belongs to the matcher
//! strategy (see [`crate::matching`]); the condition itself is plain data.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A named, multi-parameter guard.
///
/// Values listed for one parameter are alternatives (OR); distinct
/// parameters must all be satisfied (AND).
///
/// # Example
///
/// ```rust
/// use statusflow::core::Condition;
///
/// let destruction = Condition::new("DESTRUICAO")
///     .require("Finalidade", ["3"])
///     .require("Orgao", ["1", "2"]);
///
/// assert_eq!(destruction.name(), "DESTRUICAO");
/// assert!(destruction.accepts("Orgao", "2"));
/// assert!(!destruction.accepts("Finalidade", "2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    name: String,
    #[serde(default)]
    parameters: BTreeMap<String, BTreeSet<String>>,
}

impl Condition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Declare acceptable values for a parameter.
    ///
    /// Calling this twice for the same parameter widens the accepted set.
    pub fn require<I, V>(mut self, parameter: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.parameters
            .entry(parameter.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameters with their accepted values, in name order.
    pub fn requirements(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.parameters
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }

    /// Accepted values for one parameter, if the condition declares it.
    pub fn accepted(&self, parameter: &str) -> Option<&BTreeSet<String>> {
        self.parameters.get(parameter)
    }

    pub fn accepts(&self, parameter: &str, value: &str) -> bool {
        self.accepted(parameter)
            .is_some_and(|values| values.contains(value))
    }

    /// A condition that declares no parameter.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_accumulates_values() {
        let condition = Condition::new("C")
            .require("Orgao", ["1"])
            .require("Orgao", ["2"]);

        let values: Vec<_> = condition.accepted("Orgao").unwrap().iter().collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn requirements_are_listed_in_name_order() {
        let condition = Condition::new("C")
            .require("Orgao", ["1"])
            .require("Finalidade", ["3"]);

        let names: Vec<_> = condition.requirements().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Finalidade", "Orgao"]);
    }

    #[test]
    fn undeclared_parameter_is_not_accepted() {
        let condition = Condition::new("C").require("Finalidade", ["3"]);
        assert!(!condition.accepts("Orgao", "3"));
        assert!(Condition::new("EMPTY").is_empty());
    }

    #[test]
    fn condition_deserializes_from_json() {
        let condition: Condition = serde_json::from_str(
            r#"{"name": "DEPOSITO", "parameters": {"Finalidade": ["2"]}}"#,
        )
        .unwrap();
        assert!(condition.accepts("Finalidade", "2"));
    }
}
