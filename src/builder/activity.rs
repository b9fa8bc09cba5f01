//! Builder for constructing activities.

use crate::builder::error::BuildError;
use crate::core::{Activity, ActivitySource, Destination};
use std::collections::BTreeSet;

/// Builder for constructing activities with a fluent API.
///
/// Defaults mirror the definition format: no source means any state of the
/// area, no destination means the activity leaves the process.
#[derive(Clone, Debug)]
pub struct ActivityBuilder {
    operation: String,
    description: Option<String>,
    from: ActivitySource,
    to: Destination,
    conditions: Vec<String>,
    but: BTreeSet<String>,
}

impl ActivityBuilder {
    /// Create a new activity builder for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            description: None,
            from: ActivitySource::Any,
            to: Destination::Terminal,
            conditions: Vec::new(),
            but: BTreeSet::new(),
        }
    }

    /// Human-readable label used by visitors.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the source state.
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = ActivitySource::state(state);
        self
    }

    /// Depart from every state of the area.
    pub fn from_any(mut self) -> Self {
        self.from = ActivitySource::Any;
        self
    }

    /// Set the destination state.
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Destination::state(state);
        self
    }

    /// Leave the process instead of moving to a state.
    pub fn to_terminal(mut self) -> Self {
        self.to = Destination::Terminal;
        self
    }

    /// Guard the activity with a named condition. Repeated calls add
    /// guards; all of them must hold.
    pub fn when(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Suppress the activity from these source states.
    pub fn but<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.but.extend(states.into_iter().map(Into::into));
        self
    }

    /// Build the activity.
    pub fn build(self) -> Result<Activity, BuildError> {
        if self.operation.is_empty() {
            return Err(BuildError::MissingOperation);
        }

        Ok(Activity {
            operation: self.operation,
            description: self.description,
            from: self.from,
            to: self.to,
            conditions: self.conditions,
            but: self.but,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_operation() {
        let result = ActivityBuilder::new("").from("A").build();

        assert_eq!(result.unwrap_err(), BuildError::MissingOperation);
    }

    #[test]
    fn defaults_to_any_source_and_terminal() {
        let activity = ActivityBuilder::new("ULTIMO_ITEM_CANCELADO_PDM")
            .build()
            .unwrap();

        assert_eq!(activity.source(), &ActivitySource::Any);
        assert!(activity.destination().is_terminal());
        assert!(activity.description().is_none());
    }

    #[test]
    fn fluent_api_builds_activity() {
        let activity = ActivityBuilder::new("LIBERAR_EXTINCAO")
            .describe("Liberar Extinção")
            .from_any()
            .but(["AGUARDAMOVIMENTAÇÃO"])
            .when("DESTRUICAO")
            .when("EXTINCAO")
            .build()
            .unwrap();

        assert_eq!(activity.operation(), "LIBERAR_EXTINCAO");
        assert_eq!(activity.label(), "Liberar Extinção");
        assert_eq!(activity.conditions(), ["DESTRUICAO", "EXTINCAO"]);
        assert!(activity.excludes("AGUARDAMOVIMENTAÇÃO"));
        assert!(activity.is_conditional());
    }

    #[test]
    fn to_terminal_overrides_destination() {
        let activity = ActivityBuilder::new("ASSOCIAR_RT")
            .from("MOVIMENTAÇÃOAUTORIZADA")
            .to("SOMEWHERE")
            .to_terminal()
            .build()
            .unwrap();

        assert_eq!(activity.destination(), &Destination::Terminal);
    }
}
