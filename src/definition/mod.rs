//! Serializable workflow definitions.
//!
//! A [`WorkflowDefinition`] is the configuration form of a graph: areas,
//! their states and activities, and the conditions guarding them. It loads
//! from JSON or from a compact binary snapshot, and turns into a validated
//! [`GraphModel`] with [`WorkflowDefinition::into_model`].
//!
//! ```rust
//! use statusflow::definition::WorkflowDefinition;
//!
//! let json = r#"{
//!     "version": 1,
//!     "areas": [{
//!         "name": "Review",
//!         "initial": "Draft",
//!         "states": [{ "name": "Draft" }, { "name": "Submitted" }],
//!         "activities": [
//!             { "operation": "Submit", "from": "Draft", "to": "Submitted" },
//!             { "operation": "Delete", "from": "Draft" }
//!         ]
//!     }]
//! }"#;
//!
//! let model = WorkflowDefinition::from_json(json)?.into_model()?;
//! assert_eq!(model.area("Review")?.activities().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::builder::{self, BuildError};
use crate::core::{Activity, Area, Condition, GraphModel, LookupMode, State};
use crate::matching::{ConditionMatcher, MatcherRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod error;

pub use error::DefinitionError;

/// Version identifier for the definition format
pub const DEFINITION_VERSION: u32 = 1;

/// Matcher used when a definition does not name one
pub const DEFAULT_MATCHER: &str = "exact";

/// Engine settings carried by a definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the default condition matcher, resolved through a
    /// [`MatcherRegistry`]
    #[serde(default = "default_matcher")]
    pub matcher: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            matcher: default_matcher(),
        }
    }
}

fn default_matcher() -> String {
    DEFAULT_MATCHER.to_string()
}

/// One area as written in a definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaDefinition {
    pub name: String,

    #[serde(default)]
    pub initial: Option<String>,

    #[serde(default)]
    pub lookup: LookupMode,

    #[serde(default)]
    pub states: Vec<State>,

    /// Conditions visible only inside this area
    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl AreaDefinition {
    fn from_area(area: &Area) -> Self {
        let mut conditions: Vec<Condition> = area.local_conditions().cloned().collect();
        conditions.sort_by(|a, b| a.name().cmp(b.name()));

        Self {
            name: area.name().to_string(),
            initial: area.initial_state().map(str::to_string),
            lookup: area.lookup(),
            states: area.states().to_vec(),
            conditions,
            activities: area.activities().to_vec(),
        }
    }

    fn into_area(self) -> Result<Area, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::MissingAreaName);
        }
        Ok(Area::new(
            self.name,
            self.initial,
            self.lookup,
            self.states,
            self.activities,
            self.conditions,
        ))
    }
}

/// Serializable workflow definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    /// Definition format version
    pub version: u32,

    #[serde(default)]
    pub settings: Settings,

    /// Conditions visible from every area
    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub areas: Vec<AreaDefinition>,
}

impl Default for WorkflowDefinition {
    fn default() -> Self {
        Self {
            version: DEFINITION_VERSION,
            settings: Settings::default(),
            conditions: Vec::new(),
            areas: Vec::new(),
        }
    }
}

impl WorkflowDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a loaded model as a definition, e.g. to snapshot it.
    ///
    /// Conditions are written sorted by name.
    pub fn from_model(model: &GraphModel) -> Self {
        let mut conditions: Vec<Condition> = model.global_conditions().cloned().collect();
        conditions.sort_by(|a, b| a.name().cmp(b.name()));

        Self {
            conditions,
            areas: model.areas().iter().map(AreaDefinition::from_area).collect(),
            ..Self::default()
        }
    }

    /// Serialize definition to JSON format.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Deserialize definition from JSON format.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()?;
        Ok(definition)
    }

    /// Serialize definition to the compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, DefinitionError> {
        bincode::serialize(self).map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    /// Deserialize definition from the compact binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DefinitionError> {
        let definition: Self = bincode::deserialize(bytes)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()?;
        Ok(definition)
    }

    fn check_version(&self) -> Result<(), DefinitionError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }
        Ok(())
    }

    /// Resolve the default matcher named in the settings.
    pub fn matcher(
        &self,
        registry: &MatcherRegistry,
    ) -> Result<Arc<dyn ConditionMatcher>, DefinitionError> {
        registry
            .get(&self.settings.matcher)
            .ok_or_else(|| DefinitionError::UnknownMatcher(self.settings.matcher.clone()))
    }

    /// Validate the definition and index it into a model.
    pub fn into_model(self) -> Result<GraphModel, DefinitionError> {
        self.check_version()?;

        let areas = self
            .areas
            .into_iter()
            .map(AreaDefinition::into_area)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(builder::assemble(areas, self.conditions)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ActivityBuilder, AreaBuilder, GraphBuilder};
    use crate::validation::DefinitionViolation;

    const GRID: &str = r#"{
        "version": 1,
        "settings": { "matcher": "partial" },
        "conditions": [
            { "name": "DEPOSITO", "parameters": { "Finalidade": ["2"] } }
        ],
        "areas": [
            {
                "name": "GridPDM",
                "states": [{ "name": "EMRASCUNHO" }, { "name": "EMANALISE", "description": "Em análise" }],
                "conditions": [
                    { "name": "LOCAL", "parameters": { "Orgao": ["1"] } }
                ],
                "activities": [
                    { "operation": "ALTERAR_ITEM_PDM", "from": "EMRASCUNHO", "to": "EMRASCUNHO" },
                    { "operation": "CANCELAR_ITEM_PDM", "from": "EMANALISE", "to": "EMANALISE", "conditions": ["LOCAL"] }
                ]
            },
            {
                "name": "Automatico",
                "lookup": "operation",
                "states": [{ "name": "CANCELADOPDM" }],
                "activities": [
                    { "operation": "ULTIMO_ITEM_CANCELADO_PDM", "to": "CANCELADOPDM" }
                ]
            }
        ]
    }"#;

    #[test]
    fn json_definition_loads_into_model() {
        let definition = WorkflowDefinition::from_json(GRID).unwrap();
        assert_eq!(definition.settings.matcher, "partial");

        let model = definition.into_model().unwrap();
        let grid = model.area("GridPDM").unwrap();
        assert_eq!(grid.activities().len(), 2);
        assert!(grid.local_condition("LOCAL").is_some());
        assert_eq!(
            grid.state("EMANALISE").and_then(State::description),
            Some("Em análise")
        );
        assert!(model.area("Automatico").unwrap().is_operation_only());
        assert!(model.global_condition("DEPOSITO").is_some());
    }

    #[test]
    fn missing_settings_default_to_exact_matcher() {
        let definition = WorkflowDefinition::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(definition.settings.matcher, DEFAULT_MATCHER);

        let registry = MatcherRegistry::new();
        assert_eq!(definition.matcher(&registry).unwrap().name(), "exact");
    }

    #[test]
    fn unknown_matcher_is_rejected() {
        let mut definition = WorkflowDefinition::new();
        definition.settings.matcher = "fuzzy".to_string();

        let result = definition.matcher(&MatcherRegistry::new());
        assert!(matches!(result, Err(DefinitionError::UnknownMatcher(name)) if name == "fuzzy"));
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let result = WorkflowDefinition::from_json(r#"{ "version": 2 }"#);
        assert!(matches!(
            result,
            Err(DefinitionError::UnsupportedVersion {
                found: 2,
                supported: 1
            })
        ));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = WorkflowDefinition::from_json("{ not json");
        assert!(matches!(result, Err(DefinitionError::DeserializationFailed(_))));
    }

    #[test]
    fn invalid_graph_reports_violations() {
        let json = r#"{
            "version": 1,
            "areas": [{
                "name": "BarraBotoesPDM",
                "initial": "EMRASCUNHO",
                "states": [{ "name": "EMITIDO" }],
                "activities": [{ "operation": "", "from": "EMITIDO" }]
            }]
        }"#;

        let result = WorkflowDefinition::from_json(json).unwrap().into_model();
        match result {
            Err(DefinitionError::Build(BuildError::Invalid(violations))) => {
                assert_eq!(
                    violations,
                    vec![
                        DefinitionViolation::UnknownInitialState {
                            area: "BarraBotoesPDM".to_string(),
                            state: "EMRASCUNHO".to_string(),
                        },
                        DefinitionViolation::EmptyOperation {
                            area: "BarraBotoesPDM".to_string(),
                        },
                    ]
                );
            }
            other => panic!("expected violations, got {other:?}"),
        }
    }

    #[test]
    fn binary_snapshot_preserves_definition() {
        let model = GraphBuilder::new()
            .condition(Condition::new("DESTRUICAO").require("Finalidade", ["3"]))
            .area(
                AreaBuilder::new("PADOperation")
                    .states(["AGUARDAMOVIMENTAÇÃO", "AGUARDAMOVIMENTAÇÃODESTINO"])
                    .activity(
                        ActivityBuilder::new("LIBERAR_EXTINCAO")
                            .from_any()
                            .but(["AGUARDAMOVIMENTAÇÃO"])
                            .when("DESTRUICAO"),
                    ),
            )
            .build()
            .unwrap();

        let definition = WorkflowDefinition::from_model(&model);
        let bytes = definition.to_binary().unwrap();
        let restored = WorkflowDefinition::from_binary(&bytes).unwrap();
        assert_eq!(restored, definition);

        let json = definition.to_json().unwrap();
        assert_eq!(WorkflowDefinition::from_json(&json).unwrap(), definition);

        let rebuilt = restored.into_model().unwrap();
        let area = rebuilt.area("PADOperation").unwrap();
        assert_eq!(area.activities()[0].exclusions().len(), 1);
    }
}
