//! The loaded, read-only workflow graph.

use super::activity::Activity;
use super::area::Area;
use super::condition::Condition;
use super::error::WorkflowError;
use std::collections::HashMap;

/// The whole workflow definition after loading.
///
/// A model is never mutated once built. Queries borrow it; reloads replace
/// it wholesale (see [`crate::engine::GraphHandle`]).
#[derive(Clone, Debug, Default)]
pub struct GraphModel {
    areas: Vec<Area>,
    area_index: HashMap<String, usize>,
    conditions: HashMap<String, Condition>,
}

impl GraphModel {
    pub(crate) fn new(areas: Vec<Area>, conditions: Vec<Condition>) -> Self {
        let area_index = areas
            .iter()
            .enumerate()
            .map(|(i, area)| (area.name().to_string(), i))
            .collect();
        let conditions = conditions
            .into_iter()
            .map(|c| (c.name().to_string(), c))
            .collect();

        Self {
            areas,
            area_index,
            conditions,
        }
    }

    /// Look up an area by name.
    pub fn area(&self, name: &str) -> Result<&Area, WorkflowError> {
        self.area_index
            .get(name)
            .map(|&i| &self.areas[i])
            .ok_or_else(|| WorkflowError::unknown_area(name))
    }

    /// Areas in definition order.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn area_names(&self) -> Vec<String> {
        self.areas.iter().map(|a| a.name().to_string()).collect()
    }

    /// Resolve a condition name: the area's local conditions first, then
    /// the model-wide ones.
    pub fn condition<'a>(&'a self, area: Option<&'a Area>, name: &str) -> Option<&'a Condition> {
        area.and_then(|a| a.local_condition(name))
            .or_else(|| self.conditions.get(name))
    }

    pub fn global_condition(&self, name: &str) -> Option<&Condition> {
        self.conditions.get(name)
    }

    /// Model-wide conditions, in no particular order.
    pub fn global_conditions(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.values()
    }

    /// First activity carrying `operation`, scanning areas then activities
    /// in definition order.
    pub fn find_activity(&self, operation: &str) -> Option<(&Area, &Activity)> {
        self.areas.iter().find_map(|area| {
            area.activities()
                .iter()
                .find(|a| a.operation() == operation)
                .map(|a| (area, a))
        })
    }

    pub fn activity_count(&self) -> usize {
        self.areas.iter().map(|a| a.activities().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ActivityBuilder, AreaBuilder, GraphBuilder};

    fn model() -> GraphModel {
        GraphBuilder::new()
            .condition(Condition::new("SHARED").require("Orgao", ["1"]))
            .area(
                AreaBuilder::new("First")
                    .state("A")
                    .state("B")
                    .condition(Condition::new("SHARED").require("Orgao", ["2"]))
                    .activity(ActivityBuilder::new("GO").from("A").to("B")),
            )
            .area(
                AreaBuilder::new("Second")
                    .state("X")
                    .activity(ActivityBuilder::new("GO").describe("Second go").from("X")),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn unknown_area_is_an_error() {
        let model = model();
        assert!(model.area("First").is_ok());
        assert_eq!(
            model.area("Missing").unwrap_err(),
            WorkflowError::UnknownArea {
                area: "Missing".to_string()
            }
        );
    }

    #[test]
    fn local_condition_shadows_global() {
        let model = model();
        let first = model.area("First").unwrap();
        let second = model.area("Second").unwrap();

        assert!(model.condition(Some(first), "SHARED").unwrap().accepts("Orgao", "2"));
        assert!(model.condition(Some(second), "SHARED").unwrap().accepts("Orgao", "1"));
        assert!(model.condition(None, "SHARED").unwrap().accepts("Orgao", "1"));
        assert!(model.condition(None, "MISSING").is_none());
    }

    #[test]
    fn condition_resolves_against_an_area_outside_the_model() {
        let model = model();
        let detached = AreaBuilder::new("Detached")
            .state("A")
            .condition(Condition::new("LOCAL").require("Perfil", ["gestor"]))
            .build()
            .unwrap();

        let local = model.condition(Some(&detached), "LOCAL");
        assert!(local.is_some_and(|c| c.accepts("Perfil", "gestor")));
        assert!(model.condition(Some(&detached), "SHARED").is_some());
    }

    #[test]
    fn find_activity_scans_in_definition_order() {
        let model = model();
        let (area, activity) = model.find_activity("GO").unwrap();
        assert_eq!(area.name(), "First");
        assert_eq!(activity.label(), "GO");
        assert!(model.find_activity("NONE").is_none());
        assert_eq!(model.activity_count(), 2);
    }

    #[test]
    fn area_names_follow_definition_order() {
        assert_eq!(model().area_names(), vec!["First", "Second"]);
    }
}
