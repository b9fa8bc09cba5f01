//! Load-time invariant checking for workflow graphs.
//!
//! Every check yields a `Validation`, and the results are combined with
//! `Validation::all_vec`, so one pass reports every broken invariant of a
//! definition instead of only the first.
//!
//! Checked here:
//! - area names are unique, and state names are unique within an area
//! - no state takes the name rendered for terminal transitions
//! - global condition names are unique
//! - a designated initial state is one of the area's states
//! - activity operations are non-empty
//! - named sources, destinations and exclusions are states of the area
//!
//! Condition references are not checked: an activity guarded by an
//! undeclared condition loads, and is treated as ineligible when queried.

mod violations;

pub use violations::DefinitionViolation;

use crate::core::{Area, Condition, TERMINAL_MARKER};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single check, or of all of them.
pub type Checked = Validation<(), NonEmptyVec<DefinitionViolation>>;

/// Validate areas and global conditions before they are published.
pub fn validate(areas: &[Area], conditions: &[Condition]) -> Checked {
    let mut checks: Vec<Checked> = Vec::new();

    let mut area_names = HashSet::new();
    for area in areas {
        checks.push(check(area_names.insert(area.name()), || {
            DefinitionViolation::DuplicateArea {
                area: area.name().to_string(),
            }
        }));
        checks.push(validate_area(area));
    }

    let mut condition_names = HashSet::new();
    for condition in conditions {
        checks.push(check(condition_names.insert(condition.name()), || {
            DefinitionViolation::DuplicateCondition {
                scope: "global conditions".to_string(),
                condition: condition.name().to_string(),
            }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Validate one area on its own.
pub fn validate_area(area: &Area) -> Checked {
    let mut checks: Vec<Checked> = Vec::new();
    let name = area.name();

    let mut seen = HashSet::new();
    for state in area.states() {
        checks.push(check(seen.insert(state.name()), || {
            DefinitionViolation::DuplicateState {
                area: name.to_string(),
                state: state.name().to_string(),
            }
        }));
        checks.push(check(state.name() != TERMINAL_MARKER, || {
            DefinitionViolation::ReservedStateName {
                area: name.to_string(),
                state: state.name().to_string(),
            }
        }));
    }

    if let Some(initial) = area.initial_state() {
        checks.push(check(area.has_state(initial), || {
            DefinitionViolation::UnknownInitialState {
                area: name.to_string(),
                state: initial.to_string(),
            }
        }));
    }

    for activity in area.activities() {
        let operation = activity.operation();
        if operation.is_empty() {
            checks.push(Validation::fail(DefinitionViolation::EmptyOperation {
                area: name.to_string(),
            }));
        }

        if let Some(state) = activity.source().state_name() {
            checks.push(check(area.has_state(state), || {
                DefinitionViolation::UnknownSourceState {
                    area: name.to_string(),
                    operation: operation.to_string(),
                    state: state.to_string(),
                }
            }));
        }

        if let Some(state) = activity.destination().state_name() {
            checks.push(check(area.has_state(state), || {
                DefinitionViolation::UnknownDestinationState {
                    area: name.to_string(),
                    operation: operation.to_string(),
                    state: state.to_string(),
                }
            }));
        }

        for state in activity.exclusions() {
            checks.push(check(area.has_state(state), || {
                DefinitionViolation::UnknownExcludedState {
                    area: name.to_string(),
                    operation: operation.to_string(),
                    state: state.to_string(),
                }
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check(holds: bool, violation: impl FnOnce() -> DefinitionViolation) -> Checked {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ActivityBuilder, AreaBuilder};
    use crate::core::LookupMode;

    fn violations(result: Checked) -> Vec<DefinitionViolation> {
        match result {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn well_formed_area_passes() {
        let area = AreaBuilder::new("GridPDM")
            .initial("EMRASCUNHO")
            .states(["EMRASCUNHO", "EMANALISE"])
            .activity(
                ActivityBuilder::new("ALTERAR_ITEM_PDM")
                    .from("EMRASCUNHO")
                    .to("EMRASCUNHO"),
            )
            .activity(
                ActivityBuilder::new("CANCELAR")
                    .from_any()
                    .but(["EMANALISE"]),
            )
            .build()
            .unwrap();

        assert!(validate_area(&area).is_success());
    }

    #[test]
    fn unknown_source_and_destination_are_both_reported() {
        let area = AreaBuilder::new("BarraBotoesPDM")
            .state("EMITIDO")
            .activity(ActivityBuilder::new("EmitirPDM").from("AGUARDANDO").to("EMITIDO"))
            .activity(ActivityBuilder::new("AssumirPDM").from("EMITIDO").to("EMANALISE"))
            .build()
            .unwrap();

        assert_eq!(
            violations(validate_area(&area)),
            vec![
                DefinitionViolation::UnknownSourceState {
                    area: "BarraBotoesPDM".to_string(),
                    operation: "EmitirPDM".to_string(),
                    state: "AGUARDANDO".to_string(),
                },
                DefinitionViolation::UnknownDestinationState {
                    area: "BarraBotoesPDM".to_string(),
                    operation: "AssumirPDM".to_string(),
                    state: "EMANALISE".to_string(),
                },
            ]
        );
    }

    #[test]
    fn operation_only_area_is_held_to_the_same_rules() {
        let area = AreaBuilder::new("Automatico")
            .lookup(LookupMode::Operation)
            .state("CANCELADOPDM")
            .activity(ActivityBuilder::new("ULTIMO_ITEM_CANCELADO_PDM").to("CANCELADO"))
            .build()
            .unwrap();

        assert_eq!(violations(validate_area(&area)).len(), 1);
    }

    #[test]
    fn state_named_like_the_terminal_marker_is_rejected() {
        let area = AreaBuilder::new("Grid")
            .states(["S", "None"])
            .activity(ActivityBuilder::new("x").from("S").to("None"))
            .activity(ActivityBuilder::new("y").from("S"))
            .build()
            .unwrap();

        assert_eq!(
            violations(validate_area(&area)),
            vec![DefinitionViolation::ReservedStateName {
                area: "Grid".to_string(),
                state: "None".to_string(),
            }]
        );
    }

    #[test]
    fn undeclared_condition_references_are_allowed() {
        let area = AreaBuilder::new("PADOperation")
            .state("AGUARDAMOVIMENTAÇÃO")
            .activity(ActivityBuilder::new("LIBERAR").from_any().when("UNDECLARED"))
            .build()
            .unwrap();

        assert!(validate(&[area], &[]).is_success());
    }

    #[test]
    fn duplicate_global_conditions_are_reported() {
        let conditions = [
            Condition::new("DEPOSITO").require("Finalidade", ["2"]),
            Condition::new("DEPOSITO").require("Finalidade", ["3"]),
        ];

        let found = violations(validate(&[], &conditions));
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].to_string(),
            "condition 'DEPOSITO' is declared more than once in global conditions"
        );
    }
}
