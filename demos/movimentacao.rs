//! Goods Movement Workflow
//!
//! This example loads the goods movement definition and queries it.
//!
//! Key concepts:
//! - Loading a JSON definition into a `WorkflowEngine`
//! - Listing available activities and resolving the next status
//! - Breadth and depth walks of everything reachable
//!
//! Run with: cargo run --example movimentacao

use statusflow::engine::WorkflowEngine;
use statusflow::matching::MatcherRegistry;
use statusflow::search::SearchMode;
use statusflow::visitor::DotExport;

const DEFINITION: &str = include_str!("../tests/fixtures/movimentacao.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Goods Movement Workflow ===\n");

    let engine = WorkflowEngine::from_json(DEFINITION, &MatcherRegistry::new())?;
    println!("Areas: {}", engine.list_areas().join(", "));
    println!(
        "Initial status of BarraBotoesPDM: {}\n",
        engine.initial_status("BarraBotoesPDM")?
    );

    // A deposit request, issued by the local unit
    let context = engine
        .context()
        .at("EMITIDO", "BarraBotoesPDM")
        .with_parameter("Finalidade", ["2"])
        .with_parameter("Orgao", ["1"]);

    println!("Available from EMITIDO:");
    for activity in engine.activities(&context, None)? {
        println!("  {} -> {}", activity.label(), activity.destination());
    }

    let next = engine.next_status(&context.clone().with_operation("SOLICITAR_CANCELAMENTO"))?;
    println!("\nSOLICITAR_CANCELAMENTO leads to {next}");

    // Everything a destruction request can reach
    let pad = engine
        .context()
        .at("PADEMITIDO", "BarraBotoesPAD")
        .with_parameter("Finalidade", ["3"])
        .with_parameter("Orgao", ["2"]);

    for mode in [SearchMode::Breadth, SearchMode::Depth] {
        println!("\n{mode} walk from PADEMITIDO:");
        for transition in engine.transitions(&pad, mode)? {
            println!("  {transition}");
        }
    }

    println!("\n{}", engine.run(&pad, SearchMode::Breadth, DotExport::new("BarraBotoesPAD"))?);

    Ok(())
}
