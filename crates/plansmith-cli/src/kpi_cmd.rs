//! `plansmith kpis` command: standalone KPI synthesis, no generation call.

use anyhow::Result;

use plansmith_core::{ProjectParameters, synthesize_kpis};

/// Synthesize and print a KPI record for the given parameters.
pub fn run_kpis(params: &ProjectParameters) -> Result<()> {
    let kpis = synthesize_kpis(params, &mut rand::rng());
    println!("Generated KPIs:");
    println!("{kpis}");
    println!();
    println!("{}", serde_json::to_string_pretty(&kpis)?);
    Ok(())
}
