//! `plansmith generate` command: synthesize KPIs, request a plan from the
//! generation service, and write the chart/CSV artifacts.

use anyhow::{Result, bail};

use plansmith_core::chart::{burndown, gantt};
use plansmith_core::{
    ArtifactPaths, GenerationClient, GenerationOutcome, ProjectParameters, build_plan_prompt,
    parse_plan_response, synthesize_kpis,
};

/// Run the full synthesis pipeline.
///
/// KPIs are synthesized and printed regardless of the generation call. On a
/// parse failure the raw response is shown and the command fails; no chart
/// artifacts are produced for that run.
pub async fn run_generate(
    params: &ProjectParameters,
    client: &dyn GenerationClient,
    paths: &ArtifactPaths,
) -> Result<()> {
    let kpis = synthesize_kpis(params, &mut rand::rng());
    println!("Generated KPIs:");
    println!("{kpis}");
    println!();
    println!("{}", serde_json::to_string_pretty(&kpis)?);
    println!();

    let prompt = build_plan_prompt(params);
    tracing::info!(client = client.name(), "requesting project plan");
    let raw = client.generate(&prompt).await;

    let plan = match parse_plan_response(&raw) {
        GenerationOutcome::Plan(plan) => plan,
        GenerationOutcome::Failure(failure) => {
            eprintln!("Raw response:");
            eprintln!("{}", failure.raw_text);
            bail!("could not produce a plan: {}", failure.reason);
        }
    };

    println!("Generated project plan:");
    println!("{}", serde_json::to_string_pretty(&plan)?);

    let csv_path = paths.gantt_csv();
    gantt::write_gantt_csv(&plan.gantt_tasks, &csv_path)?;
    println!("Gantt chart details saved to {}", csv_path.display());

    let gantt_path = paths.gantt_chart();
    gantt::render_gantt_chart(&plan.gantt_tasks, &gantt_path)?;
    println!("Gantt chart saved as {}", gantt_path.display());

    let series = burndown::compute_burndown(
        params.timeline_days,
        params.sprint_count,
        &mut rand::rng(),
    )?;
    let burndown_path = paths.burndown_chart();
    burndown::render_burndown_chart(&series, &burndown_path)?;
    println!("Burndown chart saved as {}", burndown_path.display());

    Ok(())
}
