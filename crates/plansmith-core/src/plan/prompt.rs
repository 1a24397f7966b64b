//! Plan prompt construction.
//!
//! Assembles the project parameters into a prompt that pins down the exact
//! JSON shape the response parser expects. Pure string construction; the
//! parameters are validated by the caller, not here.

use crate::params::ProjectParameters;

/// Build the generation prompt for a project plan.
///
/// The prompt restates every parameter verbatim and spells out the target
/// JSON object, including exactly `sprint_count` keys under
/// `"SprintBreakdown"`.
pub fn build_plan_prompt(params: &ProjectParameters) -> String {
    let mut prompt = String::with_capacity(1024);

    prompt.push_str("Based on the following project details:\n");
    prompt.push_str(&format!("- Project Type: {}\n", params.project_type));
    prompt.push_str(&format!(
        "- Project Timeline: {} days\n",
        params.timeline_days
    ));
    prompt.push_str(&format!("- Team Size: {}\n", params.team_size));
    prompt.push_str(&format!("- Languages: {}\n", params.languages.join(", ")));
    prompt.push_str(&format!("- Number of Sprints: {}\n", params.sprint_count));

    prompt.push_str("\nReturn the following details as a JSON object:\n");
    prompt.push_str("{\n");
    prompt.push_str("    \"GanttChartDetails\": [\n");
    prompt.push_str("        {\n");
    prompt.push_str("            \"Task\": \"Task description\",\n");
    prompt.push_str("            \"Start\": \"Day X\",\n");
    prompt.push_str("            \"End\": \"Day Y\"\n");
    prompt.push_str("        }\n");
    prompt.push_str("    ],\n");
    prompt.push_str("    \"EmployeeCriteria\": [\n");
    prompt.push_str("        {\n");
    prompt.push_str("            \"role\": \"Role of the employee\",\n");
    prompt.push_str("            \"skills\": [\"List of required skills\"]\n");
    prompt.push_str("        }\n");
    prompt.push_str("    ],\n");
    prompt.push_str("    \"SprintBreakdown\": {\n");
    for sprint in 1..=params.sprint_count {
        let trailer = if sprint == params.sprint_count { "" } else { "," };
        prompt.push_str(&format!(
            "        \"Sprint {sprint}\": [\"List of tasks for Sprint {sprint}\"]{trailer}\n"
        ));
    }
    prompt.push_str("    }\n");
    prompt.push_str("}\n");

    prompt
}
