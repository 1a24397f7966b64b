//! Wire-format types for the generation service's JSON output.
//!
//! These types map directly to the JSON shape the prompt asks for and are
//! deserialized via `serde` + `serde_json`. Key casing is bit-exact
//! (`GanttChartDetails`, `EmployeeCriteria`, `SprintBreakdown`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A fully decoded project plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructuredPlan {
    /// Schedule entries, in the order the service produced them.
    #[serde(rename = "GanttChartDetails")]
    pub gantt_tasks: Vec<GanttTask>,
    /// Roles and skills to hire for.
    #[serde(rename = "EmployeeCriteria")]
    pub employee_criteria: Vec<EmployeeCriterion>,
    /// Tasks per sprint, keyed `"Sprint 1"`..`"Sprint N"`. Insertion order
    /// is preserved ("Sprint 10" must not sort before "Sprint 2").
    #[serde(rename = "SprintBreakdown")]
    pub sprint_breakdown: IndexMap<String, Vec<String>>,
}

/// One schedule entry.
///
/// `start` and `end` keep the raw `"Day <int>"` tokens. The Gantt renderer
/// owns day-token parsing and validation; the CSV export preserves the
/// tokens untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GanttTask {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
}

/// A staffing recommendation: one role and its required skills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeCriterion {
    pub role: String,
    pub skills: Vec<String>,
}
