//! plansmith-core: project-plan synthesis and rendering pipeline.
//!
//! The pipeline, end to end:
//!
//! ```text
//! parameters -> prompt -> generation client -> raw text -> parser
//!            -> structured plan -> gantt/burndown renderers -> artifacts
//! ```
//!
//! KPI synthesis runs independently of the generation call. Every component
//! takes immutable inputs and returns fresh values; randomized steps take an
//! injected `Rng` so tests can seed them.

pub mod chart;
pub mod client;
pub mod kpi;
pub mod params;
pub mod plan;

pub use chart::{ArtifactPaths, BurndownSeries, ChartError};
pub use client::{ClientConfig, GenerationClient, OpenAiClient, ScriptedClient};
pub use kpi::{KpiRecord, synthesize_kpis};
pub use params::{ParameterError, ProjectParameters};
pub use plan::{
    EmployeeCriterion, GanttTask, GenerationOutcome, ParseFailure, StructuredPlan,
    build_plan_prompt, parse_plan_response,
};
