//! Plan synthesis: prompt construction, wire-format types, response parsing.

pub mod parser;
pub mod prompt;
pub mod types;

pub use parser::{GenerationOutcome, ParseFailure, parse_plan_response};
pub use prompt::build_plan_prompt;
pub use types::{EmployeeCriterion, GanttTask, StructuredPlan};
