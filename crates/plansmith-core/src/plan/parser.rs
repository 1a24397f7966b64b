//! Plan response parsing.
//!
//! The generation service is an untrusted collaborator: transport failures
//! surface as error text in place of content, and even genuine output may be
//! malformed. Parsing is therefore strict serde decoding only -- the raw
//! text is never evaluated or executed -- and every failure is captured as
//! data instead of a fault.

use crate::plan::types::StructuredPlan;

/// Result of decoding raw generation output.
///
/// The two variants are mutually exclusive: a run either yields a usable
/// plan or a failure record, never a partially filled plan.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// The raw text decoded into the expected shape.
    Plan(StructuredPlan),
    /// The raw text was not a plan; carries the text and a reason.
    Failure(ParseFailure),
}

/// A failed decode, kept alongside the offending text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// The raw generation output, unmodified.
    pub raw_text: String,
    /// Human-readable decode failure description.
    pub reason: String,
}

/// Strictly decode raw generation output into a [`StructuredPlan`].
///
/// Succeeds only if the text is valid JSON whose top level carries
/// `GanttChartDetails`, `EmployeeCriteria`, and `SprintBreakdown` with the
/// right container types. Anything else -- malformed JSON, a transport error
/// message masquerading as content, valid JSON of the wrong shape -- comes
/// back as [`GenerationOutcome::Failure`]. Never panics on any input.
pub fn parse_plan_response(raw: &str) -> GenerationOutcome {
    match serde_json::from_str::<StructuredPlan>(raw) {
        Ok(plan) => GenerationOutcome::Plan(plan),
        Err(e) => {
            tracing::debug!(error = %e, "generation output failed strict decode");
            GenerationOutcome::Failure(ParseFailure {
                raw_text: raw.to_string(),
                reason: format!("malformed structured output: {e}"),
            })
        }
    }
}
