//! Project parameters: the immutable input every synthesis step consumes.

use thiserror::Error;

/// Errors from validating project parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("project timeline must be at least 1 day (got {0})")]
    InvalidTimeline(u32),

    #[error("team size must be at least 1 (got {0})")]
    InvalidTeamSize(u32),

    #[error("sprint count must be at least 1 (got {0})")]
    InvalidSprintCount(u32),

    #[error("sprint count ({sprints}) cannot exceed the timeline in days ({timeline_days})")]
    MoreSprintsThanDays { sprints: u32, timeline_days: u32 },
}

/// Validated project parameters.
///
/// Constructed via [`ProjectParameters::new`], which enforces the numeric
/// preconditions the synthesis functions rely on (all counts >= 1, and at
/// most one sprint per timeline day). Downstream code can assume these hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectParameters {
    /// Kind of project being planned (e.g. "Web Development").
    pub project_type: String,
    /// Total project length in days.
    pub timeline_days: u32,
    /// Number of people on the team.
    pub team_size: u32,
    /// Implementation languages, in priority order.
    pub languages: Vec<String>,
    /// Number of sprints the timeline is divided into.
    pub sprint_count: u32,
}

impl ProjectParameters {
    /// Validate and construct project parameters.
    pub fn new(
        project_type: impl Into<String>,
        timeline_days: u32,
        team_size: u32,
        languages: Vec<String>,
        sprint_count: u32,
    ) -> Result<Self, ParameterError> {
        if timeline_days < 1 {
            return Err(ParameterError::InvalidTimeline(timeline_days));
        }
        if team_size < 1 {
            return Err(ParameterError::InvalidTeamSize(team_size));
        }
        if sprint_count < 1 {
            return Err(ParameterError::InvalidSprintCount(sprint_count));
        }
        if sprint_count > timeline_days {
            return Err(ParameterError::MoreSprintsThanDays {
                sprints: sprint_count,
                timeline_days,
            });
        }
        Ok(Self {
            project_type: project_type.into(),
            timeline_days,
            team_size,
            languages,
            sprint_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages() -> Vec<String> {
        vec!["Python".to_string(), "JavaScript".to_string()]
    }

    #[test]
    fn accepts_valid_parameters() {
        let params = ProjectParameters::new("Web Development", 90, 5, languages(), 5)
            .expect("should validate");
        assert_eq!(params.timeline_days, 90);
        assert_eq!(params.sprint_count, 5);
        assert_eq!(params.languages.len(), 2);
    }

    #[test]
    fn rejects_zero_timeline() {
        let err = ProjectParameters::new("Web", 0, 5, languages(), 5).unwrap_err();
        assert_eq!(err, ParameterError::InvalidTimeline(0));
    }

    #[test]
    fn rejects_zero_team_size() {
        let err = ProjectParameters::new("Web", 90, 0, languages(), 5).unwrap_err();
        assert_eq!(err, ParameterError::InvalidTeamSize(0));
    }

    #[test]
    fn rejects_zero_sprint_count() {
        let err = ProjectParameters::new("Web", 90, 5, languages(), 0).unwrap_err();
        assert_eq!(err, ParameterError::InvalidSprintCount(0));
    }

    #[test]
    fn rejects_more_sprints_than_days() {
        let err = ProjectParameters::new("Web", 10, 5, languages(), 11).unwrap_err();
        assert_eq!(
            err,
            ParameterError::MoreSprintsThanDays {
                sprints: 11,
                timeline_days: 10
            }
        );
    }

    #[test]
    fn one_sprint_per_day_is_allowed() {
        assert!(ProjectParameters::new("Web", 5, 1, vec![], 5).is_ok());
    }
}
