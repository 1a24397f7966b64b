//! KPI synthesis: numeric project-health metrics derived from the project
//! parameters and an injected random source.
//!
//! Pure apart from consuming randomness. Callers pass the `Rng` so tests can
//! seed a `StdRng` and assert exact values.

use rand::Rng;
use serde::Serialize;

use crate::params::ProjectParameters;

/// Assumed cost per team member per sprint, in dollars.
pub const COST_PER_MEMBER_PER_SPRINT: u64 = 1_000;

/// Synthesized Key Performance Indicators for one project.
///
/// Derived and immutable; a fresh record is produced per call and carries no
/// identity beyond its values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiRecord {
    /// Average story points completed per sprint across the whole team.
    pub velocity_story_points: u32,
    /// Average hours to complete a task, rounded to 2 decimals.
    pub cycle_time_hours: f64,
    /// Percentage of code covered by automated tests.
    pub code_coverage_pct: u8,
    /// Defects per 1,000 lines of code, rounded to 2 decimals.
    pub defect_rate_per_kloc: f64,
    /// Completed vs. planned work, as a percentage.
    pub sprint_predictability_pct: f64,
    /// Total cost over the project, in dollars.
    pub burn_rate_cost: u64,
}

impl std::fmt::Display for KpiRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Velocity:              {} story points per sprint",
            self.velocity_story_points
        )?;
        writeln!(
            f,
            "Cycle time:            {} hours per task",
            self.cycle_time_hours
        )?;
        writeln!(f, "Code coverage:         {}%", self.code_coverage_pct)?;
        writeln!(
            f,
            "Defect rate:           {} defects per 1,000 LOC",
            self.defect_rate_per_kloc
        )?;
        writeln!(
            f,
            "Sprint predictability: {}%",
            self.sprint_predictability_pct
        )?;
        write!(f, "Burn rate:             ${} total cost", self.burn_rate_cost)
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Synthesize a KPI record for the given (pre-validated) parameters.
///
/// Burn rate is exact: `team_size * 1000 * sprint_count`. Every other metric
/// is drawn uniformly from its documented range:
///
/// - velocity: `[20, 50]` story points per person, times team size
/// - cycle time: `[4, 12]` hours, 2 decimals
/// - code coverage: `[60, 95]` percent
/// - defect rate: `[0.5, 5.0]` per KLOC, 2 decimals
/// - sprint predictability: `[0.8, 1.0]` rounded to 2 decimals, times 100
pub fn synthesize_kpis(params: &ProjectParameters, rng: &mut impl Rng) -> KpiRecord {
    let per_person_velocity: u32 = rng.random_range(20..=50);

    KpiRecord {
        velocity_story_points: per_person_velocity * params.team_size,
        cycle_time_hours: round2(rng.random_range(4.0..=12.0)),
        code_coverage_pct: rng.random_range(60..=95),
        defect_rate_per_kloc: round2(rng.random_range(0.5..=5.0)),
        sprint_predictability_pct: round2(rng.random_range(0.8..=1.0)) * 100.0,
        burn_rate_cost: u64::from(params.team_size)
            * COST_PER_MEMBER_PER_SPRINT
            * u64::from(params.sprint_count),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn params(team_size: u32, sprint_count: u32, timeline_days: u32) -> ProjectParameters {
        ProjectParameters::new("Web Development", timeline_days, team_size, vec![], sprint_count)
            .expect("valid params")
    }

    #[test]
    fn metrics_stay_within_documented_ranges() {
        let p = params(5, 5, 90);
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let kpis = synthesize_kpis(&p, &mut rng);

            assert!(kpis.velocity_story_points >= 20 * 5);
            assert!(kpis.velocity_story_points <= 50 * 5);
            assert!(kpis.velocity_story_points % 5 == 0, "integer per-person multiplier");
            assert!((4.0..=12.0).contains(&kpis.cycle_time_hours));
            assert!((60..=95).contains(&kpis.code_coverage_pct));
            assert!((0.5..=5.0).contains(&kpis.defect_rate_per_kloc));
            assert!((80.0..=100.0).contains(&kpis.sprint_predictability_pct));
        }
    }

    #[test]
    fn burn_rate_is_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        let kpis = synthesize_kpis(&params(5, 5, 90), &mut rng);
        assert_eq!(kpis.burn_rate_cost, 5 * 1000 * 5);

        let mut rng = StdRng::seed_from_u64(7);
        let kpis = synthesize_kpis(&params(12, 8, 120), &mut rng);
        assert_eq!(kpis.burn_rate_cost, 12 * 1000 * 8);
    }

    #[test]
    fn rounded_metrics_have_at_most_two_decimals() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let kpis = synthesize_kpis(&params(3, 4, 60), &mut rng);
            let scaled = kpis.cycle_time_hours * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
            let scaled = kpis.defect_rate_per_kloc * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn same_seed_gives_same_record() {
        let p = params(5, 5, 90);
        let a = synthesize_kpis(&p, &mut StdRng::seed_from_u64(42));
        let b = synthesize_kpis(&p, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn display_carries_units() {
        let kpis = KpiRecord {
            velocity_story_points: 150,
            cycle_time_hours: 6.5,
            code_coverage_pct: 80,
            defect_rate_per_kloc: 2.25,
            sprint_predictability_pct: 90.0,
            burn_rate_cost: 25_000,
        };
        let text = kpis.to_string();
        assert!(text.contains("150 story points per sprint"));
        assert!(text.contains("6.5 hours per task"));
        assert!(text.contains("80%"));
        assert!(text.contains("2.25 defects per 1,000 LOC"));
        assert!(text.contains("$25000 total cost"));
    }
}
