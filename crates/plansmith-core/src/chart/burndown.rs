//! Burndown chart: ideal vs. actual remaining-work trajectories.

use std::path::Path;

use plotters::prelude::*;
use rand::Rng;

use super::ChartError;
use crate::params::ParameterError;

/// Remaining-work trajectories at each sprint checkpoint.
///
/// All three sequences have length `sprint_count + 1`. The ideal series is
/// monotonically non-increasing; the actual series carries injected noise
/// and may not be.
#[derive(Debug, Clone, PartialEq)]
pub struct BurndownSeries {
    /// Checkpoint positions in days: `0, sprint_days, 2*sprint_days, ...`.
    pub days: Vec<u32>,
    /// Ideal remaining work at each checkpoint: `timeline - days[i]`.
    pub ideal_remaining: Vec<f64>,
    /// Simulated actual remaining work, with noise scaling by checkpoint
    /// index.
    pub actual_remaining: Vec<f64>,
}

/// Compute the burndown trajectories.
///
/// The timeline is divided into `sprint_days = timeline_days / sprint_count`
/// (floor division; remainder days fall out of the modeled schedule, a known
/// approximation). Actual remaining work at checkpoint `i` is
/// `timeline_days - (i + 1) * sprint_days + i * noise` with `noise` drawn
/// uniformly from `[-2, 2]` per checkpoint, so checkpoint 0 never carries
/// noise. For large sprint counts the actual series can dip below zero; the
/// value is kept as computed but logged at WARN.
pub fn compute_burndown(
    timeline_days: u32,
    sprint_count: u32,
    rng: &mut impl Rng,
) -> Result<BurndownSeries, ParameterError> {
    if timeline_days < 1 {
        return Err(ParameterError::InvalidTimeline(timeline_days));
    }
    if sprint_count < 1 {
        return Err(ParameterError::InvalidSprintCount(sprint_count));
    }

    let sprint_days = timeline_days / sprint_count;
    let checkpoints = sprint_count as usize + 1;

    let mut days = Vec::with_capacity(checkpoints);
    let mut ideal_remaining = Vec::with_capacity(checkpoints);
    let mut actual_remaining = Vec::with_capacity(checkpoints);

    for i in 0..checkpoints as u32 {
        let x = i * sprint_days;
        days.push(x);
        ideal_remaining.push(f64::from(timeline_days - x));

        let noise = i64::from(i) * i64::from(rng.random_range(-2i32..=2));
        let actual =
            i64::from(timeline_days) - i64::from(i + 1) * i64::from(sprint_days) + noise;
        if actual < 0 {
            tracing::warn!(
                checkpoint = i,
                remaining = actual,
                "actual remaining work went negative"
            );
        }
        actual_remaining.push(actual as f64);
    }

    Ok(BurndownSeries {
        days,
        ideal_remaining,
        actual_remaining,
    })
}

/// Render both trajectories as line plots sharing one x-axis, to a PNG at
/// `path`.
pub fn render_burndown_chart(series: &BurndownSeries, path: &Path) -> Result<(), ChartError> {
    let max_day = series.days.last().copied().unwrap_or(0).max(1);
    let y_max = series
        .ideal_remaining
        .iter()
        .chain(&series.actual_remaining)
        .cloned()
        .fold(f64::MIN, f64::max);
    let y_min = series
        .ideal_remaining
        .iter()
        .chain(&series.actual_remaining)
        .cloned()
        .fold(f64::MAX, f64::min)
        .min(0.0);

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| ChartError::Backend(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Burndown Chart", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..f64::from(max_day), y_min..y_max + 5.0)
        .map_err(|e| ChartError::Backend(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Days")
        .y_desc("Work Remaining")
        .draw()
        .map_err(|e| ChartError::Backend(e.to_string()))?;

    let ideal: Vec<(f64, f64)> = series
        .days
        .iter()
        .zip(&series.ideal_remaining)
        .map(|(&x, &y)| (f64::from(x), y))
        .collect();
    let actual: Vec<(f64, f64)> = series
        .days
        .iter()
        .zip(&series.actual_remaining)
        .map(|(&x, &y)| (f64::from(x), y))
        .collect();

    chart
        .draw_series(LineSeries::new(ideal, BLUE.stroke_width(2)).point_size(3))
        .map_err(|e| ChartError::Backend(e.to_string()))?
        .label("Ideal Burndown")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(actual, RED.stroke_width(2)).point_size(3))
        .map_err(|e| ChartError::Backend(e.to_string()))?
        .label("Actual Burndown")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| ChartError::Backend(e.to_string()))?;

    root.present().map_err(|e| ChartError::Backend(e.to_string()))?;
    tracing::info!(path = %path.display(), checkpoints = series.days.len(), "burndown chart written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn ninety_days_five_sprints_matches_reference_trajectory() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = compute_burndown(90, 5, &mut rng).expect("valid inputs");

        assert_eq!(series.days, [0, 18, 36, 54, 72, 90]);
        assert_eq!(series.ideal_remaining, [90.0, 72.0, 54.0, 36.0, 18.0, 0.0]);
        // Checkpoint 0 scales its noise by zero: always exactly 90 - 18.
        assert_eq!(series.actual_remaining[0], 72.0);
    }

    #[test]
    fn checkpoint_count_is_sprints_plus_one() {
        let mut rng = StdRng::seed_from_u64(2);
        let series = compute_burndown(60, 4, &mut rng).unwrap();
        assert_eq!(series.days.len(), 5);
        assert_eq!(series.ideal_remaining.len(), 5);
        assert_eq!(series.actual_remaining.len(), 5);
    }

    #[test]
    fn remainder_days_drop_out_of_the_schedule() {
        // 100 / 7 floors to 14-day sprints: the final checkpoint lands on
        // day 98 and the ideal line stops at 2, not 0.
        let mut rng = StdRng::seed_from_u64(3);
        let series = compute_burndown(100, 7, &mut rng).unwrap();
        assert_eq!(*series.days.last().unwrap(), 98);
        assert_eq!(*series.ideal_remaining.last().unwrap(), 2.0);
    }

    #[test]
    fn ideal_series_is_non_increasing() {
        let mut rng = StdRng::seed_from_u64(4);
        let series = compute_burndown(90, 9, &mut rng).unwrap();
        for pair in series.ideal_remaining.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn noise_stays_within_scaled_bounds() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let series = compute_burndown(90, 5, &mut rng).unwrap();
            for (i, &actual) in series.actual_remaining.iter().enumerate() {
                let expected = 90.0 - (i as f64 + 1.0) * 18.0;
                let bound = 2.0 * i as f64;
                assert!(
                    (actual - expected).abs() <= bound,
                    "checkpoint {i}: {actual} vs {expected} +/- {bound}"
                );
            }
        }
    }

    #[test]
    fn rejects_zero_inputs() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            compute_burndown(0, 5, &mut rng).unwrap_err(),
            ParameterError::InvalidTimeline(0)
        );
        assert_eq!(
            compute_burndown(90, 0, &mut rng).unwrap_err(),
            ParameterError::InvalidSprintCount(0)
        );
    }

    #[test]
    fn renders_a_png_artifact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("burndown_chart.png");
        let mut rng = StdRng::seed_from_u64(6);
        let series = compute_burndown(90, 5, &mut rng).unwrap();
        match render_burndown_chart(&series, &path) {
            Ok(()) => {
                let bytes = std::fs::read(&path).unwrap();
                assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
            }
            // Hosts without system fonts cannot rasterize labels.
            Err(ChartError::Backend(e)) => {
                eprintln!("skipping render assertion, backend unavailable: {e}");
            }
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
}
