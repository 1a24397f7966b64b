//! Gantt chart: day-token parsing, bar layout, PNG rendering, CSV export.
//!
//! Layout is a pure function so the geometry is testable without touching
//! the drawing backend. Rendering validates every task *before* creating the
//! output file: a malformed day token aborts the run with a [`ChartError`]
//! naming the task, and never leaves a partial image behind.

use std::io::Write;
use std::path::Path;

use plotters::prelude::*;

use super::ChartError;
use crate::plan::types::GanttTask;

/// Sky blue, matching the bar fill of the exported schedule views.
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// One laid-out horizontal bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttBar {
    /// Task label (the y-axis category).
    pub label: String,
    /// Day the bar starts at (x offset).
    pub start_day: u32,
    /// Day the bar ends at.
    pub end_day: u32,
}

impl GanttBar {
    /// Bar width in days.
    pub fn width(&self) -> u32 {
        self.end_day - self.start_day
    }
}

/// Parse a `"Day <integer>"` token into its day number.
fn parse_day_token(token: &str) -> Option<u32> {
    token.strip_prefix("Day ")?.trim().parse().ok()
}

/// Lay out tasks as horizontal bars, preserving input order.
///
/// Rejects any task whose `Start`/`End` token fails the `"Day <integer>"`
/// pattern, and any task that ends before it starts. A single bad task fails
/// the whole layout -- silently dropping it would corrupt the schedule view.
pub fn layout_gantt_bars(tasks: &[GanttTask]) -> Result<Vec<GanttBar>, ChartError> {
    let mut bars = Vec::with_capacity(tasks.len());
    for task in tasks {
        let start_day = parse_day_token(&task.start).ok_or_else(|| ChartError::DayToken {
            task: task.task.clone(),
            field: "Start",
            token: task.start.clone(),
        })?;
        let end_day = parse_day_token(&task.end).ok_or_else(|| ChartError::DayToken {
            task: task.task.clone(),
            field: "End",
            token: task.end.clone(),
        })?;
        if end_day < start_day {
            return Err(ChartError::DayOrder {
                task: task.task.clone(),
                start: start_day,
                end: end_day,
            });
        }
        bars.push(GanttBar {
            label: task.task.clone(),
            start_day,
            end_day,
        });
    }
    Ok(bars)
}

/// Render the Gantt chart to a PNG at `path`.
///
/// Bars share a categorical y-axis in input order, first task in the top
/// row. All tasks are validated via [`layout_gantt_bars`] before the output
/// file is created.
pub fn render_gantt_chart(tasks: &[GanttTask], path: &Path) -> Result<(), ChartError> {
    let bars = layout_gantt_bars(tasks)?;
    if bars.is_empty() {
        return Err(ChartError::NoTasks);
    }

    let row_count = bars.len();
    let max_day = bars.iter().map(|b| b.end_day).max().unwrap_or(0);
    // Label of the bar occupying a given row (row 0 is the bottom).
    let row_label = |row: usize| -> &str {
        row_count
            .checked_sub(row + 1)
            .and_then(|i| bars.get(i))
            .map(|b| b.label.as_str())
            .unwrap_or("")
    };

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| ChartError::Backend(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Gantt Chart", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(180)
        .build_cartesian_2d(0u32..max_day + 1, (0usize..row_count).into_segmented())
        .map_err(|e| ChartError::Backend(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Days")
        .y_desc("Tasks")
        .y_label_formatter(&|value| match value {
            SegmentValue::CenterOf(row) | SegmentValue::Exact(row) => {
                row_label(*row).to_string()
            }
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(|e| ChartError::Backend(e.to_string()))?;

    for (i, bar) in bars.iter().enumerate() {
        let row = row_count - 1 - i;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [
                    (bar.start_day, SegmentValue::Exact(row)),
                    (bar.end_day, SegmentValue::Exact(row + 1)),
                ],
                BAR_COLOR.filled(),
            )))
            .map_err(|e| ChartError::Backend(e.to_string()))?;
    }

    root.present().map_err(|e| ChartError::Backend(e.to_string()))?;
    tracing::info!(path = %path.display(), tasks = row_count, "gantt chart written");
    Ok(())
}

/// Escape a CSV field: quote it if it carries a comma, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write the row-per-task CSV export with header `Task,Start,End`.
///
/// Rows appear in input order and keep the raw `"Day <int>"` string tokens,
/// not the parsed integers, so downstream consumers see the pre-parse
/// representation.
pub fn write_gantt_csv(tasks: &[GanttTask], path: &Path) -> Result<(), ChartError> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "Task,Start,End")?;
    for task in tasks {
        writeln!(
            file,
            "{},{},{}",
            csv_field(&task.task),
            csv_field(&task.start),
            csv_field(&task.end)
        )?;
    }
    tracing::info!(path = %path.display(), rows = tasks.len(), "gantt csv written");
    Ok(())
}
