//! Chart construction and rendering: Gantt bars, burndown trajectories, and
//! the flat-file artifacts they produce.

pub mod burndown;
pub mod gantt;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use burndown::{BurndownSeries, compute_burndown, render_burndown_chart};
pub use gantt::{GanttBar, layout_gantt_bars, render_gantt_chart, write_gantt_csv};

/// Errors from chart construction and rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("task {task:?}: {field} token {token:?} does not match \"Day <integer>\"")]
    DayToken {
        task: String,
        field: &'static str,
        token: String,
    },

    #[error("task {task:?} ends on day {end} before it starts on day {start}")]
    DayOrder { task: String, start: u32, end: u32 },

    #[error("cannot render a Gantt chart with no tasks")]
    NoTasks,

    #[error("chart backend error: {0}")]
    Backend(String),

    #[error("failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed artifact file names, rooted at a configurable output directory.
///
/// Files are overwritten whole on each run; there is no versioning and no
/// locking. Concurrent runs against the same directory must be serialized by
/// the caller.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    dir: PathBuf,
}

impl ArtifactPaths {
    /// Root the fixed file names at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The output directory itself.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the rendered Gantt chart image.
    pub fn gantt_chart(&self) -> PathBuf {
        self.dir.join("gantt_chart_days.png")
    }

    /// Path of the row-per-task Gantt CSV export.
    pub fn gantt_csv(&self) -> PathBuf {
        self.dir.join("gantt_chart_details.csv")
    }

    /// Path of the rendered burndown chart image.
    pub fn burndown_chart(&self) -> PathBuf {
        self.dir.join("burndown_chart.png")
    }
}
