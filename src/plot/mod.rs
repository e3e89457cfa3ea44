//! SVG charts for heuristic output.
//!
//! - **`load_chart`**: stacked per-machine load of one assignment
//! - **`iterations`**: improvement steps per replication, one chart per `N`

mod iterations;
mod load_chart;

pub use iterations::{group_by_task_count, render_iteration_chart, render_iteration_charts};
pub use load_chart::{plot_task_distribution, render_load_chart};

use std::fmt::Debug;
use std::fs::create_dir_all;
use std::path::Path;

use plotters::style::RGBColor;

use crate::error::{Error, Result};

/// Segment colors, cycled per task (ColorBrewer "Set2").
pub(crate) const SEGMENT_COLORS: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

pub(crate) fn plot_err<E: Debug>(err: E) -> Error {
    Error::Plot(format!("{err:?}"))
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            create_dir_all(dir).map_err(|e| Error::file_access(dir, e))
        }
        _ => Ok(()),
    }
}
