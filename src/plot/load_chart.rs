//! Stacked machine-load bar chart.
//!
//! One bar per machine, one segment per task in assignment order, with the
//! machine's makespan written above the bar.

use std::path::{Path, PathBuf};

use log::{info, warn};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{ensure_parent, plot_err, SEGMENT_COLORS};
use crate::config::{ChartConfig, Config};
use crate::error::Result;
use crate::evaluation::LoadKpi;
use crate::io::{discover_task_files, load_task_file, plot_dir};
use crate::models::Assignment;

const BAR_HALF_WIDTH: f64 = 0.3;

/// Renders the load chart of an assignment as SVG.
///
/// `label` names the heuristic that produced the assignment and goes into
/// the x axis description.
pub fn render_load_chart(
    assignment: &Assignment,
    label: &str,
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    ensure_parent(path)?;

    let kpi = LoadKpi::calculate(assignment);
    let machines = kpi.machines.len();
    let width = config.load_chart_width(machines);
    let y_max = (kpi.makespan * config.headroom).max(1.0);
    let x_max = machines.max(1) as f64 - 0.5;

    let root = SVGBackend::new(path, (width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Task distribution per machine", ("sans-serif", 26))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_max, 0f64..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .x_desc(format!("Machines ({label})"))
        .y_desc("Processing time")
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()
        .map_err(plot_err)?;

    let segment_text = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let caption_text = ("sans-serif", 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let axis_text = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));

    let mut color_idx = 0;
    for (x, (machine_id, tasks)) in assignment.iter().enumerate() {
        let x = x as f64;
        let mut bottom = 0.0;
        for &duration in tasks {
            let color = SEGMENT_COLORS[color_idx % SEGMENT_COLORS.len()];
            color_idx += 1;
            let corners = [
                (x - BAR_HALF_WIDTH, bottom),
                (x + BAR_HALF_WIDTH, bottom + duration),
            ];
            chart
                .draw_series([
                    Rectangle::new(corners, color.filled()),
                    Rectangle::new(corners, BLACK.stroke_width(1)),
                ])
                .map_err(plot_err)?;
            if duration > config.label_threshold {
                chart
                    .draw_series(std::iter::once(Text::new(
                        format!("{:.0}", duration),
                        (x, bottom + duration / 2.0),
                        segment_text.clone(),
                    )))
                    .map_err(plot_err)?;
            }
            bottom += duration;
        }

        chart
            .draw_series(std::iter::once(Text::new(
                format!("Makespan: {:.0}", bottom),
                (x, bottom + y_max * 0.01),
                caption_text.clone(),
            )))
            .map_err(plot_err)?;

        let (px, py) = chart.plotting_area().map_coordinate(&(x, 0.0));
        root.draw(&Text::new(
            format!("{machine_id} ({} tasks)", tasks.len()),
            (px, py + 8),
            axis_text.clone(),
        ))
        .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Renders a load chart for every task file of a search type.
///
/// Files are discovered with [`discover_task_files`]; charts are written
/// to `<data_dir>/<search_type>/plot/<file stem>.svg`. Files without rows
/// are skipped with a warning.
///
/// Returns the paths of the charts written.
pub fn plot_task_distribution(
    data_dir: impl AsRef<Path>,
    search_type: &str,
    config: &Config,
) -> Result<Vec<PathBuf>> {
    let data_dir = data_dir.as_ref();
    let out_dir = plot_dir(data_dir, search_type);
    let mut written = Vec::new();

    for file in discover_task_files(data_dir, search_type)? {
        let records = load_task_file(&file, &config.csv)?;
        if records.is_empty() {
            warn!("{} is empty, skipping", file.display());
            continue;
        }

        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out = out_dir.join(format!("{stem}.svg"));
        render_load_chart(
            &Assignment::from_records(&records),
            search_type,
            &out,
            &config.chart,
        )?;
        info!("wrote {}", out.display());
        written.push(out);
    }

    Ok(written)
}
