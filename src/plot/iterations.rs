//! Iterations-per-replication line charts.
//!
//! One chart per problem size `N`, showing how many improvement steps the
//! heuristic took in each replication.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;

use super::{ensure_parent, plot_err};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::models::ExperimentRecord;

/// Groups records by `N` (ascending), keeping row order inside a group.
pub fn group_by_task_count(records: &[ExperimentRecord]) -> BTreeMap<u64, Vec<&ExperimentRecord>> {
    let mut groups: BTreeMap<u64, Vec<&ExperimentRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.tasks).or_default().push(record);
    }
    groups
}

/// Renders one iterations chart as SVG.
pub fn render_iteration_chart(
    tasks: u64,
    records: &[&ExperimentRecord],
    color: RGBAColor,
    path: &Path,
    config: &ChartConfig,
) -> Result<()> {
    ensure_parent(path)?;

    let points: Vec<(f64, f64)> = records
        .iter()
        .map(|r| (r.replication as f64, r.iterations as f64))
        .collect();
    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let (x_min, x_max) = if points.is_empty() {
        (0.0, 1.0)
    } else {
        (x_min - 0.5, x_max + 0.5)
    };
    let y_max = points.iter().map(|p| p.1).fold(0.0, f64::max);
    let y_max = (y_max * config.headroom).max(1.0);

    let size = (config.iteration_width, config.iteration_height);
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Iterations per replication (N={tasks})"),
            ("sans-serif", 22),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Replication")
        .y_desc("Iterations")
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(3)))
        .map_err(plot_err)?;
    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 5, color.filled())))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Renders one chart per `N` into `out_dir` as `grafico_N<N>.svg`.
///
/// Returns the paths of the charts written, in ascending `N`.
pub fn render_iteration_charts(
    records: &[ExperimentRecord],
    out_dir: &Path,
    config: &ChartConfig,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (idx, (tasks, group)) in group_by_task_count(records).into_iter().enumerate() {
        let path = out_dir.join(format!("grafico_N{tasks}.svg"));
        let color = Palette99::pick(idx).to_rgba();
        render_iteration_chart(tasks, &group, color, &path, config)?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(tasks: u64, replication: u32, iterations: u64) -> ExperimentRecord {
        ExperimentRecord {
            heuristic: "searchLocalBestImprovement".into(),
            tasks,
            machines: 10,
            replication,
            elapsed_secs: 0.01,
            iterations,
            value: "teste".into(),
            parameter: "N/A".into(),
        }
    }

    #[test]
    fn test_group_by_task_count() {
        let records = vec![record(100, 1, 5), record(31, 1, 3), record(100, 2, 6)];
        let groups = group_by_task_count(&records);

        let keys: Vec<u64> = groups.keys().copied().collect();
        assert_eq!(keys, vec![31, 100]);
        let replications: Vec<u32> = groups[&100].iter().map(|r| r.replication).collect();
        assert_eq!(replications, vec![1, 2]);
    }

    #[test]
    fn test_render_iteration_charts() {
        let dir = std::env::temp_dir().join(format!("u-makespan-{}-iterations", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let records = vec![record(31, 1, 27), record(31, 2, 29), record(100, 1, 90)];
        let written = render_iteration_charts(&records, &dir, &ChartConfig::default()).unwrap();

        assert_eq!(
            written,
            vec![dir.join("grafico_N31.svg"), dir.join("grafico_N100.svg")]
        );
        let svg = fs::read_to_string(&written[0]).unwrap();
        assert!(svg.contains("Iterations per replication (N=31)"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_uses_configured_size() {
        let dir = std::env::temp_dir().join(format!("u-makespan-{}-iter-size", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let config = ChartConfig {
            iteration_width: 1300,
            iteration_height: 650,
            ..ChartConfig::default()
        };

        let written = render_iteration_charts(&[record(31, 1, 27)], &dir, &config).unwrap();
        let svg = fs::read_to_string(&written[0]).unwrap();
        assert!(svg.contains(r#"width="1300""#));
        assert!(svg.contains(r#"height="650""#));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_no_records_no_charts() {
        let dir = std::env::temp_dir().join("u-makespan-unused");
        let written = render_iteration_charts(&[], &dir, &ChartConfig::default()).unwrap();
        assert!(written.is_empty());
    }
}
