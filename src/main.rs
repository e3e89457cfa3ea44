use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info};
use serde::Serialize;

use u_makespan::config::Config;
use u_makespan::evaluation::{evaluate_records, LoadKpi, StrategyComparison};
use u_makespan::io::{load_experiment_file, load_task_file};
use u_makespan::models::Assignment;
use u_makespan::plot::{plot_task_distribution, render_iteration_charts};
use u_makespan::Result;

fn init_logger() {
    use env_logger::{Builder, Env};
    use std::io::Write;
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// YAML file overriding column names and chart settings
    #[clap(short, long)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare an assignment with the uniform and greedy baselines
    Compare {
        /// Task assignment CSV
        file: PathBuf,
        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },
    /// Draw a load chart for every task file of a search type
    PlotTasks {
        /// Search type, e.g. searchLocalBestImprovement
        search_type: String,
        #[clap(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Draw iterations-per-replication charts from a results CSV
    PlotIterations {
        /// Experiment results CSV
        file: PathBuf,
        #[clap(long, default_value = "data")]
        out_dir: PathBuf,
    },
}

#[derive(Serialize)]
struct CompareReport {
    comparison: StrategyComparison,
    load: LoadKpi,
}

fn main() {
    init_logger();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Compare { file, json } => {
            let records = load_task_file(&file, &config.csv)?;
            let comparison = evaluate_records(&records)?;
            let load = LoadKpi::calculate(&Assignment::from_records(&records));
            if json {
                let report = CompareReport { comparison, load };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{comparison}");
                println!(
                    "Load spread (std dev): {:.2} | lower bound: {}",
                    load.load_std_dev, load.lower_bound
                );
            }
        }
        Command::PlotTasks {
            search_type,
            data_dir,
        } => {
            let written = plot_task_distribution(&data_dir, &search_type, &config)?;
            info!("{} chart(s) written", written.len());
        }
        Command::PlotIterations { file, out_dir } => {
            let records = load_experiment_file(&file)?;
            let written = render_iteration_charts(&records, &out_dir, &config.chart)?;
            info!("{} chart(s) written", written.len());
        }
    }
    Ok(())
}
