//! Command-line interface for the snapshot pipeline.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::PipelineConfig;
use crate::processors::{convert, export};

#[derive(Parser)]
#[command(name = "snapshot-pipeline")]
#[command(about = "Sensor snapshot conversion pipeline", version)]
pub struct Cli {
    /// Path to YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a dataset directory to snapshot JSON and XML files
    Convert {
        /// Path to the snapshot dataset directory
        #[arg(short, long)]
        input: PathBuf,

        /// Path to the snapshot output directory
        #[arg(short, long, default_value = "./snapshot_dump")]
        output: PathBuf,
    },

    /// Export a dataset file to CSV and a line chart
    Export {
        /// Snapshot input file
        #[arg(short, long)]
        input: PathBuf,

        /// Path to the output CSV file
        #[arg(long, default_value = "dump.csv")]
        csv: PathBuf,

        /// Path to the output plot (only PNG is supported)
        #[arg(long, default_value = "plot.png")]
        plot: PathBuf,
    },
}

/// Create a spinner for indeterminate operations
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print a summary box
fn print_summary(title: &str, items: &[(&str, String)]) {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║ {:<62} ║", title);
    println!("╠══════════════════════════════════════════════════════════════╣");
    for (key, value) in items {
        let display_value = if value.len() > 39 {
            format!("{}...", &value[..36])
        } else {
            value.clone()
        };
        println!("║ {:<20}: {:<39} ║", key, display_value);
    }
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
}

pub fn run() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity (must come first)
    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .format_timestamp_secs()
        .init();

    // Load config
    let config = match &cli.config {
        Some(path) => match PipelineConfig::from_yaml(path) {
            Ok(cfg) => {
                info!("Loaded config from: {}", path.display());
                cfg
            }
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}, using defaults",
                    path.display(),
                    e
                );
                PipelineConfig::default()
            }
        },
        None => PipelineConfig::default(),
    };

    match cli.command {
        Commands::Convert { input, output } => {
            cmd_convert(&input, &output);
        }
        Commands::Export { input, csv, plot } => {
            cmd_export(&input, &csv, &plot, &config);
        }
    }
}

fn cmd_convert(input: &Path, output: &Path) {
    let start = Instant::now();

    info!("converting datasets in {}", input.display());

    let written = match convert::convert_directory(input, output) {
        Ok(written) => written,
        Err(e) => {
            error!("conversion failed: {:#}", e);
            std::process::exit(1);
        }
    };

    info!(
        "converted {} dataset files in {:.2?}",
        written.len(),
        start.elapsed()
    );

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = convert::dump_snapshots(output, &mut handle) {
        error!("snapshot dump failed: {:#}", e);
        std::process::exit(1);
    }
}

fn cmd_export(input: &Path, csv: &Path, plot: &Path, config: &PipelineConfig) {
    let start = Instant::now();

    let spinner = create_spinner("Exporting snapshot...");

    match export::export_snapshot(input, csv, plot, config) {
        Ok(report) => {
            spinner.finish_and_clear();

            print_summary(
                "Export Complete",
                &[
                    ("Input file", input.display().to_string()),
                    ("Output CSV", csv.display().to_string()),
                    ("Output plot", plot.display().to_string()),
                    ("Records", report.records.to_string()),
                    ("Duration", format!("{:.2?}", start.elapsed())),
                ],
            );
        }
        Err(e) => {
            spinner.finish_and_clear();
            error!("export failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
