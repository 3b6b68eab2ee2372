mod progress;
mod summary;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use deflicker_core::io::discover::discover_pictures;
use deflicker_core::pipeline::config::{DeflickerConfig, FailurePolicy};
use deflicker_core::pipeline::orchestrator::run_reported;
use deflicker_core::remap::RemapMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deflicker", about = "Remove brightness flicker from image sequences")]
#[command(version)]
struct Cli {
    /// Source folder
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Destination folder
    #[arg(short, long)]
    destination: Option<PathBuf>,

    /// Number of neighboring frames to average on each side; 0 matches
    /// every frame against the whole sequence
    #[arg(long, default_value = "10")]
    rolling_average: u32,

    /// Number of threads to use
    #[arg(long, default_value_t = num_cpus::get())]
    threads: usize,

    /// How the remapping table is applied to pixels
    #[arg(long, value_enum, default_value = "per-channel")]
    remap: RemapModeArg,

    /// Skip pictures that fail instead of aborting the run
    #[arg(long)]
    keep_going: bool,

    /// Run config file (TOML); replaces the individual flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum RemapModeArg {
    PerChannel,
    Luminance,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = if let Some(ref config_path) = cli.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid run config")?
    } else {
        build_config_from_args(&cli)?
    };

    summary::print_run_summary(&config);

    let pictures = discover_pictures(&config.source, &config.destination)?;
    if pictures.is_empty() {
        println!("No pictures found in {}", config.source.display());
        return Ok(());
    }

    let reporter = Arc::new(progress::BarReporter::new());
    let outcome = run_reported(pictures, &config, reporter)?;

    println!(
        "\n{} pictures written to {}",
        outcome.completed,
        config.destination.display()
    );
    summary::print_skipped(&outcome.skipped);

    Ok(())
}

fn build_config_from_args(cli: &Cli) -> Result<DeflickerConfig> {
    let (Some(source), Some(destination)) = (cli.source.clone(), cli.destination.clone()) else {
        bail!("--source and --destination are required unless --config is given");
    };

    let mut config = DeflickerConfig::new(source, destination);
    config.rolling_average = cli.rolling_average;
    config.threads = cli.threads.max(1);
    config.remap = match cli.remap {
        RemapModeArg::PerChannel => RemapMode::PerChannel,
        RemapModeArg::Luminance => RemapMode::Luminance,
    };
    config.on_error = if cli.keep_going {
        FailurePolicy::Skip
    } else {
        FailurePolicy::Abort
    };
    Ok(config)
}
