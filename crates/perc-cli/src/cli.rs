use clap::{Args, Parser};
use std::num::NonZeroUsize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "perc - Estimate the percolation threshold of an n-by-n site grid by Monte Carlo simulation.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    #[command(flatten)]
    pub estimate: EstimateArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Arguments describing a threshold estimation run.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Grid dimension n; each trial runs on an n-by-n grid.
    #[arg(value_name = "GRID_SIZE")]
    pub grid_size: Option<NonZeroUsize>,

    /// Number of independent trials.
    #[arg(value_name = "TRIALS")]
    pub trials: Option<NonZeroUsize>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the random number generator, for reproducible runs.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S simulation.trials=50
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Do not display a progress bar while trials run.
    #[arg(long)]
    pub no_progress: bool,
}
