use super::file::{FileConfig, FileSimulationConfig};
use crate::cli::EstimateArgs;
use crate::error::{CliError, Result};
use percolation::engine::config::{EstimationConfig, EstimationConfigBuilder};
use percolation::engine::error::EngineError;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Resolves the final run configuration from CLI arguments, `--set` overrides and the
/// optional config file, in that order of precedence.
pub fn build_config(args: &EstimateArgs) -> Result<EstimationConfig> {
    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut sim = file_config.simulation.unwrap_or_default();
    apply_set_values(&mut sim, &args.set_values)?;

    let grid_size = args
        .grid_size
        .map(NonZeroUsize::get)
        .or(sim.grid_size)
        .ok_or_else(|| {
            CliError::Argument(
                "GRID_SIZE is required, either as an argument or as `simulation.grid-size` in the config file".to_string(),
            )
        })?;
    let trials = args
        .trials
        .map(NonZeroUsize::get)
        .or(sim.trials)
        .ok_or_else(|| {
            CliError::Argument(
                "TRIALS is required, either as an argument or as `simulation.trials` in the config file".to_string(),
            )
        })?;
    let seed = args.seed.or(sim.seed);

    EstimationConfigBuilder::new()
        .grid_size(grid_size)
        .trials(trials)
        .seed(seed)
        .build()
        .map_err(|e| CliError::Core(EngineError::from(e)))
}

fn apply_set_values(sim: &mut FileSimulationConfig, set_values: &[String]) -> Result<()> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key {
            "simulation.grid-size" => sim.grid_size = Some(parse_value(key, value_str)?),
            "simulation.trials" => sim.trials = Some(parse_value(key, value_str)?),
            "simulation.seed" => sim.seed = Some(parse_value(key, value_str)?),
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(())
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
    })
}
