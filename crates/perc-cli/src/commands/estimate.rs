use crate::cli::EstimateArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use percolation::engine::progress::ProgressReporter;
use percolation::workflows::estimate::{self, PercolationStats};
use tracing::{info, warn};

pub fn run(args: EstimateArgs) -> Result<()> {
    info!("Resolving configuration from arguments and config file...");
    let config = config::build_config(&args)?;

    let reporter = if args.no_progress {
        ProgressReporter::new()
    } else {
        let progress_handler = CliProgressHandler::new();
        ProgressReporter::with_callback(progress_handler.get_callback())
    };

    info!(
        "Estimating the threshold of a {0}x{0} grid over {1} trial(s)...",
        config.grid_size, config.trials
    );
    let stats = estimate::run(&config, &reporter)?;

    if stats.trials() == 1 {
        warn!("Only one trial was run; the standard deviation and confidence interval are undefined.");
    }

    print!("{}", format_report(&stats));
    Ok(())
}

pub fn format_report(stats: &PercolationStats) -> String {
    format!(
        "mean                    = {}\n\
         stddev                  = {}\n\
         95% confidence interval = [{}, {}]\n",
        stats.mean(),
        stats.stddev(),
        stats.confidence_lo(),
        stats.confidence_hi()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn report_lists_all_statistics() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = PercolationStats::new(10, 20, &mut rng).unwrap();
        let report = format_report(&stats);

        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("mean                    = {}", stats.mean()));
        assert_eq!(lines[1], format!("stddev                  = {}", stats.stddev()));
        assert_eq!(
            lines[2],
            format!(
                "95% confidence interval = [{}, {}]",
                stats.confidence_lo(),
                stats.confidence_hi()
            )
        );
    }

    #[test]
    fn report_for_single_trial_shows_nan_spread() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = PercolationStats::new(4, 1, &mut rng).unwrap();
        let report = format_report(&stats);
        assert!(report.contains("stddev                  = NaN"));
        assert!(report.contains("[NaN, NaN]"));
    }
}
