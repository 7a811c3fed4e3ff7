use crate::core::error::{PercolationError, Result};
use crate::core::stats;
use crate::engine::config::EstimationConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::trial::run_trial;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

/// Percolation threshold statistics over a batch of independent trials.
///
/// Constructing a `PercolationStats` runs every trial; the recorded open-site fractions are
/// fixed from then on and all statistics are computed from them on demand.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    fractions: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` independent trials on `n`-by-`n` grids, drawing sites from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `n` or `trials` is zero.
    pub fn new(n: usize, trials: usize, rng: &mut impl Rng) -> Result<Self> {
        Self::with_reporter(n, trials, rng, &ProgressReporter::new())
    }

    /// Same as [`PercolationStats::new`], reporting one `TrialFinish` event per trial.
    #[instrument(level = "debug", skip(rng, reporter))]
    pub fn with_reporter(
        n: usize,
        trials: usize,
        rng: &mut impl Rng,
        reporter: &ProgressReporter,
    ) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be at least 1".to_string(),
            ));
        }
        if trials == 0 {
            return Err(PercolationError::InvalidArgument(
                "trial count must be at least 1".to_string(),
            ));
        }

        reporter.report(Progress::PhaseStart {
            name: "Running trials",
        });
        reporter.report(Progress::TrialsStart {
            total: trials as u64,
        });

        let mut fractions = Vec::with_capacity(trials);
        for index in 0..trials {
            let fraction = run_trial(n, rng)?;
            debug!(trial = index, fraction, "Trial complete.");
            reporter.report(Progress::TrialFinish { index, fraction });
            fractions.push(fraction);
        }

        reporter.report(Progress::TrialsFinish);
        reporter.report(Progress::PhaseFinish);

        Ok(Self {
            grid_size: n,
            fractions,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.fractions.len()
    }

    /// Open-site fraction recorded by each trial, in trial order.
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.fractions)
    }

    /// Sample standard deviation of the percolation threshold.
    ///
    /// NaN when only one trial was run, since the estimate needs at least two samples.
    pub fn stddev(&self) -> f64 {
        stats::stddev(&self.fractions)
    }

    /// Low endpoint of the 95% confidence interval. NaN when only one trial was run.
    pub fn confidence_lo(&self) -> f64 {
        self.confidence_interval().0
    }

    /// High endpoint of the 95% confidence interval. NaN when only one trial was run.
    pub fn confidence_hi(&self) -> f64 {
        self.confidence_interval().1
    }

    fn confidence_interval(&self) -> (f64, f64) {
        stats::confidence_interval(self.mean(), self.stddev(), self.trials())
    }
}

/// Runs a full estimation as described by `config`.
///
/// The trial RNG is a `ChaCha8Rng` seeded from `config.seed`, or from a freshly drawn seed
/// when none is given. The seed in use is logged so that any run can be repeated.
#[instrument(skip_all, name = "estimation_workflow")]
pub fn run(
    config: &EstimationConfig,
    reporter: &ProgressReporter,
) -> std::result::Result<PercolationStats, EngineError> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    info!(
        grid_size = config.grid_size,
        trials = config.trials,
        seed,
        "Starting percolation threshold estimation."
    );
    if !reporter.is_silent() {
        reporter.report(Progress::Message(format!("Using seed {}", seed)));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let stats =
        PercolationStats::with_reporter(config.grid_size, config.trials, &mut rng, reporter)?;

    info!(
        grid_size = stats.grid_size(),
        trials = stats.trials(),
        mean = stats.mean(),
        stddev = stats.stddev(),
        "Estimation complete."
    );
    Ok(stats)
}
