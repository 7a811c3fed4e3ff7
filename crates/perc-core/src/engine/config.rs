use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Parameters of a percolation threshold estimation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimationConfig {
    /// Grid dimension `n` of each `n`-by-`n` trial grid.
    pub grid_size: usize,
    /// Number of independent trials.
    pub trials: usize,
    /// Seed for the trial RNG. A fresh seed is drawn when `None`.
    pub seed: Option<u64>,
}

#[derive(Default)]
pub struct EstimationConfigBuilder {
    grid_size: Option<usize>,
    trials: Option<usize>,
    seed: Option<u64>,
}

impl EstimationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_size(mut self, n: usize) -> Self {
        self.grid_size = Some(n);
        self
    }
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<EstimationConfig, ConfigError> {
        let grid_size = self
            .grid_size
            .ok_or(ConfigError::MissingParameter("grid_size"))?;
        let trials = self.trials.ok_or(ConfigError::MissingParameter("trials"))?;

        if grid_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "grid_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if trials == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "trials",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(EstimationConfig {
            grid_size,
            trials,
            seed: self.seed,
        })
    }
}
