//! ACO configuration.

/// Configuration for the Ant Colony Optimization solver.
///
/// # Defaults
///
/// ```
/// use aco_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.n_ants, 20);
/// assert_eq!(config.max_iterations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use aco_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_n_ants(50)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_rho(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants dispatched per generation.
    ///
    /// Each ant builds one tour attempt. Typical range: 10–200.
    pub n_ants: usize,

    /// Number of generations before termination.
    ///
    /// The iteration budget is the only built-in termination signal;
    /// there is no convergence-based early stopping.
    pub max_iterations: usize,

    /// Pheromone influence exponent (non-negative).
    ///
    /// Higher values make ants follow established trails more strongly.
    pub alpha: f64,

    /// Heuristic (inverse-distance) influence exponent (non-negative).
    ///
    /// Higher values make ants greedier toward near neighbors.
    pub beta: f64,

    /// Evaporation rate in `[0, 1]`.
    ///
    /// Every trail decays by the factor `1 - rho` once per generation.
    pub rho: f64,

    /// Initial pheromone level on every trail.
    pub initial_pheromone: f64,

    /// Whether to run the ants of one generation in parallel using rayon.
    ///
    /// Ants share only the generation's immutable attractiveness snapshot;
    /// each gets its own seeded RNG, so results are reproducible for a
    /// given `seed` regardless of this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation; exceeding it is a
    /// non-fatal abort returning the best tour found so far. The actual
    /// runtime may overshoot by one generation's worth of work.
    ///
    /// `None` disables time-based termination (the default).
    pub time_limit_ms: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            n_ants: 20,
            max_iterations: 100,
            alpha: 1.0,
            beta: 5.0,
            rho: 0.5,
            initial_pheromone: 1.0,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AcoConfig {
    pub fn with_n_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_ants == 0 {
            return Err("n_ants must be positive".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be non-negative, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be non-negative, got {}", self.beta));
        }
        if !self.rho.is_finite() || !(0.0..=1.0).contains(&self.rho) {
            return Err(format!("rho must be in [0, 1], got {}", self.rho));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone < 0.0 {
            return Err(format!(
                "initial_pheromone must be non-negative, got {}",
                self.initial_pheromone
            ));
        }
        Ok(())
    }
}
