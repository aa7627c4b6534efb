//! ACO configuration.

/// Configuration for the colony optimizer.
///
/// Defaults follow the reference parameterization: pheromone slightly
/// de-emphasized relative to greedy distance bias (`alpha` < 1, large
/// `beta`), slow evaporation, small deposit factor.
///
/// # Examples
///
/// ```
/// use tsp_colony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_iteration_count(200)
///     .with_ant_count(30)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Number of colony generations to run.
    pub iteration_count: usize,

    /// Number of agents walked per generation.
    pub ant_count: usize,

    /// Weight of the accumulated pheromone trail in edge selection.
    pub alpha: f64,

    /// Weight of inverse distance in edge selection (greedy bias).
    pub beta: f64,

    /// Fraction of pheromone retained each iteration, in (0, 1).
    /// Applied once per generation after all deposits.
    pub evaporation: f64,

    /// Total pheromone mass (Q) an agent deposits over its tour,
    /// divided among the tour's edges in proportion to inverse length:
    /// shorter tours reinforce each edge more.
    pub q: f64,

    /// Uniform initial trail intensity on every edge.
    pub initial_pheromone: f64,

    /// Random seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            iteration_count: 100,
            ant_count: 50,
            alpha: 0.8,
            beta: 5.0,
            evaporation: 0.9,
            q: 0.1,
            initial_pheromone: 1.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_iteration_count(mut self, n: usize) -> Self {
        self.iteration_count = n;
        self
    }

    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
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

    pub fn with_evaporation(mut self, rate: f64) -> Self {
        self.evaporation = rate;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_initial_pheromone(mut self, tau: f64) -> Self {
        self.initial_pheromone = tau;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Adversarial but formally valid constants (e.g. `q` enormous
    /// relative to evaporation) can still drive pheromone values toward
    /// overflow over many iterations; that boundary is documented rather
    /// than checked at runtime.
    pub fn validate(&self) -> Result<(), String> {
        if self.iteration_count == 0 {
            return Err("iteration_count must be at least 1".into());
        }
        if self.ant_count == 0 {
            return Err("ant_count must be at least 1".into());
        }
        if self.alpha < 0.0 {
            return Err(format!("alpha must be non-negative, got {}", self.alpha));
        }
        if self.beta < 0.0 {
            return Err(format!("beta must be non-negative, got {}", self.beta));
        }
        if self.evaporation <= 0.0 || self.evaporation >= 1.0 {
            return Err(format!(
                "evaporation must be in (0, 1), got {}",
                self.evaporation
            ));
        }
        if self.q <= 0.0 {
            return Err(format!("q must be positive, got {}", self.q));
        }
        if self.initial_pheromone <= 0.0 {
            return Err(format!(
                "initial_pheromone must be positive, got {}",
                self.initial_pheromone
            ));
        }
        Ok(())
    }
}
