//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input to [`Simulation::new`](crate::Simulation::new).
//! [`validate()`](SimConfig::validate) checks every structural invariant
//! up front so that a constructed simulation never has to.

use std::error::Error;
use std::fmt;

use reagent_core::{GrayScottParams, GridError, ParamsError};
use reagent_obs::{ChannelMap, ColorPolicy};
use reagent_space::{Grid, SeedPattern};

/// Upper bound on explicit worker counts.
pub const MAX_WORKERS: usize = 64;

// ── ExecutionMode ──────────────────────────────────────────────────

/// How a single sub-step is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Every row on the calling thread.
    #[default]
    Serial,
    /// Rows distributed over a dedicated rayon pool.
    Parallel {
        /// Pool size. `None` = `available_parallelism`, clamped to
        /// `[1, MAX_WORKERS]`.
        worker_count: Option<usize>,
    },
}

impl ExecutionMode {
    /// Resolve the number of threads that will step the grid.
    pub fn resolved_worker_count(&self) -> usize {
        match *self {
            Self::Serial => 1,
            Self::Parallel {
                worker_count: Some(n),
            } => n.clamp(1, MAX_WORKERS),
            Self::Parallel { worker_count: None } => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, MAX_WORKERS),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a [`SimConfig`] or building a
/// simulation from it.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are invalid or the seed pattern does not fit.
    Grid(GridError),
    /// A model parameter is not finite.
    Params(ParamsError),
    /// `dt` is NaN or infinite.
    InvalidDt {
        /// The invalid value.
        value: f64,
    },
    /// `steps_per_frame` is zero.
    ZeroStepsPerFrame,
    /// An explicit worker count is zero or above [`MAX_WORKERS`].
    InvalidWorkerCount {
        /// The configured count.
        value: usize,
    },
    /// The rayon pool could not be built.
    ThreadPoolFailed {
        /// Reason reported by rayon.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Params(e) => write!(f, "params: {e}"),
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite, got {value}")
            }
            Self::ZeroStepsPerFrame => write!(f, "steps_per_frame must be at least 1"),
            Self::InvalidWorkerCount { value } => {
                write!(f, "worker_count {value} outside [1, {MAX_WORKERS}]")
            }
            Self::ThreadPoolFailed { reason } => {
                write!(f, "thread pool construction failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Params(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ParamsError> for ConfigError {
    fn from(e: ParamsError) -> Self {
        Self::Params(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for a [`Simulation`](crate::Simulation).
pub struct SimConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Gray-Scott parameters, fixed for the life of the run.
    pub params: GrayScottParams,
    /// Initial perturbation. Default: centred 10-cell block.
    pub seed: SeedPattern,
    /// Sub-steps per rendered frame. Default: 10. Minimum: 1.
    pub steps_per_frame: u32,
    /// Time step per sub-step, before `time_scale`. Any finite value.
    /// Default: 1.0.
    pub dt: f64,
    /// Serial or row-parallel stepping. Default: serial.
    pub execution: ExecutionMode,
    /// Cell-to-colour mapping. Default: [`ChannelMap::RED_BLUE`].
    pub color: Box<dyn ColorPolicy>,
}

impl fmt::Debug for SimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimConfig")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("params", &self.params)
            .field("seed", &self.seed)
            .field("steps_per_frame", &self.steps_per_frame)
            .field("dt", &self.dt)
            .field("execution", &self.execution)
            .finish_non_exhaustive()
    }
}

impl SimConfig {
    /// A `width x height` configuration with every other field at its
    /// default.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            params: GrayScottParams::default(),
            seed: SeedPattern::default(),
            steps_per_frame: 10,
            dt: 1.0,
            execution: ExecutionMode::Serial,
            color: Box::new(ChannelMap::RED_BLUE),
        }
    }

    /// Replace the parameters.
    pub fn with_params(mut self, params: GrayScottParams) -> Self {
        self.params = params;
        self
    }

    /// Replace the seed pattern.
    pub fn with_seed(mut self, seed: SeedPattern) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the colour policy.
    pub fn with_color(mut self, color: impl ColorPolicy + 'static) -> Self {
        self.color = Box::new(color);
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_grid().map(drop)
    }

    /// Run the scalar checks, then build the seeded starting grid.
    pub(crate) fn initial_grid(&self) -> Result<Grid, ConfigError> {
        // 1. Parameters must be finite.
        self.params.validate()?;
        // 2. dt finite.
        if !self.dt.is_finite() {
            return Err(ConfigError::InvalidDt { value: self.dt });
        }
        // 3. At least one sub-step per frame.
        if self.steps_per_frame == 0 {
            return Err(ConfigError::ZeroStepsPerFrame);
        }
        // 4. Explicit worker counts in range.
        if let ExecutionMode::Parallel {
            worker_count: Some(n),
        } = self.execution
        {
            if n == 0 || n > MAX_WORKERS {
                return Err(ConfigError::InvalidWorkerCount { value: n });
            }
        }
        // 5. Dimensions, seed placement, and field lengths.
        Ok(self.seed.build(self.width, self.height)?)
    }
}
