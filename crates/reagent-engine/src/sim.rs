//! The simulation driver.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`]. All mutating methods take `&mut self`, and
//! [`advance()`](Simulation::advance) returns a `&Frame` borrowed from
//! `self`, so a caller cannot step again while still holding the previous
//! frame.

use std::time::Instant;

use log::{debug, info, trace, warn};
use reagent_arena::{BufferRole, PingPongGrids};
use reagent_core::{GrayScottParams, GridError, NonFiniteState, StepError, StepId};
use reagent_obs::{ColorPolicy, Frame, FrameSink};
use reagent_propagators::GrayScott;
use reagent_space::Grid;

use crate::config::{ConfigError, ExecutionMode, SimConfig};
use crate::metrics::StepMetrics;

// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// A running Gray-Scott simulation.
///
/// Created from a [`SimConfig`] via [`new()`](Simulation::new). Each
/// [`advance_frame()`](Simulation::advance_frame) runs `steps_per_frame`
/// sub-steps (step, then swap buffers) and renders one frame.
///
/// Divergence is not an error: cells may become NaN or infinite, the loop
/// keeps running, and the colour policy renders them deterministically.
/// Use [`check_finite()`](Simulation::check_finite) to surface it.
///
/// # Examples
///
/// ```
/// use reagent_core::GrayScottParams;
/// use reagent_engine::{SimConfig, Simulation};
///
/// let config = SimConfig::new(64, 64).with_params(GrayScottParams::preset("flower").unwrap());
/// let mut sim = Simulation::new(config).unwrap();
/// for _ in 0..5 {
///     sim.advance_frame().unwrap();
/// }
/// assert_eq!(sim.current_step().0, 50);
/// assert!(sim.check_finite().is_ok());
/// ```
pub struct Simulation {
    grids: PingPongGrids,
    stepper: GrayScott,
    initial: Grid,
    frame: Frame,
    color: Box<dyn ColorPolicy>,
    sink: Option<Box<dyn FrameSink>>,
    pool: Option<rayon::ThreadPool>,
    execution: ExecutionMode,
    steps_per_frame: u32,
    dt: f64,
    step: StepId,
    metrics: StepMetrics,
    diverged: bool,
}

impl Simulation {
    /// Validate `config`, build the seeded grid, and render the first frame.
    ///
    /// Parallel execution builds a dedicated rayon pool here.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let initial = config.initial_grid()?;
        let stepper = GrayScott::new(config.params)?;
        let pool = match config.execution {
            ExecutionMode::Serial => None,
            ExecutionMode::Parallel { .. } => {
                let threads = config.execution.resolved_worker_count();
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("reagent-step-{i}"))
                    .build()
                    .map_err(|e| ConfigError::ThreadPoolFailed {
                        reason: e.to_string(),
                    })?;
                Some(pool)
            }
        };
        let grids = PingPongGrids::new(initial.clone())?;
        let frame = Frame::rendered(&initial, config.color.as_ref());
        debug!(
            "simulation {}x{} created: {:?}, {} steps/frame, dt {}, {} worker(s)",
            config.width,
            config.height,
            config.params,
            config.steps_per_frame,
            config.dt,
            config.execution.resolved_worker_count(),
        );
        Ok(Self {
            grids,
            stepper,
            initial,
            frame,
            color: config.color,
            sink: None,
            pool,
            execution: config.execution,
            steps_per_frame: config.steps_per_frame,
            dt: config.dt,
            step: StepId::default(),
            metrics: StepMetrics::default(),
            diverged: false,
        })
    }

    /// Run one sub-step: fill the next grid from the current one, then swap.
    ///
    /// Does not render.
    pub fn step(&mut self) -> Result<(), StepError> {
        let dt = self.dt;
        let (current, next) = self.grids.split();
        match &self.pool {
            Some(pool) => pool.install(|| self.stepper.step_parallel(current, next, dt))?,
            None => self.stepper.step(current, next, dt)?,
        }
        self.grids.swap();
        self.step = self.step.next();
        Ok(())
    }

    /// Run `steps` sub-steps, then render and present one frame.
    ///
    /// `advance(0)` only re-renders.
    pub fn advance(&mut self, steps: u32) -> Result<&Frame, StepError> {
        let started = Instant::now();
        for _ in 0..steps {
            self.step()?;
        }
        let step_us = started.elapsed().as_micros() as u64;

        let grid = self.grids.current();
        let non_finite = grid.non_finite_cells();
        self.metrics = StepMetrics {
            substeps: steps,
            step_us,
            render_us: 0,
            non_finite_cells: non_finite.map_or(0, |(count, _)| count),
            total_mass: grid.total_mass(),
        };
        if let Some((count, first)) = non_finite {
            if !self.diverged {
                warn!(
                    "simulation diverged at step {}: {count} non-finite cell(s), first at index {first}",
                    self.step
                );
                self.diverged = true;
            }
        }

        let started = Instant::now();
        self.render();
        self.metrics.render_us = started.elapsed().as_micros() as u64;
        Ok(&self.frame)
    }

    /// [`advance`](Self::advance) by the configured `steps_per_frame`.
    pub fn advance_frame(&mut self) -> Result<&Frame, StepError> {
        self.advance(self.steps_per_frame)
    }

    /// Refresh the frame from the current grid and present it to the
    /// attached sink, if any.
    pub fn render(&mut self) -> &Frame {
        self.frame.render(self.grids.current(), self.color.as_ref());
        if let Some(sink) = self.sink.as_mut() {
            sink.present(&self.frame);
        }
        trace!("rendered frame at step {}", self.step);
        &self.frame
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Restore the seeded starting grid and the step counter to zero, then
    /// re-render.
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.grids.reset(self.initial.clone())?;
        self.step = StepId::default();
        self.metrics = StepMetrics::default();
        if self.diverged {
            info!("diverged simulation reset to its initial state");
            self.diverged = false;
        } else {
            debug!("simulation reset");
        }
        self.render();
        Ok(())
    }

    /// Seed a block on the live grid. See [`Grid::seed_block`].
    pub fn seed_block(
        &mut self,
        center_u: i32,
        center_v: i32,
        cluster_size: u32,
    ) -> Result<(), GridError> {
        self.grids
            .current_mut()
            .seed_block(center_u, center_v, cluster_size)
    }

    /// Seed a block at the centre of the live grid.
    pub fn seed_at_center(&mut self, cluster_size: u32) -> Result<(), GridError> {
        self.grids.current_mut().seed_at_center(cluster_size)
    }

    /// Report non-finite cells in the current grid.
    pub fn check_finite(&self) -> Result<(), NonFiniteState> {
        match self.grids.current().non_finite_cells() {
            None => Ok(()),
            Some((cells, first_index)) => Err(NonFiniteState {
                cells,
                first_index,
                step: self.step.0,
            }),
        }
    }

    /// Install a frame sink, returning the one it replaces.
    pub fn attach_sink(&mut self, sink: Box<dyn FrameSink>) -> Option<Box<dyn FrameSink>> {
        self.sink.replace(sink)
    }

    /// Remove the frame sink.
    pub fn detach_sink(&mut self) -> Option<Box<dyn FrameSink>> {
        self.sink.take()
    }

    /// The current (readable) grid.
    pub fn grid(&self) -> &Grid {
        self.grids.current()
    }

    /// Mutable access to the current grid between steps.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.grids.current_mut()
    }

    /// Sub-steps since construction or the last reset.
    pub fn current_step(&self) -> StepId {
        self.step
    }

    /// Which buffer is current.
    pub fn role(&self) -> BufferRole {
        self.grids.role()
    }

    /// The model parameters.
    pub fn params(&self) -> &GrayScottParams {
        self.stepper.params()
    }

    /// Configured sub-steps per frame.
    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    /// How sub-steps are executed.
    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    /// Metrics from the most recent [`advance`](Self::advance).
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.metrics
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("dims", &self.grids.current().dims())
            .field("params", self.stepper.params())
            .field("step", &self.step)
            .field("role", &self.grids.role())
            .field("execution", &self.execution)
            .field("diverged", &self.diverged)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reagent_obs::{ChannelMap, Rgb8};
    use reagent_space::{SeedPattern, SEEDED};
    use reagent_test_utils::RecordingSink;

    fn small() -> Simulation {
        let config = SimConfig::new(16, 12).with_seed(SeedPattern::Centered { cluster_size: 4 });
        Simulation::new(config).unwrap()
    }

    #[test]
    fn initial_frame_shows_seed() {
        let sim = small();
        assert_eq!(sim.frame().color(8, 6), Some(Rgb8::new(0, 0, 255)));
        assert_eq!(sim.frame().color(0, 0), Some(Rgb8::new(255, 0, 0)));
        assert_eq!(sim.current_step(), StepId(0));
    }

    #[test]
    fn advance_counts_substeps_and_flips_role() {
        let mut sim = small();
        sim.advance(3).unwrap();
        assert_eq!(sim.current_step(), StepId(3));
        assert_eq!(sim.role(), BufferRole::BCurrent);
        assert_eq!(sim.last_metrics().substeps, 3);
        sim.advance_frame().unwrap();
        assert_eq!(sim.current_step(), StepId(13));
        assert_eq!(sim.role(), BufferRole::BCurrent);
        assert_eq!(sim.last_metrics().substeps, 10);
        sim.advance(1).unwrap();
        assert_eq!(sim.current_step(), StepId(14));
        assert_eq!(sim.role(), BufferRole::ACurrent);
    }

    #[test]
    fn advance_zero_only_renders() {
        let mut sim = small();
        let before = sim.grid().clone();
        sim.advance(0).unwrap();
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.current_step(), StepId(0));
    }

    #[test]
    fn frame_refreshes_only_on_render() {
        let mut sim = small();
        let first = sim.frame().clone();
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.frame(), &first);
        let rendered = sim.render().clone();
        assert_ne!(rendered, first);
    }

    #[test]
    fn sink_receives_each_frame() {
        let mut sim = small();
        let recorder = RecordingSink::new();
        assert!(sim.attach_sink(Box::new(recorder.clone())).is_none());
        for _ in 0..4 {
            sim.advance_frame().unwrap();
        }
        assert_eq!(recorder.len(), 4);
        assert_eq!(recorder.last().as_ref(), Some(sim.frame()));
        let frames = recorder.frames();
        assert_eq!(frames.len(), 4);
        assert_eq!(&frames[3], sim.frame());
        assert_ne!(frames[0], frames[3]);
        assert!(sim.detach_sink().is_some());
        sim.advance_frame().unwrap();
        assert_eq!(recorder.len(), 4);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut sim = small();
        let initial = sim.grid().clone();
        let first_frame = sim.frame().clone();
        sim.advance(7).unwrap();
        sim.reset().unwrap();
        assert_eq!(sim.grid(), &initial);
        assert_eq!(sim.current_step(), StepId(0));
        assert_eq!(sim.role(), BufferRole::ACurrent);
        assert_eq!(sim.frame(), &first_frame);
    }

    #[test]
    fn seeding_between_steps() {
        let mut sim = small();
        sim.advance(2).unwrap();
        sim.seed_block(2, 2, 2).unwrap();
        assert_eq!(sim.grid().get_point(1, 1), SEEDED);
        assert!(sim.seed_block(0, 0, 2).is_err());
    }

    #[test]
    fn custom_policy_is_used() {
        let config = SimConfig::new(4, 4)
            .with_seed(SeedPattern::Centered { cluster_size: 0 })
            .with_color(|_a: f64, _b: f64| Rgb8::WHITE);
        let sim = Simulation::new(config).unwrap();
        assert!(sim.frame().pixels().iter().all(|&p| p == Rgb8::WHITE));
    }

    #[test]
    fn divergence_is_reported_not_raised() {
        let mut sim = small();
        sim.grid_mut().set_point(3, 3, f64::NAN, 0.0).unwrap();
        sim.advance(2).unwrap();
        let report = sim.check_finite().unwrap_err();
        assert_eq!(report.step, 2);
        assert!(report.cells > 1);
        assert!(sim.last_metrics().non_finite_cells > 1);
        assert!(sim
            .frame()
            .pixels()
            .contains(&ChannelMap::RED_BLUE.non_finite));
        sim.reset().unwrap();
        assert!(sim.check_finite().is_ok());
    }

    #[test]
    fn parallel_pool_is_built() {
        let mut config = SimConfig::new(16, 16);
        config.execution = ExecutionMode::Parallel {
            worker_count: Some(2),
        };
        let mut sim = Simulation::new(config).unwrap();
        sim.advance_frame().unwrap();
        assert_eq!(sim.current_step(), StepId(10));
    }
}
