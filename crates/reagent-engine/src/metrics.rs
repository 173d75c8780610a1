//! Per-frame metrics for the simulation driver.

/// Timing and state summary of the most recent
/// [`advance`](crate::Simulation::advance) call.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Sub-steps executed by the call.
    pub substeps: u32,
    /// Wall-clock time spent stepping, in microseconds.
    pub step_us: u64,
    /// Wall-clock time spent rendering and presenting, in microseconds.
    pub render_us: u64,
    /// Cells whose A or B is NaN or infinite after the call.
    pub non_finite_cells: usize,
    /// `sum(A) + sum(B)` after the call.
    pub total_mass: f64,
}
