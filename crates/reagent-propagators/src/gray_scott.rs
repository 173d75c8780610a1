//! Gray-Scott reaction-diffusion stepper.
//!
//! Reads the frozen current grid through the Laplacian kernel and writes
//! every cell of the next grid. Because each cell depends only on the
//! pre-step values of its neighbourhood, the sweep can be split into rows
//! and run in any order, including in parallel, with identical results.

use rayon::prelude::*;
use reagent_core::{GrayScottParams, ParamsError, Species, StepError};
use reagent_space::{axis_window, Grid};

use crate::laplacian::{laplacian, stencil};

/// Gray-Scott update rule bound to one parameter set.
///
/// Per cell, with `dt_eff = dt * time_scale`:
/// ```text
/// a' = a + (Da * la - a*b*b + f * (1 - a)) * dt_eff
/// b' = b + (Db * lb + a*b*b - (k + f) * b) * dt_eff
/// ```
/// No clamping is applied; divergent parameter sets may drive cells to
/// NaN or infinity.
///
/// # Examples
///
/// ```
/// use reagent_core::GrayScottParams;
/// use reagent_propagators::GrayScott;
/// use reagent_space::Grid;
///
/// let stepper = GrayScott::new(GrayScottParams::default()).unwrap();
/// let mut current = Grid::new(16, 16).unwrap();
/// current.seed_at_center(4).unwrap();
/// let mut next = Grid::new(16, 16).unwrap();
/// stepper.step(&current, &mut next, 1.0).unwrap();
/// assert_ne!(current, next);
/// ```
#[derive(Clone, Debug)]
pub struct GrayScott {
    params: GrayScottParams,
}

impl GrayScott {
    /// Create a stepper after checking that every parameter is finite.
    pub fn new(params: GrayScottParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The parameters this stepper was built with.
    pub fn params(&self) -> &GrayScottParams {
        &self.params
    }

    /// Apply the reaction-diffusion formula to one cell.
    ///
    /// `dt_eff` already includes the time scale.
    #[inline]
    pub fn react(&self, a: f64, b: f64, la: f64, lb: f64, dt_eff: f64) -> (f64, f64) {
        let p = &self.params;
        let abb = a * b * b;
        let a_next = a + (p.diffusion_a * la - abb + p.feed_rate * (1.0 - a)) * dt_eff;
        let b_next = b + (p.diffusion_b * lb + abb - (p.kill_rate + p.feed_rate) * b) * dt_eff;
        (a_next, b_next)
    }

    /// Updated value of a single cell, computed through wrapped point
    /// lookups. Bit-identical to what [`step`](Self::step) writes there.
    pub fn update_cell(&self, grid: &Grid, u: i32, v: i32, dt: f64) -> (f64, f64) {
        let (a, b) = grid.get_point(u, v);
        let la = laplacian(grid, u, v, Species::A);
        let lb = laplacian(grid, u, v, Species::B);
        self.react(a, b, la, lb, self.effective_dt(dt))
    }

    /// `dt * time_scale`.
    pub fn effective_dt(&self, dt: f64) -> f64 {
        dt * self.params.time_scale
    }

    /// Fill `next` from `current`, one row at a time on this thread.
    ///
    /// `current` is only read. Every cell of `next` is overwritten.
    pub fn step(&self, current: &Grid, next: &mut Grid, dt: f64) -> Result<(), StepError> {
        check_shapes(current, next)?;
        let width = current.width() as usize;
        let dt_eff = self.effective_dt(dt);
        let (next_a, next_b) = next.fields_mut();
        next_a
            .chunks_mut(width)
            .zip(next_b.chunks_mut(width))
            .enumerate()
            .for_each(|(v, (row_a, row_b))| self.update_row(current, v, row_a, row_b, dt_eff));
        Ok(())
    }

    /// Fill `next` from `current` with rows distributed over the rayon pool
    /// the call runs in.
    ///
    /// Each row of `next` is written by exactly one task and all reads come
    /// from `current`; the parallel iterator joins before returning. The
    /// output is bit-identical to [`step`](Self::step).
    pub fn step_parallel(
        &self,
        current: &Grid,
        next: &mut Grid,
        dt: f64,
    ) -> Result<(), StepError> {
        check_shapes(current, next)?;
        let width = current.width() as usize;
        let dt_eff = self.effective_dt(dt);
        let (next_a, next_b) = next.fields_mut();
        next_a
            .par_chunks_mut(width)
            .zip(next_b.par_chunks_mut(width))
            .enumerate()
            .for_each(|(v, (row_a, row_b))| self.update_row(current, v, row_a, row_b, dt_eff));
        Ok(())
    }

    fn update_row(
        &self,
        current: &Grid,
        v: usize,
        row_a: &mut [f64],
        row_b: &mut [f64],
        dt_eff: f64,
    ) {
        let width = current.width() as usize;
        let height = current.height() as usize;
        let field_a = current.field(Species::A);
        let field_b = current.field(Species::B);
        let rows = axis_window(v, height).map(|r| r * width);
        let base = v * width;
        for u in 0..width {
            let cols = axis_window(u, width);
            let la = stencil(field_a, rows, cols);
            let lb = stencil(field_b, rows, cols);
            let (a, b) = (field_a[base + u], field_b[base + u]);
            let (a_next, b_next) = self.react(a, b, la, lb, dt_eff);
            row_a[u] = a_next;
            row_b[u] = b_next;
        }
    }
}

fn check_shapes(current: &Grid, next: &Grid) -> Result<(), StepError> {
    if current.same_shape(next) {
        Ok(())
    } else {
        Err(StepError::DimensionMismatch {
            current: current.dims(),
            next: next.dims(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use reagent_test_utils::{random_grid, spot_grid};

    fn reference() -> GrayScott {
        GrayScott::new(GrayScottParams::default()).unwrap()
    }

    #[test]
    fn non_finite_params_rejected() {
        let p = GrayScottParams::with_rates(0.04, f64::NAN);
        assert!(GrayScott::new(p).is_err());
    }

    #[test]
    fn background_is_a_fixed_point() {
        let current = Grid::new(6, 4).unwrap();
        let mut next = Grid::new(6, 4).unwrap();
        next.fill(9.0, 9.0);
        reference().step(&current, &mut next, 1.0).unwrap();
        assert_eq!(next, current);
    }

    #[test]
    fn spot_centre_matches_closed_form() {
        let current = spot_grid();
        let mut next = Grid::new(3, 3).unwrap();
        reference().step(&current, &mut next, 1.0).unwrap();
        let (a, b) = next.get_point(1, 1);
        // la = 1.0, lb = -1.0, a = 0, b = 1.
        assert!((a - 1.04).abs() < 1e-9, "a' = {a}");
        assert!((b - 0.5).abs() < 1e-9, "b' = {b}");
    }

    #[test]
    fn current_is_never_written() {
        let current = random_grid(8, 5, 7);
        let snapshot = current.clone();
        let mut next = Grid::new(8, 5).unwrap();
        reference().step(&current, &mut next, 1.0).unwrap();
        reference().step_parallel(&current, &mut next, 1.0).unwrap();
        assert_eq!(current, snapshot);
    }

    #[test]
    fn shape_mismatch_rejected() {
        let current = Grid::new(4, 4).unwrap();
        let mut next = Grid::new(4, 5).unwrap();
        assert_eq!(
            reference().step(&current, &mut next, 1.0),
            Err(StepError::DimensionMismatch {
                current: (4, 4),
                next: (4, 5),
            })
        );
        assert!(reference().step_parallel(&current, &mut next, 1.0).is_err());
    }

    #[test]
    fn time_scale_multiplies_dt() {
        let p = GrayScottParams {
            time_scale: 0.5,
            ..Default::default()
        };
        let half = GrayScott::new(p).unwrap();
        let g = spot_grid();
        assert_eq!(half.update_cell(&g, 1, 1, 2.0), reference().update_cell(&g, 1, 1, 1.0));
    }

    #[test]
    fn zero_dt_copies_current() {
        let current = random_grid(5, 5, 3);
        let mut next = Grid::new(5, 5).unwrap();
        reference().step(&current, &mut next, 0.0).unwrap();
        assert_eq!(next, current);
    }

    proptest! {
        #[test]
        fn repeated_step_is_bit_identical(w in 1u32..10, h in 1u32..10, seed in any::<u64>()) {
            let current = random_grid(w, h, seed);
            let mut first = Grid::new(w, h).unwrap();
            let mut second = Grid::new(w, h).unwrap();
            second.fill(f64::NAN, f64::NAN);
            reference().step(&current, &mut first, 1.0).unwrap();
            reference().step(&current, &mut second, 1.0).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn parallel_matches_serial(w in 1u32..24, h in 1u32..24, seed in any::<u64>()) {
            let current = random_grid(w, h, seed);
            let mut serial = Grid::new(w, h).unwrap();
            let mut parallel = Grid::new(w, h).unwrap();
            reference().step(&current, &mut serial, 1.0).unwrap();
            reference().step_parallel(&current, &mut parallel, 1.0).unwrap();
            prop_assert_eq!(serial, parallel);
        }

        #[test]
        fn step_agrees_with_per_cell_update(w in 1u32..8, h in 1u32..8, seed in any::<u64>()) {
            let current = random_grid(w, h, seed);
            let mut next = Grid::new(w, h).unwrap();
            reference().step(&current, &mut next, 1.0).unwrap();
            for v in 0..h as i32 {
                for u in 0..w as i32 {
                    let (a, b) = reference().update_cell(&current, u, v, 1.0);
                    let (na, nb) = next.get_point(u, v);
                    prop_assert_eq!(a.to_bits(), na.to_bits());
                    prop_assert_eq!(b.to_bits(), nb.to_bits());
                }
            }
        }
    }
}
