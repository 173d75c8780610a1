//! Fixed-weight 3x3 discrete Laplacian on a torus.
//!
//! ```text
//!   0.05  0.20  0.05
//!   0.20 -1.00  0.20
//!   0.05  0.20  0.05
//! ```
//!
//! The nine weights sum to zero, so the operator is evaluated in deviation
//! form: `Wo * (sum_orth - 4c) + Wd * (sum_diag - 4c)`. This is the same
//! weighted sum rearranged, and it makes a uniform field produce exactly
//! `0.0` instead of a rounding residue.

use reagent_core::Species;
use reagent_space::Grid;

/// Weight of the centre cell.
pub const WEIGHT_CENTER: f64 = -1.0;
/// Weight of each of the four orthogonal neighbours.
pub const WEIGHT_ORTHOGONAL: f64 = 0.2;
/// Weight of each of the four diagonal neighbours.
pub const WEIGHT_DIAGONAL: f64 = 0.05;

// The deviation form is only valid for a zero-sum stencil.
const _: () = assert!(4.0 * WEIGHT_ORTHOGONAL + 4.0 * WEIGHT_DIAGONAL == -WEIGHT_CENTER);

/// Combine a centre value with its `[N, S, W, E]` and `[NW, NE, SW, SE]`
/// neighbours. Sums are paired so that four equal terms add exactly.
#[inline]
fn combine(center: f64, orth: [f64; 4], diag: [f64; 4]) -> f64 {
    let orth_sum = (orth[0] + orth[1]) + (orth[2] + orth[3]);
    let diag_sum = (diag[0] + diag[1]) + (diag[2] + diag[3]);
    let four_c = 4.0 * center;
    WEIGHT_ORTHOGONAL * (orth_sum - four_c) + WEIGHT_DIAGONAL * (diag_sum - four_c)
}

/// Laplacian of one species at `(u, v)`, reading neighbours through
/// [`Grid::get_point`] so every lookup wraps around the torus.
///
/// # Examples
///
/// ```
/// use reagent_core::Species;
/// use reagent_propagators::laplacian;
/// use reagent_space::Grid;
///
/// let grid = Grid::new(4, 4).unwrap();
/// assert_eq!(laplacian(&grid, 0, 0, Species::A), 0.0);
/// ```
pub fn laplacian(grid: &Grid, u: i32, v: i32, species: Species) -> f64 {
    let at = |du: i32, dv: i32| species.select(grid.get_point(u + du, v + dv));
    combine(
        at(0, 0),
        [at(0, -1), at(0, 1), at(-1, 0), at(1, 0)],
        [at(-1, -1), at(1, -1), at(-1, 1), at(1, 1)],
    )
}

/// Laplacian over a raw row-major field.
///
/// `rows` holds the start offsets (`v * width`) of the previous, current
/// and next rows; `cols` the previous, current and next columns. Both are
/// already wrapped (see [`reagent_space::axis_window`]). Produces the same
/// bits as [`laplacian`] for the same cell.
#[inline]
pub fn stencil(field: &[f64], rows: [usize; 3], cols: [usize; 3]) -> f64 {
    let [up, mid, down] = rows;
    let [left, centre, right] = cols;
    combine(
        field[mid + centre],
        [
            field[up + centre],
            field[down + centre],
            field[mid + left],
            field[mid + right],
        ],
        [
            field[up + left],
            field[up + right],
            field[down + left],
            field[down + right],
        ],
    )
}
