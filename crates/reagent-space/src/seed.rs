//! Initial-state descriptions.
//!
//! A [`SeedPattern`] describes the perturbation that triggers pattern
//! formation. Applying a pattern is all-or-nothing: every block is
//! bounds-checked before the first write.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reagent_core::GridError;

use crate::grid::{half_extent, Grid};

/// How to perturb a fresh grid before the first step.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedPattern {
    /// One block at the grid's own centre.
    Centered {
        /// Block side before rounding (see [`Grid::seed_block`]).
        cluster_size: u32,
    },
    /// One block at an explicit centre.
    Block {
        /// Centre column.
        center_u: i32,
        /// Centre row.
        center_v: i32,
        /// Block side before rounding.
        cluster_size: u32,
    },
    /// Several blocks of the same size.
    Blocks {
        /// `(u, v)` centres.
        centers: Vec<(i32, i32)>,
        /// Block side before rounding.
        cluster_size: u32,
    },
    /// `count` blocks at centres drawn from a ChaCha8 stream.
    ///
    /// Centres are chosen so every block fits inside the grid; the same
    /// `seed` always produces the same layout.
    Random {
        /// Number of blocks.
        count: u32,
        /// Block side before rounding.
        cluster_size: u32,
        /// RNG seed.
        seed: u64,
    },
    /// Arbitrary row-major initial fields.
    Field {
        /// Initial A values.
        a: Vec<f64>,
        /// Initial B values.
        b: Vec<f64>,
    },
}

impl Default for SeedPattern {
    /// A centred 10-cell block.
    fn default() -> Self {
        Self::Centered { cluster_size: 10 }
    }
}

impl SeedPattern {
    /// Build a fresh `width x height` grid with this pattern applied.
    pub fn build(&self, width: u32, height: u32) -> Result<Grid, GridError> {
        if let Self::Field { a, b } = self {
            return Grid::from_fields(width, height, a.clone(), b.clone());
        }
        let mut grid = Grid::new(width, height)?;
        self.apply(&mut grid)?;
        Ok(grid)
    }

    /// Apply this pattern on top of the grid's current contents.
    ///
    /// On error the grid is left unchanged.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), GridError> {
        match self {
            Self::Centered { cluster_size } => grid.seed_at_center(*cluster_size),
            Self::Block {
                center_u,
                center_v,
                cluster_size,
            } => grid.seed_block(*center_u, *center_v, *cluster_size),
            Self::Blocks {
                centers,
                cluster_size,
            } => seed_all(grid, centers, *cluster_size),
            Self::Random {
                count,
                cluster_size,
                seed,
            } => {
                let centers = random_centers(grid, *count, *cluster_size, *seed);
                seed_all(grid, &centers, *cluster_size)
            }
            Self::Field { a, b } => grid.load_fields(a, b),
        }
    }
}

fn seed_all(grid: &mut Grid, centers: &[(i32, i32)], cluster_size: u32) -> Result<(), GridError> {
    for &(u, v) in centers {
        grid.check_block(u, v, cluster_size)?;
    }
    for &(u, v) in centers {
        grid.seed_block(u, v, cluster_size)?;
    }
    Ok(())
}

/// Centres whose blocks fit inside the grid.
///
/// If the block is wider than the grid there is no valid centre; the
/// origin-most candidate is returned so that seeding reports the overflow.
fn random_centers(grid: &Grid, count: u32, cluster_size: u32, seed: u64) -> Vec<(i32, i32)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let h = half_extent(cluster_size);
    let max_u = i64::from(grid.width()) - h;
    let max_v = i64::from(grid.height()) - h;
    (0..count)
        .map(|_| {
            let u = if max_u >= h { rng.random_range(h..=max_u) } else { h };
            let v = if max_v >= h { rng.random_range(h..=max_v) } else { h };
            (u as i32, v as i32)
        })
        .collect()
}
