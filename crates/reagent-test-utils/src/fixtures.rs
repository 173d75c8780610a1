//! Reusable grid and sink fixtures.
//!
//! - [`spot_grid`]: 3x3 background with one seeded centre cell.
//! - [`random_grid`]: reproducible noise in `[0, 1)` from a 64-bit seed.
//! - [`uniform_grid`]: every cell at the same `(a, b)`.

use std::sync::{Arc, Mutex};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reagent_obs::{Frame, FrameSink};
use reagent_space::{Grid, SEEDED};

/// 3x3 grid at background `(1, 0)` except the centre `(1, 1)` at `(0, 1)`.
pub fn spot_grid() -> Grid {
    let mut g = Grid::new(3, 3).expect("3x3 is valid");
    g.set_point(1, 1, SEEDED.0, SEEDED.1)
        .expect("centre is in bounds");
    g
}

/// Grid with both fields drawn uniformly from `[0, 1)`.
///
/// The same `(width, height, seed)` always yields the same grid.
pub fn random_grid(width: u32, height: u32, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = width as usize * height as usize;
    let a: Vec<f64> = (0..cells).map(|_| rng.random::<f64>()).collect();
    let b: Vec<f64> = (0..cells).map(|_| rng.random::<f64>()).collect();
    Grid::from_fields(width, height, a, b).expect("fields sized to grid")
}

/// Grid with every cell at `(a, b)`.
pub fn uniform_grid(width: u32, height: u32, a: f64, b: f64) -> Grid {
    let mut g = Grid::new(width, height).expect("valid test dimensions");
    g.fill(a, b);
    g
}

/// Sink that clones every frame into a shared log.
///
/// Clone the sink before handing it to a simulation; the clone kept by the
/// test sees the same log.
#[derive(Clone, Default)]
pub struct RecordingSink {
    frames: Arc<Mutex<Vec<Frame>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames presented so far.
    pub fn len(&self) -> usize {
        self.frames.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every frame presented so far, oldest first.
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    /// The most recent frame.
    pub fn last(&self) -> Option<Frame> {
        self.frames.lock().unwrap().last().cloned()
    }
}

impl FrameSink for RecordingSink {
    fn present(&mut self, frame: &Frame) {
        self.frames.lock().unwrap().push(frame.clone());
    }
}
