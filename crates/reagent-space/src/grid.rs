//! Dual-field concentration grid on a torus.

use reagent_core::{GridError, Species};

use crate::torus::wrap_axis;

/// Background state `(A, B)` of every cell in a fresh grid.
pub const BACKGROUND: (f64, f64) = (1.0, 0.0);

/// State `(A, B)` written into seeded cells.
pub const SEEDED: (f64, f64) = (0.0, 1.0);

/// Two concentration fields over a `width x height` torus.
///
/// Cells are addressed as `(u, v)` with `u` the column and `v` the row,
/// stored row-major at index `u + v * width`. Both fields always hold
/// exactly `width * height` values.
///
/// # Examples
///
/// ```
/// use reagent_space::Grid;
///
/// let mut grid = Grid::new(4, 3).unwrap();
/// grid.set_point(3, 2, 0.25, 0.75).unwrap();
///
/// // Reads wrap around both edges.
/// assert_eq!(grid.get_point(-1, -1), (0.25, 0.75));
/// // Writes do not.
/// assert!(grid.set_point(4, 0, 0.0, 1.0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    a: Vec<f64>,
    b: Vec<f64>,
}

impl Grid {
    /// Largest accepted axis size: coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with every cell at [`BACKGROUND`] (A = 1, B = 0).
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either axis is zero
    /// and `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let cells = Self::checked_cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            a: vec![BACKGROUND.0; cells],
            b: vec![BACKGROUND.1; cells],
        })
    }

    /// Create a grid from explicit row-major field data.
    pub fn from_fields(
        width: u32,
        height: u32,
        a: Vec<f64>,
        b: Vec<f64>,
    ) -> Result<Self, GridError> {
        let cells = Self::checked_cell_count(width, height)?;
        if a.len() != cells || b.len() != cells {
            return Err(GridError::FieldLengthMismatch {
                expected: cells,
                a_len: a.len(),
                b_len: b.len(),
            });
        }
        Ok(Self {
            width,
            height,
            a,
            b,
        })
    }

    fn checked_cell_count(width: u32, height: u32) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(width as usize * height as usize)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `width * height`.
    pub fn cell_count(&self) -> usize {
        self.a.len()
    }

    /// Whether `other` has the same dimensions.
    pub fn same_shape(&self, other: &Grid) -> bool {
        self.dims() == other.dims()
    }

    /// Row-major index of an in-bounds cell.
    pub fn index(&self, u: i64, v: i64) -> Result<usize, GridError> {
        if u < 0 || v < 0 || u >= i64::from(self.width) || v >= i64::from(self.height) {
            return Err(GridError::OutOfBounds {
                u,
                v,
                width: self.width,
                height: self.height,
            });
        }
        Ok(u as usize + v as usize * self.width as usize)
    }

    /// Write `(a, b)` at cell `(u, v)`.
    ///
    /// No wrap-around: coordinates outside the grid return
    /// `Err(GridError::OutOfBounds)` and leave the grid unchanged.
    pub fn set_point(&mut self, u: i32, v: i32, a: f64, b: f64) -> Result<(), GridError> {
        let idx = self.index(i64::from(u), i64::from(v))?;
        self.a[idx] = a;
        self.b[idx] = b;
        Ok(())
    }

    /// Read `(a, b)` at `(u, v)`, wrapping each axis around the torus.
    pub fn get_point(&self, u: i32, v: i32) -> (f64, f64) {
        let cu = wrap_axis(u, self.width);
        let cv = wrap_axis(v, self.height);
        let idx = cu + cv * self.width as usize;
        (self.a[idx], self.b[idx])
    }

    /// Seed a square block of [`SEEDED`] cells around `(center_u, center_v)`.
    ///
    /// With `h = ceil(cluster_size / 2)` the block covers
    /// `[center_u - h, center_u + h) x [center_v - h, center_v + h)`.
    /// The whole block is bounds-checked before anything is written, so an
    /// error leaves the grid untouched. Seeding is idempotent.
    pub fn seed_block(
        &mut self,
        center_u: i32,
        center_v: i32,
        cluster_size: u32,
    ) -> Result<(), GridError> {
        self.check_block(center_u, center_v, cluster_size)?;
        let h = half_extent(cluster_size);
        let (cu, cv) = (i64::from(center_u), i64::from(center_v));
        let width = self.width as usize;
        for v in (cv - h)..(cv + h) {
            let row = v as usize * width;
            for u in (cu - h)..(cu + h) {
                let idx = row + u as usize;
                self.a[idx] = SEEDED.0;
                self.b[idx] = SEEDED.1;
            }
        }
        Ok(())
    }

    /// Seed a block at the grid's own centre, `(width / 2, height / 2)`.
    pub fn seed_at_center(&mut self, cluster_size: u32) -> Result<(), GridError> {
        let u = (self.width / 2) as i32;
        let v = (self.height / 2) as i32;
        self.seed_block(u, v, cluster_size)
    }

    /// Verify that a seed block lies entirely inside the grid.
    pub(crate) fn check_block(
        &self,
        center_u: i32,
        center_v: i32,
        cluster_size: u32,
    ) -> Result<(), GridError> {
        let h = half_extent(cluster_size);
        if h == 0 {
            return Ok(());
        }
        let (cu, cv) = (i64::from(center_u), i64::from(center_v));
        self.index(cu - h, cv - h)?;
        self.index(cu + h - 1, cv + h - 1)?;
        Ok(())
    }

    /// Reset every cell to `(a, b)`.
    pub fn fill(&mut self, a: f64, b: f64) {
        self.a.fill(a);
        self.b.fill(b);
    }

    /// The full row-major field for one species.
    pub fn field(&self, species: Species) -> &[f64] {
        match species {
            Species::A => &self.a,
            Species::B => &self.b,
        }
    }

    /// Mutable access to both fields at once, `(A, B)`.
    pub fn fields_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.a, &mut self.b)
    }

    /// Overwrite both fields from row-major data of the right length.
    pub fn load_fields(&mut self, a: &[f64], b: &[f64]) -> Result<(), GridError> {
        let cells = self.cell_count();
        if a.len() != cells || b.len() != cells {
            return Err(GridError::FieldLengthMismatch {
                expected: cells,
                a_len: a.len(),
                b_len: b.len(),
            });
        }
        self.a.copy_from_slice(a);
        self.b.copy_from_slice(b);
        Ok(())
    }

    /// `sum(A) + sum(B)`.
    pub fn total_mass(&self) -> f64 {
        self.a.iter().sum::<f64>() + self.b.iter().sum::<f64>()
    }

    /// Count of cells where A or B is NaN or infinite, with the first index.
    pub fn non_finite_cells(&self) -> Option<(usize, usize)> {
        let mut first = None;
        let mut count = 0;
        for (i, (a, b)) in self.a.iter().zip(&self.b).enumerate() {
            if !a.is_finite() || !b.is_finite() {
                count += 1;
                first.get_or_insert(i);
            }
        }
        first.map(|f| (count, f))
    }
}

/// `ceil(cluster_size / 2)` as a signed offset.
pub(crate) fn half_extent(cluster_size: u32) -> i64 {
    i64::from(cluster_size.div_ceil(2))
}
