//! Row-major colour buffer rendered from a grid.

use reagent_core::Species;
use reagent_space::Grid;

use crate::color::{ColorPolicy, Rgb8};

/// One rendered image of a grid: `width * height` colours, row-major,
/// pixel `(x, y)` at index `x + y * width`.
///
/// # Examples
///
/// ```
/// use reagent_obs::{ChannelMap, Frame, Rgb8};
/// use reagent_space::Grid;
///
/// let mut grid = Grid::new(3, 2).unwrap();
/// grid.set_point(2, 1, 0.0, 1.0).unwrap();
/// let frame = Frame::rendered(&grid, &ChannelMap::RED_BLUE);
/// assert_eq!(frame.color(0, 0), Some(Rgb8::new(255, 0, 0)));
/// assert_eq!(frame.color(2, 1), Some(Rgb8::new(0, 0, 255)));
/// assert_eq!(frame.color(3, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl Frame {
    /// An all-black frame shaped like `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            pixels: vec![Rgb8::BLACK; grid.cell_count()],
        }
    }

    /// Render `grid` into a new frame.
    pub fn rendered(grid: &Grid, policy: &dyn ColorPolicy) -> Self {
        let mut frame = Self::for_grid(grid);
        frame.render(grid, policy);
        frame
    }

    /// Overwrite every pixel from `grid`, reshaping the buffer first if the
    /// grid has different dimensions.
    pub fn render(&mut self, grid: &Grid, policy: &dyn ColorPolicy) {
        if self.pixels.len() != grid.cell_count() {
            self.pixels.resize(grid.cell_count(), Rgb8::BLACK);
        }
        self.width = grid.width();
        self.height = grid.height();
        let a = grid.field(Species::A);
        let b = grid.field(Species::B);
        for ((px, &a), &b) in self.pixels.iter_mut().zip(a).zip(b) {
            *px = policy.color(a, b);
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour at `(x, y)`, or `None` outside the frame.
    pub fn color(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(x as usize + y as usize * self.width as usize)
            .copied()
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Packed `[r, g, b, r, g, b, ...]` bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect()
    }
}
