//! Error types for the Reagent engine.
//!
//! Organised by subsystem: grid construction and addressing, parameter
//! validation, stepping, and the non-fatal divergence report.

use std::error::Error;
use std::fmt;

/// Errors from grid construction, addressing, and seeding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero. No grid is created.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// An axis is larger than the signed coordinate range allows.
    DimensionTooLarge {
        /// Which axis (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// A write addressed a cell outside `[0, width) x [0, height)`.
    ///
    /// Wrap-around applies only to neighbour lookups, never to writes.
    OutOfBounds {
        /// Column coordinate.
        u: i64,
        /// Row coordinate.
        v: i64,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// Initial field data does not cover the grid exactly.
    FieldLengthMismatch {
        /// `width * height`.
        expected: usize,
        /// Length supplied for field A.
        a_len: usize,
        /// Length supplied for field B.
        b_len: usize,
    },
    /// A grid was offered where one of a different shape is required.
    ShapeMismatch {
        /// `(width, height)` required.
        expected: (u32, u32),
        /// `(width, height)` supplied.
        found: (u32, u32),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum of {max}")
            }
            Self::OutOfBounds {
                u,
                v,
                width,
                height,
            } => write!(
                f,
                "cell ({u}, {v}) out of bounds: [0, {width}) x [0, {height})"
            ),
            Self::FieldLengthMismatch {
                expected,
                a_len,
                b_len,
            } => write!(
                f,
                "field lengths (a={a_len}, b={b_len}) do not match cell count {expected}"
            ),
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "expected a {}x{} grid, got {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
        }
    }
}

impl Error for GridError {}

/// Errors from [`GrayScottParams::validate`](crate::GrayScottParams::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ParamsError {
    /// A parameter is NaN or infinite.
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { name, value } => {
                write!(f, "parameter {name} must be finite, got {value}")
            }
        }
    }
}

impl Error for ParamsError {}

/// Errors from a single reaction-diffusion step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The read and write buffers have different shapes.
    DimensionMismatch {
        /// `(width, height)` of the buffer being read.
        current: (u32, u32),
        /// `(width, height)` of the buffer being written.
        next: (u32, u32),
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { current, next } => write!(
                f,
                "buffer shape mismatch: current is {}x{}, next is {}x{}",
                current.0, current.1, next.0, next.1
            ),
        }
    }
}

impl Error for StepError {}

/// Report of non-finite concentrations after a step.
///
/// Divergence is an expected outcome for some feed/kill combinations, so
/// this is never raised by the step loop itself. Callers that want to
/// surface it ask for it explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonFiniteState {
    /// Number of cells where A or B is NaN or infinite.
    pub cells: usize,
    /// Row-major index of the first such cell.
    pub first_index: usize,
    /// Sub-steps elapsed when the report was taken.
    pub step: u64,
}

impl fmt::Display for NonFiniteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} non-finite cell(s) after step {}, first at index {}",
            self.cells, self.step, self.first_index
        )
    }
}

impl Error for NonFiniteState {}
