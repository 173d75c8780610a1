//! Numerical operators for Reagent simulations.
//!
//! - [`laplacian`]: the fixed 3x3 weighted Laplacian with toroidal
//!   wrap-around.
//! - [`GrayScott`]: the reaction-diffusion stepper that reads one grid
//!   through the kernel and writes the next, serially or split by rows
//!   across a rayon pool.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod gray_scott;
pub mod laplacian;

pub use gray_scott::GrayScott;
pub use laplacian::{laplacian, stencil, WEIGHT_CENTER, WEIGHT_DIAGONAL, WEIGHT_ORTHOGONAL};
