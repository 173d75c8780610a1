//! Spatial storage for Reagent simulations.
//!
//! A [`Grid`] holds the two concentration fields of the Gray-Scott model
//! over a `width x height` torus. Writes are bounds-checked; reads through
//! [`Grid::get_point`] wrap around the edges so that the convolution kernel
//! never has to special-case the boundary.
//!
//! Initial states are described by [`SeedPattern`] values and applied with
//! [`SeedPattern::apply`] or [`SeedPattern::build`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod seed;
pub mod torus;

pub use grid::{Grid, BACKGROUND, SEEDED};
pub use seed::SeedPattern;
pub use torus::{axis_window, wrap_axis};
