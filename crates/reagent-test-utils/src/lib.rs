//! Test utilities for Reagent development.
//!
//! Grid fixtures with known contents and a [`RecordingSink`] that keeps
//! every frame it is shown.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{random_grid, spot_grid, uniform_grid, RecordingSink};
