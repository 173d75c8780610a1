//! Double-buffered grid storage for Reagent simulations.
//!
//! [`PingPongGrids`] owns the two grids of a run and tracks which one is
//! currently readable. Each sub-step reads the current grid, writes the
//! other, and then [`swap`](PingPongGrids::swap)s the roles. No field data
//! is ever copied between the two.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pingpong;

pub use pingpong::{BufferRole, PingPongGrids};
