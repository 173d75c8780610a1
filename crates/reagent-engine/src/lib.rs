//! Simulation driver for Reagent.
//!
//! [`Simulation`] owns the double-buffered grid, steps it with the
//! Gray-Scott rule, and renders frames through a colour policy on the
//! caller's cadence. It is built from a validated [`SimConfig`].
//!
//! Stepping is synchronous: the caller decides when to call
//! [`Simulation::advance_frame`], and the state after `n` sub-steps depends
//! only on `n`, never on wall-clock time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod sim;
pub mod sink;

pub use config::{ConfigError, ExecutionMode, SimConfig, MAX_WORKERS};
pub use metrics::StepMetrics;
pub use sim::Simulation;
pub use sink::ChannelSink;
