//! Observation of Reagent simulation state.
//!
//! The engine never draws. Instead it converts the current grid into a
//! [`Frame`], a row-major buffer of [`Rgb8`] values, using a pluggable
//! [`ColorPolicy`], and hands the frame to a [`FrameSink`] supplied by the
//! rendering layer.
//!
//! # Built-in policies
//!
//! - [`ChannelMap`]: assigns A, B, or a constant to each colour channel
//! - [`Threshold`]: two-colour map on `a > b`
//! - any `Fn(f64, f64) -> Rgb8 + Send + Sync` closure

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod frame;
pub mod sink;

pub use color::{quantize, Channel, ChannelMap, ColorPolicy, Rgb8, Threshold};
pub use frame::Frame;
pub use sink::FrameSink;
