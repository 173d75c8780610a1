//! Core types for the Reagent reaction-diffusion engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: the [`Species`] selector,
//! the [`StepId`] counter, the Gray-Scott [`GrayScottParams`] and their named
//! presets, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod params;
pub mod species;

pub use error::{GridError, NonFiniteState, ParamsError, StepError};
pub use id::StepId;
pub use params::GrayScottParams;
pub use species::Species;
