//! Reagent: Gray-Scott reaction-diffusion on a toroidal grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Reagent sub-crates. For most users, adding `reagent` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use reagent::prelude::*;
//!
//! let config = SimConfig::new(128, 128)
//!     .with_params(GrayScottParams::preset("flower").unwrap())
//!     .with_seed(SeedPattern::Centered { cluster_size: 10 })
//!     .with_color(ChannelMap::RED_CYAN);
//! let mut sim = Simulation::new(config).unwrap();
//!
//! let frame = sim.advance_frame().unwrap();
//! assert_eq!(frame.pixels().len(), 128 * 128);
//! assert_eq!(sim.current_step(), StepId(10));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `reagent-core` | Parameters, presets, step counter, errors |
//! | [`space`] | `reagent-space` | `Grid`, torus wrapping, seed patterns |
//! | [`arena`] | `reagent-arena` | Ping-pong double buffer |
//! | [`propagators`] | `reagent-propagators` | Laplacian kernel and Gray-Scott stepper |
//! | [`obs`] | `reagent-obs` | Colour policies, frames, frame sinks |
//! | [`engine`] | `reagent-engine` | `Simulation`, `SimConfig`, channel sink |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, parameters, and errors (`reagent-core`).
pub use reagent_core as types;

/// Toroidal grid storage and seed patterns (`reagent-space`).
///
/// [`space::Grid::get_point`] wraps; [`space::Grid::set_point`] does not.
pub use reagent_space as space;

/// Double-buffered grid storage (`reagent-arena`).
pub use reagent_arena as arena;

/// Laplacian kernel and Gray-Scott stepper (`reagent-propagators`).
///
/// Use [`propagators::GrayScott`] directly to step grids without the
/// driver.
pub use reagent_propagators as propagators;

/// Colour mapping and frame buffers (`reagent-obs`).
pub use reagent_obs as obs;

/// Simulation driver (`reagent-engine`).
pub use reagent_engine as engine;

/// Common imports for typical Reagent usage.
///
/// ```rust
/// use reagent::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use reagent_core::{GrayScottParams, Species, StepId};

    // Errors
    pub use reagent_core::{GridError, NonFiniteState, ParamsError, StepError};

    // Space
    pub use reagent_space::{Grid, SeedPattern};

    // Stepper
    pub use reagent_propagators::GrayScott;

    // Observation
    pub use reagent_obs::{Channel, ChannelMap, ColorPolicy, Frame, FrameSink, Rgb8, Threshold};

    // Engine
    pub use reagent_engine::{
        ChannelSink, ConfigError, ExecutionMode, SimConfig, Simulation, StepMetrics,
    };
}
