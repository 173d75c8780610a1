//! Benchmark profiles for the Reagent engine.
//!
//! - [`reference_profile`]: 200x200 grid (40K cells), flower preset
//! - [`stress_profile`]: 632x632 grid (~400K cells), same model

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use reagent_core::GrayScottParams;
use reagent_engine::{ExecutionMode, SimConfig};
use reagent_space::SeedPattern;

fn profile(side: u32, seed: u64, execution: ExecutionMode) -> SimConfig {
    let mut config = SimConfig::new(side, side)
        .with_params(GrayScottParams::with_rates(0.055, 0.062))
        .with_seed(SeedPattern::Random {
            count: 8,
            cluster_size: 10,
            seed,
        });
    config.execution = execution;
    config
}

/// 200x200 grid seeded with eight random 10-cell blocks.
pub fn reference_profile(seed: u64, execution: ExecutionMode) -> SimConfig {
    profile(200, seed, execution)
}

/// Same as [`reference_profile`] at roughly 10x the cell count.
pub fn stress_profile(seed: u64, execution: ExecutionMode) -> SimConfig {
    profile(632, seed, execution)
}
