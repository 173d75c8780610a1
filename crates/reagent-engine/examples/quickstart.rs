//! Run a Gray-Scott simulation headless and stream frames to a consumer
//! thread.
//!
//! ```text
//! RUST_LOG=debug cargo run -p reagent-engine --example quickstart -- flower 200
//! ```

use std::process::ExitCode;
use std::thread;

use reagent_core::GrayScottParams;
use reagent_engine::{ChannelSink, ExecutionMode, SimConfig, Simulation};
use reagent_obs::Frame;

fn mean_brightness(frame: &Frame) -> f64 {
    let bytes = frame.to_rgb_bytes();
    bytes.iter().map(|&b| f64::from(b)).sum::<f64>() / bytes.len() as f64
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let preset = args.next().unwrap_or_else(|| "default".to_string());
    let frames: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);

    let Some(params) = GrayScottParams::preset(&preset) else {
        let names: Vec<_> = GrayScottParams::presets().keys().copied().collect();
        log::error!("unknown preset {preset:?}; expected one of {names:?}");
        return ExitCode::FAILURE;
    };

    let mut config = SimConfig::new(200, 200).with_params(params);
    config.execution = ExecutionMode::Parallel { worker_count: None };
    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (sink, rx) = ChannelSink::bounded(4);
    let counter = sink.clone();
    sim.attach_sink(Box::new(sink));
    let consumer = thread::spawn(move || {
        let mut seen = 0u32;
        for frame in rx {
            seen += 1;
            if seen % 25 == 0 {
                log::info!("frame {seen}: mean brightness {:.1}", mean_brightness(&frame));
            }
        }
        seen
    });

    for _ in 0..frames {
        if let Err(e) = sim.advance_frame() {
            log::error!("step failed: {e}");
            return ExitCode::FAILURE;
        }
    }
    let metrics = sim.last_metrics().clone();
    drop(sim.detach_sink());
    let dropped = counter.dropped_frames();
    drop(counter);

    let seen = consumer.join().unwrap_or(0);
    log::info!(
        "{} sub-steps, {seen} frames consumed, {dropped} dropped, last frame {}us step / {}us render, mass {:.3}",
        sim.current_step(),
        metrics.step_us,
        metrics.render_us,
        metrics.total_mass,
    );
    if let Err(report) = sim.check_finite() {
        log::warn!("{report}");
    }
    ExitCode::SUCCESS
}
