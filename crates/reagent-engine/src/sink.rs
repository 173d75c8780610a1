//! Frame sink that publishes over a bounded channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::debug;
use reagent_obs::{Frame, FrameSink};

/// Hands each rendered frame to another thread through a bounded
/// `crossbeam-channel`.
///
/// The simulation never blocks on a slow consumer: when the channel is
/// full the frame is dropped and counted. Clones share the sender and
/// the drop counter.
///
/// # Examples
///
/// ```
/// use reagent_engine::{ChannelSink, SimConfig, Simulation};
///
/// let (sink, frames) = ChannelSink::bounded(2);
/// let mut sim = Simulation::new(SimConfig::new(32, 32)).unwrap();
/// sim.attach_sink(Box::new(sink));
/// sim.advance_frame().unwrap();
/// assert_eq!(frames.try_recv().unwrap().width(), 32);
/// ```
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: Sender<Frame>,
    dropped: Arc<AtomicU64>,
}

impl ChannelSink {
    /// Create a sink and the receiving end of its channel.
    ///
    /// With `capacity == 0` a frame is delivered only if the receiver is
    /// already waiting in `recv`.
    pub fn bounded(capacity: usize) -> (Self, Receiver<Frame>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (
            Self {
                tx,
                dropped: Arc::new(AtomicU64::new(0)),
            },
            rx,
        )
    }

    /// Frames dropped so far because the channel was full or closed.
    pub fn dropped_frames(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl FrameSink for ChannelSink {
    fn present(&mut self, frame: &Frame) {
        match self.tx.try_send(frame.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                let n = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                debug!("frame channel full, dropped frame ({n} total)");
            }
            Err(TrySendError::Disconnected(_)) => {
                let n = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                debug!("frame receiver gone, dropped frame ({n} total)");
            }
        }
    }
}
