//! Destination for rendered frames.

use crate::frame::Frame;

/// Receives each frame the simulation renders.
///
/// The frame is borrowed for the duration of the call; sinks that keep it
/// must clone. Any `FnMut(&Frame) + Send` closure is a sink.
pub trait FrameSink: Send {
    /// Called once per rendered frame, in order.
    fn present(&mut self, frame: &Frame);
}

impl<F> FrameSink for F
where
    F: FnMut(&Frame) + Send,
{
    fn present(&mut self, frame: &Frame) {
        self(frame)
    }
}
