//! Render output
//!
//! Each frame the driver hands a `RenderFrame` to a `RenderSink`. Pixels,
//! fonts and menu art belong to whoever implements the sink.

pub mod fractal;

pub use fractal::{FractalAnimator, Segment};

use serde::{Deserialize, Serialize};

use crate::sim::{DrawRequest, SessionState};

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Back to front
    pub draws: Vec<DrawRequest>,
    pub score: u32,
    pub state: SessionState,
    /// Best score of this process, if any run has finished
    pub best: Option<u32>,
    /// Menu snowflake (only while inactive with the fractal key held)
    #[serde(skip)]
    pub fractal: Vec<Segment>,
}

/// Consumer of render frames
pub trait RenderSink {
    fn present(&mut self, frame: &RenderFrame);
}

/// Sink that logs a one-line summary per frame
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl RenderSink for LogRenderer {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames += 1;
        log::trace!(
            "Frame {}: {:?} score={} best={:?} draws={} fractal_segments={}",
            self.frames,
            frame.state,
            frame.score,
            frame.best,
            frame.draws.len(),
            frame.fractal.len()
        );
    }
}

/// Sink that keeps the most recent frame, for tests
#[derive(Debug, Default)]
pub struct MemoryRenderer {
    pub presented: u64,
    pub last: Option<RenderFrame>,
}

impl RenderSink for MemoryRenderer {
    fn present(&mut self, frame: &RenderFrame) {
        self.presented += 1;
        self.last = Some(frame.clone());
    }
}
