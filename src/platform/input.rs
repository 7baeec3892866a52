//! Input sources
//!
//! The game only understands three logical signals per frame. Mapping
//! physical devices onto them is the host's job.

use std::collections::VecDeque;

use crate::sim::SessionView;

/// Logical input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Leave the loop
    pub quit: bool,
    /// Flap / restart (edge-triggered: true only on the press frame)
    pub activate: bool,
    /// Menu fractal key is held (presentation only)
    pub fractal_held: bool,
}

/// Something that produces one `FrameInput` per frame
pub trait InputSource {
    fn poll(&mut self, view: &SessionView<'_>) -> FrameInput;
}

/// Replays a fixed list of inputs, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _view: &SessionView<'_>) -> FrameInput {
        self.frames.pop_front().unwrap_or(FrameInput {
            quit: true,
            ..Default::default()
        })
    }
}
