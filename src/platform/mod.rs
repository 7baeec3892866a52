//! Platform abstraction layer
//!
//! Handles host-specific concerns the simulation must not touch:
//! - Wall-clock time and frame pacing
//! - Input events

pub mod input;
pub mod time;

pub use input::{FrameInput, InputSource, ScriptedInput};
pub use time::{FrameLimiter, SystemTimeSource};
