//! Plane Dash - a side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `game`: Frame loop driver wiring the simulation to its collaborators
//! - `renderer`: Draw-request sink and the decorative menu fractal
//! - `audio`: Audio cue sink
//! - `platform`: Host time, frame pacing and input sources
//! - `settings`: Data-driven tuning loaded from JSON

pub mod audio;
pub mod autopilot;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::HighScores;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
///
/// Coordinates are screen-space: origin at the top-left of the play field,
/// y grows downward.
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 800.0;
    /// Height of the ground strip along the bottom of the field
    pub const GROUND_HEIGHT: f32 = 80.0;

    /// Target frame rate of the loop driver
    pub const FRAME_RATE: u32 = 60;
    /// Largest delta a single tick may carry (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 600.0;
    /// Vertical velocity set by a flap (pixels/s, negative is up)
    pub const JUMP_IMPULSE: f32 = -400.0;
    /// Degrees of visual rotation per pixel/s of vertical velocity
    pub const ROTATION_GAIN: f32 = 0.06;
    /// Vehicle animation
    pub const ANIMATION_FPS: f32 = 10.0;
    pub const ANIMATION_FRAMES: usize = 3;

    /// Vehicle body size
    pub const VEHICLE_WIDTH: f32 = 52.0;
    pub const VEHICLE_HEIGHT: f32 = 43.0;

    /// Obstacle motion (pixels/s, leftward)
    pub const OBSTACLE_SPEED: f32 = 400.0;
    /// Seconds of active play between spawns
    pub const SPAWN_INTERVAL: f64 = 1.4;
    /// Extra horizontal offset past the right edge (inclusive range)
    pub const SPAWN_JITTER_X: (i32, i32) = (40, 100);
    /// How far below the field bottom a floor obstacle is anchored
    pub const FLOOR_ANCHOR_Y: (i32, i32) = (10, 50);
    /// Where a ceiling obstacle's top edge is anchored
    pub const CEILING_ANCHOR_Y: (i32, i32) = (-50, -10);
    /// Obstacles whose right edge reaches this x are discarded
    pub const OBSTACLE_DESPAWN_X: f32 = -100.0;

    /// Scroll speeds (pixels/s, leftward)
    pub const BACKGROUND_SPEED: f32 = 300.0;
    pub const GROUND_SPEED: f32 = 360.0;

    /// Volumes
    pub const JUMP_VOLUME: f32 = 0.3;
    pub const MUSIC_VOLUME: f32 = 1.0;
}

/// Number of whole `period`s contained in `t`
///
/// Time accumulated from float deltas drifts below exact multiples
/// (ten ticks of 0.1 sum to 0.9999999999999999, and `f32` deltas widened to
/// `f64` carry their rounding with them), so a one-microsecond tolerance is
/// applied before flooring.
#[inline]
pub fn whole_periods(t: f64, period: f64) -> u64 {
    const EPSILON: f64 = 1e-6;
    if t <= 0.0 || period <= 0.0 {
        return 0;
    }
    ((t + EPSILON) / period).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_periods_boundaries() {
        assert_eq!(whole_periods(0.0, 1.4), 0);
        assert_eq!(whole_periods(1.39, 1.4), 0);
        assert_eq!(whole_periods(1.4, 1.4), 1);
        assert_eq!(whole_periods(2.8, 1.4), 2);
        assert_eq!(whole_periods(-3.0, 1.0), 0);
    }

    #[test]
    fn test_whole_periods_tolerates_accumulated_drift() {
        let t: f64 = (0..10).map(|_| 0.1).sum();
        assert!(t < 1.0);
        assert_eq!(whole_periods(t, 1.0), 1);
        let t = f64::from(0.7f32) * 2.0;
        assert!(t < 1.4);
        assert_eq!(whole_periods(t, 1.4), 1);
    }
}
