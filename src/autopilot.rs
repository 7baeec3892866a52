//! Idle/demo mode - a simple bot that flies the plane
//!
//! Flaps when the plane is falling and has dropped below the safe height
//! for the next rock, and restarts a short while after a crash.

use crate::platform::{FrameInput, InputSource};
use crate::sim::{Obstacle, Orientation, SessionState, SessionView, Vehicle};

/// Seconds to linger on the menu before restarting
pub const RESTART_DELAY: f64 = 1.0;
/// Clearance kept above a floor rock (pixels)
const FLOOR_MARGIN: f32 = 40.0;
/// Clearance kept below a ceiling rock, including the height of one flap
const CEILING_MARGIN: f32 = 160.0;

/// Autopilot input source
#[derive(Debug, Clone)]
pub struct Autopilot {
    restart_delay: f64,
    /// Stop after this many runs have ended (`None` flies forever)
    max_runs: Option<u32>,
    runs_ended: u32,
    last_state: SessionState,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(RESTART_DELAY)
    }
}

impl Autopilot {
    pub fn new(restart_delay: f64) -> Self {
        Self {
            restart_delay,
            max_runs: None,
            runs_ended: 0,
            last_state: SessionState::Active,
        }
    }

    /// Quit once `runs` runs have crashed
    pub fn with_max_runs(mut self, runs: u32) -> Self {
        self.max_runs = Some(runs);
        self
    }

    pub fn runs_ended(&self) -> u32 {
        self.runs_ended
    }

    /// Nearest rock that has not yet passed the plane
    fn next_obstacle<'a>(vehicle: &Vehicle, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
        obstacles
            .iter()
            .filter(|o| o.right() > vehicle.pos.x)
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
    }

    /// Lowest the plane's top edge may sink before it should flap
    fn flap_line(view: &SessionView<'_>, vehicle: &Vehicle) -> f32 {
        let floor_line = view.field.ground_top() - FLOOR_MARGIN - vehicle.size.y;
        match Self::next_obstacle(vehicle, view.obstacles) {
            Some(rock) => match rock.orientation {
                Orientation::GapBelow => rock.pos.y - FLOOR_MARGIN - vehicle.size.y,
                Orientation::GapAbove => (rock.bottom() + CEILING_MARGIN).min(floor_line),
            },
            None => (view.field.height / 2.0).min(floor_line),
        }
    }

    /// Whether to flap this frame
    pub fn should_flap(view: &SessionView<'_>, vehicle: &Vehicle) -> bool {
        vehicle.velocity >= 0.0 && vehicle.pos.y > Self::flap_line(view, vehicle)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, view: &SessionView<'_>) -> FrameInput {
        if self.last_state == SessionState::Active && view.state == SessionState::Inactive {
            self.runs_ended += 1;
        }
        self.last_state = view.state;

        if self.max_runs.is_some_and(|max| self.runs_ended >= max) {
            return FrameInput {
                quit: true,
                ..Default::default()
            };
        }

        let activate = match (view.state, view.vehicle) {
            (SessionState::Active, Some(vehicle)) => Self::should_flap(view, vehicle),
            (SessionState::Inactive, _) => view.active_time >= self.restart_delay,
            _ => false,
        };

        FrameInput {
            activate,
            ..Default::default()
        }
    }
}
