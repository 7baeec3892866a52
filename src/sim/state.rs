//! Session state and core simulation types
//!
//! A session is one process-long sequence of runs. It exclusively owns the
//! current plane and every live rock; transitions live in `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Collision;
use super::obstacle::Obstacle;
use super::vehicle::Vehicle;
use crate::settings::{FieldSettings, PhysicsSettings, Settings, SpawnSettings};
use crate::whole_periods;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// A run is in progress
    Active,
    /// The last run crashed; waiting for a restart
    Inactive,
}

/// Something that happened during a tick, for audio/logging/scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Jumped,
    Spawned { id: u32 },
    Removed { id: u32 },
    Crashed { cause: Collision, score: u32 },
    Restarted { run: u32 },
}

/// Read-only snapshot handed to input sources
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub state: SessionState,
    pub score: u32,
    pub vehicle: Option<&'a Vehicle>,
    pub obstacles: &'a [Obstacle],
    pub field: &'a FieldSettings,
    /// Seconds since the current run began (or since the crash, when inactive)
    pub active_time: f64,
}

/// A play session
///
/// Generic over the random source so tests and replays can inject a seeded
/// generator.
#[derive(Debug, Clone)]
pub struct Session<R: Rng = Pcg32> {
    pub state: SessionState,
    /// Whole seconds survived in the current run (frozen while inactive)
    pub score: u32,
    /// Session clock (seconds, sum of all tick deltas)
    pub elapsed: f64,
    /// Session clock value when the current run began
    pub run_started_at: f64,
    /// Session clock value of the last crash
    pub crashed_at: f64,
    /// The plane; `None` while inactive
    pub vehicle: Option<Vehicle>,
    /// Live rocks, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Runs started so far (1-based)
    pub run: u32,
    /// Rocks spawned during the current run
    pub(crate) spawned_this_run: u64,
    pub(crate) field: FieldSettings,
    pub(crate) physics: PhysicsSettings,
    pub(crate) spawn: SpawnSettings,
    pub(crate) rng: R,
    next_id: u32,
}

impl Session<Pcg32> {
    /// Create a session seeded from the settings
    pub fn new(settings: &Settings) -> Self {
        Self::with_rng(settings, Pcg32::seed_from_u64(settings.seed))
    }
}

impl<R: Rng> Session<R> {
    /// Create a session with an explicit random source; starts active
    pub fn with_rng(settings: &Settings, rng: R) -> Self {
        let vehicle = Vehicle::spawn(settings.field.size(), &settings.physics);
        Self {
            state: SessionState::Active,
            score: 0,
            elapsed: 0.0,
            run_started_at: 0.0,
            crashed_at: 0.0,
            vehicle: Some(vehicle),
            obstacles: Vec::new(),
            run: 1,
            spawned_this_run: 0,
            field: settings.field,
            physics: settings.physics,
            spawn: settings.spawn,
            rng,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn field(&self) -> &FieldSettings {
        &self.field
    }

    /// Seconds since the current run began
    #[inline]
    pub fn run_time(&self) -> f64 {
        self.elapsed - self.run_started_at
    }

    /// Rocks spawned during the current run
    #[inline]
    pub fn spawned_this_run(&self) -> u64 {
        self.spawned_this_run
    }

    /// Whole seconds of the current run
    pub(crate) fn current_score(&self) -> u32 {
        whole_periods(self.run_time(), 1.0) as u32
    }

    /// Rocks the cadence calls for at the current run time
    pub(crate) fn spawns_due(&self) -> u64 {
        whole_periods(self.run_time(), self.spawn.interval)
    }

    /// Add one random rock past the right edge
    pub fn spawn_obstacle(&mut self) -> u32 {
        let id = self.next_entity_id();
        let obstacle = Obstacle::spawn(id, self.field.size(), self.spawn.obstacle_speed, &mut self.rng);
        log::debug!(
            "Spawned rock {} ({:?}, variant {}) at x={:.0}",
            id,
            obstacle.orientation,
            obstacle.variant,
            obstacle.pos.x
        );
        self.obstacles.push(obstacle);
        self.spawned_this_run += 1;
        id
    }

    /// Crash: clear the rocks, drop the plane, freeze the score
    pub fn end_run(&mut self, cause: Collision) {
        log::info!(
            "Run {} ended after {}s: hit {:?}",
            self.run,
            self.score,
            cause
        );
        self.obstacles.clear();
        self.vehicle = None;
        self.crashed_at = self.elapsed;
        self.state = SessionState::Inactive;
    }

    /// Start a new run with a fresh plane at the start position
    pub fn restart(&mut self) {
        self.vehicle = Some(Vehicle::spawn(self.field.size(), &self.physics));
        self.obstacles.clear();
        self.run_started_at = self.elapsed;
        self.spawned_this_run = 0;
        self.score = 0;
        self.run += 1;
        self.state = SessionState::Active;
        log::info!("Run {} started", self.run);
    }

    pub fn view(&self) -> SessionView<'_> {
        let active_time = match self.state {
            SessionState::Active => self.run_time(),
            SessionState::Inactive => self.elapsed - self.crashed_at,
        };
        SessionView {
            state: self.state,
            score: self.score,
            vehicle: self.vehicle.as_ref(),
            obstacles: &self.obstacles,
            field: &self.field,
            active_time,
        }
    }

    /// Start position of every new plane
    pub fn start_position(&self) -> Vec2 {
        Vehicle::start_position(self.field.size())
    }
}
