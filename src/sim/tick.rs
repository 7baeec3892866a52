//! Per-frame simulation tick
//!
//! Advances a session by one delta. All timers are polled against the
//! session clock; nothing here sleeps or blocks.

use rand::Rng;

use super::clock::sanitize_delta;
use super::collision::detect;
use super::entity::Entity;
use super::state::{Session, SessionEvent, SessionState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap while a run is active, restart while inactive (edge-triggered)
    pub activate: bool,
}

/// Advance the session by `dt` seconds and report what happened
pub fn tick<R: Rng>(session: &mut Session<R>, input: &TickInput, dt: f32) -> Vec<SessionEvent> {
    let dt = sanitize_delta(f64::from(dt), f32::INFINITY);
    let mut events = Vec::new();

    session.elapsed += f64::from(dt);

    match session.state {
        SessionState::Inactive => {
            // The restart tick does no physics; the new plane starts at rest
            if input.activate {
                session.restart();
                events.push(SessionEvent::Restarted { run: session.run });
            }
        }

        SessionState::Active => {
            if input.activate {
                if let Some(vehicle) = session.vehicle.as_mut() {
                    vehicle.activate();
                    log::debug!("Flap at y={:.1}", vehicle.pos.y);
                    events.push(SessionEvent::Jumped);
                }
            }

            session.score = session.current_score();

            if let Some(vehicle) = session.vehicle.as_mut() {
                vehicle.update(dt);
            }

            for obstacle in &mut session.obstacles {
                obstacle.update(dt);
            }

            session.obstacles.retain(|o| {
                let keep = !o.is_off_field();
                if !keep {
                    log::trace!("Rock {} left the field", o.id);
                    events.push(SessionEvent::Removed { id: o.id });
                }
                keep
            });

            while session.spawned_this_run < session.spawns_due() {
                let id = session.spawn_obstacle();
                events.push(SessionEvent::Spawned { id });
            }

            let hit = session
                .vehicle
                .as_ref()
                .and_then(|v| detect(v, &session.obstacles, &session.field));
            if let Some(cause) = hit {
                session.end_run(cause);
                events.push(SessionEvent::Crashed {
                    cause,
                    score: session.score,
                });
            }
        }
    }

    events
}
