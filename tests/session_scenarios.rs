use plane_dash::Settings;
use plane_dash::consts::*;
use plane_dash::sim::{
    Collision, Session, SessionEvent, SessionState, TickInput, check_collision, tick,
};

const FLAP: TickInput = TickInput { activate: true };
const IDLE: TickInput = TickInput { activate: false };

fn crash_cause(events: &[SessionEvent]) -> Option<Collision> {
    events.iter().find_map(|e| match e {
        SessionEvent::Crashed { cause, .. } => Some(*cause),
        _ => None,
    })
}

#[test]
fn unpowered_plane_falls_out_of_the_run_in_one_long_tick() {
    let settings = Settings::default();
    assert_eq!(settings.physics.gravity, 600.0);
    assert_eq!(settings.physics.jump_impulse, -400.0);

    let mut session = Session::new(&settings);
    session.spawn_obstacle();
    let start_y = session.vehicle.as_ref().unwrap().pos.y;

    let events = tick(&mut session, &IDLE, 1.0);

    assert_eq!(crash_cause(&events), Some(Collision::Ground));
    assert_eq!(session.state, SessionState::Inactive);
    assert!(session.obstacles.is_empty());
    assert!(session.vehicle.is_none());
    assert_eq!(session.score, 1);
    // Nothing held it up: a full second of gravity carried it past the ground
    assert!(start_y + 600.0 > settings.field.ground_top());
}

#[test]
fn climbing_plane_crashes_on_the_tick_its_top_crosses_zero() {
    let mut session = Session::new(&Settings::default());
    let expected_tops = [316.0, 253.5, 191.0, 128.5, 66.0, 3.5];

    for (i, expected) in expected_tops.iter().enumerate() {
        let events = tick(&mut session, &FLAP, 0.25);
        assert_eq!(crash_cause(&events), None, "tick {}", i + 1);
        assert_eq!(session.state, SessionState::Active);
        let plane = session.vehicle.as_ref().unwrap();
        assert_eq!(plane.pos.y, *expected);
        assert!(plane.top() > 0.0);
    }
    // One rock was due at 1.4s
    assert_eq!(session.obstacles.len(), 1);

    let events = tick(&mut session, &FLAP, 0.25);
    assert_eq!(crash_cause(&events), Some(Collision::Ceiling));
    assert_eq!(session.state, SessionState::Inactive);
    assert!(session.obstacles.is_empty());
    assert_eq!(session.score, 1);
}

#[test]
fn restart_gives_a_fresh_plane_and_zero_score() {
    let mut session = Session::new(&Settings::default());
    tick(&mut session, &IDLE, 1.0);
    assert_eq!(session.state, SessionState::Inactive);
    let frozen = session.score;

    for _ in 0..10 {
        tick(&mut session, &IDLE, 0.5);
        assert_eq!(session.score, frozen);
    }

    let events = tick(&mut session, &FLAP, 0.016);
    assert_eq!(events, vec![SessionEvent::Restarted { run: 2 }]);
    assert_eq!(session.state, SessionState::Active);
    assert_eq!(session.score, 0);
    let plane = session.vehicle.as_ref().unwrap();
    assert_eq!(plane.pos.x, FIELD_WIDTH / 20.0);
    assert_eq!(plane.pos.y, FIELD_HEIGHT / 2.0 - VEHICLE_HEIGHT / 2.0);
    assert_eq!(plane.velocity, 0.0);
    assert!(!check_collision(plane, &session.obstacles, session.field()));

    // The run clock restarted too
    tick(&mut session, &FLAP, 0.5);
    tick(&mut session, &FLAP, 0.5);
    assert_eq!(session.score, 1);
}

#[test]
fn spawn_cadence_follows_active_time_only() {
    let mut settings = Settings::default();
    settings.physics.gravity = 0.0;
    let mut session = Session::new(&settings);

    for _ in 0..20 {
        tick(&mut session, &IDLE, 0.25);
    }
    // 5.0s of play
    assert_eq!(session.spawned_this_run(), 3);

    session.end_run(Collision::Ground);
    for _ in 0..20 {
        tick(&mut session, &IDLE, 0.25);
    }
    assert!(session.obstacles.is_empty());

    tick(&mut session, &FLAP, 0.0);
    assert_eq!(session.spawned_this_run(), 0);
    tick(&mut session, &IDLE, 1.4);
    assert_eq!(session.spawned_this_run(), 1);
}
