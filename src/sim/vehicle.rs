//! The player's plane
//!
//! A point-mass body under constant gravity. Its on-screen tilt and its
//! collision silhouette are both derived from the vertical velocity each
//! time they are asked for.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{DrawRequest, Entity, EntityKind};
use super::shape::Silhouette;
use crate::consts::*;
use crate::settings::PhysicsSettings;

/// A plane entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Top-left of the unrotated body
    pub pos: Vec2,
    /// Vertical velocity (pixels/s, positive is down)
    pub velocity: f32,
    /// Body size before rotation
    pub size: Vec2,
    gravity: f32,
    jump_impulse: f32,
    rotation_gain: f32,
    /// Fractional animation frame
    frame_index: f32,
}

impl Vehicle {
    pub fn new(pos: Vec2, physics: &PhysicsSettings) -> Self {
        Self {
            pos,
            velocity: 0.0,
            size: Vec2::new(VEHICLE_WIDTH, VEHICLE_HEIGHT),
            gravity: physics.gravity,
            jump_impulse: physics.jump_impulse,
            rotation_gain: physics.rotation_gain,
            frame_index: 0.0,
        }
    }

    /// Fresh plane at the start position: left edge at 1/20 of the field
    /// width, vertically centred
    pub fn spawn(field: Vec2, physics: &PhysicsSettings) -> Self {
        Self::new(Self::start_position(field), physics)
    }

    pub fn start_position(field: Vec2) -> Vec2 {
        Vec2::new(field.x / 20.0, field.y / 2.0 - VEHICLE_HEIGHT / 2.0)
    }

    /// Flap: velocity is replaced by the impulse, not added to
    pub fn activate(&mut self) {
        self.velocity = self.jump_impulse;
    }

    /// Semi-implicit Euler step: velocity first, then position with the new
    /// velocity. Nothing is clamped.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.gravity * dt;
        self.pos.y += self.velocity * dt;
    }

    /// Tilt in degrees; nose up while climbing, nose down while falling
    #[inline]
    pub fn rotation_degrees(&self) -> f32 {
        -self.velocity * self.rotation_gain
    }

    /// Cosmetic frame cycling
    pub fn advance_animation(&mut self, dt: f32) {
        self.frame_index += ANIMATION_FPS * dt;
        if self.frame_index >= ANIMATION_FRAMES as f32 {
            self.frame_index = 0.0;
        }
    }

    #[inline]
    pub fn frame(&self) -> usize {
        self.frame_index as usize
    }

    /// Top edge of the unrotated body
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    /// The rotated body, with its rotated bounds anchored at `pos`
    pub fn body_silhouette(&self) -> Silhouette {
        Silhouette::rotated_box(self.pos, self.size.x, self.size.y, self.rotation_degrees())
    }
}

impl Entity for Vehicle {
    fn update(&mut self, dt: f32) {
        self.integrate(dt);
        self.advance_animation(dt);
    }

    fn silhouette(&self) -> Option<Silhouette> {
        Some(self.body_silhouette())
    }

    fn draw_request(&self) -> DrawRequest {
        DrawRequest {
            entity: EntityKind::Vehicle,
            position: self.pos,
            rotation: self.rotation_degrees(),
            frame: self.frame(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Vec2 {
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT)
    }

    fn plane() -> Vehicle {
        Vehicle::spawn(field(), &PhysicsSettings::default())
    }

    #[test]
    fn test_spawn_position_and_rest() {
        let v = plane();
        assert_eq!(v.pos, Vec2::new(24.0, 400.0 - VEHICLE_HEIGHT / 2.0));
        assert_eq!(v.velocity, 0.0);
        assert_eq!(v.frame(), 0);
    }

    #[test]
    fn test_integrate_order() {
        let mut v = plane();
        let y0 = v.pos.y;
        v.integrate(0.5);
        assert_eq!(v.velocity, 300.0);
        assert_eq!(v.pos.y, y0 + 150.0);
    }

    #[test]
    fn test_activate_replaces_velocity() {
        let mut v = plane();
        v.velocity = 900.0;
        v.activate();
        assert_eq!(v.velocity, JUMP_IMPULSE);
        v.velocity = -1000.0;
        v.activate();
        assert_eq!(v.velocity, JUMP_IMPULSE);
    }

    #[test]
    fn test_rotation_follows_velocity() {
        let mut v = plane();
        v.velocity = 500.0;
        assert!((v.rotation_degrees() - (-30.0)).abs() < 1e-4);
        v.activate();
        assert!((v.rotation_degrees() - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_silhouette_tracks_rotation() {
        let mut v = plane();
        let level = v.body_silhouette();
        let (min, max) = level.bounds();
        assert!((min - v.pos).length() < 1e-4);
        assert!(((max - min) - v.size).length() < 1e-4);

        v.velocity = 750.0; // -45 degrees
        let tilted = v.body_silhouette();
        let (tmin, tmax) = tilted.bounds();
        assert!((tmin - v.pos).length() < 1e-3);
        assert!(tmax.x - tmin.x > v.size.x);
        assert!(tmax.y - tmin.y > v.size.y);
    }

    #[test]
    fn test_animation_wraps() {
        let mut v = plane();
        v.advance_animation(0.15);
        assert_eq!(v.frame(), 1);
        v.advance_animation(0.1);
        assert_eq!(v.frame(), 2);
        v.advance_animation(0.1);
        assert_eq!(v.frame(), 0);
    }

    #[test]
    fn test_animation_does_not_change_silhouette() {
        let mut v = plane();
        let before = v.body_silhouette();
        v.advance_animation(0.15);
        assert_eq!(v.body_silhouette(), before);
    }

    proptest! {
        #[test]
        fn prop_integrate_is_deterministic(y in -2000.0f32..2000.0, vel in -1000.0f32..1000.0, dt in 0.0f32..0.1) {
            let physics = PhysicsSettings::default();
            let mut a = Vehicle::new(Vec2::new(24.0, y), &physics);
            a.velocity = vel;
            let mut b = a.clone();
            a.integrate(dt);
            b.integrate(dt);
            prop_assert_eq!(a.pos, b.pos);
            prop_assert_eq!(a.velocity, b.velocity);
            let expected_v = vel + physics.gravity * dt;
            prop_assert_eq!(a.velocity, expected_v);
            prop_assert_eq!(a.pos.y, y + expected_v * dt);
        }

        #[test]
        fn prop_activate_is_not_additive(vel in -5000.0f32..5000.0) {
            let mut v = plane();
            v.velocity = vel;
            v.activate();
            prop_assert_eq!(v.velocity, JUMP_IMPULSE);
        }
    }
}
