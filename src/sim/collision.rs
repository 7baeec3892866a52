//! Collision detection for the plane
//!
//! The plane crashes when its rotated silhouette overlaps a rock or the
//! ground strip, or when its top edge reaches the top of the field.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::obstacle::Obstacle;
use super::vehicle::Vehicle;
use crate::settings::FieldSettings;

/// What the plane hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Obstacle { id: u32 },
    Ceiling,
    Ground,
}

/// Find the first thing the plane is touching, if any
///
/// The ceiling is checked against the unrotated top edge (`top <= 0`). The
/// ground surface spans the whole field width, so overlapping it reduces to
/// the silhouette's lowest point dipping strictly below the surface; this
/// also catches a plane that fell clean through in one long frame. Bodies
/// without a silhouette only take part in the ceiling check.
pub fn detect(vehicle: &Vehicle, obstacles: &[Obstacle], field: &FieldSettings) -> Option<Collision> {
    if vehicle.top() <= 0.0 {
        return Some(Collision::Ceiling);
    }

    let body = vehicle.silhouette()?;

    if let Some(hit) = obstacles
        .iter()
        .find(|o| o.silhouette().is_some_and(|shape| body.overlaps(&shape)))
    {
        return Some(Collision::Obstacle { id: hit.id });
    }

    if body.bottom() > field.ground_top() {
        return Some(Collision::Ground);
    }

    None
}

/// True if the plane is touching anything
#[inline]
pub fn check_collision(vehicle: &Vehicle, obstacles: &[Obstacle], field: &FieldSettings) -> bool {
    detect(vehicle, obstacles, field).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::PhysicsSettings;
    use crate::sim::obstacle::{MESA_HEIGHT, Orientation};
    use glam::Vec2;

    fn field() -> FieldSettings {
        FieldSettings::default()
    }

    fn plane_at(x: f32, y: f32) -> Vehicle {
        Vehicle::new(Vec2::new(x, y), &PhysicsSettings::default())
    }

    /// Floor mesa centred on x = 200 whose flat top sits at y = 600
    fn mesa() -> Obstacle {
        Obstacle::new(9, Orientation::GapBelow, 1, 200.0, 600.0 + MESA_HEIGHT, OBSTACLE_SPEED)
    }

    #[test]
    fn test_clear_air() {
        let plane = plane_at(24.0, 300.0);
        assert_eq!(detect(&plane, &[mesa()], &field()), None);
        assert!(!check_collision(&plane, &[mesa()], &field()));
    }

    #[test]
    fn test_edge_adjacent_is_not_a_collision() {
        // Plane bottom resting exactly on the mesa top
        let plane = plane_at(180.0, 600.0 - VEHICLE_HEIGHT);
        assert_eq!(plane.rotation_degrees(), 0.0);
        assert!(!check_collision(&plane, &[mesa()], &field()));
    }

    #[test]
    fn test_one_pixel_overlap_is_a_collision() {
        let plane = plane_at(180.0, 601.0 - VEHICLE_HEIGHT);
        assert_eq!(
            detect(&plane, &[mesa()], &field()),
            Some(Collision::Obstacle { id: 9 })
        );
    }

    #[test]
    fn test_detect_matches_entity_silhouettes() {
        let rock = mesa();
        for y in [590.0, 600.0, 601.0, 620.0] {
            let plane = plane_at(180.0, y - VEHICLE_HEIGHT);
            let body = plane.silhouette().unwrap();
            let shape = rock.silhouette().unwrap();
            assert_eq!(
                detect(&plane, &[rock.clone()], &field()).is_some(),
                body.overlaps(&shape),
                "plane bottom at {y}"
            );
        }
    }

    #[test]
    fn test_bounding_box_overlap_alone_is_not_enough() {
        // Inside the spike's bounding box, but beside its sloped flank
        let spike = Obstacle::new(3, Orientation::GapBelow, 0, 300.0, 800.0, OBSTACLE_SPEED);
        let plane = plane_at(spike.pos.x - 30.0, spike.pos.y + 10.0);
        let (plane_min, plane_max) = plane.body_silhouette().bounds();
        assert!(plane_max.x > spike.pos.x && plane_min.y < spike.bottom());
        assert!(!check_collision(&plane, &[spike], &FieldSettings {
            ground_height: 0.0,
            ..field()
        }));
    }

    #[test]
    fn test_rotation_changes_the_outcome() {
        // Level plane just clears the mesa top; a steep nose-down tilt
        // grows its footprint into the rock.
        let mut plane = plane_at(180.0, 600.0 - VEHICLE_HEIGHT - 5.0);
        assert!(!check_collision(&plane, &[mesa()], &field()));
        plane.velocity = 750.0;
        assert!(check_collision(&plane, &[mesa()], &field()));
    }

    #[test]
    fn test_ceiling_boundary() {
        assert_eq!(detect(&plane_at(24.0, 0.0), &[], &field()), Some(Collision::Ceiling));
        assert_eq!(detect(&plane_at(24.0, -20.0), &[], &field()), Some(Collision::Ceiling));
        assert_eq!(detect(&plane_at(24.0, 1.0), &[], &field()), None);
    }

    #[test]
    fn test_ground_boundary() {
        let ground_top = field().ground_top();
        let resting = plane_at(24.0, ground_top - VEHICLE_HEIGHT);
        assert_eq!(detect(&resting, &[], &field()), None);
        let sinking = plane_at(24.0, ground_top - VEHICLE_HEIGHT + 1.0);
        assert_eq!(detect(&sinking, &[], &field()), Some(Collision::Ground));
        let far_below = plane_at(24.0, 5000.0);
        assert_eq!(detect(&far_below, &[], &field()), Some(Collision::Ground));
    }
}
