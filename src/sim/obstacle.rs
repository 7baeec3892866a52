//! Rock obstacles
//!
//! Each spawn produces one rock, either rising from below the floor or
//! hanging from above the ceiling. Rocks drift left at a fixed speed and are
//! discarded once they are well past the left edge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{DrawRequest, Entity, EntityKind};
use super::shape::Silhouette;
use crate::consts::*;

/// Rock footprint
pub const OBSTACLE_WIDTH: f32 = 120.0;
/// Variant 0: a single spike
pub const SPIKE_HEIGHT: f32 = 330.0;
/// Variant 1: a flat-topped mesa
pub const MESA_HEIGHT: f32 = 280.0;
pub const MESA_TOP_WIDTH: f32 = 40.0;

/// Which side the solid mass is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Rises from the floor: bottom edge anchored below the field bottom
    GapBelow,
    /// Hangs from the ceiling: top edge anchored above the field top,
    /// artwork and shape mirrored vertically
    GapAbove,
}

/// A rock entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed (pixels/s)
    pub speed: f32,
    pub orientation: Orientation,
    /// Artwork choice (0 = spike, 1 = mesa)
    pub variant: u8,
}

impl Obstacle {
    /// Rock whose bounding box is centred horizontally on `center_x`;
    /// `anchor_y` is the bottom edge for floor rocks, the top edge for
    /// ceiling rocks
    pub fn new(
        id: u32,
        orientation: Orientation,
        variant: u8,
        center_x: f32,
        anchor_y: f32,
        speed: f32,
    ) -> Self {
        let size = Self::variant_size(variant);
        let top = match orientation {
            Orientation::GapBelow => anchor_y - size.y,
            Orientation::GapAbove => anchor_y,
        };
        Self {
            id,
            pos: Vec2::new(center_x - size.x / 2.0, top),
            size,
            speed,
            orientation,
            variant,
        }
    }

    /// Random rock just past the right edge of a `field`-sized play area
    pub fn spawn<R: Rng>(id: u32, field: Vec2, speed: f32, rng: &mut R) -> Self {
        let orientation = if rng.random_bool(0.5) {
            Orientation::GapBelow
        } else {
            Orientation::GapAbove
        };
        let variant = rng.random_range(0..=1u8);
        let center_x = field.x + rng.random_range(SPAWN_JITTER_X.0..=SPAWN_JITTER_X.1) as f32;
        let anchor_y = match orientation {
            Orientation::GapBelow => {
                field.y + rng.random_range(FLOOR_ANCHOR_Y.0..=FLOOR_ANCHOR_Y.1) as f32
            }
            Orientation::GapAbove => {
                rng.random_range(CEILING_ANCHOR_Y.0..=CEILING_ANCHOR_Y.1) as f32
            }
        };
        Self::new(id, orientation, variant, center_x, anchor_y, speed)
    }

    pub fn variant_size(variant: u8) -> Vec2 {
        match variant {
            0 => Vec2::new(OBSTACLE_WIDTH, SPIKE_HEIGHT),
            _ => Vec2::new(OBSTACLE_WIDTH, MESA_HEIGHT),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos.x -= self.speed * dt;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Fully scrolled past the left edge (with margin)
    #[inline]
    pub fn is_off_field(&self) -> bool {
        self.right() <= OBSTACLE_DESPAWN_X
    }

    /// Rock outline in field space
    pub fn shape(&self) -> Silhouette {
        let (w, h) = (self.size.x, self.size.y);
        // Upright outline, local to the bounding box
        let upright = match self.variant {
            0 => Silhouette::new(vec![
                Vec2::new(0.0, h),
                Vec2::new(w / 2.0, 0.0),
                Vec2::new(w, h),
            ]),
            _ => Silhouette::new(vec![
                Vec2::new(0.0, h),
                Vec2::new((w - MESA_TOP_WIDTH) / 2.0, 0.0),
                Vec2::new((w + MESA_TOP_WIDTH) / 2.0, 0.0),
                Vec2::new(w, h),
            ]),
        };
        let local = match self.orientation {
            Orientation::GapBelow => upright,
            Orientation::GapAbove => upright.flipped_vertically(h),
        };
        local.translated(self.pos)
    }
}

impl Entity for Obstacle {
    fn update(&mut self, dt: f32) {
        self.advance(dt);
    }

    fn silhouette(&self) -> Option<Silhouette> {
        Some(self.shape())
    }

    fn draw_request(&self) -> DrawRequest {
        DrawRequest {
            entity: EntityKind::Obstacle {
                id: self.id,
                orientation: self.orientation,
                variant: self.variant,
            },
            position: self.pos,
            rotation: 0.0,
            frame: 0,
        }
    }
}
