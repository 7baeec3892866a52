//! Endlessly scrolling backdrop layers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{DrawRequest, Entity, EntityKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Background,
    Ground,
}

/// A strip that slides left and snaps back once half of it is off screen
///
/// Layers are twice the field width, so snapping back at the halfway point
/// is seamless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollLayer {
    pub kind: LayerKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed (pixels/s)
    pub speed: f32,
}

impl ScrollLayer {
    pub fn new(kind: LayerKind, pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            kind,
            pos,
            size,
            speed,
        }
    }

    /// Full-height backdrop anchored at the field origin
    pub fn background(field: Vec2, speed: f32) -> Self {
        Self::new(
            LayerKind::Background,
            Vec2::ZERO,
            Vec2::new(field.x * 2.0, field.y),
            speed,
        )
    }

    /// Ground strip resting on the field bottom
    pub fn ground(field: Vec2, height: f32, speed: f32) -> Self {
        Self::new(
            LayerKind::Ground,
            Vec2::new(0.0, field.y - height),
            Vec2::new(field.x * 2.0, height),
            speed,
        )
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos.x -= self.speed * dt;
        if self.center_x() <= 0.0 {
            self.pos.x = 0.0;
        }
    }
}

impl Entity for ScrollLayer {
    fn update(&mut self, dt: f32) {
        self.advance(dt);
    }

    fn draw_request(&self) -> DrawRequest {
        DrawRequest {
            entity: EntityKind::Layer(self.kind),
            position: self.pos,
            rotation: 0.0,
            frame: 0,
        }
    }
}
