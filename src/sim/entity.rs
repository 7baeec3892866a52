//! Shared capability interface for simulated bodies
//!
//! Each body kind is a concrete type; the trait only fixes what the loop
//! driver and the renderer may ask of any of them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Orientation;
use super::scroll::LayerKind;
use super::shape::Silhouette;

/// What a draw request refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Layer(LayerKind),
    Vehicle,
    Obstacle {
        id: u32,
        orientation: Orientation,
        variant: u8,
    },
}

/// A single abstract draw request for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub entity: EntityKind,
    /// Top-left corner in field coordinates
    pub position: Vec2,
    /// Visual rotation in degrees (counter-clockwise on screen)
    pub rotation: f32,
    /// Animation frame index
    pub frame: usize,
}

pub trait Entity {
    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Collision shape, if the body takes part in collisions
    fn silhouette(&self) -> Option<Silhouette> {
        None
    }

    fn draw_request(&self) -> DrawRequest;
}
