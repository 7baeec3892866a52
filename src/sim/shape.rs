//! Convex silhouettes for shape-accurate collision
//!
//! Every collidable body is described by a convex polygon in field space.
//! Overlap is decided with the separating axis test using strict
//! inequalities, so two shapes that only share an edge or a corner do not
//! collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A convex polygon in field coordinates (vertices in order, either winding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Silhouette {
    points: Vec<Vec2>,
}

impl Silhouette {
    /// Build from convex polygon vertices
    pub fn new(points: Vec<Vec2>) -> Self {
        debug_assert!(points.len() >= 3, "silhouette needs at least 3 vertices");
        Self { points }
    }

    /// Axis-aligned rectangle with its top-left corner at `min`
    pub fn rect(min: Vec2, size: Vec2) -> Self {
        Self::new(vec![
            min,
            Vec2::new(min.x + size.x, min.y),
            min + size,
            Vec2::new(min.x, min.y + size.y),
        ])
    }

    /// A `width` x `height` box rotated about its centre by `degrees`,
    /// then shifted so its axis-aligned bounds start at `top_left`.
    ///
    /// Positive angles turn the box counter-clockwise on screen (y down).
    pub fn rotated_box(top_left: Vec2, width: f32, height: f32, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let half = Vec2::new(width / 2.0, height / 2.0);
        let corners = [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ];
        let rotated: Vec<Vec2> = corners
            .iter()
            .map(|c| Vec2::new(c.x * cos + c.y * sin, -c.x * sin + c.y * cos))
            .collect();
        let min = rotated.iter().fold(Vec2::splat(f32::INFINITY), |acc, p| acc.min(*p));
        let offset = top_left - min;
        Self::new(rotated.into_iter().map(|p| p + offset).collect())
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Move every vertex by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.points.iter().map(|p| *p + offset).collect())
    }

    /// Mirror vertically within the band `[0, height]`
    pub fn flipped_vertically(&self, height: f32) -> Self {
        Self::new(
            self.points
                .iter()
                .map(|p| Vec2::new(p.x, height - p.y))
                .collect(),
        )
    }

    /// Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.points.iter().fold(
            (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }

    /// True if the interiors overlap (shared edges or corners do not count)
    pub fn overlaps(&self, other: &Silhouette) -> bool {
        // Cheap reject on bounds first
        let (a_min, a_max) = self.bounds();
        let (b_min, b_max) = other.bounds();
        if a_max.x <= b_min.x || b_max.x <= a_min.x || a_max.y <= b_min.y || b_max.y <= a_min.y {
            return false;
        }

        self.edge_normals()
            .chain(other.edge_normals())
            .all(|axis| {
                let (a_lo, a_hi) = self.project(axis);
                let (b_lo, b_hi) = other.project(axis);
                a_hi > b_lo && b_hi > a_lo
            })
    }

    /// Lowest point on screen (largest y)
    pub fn bottom(&self) -> f32 {
        self.bounds().1.y
    }

    fn edge_normals(&self) -> impl Iterator<Item = Vec2> + '_ {
        let n = self.points.len();
        (0..n).filter_map(move |i| {
            let edge = self.points[(i + 1) % n] - self.points[i];
            let normal = Vec2::new(-edge.y, edge.x);
            (normal.length_squared() > 0.0).then_some(normal)
        })
    }

    fn project(&self, axis: Vec2) -> (f32, f32) {
        self.points
            .iter()
            .map(|p| p.dot(axis))
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| (lo.min(d), hi.max(d)))
    }
}
