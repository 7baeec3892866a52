//! Animated Koch snowflake for the idle menu
//!
//! Pure line geometry; the presentation layer strokes the segments.

use glam::Vec2;

/// Recursion depth of each side
pub const FRACTAL_DEPTH: u32 = 4;
/// Side length of the base triangle (pixels)
pub const FRACTAL_SIZE: f32 = 200.0;
/// y of the base triangle's bottom side
pub const FRACTAL_BASELINE: f32 = 200.0;

/// A line segment to stroke
pub type Segment = (Vec2, Vec2);

/// Spins the snowflake's bumps one degree per frame
#[derive(Debug, Clone, Default)]
pub struct FractalAnimator {
    angle: f32,
}

impl FractalAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump angle in degrees, in [0, 360)
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn advance(&mut self) {
        self.angle += 1.0;
        if self.angle >= 360.0 {
            self.angle = 0.0;
        }
    }

    /// Segments of the whole snowflake, centred on a field `field_width` wide
    pub fn segments(&self, field_width: f32) -> Vec<Segment> {
        let mid = field_width / 2.0;
        let left = Vec2::new(mid - FRACTAL_SIZE / 2.0, FRACTAL_BASELINE);
        let right = Vec2::new(mid + FRACTAL_SIZE / 2.0, FRACTAL_BASELINE);
        let apex = Vec2::new(
            mid,
            FRACTAL_BASELINE - (FRACTAL_SIZE * 3f32.sqrt() / 2.0).floor(),
        );

        let mut out = Vec::with_capacity(3 * 4usize.pow(FRACTAL_DEPTH));
        for (start, end) in [(left, right), (right, apex), (apex, left)] {
            koch(start, end, FRACTAL_DEPTH, self.angle, &mut out);
        }
        out
    }
}

/// Replace `start..end` with four segments, recursively
///
/// The middle bump is swung around by `angle_deg`, which is what animates
/// the flake.
pub fn koch(start: Vec2, end: Vec2, depth: u32, angle_deg: f32, out: &mut Vec<Segment>) {
    if depth == 0 {
        out.push((start, end));
        return;
    }

    let third = (end - start) / 3.0;
    let a = start + third;
    let c = start + third * 2.0;
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let b = Vec2::new(
        (start.x + end.x) / 2.0 + cos * (start.y - end.y) / 3.0,
        (start.y + end.y) / 2.0 + sin * (end.x - start.x) / 3.0,
    );

    koch(start, a, depth - 1, angle_deg, out);
    koch(a, b, depth - 1, angle_deg, out);
    koch(b, c, depth - 1, angle_deg, out);
    koch(c, end, depth - 1, angle_deg, out);
}
