//! Axis-aligned cube primitive.
//!
//! A cube owns one bounding plane per face. A line hits the cube where it
//! crosses a face plane inside the cube's bounds on all three axes.

use crate::glyph::{CellColor, GlyphPalette};
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::line::Line;
use crate::plane::Plane;
use crate::vector::Vector3D;

/// Slack applied to the bounds when accepting face hits, so that points
/// computed on a face do not fall outside it through rounding.
pub const BOUNDS_EPSILON: f32 = 1e-4;

/// Axis-aligned box with its six face planes.
#[derive(Debug, Clone)]
pub struct Cube {
    center: Vector3D,
    /// Bounds per axis, x then y then z.
    bounds: [Interval; 3],
    /// Outward-facing planes: -x, +x, -y, +y, -z, +z.
    faces: [Plane; 6],
    color: CellColor,
    palette: GlyphPalette,
}

impl Cube {
    /// Box spanning the two corners, in any order.
    pub fn new(corner_a: Vector3D, corner_b: Vector3D) -> Self {
        let bounds = [
            Interval::spanning(corner_a.x(), corner_b.x()),
            Interval::spanning(corner_a.y(), corner_b.y()),
            Interval::spanning(corner_a.z(), corner_b.z()),
        ];
        let min = Vector3D::new(bounds[0].min, bounds[1].min, bounds[2].min);
        let max = Vector3D::new(bounds[0].max, bounds[1].max, bounds[2].max);

        let faces = [
            Plane::new(min, Vector3D::new(-1.0, 0.0, 0.0)),
            Plane::new(max, Vector3D::new(1.0, 0.0, 0.0)),
            Plane::new(min, Vector3D::new(0.0, -1.0, 0.0)),
            Plane::new(max, Vector3D::new(0.0, 1.0, 0.0)),
            Plane::new(min, Vector3D::new(0.0, 0.0, -1.0)),
            Plane::new(max, Vector3D::new(0.0, 0.0, 1.0)),
        ];

        Self {
            center: Vector3D::new(bounds[0].center(), bounds[1].center(), bounds[2].center()),
            bounds,
            faces,
            color: CellColor::White,
            palette: GlyphPalette::WALL,
        }
    }

    /// Cube around `center` extending `half_size` along every axis.
    pub fn centered(center: Vector3D, half_size: f32) -> Self {
        let half = Vector3D::new(half_size, half_size, half_size);
        Self::new(center - half, center + half)
    }

    pub fn with_color(mut self, color: CellColor) -> Self {
        self.color = color;
        self
    }

    pub fn center(&self) -> Vector3D {
        self.center
    }

    pub fn min(&self) -> Vector3D {
        Vector3D::new(self.bounds[0].min, self.bounds[1].min, self.bounds[2].min)
    }

    pub fn max(&self) -> Vector3D {
        Vector3D::new(self.bounds[0].max, self.bounds[1].max, self.bounds[2].max)
    }

    /// Shift the whole box by `delta`, keeping its colour and palette.
    pub fn translate(&mut self, delta: Vector3D) {
        let moved = Self::new(self.min() + delta, self.max() + delta);
        self.center = moved.center;
        self.bounds = moved.bounds;
        self.faces = moved.faces;
    }

    /// True when `p` lies inside the bounds, with [`BOUNDS_EPSILON`] slack.
    pub fn contains(&self, p: Vector3D) -> bool {
        self.bounds
            .iter()
            .enumerate()
            .all(|(axis, range)| range.expand(BOUNDS_EPSILON).contains(p.at(axis)))
    }
}

impl Hittable for Cube {
    fn intersection_distance(&self, line: &Line) -> Option<f32> {
        let mut nearest: Option<f32> = None;

        for face in &self.faces {
            let Some(hit) = face.intersect(line) else {
                continue;
            };
            // Behind the line's point, or a face plane crossed outside the box
            if hit.t <= 0.0 || !self.contains(hit.point) {
                continue;
            }
            // Direction is unit length, so t is the Euclidean distance
            if nearest.map_or(true, |best| hit.t < best) {
                nearest = Some(hit.t);
            }
        }

        nearest
    }

    fn glyph_for_distance(&self, depth: f32, distance: f32) -> char {
        self.palette.glyph_for(depth, distance)
    }

    fn color(&self) -> CellColor {
        self.color
    }
}
