//! Implicit plane and ray/plane intersection.

use crate::line::Line;
use crate::vector::Vector3D;

/// Below this |direction · normal| the line counts as parallel to the plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Plane `normal · X + d = 0`.
///
/// The normal is stored as given; callers pass a unit normal when they want
/// `normal · X + d` to be a signed distance.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: Vector3D,
    d: f32,
}

/// Where a line crosses a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// Intersection point
    pub point: Vector3D,
    /// Line parameter at the intersection; negative when the plane is behind the line's point
    pub t: f32,
}

impl Plane {
    /// Plane through `point` with the given normal.
    pub fn new(point: Vector3D, normal: Vector3D) -> Self {
        Self {
            normal,
            d: -normal.dot(point),
        }
    }

    /// Signed offset d.
    pub fn offset(&self) -> f32 {
        self.d
    }

    /// Evaluate `normal · p + d`; zero for points on the plane.
    pub fn evaluate(&self, p: Vector3D) -> f32 {
        self.normal.dot(p) + self.d
    }

    /// Intersect a line with this plane.
    ///
    /// Returns `None` when the line is parallel to the plane or lies in it
    /// (this includes degenerate lines with a zero direction). The returned
    /// parameter may be negative.
    pub fn intersect(&self, line: &Line) -> Option<PlaneHit> {
        let denom = line.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let numerator = line.point().dot(self.normal) + self.d;
        let t = -numerator / denom;
        Some(PlaneHit {
            point: line.point_at(t),
            t,
        })
    }
}
