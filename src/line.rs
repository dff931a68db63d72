//! Line representation for ray casting.
//!
//! A line is defined as l(t) = point + t * direction, with the direction
//! normalized at construction so that the parameter t is also the Euclidean
//! distance from `point`.

use crate::vector::Vector3D;

/// Line in 3D space defined by a point and a unit direction.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    point: Vector3D,

    /// Unit length, or zero for a degenerate line that never advances.
    direction: Vector3D,
}

impl Line {
    /// Create a line through `point` heading along `direction`.
    ///
    /// The direction is normalized immediately; a zero direction stays zero.
    pub fn new(point: Vector3D, direction: Vector3D) -> Self {
        Self {
            point,
            direction: direction.normalized(),
        }
    }

    /// Line through `from` towards `to`.
    pub fn through(from: Vector3D, to: Vector3D) -> Self {
        Self::new(from, to - from)
    }

    /// Origin of the line.
    pub fn point(&self) -> Vector3D {
        self.point
    }

    /// Unit direction (or zero).
    pub fn direction(&self) -> Vector3D {
        self.direction
    }

    /// True when the direction is the zero vector.
    pub fn is_degenerate(&self) -> bool {
        self.direction.length() == 0.0
    }

    /// Compute the point at parameter t: point + direction * t.
    pub fn point_at(&self, t: f32) -> Vector3D {
        self.point + self.direction * t
    }

    /// Estimate the parameter t for which `point_at(t)` is `p`.
    ///
    /// Projects `p - point` onto the direction: the quotient is
    /// `(p - point)·d / d·d`, not the ratio of a vector with itself, which is
    /// always 1. Returns 0 when that projection is exactly zero, which covers
    /// `p` coinciding with the line's own point and degenerate lines.
    pub fn parameter_for(&self, p: Vector3D) -> f32 {
        let diff = p - self.point;
        let along = diff.dot(self.direction);
        if along == 0.0 {
            return 0.0;
        }
        along / self.direction.dot(self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vector3D, b: Vector3D) {
        assert!((a - b).length() < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_direction_is_normalized() {
        let line = Line::new(Vector3D::ZERO, Vector3D::new(0.0, 10.0, 0.0));
        assert_eq!(line.direction(), Vector3D::new(0.0, 1.0, 0.0));
        assert!(!line.is_degenerate());
    }

    #[test]
    fn test_zero_direction_stays_zero() {
        let origin = Vector3D::new(1.0, 2.0, 3.0);
        let line = Line::new(origin, Vector3D::ZERO);
        assert!(line.is_degenerate());
        assert_eq!(line.point_at(100.0), origin);
        assert_eq!(line.parameter_for(Vector3D::new(5.0, 5.0, 5.0)), 0.0);
    }

    #[test]
    fn test_huge_direction_keeps_unit_length() {
        let line = Line::new(Vector3D::ZERO, Vector3D::new(3e19, 4e19, 0.0));
        assert!(!line.is_degenerate());
        assert_eq!(line.direction().length(), 1.0);
        assert_close(line.direction(), Vector3D::new(0.6, 0.8, 0.0));
        assert_close(line.point_at(5.0), Vector3D::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_non_finite_direction_is_degenerate() {
        let line = Line::new(Vector3D::ZERO, Vector3D::new(f32::INFINITY, 1.0, 0.0));
        assert!(line.is_degenerate());
        assert_eq!(line.point_at(3.0), Vector3D::ZERO);
    }

    #[test]
    fn test_point_at() {
        let line = Line::new(Vector3D::new(1.0, 0.0, 0.0), Vector3D::new(0.0, 0.0, 2.0));
        assert_eq!(line.point_at(0.0), Vector3D::new(1.0, 0.0, 0.0));
        assert_eq!(line.point_at(3.0), Vector3D::new(1.0, 0.0, 3.0));
        assert_eq!(line.point_at(-1.0), Vector3D::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn test_parameter_for_own_point_is_zero() {
        let origin = Vector3D::new(-4.0, 1.0, 2.0);
        let line = Line::new(origin, Vector3D::new(1.0, 1.0, 0.0));
        assert_eq!(line.parameter_for(origin), 0.0);
    }

    #[test]
    fn test_parameter_round_trip_on_line() {
        let line = Line::new(Vector3D::new(0.5, -1.0, 2.0), Vector3D::new(1.0, 2.0, -2.0));
        for t in [-3.5_f32, -0.25, 0.75, 1.0, 4.0, 12.5] {
            let p = line.point_at(t);
            let back = line.point_at(line.parameter_for(p));
            assert_close(back, p);
        }
    }

    #[test]
    fn test_through() {
        let line = Line::through(Vector3D::ZERO, Vector3D::new(0.0, 0.0, -3.0));
        assert_eq!(line.direction(), Vector3D::new(0.0, 0.0, -1.0));
    }
}
