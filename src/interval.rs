//! Closed intervals [min, max] for bounds checks and distance ranges.

/// Closed interval [min, max].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval from two bounds given in any order
    pub fn spanning(a: f32, b: f32) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    /// Midpoint of the interval
    pub fn center(&self) -> f32 {
        (self.min + self.max) * 0.5
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Interval grown by `delta` on both ends
    pub fn expand(&self, delta: f32) -> Self {
        Self::new(self.min - delta, self.max + delta)
    }
}
