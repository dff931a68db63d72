//! Floor and ceiling planes.

use crate::glyph::{CellColor, GlyphPalette};
use crate::hittable::Hittable;
use crate::line::Line;
use crate::plane::Plane;
use crate::vector::Vector3D;

/// Infinite horizontal plane at a fixed height.
#[derive(Debug, Clone)]
pub struct HorizontalSurface {
    height: f32,
    plane: Plane,
    color: CellColor,
    palette: GlyphPalette,
}

impl HorizontalSurface {
    /// Floor at `height`; its normal points up towards the camera.
    pub fn floor(height: f32) -> Self {
        Self::new(height, Vector3D::new(0.0, 0.0, 1.0), CellColor::Red, GlyphPalette::FLOOR)
    }

    /// Ceiling at `height`; its normal points down towards the camera.
    pub fn ceiling(height: f32) -> Self {
        Self::new(height, Vector3D::new(0.0, 0.0, -1.0), CellColor::Gray, GlyphPalette::CEILING)
    }

    fn new(height: f32, normal: Vector3D, color: CellColor, palette: GlyphPalette) -> Self {
        Self {
            height,
            plane: Plane::new(Vector3D::new(0.0, 0.0, height), normal),
            color,
            palette,
        }
    }

    pub fn with_color(mut self, color: CellColor) -> Self {
        self.color = color;
        self
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Hittable for HorizontalSurface {
    fn intersection_distance(&self, line: &Line) -> Option<f32> {
        self.plane
            .intersect(line)
            .map(|hit| hit.t)
            .filter(|t| *t > 0.0)
    }

    fn glyph_for_distance(&self, depth: f32, distance: f32) -> char {
        self.palette.glyph_for(depth, distance)
    }

    fn color(&self) -> CellColor {
        self.color
    }
}
