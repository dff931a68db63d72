//! Camera pose and player motion
//!
//! Heading is measured in radians in the horizontal plane: heading 0 looks
//! along +y, and positive rotation turns towards +x. Up is +z.

use crate::glyph::{CellColor, BACKGROUND_GLYPH};
use crate::hittable::Hittable;
use crate::line::Line;
use crate::map::Map;
use crate::vector::Vector3D;

/// Default forward speed in world units per second.
pub const DEFAULT_SPEED: f32 = 0.8;

/// Default turn rate in radians per second.
pub const DEFAULT_ROTATION_SPEED: f32 = 0.5;

/// Player-controlled camera.
///
/// The only mutable object in a running world: position and heading change
/// once per frame before rendering starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space
    pub position: Vector3D,
    /// Heading angle in radians
    pub heading: f32,
    /// Forward speed in world units per second
    pub speed: f32,
    /// Turn rate in radians per second
    pub rotation_speed: f32,
}

impl Camera {
    /// Camera at `position` looking along `heading`, with default speeds.
    pub fn new(position: Vector3D, heading: f32) -> Self {
        Self {
            position,
            heading,
            speed: DEFAULT_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
        }
    }

    pub fn with_speeds(mut self, speed: f32, rotation_speed: f32) -> Self {
        self.speed = speed;
        self.rotation_speed = rotation_speed;
        self
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vector3D {
        Vector3D::new(self.heading.sin(), self.heading.cos(), 0.0)
    }

    /// Unit vector to the camera's right.
    pub fn right(&self) -> Vector3D {
        Vector3D::new(self.heading.cos(), -self.heading.sin(), 0.0)
    }

    /// World up.
    pub fn up(&self) -> Vector3D {
        Vector3D::new(0.0, 0.0, 1.0)
    }

    /// Move by `delta` in world space.
    pub fn translate(&mut self, delta: Vector3D) {
        self.position = self.position + delta;
    }

    /// Turn by `direction * rotation_speed * dt`; `direction` is usually -1 or 1.
    pub fn rotate(&mut self, direction: f32, dt: f32) {
        self.heading += direction * self.rotation_speed * dt;
    }

    pub fn move_forward(&mut self, dt: f32) {
        self.translate(self.forward() * (self.speed * dt));
    }

    pub fn move_backward(&mut self, dt: f32) {
        self.translate(self.forward() * (-self.speed * dt));
    }

    /// Move along the heading by `direction * speed * dt` unless that ends
    /// inside a wall or outside the map.
    ///
    /// Returns whether the move was applied.
    pub fn try_move(&mut self, direction: f32, dt: f32, map: &Map, cell_size: f32) -> bool {
        let previous = self.position;
        self.translate(self.forward() * (direction * self.speed * dt));
        if map.is_blocked(self.position.x(), self.position.y(), cell_size) {
            self.position = previous;
            return false;
        }
        true
    }
}

/// Cameras are stored alongside world objects at most as placeholders.
impl Hittable for Camera {
    fn intersection_distance(&self, _line: &Line) -> Option<f32> {
        None
    }

    fn glyph_for_distance(&self, _depth: f32, _distance: f32) -> char {
        BACKGROUND_GLYPH
    }

    fn color(&self) -> CellColor {
        CellColor::Background
    }
}
