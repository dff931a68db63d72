//! Ray-object intersection contract.
//!
//! Defines the [`Hittable`] trait shared by every world object, the closed
//! [`WorldObject`] enum the renderer iterates over, and [`World`], the ordered
//! object list.

use crate::bullet::Bullet;
use crate::camera::Camera;
use crate::cube::Cube;
use crate::glyph::CellColor;
use crate::line::Line;
use crate::surface::HorizontalSurface;

/// Objects that can be intersected by rays.
pub trait Hittable {
    /// Euclidean distance from the line's point to the nearest visible hit.
    ///
    /// `None` when the line misses, runs parallel, or only meets the object
    /// behind its point.
    fn intersection_distance(&self, line: &Line) -> Option<f32>;

    /// Glyph for a hit at `distance` with depth limit `depth`.
    fn glyph_for_distance(&self, depth: f32, distance: f32) -> char;

    /// Colour attribute for cells showing this object.
    fn color(&self) -> CellColor;
}

/// Every kind of object a world can hold.
#[derive(Debug, Clone)]
pub enum WorldObject {
    /// Axis-aligned wall block
    Cube(Cube),
    /// Horizontal plane below the camera
    Floor(HorizontalSurface),
    /// Horizontal plane above the camera
    Ceiling(HorizontalSurface),
    /// Player placeholder; never hit
    Camera(Camera),
    /// Projectile in flight
    Bullet(Bullet),
}

impl WorldObject {
    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WorldObject::Cube(_) => "cube",
            WorldObject::Floor(_) => "floor",
            WorldObject::Ceiling(_) => "ceiling",
            WorldObject::Camera(_) => "camera",
            WorldObject::Bullet(_) => "bullet",
        }
    }
}

impl Hittable for WorldObject {
    fn intersection_distance(&self, line: &Line) -> Option<f32> {
        match self {
            WorldObject::Cube(cube) => cube.intersection_distance(line),
            WorldObject::Floor(surface) | WorldObject::Ceiling(surface) => {
                surface.intersection_distance(line)
            }
            WorldObject::Camera(camera) => camera.intersection_distance(line),
            WorldObject::Bullet(bullet) => bullet.intersection_distance(line),
        }
    }

    fn glyph_for_distance(&self, depth: f32, distance: f32) -> char {
        match self {
            WorldObject::Cube(cube) => cube.glyph_for_distance(depth, distance),
            WorldObject::Floor(surface) | WorldObject::Ceiling(surface) => {
                surface.glyph_for_distance(depth, distance)
            }
            WorldObject::Camera(camera) => camera.glyph_for_distance(depth, distance),
            WorldObject::Bullet(bullet) => bullet.glyph_for_distance(depth, distance),
        }
    }

    fn color(&self) -> CellColor {
        match self {
            WorldObject::Cube(cube) => cube.color(),
            WorldObject::Floor(surface) | WorldObject::Ceiling(surface) => surface.color(),
            WorldObject::Camera(camera) => camera.color(),
            WorldObject::Bullet(bullet) => bullet.color(),
        }
    }
}

/// Ordered collection of world objects.
///
/// Order matters: the renderer resolves equal distances in favour of the
/// object added first.
#[derive(Debug, Clone, Default)]
pub struct World {
    objects: Vec<WorldObject>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Append an object.
    pub fn add(&mut self, object: WorldObject) {
        self.objects.push(object);
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> &[WorldObject] {
        &self.objects
    }

    pub(crate) fn objects_mut(&mut self) -> &mut Vec<WorldObject> {
        &mut self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest strictly positive, finite hit along `line`.
    ///
    /// Returns the index of the winning object and the distance. Ties keep
    /// the earlier object.
    pub fn nearest_hit(&self, line: &Line) -> Option<(usize, f32)> {
        let mut nearest: Option<(usize, f32)> = None;
        for (index, object) in self.objects.iter().enumerate() {
            let Some(distance) = object.intersection_distance(line) else {
                continue;
            };
            if !(distance.is_finite() && distance > 0.0) {
                continue;
            }
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }
        nearest
    }
}
