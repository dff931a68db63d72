//! Projectile fired by the player.
//!
//! A bullet is a small cube that travels in a straight line at constant
//! speed. It is an ordinary world object, so rays see it like any wall.

use log::debug;

use crate::camera::Camera;
use crate::cube::Cube;
use crate::glyph::CellColor;
use crate::hittable::{Hittable, World, WorldObject};
use crate::line::Line;
use crate::map::Map;
use crate::vector::Vector3D;

pub const BULLET_SPEED: f32 = 1.6;
pub const BULLET_HALF_SIZE: f32 = 0.05;

/// Spawn distance in front of the eye, clear of the near view window.
const MUZZLE_DISTANCE: f32 = 0.3;

#[derive(Debug, Clone)]
pub struct Bullet {
    body: Cube,
    velocity: Vector3D,
}

impl Bullet {
    /// Bullet centred on `position` heading along `direction` at `speed`.
    pub fn new(position: Vector3D, direction: Vector3D, speed: f32) -> Self {
        Self {
            body: Cube::centered(position, BULLET_HALF_SIZE).with_color(CellColor::Magenta),
            velocity: direction.normalized() * speed,
        }
    }

    /// Bullet leaving the camera eye along its heading.
    pub fn fired_from(camera: &Camera) -> Self {
        let forward = camera.forward();
        Self::new(camera.position + forward * MUZZLE_DISTANCE, forward, BULLET_SPEED)
    }

    pub fn position(&self) -> Vector3D {
        self.body.center()
    }

    pub fn velocity(&self) -> Vector3D {
        self.velocity
    }

    /// Move by `velocity * dt`.
    pub fn advance(&mut self, dt: f32) {
        self.body.translate(self.velocity * dt);
    }
}

impl Hittable for Bullet {
    fn intersection_distance(&self, line: &Line) -> Option<f32> {
        self.body.intersection_distance(line)
    }

    fn glyph_for_distance(&self, depth: f32, distance: f32) -> char {
        self.body.glyph_for_distance(depth, distance)
    }

    fn color(&self) -> CellColor {
        self.body.color()
    }
}

impl World {
    /// Put `bullet` in flight, replacing the one already flying.
    pub fn fire(&mut self, bullet: Bullet) {
        let objects = self.objects_mut();
        objects.retain(|object| !matches!(object, WorldObject::Bullet(_)));
        debug!("Bullet fired from {:?}", bullet.position());
        objects.push(WorldObject::Bullet(bullet));
    }

    /// Bullets currently in flight.
    pub fn bullets(&self) -> impl Iterator<Item = &Bullet> + '_ {
        self.objects().iter().filter_map(|object| match object {
            WorldObject::Bullet(bullet) => Some(bullet),
            _ => None,
        })
    }

    /// Move every bullet by `dt` and drop those that end up in a wall or off
    /// the map. Returns how many were dropped.
    pub fn advance_bullets(&mut self, dt: f32, map: &Map, cell_size: f32) -> usize {
        let objects = self.objects_mut();
        let before = objects.len();
        objects.retain_mut(|object| match object {
            WorldObject::Bullet(bullet) => {
                bullet.advance(dt);
                let p = bullet.position();
                !map.is_blocked(p.x(), p.y(), cell_size)
            }
            _ => true,
        });
        let dropped = before - objects.len();
        if dropped > 0 {
            debug!("{} bullet(s) stopped", dropped);
        }
        dropped
    }
}
