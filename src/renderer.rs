//! Frame rendering: one ray per screen cell, nearest hit wins.
//!
//! Rays run from the camera eye through a flat "view window" placed
//! `focal_length` in front of it. Each cell maps to a fixed offset on that
//! window in world units (`horizontal_ratio` per column, `vertical_ratio` per
//! row), which is not a perspective-correct projection.

use log::trace;

use crate::camera::Camera;
use crate::config::{ScreenConfig, ViewConfig};
use crate::error::ConfigError;
use crate::glyph::Cell;
use crate::hittable::{Hittable, World};
use crate::line::Line;
use crate::vector::Vector3D;

/// Row-major grid of output cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Background-filled buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at (x, y), or `None` outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// One row of cells, or `None` below the last row.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows of glyphs joined by newlines, without colour.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height * 3);
        for row in (0..self.height).filter_map(|y| self.row(y)) {
            text.extend(row.iter().map(|cell| cell.glyph));
            text.push('\n');
        }
        text
    }
}

/// Stateless per-frame renderer.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    screen: ScreenConfig,
    view: ViewConfig,
}

impl FrameRenderer {
    /// Fails when the screen or view settings are unusable.
    pub fn new(screen: ScreenConfig, view: ViewConfig) -> Result<Self, ConfigError> {
        screen.validate()?;
        view.validate()?;
        Ok(Self { screen, view })
    }

    /// Line from the camera eye through the view-window point of cell (x, y).
    ///
    /// The centre column `width / 2` and centre row `height / 2` map to the
    /// point straight ahead.
    pub fn cell_ray(&self, camera: &Camera, x: usize, y: usize) -> Line {
        let across = (x as f32 - (self.screen.width / 2) as f32) * self.view.horizontal_ratio;
        let down = (y as f32 - (self.screen.height / 2) as f32) * self.view.vertical_ratio;

        let target = camera.position
            + camera.forward() * self.view.focal_length
            + camera.right() * across
            + camera.up() * -down;
        Line::through(camera.position, target)
    }

    /// Resolve one cell against the world.
    pub fn shade(&self, world: &World, line: &Line) -> Cell {
        match world.nearest_hit(line) {
            Some((index, distance)) if distance <= self.view.depth => {
                let object = &world.objects()[index];
                Cell::new(object.glyph_for_distance(self.view.depth, distance), object.color())
            }
            _ => Cell::BACKGROUND,
        }
    }

    /// Render a full frame into `frame`.
    ///
    /// The buffer is reallocated if its size does not match the screen.
    pub fn render_into(&self, camera: &Camera, world: &World, frame: &mut FrameBuffer) {
        if frame.width != self.screen.width || frame.height != self.screen.height {
            *frame = FrameBuffer::new(self.screen.width, self.screen.height);
        }

        if world.is_empty() {
            frame.cells.fill(Cell::BACKGROUND);
            return;
        }

        let start = std::time::Instant::now();
        for y in 0..self.screen.height {
            for x in 0..self.screen.width {
                let line = self.cell_ray(camera, x, y);
                frame.cells[y * self.screen.width + x] = self.shade(world, &line);
            }
        }
        trace!(
            "Rendered {}x{} frame against {} objects in {:.2?}",
            self.screen.width,
            self.screen.height,
            world.len(),
            start.elapsed()
        );
    }

    /// Render a fresh frame.
    pub fn render(&self, camera: &Camera, world: &World) -> FrameBuffer {
        let mut frame = FrameBuffer::new(self.screen.width, self.screen.height);
        self.render_into(camera, world, &mut frame);
        frame
    }
}

/// Eye position for a camera standing at (x, y) in a world with the given
/// wall height.
pub fn eye_position(x: f32, y: f32, wall_height: f32) -> Vector3D {
    Vector3D::new(x, y, wall_height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube;
    use crate::glyph::{CellColor, BACKGROUND_GLYPH};
    use crate::hittable::WorldObject;

    fn renderer(width: usize, height: usize) -> FrameRenderer {
        FrameRenderer::new(ScreenConfig { width, height }, ViewConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_empty_screen() {
        let result = FrameRenderer::new(ScreenConfig { width: 0, height: 10 }, ViewConfig::default());
        assert!(matches!(result, Err(ConfigError::InvalidScreen { .. })));
    }

    #[test]
    fn test_center_ray_points_forward() {
        let r = renderer(11, 7);
        let camera = Camera::new(Vector3D::new(1.0, 2.0, 0.5), 0.3);
        let line = r.cell_ray(&camera, 5, 3);
        assert_eq!(line.point(), camera.position);
        assert!((line.direction() - camera.forward()).length() < 1e-5);
    }

    #[test]
    fn test_upper_rows_look_up_and_right_columns_look_right() {
        let r = renderer(11, 7);
        let camera = Camera::new(Vector3D::ZERO, 0.0);
        assert!(r.cell_ray(&camera, 5, 0).direction().z() > 0.0);
        assert!(r.cell_ray(&camera, 5, 6).direction().z() < 0.0);
        assert!(r.cell_ray(&camera, 10, 3).direction().x() > 0.0);
        assert!(r.cell_ray(&camera, 0, 3).direction().x() < 0.0);
    }

    #[test]
    fn test_empty_world_is_background() {
        let r = renderer(8, 4);
        let frame = r.render(&Camera::new(Vector3D::ZERO, 0.0), &World::new());
        assert_eq!(frame.cells().len(), 32);
        assert!(frame.cells().iter().all(|c| *c == Cell::BACKGROUND));
        assert_eq!(frame.to_text(), "        \n".repeat(4));
    }

    #[test]
    fn test_empty_world_clears_reused_buffer() {
        let r = renderer(4, 2);
        let mut frame = FrameBuffer::new(4, 2);
        frame.cells.fill(Cell::new('#', CellColor::Red));
        r.render_into(&Camera::new(Vector3D::ZERO, 0.0), &World::new(), &mut frame);
        assert!(frame.cells().iter().all(|c| *c == Cell::BACKGROUND));
    }

    #[test]
    fn test_nearest_object_wins() {
        let r = renderer(9, 5);
        let camera = Camera::new(Vector3D::ZERO, 0.0);
        let mut world = World::new();
        world.add(WorldObject::Cube(
            Cube::centered(Vector3D::new(0.0, 9.0, 0.0), 1.0).with_color(CellColor::Blue),
        ));
        world.add(WorldObject::Cube(
            Cube::centered(Vector3D::new(0.0, 4.0, 0.0), 1.0).with_color(CellColor::Green),
        ));
        let frame = r.render(&camera, &world);
        let center = frame.get(4, 2).unwrap();
        assert_eq!(center.color, CellColor::Green);
        // Distance 3 is inside the first wall band for depth 16
        assert_eq!(center.glyph, '█');
    }

    #[test]
    fn test_equal_distance_keeps_first_object() {
        let r = renderer(9, 5);
        let camera = Camera::new(Vector3D::ZERO, 0.0);
        let mut world = World::new();
        for color in [CellColor::Magenta, CellColor::Yellow] {
            world.add(WorldObject::Cube(
                Cube::centered(Vector3D::new(0.0, 4.0, 0.0), 1.0).with_color(color),
            ));
        }
        let frame = r.render(&camera, &world);
        assert_eq!(frame.get(4, 2).unwrap().color, CellColor::Magenta);
    }

    #[test]
    fn test_hits_beyond_depth_are_background() {
        let r = renderer(9, 5);
        let camera = Camera::new(Vector3D::ZERO, 0.0);
        let mut world = World::new();
        world.add(WorldObject::Cube(Cube::centered(Vector3D::new(0.0, 40.0, 0.0), 1.0)));
        let frame = r.render(&camera, &world);
        assert_eq!(frame.get(4, 2).unwrap().glyph, BACKGROUND_GLYPH);
        assert_eq!(frame.get(4, 2).unwrap().color, CellColor::Background);
    }

    #[test]
    fn test_render_into_resizes_buffer() {
        let r = renderer(6, 3);
        let mut frame = FrameBuffer::new(1, 1);
        r.render_into(&Camera::new(Vector3D::ZERO, 0.0), &World::new(), &mut frame);
        assert_eq!((frame.width(), frame.height()), (6, 3));
        assert_eq!(frame.row(2).map(|row| row.len()), Some(6));
        assert_eq!(frame.row(3), None);
        assert_eq!(frame.get(6, 0), None);
    }
}
