//! Grid map parsing and world construction.
//!
//! A map is a rectangle of single-character cells: `#` is a wall, `P` marks
//! the player spawn and anything else is open floor. Column index grows along
//! +x and row index along +y.

use log::{debug, info};

use crate::config::{ColorConfig, WorldConfig};
use crate::cube::Cube;
use crate::error::ConfigError;
use crate::hittable::{World, WorldObject};
use crate::surface::HorizontalSurface;
use crate::vector::Vector3D;

pub const WALL: char = '#';
pub const SPAWN: char = 'P';

/// Rectangular cell grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Map {
    /// Parse rows of equal length.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, ConfigError> {
        let height = rows.len();
        if height == 0 {
            return Err(ConfigError::InvalidMap("map has no rows".to_string()));
        }

        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(ConfigError::InvalidMap("map rows are empty".to_string()));
        }

        let mut cells = Vec::with_capacity(width * height);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != width {
                return Err(ConfigError::InvalidMap(format!(
                    "row {} has {} cells, expected {}",
                    index, len, width
                )));
            }
            cells.extend(row.chars());
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (col, row), or `None` outside the grid.
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    pub fn is_wall(&self, col: usize, row: usize) -> bool {
        self.cell(col, row) == Some(WALL)
    }

    /// Go/no-go test for a world-space position: walls and everything outside
    /// the grid are blocked.
    pub fn is_blocked(&self, x: f32, y: f32, cell_size: f32) -> bool {
        let col = (x / cell_size).floor();
        let row = (y / cell_size).floor();
        if !(col >= 0.0 && row >= 0.0) {
            return true;
        }
        match self.cell(col as usize, row as usize) {
            Some(c) => c == WALL,
            None => true,
        }
    }

    /// Wall cells as (col, row), in row-major scan order.
    pub fn wall_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == WALL)
            .map(move |(i, _)| (i % self.width, i / self.width))
    }

    /// Horizontal spawn position: the centre of the first `P` cell, or the
    /// centre of the grid when there is none.
    pub fn spawn_point(&self, cell_size: f32) -> (f32, f32) {
        match self.cells.iter().position(|c| *c == SPAWN) {
            Some(i) => (
                ((i % self.width) as f32 + 0.5) * cell_size,
                ((i / self.width) as f32 + 0.5) * cell_size,
            ),
            None => (
                self.width as f32 * cell_size / 2.0,
                self.height as f32 * cell_size / 2.0,
            ),
        }
    }
}

impl World {
    /// Build the object list for a map: one cube per wall cell in scan
    /// order, then the floor, then the ceiling.
    pub fn from_map(
        map: &Map,
        settings: &WorldConfig,
        colors: &ColorConfig,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let size = settings.cell_size;
        let top = settings.wall_height;

        let mut world = World::new();
        for (col, row) in map.wall_cells() {
            let min = Vector3D::new(col as f32 * size, row as f32 * size, 0.0);
            let max = Vector3D::new((col + 1) as f32 * size, (row + 1) as f32 * size, top);
            debug!("Wall cube at cell ({}, {})", col, row);
            world.add(WorldObject::Cube(Cube::new(min, max).with_color(colors.wall)));
        }
        let walls = world.len();

        world.add(WorldObject::Floor(HorizontalSurface::floor(0.0).with_color(colors.floor)));
        world.add(WorldObject::Ceiling(
            HorizontalSurface::ceiling(top).with_color(colors.ceiling),
        ));

        info!(
            "Built world from {}x{} map: {} wall cubes, {} objects",
            map.width(),
            map.height(),
            walls,
            world.len()
        );
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::CellColor;
    use crate::hittable::Hittable;

    #[test]
    fn test_parse_rejects_empty_and_ragged() {
        let empty: [&str; 0] = [];
        assert!(matches!(Map::parse(&empty), Err(ConfigError::InvalidMap(_))));
        assert!(matches!(Map::parse(&[""]), Err(ConfigError::InvalidMap(_))));
        assert!(matches!(Map::parse(&["###", "##"]), Err(ConfigError::InvalidMap(_))));
    }

    #[test]
    fn test_cells_and_walls() {
        let map = Map::parse(&["#..", "..#"]).unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert!(map.is_wall(0, 0));
        assert!(map.is_wall(2, 1));
        assert!(!map.is_wall(1, 0));
        assert_eq!(map.cell(3, 0), None);
        assert_eq!(map.wall_cells().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn test_is_blocked() {
        let map = Map::parse(&["#.", ".."]).unwrap();
        assert!(map.is_blocked(0.5, 0.5, 1.0));
        assert!(!map.is_blocked(1.5, 0.5, 1.0));
        assert!(map.is_blocked(-0.1, 0.5, 1.0));
        assert!(map.is_blocked(1.5, 2.0, 1.0));
        assert!(!map.is_blocked(3.0, 1.0, 2.0));
    }

    #[test]
    fn test_spawn_point() {
        let centered = Map::parse(&["....", "...."]).unwrap();
        assert_eq!(centered.spawn_point(1.0), (2.0, 1.0));
        let marked = Map::parse(&["....", ".P.."]).unwrap();
        assert_eq!(marked.spawn_point(2.0), (3.0, 3.0));
        assert!(!marked.is_blocked(3.0, 3.0, 2.0));
    }

    #[test]
    fn test_world_order() {
        let map = Map::parse(&["#.#", "...", ".#."]).unwrap();
        let colors = ColorConfig::default();
        let world = World::from_map(&map, &WorldConfig::default(), &colors).unwrap();
        let kinds: Vec<_> = world.objects().iter().map(|o| o.kind()).collect();
        assert_eq!(kinds, vec!["cube", "cube", "cube", "floor", "ceiling"]);

        match &world.objects()[2] {
            WorldObject::Cube(cube) => {
                assert_eq!(cube.min(), Vector3D::new(1.0, 2.0, 0.0));
                assert_eq!(cube.max(), Vector3D::new(2.0, 3.0, 1.0));
            }
            other => panic!("expected cube, got {}", other.kind()),
        }
        assert_eq!(world.objects()[0].color(), colors.wall);
        assert_eq!(world.objects()[3].color(), CellColor::Red);
    }

    #[test]
    fn test_world_rejects_bad_scale() {
        let map = Map::parse(&["#"]).unwrap();
        let settings = WorldConfig {
            cell_size: 0.0,
            ..WorldConfig::default()
        };
        assert!(matches!(
            World::from_map(&map, &settings, &ColorConfig::default()),
            Err(ConfigError::InvalidWorld(_))
        ));
    }
}
