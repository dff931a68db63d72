use std::f32::consts::FRAC_PI_4;

use glyphcaster::config::{ColorConfig, ScreenConfig, ViewConfig, WorldConfig};
use glyphcaster::glyph::{CellColor, BACKGROUND_GLYPH};
use glyphcaster::renderer::eye_position;
use glyphcaster::{Camera, FrameRenderer, Map, World};

const WIDTH: usize = 120;
const HEIGHT: usize = 40;

fn single_wall_world() -> (Map, World) {
    let rows = [".....", ".....", "..#..", ".....", "....."];
    let map = Map::parse(&rows).unwrap();
    let world = World::from_map(&map, &WorldConfig::default(), &ColorConfig::default()).unwrap();
    (map, world)
}

fn renderer() -> FrameRenderer {
    FrameRenderer::new(
        ScreenConfig {
            width: WIDTH,
            height: HEIGHT,
        },
        ViewConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_single_wall_seen_from_origin_cell() {
    let (_, world) = single_wall_world();
    assert_eq!(world.len(), 3);

    // Origin cell centre (0.5, 0.5) looking at the centre of cell (2, 2)
    let camera = Camera::new(eye_position(0.5, 0.5, 1.0), FRAC_PI_4);
    let frame = renderer().render(&camera, &world);

    let row = HEIGHT / 2;
    let center = frame.get(WIDTH / 2, row).unwrap();
    assert_eq!(center.glyph, '█');
    assert_eq!(center.color, ColorConfig::default().wall);

    // The eye-level row runs parallel to floor and ceiling, so only the wall
    // can show up in it
    for x in [0, 1, 10, WIDTH - 11, WIDTH - 2, WIDTH - 1] {
        let cell = frame.get(x, row).unwrap();
        assert_eq!(cell.glyph, BACKGROUND_GLYPH, "column {}", x);
        assert_eq!(cell.color, CellColor::Background, "column {}", x);
    }
}

#[test]
fn test_floor_and_ceiling_fill_rows_away_from_eye_level() {
    let (_, world) = single_wall_world();
    let camera = Camera::new(eye_position(0.5, 0.5, 1.0), FRAC_PI_4);
    let frame = renderer().render(&camera, &world);

    let colors = ColorConfig::default();
    // Bottom row looks down steeply enough to meet the floor close by
    let bottom = frame.get(0, HEIGHT - 1).unwrap();
    assert_eq!(bottom.color, colors.floor);
    assert_ne!(bottom.glyph, BACKGROUND_GLYPH);

    let top = frame.get(0, 0).unwrap();
    assert_eq!(top.color, colors.ceiling);
    assert_ne!(top.glyph, BACKGROUND_GLYPH);
}

#[test]
fn test_facing_away_shows_no_wall() {
    let (_, world) = single_wall_world();
    let camera = Camera::new(eye_position(0.5, 0.5, 1.0), FRAC_PI_4 + std::f32::consts::PI);
    let frame = renderer().render(&camera, &world);
    let wall = ColorConfig::default().wall;
    assert!(frame.cells().iter().all(|cell| cell.color != wall));
}

#[test]
fn test_frame_is_fully_written_and_finite() {
    let (_, world) = single_wall_world();
    // Standing inside the floor plane and looking straight along it
    let camera = Camera::new(eye_position(1.0, 1.0, 0.0), 0.0);
    let frame = renderer().render(&camera, &world);
    assert_eq!(frame.cells().len(), WIDTH * HEIGHT);
    assert_eq!(frame.to_text().lines().count(), HEIGHT);
    assert!(frame.to_text().lines().all(|line| line.chars().count() == WIDTH));
}

#[test]
fn test_default_world_renders_walls_all_around() {
    let config = glyphcaster::AppConfig::default();
    let map = Map::parse(&config.world.map).unwrap();
    let world = World::from_map(&map, &config.world, &config.colors).unwrap();
    let renderer = FrameRenderer::new(config.screen, config.view).unwrap();
    let (x, y) = map.spawn_point(config.world.cell_size);

    for step in 0..8 {
        let heading = step as f32 * FRAC_PI_4;
        let camera = Camera::new(eye_position(x, y, config.world.wall_height), heading);
        let frame = renderer.render(&camera, &world);
        let center = frame
            .get(config.screen.width / 2, config.screen.height / 2)
            .unwrap();
        // The map is closed, so every heading ends at a wall within the depth limit
        assert_eq!(center.color, config.colors.wall, "heading {}", heading);
    }
}
