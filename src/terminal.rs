//! Terminal display and input handling

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, stdout, BufWriter, Stdout, Write};
use std::time::Duration;

use crate::camera::Camera;
use crate::glyph::{Cell, CellColor};
use crate::hittable::World;
use crate::map::{Map, WALL};
use crate::renderer::FrameBuffer;

pub const MINIMAP_PLAYER: char = 'P';
pub const MINIMAP_BULLET: char = 'B';
const MINIMAP_FLOOR: char = '.';

/// Terminal display handler with buffered output
pub struct TerminalDisplay {
    buffer: BufWriter<Stdout>,
}

impl TerminalDisplay {
    pub fn new() -> io::Result<Self> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

        Ok(Self {
            buffer: BufWriter::new(stdout),
        })
    }

    /// Terminal size in characters, leaving one row for the status line.
    pub fn frame_size(&self) -> io::Result<(usize, usize)> {
        let (width, height) = terminal::size()?;
        Ok((width as usize, height.saturating_sub(1) as usize))
    }

    /// Blit a frame row by row, overlay the minimap in the top-left corner,
    /// then draw the status line underneath.
    pub fn present(
        &mut self,
        frame: &FrameBuffer,
        minimap: &Minimap,
        status: &str,
    ) -> io::Result<()> {
        for y in 0..frame.height() {
            if let Some(row) = frame.row(y) {
                self.queue_row(y, row)?;
            }
        }
        for y in 0..minimap.height().min(frame.height()) {
            if let Some(row) = minimap.row(y) {
                self.queue_row(y, &row[..row.len().min(frame.width())])?;
            }
        }

        queue!(
            self.buffer,
            ResetColor,
            cursor::MoveTo(0, frame.height() as u16),
            terminal::Clear(terminal::ClearType::CurrentLine),
            SetForegroundColor(Color::Green),
            Print(status),
            ResetColor
        )?;

        self.buffer.flush()
    }

    /// Queue one row of cells starting at column 0, switching colour only
    /// when it changes.
    fn queue_row(&mut self, y: usize, cells: &[Cell]) -> io::Result<()> {
        queue!(self.buffer, cursor::MoveTo(0, y as u16))?;
        let mut current: Option<CellColor> = None;
        for cell in cells {
            if current != Some(cell.color) {
                queue!(self.buffer, SetForegroundColor(to_terminal_color(cell.color)))?;
                current = Some(cell.color);
            }
            queue!(self.buffer, Print(cell.glyph))?;
        }
        Ok(())
    }

    /// Check for keyboard input
    pub fn poll_input(&self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Release {
                    return Ok(Some(key_event));
                }
            }
        }
        Ok(None)
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = self.buffer.flush();
        let _ = execute!(stdout(), ResetColor, cursor::Show, LeaveAlternateScreen);
    }
}

/// Top-down view of the map: walls and floor in green, bullets and the
/// player marked on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimap {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Minimap {
    pub fn new(map: &Map, world: &World, camera: &Camera, cell_size: f32) -> Self {
        let (width, height) = (map.width(), map.height());
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let glyph = if map.is_wall(col, row) {
                    WALL
                } else {
                    MINIMAP_FLOOR
                };
                cells.push(Cell::new(glyph, CellColor::Green));
            }
        }

        let mut minimap = Self {
            width,
            height,
            cells,
        };
        for bullet in world.bullets() {
            let p = bullet.position();
            minimap.mark(p.x(), p.y(), cell_size, Cell::new(MINIMAP_BULLET, CellColor::Magenta));
        }
        // Player last so it stays visible over a bullet in the same cell
        minimap.mark(
            camera.position.x(),
            camera.position.y(),
            cell_size,
            Cell::new(MINIMAP_PLAYER, CellColor::White),
        );
        minimap
    }

    /// Overwrite the cell holding world position (x, y); no-op off the map.
    fn mark(&mut self, x: f32, y: f32, cell_size: f32, cell: Cell) {
        let col = (x / cell_size).floor();
        let row = (y / cell_size).floor();
        if !(col >= 0.0 && row >= 0.0) {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.width && row < self.height {
            self.cells[row * self.width + col] = cell;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }
}

/// Map a cell colour onto the terminal palette.
pub fn to_terminal_color(color: CellColor) -> Color {
    match color {
        CellColor::Background => Color::Black,
        CellColor::Red => Color::DarkRed,
        CellColor::Green => Color::DarkGreen,
        CellColor::Blue => Color::DarkBlue,
        CellColor::Yellow => Color::DarkYellow,
        CellColor::Magenta => Color::DarkMagenta,
        CellColor::Cyan => Color::DarkCyan,
        CellColor::White => Color::White,
        CellColor::Gray => Color::DarkGrey,
    }
}

/// Key actions for the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    Quit,
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Fire,
}

/// Parse keyboard input into actions
pub fn parse_key_event(event: KeyEvent) -> Action {
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Action::Forward,
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Action::Backward,
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Action::TurnLeft,
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Action::TurnRight,
        KeyCode::Char('f') | KeyCode::Char('F') => Action::Fire,
        _ => Action::None,
    }
}

/// Stats line shown under the frame.
pub fn status_line(x: f32, y: f32, heading: f32, frame_seconds: f32) -> String {
    let fps = if frame_seconds > 0.0 {
        1.0 / frame_seconds
    } else {
        0.0
    };
    format!(
        "X={:3.2}, Y={:3.2}, A={:3.2} FPS={:3.2}  [WASD] move  [F]ire  [Q]uit",
        x, y, heading, fps
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bullet::Bullet;
    use crate::config::{ColorConfig, WorldConfig};
    use crate::renderer::eye_position;
    use crate::vector::Vector3D;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_parse_key_event_quit() {
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        assert_eq!(parse_key_event(event), Action::Quit);
        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::empty());
        assert_eq!(parse_key_event(event), Action::Quit);
    }

    #[test]
    fn test_parse_key_event_movement() {
        let cases = [
            (KeyCode::Char('w'), Action::Forward),
            (KeyCode::Char('s'), Action::Backward),
            (KeyCode::Char('a'), Action::TurnLeft),
            (KeyCode::Char('d'), Action::TurnRight),
            (KeyCode::Up, Action::Forward),
            (KeyCode::Left, Action::TurnLeft),
            (KeyCode::Char('f'), Action::Fire),
            (KeyCode::Char('F'), Action::Fire),
        ];
        for (code, action) in cases {
            let event = KeyEvent::new(code, KeyModifiers::empty());
            assert_eq!(parse_key_event(event), action);
        }
    }

    #[test]
    fn test_parse_key_event_none() {
        let event = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty());
        assert_eq!(parse_key_event(event), Action::None);
    }

    #[test]
    fn test_status_line() {
        let status = status_line(8.0, 7.5, 0.25, 0.5);
        assert!(status.starts_with("X=8.00, Y=7.50, A=0.25 FPS=2.00"));
        assert!(status_line(0.0, 0.0, 0.0, 0.0).contains("FPS=0.00"));
    }

    fn minimap_fixture() -> (Map, World) {
        let map = Map::parse(&["####", "#..#", "#..#", "####"]).unwrap();
        let world = World::from_map(&map, &WorldConfig::default(), &ColorConfig::default()).unwrap();
        (map, world)
    }

    #[test]
    fn test_minimap_marks_walls_floor_and_player() {
        let (map, world) = minimap_fixture();
        let camera = Camera::new(eye_position(2.5, 1.5, 1.0), 0.0);
        let minimap = Minimap::new(&map, &world, &camera, 1.0);

        assert_eq!((minimap.width(), minimap.height()), (4, 4));
        assert_eq!(minimap.get(0, 0), Some(Cell::new('#', CellColor::Green)));
        assert_eq!(minimap.get(1, 1), Some(Cell::new('.', CellColor::Green)));
        assert_eq!(minimap.get(2, 1), Some(Cell::new('P', CellColor::White)));
        assert_eq!(minimap.get(4, 0), None);

        let glyphs: String = minimap.row(1).unwrap().iter().map(|c| c.glyph).collect();
        assert_eq!(glyphs, "#.P#");
        assert_eq!(minimap.row(4), None);
    }

    #[test]
    fn test_minimap_shows_bullet_and_scales_by_cell_size() {
        let (map, mut world) = minimap_fixture();
        world.fire(Bullet::new(Vector3D::new(3.0, 5.0, 1.0), Vector3D::new(1.0, 0.0, 0.0), 1.0));
        let camera = Camera::new(eye_position(5.0, 3.0, 2.0), 0.0);
        let minimap = Minimap::new(&map, &world, &camera, 2.0);

        assert_eq!(minimap.get(1, 2), Some(Cell::new('B', CellColor::Magenta)));
        assert_eq!(minimap.get(2, 1), Some(Cell::new('P', CellColor::White)));
        assert_eq!(minimap.cells.iter().filter(|c| c.glyph == 'P').count(), 1);
    }

    #[test]
    fn test_minimap_ignores_player_off_map() {
        let (map, world) = minimap_fixture();
        let camera = Camera::new(eye_position(-1.0, 9.0, 1.0), 0.0);
        let minimap = Minimap::new(&map, &world, &camera, 1.0);
        assert!(minimap.cells.iter().all(|c| c.glyph != 'P'));
    }

    #[test]
    fn test_background_is_black() {
        assert_eq!(to_terminal_color(CellColor::Background), Color::Black);
    }
}
