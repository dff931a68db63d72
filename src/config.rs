//! Application configuration.
//!
//! Loaded from a TOML file; every section is optional and falls back to the
//! built-in defaults. [`AppConfig::validate`] must pass before the first
//! frame is rendered.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_ROTATION_SPEED, DEFAULT_SPEED};
use crate::error::ConfigError;
use crate::glyph::CellColor;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub screen: ScreenConfig,
    pub view: ViewConfig,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub colors: ColorConfig,
}

/// Output grid size in characters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: usize,
    pub height: usize,
}

/// View window mapping from screen cells to world-space ray targets
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewConfig {
    /// World units per screen column on the view window
    pub horizontal_ratio: f32,
    /// World units per screen row on the view window
    pub vertical_ratio: f32,
    /// Distance from the eye to the view window
    pub focal_length: f32,
    /// Depth limit; nothing farther is drawn
    pub depth: f32,
}

/// World scale and layout
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side of one map cell in world units
    pub cell_size: f32,
    /// Height of walls; the ceiling sits on top of them
    pub wall_height: f32,
    pub map: Vec<String>,
}

/// Player motion
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub speed: f32,
    pub rotation_speed: f32,
}

/// Colours per object kind
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColorConfig {
    pub wall: CellColor,
    pub floor: CellColor,
    pub ceiling: CellColor,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 40,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        // About 45 degrees across 120 columns; terminal cells are roughly
        // twice as tall as they are wide.
        Self {
            horizontal_ratio: 0.007,
            vertical_ratio: 0.014,
            focal_length: 1.0,
            depth: 16.0,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            wall_height: 1.0,
            map: default_map(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            wall: CellColor::White,
            floor: CellColor::Red,
            ceiling: CellColor::Gray,
        }
    }
}

fn default_map() -> Vec<String> {
    [
        "################",
        "#####..........#",
        "#..............#",
        "#..........##..#",
        "#..........##..#",
        "#...###........#",
        "#...###........#",
        "#...###........#",
        "#..............#",
        "#.......###....#",
        "#..............#",
        "#..............#",
        "#......##......#",
        "#......##......#",
        "#..............#",
        "################",
    ]
    .iter()
    .map(|row| row.to_string())
    .collect()
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl ScreenConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidScreen {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("horizontal_ratio", self.horizontal_ratio),
            ("vertical_ratio", self.vertical_ratio),
            ("focal_length", self.focal_length),
            ("depth", self.depth),
        ] {
            if !positive(value) {
                return Err(ConfigError::InvalidView(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl WorldConfig {
    /// Checks the scale only; the map itself is checked when parsed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.cell_size) {
            return Err(ConfigError::InvalidWorld(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if !positive(self.wall_height) {
            return Err(ConfigError::InvalidWorld(format!(
                "wall_height must be positive, got {}",
                self.wall_height
            )));
        }
        Ok(())
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.screen.validate()?;
        self.view.validate()?;
        self.world.validate()?;
        if !(self.player.speed.is_finite() && self.player.rotation_speed.is_finite()) {
            return Err(ConfigError::InvalidWorld(
                "player speeds must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;

    Ok(config)
}
