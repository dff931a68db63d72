//! Glyphcaster terminal ray caster
//!
//! Casts one ray per terminal cell into a world of axis-aligned wall cubes
//! between a floor and a ceiling, and turns the nearest hit into a glyph and
//! colour. Depth is shown by glyph choice rather than shading.

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bullet;
pub mod camera;
pub mod config;
pub mod cube;
pub mod error;
pub mod glyph;
pub mod hittable;
pub mod interval;
pub mod line;
pub mod map;
pub mod plane;
pub mod renderer;
pub mod surface;
pub mod terminal;
pub mod vector;

pub use bullet::Bullet;
pub use camera::Camera;
pub use config::AppConfig;
pub use error::{ConfigError, GeometryError};
pub use hittable::{Hittable, World, WorldObject};
pub use line::Line;
pub use map::Map;
pub use plane::Plane;
pub use renderer::{FrameBuffer, FrameRenderer};
pub use vector::Vector3D;
