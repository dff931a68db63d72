//! Glyphs, colours and distance banding.
//!
//! Depth is conveyed by swapping glyphs instead of shading: each object kind
//! carries a [`GlyphPalette`] that maps a hit distance to a character.

use serde::{Deserialize, Serialize};

/// Glyph written for cells where nothing is visible.
pub const BACKGROUND_GLYPH: char = ' ';

/// Colour attribute of an output cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellColor {
    /// Nothing hit
    #[default]
    Background,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
    Gray,
}

/// One output cell: glyph plus colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: CellColor,
}

impl Cell {
    pub const BACKGROUND: Cell = Cell {
        glyph: BACKGROUND_GLYPH,
        color: CellColor::Background,
    };

    pub const fn new(glyph: char, color: CellColor) -> Self {
        Self { glyph, color }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

/// Upper edge of one distance band, as a fraction of the depth limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub fraction: f32,
    /// Whether a distance exactly on the edge still belongs to this band
    pub inclusive: bool,
    pub glyph: char,
}

impl Band {
    pub const fn below(fraction: f32, glyph: char) -> Self {
        Self {
            fraction,
            inclusive: false,
            glyph,
        }
    }

    pub const fn up_to(fraction: f32, glyph: char) -> Self {
        Self {
            fraction,
            inclusive: true,
            glyph,
        }
    }

    fn holds(&self, depth: f32, distance: f32) -> bool {
        let edge = depth * self.fraction;
        if self.inclusive {
            distance <= edge
        } else {
            distance < edge
        }
    }
}

/// Four bands from nearest to farthest; beyond the last is background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPalette {
    bands: [Band; 4],
}

impl GlyphPalette {
    /// Solid blocks fading out: `█` up to D/4, then `▓` `▒` `░` up to D.
    pub const WALL: GlyphPalette = GlyphPalette::new([
        Band::up_to(1.0 / 4.0, '\u{2588}'),
        Band::below(1.0 / 3.0, '\u{2593}'),
        Band::below(1.0 / 2.0, '\u{2592}'),
        Band::below(1.0, '\u{2591}'),
    ]);

    pub const FLOOR: GlyphPalette = GlyphPalette::new([
        Band::below(0.25, '#'),
        Band::below(0.5, 'x'),
        Band::below(0.75, '.'),
        Band::below(0.9, '-'),
    ]);

    pub const CEILING: GlyphPalette = GlyphPalette::new([
        Band::below(0.25, '='),
        Band::below(0.5, '~'),
        Band::below(0.75, '-'),
        Band::below(0.9, '`'),
    ]);

    /// Bands must be ordered by increasing fraction.
    pub const fn new(bands: [Band; 4]) -> Self {
        Self { bands }
    }

    /// Glyph for a hit at `distance` given depth limit `depth`.
    ///
    /// Non-positive or non-finite distances are background.
    pub fn glyph_for(&self, depth: f32, distance: f32) -> char {
        if !(distance.is_finite() && distance > 0.0) {
            return BACKGROUND_GLYPH;
        }
        self.bands
            .iter()
            .find(|band| band.holds(depth, distance))
            .map_or(BACKGROUND_GLYPH, |band| band.glyph)
    }
}
