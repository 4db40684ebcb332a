//! Glyph rendering
//!
//! Draws laid-out placements onto a host surface: for every character the
//! transform is moved to the placement, rotated by its angle, and the glyph
//! is stroked (wide outline) and then filled.

pub mod canvas;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::Placement;

/// Drawing capability of the host surface
pub trait GlyphSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64) -> Result<()>;
    fn rotate(&mut self, angle: f64) -> Result<()>;
    fn set_line_width(&mut self, width: f64);
    /// Stroke `glyph` at the current origin
    fn stroke_glyph(&mut self, glyph: &str) -> Result<()>;
    /// Fill `glyph` at the current origin
    fn fill_glyph(&mut self, glyph: &str) -> Result<()>;
}

/// Pen settings for drawing a name
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StrokeStyle {
    /// CSS font shorthand, e.g. `"bold 24px serif"`
    pub font: String,
    /// CSS color of the outline pass
    pub stroke_color: String,
    /// Line width of the outline pass
    pub stroke_width: f64,
    /// Line width of the fill pass
    pub fill_width: f64,
    pub miter_limit: f64,
    pub line_join: String,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            font: "24px sans-serif".to_string(),
            stroke_color: "#000000".to_string(),
            stroke_width: 7.0,
            fill_width: 1.0,
            miter_limit: 2.0,
            line_join: "round".to_string(),
        }
    }
}

/// Draw every placement in order
pub fn draw_placements<S: GlyphSurface + ?Sized>(
    surface: &mut S,
    placements: &[Placement],
    style: &StrokeStyle,
) -> Result<()> {
    let mut buf = [0u8; 4];

    for placement in placements {
        let glyph: &str = placement.character.encode_utf8(&mut buf);

        surface.save();
        let drawn = draw_glyph(surface, placement, glyph, style);
        surface.restore();
        drawn?;
    }

    log::trace!("drew {} glyphs", placements.len());
    Ok(())
}

fn draw_glyph<S: GlyphSurface + ?Sized>(
    surface: &mut S,
    placement: &Placement,
    glyph: &str,
    style: &StrokeStyle,
) -> Result<()> {
    surface.translate(placement.x, placement.y)?;
    surface.rotate(placement.angle)?;
    surface.set_line_width(style.stroke_width);
    surface.stroke_glyph(glyph)?;
    surface.set_line_width(style.fill_width);
    surface.fill_glyph(glyph)
}
