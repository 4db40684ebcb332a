//! HTML canvas backend
//!
//! `CanvasRenderingContext2d` provides both host capabilities: text
//! measurement for the layout engine and glyph drawing for the renderer.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{GlyphSurface, StrokeStyle};
use crate::error::{Result, RibbonError};
use crate::layout::TextMeasurer;

fn surface_error(context: &str, e: JsValue) -> RibbonError {
    RibbonError::Surface(format!("{}: {:?}", context, e))
}

/// Configure font and pen before measuring or drawing
///
/// Measurement depends on the font, so this must run before layout.
pub fn apply_stroke_style(ctx: &CanvasRenderingContext2d, style: &StrokeStyle) {
    ctx.set_font(&style.font);
    ctx.set_stroke_style_str(&style.stroke_color);
    ctx.set_miter_limit(style.miter_limit);
    ctx.set_line_join(&style.line_join);
}

impl TextMeasurer for CanvasRenderingContext2d {
    fn measure(&self, text: &str) -> Result<f64> {
        self.measure_text(text)
            .map(|metrics| metrics.width())
            .map_err(|e| surface_error("measureText", e))
    }
}

impl GlyphSurface for CanvasRenderingContext2d {
    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<()> {
        CanvasRenderingContext2d::translate(self, x, y).map_err(|e| surface_error("translate", e))
    }

    fn rotate(&mut self, angle: f64) -> Result<()> {
        CanvasRenderingContext2d::rotate(self, angle).map_err(|e| surface_error("rotate", e))
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn stroke_glyph(&mut self, glyph: &str) -> Result<()> {
        self.stroke_text(glyph, 0.0, 0.0)
            .map_err(|e| surface_error("strokeText", e))
    }

    fn fill_glyph(&mut self, glyph: &str) -> Result<()> {
        self.fill_text(glyph, 0.0, 0.0)
            .map_err(|e| surface_error("fillText", e))
    }
}
