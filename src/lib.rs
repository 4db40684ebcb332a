//! Name Ribbon WASM Module
//!
//! Lays a name out along a cubic Bézier "ribbon" and draws it on a canvas.
//! The curve is sampled into an arc-length table, the text is centered on
//! the curve by rendered width, and each glyph is placed at a sample and
//! rotated to the curve's tangent.

pub mod api;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use error::{Result, RibbonError};
pub use geometry::{sample_curve, AngleMode, CubicCurve, CurveSample, Point, SampleTable, SamplerConfig};
pub use layout::{layout_ribbon, layout_text, LayoutOptions, Placement, Ribbon, RibbonLayout, TextMeasurer};
pub use render::{draw_placements, GlyphSurface, StrokeStyle};
pub use style::StyleTable;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        return;
    }

    log::info!("Name ribbon WASM module initialized");
}
