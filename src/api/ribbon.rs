//! Ribbon API functions
//!
//! JavaScript entry points for sampling a curve, laying out a name with
//! pre-measured widths, and drawing a card's name straight onto a canvas.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::helpers::{deserialize, deserialize_or_default, ribbon_error, serialize};
use crate::geometry::{sample_curve, CubicCurve, SamplerConfig, DEFAULT_SAMPLE_COUNT};
use crate::layout::{layout_ribbon, GlyphWidthTable, LayoutOptions, Ribbon, DEFAULT_MAX_CHARS};
use crate::render::canvas::apply_stroke_style;
use crate::render::{draw_placements, StrokeStyle};
use crate::style::StyleTable;
use crate::{wasm_info, wasm_log, wasm_warn};

/// Sample a cubic curve into its arc-length table
///
/// # Parameters
/// - `curve_js`: `{start, c1, c2, end}` (or `control1`/`control2`), each `{x, y}`
/// - `config_js`: optional `{sample_count, angle_mode}`
///
/// # Returns
/// `{samples: [...]}` with one entry per sample, `sample_count + 1` in total
#[wasm_bindgen(js_name = sampleCurve)]
pub fn sample_curve_js(curve_js: JsValue, config_js: JsValue) -> Result<JsValue, JsValue> {
    let curve: CubicCurve = deserialize(curve_js, "Invalid curve")?;
    let config: SamplerConfig = deserialize_or_default(config_js, "Invalid sampler config")?;

    let table = sample_curve(&curve, &config).map_err(|e| ribbon_error("sampleCurve failed", e))?;
    wasm_log!("sampleCurve: {} samples, length {:.2}", table.len(), table.total_length());

    serialize(&table, "Failed to serialize sample table")
}

/// Lay a string out along a ribbon using widths measured by JavaScript
///
/// # Parameters
/// - `ribbon_js`: `{curve, max_chars?}`
/// - `text`: the string to place
/// - `widths_js`: `{glyphs: {char: px}, text_widths: {string: px}, default_width}`
/// - `options_js`: optional `{sampler, padding}`
///
/// # Returns
/// The layout: placements, widths and curve length
#[wasm_bindgen(js_name = layoutRibbon)]
pub fn layout_ribbon_js(
    ribbon_js: JsValue,
    text: &str,
    widths_js: JsValue,
    options_js: JsValue,
) -> Result<JsValue, JsValue> {
    let ribbon: Ribbon = deserialize(ribbon_js, "Invalid ribbon")?;
    let widths: GlyphWidthTable = deserialize(widths_js, "Invalid glyph widths")?;
    let options: LayoutOptions = deserialize_or_default(options_js, "Invalid layout options")?;

    let layout = layout_ribbon(&ribbon, text, &widths, &options)
        .map_err(|e| ribbon_error("layoutRibbon failed", e))?;
    if layout.overflow {
        wasm_warn!("layoutRibbon: '{}' does not fit the curve", layout.text);
    }

    serialize(&layout, "Failed to serialize layout")
}

/// Draw a card's name along its ribbon on a canvas
///
/// Sets the font and pen on the canvas, looks the card type up in
/// `styles_js` (a card style table), lays the name out with canvas text
/// metrics, then strokes and fills every glyph.
///
/// # Returns
/// The layout that was drawn
#[wasm_bindgen(js_name = drawName)]
pub fn draw_name(
    name: &str,
    font: &str,
    stroke_color: &str,
    card_type: &str,
    canvas: HtmlCanvasElement,
    styles_js: JsValue,
) -> Result<JsValue, JsValue> {
    wasm_info!("drawName called: name='{}', card_type='{}'", name, card_type);

    let styles: StyleTable = deserialize(styles_js, "Invalid style table")?;
    let ribbon = styles
        .ribbon_for(card_type)
        .map_err(|e| ribbon_error("drawName failed", e))?;

    let mut ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let style = StrokeStyle {
        font: font.to_string(),
        stroke_color: stroke_color.to_string(),
        ..StrokeStyle::default()
    };
    apply_stroke_style(&ctx, &style);

    let layout = layout_ribbon(&ribbon, name, &ctx, &LayoutOptions::default())
        .map_err(|e| ribbon_error("drawName layout failed", e))?;
    if layout.overflow {
        wasm_warn!("drawName: '{}' does not fit the {} ribbon", layout.text, card_type);
    }

    draw_placements(&mut ctx, &layout.placements, &style)
        .map_err(|e| ribbon_error("drawName render failed", e))?;
    wasm_log!("drawName: drew {} glyphs", layout.placements.len());

    serialize(&layout, "Failed to serialize layout")
}

/// Export the ribbon defaults to JavaScript
#[wasm_bindgen(js_name = getRibbonDefaults)]
pub fn get_ribbon_defaults() -> JsValue {
    #[derive(serde::Serialize)]
    struct RibbonDefaults {
        sample_count: usize,
        max_chars: usize,
        sampler: SamplerConfig,
        stroke: StrokeStyle,
    }

    let defaults = RibbonDefaults {
        sample_count: DEFAULT_SAMPLE_COUNT,
        max_chars: DEFAULT_MAX_CHARS,
        sampler: SamplerConfig::default(),
        stroke: StrokeStyle::default(),
    };

    serde_wasm_bindgen::to_value(&defaults).unwrap_or(JsValue::NULL)
}
