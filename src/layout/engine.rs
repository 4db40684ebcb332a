//! Arc-length text layout
//!
//! Centers a string on a sampled curve and walks the sample table forward
//! glyph by glyph. Each glyph sits at a sample's position, rotated by that
//! sample's tangent angle; the next glyph goes to the first later sample at
//! least one advance (glyph width + padding) further along the curve.

use serde::{Deserialize, Serialize};

use super::measure::{measure_finite, TextMeasurer};
use crate::error::{Result, RibbonError};
use crate::geometry::{sample_curve, CubicCurve, SampleTable, SamplerConfig};

/// Character cutoff used when a style does not specify one
pub const DEFAULT_MAX_CHARS: usize = 50;

/// Padding is this fraction of the width of a space
const SPACE_PADDING_DIVISOR: f64 = 8.0;

/// A curve plus the maximum number of characters drawn along it
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Ribbon {
    pub curve: CubicCurve,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

impl Ribbon {
    pub fn new(curve: CubicCurve) -> Self {
        Self {
            curve,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}

/// Layout tuning
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct LayoutOptions {
    pub sampler: SamplerConfig,
    /// Inter-glyph padding in pixels; derived from the font when absent
    pub padding: Option<f64>,
}

/// Resolved position and rotation of one character
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub character: char,
    pub x: f64,
    pub y: f64,
    /// Rotation in radians
    pub angle: f64,
    /// Sample the placement was taken from
    pub sample_index: usize,
}

/// Output of one layout call
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RibbonLayout {
    /// The truncated text actually laid out
    pub text: String,
    pub placements: Vec<Placement>,
    pub padding: f64,
    /// Whole-string width, rounded to whole pixels
    pub pixel_width: f64,
    /// `pixel_width` plus padding between glyphs
    pub total_length: f64,
    pub curve_length: f64,
    /// Set when the start or a later glyph had to be clamped to the end of the curve
    pub overflow: bool,
}

impl RibbonLayout {
    fn empty(padding: f64, curve_length: f64) -> Self {
        Self {
            text: String::new(),
            placements: Vec::new(),
            padding,
            pixel_width: 0.0,
            total_length: 0.0,
            curve_length,
            overflow: false,
        }
    }
}

/// First `max_chars` characters of `text`, cut without regard to words
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Default inter-glyph padding: an eighth of a space under the current font
pub fn letter_padding<M: TextMeasurer + ?Sized>(measurer: &M) -> Result<f64> {
    Ok(measure_finite(measurer, " ", "space")? / SPACE_PADDING_DIVISOR)
}

/// Lay `text` out along an already-sampled curve
///
/// Placements come back in string order; `sample_index` never decreases
/// from one placement to the next.
pub fn layout_text<M: TextMeasurer + ?Sized>(
    table: &SampleTable,
    text: &str,
    max_chars: usize,
    measurer: &M,
    padding: f64,
) -> Result<RibbonLayout> {
    if !padding.is_finite() {
        return Err(RibbonError::NonFiniteMeasurement("padding"));
    }

    let curve_length = table.total_length();
    let text = truncate_chars(text, max_chars);
    if text.is_empty() || table.is_empty() {
        return Ok(RibbonLayout::empty(padding, curve_length));
    }

    let char_count = text.chars().count();
    let total_padding = (char_count - 1) as f64 * padding;
    let pixel_width = measure_finite(measurer, text, "text")?.round();
    let total_length = pixel_width + total_padding;
    let center_target = curve_length / 2.0 - total_length / 2.0;

    let mut overflow = false;
    let mut p = match table.first_reaching(center_target) {
        Some(index) => index,
        None => {
            log::warn!(
                "no sample reaches centering target {:.2} (curve length {:.2}); starting at the end",
                center_target,
                curve_length
            );
            overflow = true;
            table.last_index()
        }
    };

    log::debug!(
        "layout '{}': width {} + padding {:.2} on curve {:.2}, start index {}",
        text,
        pixel_width,
        total_padding,
        curve_length,
        p
    );

    let samples = table.samples();
    let mut placements = Vec::with_capacity(char_count);
    let mut buf = [0u8; 4];

    for (i, character) in text.chars().enumerate() {
        let sample = &samples[p];
        placements.push(Placement {
            character,
            x: sample.x,
            y: sample.y,
            angle: sample.angle,
            sample_index: p,
        });

        // Nothing follows the last glyph, so running out of curve after it is fine
        if i + 1 == char_count {
            break;
        }

        let advance = measure_finite(measurer, character.encode_utf8(&mut buf), "glyph")? + padding;
        match advance_index(table, p, advance) {
            Some(next) => p = next,
            None => {
                if !overflow {
                    log::warn!("text '{}' runs past the end of the curve after '{}'", text, character);
                }
                overflow = true;
                p = table.last_index();
            }
        }
    }

    Ok(RibbonLayout {
        text: text.to_string(),
        placements,
        padding,
        pixel_width,
        total_length,
        curve_length,
        overflow,
    })
}

/// First sample after `from` that is at least `advance` further along
///
/// The distance is re-accumulated from zero for every call, summing the
/// segment lengths of the samples strictly after `from`.
fn advance_index(table: &SampleTable, from: usize, advance: f64) -> Option<usize> {
    let mut travelled = 0.0;
    for (offset, sample) in table.samples().iter().enumerate().skip(from + 1) {
        travelled += sample.segment_dist;
        if travelled >= advance {
            return Some(offset);
        }
    }
    None
}

/// Sample the ribbon's curve and lay `text` out along it
pub fn layout_ribbon<M: TextMeasurer + ?Sized>(
    ribbon: &Ribbon,
    text: &str,
    measurer: &M,
    options: &LayoutOptions,
) -> Result<RibbonLayout> {
    let table = sample_curve(&ribbon.curve, &options.sampler)?;
    let padding = match options.padding {
        Some(padding) => padding,
        None => letter_padding(measurer)?,
    };
    layout_text(&table, text, ribbon.max_chars, measurer, padding)
}
