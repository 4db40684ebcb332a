//! Text measurement capability
//!
//! The layout engine never measures text itself. The host surface (a canvas
//! context in the browser, a width table in tests or when JavaScript
//! pre-measures) supplies widths through [`TextMeasurer`]. The same font
//! must be configured for every call made during one layout.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RibbonError};

/// Measures rendered pixel width of a string under the current font
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> Result<f64>;
}

/// Adapter so plain closures can be used as measurers
pub struct FnMeasurer<F>(pub F);

impl<F> TextMeasurer for FnMeasurer<F>
where
    F: Fn(&str) -> f64,
{
    fn measure(&self, text: &str) -> Result<f64> {
        Ok((self.0)(text))
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str) -> Result<f64> {
        (**self).measure(text)
    }
}

/// Widths measured ahead of time, e.g. by JavaScript before calling into WASM
///
/// Single characters come from `glyphs` (falling back to `default_width`).
/// Longer strings use `text_widths` when the exact string was measured,
/// otherwise the sum of their glyph widths.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GlyphWidthTable {
    pub glyphs: HashMap<char, f64>,
    pub text_widths: HashMap<String, f64>,
    pub default_width: f64,
}

impl GlyphWidthTable {
    pub fn new(default_width: f64) -> Self {
        Self {
            default_width,
            ..Self::default()
        }
    }

    pub fn with_glyph(mut self, ch: char, width: f64) -> Self {
        self.glyphs.insert(ch, width);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>, width: f64) -> Self {
        self.text_widths.insert(text.into(), width);
        self
    }

    fn glyph_width(&self, ch: char) -> f64 {
        self.glyphs.get(&ch).copied().unwrap_or(self.default_width)
    }
}

impl TextMeasurer for GlyphWidthTable {
    fn measure(&self, text: &str) -> Result<f64> {
        if let Some(width) = self.text_widths.get(text) {
            return Ok(*width);
        }
        Ok(text.chars().map(|ch| self.glyph_width(ch)).sum())
    }
}

/// Measure and reject NaN/infinite results
pub(crate) fn measure_finite<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    what: &'static str,
) -> Result<f64> {
    let width = measurer.measure(text)?;
    if !width.is_finite() {
        return Err(RibbonError::NonFiniteMeasurement(what));
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_prefers_whole_string_width() {
        let table = GlyphWidthTable::new(8.0)
            .with_glyph('A', 10.0)
            .with_glyph('B', 10.0)
            .with_text("AB", 22.0);

        assert_eq!(table.measure("AB").unwrap(), 22.0);
        assert_eq!(table.measure("BA").unwrap(), 20.0);
        assert_eq!(table.measure("A").unwrap(), 10.0);
        assert_eq!(table.measure("Z").unwrap(), 8.0);
        assert_eq!(table.measure("").unwrap(), 0.0);
    }

    #[test]
    fn test_closure_measurer() {
        let measurer = FnMeasurer(|s: &str| s.chars().count() as f64 * 3.0);
        assert_eq!(measurer.measure("abcd").unwrap(), 12.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let measurer = FnMeasurer(|_: &str| f64::NAN);
        assert_eq!(
            measure_finite(&measurer, "x", "glyph"),
            Err(RibbonError::NonFiniteMeasurement("glyph"))
        );
    }

    #[test]
    fn test_deserialize_partial_table() {
        let json = r#"{"glyphs":{"A":10.5},"default_width":7}"#;
        let table: GlyphWidthTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.glyphs.get(&'A'), Some(&10.5));
        assert!(table.text_widths.is_empty());
        assert_eq!(table.measure("AQ").unwrap(), 17.5);
    }
}
