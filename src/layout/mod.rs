//! Ribbon text layout
//!
//! Takes a sampled curve, a string and a text-measurement capability and
//! produces one placement per character.

pub mod engine;
pub mod measure;

pub use engine::{
    layout_ribbon, layout_text, letter_padding, truncate_chars, LayoutOptions, Placement, Ribbon,
    RibbonLayout, DEFAULT_MAX_CHARS,
};
pub use measure::{FnMeasurer, GlyphWidthTable, TextMeasurer};
