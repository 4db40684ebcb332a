//! Error types for ribbon sampling and layout
//!
//! Only configuration problems are errors. Degenerate geometry (zero-length
//! curves, zero-width glyphs, text longer than the curve) is absorbed by the
//! layout engine and never surfaces here.

use thiserror::Error;

/// Top-level error type for the ribbon crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RibbonError {
    /// The sampler needs at least one interval
    #[error("Invalid sample count: {0} (must be at least 1)")]
    InvalidSampleCount(usize),

    /// A curve point contains NaN or an infinity
    #[error("Curve {which} point is not finite: ({x}, {y})")]
    NonFinitePoint { which: &'static str, x: f64, y: f64 },

    /// Padding or a measured width came back as NaN or infinite
    #[error("Non-finite {0} measurement")]
    NonFiniteMeasurement(&'static str),

    /// The drawing or measuring surface reported a failure
    #[error("Surface error: {0}")]
    Surface(String),

    /// No curve is configured for the requested card type
    #[error("Unknown card type: {0}")]
    UnknownCardType(String),

    /// The style table could not be parsed
    #[error("Style table parse error: {0}")]
    StyleParse(String),
}

pub type Result<T> = std::result::Result<T, RibbonError>;

impl From<serde_json::Error> for RibbonError {
    fn from(e: serde_json::Error) -> Self {
        RibbonError::StyleParse(e.to_string())
    }
}

impl From<serde_yaml::Error> for RibbonError {
    fn from(e: serde_yaml::Error) -> Self {
        RibbonError::StyleParse(e.to_string())
    }
}
