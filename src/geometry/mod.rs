//! Curve geometry
//!
//! Cubic Bézier evaluation and the arc-length sample table built from it.

pub mod bezier;
pub mod sampler;

pub use bezier::{CubicCurve, CurvePoint, Point};
pub use sampler::{sample_curve, AngleMode, CurveSample, SampleTable, SamplerConfig, DEFAULT_SAMPLE_COUNT};
