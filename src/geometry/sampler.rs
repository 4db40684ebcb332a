//! Fixed-resolution curve sampling
//!
//! Walks `t` over `0, 1/N, ..., 1` and records position, tangent angle and
//! cumulative arc length at every step. Cubic Béziers have no closed-form
//! arc length, so the table is the arc-length parametrization the layout
//! engine searches.

use serde::{Deserialize, Serialize};

use super::bezier::{CubicCurve, Point};
use crate::error::{Result, RibbonError};

/// Number of intervals used when no explicit count is configured
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// How a sample's rotation is derived from its tangent
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum AngleMode {
    /// `atan(dy / dx)`: flips 180° wherever the curve runs right-to-left
    Legacy,
    /// `atan2(dy, dx)`
    #[default]
    QuadrantAware,
}

impl AngleMode {
    /// Rotation in radians for a tangent vector. A zero tangent gives 0.
    pub fn angle(self, tangent_x: f64, tangent_y: f64) -> f64 {
        if tangent_x == 0.0 && tangent_y == 0.0 {
            return 0.0;
        }
        match self {
            AngleMode::Legacy => (tangent_y / tangent_x).atan(),
            AngleMode::QuadrantAware => tangent_y.atan2(tangent_x),
        }
    }
}

/// Sampler settings
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct SamplerConfig {
    /// Number of intervals; the table holds `sample_count + 1` entries
    pub sample_count: usize,
    pub angle_mode: AngleMode,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            angle_mode: AngleMode::default(),
        }
    }
}

/// One entry of the sample table
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CurveSample {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub tangent_x: f64,
    pub tangent_y: f64,
    /// Distance from the previous sample (0 for the first)
    pub segment_dist: f64,
    /// Sum of `segment_dist` up to and including this sample
    pub cumulative_dist: f64,
    /// Rotation in radians
    pub angle: f64,
}

/// Samples in increasing-`t` order. Immutable once built.
///
/// Holds `sample_count + 1` entries: the `t = 1` endpoint is stored explicitly.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SampleTable {
    samples: Vec<CurveSample>,
}

impl SampleTable {
    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CurveSample> {
        self.samples.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// Approximate arc length of the whole curve
    pub fn total_length(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.cumulative_dist)
    }

    /// First index whose cumulative distance reaches `target`
    ///
    /// `cumulative_dist` is non-decreasing, so a binary search finds the
    /// same index a front-to-back scan would. Returns `None` if every
    /// sample falls short.
    pub fn first_reaching(&self, target: f64) -> Option<usize> {
        let index = self.samples.partition_point(|s| !(s.cumulative_dist >= target));
        (index < self.samples.len()).then_some(index)
    }
}

/// Build the sample table for `curve` with `sample_count` intervals
pub fn sample_curve(curve: &CubicCurve, config: &SamplerConfig) -> Result<SampleTable> {
    if config.sample_count == 0 {
        return Err(RibbonError::InvalidSampleCount(config.sample_count));
    }
    curve.validate()?;

    let n = config.sample_count;
    let mut samples: Vec<CurveSample> = Vec::with_capacity(n + 1);
    let mut cumulative = 0.0;

    for i in 0..=n {
        let point = curve.evaluate(i as f64 / n as f64);

        let segment_dist = match samples.last() {
            Some(prev) => Point::new(prev.x, prev.y).distance(Point::new(point.x, point.y)),
            None => 0.0,
        };
        cumulative += segment_dist;

        samples.push(CurveSample {
            t: point.t,
            x: point.x,
            y: point.y,
            tangent_x: point.tangent_x,
            tangent_y: point.tangent_y,
            segment_dist,
            cumulative_dist: cumulative,
            angle: config.angle_mode.angle(point.tangent_x, point.tangent_y),
        });
    }

    log::debug!(
        "sampled curve: {} samples, length {:.2}, mode {:?}",
        samples.len(),
        cumulative,
        config.angle_mode
    );

    Ok(SampleTable { samples })
}
