//! Cubic Bézier evaluation
//!
//! Position is built from two quadratic Béziers (over {start, c1, c2} and
//! {c1, c2, end}) blended linearly by `t`, which is the last step of the
//! de Casteljau construction. The tangent uses the closed-form derivative.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RibbonError};

/// A point in device pixel space
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A single cubic Bézier segment
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CubicCurve {
    pub start: Point,
    #[serde(alias = "c1")]
    pub control1: Point,
    #[serde(alias = "c2")]
    pub control2: Point,
    pub end: Point,
}

/// Position and first derivative of a curve at one parameter value
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub tangent_x: f64,
    pub tangent_y: f64,
}

impl CubicCurve {
    pub const fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Reject curves with NaN or infinite coordinates
    pub fn validate(&self) -> Result<()> {
        let points = [
            ("start", self.start),
            ("control1", self.control1),
            ("control2", self.control2),
            ("end", self.end),
        ];

        for (which, p) in points {
            if !p.is_finite() {
                return Err(RibbonError::NonFinitePoint { which, x: p.x, y: p.y });
            }
        }

        Ok(())
    }

    /// Evaluate position and tangent at `t`
    ///
    /// `t` outside [0, 1] extrapolates; callers only use the unit interval.
    pub fn evaluate(&self, t: f64) -> CurvePoint {
        let near = quadratic(t, self.start, self.control1, self.control2);
        let far = quadratic(t, self.control1, self.control2, self.end);
        let (tangent_x, tangent_y) = self.tangent(t);

        CurvePoint {
            t,
            x: (1.0 - t) * near.x + t * far.x,
            y: (1.0 - t) * near.y + t * far.y,
            tangent_x,
            tangent_y,
        }
    }

    /// First derivative (dx/dt, dy/dt) at `t`
    pub fn tangent(&self, t: f64) -> (f64, f64) {
        let mt = 1.0 - t;
        let a = 3.0 * mt * mt;
        let b = 6.0 * mt * t;
        let c = 3.0 * t * t;

        let dx = a * (self.control1.x - self.start.x)
            + b * (self.control2.x - self.control1.x)
            + c * (self.end.x - self.control2.x);
        let dy = a * (self.control1.y - self.start.y)
            + b * (self.control2.y - self.control1.y)
            + c * (self.end.y - self.control2.y);

        (dx, dy)
    }
}

/// Quadratic Bézier through `p0`, `p1`, `p2` at `t`
fn quadratic(t: f64, p0: Point, p1: Point, p2: Point) -> Point {
    let mt = 1.0 - t;
    Point {
        x: mt * mt * p0.x + 2.0 * mt * t * p1.x + t * t * p2.x,
        y: mt * mt * p0.y + 2.0 * mt * t * p1.y + t * t * p2.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s_curve() -> CubicCurve {
        CubicCurve::new(
            Point::new(0.0, 100.0),
            Point::new(50.0, 0.0),
            Point::new(150.0, 0.0),
            Point::new(200.0, 100.0),
        )
    }

    /// Closed-form Bernstein cubic, for comparison
    fn bernstein(curve: &CubicCurve, t: f64) -> Point {
        let mt = 1.0 - t;
        let b0 = mt * mt * mt;
        let b1 = 3.0 * mt * mt * t;
        let b2 = 3.0 * mt * t * t;
        let b3 = t * t * t;
        Point {
            x: b0 * curve.start.x + b1 * curve.control1.x + b2 * curve.control2.x + b3 * curve.end.x,
            y: b0 * curve.start.y + b1 * curve.control1.y + b2 * curve.control2.y + b3 * curve.end.y,
        }
    }

    #[test]
    fn test_endpoints() {
        let curve = s_curve();
        let p0 = curve.evaluate(0.0);
        let p1 = curve.evaluate(1.0);
        assert_eq!((p0.x, p0.y), (0.0, 100.0));
        assert_eq!((p1.x, p1.y), (200.0, 100.0));
    }

    #[test]
    fn test_matches_bernstein_form() {
        let curve = s_curve();
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let p = curve.evaluate(t);
            let expected = bernstein(&curve, t);
            assert!((p.x - expected.x).abs() < 1e-9, "x mismatch at t={}", t);
            assert!((p.y - expected.y).abs() < 1e-9, "y mismatch at t={}", t);
        }
    }

    #[test]
    fn test_tangent_at_ends_points_at_controls() {
        let curve = s_curve();
        // 3 * (c1 - start) and 3 * (end - c2)
        assert_eq!(curve.tangent(0.0), (150.0, -300.0));
        assert_eq!(curve.tangent(1.0), (150.0, 300.0));
    }

    #[test]
    fn test_symmetric_curve_midpoint() {
        let p = s_curve().evaluate(0.5);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 25.0).abs() < 1e-9);
        assert!(p.tangent_y.abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut curve = s_curve();
        curve.control2.y = f64::NAN;
        match curve.validate() {
            Err(RibbonError::NonFinitePoint { which, .. }) => assert_eq!(which, "control2"),
            other => panic!("expected NonFinitePoint, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_short_control_names() {
        let json = r#"{"start":{"x":0,"y":1},"c1":{"x":2,"y":3},"c2":{"x":4,"y":5},"end":{"x":6,"y":7}}"#;
        let curve: CubicCurve = serde_json::from_str(json).unwrap();
        assert_eq!(curve.control1, Point::new(2.0, 3.0));
        assert_eq!(curve.control2, Point::new(4.0, 5.0));
    }
}
