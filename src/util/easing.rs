//! Easing functions for animation interpolation.
//!
//! Provides various easing curves for smooth camera motion. All functions
//! are pure and deterministic given the blend factor.

use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Symmetric cubic ease-in-out: `4t³` below the midpoint,
    /// `(t-1)(2t-2)² + 1` above it.
    CubicInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl Easing {
    /// Default easing for path playback: the symmetric cubic in-out.
    pub const DEFAULT: Self = Self::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let back = 2.0 * t - 2.0;
                    (t - 1.0) * back * back + 1.0
                }
            }
            Self::CubicHermite { c1, c2 } => {
                // f(t) = c0(1-t)³ + c1·3t(1-t)² + c2·3(1-t)t² + c3·t³
                // where c0=0.0, c3=1.0
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for Easing {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = Easing::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_in_out_endpoints() {
        let ease = Easing::CubicInOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert!((ease.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_midpoint() {
        // 4 * 0.5³ = 0.5: the curve passes exactly through the midpoint.
        let ease = Easing::CubicInOut;
        assert!((ease.evaluate(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_is_monotonic() {
        let ease = Easing::CubicInOut;
        let mut prev = 0.0;
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let value = ease.evaluate(t);
            assert!(value >= prev, "not monotonic at t={t}: {value} < {prev}");
            prev = value;
        }
    }

    #[test]
    fn test_input_clamping() {
        let linear = Easing::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let ease = Easing::CubicInOut;
        assert_eq!(ease.evaluate(-0.5), 0.0);
        assert!((ease.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = Easing::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.0), 0.0);
        assert_eq!(quad_in.evaluate(0.5), 0.25);
        assert_eq!(quad_in.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = Easing::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = Easing::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        assert_eq!(Easing::default(), Easing::CubicInOut);
    }

    #[test]
    fn test_serde_round_trip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Wrapper {
            easing: Easing,
        }

        let toml_str = "easing = \"cubic_in_out\"\n";
        let parsed: Wrapper = toml::from_str(toml_str).unwrap();
        assert_eq!(parsed.easing, Easing::CubicInOut);

        let hermite = Wrapper {
            easing: Easing::CubicHermite { c1: 0.33, c2: 1.0 },
        };
        let out = toml::to_string(&hermite).unwrap();
        let back: Wrapper = toml::from_str(&out).unwrap();
        assert_eq!(back, hermite);
    }
}
