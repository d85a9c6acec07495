//! Easing curves for tween interpolation.
//!
//! The landing page uses a single shared cubic-bezier curve ([`EASE_OUT`])
//! so every reveal decelerates the same way. Curves are sampled by solving
//! the bezier's x-polynomial for the parameter, then evaluating y — the
//! same model CSS `cubic-bezier()` timing functions use.

use serde::{Deserialize, Serialize};

/// The page-wide deceleration curve: `cubic-bezier(0.22, 1, 0.36, 1)`.
pub const EASE_OUT: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

/// A unit-interval easing function.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Identity: progress in equals progress out.
    Linear,
    /// Cubic bezier with control points (x1, y1, x2, y2), anchored at
    /// (0,0) and (1,1). x components must lie in [0, 1].
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Map linear progress `t` in [0, 1] to eased progress.
    ///
    /// Input outside [0, 1] is clamped first; a tween never overshoots its
    /// endpoints on the time axis.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let u = solve_bezier_parameter(t, x1, x2);
                bezier_component(u, y1, y2)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        EASE_OUT
    }
}

/// One coordinate of the bezier at parameter `u`, for anchors 0 and 1.
fn bezier_component(u: f64, c1: f64, c2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * c1 + 3.0 * inv * u * u * c2 + u * u * u
}

fn bezier_component_derivative(u: f64, c1: f64, c2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * c1 + 6.0 * inv * u * (c2 - c1) + 3.0 * u * u * (1.0 - c2)
}

/// Find `u` such that the bezier x-component equals `x`.
///
/// Newton-Raphson with a bisection fallback when the derivative flattens.
fn solve_bezier_parameter(x: f64, x1: f64, x2: f64) -> f64 {
    const NEWTON_ITERATIONS: usize = 8;
    const EPSILON: f64 = 1e-6;

    let mut u = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier_component(u, x1, x2) - x;
        if error.abs() < EPSILON {
            return u;
        }
        let slope = bezier_component_derivative(u, x1, x2);
        if slope.abs() < 1e-8 {
            break;
        }
        u -= error / slope;
    }

    // Bisection: x(u) is monotone on [0, 1] for valid control points.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    u = x;
    while hi - lo > EPSILON {
        if bezier_component(u, x1, x2) < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        assert_eq!(EASE_OUT.apply(0.0), 0.0);
        assert_eq!(EASE_OUT.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.35), 0.35);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(EASE_OUT.apply(-0.5), 0.0);
        assert_eq!(EASE_OUT.apply(1.5), 1.0);
    }

    #[test]
    fn ease_out_decelerates() {
        // Front-loaded curve: the first half covers most of the distance.
        let half = EASE_OUT.apply(0.5);
        assert!(half > 0.8, "expected front-loaded progress, got {half}");

        // Monotone non-decreasing across the interval.
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = EASE_OUT.apply(i as f64 / 100.0);
            assert!(v >= prev - 1e-9);
            prev = v;
        }
    }

    #[test]
    fn bezier_solver_round_trips() {
        // For the identity-ish curve, eased output tracks input closely.
        let linearish = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!((linearish.apply(t) - t).abs() < 1e-3);
        }
    }
}
