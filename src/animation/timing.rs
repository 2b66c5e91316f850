//! Timing functions (easing curves) for popup transitions.
//!
//! The named curves match the usual platform presets, expressed as cubic
//! bezier control points:
//!
//! - [`TimingFunction::Linear`] - constant speed
//! - [`TimingFunction::EaseIn`] - `(0.42, 0, 1, 1)`
//! - [`TimingFunction::EaseOut`] - `(0, 0, 0.58, 1)`
//! - [`TimingFunction::EaseInOut`] - `(0.42, 0, 0.58, 1)`
//!
//! [`TimingFunction::Spring`] evaluates a damped spring fitted to the
//! transition's duration and may overshoot 1.0.

use super::spring::SpringCurve;
use std::rc::Rc;

/// Timing function that maps normalized time to interpolation progress
#[derive(Clone)]
pub enum TimingFunction {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Cubic bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Damped spring fitted to the transition duration
    Spring(SpringCurve),
    Custom(Rc<dyn Fn(f32) -> f32>),
}

impl TimingFunction {
    /// Evaluate the curve at normalized time `t` (clamped to `0.0..=1.0`)
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
            TimingFunction::EaseOut => cubic_bezier(t, 0.0, 0.0, 0.58, 1.0),
            TimingFunction::EaseInOut => cubic_bezier(t, 0.42, 0.0, 0.58, 1.0),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            TimingFunction::Spring(curve) => curve.evaluate(t),
            TimingFunction::Custom(f) => f(t),
        }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + 'static,
    {
        TimingFunction::Custom(Rc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            TimingFunction::Spring(curve) => write!(f, "Spring({:?})", curve),
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// Solve the bezier for the parameter whose x equals `t`, then return its y.
/// Control x values are expected in `0.0..=1.0`.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    // Newton-Raphson, falling back to bisection when the slope flattens out
    let mut s = t;
    for _ in 0..8 {
        let err = bezier_axis(s, x1, x2) - t;
        if err.abs() < 1e-5 {
            return bezier_axis(s, y1, y2);
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = bezier_axis(s, x1, x2);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier_axis(s, y1, y2)
}

// One axis of a bezier anchored at 0 and 1
fn bezier_axis(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}
