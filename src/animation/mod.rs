mod animatable;
mod spring;
mod timing;
mod transform;

pub use animatable::Animatable;
pub use spring::SpringCurve;
pub use timing::TimingFunction;
pub use transform::Transform;

use std::time::Duration;

/// Configuration for one entrance or exit transition
#[derive(Clone, Debug)]
pub struct Transition {
    /// Total duration of the transition
    pub duration: Duration,
    /// Easing curve used when no spring parameters are configured
    pub timing: TimingFunction,
    /// Spring damping ratio (1.0 = critically damped, lower values overshoot)
    pub spring_damping: Option<f32>,
    /// Initial spring velocity, in units of the total distance per duration
    pub spring_velocity: Option<f32>,
}

impl Transition {
    /// Default duration for entrance and exit transitions
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

    /// Create an eased transition
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self {
            duration,
            timing,
            spring_damping: None,
            spring_velocity: None,
        }
    }

    /// Create a spring-damped transition
    pub fn spring(duration: Duration, damping_ratio: f32, initial_velocity: f32) -> Self {
        Self::new(duration, TimingFunction::EaseInOut).spring_params(damping_ratio, initial_velocity)
    }

    /// Set the duration of the transition
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing curve
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Set both spring parameters at once
    pub fn spring_params(mut self, damping_ratio: f32, initial_velocity: f32) -> Self {
        self.spring_damping = Some(damping_ratio);
        self.spring_velocity = Some(initial_velocity);
        self
    }

    /// The curve this transition actually runs with.
    ///
    /// A spring curve is only used when both the damping ratio and the initial
    /// velocity are configured; otherwise the eased `timing` curve applies.
    pub fn curve(&self) -> TimingFunction {
        match (self.spring_damping, self.spring_velocity) {
            (Some(damping_ratio), Some(initial_velocity)) => {
                TimingFunction::Spring(SpringCurve::new(damping_ratio, initial_velocity))
            }
            _ => self.timing.clone(),
        }
    }

    pub fn is_spring(&self) -> bool {
        self.spring_damping.is_some() && self.spring_velocity.is_some()
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION, TimingFunction::EaseInOut)
    }
}
