/// Damped spring evaluated over normalized time.
///
/// The spring starts at 0.0 and settles on 1.0. Its natural frequency is chosen
/// so the oscillation envelope has decayed to 0.1% by the end of the
/// transition, which makes the curve fit whatever duration it is given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    /// Damping ratio (1.0 = critically damped, lower values overshoot)
    pub damping_ratio: f32,
    /// Initial velocity, in units of the total distance per duration
    pub initial_velocity: f32,
}

/// ln(1000): envelope decay needed to reach 0.1% of the initial displacement
const SETTLE_DECAY: f32 = 6.907_755;

impl SpringCurve {
    pub fn new(damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            damping_ratio,
            initial_velocity,
        }
    }

    /// Position of the spring at normalized time `t`.
    ///
    /// Ratios above 1.0 are treated as critically damped.
    pub fn evaluate(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let zeta = self.damping_ratio.clamp(0.01, 1.0);
        let omega = SETTLE_DECAY / zeta;
        let v0 = self.initial_velocity;

        // Displacement from the target starts at -1 with velocity v0
        let displacement = if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let b = (v0 - zeta * omega) / omega_d;
            (-zeta * omega * t).exp() * (-(omega_d * t).cos() + b * (omega_d * t).sin())
        } else {
            (-1.0 + (v0 - omega) * t) * (-omega * t).exp()
        };

        1.0 + displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(curve: &SpringCurve) -> Vec<f32> {
        (0..=100).map(|i| curve.evaluate(i as f32 / 100.0)).collect()
    }

    #[test]
    fn test_spring_settles_on_target() {
        let curve = SpringCurve::new(0.8, 0.7);
        let near_end = curve.evaluate(0.99);
        assert!(
            (near_end - 1.0).abs() < 0.01,
            "Spring should settle near target, got {}",
            near_end
        );
        assert_eq!(curve.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let curve = SpringCurve::new(0.4, 0.0);
        let max = sample(&curve).into_iter().fold(0.0f32, f32::max);
        assert!(max > 1.0, "Bouncy spring should overshoot, max was {}", max);
    }

    #[test]
    fn test_critically_damped_spring_does_not_overshoot() {
        let curve = SpringCurve::new(1.0, 0.0);
        let max = sample(&curve).into_iter().fold(0.0f32, f32::max);
        assert!(max <= 1.0 + 1e-4, "max was {}", max);
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(SpringCurve::new(0.8, 0.7).evaluate(0.0), 0.0);
    }
}
