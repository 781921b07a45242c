//! Fixed-step numerical integration of a vector field.

use crate::field::FieldKind;
use glam::DVec3;

/// Advances `state` by one step of size `dt` using classical
/// 4th-order Runge–Kutta.
///
/// The four stage evaluations are combined with the standard weights:
///
/// ```text
/// k1 = f(s)
/// k2 = f(s + k1 * dt/2)
/// k3 = f(s + k2 * dt/2)
/// k4 = f(s + k3 * dt)
/// s' = s + (k1 + 2*k2 + 2*k3 + k4) * dt/6
/// ```
///
/// This is a pure function: identical `field`, `state` and `dt`
/// produce bit-identical output. There is no error estimate and no
/// step-size adaptation. Parameters that drive the field to blow up
/// yield non-finite components, which are returned unmodified so that
/// divergence stays visible downstream.
///
/// ### Parameters
/// - `field` - The vector field to integrate against.
/// - `state` - Current position in unscaled space.
/// - `dt` - Fixed time step.
///
/// ### Returns
/// The position after one step.
pub fn rk4_step(field: &FieldKind, state: DVec3, dt: f64) -> DVec3 {
    let k1 = field.derivative(state);
    let k2 = field.derivative(state + k1 * (dt / 2.0));
    let k3 = field.derivative(state + k2 * (dt / 2.0));
    let k4 = field.derivative(state + k3 * dt);

    state + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{LorenzParams, ThomasParams};

    #[test]
    fn lorenz_single_step_matches_regression_fixture() {
        let kind = FieldKind::Lorenz(LorenzParams::default());
        let next = rk4_step(&kind, DVec3::new(0.1, 0.0, 0.0), 0.005);

        // Hand-derived from the RK4 weights at the default parameters.
        let expected = DVec3::new(
            0.09546113093055147,
            0.013637277616189318,
            3.31720870655063e-6,
        );

        assert!((next.x - expected.x).abs() < 1e-12, "x = {}", next.x);
        assert!((next.y - expected.y).abs() < 1e-12, "y = {}", next.y);
        assert!((next.z - expected.z).abs() < 1e-12, "z = {}", next.z);
    }

    #[test]
    fn step_is_deterministic_for_identical_inputs() {
        let kind = FieldKind::Thomas(ThomasParams::default());
        let state = DVec3::new(0.4, -0.2, 1.1);

        let a = rk4_step(&kind, state, 0.005);
        let b = rk4_step(&kind, state, 0.005);

        // Bit-identical, not merely close.
        assert_eq!(a.to_array(), b.to_array());
    }

    #[test]
    fn zero_dt_leaves_state_unchanged() {
        let kind = FieldKind::Lorenz(LorenzParams::default());
        let state = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(rk4_step(&kind, state, 0.0), state);
    }

    #[test]
    fn non_finite_state_propagates_unmodified() {
        let kind = FieldKind::Lorenz(LorenzParams::default());
        let next = rk4_step(&kind, DVec3::new(f64::NAN, 0.0, 0.0), 0.005);
        assert!(next.is_nan());
    }

    #[test]
    fn divergent_parameters_produce_non_finite_values_without_panicking() {
        let kind = FieldKind::Lorenz(LorenzParams {
            sigma: 1e300,
            rho: 1e300,
            beta: 8.0 / 3.0,
        });

        let mut state = DVec3::new(0.1, 0.0, 0.0);
        for _ in 0..8 {
            state = rk4_step(&kind, state, 0.005);
        }
        assert!(!state.is_finite());
    }
}
