use glam::DVec3;

/// Global configuration for the simulation engine.
///
/// `dt` is fixed for the whole run; the integrator never adapts it.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Fixed integration time step.
    pub dt: f64,
    /// Number of recent positions kept in the spatial trail.
    pub trail_capacity: usize,
    /// Number of samples kept per coordinate history.
    pub history_len: usize,
    /// A coordinate sample is taken every this many ticks.
    pub sampling_rate: u32,
    /// Starting point of the simulated particle, in unscaled space.
    pub initial_state: DVec3,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.005,
            trail_capacity: 5000,
            history_len: 50,
            sampling_rate: 2,
            initial_state: DVec3::new(0.1, 0.0, 0.0),
        }
    }
}
