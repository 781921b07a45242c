//! The simulation engine facade driven by an external view loop.
//!
//! [`SimulationEngine`] owns every piece of mutable simulation state:
//! the current point, the registry and active-field selection, the
//! spatial trail, the coordinate histories and the elapsed-time clock.
//! It is constructed once and threaded explicitly through the driving
//! loop; there are no module-scope globals.
//!
//! The typical per-frame update is:
//! 1. [`SimulationEngine::tick`] — one RK4 step, one trail push, one
//!    conditional coordinate sample.
//! 2. The view reads [`SimulationEngine::trail_snapshot`] and
//!    [`SimulationEngine::coordinate_histories`] at the loop boundary.
//!
//! A wall-clock timer, independent of the tick loop, drives
//! [`SimulationEngine::clock_tick`].

use crate::clock::SimulationClock;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::field::VectorField;
use crate::integrator::rk4_step;
use crate::registry::AttractorRegistry;
use crate::sampler::CoordinateSampler;
use crate::trail::TrailBuffer;
use crate::types::Axis;
use glam::DVec3;
use rand::rngs::ThreadRng;

/// Summary row for attractor pickers.
#[derive(Clone, Copy, Debug)]
pub struct AttractorInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Owned per-axis history snapshots for charting, unscaled.
#[derive(Clone, Debug)]
pub struct CoordinateHistories {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

/// The attractor simulation engine.
///
/// Single-threaded and cooperatively driven: one external loop calls
/// [`tick`](SimulationEngine::tick) once per iteration and reads
/// snapshots between ticks. `&mut self` on every mutating method gives
/// the strict turn-taking the model requires without any locking.
pub struct SimulationEngine {
    cfg: SimConfig,
    registry: AttractorRegistry,
    /// Current particle position in the attractor's native space.
    state: DVec3,
    trail: TrailBuffer,
    sampler: CoordinateSampler,
    clock: SimulationClock,
    rng: ThreadRng,
}

impl SimulationEngine {
    /// Creates an engine with the standard attractor catalog, the
    /// configured initial state, a collapsed trail and freshly seeded
    /// coordinate histories.
    pub fn new(cfg: SimConfig) -> Self {
        let mut rng = rand::rng();
        let state = cfg.initial_state;
        let trail = TrailBuffer::new(cfg.trail_capacity, state);
        let sampler = CoordinateSampler::new(cfg.history_len, cfg.sampling_rate, &mut rng);

        Self {
            cfg,
            registry: AttractorRegistry::standard(),
            state,
            trail,
            sampler,
            clock: SimulationClock::new(),
            rng,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.cfg
    }

    /// Catalog entries in listing order.
    pub fn attractor_list(&self) -> Vec<AttractorInfo> {
        self.registry
            .iter()
            .map(|f| AttractorInfo {
                id: f.id,
                name: f.name,
                description: f.description,
            })
            .collect()
    }

    /// Metadata of the active field (color, scale, chart ranges,
    /// parameter bounds).
    pub fn active_attractor(&self) -> &VectorField {
        self.registry.active()
    }

    /// Switches the active attractor and performs the full simulation
    /// reset as part of the same call.
    ///
    /// Because switch and reset happen inside one `&mut self` borrow,
    /// no consumer can observe the old field's trail paired with the
    /// new field's metadata. On an unknown id nothing changes at all,
    /// not even the buffers.
    pub fn set_active_attractor(&mut self, id: &str) -> Result<(), SimError> {
        self.registry.set_active(id)?;
        self.reset();
        Ok(())
    }

    /// Current parameter values of the given attractor.
    pub fn parameters(&self, id: &str) -> Result<Vec<(&'static str, f64)>, SimError> {
        Ok(self.registry.get(id)?.kind.params())
    }

    /// Applies a batch of parameter updates and resets the simulation.
    ///
    /// No validation beyond what the values already are: out-of-range
    /// numbers are accepted and simply integrated, and names the
    /// attractor does not have are ignored. The reset collapses the
    /// trail so the new dynamics start from a clean point.
    pub fn apply_parameters<'a, I>(&mut self, id: &str, updates: I) -> Result<(), SimError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let field = self.registry.get_mut(id)?;
        for (name, value) in updates {
            field.kind.set_param(name, value);
        }
        self.reset();
        Ok(())
    }

    /// Parses a raw parameter edit as it arrives from a text input.
    ///
    /// A non-numeric string yields
    /// [`SimError::InvalidParameterValue`]; the caller drops the edit
    /// and the prior value stays in effect.
    pub fn parse_parameter(name: &str, raw: &str) -> Result<f64, SimError> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| SimError::InvalidParameterValue {
                name: name.to_string(),
                raw: raw.to_string(),
            })
    }

    /// Advances the simulation by one tick.
    ///
    /// Exactly one integration step, one trail push and one
    /// conditional coordinate sample, in that order.
    ///
    /// ### Returns
    /// The new unscaled state, for convenience.
    pub fn tick(&mut self) -> DVec3 {
        let kind = self.registry.active().kind;
        self.state = rk4_step(&kind, self.state, self.cfg.dt);
        self.trail.push(self.state);
        self.sampler.maybe_sample(self.state);
        self.state
    }

    /// Recent positions oldest first, scaled by the active field's
    /// display scale for spatial rendering.
    pub fn trail_snapshot(&self) -> Vec<DVec3> {
        let scale = self.registry.active().scale;
        self.trail
            .snapshot()
            .into_iter()
            .map(|p| p * scale)
            .collect()
    }

    /// Unscaled per-axis histories for charting, oldest first.
    pub fn coordinate_histories(&self) -> CoordinateHistories {
        CoordinateHistories {
            x: self.sampler.axis_history(Axis::X),
            y: self.sampler.axis_history(Axis::Y),
            z: self.sampler.axis_history(Axis::Z),
        }
    }

    /// Current unscaled position, for numeric readouts.
    pub fn current_position(&self) -> DVec3 {
        self.state
    }

    /// Counts one elapsed wall-clock second.
    ///
    /// Called by an external timer independent of the tick loop; does
    /// not touch any buffer.
    pub fn clock_tick(&mut self) {
        self.clock.tick();
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.clock.seconds()
    }

    /// Elapsed simulation time as `HH:MM:SS`.
    pub fn elapsed_formatted(&self) -> String {
        self.clock.formatted()
    }

    /// Returns the simulation to its starting conditions while keeping
    /// the active attractor and its current parameters.
    ///
    /// The state goes back to the configured initial point, the trail
    /// collapses onto it, the coordinate histories are reseeded and
    /// the sampler interval and clock restart from zero.
    pub fn reset(&mut self) {
        self.state = self.cfg.initial_state;
        self.trail.reset(self.state);
        self.sampler.reset(&mut self.rng);
        self.clock.reset();
    }
}
