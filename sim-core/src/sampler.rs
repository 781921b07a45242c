//! Periodically sampled per-axis coordinate histories.
//!
//! The spatial trail records every integration step; the coordinate
//! histories feeding time-series charts are decoupled from that
//! cadence and only record every Nth tick. Both use the same strict
//! FIFO overwrite discipline.

use crate::types::Axis;
use glam::DVec3;
use rand::Rng;

/// A fixed-length ring buffer of scalar samples for one axis.
///
/// Same overwrite semantics as [`crate::trail::TrailBuffer`]: always
/// exactly `len` entries, oldest evicted on push.
#[derive(Debug)]
pub struct CoordinateHistory {
    values: Vec<f64>,
    /// Slot that the next push overwrites.
    cursor: usize,
}

impl CoordinateHistory {
    /// Creates a history of `len` slots seeded with small
    /// pseudo-random values in `[0, 0.1)`.
    ///
    /// Seeding instead of zero-filling gives a newly created chart
    /// non-degenerate content before the first real sample arrives.
    ///
    /// ### Panics
    /// Panics if `len` is zero.
    pub fn seeded(len: usize, rng: &mut impl Rng) -> Self {
        assert!(len > 0, "history length must be non-zero");
        Self {
            values: (0..len).map(|_| rng.random_range(0.0..0.1)).collect(),
            cursor: 0,
        }
    }

    /// Number of samples this history retains.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends `v`, evicting the oldest sample.
    #[inline]
    pub fn push(&mut self, v: f64) {
        self.values[self.cursor] = v;
        self.cursor = (self.cursor + 1) % self.values.len();
    }

    /// Refills every slot with fresh seed values and rewinds the
    /// cursor. Length is unchanged.
    pub fn reseed(&mut self, rng: &mut impl Rng) {
        for v in &mut self.values {
            *v = rng.random_range(0.0..0.1);
        }
        self.cursor = 0;
    }

    /// Returns the samples in insertion order, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.values.len());
        out.extend_from_slice(&self.values[self.cursor..]);
        out.extend_from_slice(&self.values[..self.cursor]);
        out
    }
}

/// Samples the unscaled particle position into three per-axis
/// histories, once every `rate` ticks.
#[derive(Debug)]
pub struct CoordinateSampler {
    x: CoordinateHistory,
    y: CoordinateHistory,
    z: CoordinateHistory,
    /// Ticks seen since the last recorded sample.
    counter: u32,
    rate: u32,
}

impl CoordinateSampler {
    /// Creates a sampler with three freshly seeded histories.
    ///
    /// ### Parameters
    /// - `history_len` - Samples retained per axis.
    /// - `rate` - A sample is recorded every this many calls to
    ///   [`maybe_sample`](CoordinateSampler::maybe_sample).
    /// - `rng` - Source for the seed values.
    ///
    /// ### Panics
    /// Panics if `history_len` or `rate` is zero.
    pub fn new(history_len: usize, rate: u32, rng: &mut impl Rng) -> Self {
        assert!(rate > 0, "sampling rate must be non-zero");
        Self {
            x: CoordinateHistory::seeded(history_len, rng),
            y: CoordinateHistory::seeded(history_len, rng),
            z: CoordinateHistory::seeded(history_len, rng),
            counter: 0,
            rate,
        }
    }

    /// Counts one tick and records `state` if the sampling interval
    /// has elapsed.
    ///
    /// Increments the internal counter; once it reaches the configured
    /// rate it is zeroed and the unscaled coordinates are pushed into
    /// their axis histories. After `n` calls with rate `r`, exactly
    /// `n / r` samples have been recorded per axis.
    ///
    /// ### Returns
    /// `true` if a sample was recorded on this call.
    pub fn maybe_sample(&mut self, state: DVec3) -> bool {
        self.counter += 1;
        if self.counter < self.rate {
            return false;
        }
        self.counter = 0;
        self.x.push(state.x);
        self.y.push(state.y);
        self.z.push(state.z);
        true
    }

    /// Reseeds all three histories and zeroes the tick counter.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.x.reseed(rng);
        self.y.reseed(rng);
        self.z.reseed(rng);
        self.counter = 0;
    }

    /// Read-only snapshot of one axis history, oldest first.
    pub fn axis_history(&self, axis: Axis) -> Vec<f64> {
        match axis {
            Axis::X => self.x.snapshot(),
            Axis::Y => self.y.snapshot(),
            Axis::Z => self.z.snapshot(),
        }
    }

    /// Samples retained per axis.
    pub fn history_len(&self) -> usize {
        self.x.len()
    }

    /// Configured sampling interval in ticks.
    pub fn rate(&self) -> u32 {
        self.rate
    }
}
