use glam::DVec3;

/// A fixed-capacity ring buffer of recent particle positions.
///
/// The buffer holds exactly `capacity` entries from construction
/// onward; it never grows or shrinks. Each [`TrailBuffer::push`]
/// overwrites the oldest entry (strict FIFO), so after any number of
/// pushes the contents are always the most recent `capacity`
/// positions.
///
/// Internally a write cursor marks the slot holding the oldest entry,
/// which is the slot the next push overwrites. This is behaviorally
/// indistinguishable from the remove-head/append-tail formulation but
/// keeps the steady-state push cost O(1).
#[derive(Debug)]
pub struct TrailBuffer {
    /// Backing storage; `points[cursor]` is the oldest entry.
    points: Vec<DVec3>,
    /// Slot that the next push overwrites.
    cursor: usize,
}

impl TrailBuffer {
    /// Creates a buffer of `capacity` slots, every slot set to
    /// `initial`.
    ///
    /// A freshly created buffer therefore reads as a trail collapsed
    /// to a single point, exactly like one that was just
    /// [`reset`](TrailBuffer::reset).
    ///
    /// ### Parameters
    /// - `capacity` - Number of positions to retain.
    /// - `initial` - Position every slot starts out holding.
    ///
    /// ### Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, initial: DVec3) -> Self {
        assert!(capacity > 0, "trail capacity must be non-zero");
        Self {
            points: vec![initial; capacity],
            cursor: 0,
        }
    }

    /// Number of positions this buffer retains.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    /// Appends `p`, evicting the oldest entry.
    #[inline]
    pub fn push(&mut self, p: DVec3) {
        self.points[self.cursor] = p;
        self.cursor = (self.cursor + 1) % self.points.len();
    }

    /// Fills every slot with `state` and rewinds the cursor.
    ///
    /// Used on attractor switch or parameter update: the trail
    /// collapses to a single point and re-expands over subsequent
    /// pushes. Calling this twice in a row is equivalent to calling
    /// it once.
    pub fn reset(&mut self, state: DVec3) {
        for p in &mut self.points {
            *p = state;
        }
        self.cursor = 0;
    }

    /// Returns the current contents in insertion order, oldest first.
    ///
    /// The caller gets an owned copy; internal storage is never
    /// exposed mutably.
    pub fn snapshot(&self) -> Vec<DVec3> {
        let mut out = Vec::with_capacity(self.points.len());
        out.extend_from_slice(&self.points[self.cursor..]);
        out.extend_from_slice(&self.points[..self.cursor]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> DVec3 {
        DVec3::new(i as f64, 0.0, 0.0)
    }

    #[test]
    fn new_fills_every_slot_with_the_initial_point() {
        let buf = TrailBuffer::new(4, DVec3::new(0.1, 0.0, 0.0));

        assert_eq!(buf.capacity(), 4);
        let snap = buf.snapshot();
        assert_eq!(snap.len(), 4);
        assert!(snap.iter().all(|&q| q == DVec3::new(0.1, 0.0, 0.0)));
    }

    #[test]
    #[should_panic]
    fn new_panics_on_zero_capacity() {
        TrailBuffer::new(0, DVec3::ZERO);
    }

    #[test]
    fn snapshot_length_is_always_capacity() {
        let mut buf = TrailBuffer::new(5, DVec3::ZERO);
        for i in 0..17 {
            buf.push(p(i));
            assert_eq!(buf.snapshot().len(), 5);
        }
    }

    #[test]
    fn snapshot_holds_the_most_recent_pushes_in_push_order() {
        let mut buf = TrailBuffer::new(3, DVec3::ZERO);
        for i in 0..8 {
            buf.push(p(i));
        }

        // Pushes 5, 6, 7 survive, oldest first.
        assert_eq!(buf.snapshot(), vec![p(5), p(6), p(7)]);
    }

    #[test]
    fn partial_fill_keeps_initial_entries_before_pushed_ones() {
        let init = DVec3::new(9.0, 9.0, 9.0);
        let mut buf = TrailBuffer::new(4, init);
        buf.push(p(0));
        buf.push(p(1));

        assert_eq!(buf.snapshot(), vec![init, init, p(0), p(1)]);
    }

    #[test]
    fn reset_collapses_the_trail_to_a_single_point() {
        let mut buf = TrailBuffer::new(4, DVec3::ZERO);
        for i in 0..10 {
            buf.push(p(i));
        }

        let home = DVec3::new(0.1, 0.0, 0.0);
        buf.reset(home);

        let snap = buf.snapshot();
        assert_eq!(snap.len(), 4);
        assert!(snap.iter().all(|&q| q == home));
    }

    #[test]
    fn reset_twice_equals_reset_once() {
        let mut a = TrailBuffer::new(4, DVec3::ZERO);
        let mut b = TrailBuffer::new(4, DVec3::ZERO);
        for i in 0..6 {
            a.push(p(i));
            b.push(p(i));
        }

        let home = DVec3::new(0.1, 0.0, 0.0);
        a.reset(home);
        b.reset(home);
        b.reset(home);

        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn push_after_reset_behaves_like_a_fresh_buffer() {
        let mut buf = TrailBuffer::new(3, DVec3::ZERO);
        for i in 0..7 {
            buf.push(p(i));
        }

        let home = DVec3::new(0.1, 0.0, 0.0);
        buf.reset(home);
        buf.push(p(42));

        assert_eq!(buf.snapshot(), vec![home, home, p(42)]);
    }

    #[test]
    fn capacity_one_always_holds_the_latest_push() {
        let mut buf = TrailBuffer::new(1, DVec3::ZERO);
        for i in 0..5 {
            buf.push(p(i));
            assert_eq!(buf.snapshot(), vec![p(i)]);
        }
    }
}
