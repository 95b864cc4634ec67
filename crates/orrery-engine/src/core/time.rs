/// Variable-step frame clock.
/// Turns raw frame deltas from the host into a delta the simulation can trust.
pub struct FrameClock {
    /// Optional upper bound on a single step, in seconds.
    max_dt: Option<f32>,
    /// Seconds simulated since start.
    elapsed: f64,
    /// Number of steps taken.
    frames: u64,
}

impl FrameClock {
    pub fn new(max_dt: Option<f32>) -> Self {
        Self {
            max_dt: max_dt.map(|max| max.max(0.0)),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Record one frame and return the delta to simulate.
    ///
    /// Negative and non-finite deltas become zero. With a `max_dt`, long
    /// stalls (a backgrounded tab) are capped so bodies don't leap across
    /// their orbits.
    pub fn tick(&mut self, frame_dt: f32) -> f32 {
        let dt = if frame_dt.is_finite() && frame_dt > 0.0 {
            self.max_dt.map_or(frame_dt, |max| frame_dt.min(max))
        } else {
            0.0
        };
        self.elapsed += dt as f64;
        self.frames += 1;
        dt
    }

    /// Seconds simulated since start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_normal_delta() {
        let mut clock = FrameClock::new(Some(0.25));
        let dt = clock.tick(1.0 / 60.0);
        assert!((dt - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn caps_long_stall() {
        let mut clock = FrameClock::new(Some(0.25));
        assert_eq!(clock.tick(3.0), 0.25);
    }

    #[test]
    fn uncapped_clock_passes_real_delta() {
        let mut clock = FrameClock::new(None);
        assert_eq!(clock.tick(3.0), 3.0);
        assert_eq!(clock.elapsed(), 3.0);
    }

    #[test]
    fn rejects_bad_deltas() {
        let mut clock = FrameClock::new(Some(0.25));
        assert_eq!(clock.tick(-0.5), 0.0);
        assert_eq!(clock.tick(f32::NAN), 0.0);
        assert_eq!(clock.tick(f32::INFINITY), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frames(), 3);
    }

    #[test]
    fn accumulates_elapsed() {
        let mut clock = FrameClock::new(None);
        clock.tick(0.5);
        clock.tick(0.25);
        assert!((clock.elapsed() - 0.75).abs() < 1e-9);
    }
}
