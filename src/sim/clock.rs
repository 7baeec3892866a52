//! Frame clock
//!
//! Turns a host time source into sanitized per-frame deltas and a monotonic
//! elapsed counter. A stalled, paused or misbehaving host clock never leaks a
//! negative, NaN or huge delta into the simulation.

/// Where the clock reads wall time from (seconds since an arbitrary origin)
pub trait TimeSource {
    fn now_secs(&mut self) -> f64;
}

/// Hand-driven time, for tests and replays
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    now: f64,
}

impl ManualTimeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, secs: f64) {
        self.now = secs;
    }

    pub fn advance(&mut self, secs: f64) {
        self.now += secs;
    }
}

impl TimeSource for ManualTimeSource {
    fn now_secs(&mut self) -> f64 {
        self.now
    }
}

/// Per-frame delta and elapsed-time tracker
#[derive(Debug)]
pub struct Clock<T: TimeSource> {
    source: T,
    last: f64,
    /// Upper bound applied to a single delta (seconds)
    max_dt: f32,
    delta: f32,
    elapsed: f64,
}

impl<T: TimeSource> Clock<T> {
    pub fn new(mut source: T, max_dt: f32) -> Self {
        let last = source.now_secs();
        Self {
            source,
            last,
            max_dt,
            delta: 0.0,
            elapsed: 0.0,
        }
    }

    /// Advance to the current host time and return the sanitized delta
    pub fn tick(&mut self) -> f32 {
        let now = self.source.now_secs();
        let raw = now - self.last;
        self.last = now;
        self.delta = sanitize_delta(raw, self.max_dt);
        self.elapsed += f64::from(self.delta);
        self.delta
    }

    /// Delta returned by the most recent `tick`
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Sum of every sanitized delta since creation or the last reset
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.delta = 0.0;
        self.last = self.source.now_secs();
    }

    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }
}

/// Clamp a raw host delta into `[0, max_dt]`
///
/// Non-finite and negative values mean the environment handed us garbage;
/// they are logged and treated as a zero-length frame.
pub fn sanitize_delta(raw: f64, max_dt: f32) -> f32 {
    if !raw.is_finite() || raw < 0.0 {
        log::error!("Malformed frame delta {raw}, clamping to 0");
        return 0.0;
    }
    let max = f64::from(max_dt.max(0.0));
    if raw > max {
        log::warn!("Frame stalled for {raw:.3}s, clamping delta to {max:.3}s");
        return max as f32;
    }
    raw as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_reports_delta_and_elapsed() {
        let mut clock = Clock::new(ManualTimeSource::new(), 0.1);
        clock.source_mut().advance(0.016);
        let dt = clock.tick();
        assert!((dt - 0.016).abs() < 1e-6);
        clock.source_mut().advance(0.020);
        clock.tick();
        assert!((clock.elapsed() - 0.036).abs() < 1e-6);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = Clock::new(ManualTimeSource::new(), 0.1);
        clock.source_mut().advance(5.0);
        assert_eq!(clock.tick(), 0.1);
        assert!((clock.elapsed() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_clock_gives_zero() {
        let mut source = ManualTimeSource::new();
        source.set(10.0);
        let mut clock = Clock::new(source, 0.1);
        clock.source_mut().set(9.0);
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn test_nan_delta_is_zero() {
        assert_eq!(sanitize_delta(f64::NAN, 0.1), 0.0);
        assert_eq!(sanitize_delta(-0.5, 0.1), 0.0);
        assert_eq!(sanitize_delta(0.05, 0.1), 0.05);
    }

    #[test]
    fn test_infinite_delta_is_zero() {
        assert_eq!(sanitize_delta(f64::INFINITY, 0.1), 0.0);
        assert_eq!(sanitize_delta(f64::NEG_INFINITY, 0.1), 0.0);
        assert_eq!(sanitize_delta(f64::INFINITY, f32::INFINITY), 0.0);
    }

    #[test]
    fn test_reset_restarts_elapsed() {
        let mut clock = Clock::new(ManualTimeSource::new(), 0.1);
        clock.source_mut().advance(0.05);
        clock.tick();
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        clock.source_mut().advance(0.02);
        clock.tick();
        assert!((clock.elapsed() - 0.02).abs() < 1e-6);
    }
}
