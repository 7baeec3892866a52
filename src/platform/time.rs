//! Host time and frame pacing

use std::time::{Duration, Instant};

use crate::sim::TimeSource;

/// Wall-clock time source backed by `std::time::Instant`
#[derive(Debug, Clone)]
pub struct SystemTimeSource {
    startup: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            startup: Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now_secs(&mut self) -> f64 {
        self.startup.elapsed().as_secs_f64()
    }
}

/// Caps the loop at a fixed frame rate by sleeping off the remainder of
/// each frame
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    next_deadline: Option<Instant>,
}

impl FrameLimiter {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / frame_rate.max(1),
            next_deadline: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the current frame's time slot is used up
    ///
    /// A frame that overran its slot does not try to catch up; pacing
    /// restarts from now.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now + self.frame);
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.frame);
        } else {
            self.next_deadline = Some(now + self.frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(FrameLimiter::new(50).frame_duration(), Duration::from_millis(20));
        // Zero is treated as one frame per second
        assert_eq!(FrameLimiter::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_paces_frames() {
        let mut limiter = FrameLimiter::new(200);
        let start = Instant::now();
        for _ in 0..3 {
            limiter.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(14));
    }

    #[test]
    fn test_system_time_is_monotonic() {
        let mut source = SystemTimeSource::new();
        let a = source.now_secs();
        let b = source.now_secs();
        assert!(b >= a);
    }
}
