//! Frame timing for hosts without a display

use game_core::FrameClock;
use std::time::Duration;

/// Frames at a fixed interval, optionally paced against the wall clock
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    next_ms: u64,
    interval_ms: u64,
    realtime: bool,
}

impl FixedRateClock {
    pub fn new(start_ms: u64, interval_ms: u64) -> Self {
        Self {
            next_ms: start_ms,
            interval_ms: interval_ms.max(1),
            realtime: false,
        }
    }

    /// Sleep for one interval before handing out each frame
    pub fn realtime(mut self) -> Self {
        self.realtime = true;
        self
    }
}

impl FrameClock for FixedRateClock {
    fn next_frame(&mut self) -> Option<u64> {
        if self.realtime {
            std::thread::sleep(Duration::from_millis(self.interval_ms));
        }
        let t = self.next_ms;
        self.next_ms += self.interval_ms;
        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rate_frames() {
        let mut clock = FixedRateClock::new(500, 16);
        assert_eq!(clock.next_frame(), Some(500));
        assert_eq!(clock.next_frame(), Some(516));
        assert_eq!(clock.next_frame(), Some(532));
    }

    #[test]
    fn test_zero_interval_still_advances() {
        let mut clock = FixedRateClock::new(0, 0);
        assert_eq!(clock.next_frame(), Some(0));
        assert_eq!(clock.next_frame(), Some(1));
    }
}
