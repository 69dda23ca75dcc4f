/// Source of display-refresh timestamps
///
/// Implementations block (or otherwise wait) until the next frame is due and
/// return its time in milliseconds. Timestamps must not decrease. `None`
/// means no more frames will come.
pub trait FrameClock {
    fn next_frame(&mut self) -> Option<u64>;
}

/// Replays a fixed list of timestamps, then runs dry
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    frames: Vec<u64>,
    next: usize,
}

impl ScriptedClock {
    pub fn new(frames: impl Into<Vec<u64>>) -> Self {
        Self {
            frames: frames.into(),
            next: 0,
        }
    }

    /// Frames at `start`, `start + interval`, ... (`count` of them)
    pub fn every(start: u64, interval: u64, count: usize) -> Self {
        Self::new(
            (0..count as u64)
                .map(|i| start + i * interval)
                .collect::<Vec<_>>(),
        )
    }

    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.next)
    }
}

impl FrameClock for ScriptedClock {
    fn next_frame(&mut self) -> Option<u64> {
        let t = self.frames.get(self.next).copied()?;
        self.next += 1;
        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_clock_replays_then_runs_dry() {
        let mut clock = ScriptedClock::new(vec![10, 26, 43]);
        assert_eq!(clock.remaining(), 3);
        assert_eq!(clock.next_frame(), Some(10));
        assert_eq!(clock.next_frame(), Some(26));
        assert_eq!(clock.next_frame(), Some(43));
        assert_eq!(clock.remaining(), 0);
        assert_eq!(clock.next_frame(), None);
        assert_eq!(clock.next_frame(), None);
    }

    #[test]
    fn test_scripted_clock_every() {
        let mut clock = ScriptedClock::every(1000, 16, 3);
        let frames: Vec<_> = (0..3).map(|_| clock.next_frame()).collect();
        assert_eq!(frames, vec![Some(1000), Some(1016), Some(1032)]);
    }

    #[test]
    fn test_empty_clock_has_no_frames() {
        let mut clock = ScriptedClock::new(Vec::new());
        assert_eq!(clock.next_frame(), None);
    }
}
