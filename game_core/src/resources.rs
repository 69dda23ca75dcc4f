use crate::Side;

/// Random number generator handed to the game at construction
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// How a rally ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    UserWon,     // ball left through the top edge
    ComputerWon, // ball left through the bottom edge
}

/// Events that occurred during the latest tick
///
/// Renderers can poll this instead of diffing positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub paddle_hit: Option<Side>,
    pub wall_bounce: bool,
    pub outcome: Option<Outcome>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.paddle_hit = None;
        self.wall_bounce = false;
        self.outcome = None;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.paddle_hit = Some(Side::Human);
        events.wall_bounce = true;
        events.outcome = Some(Outcome::ComputerWon);
        assert!(!events.is_empty());

        events.clear();

        assert_eq!(events.paddle_hit, None);
        assert!(!events.wall_bounce);
        assert_eq!(events.outcome, None);
        assert!(events.is_empty());
    }

    #[test]
    fn test_rng_same_seed_same_stream() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        let xs: Vec<u32> = (0..8).map(|_| a.0.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.0.gen()).collect();
        assert_eq!(xs, ys);
    }
}
