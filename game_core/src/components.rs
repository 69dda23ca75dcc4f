use glam::Vec2;
use rand::Rng;

/// Which player owns a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Computer, // top edge, AI-controlled
    Human,    // bottom edge, drag-controlled
}

/// Paddle component - a player's paddle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            side,
            pos,
            width,
            height,
        }
    }

    /// Slide horizontally. Not clamped to the field.
    pub fn move_by(&mut self, dx: f32) {
        self.pos.x += dx;
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// Ball component - the pong ball, positioned by the top-left of its bounding square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // units per millisecond
    pub diameter: f32,
    pub base_speed: Vec2, // x = max horizontal speed, y = vertical speed
}

impl Ball {
    /// Serve towards the computer paddle with a random horizontal component
    ///
    /// The horizontal velocity is a whole number drawn from
    /// `[-base_speed.x, base_speed.x)`; the position is left at the origin
    /// for the game to lay out.
    pub fn new<R: Rng + ?Sized>(diameter: f32, base_speed: Vec2, rng: &mut R) -> Self {
        let max = base_speed.x.trunc() as i32;
        let vx = if max > 0 { rng.gen_range(-max..max) } else { 0 };
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::new(vx as f32, -base_speed.y),
            diameter,
            base_speed,
        }
    }

    /// Linear motion over `elapsed_ms`. Bounds are the caller's concern.
    pub fn move_by(&mut self, elapsed_ms: f32) {
        self.pos += self.vel * elapsed_ms;
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.diameter / 2.0)
    }
}
