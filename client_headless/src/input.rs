//! Scripted drag input standing in for a player's finger

use game_core::{Game, Side};
use proto::HostInput;

/// Drags the human paddle towards the ball, at most `max_step` per frame
#[derive(Debug, Clone, Copy)]
pub struct ScriptedInput {
    pub max_step: f32,
    pub deadzone: f32,
}

impl ScriptedInput {
    pub fn new(max_step: f32) -> Self {
        Self {
            max_step,
            deadzone: 0.5,
        }
    }

    /// Next drag for the current frame, if the paddle should move
    pub fn drag(&self, game: &Game) -> Option<HostInput> {
        let ball = game.ball();
        let paddle = game.paddle(Side::Human);

        let diff = ball.center().x - paddle.center_x();
        if diff.abs() <= self.deadzone {
            return None;
        }
        Some(HostInput::Drag {
            dx: diff.clamp(-self.max_step, self.max_step),
        })
    }
}
