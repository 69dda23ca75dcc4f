use crate::{Ball, Paddle, Side};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World, elapsed_ms: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.move_by(elapsed_ms);
    }
}

/// Slide one side's paddle horizontally
pub fn move_paddle(world: &mut World, side: Side, dx: f32) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.move_by(dx);
        }
    }
}
