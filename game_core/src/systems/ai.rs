use crate::{Ball, GameConfig, Paddle, Params, Side};
use hecs::World;

/// Fixed tracking speed of the computer paddle
pub fn computer_speed(config: &GameConfig) -> f32 {
    config.ball_speed.x * Params::COMPUTER_SPEED_RATIO
}

/// Bang-bang tracking: step the computer paddle towards the ball
///
/// Compares the ball's left edge with the paddle's center. There is no
/// prediction and no dead zone, so the paddle jitters when aligned.
pub fn track_ball(world: &mut World, config: &GameConfig, elapsed_ms: f32) {
    let ball_x = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.x)
    };
    let Some(ball_x) = ball_x else {
        return;
    };

    let speed = computer_speed(config);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Computer {
            continue;
        }
        let dir = if ball_x > paddle.center_x() {
            1.0
        } else {
            -1.0
        };
        paddle.move_by(dir * speed * elapsed_ms);
    }
}
