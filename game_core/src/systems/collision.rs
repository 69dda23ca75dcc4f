use crate::{Ball, Events, GameConfig, Outcome, Paddle, Side};
use hecs::World;

/// Horizontal velocity after striking `paddle`
///
/// The further the ball's center is from the paddle's center, the sharper
/// the return angle. The offset is normalised by half the paddle plus a full
/// ball diameter and the result is capped at the ball's max horizontal speed.
pub fn bounce_velocity_x(ball: &Ball, paddle: &Paddle) -> f32 {
    let offset = ball.center().x - paddle.center_x();
    let ratio = offset / (paddle.width / 2.0 + ball.diameter);
    let max = ball.base_speed.x;
    (ratio * max).clamp(-max, max)
}

fn overlaps_horizontally(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x + ball.diameter >= paddle.pos.x && ball.pos.x <= paddle.pos.x + paddle.width
}

fn hits_computer_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y <= paddle.pos.y + paddle.height
        && overlaps_horizontally(ball, paddle)
        && ball.vel.y < 0.0
}

fn hits_human_paddle(ball: &Ball, paddle: &Paddle, config: &GameConfig) -> bool {
    ball.pos.y >= config.human_strike_line()
        && overlaps_horizontally(ball, paddle)
        && ball.vel.y > 0.0
}

fn bounce(ball: &mut Ball, paddle: &Paddle) {
    ball.vel.y = -ball.vel.y;
    ball.vel.x = bounce_velocity_x(ball, paddle);
}

/// Check the ball against both paddles and the top/bottom edges
///
/// Exactly one of these fires per tick, in this order: computer paddle,
/// human paddle, bottom edge, top edge. Returns the outcome when the ball
/// has left the field.
pub fn check_collisions(
    world: &mut World,
    config: &GameConfig,
    events: &mut Events,
) -> Option<Outcome> {
    // First, collect ball and paddle data without holding borrows
    let ball = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };
    let mut ball = ball?;

    let mut computer = None;
    let mut human = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Computer => computer = Some(*paddle),
            Side::Human => human = Some(*paddle),
        }
    }

    let mut outcome = None;
    if let Some(paddle) = computer.filter(|p| hits_computer_paddle(&ball, p)) {
        bounce(&mut ball, &paddle);
        events.paddle_hit = Some(Side::Computer);
        tracing::debug!(vx = ball.vel.x, "ball returned by computer paddle");
    } else if let Some(paddle) = human.filter(|p| hits_human_paddle(&ball, p, config)) {
        bounce(&mut ball, &paddle);
        events.paddle_hit = Some(Side::Human);
        tracing::debug!(vx = ball.vel.x, "ball returned by human paddle");
    } else if ball.pos.y >= config.bottom_exit_line() && ball.vel.y > 0.0 {
        outcome = Some(Outcome::ComputerWon);
    } else if ball.pos.y <= 0.0 && ball.vel.y < 0.0 {
        outcome = Some(Outcome::UserWon);
    }
    events.outcome = outcome;

    // Update ball
    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
    outcome
}

/// Reflect the ball off the left and right edges
pub fn check_side_walls(world: &mut World, config: &GameConfig, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let at_right = ball.pos.x >= config.right_wall_line() && ball.vel.x > 0.0;
        let at_left = ball.pos.x <= 0.0 && ball.vel.x < 0.0;
        if at_right || at_left {
            ball.vel.x = -ball.vel.x;
            events.wall_bounce = true;
        }
    }
}
