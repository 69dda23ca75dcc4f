use crate::{Ball, GameConfig, Paddle, Side};
use hecs::World;

/// Put the ball in the middle of the field and both paddles on their edges
///
/// Velocities are left alone.
pub fn setup_positions(world: &mut World, config: &GameConfig) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = config.ball_spawn();
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos = match paddle.side {
            Side::Computer => config.computer_paddle_spawn(),
            Side::Human => config.human_paddle_spawn(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    const BASE_SPEED: Vec2 = Vec2::new(2.0, 1.0);

    #[test]
    fn test_setup_positions_centers_everything() {
        let config = GameConfig::new(300.0, 600.0).unwrap();
        let mut world = World::new();
        create_paddle(&mut world, Side::Computer, Vec2::new(-40.0, 7.0), 80.0, 20.0);
        create_paddle(&mut world, Side::Human, Vec2::new(260.0, 3.0), 80.0, 20.0);
        create_ball(&mut world, Vec2::new(5.0, 700.0), Vec2::new(-2.0, 1.0), 20.0, BASE_SPEED);

        setup_positions(&mut world, &config);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(140.0, 290.0));
            assert_eq!(ball.vel, Vec2::new(-2.0, 1.0), "Velocity survives a reset");
        }
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Computer => assert_eq!(paddle.pos, Vec2::new(110.0, 0.0)),
                Side::Human => assert_eq!(paddle.pos, Vec2::new(110.0, 580.0)),
            }
        }
    }
}
