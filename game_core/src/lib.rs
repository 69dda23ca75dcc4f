pub mod clock;
pub mod components;
pub mod config;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    side: Side,
    pos: glam::Vec2,
    width: f32,
    height: f32,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, pos, width, height),))
}

/// Helper to create the ball entity
///
/// `base_speed` is the nominal speed the bounce law scales against, normally
/// [`GameConfig::ball_speed`].
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    diameter: f32,
    base_speed: glam::Vec2,
) -> hecs::Entity {
    world.spawn((Ball {
        pos,
        vel,
        diameter,
        base_speed,
    },))
}
