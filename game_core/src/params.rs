/// Game tuning parameters for Pong
///
/// Lengths are in field units, speeds in units per millisecond.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (used when the host has not measured a surface yet)
    pub const FIELD_WIDTH: f32 = 300.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;

    // Ball
    pub const BALL_DIAMETER: f32 = 20.0;
    pub const BALL_SPEED_X: f32 = 2.0; // max horizontal speed, also the serve range
    pub const BALL_SPEED_Y: f32 = 1.0; // constant vertical speed

    // The computer paddle tracks at this fraction of the ball's max horizontal speed
    pub const COMPUTER_SPEED_RATIO: f32 = 0.5;
}
