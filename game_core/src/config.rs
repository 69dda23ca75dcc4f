use crate::Params;
use glam::Vec2;
use thiserror::Error;

/// Rejected playing-field or entity dimensions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("paddle width {paddle_width} must be smaller than field width {field_width}")]
    PaddleTooWide { paddle_width: f32, field_width: f32 },

    #[error("ball diameter {ball_diameter} must be smaller than field height {field_height}")]
    BallTooTall {
        ball_diameter: f32,
        field_height: f32,
    },
}

/// Game configuration
///
/// A snapshot of the measured playing surface plus the entity dimensions.
/// It is never mutated once built: a new layout means a new `GameConfig`
/// and, with it, a new [`crate::Game`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_diameter: f32,
    pub ball_speed: Vec2, // x = max horizontal speed, y = vertical speed
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_diameter: Params::BALL_DIAMETER,
            ball_speed: Vec2::new(Params::BALL_SPEED_X, Params::BALL_SPEED_Y),
        }
    }
}

impl GameConfig {
    /// Config for a measured field with the default entity dimensions
    pub fn new(field_width: f32, field_height: f32) -> Result<Self, ConfigError> {
        Self {
            field_width,
            field_height,
            ..Self::default()
        }
        .validated()
    }

    /// Replace paddle and ball dimensions
    pub fn with_entities(
        self,
        paddle_width: f32,
        paddle_height: f32,
        ball_diameter: f32,
    ) -> Result<Self, ConfigError> {
        Self {
            paddle_width,
            paddle_height,
            ball_diameter,
            ..self
        }
        .validated()
    }

    /// Replace the ball's nominal speeds
    pub fn with_ball_speed(self, x: f32, y: f32) -> Result<Self, ConfigError> {
        Self {
            ball_speed: Vec2::new(x, y),
            ..self
        }
        .validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let dims = [
            ("field width", self.field_width),
            ("field height", self.field_height),
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
            ("ball diameter", self.ball_diameter),
            ("ball horizontal speed", self.ball_speed.x),
            ("ball vertical speed", self.ball_speed.y),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.paddle_width >= self.field_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                field_width: self.field_width,
            });
        }
        if self.ball_diameter >= self.field_height {
            return Err(ConfigError::BallTooTall {
                ball_diameter: self.ball_diameter,
                field_height: self.field_height,
            });
        }

        Ok(self)
    }

    /// Top-left of the ball when centered in the field
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.field_width / 2.0 - self.ball_diameter / 2.0,
            self.field_height / 2.0 - self.ball_diameter / 2.0,
        )
    }

    fn centered_paddle_x(&self) -> f32 {
        self.field_width / 2.0 - self.paddle_width / 2.0
    }

    /// Computer paddle sits on the top edge
    pub fn computer_paddle_spawn(&self) -> Vec2 {
        Vec2::new(self.centered_paddle_x(), 0.0)
    }

    /// Human paddle sits on the bottom edge
    pub fn human_paddle_spawn(&self) -> Vec2 {
        Vec2::new(
            self.centered_paddle_x(),
            self.field_height - self.paddle_height,
        )
    }

    /// Ball y at which its bottom edge meets the human paddle's top edge
    pub fn human_strike_line(&self) -> f32 {
        self.field_height - self.paddle_height - self.ball_diameter
    }

    /// Ball y at which its bottom edge meets the field's bottom edge
    pub fn bottom_exit_line(&self) -> f32 {
        self.field_height - self.ball_diameter
    }

    /// Ball x at which its right edge meets the field's right edge
    pub fn right_wall_line(&self) -> f32 {
        self.field_width - self.ball_diameter
    }
}
