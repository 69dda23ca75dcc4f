//! Host boundary messages for the Pong game
//!
//! Uses postcard for efficient binary serialization

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Host -> Game
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum HostInput {
    /// Start trigger (tap on the ball)
    Start,

    /// Horizontal drag delta for the human paddle, in field units
    Drag { dx: f32 },

    /// The playing surface was measured or resized
    Resize { width: f32, height: f32 },
}

// ============================================================================
// Game -> Host
// ============================================================================

/// Game phase as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    Initial,
    Playing,
    UserWon,
    ComputerWon,
}

impl Phase {
    /// Banner to overlay on the field, if any
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Phase::Initial => Some("Tap the ball to play"),
            Phase::Playing => None,
            Phase::UserWon => Some("You won"),
            Phase::ComputerWon => Some("You lose"),
        }
    }
}

/// Everything a renderer needs to draw one display frame
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub phase: Phase,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_diameter: f32,
    pub computer_x: f32,
    pub computer_y: f32,
    pub human_x: f32,
    pub human_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl HostInput {
    /// Serialize input to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize input from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
