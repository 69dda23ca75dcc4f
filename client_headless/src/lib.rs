//! Headless host for the Pong game core
//!
//! Plays the parts a UI toolkit would: frame clock, drag input, layout
//! changes and a consumer for rendered frames.

pub mod clock;
pub mod input;
pub mod recorder;
pub mod simulation;

pub use clock::FixedRateClock;
pub use input::ScriptedInput;
pub use recorder::{read_frames, FrameRecorder};
pub use simulation::{frame_of, phase_of, LocalGame};
