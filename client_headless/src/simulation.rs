use crate::input::ScriptedInput;
use game_core::{ConfigError, FrameClock, Game, GameConfig, GameRng, GameState, Side};
use proto::{Frame, HostInput, Phase};

/// A single-player game wired to host-style inputs
pub struct LocalGame {
    pub config: GameConfig,
    pub game: Game,
    pub rng: GameRng,
}

impl LocalGame {
    pub fn new(width: f32, height: f32, seed: u64) -> Result<Self, ConfigError> {
        let config = GameConfig::new(width, height)?;
        let mut rng = GameRng::new(seed);
        let game = Game::new(config, &mut rng);
        Ok(Self { config, game, rng })
    }

    /// Feed one host input. `now_ms` is the current frame time.
    ///
    /// A resize to a new size builds a fresh game, even mid-rally.
    pub fn apply(&mut self, input: HostInput, now_ms: u64) -> Result<(), ConfigError> {
        match input {
            HostInput::Start => self.game.play(now_ms),
            HostInput::Drag { dx } => self.game.move_human_paddle(dx),
            HostInput::Resize { width, height } => {
                let config = GameConfig::new(width, height)?;
                if config != self.config {
                    tracing::info!(width, height, "field resized, starting a new game");
                    self.config = config;
                    self.game = Game::new(config, &mut self.rng);
                }
            }
        }
        Ok(())
    }

    pub fn frame(&self) -> Frame {
        frame_of(&self.game)
    }

    /// Play one rally to its end, driving the human paddle from `input`
    ///
    /// Gives up after `max_frames` frames, leaving the game `Initial`. Stops
    /// early, still `Playing`, if the clock runs out of frames.
    /// Returns every rendered frame.
    pub fn run_rally<C: FrameClock>(
        &mut self,
        clock: &mut C,
        input: Option<ScriptedInput>,
        max_frames: usize,
    ) -> Vec<Frame> {
        let mut frames = vec![self.frame()];
        let state = self.game.run(clock, |game| {
            if let Some(HostInput::Drag { dx }) = input.and_then(|i| i.drag(game)) {
                game.move_human_paddle(dx);
            }
            frames.push(frame_of(game));
            if frames.len() > max_frames && game.state() == GameState::Playing {
                tracing::warn!(max_frames, "rally did not finish, stopping");
                game.set_state(GameState::Initial);
            }
        });
        tracing::debug!(?state, frames = frames.len(), "rally finished");
        frames
    }
}

pub fn phase_of(state: GameState) -> Phase {
    match state {
        GameState::Initial => Phase::Initial,
        GameState::Playing => Phase::Playing,
        GameState::UserWon => Phase::UserWon,
        GameState::ComputerWon => Phase::ComputerWon,
    }
}

/// Snapshot of everything the renderer draws
pub fn frame_of(game: &Game) -> Frame {
    let config = game.config();
    let ball = game.ball();
    let computer = game.paddle(Side::Computer);
    let human = game.paddle(Side::Human);

    Frame {
        tick: game.ticks(),
        phase: phase_of(game.state()),
        ball_x: ball.pos.x,
        ball_y: ball.pos.y,
        ball_diameter: config.ball_diameter,
        computer_x: computer.pos.x,
        computer_y: computer.pos.y,
        human_x: human.pos.x,
        human_y: human.pos.y,
        paddle_width: config.paddle_width,
        paddle_height: config.paddle_height,
    }
}
