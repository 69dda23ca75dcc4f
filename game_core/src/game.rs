//! Game state machine
//!
//! Owns the ball and both paddles and advances them one frame at a time.
//! Scheduling belongs to the host: call [`Game::on_frame`] with each display
//! timestamp (or [`Game::tick`] with an elapsed time), or hand a
//! [`FrameClock`] to [`Game::run`].

use crate::systems::*;
use crate::{create_paddle, Ball, Events, FrameClock, GameConfig, GameRng, Outcome, Paddle, Side};
use glam::Vec2;
use hecs::{Entity, World};

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Before the first rally
    #[default]
    Initial,
    Playing,
    UserWon,
    ComputerWon,
}

impl From<Outcome> for GameState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::UserWon => GameState::UserWon,
            Outcome::ComputerWon => GameState::ComputerWon,
        }
    }
}

/// Entities are spawned once in [`Game::new`] and never despawned, so the
/// handles below stay valid for the life of the game.
pub struct Game {
    world: World,
    ball: Entity,
    computer: Entity,
    human: Entity,
    config: GameConfig,
    state: GameState,
    last_frame_ms: u64,
    events: Events,
    ticks: u64,
}

impl Game {
    pub fn new(config: GameConfig, rng: &mut GameRng) -> Self {
        let mut world = World::new();

        let ball = world.spawn((Ball::new(
            config.ball_diameter,
            config.ball_speed,
            &mut rng.0,
        ),));
        let [computer, human] = [Side::Computer, Side::Human].map(|side| {
            create_paddle(
                &mut world,
                side,
                Vec2::ZERO,
                config.paddle_width,
                config.paddle_height,
            )
        });
        setup_positions(&mut world, &config);

        Self {
            world,
            ball,
            computer,
            human,
            config,
            state: GameState::Initial,
            last_frame_ms: 0,
            events: Events::new(),
            ticks: 0,
        }
    }

    /// Start (or restart) a rally with `now_ms` as the frame baseline
    ///
    /// Calling this while already playing only resets the baseline.
    pub fn play(&mut self, now_ms: u64) {
        if self.state == GameState::Playing {
            tracing::debug!(now_ms, "play while already playing, resetting frame baseline");
        } else {
            tracing::info!(from = ?self.state, "rally started");
        }
        self.state = GameState::Playing;
        self.last_frame_ms = now_ms;
    }

    /// Advance to the display frame stamped `frame_ms`
    ///
    /// The elapsed time is measured from the previous frame (or from
    /// [`Game::play`]). A timestamp older than the previous one counts as no
    /// time passing.
    pub fn on_frame(&mut self, frame_ms: u64) -> Events {
        if self.state != GameState::Playing {
            return Events::new();
        }
        let elapsed = frame_ms.saturating_sub(self.last_frame_ms);
        let events = self.tick(elapsed as f32);
        self.last_frame_ms = frame_ms;
        events
    }

    /// One simulation step of `elapsed_ms`; does nothing unless playing
    pub fn tick(&mut self, elapsed_ms: f32) -> Events {
        if self.state != GameState::Playing {
            return Events::new();
        }
        self.events.clear();

        // 1. Move ball
        move_ball(&mut self.world, elapsed_ms);

        // 2. Computer paddle follows the ball
        track_ball(&mut self.world, &self.config, elapsed_ms);

        // 3. Paddles, then bottom and top edges
        if let Some(outcome) = check_collisions(&mut self.world, &self.config, &mut self.events) {
            self.finish(outcome);
        }

        // 4. Left and right edges, regardless of step 3
        check_side_walls(&mut self.world, &self.config, &mut self.events);

        self.ticks += 1;
        self.events
    }

    /// Run rallies frame by frame until the state leaves `Playing` or the
    /// clock runs out of frames
    ///
    /// The first timestamp from `clock` becomes the baseline; a clock with no
    /// frames at all leaves the game untouched. After every frame
    /// `after_frame` gets the game back: read positions for drawing, apply
    /// drag input, or call [`Game::set_state`] to interrupt.
    pub fn run<C, F>(&mut self, clock: &mut C, mut after_frame: F) -> GameState
    where
        C: FrameClock,
        F: FnMut(&mut Game),
    {
        let Some(start) = clock.next_frame() else {
            return self.state;
        };
        self.play(start);
        while self.state == GameState::Playing {
            let Some(frame_ms) = clock.next_frame() else {
                tracing::debug!(ticks = self.ticks, "frame clock exhausted");
                break;
            };
            self.on_frame(frame_ms);
            after_frame(self);
        }
        self.state
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = outcome.into();
        setup_positions(&mut self.world, &self.config);
        tracing::info!(state = ?self.state, ticks = self.ticks, "rally over");
    }

    /// Drag input for the human paddle. Not clamped to the field.
    pub fn move_human_paddle(&mut self, dx: f32) {
        move_paddle(&mut self.world, Side::Human, dx);
    }

    /// Overwrite the state; moving away from `Playing` stops [`Game::run`]
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Events from the latest tick
    pub fn last_events(&self) -> Events {
        self.events
    }

    /// Number of ticks simulated since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ball(&self) -> Ball {
        *self
            .world
            .get::<&Ball>(self.ball)
            .expect("ball lives as long as the game")
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Computer => self.computer,
            Side::Human => self.human,
        };
        *self
            .world
            .get::<&Paddle>(entity)
            .expect("paddles live as long as the game")
    }

    /// Put the ball somewhere with a given velocity, e.g. to replay a rally
    /// from a known position
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        let ball = self
            .world
            .query_one_mut::<&mut Ball>(self.ball)
            .expect("ball lives as long as the game");
        ball.pos = pos;
        ball.vel = vel;
    }
}
