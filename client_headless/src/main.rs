use anyhow::{Context, Result};
use clap::Parser;
use client_headless::{FixedRateClock, FrameRecorder, LocalGame, ScriptedInput};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Play Pong against the computer without a screen
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Field width in game units
    #[arg(long, default_value_t = 300.0)]
    width: f32,

    /// Field height in game units
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Seed for the serve direction
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Give up on a rally after this many frames
    #[arg(long, default_value_t = 100_000)]
    max_frames: usize,

    /// Number of rallies to play
    #[arg(long, default_value_t = 1)]
    rallies: usize,

    /// Furthest the scripted player drags per frame
    #[arg(long, default_value_t = 6.0)]
    drag_step: f32,

    /// Leave the human paddle alone
    #[arg(long)]
    idle: bool,

    /// Pace frames against the wall clock
    #[arg(long)]
    realtime: bool,

    /// Write every frame to this file
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut local =
        LocalGame::new(args.width, args.height, args.seed).context("invalid field size")?;
    let mut clock = FixedRateClock::new(0, args.frame_ms);
    if args.realtime {
        clock = clock.realtime();
    }
    let input = (!args.idle).then(|| ScriptedInput::new(args.drag_step));

    let mut recorder = match &args.record {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            Some(FrameRecorder::new(BufWriter::new(file)))
        }
        None => None,
    };

    let (mut user, mut computer) = (0usize, 0usize);
    for rally in 1..=args.rallies {
        let frames = local.run_rally(&mut clock, input, args.max_frames);

        let Some(last) = frames.last() else {
            continue;
        };
        match last.phase {
            proto::Phase::UserWon => user += 1,
            proto::Phase::ComputerWon => computer += 1,
            _ => {}
        }
        tracing::info!(rally, frames = frames.len(), phase = ?last.phase, "rally complete");
        if let Some(banner) = last.phase.banner() {
            println!("rally {rally}: {banner} ({} frames)", frames.len());
        }

        if let Some(recorder) = recorder.as_mut() {
            for frame in &frames {
                recorder.record(frame)?;
            }
        }
    }

    println!("you {user} - {computer} computer");

    if let Some(recorder) = recorder {
        let written = recorder.written();
        recorder.finish()?;
        tracing::info!(written, "recording saved");
    }
    Ok(())
}
