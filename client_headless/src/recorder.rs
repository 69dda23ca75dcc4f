//! Frame recordings: each frame is a little-endian `u32` length followed by
//! its postcard encoding.

use anyhow::{anyhow, bail, Context, Result};
use proto::Frame;
use std::io::Write;

pub struct FrameRecorder<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> FrameRecorder<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn record(&mut self, frame: &Frame) -> Result<()> {
        let bytes = frame
            .to_bytes()
            .map_err(|e| anyhow!("encoding frame {}: {e}", frame.tick))?;
        let len = u32::try_from(bytes.len()).context("frame too large")?;
        self.out.write_all(&len.to_le_bytes())?;
        self.out.write_all(&bytes)?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Decode a whole recording
pub fn read_frames(mut bytes: &[u8]) -> Result<Vec<Frame>> {
    let mut frames = Vec::new();
    while !bytes.is_empty() {
        if bytes.len() < 4 {
            bail!("truncated length prefix after {} frames", frames.len());
        }
        let (len, rest) = bytes.split_at(4);
        let len = u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize;
        if rest.len() < len {
            bail!("truncated frame {}", frames.len());
        }
        let (body, rest) = rest.split_at(len);
        let frame =
            Frame::from_bytes(body).map_err(|e| anyhow!("decoding frame {}: {e}", frames.len()))?;
        frames.push(frame);
        bytes = rest;
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::Phase;

    fn frame(tick: u64, phase: Phase) -> Frame {
        Frame {
            tick,
            phase,
            ball_x: 140.0,
            ball_y: 290.0 + tick as f32,
            ball_diameter: 20.0,
            computer_x: 110.0,
            computer_y: 0.0,
            human_x: 110.0,
            human_y: 580.0,
            paddle_width: 80.0,
            paddle_height: 20.0,
        }
    }

    #[test]
    fn test_recording_reads_back_in_order() {
        let mut recorder = FrameRecorder::new(Vec::new());
        recorder.record(&frame(0, Phase::Initial)).unwrap();
        recorder.record(&frame(1, Phase::Playing)).unwrap();
        recorder.record(&frame(2, Phase::UserWon)).unwrap();
        assert_eq!(recorder.written(), 3);

        let bytes = recorder.finish().unwrap();
        let frames = read_frames(&bytes).unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2], frame(2, Phase::UserWon));
    }

    #[test]
    fn test_truncated_recording_is_an_error() {
        let mut recorder = FrameRecorder::new(Vec::new());
        recorder.record(&frame(0, Phase::Initial)).unwrap();
        let bytes = recorder.finish().unwrap();

        assert!(read_frames(&bytes[..bytes.len() - 2]).is_err());
        assert!(read_frames(&bytes[..3]).is_err());
        assert!(read_frames(&[]).unwrap().is_empty());
    }
}
