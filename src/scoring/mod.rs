pub mod calculate;
pub mod segment;
pub mod types;

pub use self::types::{FrameScore, GameSummary, ScoreBoard};

use crate::frame::{Frame, PinCount};

/// A single game: owner of the append-only raw roll sequence.
///
/// Frames and scoreboard are derived views, recomputed in full from the
/// rolls on every request. Nothing is cached, so appending rolls and
/// re-scoring always agree; recomputation is O(rolls) and never fails on a
/// partial game.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Game {
    rolls: Vec<PinCount>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an already-validated roll sequence (see `loader` for the
    /// validation boundary).
    pub fn from_rolls(rolls: Vec<PinCount>) -> Self {
        Self { rolls }
    }

    /// Record one roll.
    pub fn roll(&mut self, pins: PinCount) {
        self.rolls.push(pins);
    }

    pub fn rolls(&self) -> &[PinCount] {
        &self.rolls
    }

    /// Partition the raw sequence into frames.
    pub fn frames(&self) -> Vec<Frame> {
        segment::segment_frames(&self.rolls)
    }

    /// Cumulative per-frame scores plus the running total.
    pub fn score(&self) -> ScoreBoard {
        calculate::score_frames(&self.frames(), &self.rolls)
    }

    /// Bundle rolls, frame labels, kinds, and scoreboard for rendering or
    /// JSON output.
    pub fn summary(&self, name: &str) -> GameSummary {
        let frames = self.frames();
        let board = calculate::score_frames(&frames, &self.rolls);
        GameSummary {
            name: name.to_string(),
            rolls: self.rolls.clone(),
            labels: frames.iter().map(|f| f.to_string()).collect(),
            kinds: frames.iter().map(Frame::kind).collect(),
            board,
        }
    }
}
