use crate::frame::{FrameKind, PinCount};
use serde::{Deserialize, Serialize};

/// One settled frame on the board: base pins, lookahead bonus, and the
/// running total through this frame. Sums live in `u32`; a perfect game
/// tops out at 300 but nothing here truncates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    pub base: u32,
    pub bonus: u32,
    pub cumulative: u32,
}

/// Ordered cumulative scores, one entry per emitted frame, plus the total.
/// Fewer than ten entries means an in-progress game.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub entries: Vec<FrameScore>,
    pub total: u32,
}

impl ScoreBoard {
    /// The cumulative column alone, in frame order.
    pub fn cumulative(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.cumulative)
    }
}

/// Renderable/serializable bundle for one scored game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub name: String,
    pub rolls: Vec<PinCount>,
    pub labels: Vec<String>,
    pub kinds: Vec<FrameKind>,
    pub board: ScoreBoard,
}

impl GameSummary {
    /// Count of frames of the given kind (tenth counts as its own kind).
    pub fn tally(&self, kind: FrameKind) -> usize {
        self.kinds.iter().filter(|&&k| k == kind).count()
    }
}
