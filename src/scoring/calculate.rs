use super::types::{FrameScore, ScoreBoard};
use crate::frame::{Frame, PinCount};

/// Compute cumulative scores for segmented frames.
///
/// Bonus lookahead is keyed to `roll_index`, a cursor into the raw
/// sequence that runs independently of the frame list: strike and spare
/// bonuses may reach into rolls owned by later frames, including the
/// tenth's extra rolls, so frames themselves are never consulted for them.
/// A bonus roll that has not been thrown yet contributes zero; an
/// in-progress game is a valid input, never an error.
pub fn score_frames(frames: &[Frame], rolls: &[PinCount]) -> ScoreBoard {
    let mut board = ScoreBoard::default();
    let mut roll_index = 0usize;
    let mut total = 0u32;

    for frame in frames {
        let base = frame.base_score();
        let bonus = match frame {
            Frame::Strike => strike_bonus(rolls, roll_index),
            Frame::Spare { .. } => spare_bonus(rolls, roll_index),
            // The tenth frame settles internally; its strikes and spares
            // never collect an external bonus.
            Frame::Normal { .. } | Frame::Tenth { .. } => 0,
        };

        total += base + bonus;
        board.entries.push(FrameScore {
            base,
            bonus,
            cumulative: total,
        });

        // The tenth steps by two like any non-strike frame. Nothing reads
        // the cursor after the last frame; the bookkeeping just stays
        // uniform.
        roll_index += match frame {
            Frame::Strike => 1,
            _ => 2,
        };
    }

    board.total = total;
    board
}

/// Sum of the two rolls after the strike, each zero if not yet thrown.
fn strike_bonus(rolls: &[PinCount], index: usize) -> u32 {
    let first = rolls.get(index + 1).copied().unwrap_or(0);
    let second = rolls.get(index + 2).copied().unwrap_or(0);
    first as u32 + second as u32
}

/// The single roll after the spare's frame, zero if not yet thrown.
fn spare_bonus(rolls: &[PinCount], index: usize) -> u32 {
    rolls.get(index + 2).copied().unwrap_or(0) as u32
}
