use crate::consts::{FRAMES, PINS};
use crate::frame::{Frame, PinCount};

/// Partition the raw roll sequence into at most `FRAMES` frames.
///
/// A cursor walks the sequence: each of the first nine slots consumes one
/// roll for a strike, two otherwise. The tenth slot is attempted only if
/// unconsumed rolls remain, and takes a third roll only after a strike or
/// spare. A non-tenth frame caught mid-throw (first roll down, second not
/// thrown, not a strike) is not emitted: the list just comes up short,
/// which is how an in-progress game looks.
pub fn segment_frames(rolls: &[PinCount]) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(FRAMES);
    let mut cursor = 0usize;

    while frames.len() < FRAMES - 1 && cursor < rolls.len() {
        let first = rolls[cursor];
        match Frame::classify(first, rolls.get(cursor + 1).copied()) {
            Some(frame) => {
                cursor += if frame == Frame::Strike { 1 } else { 2 };
                frames.push(frame);
            }
            None => return frames,
        }
    }

    if cursor < rolls.len() {
        let first = rolls[cursor];
        let second = rolls.get(cursor + 1).copied();
        let reopened = first == PINS || second.map_or(false, |s| first + s == PINS);
        let third = if reopened {
            rolls.get(cursor + 2).copied()
        } else {
            None
        };
        frames.push(Frame::tenth(first, second, third));
    }

    frames
}
