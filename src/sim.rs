use crate::consts::{FRAMES, MAX_ROLLS, PINS};
use crate::frame::PinCount;

/// Roll out one complete pseudo-random game.
///
/// Generation is frame-structured rather than roll-by-roll uniform, so the
/// result always respects frame boundaries: a second roll never downs more
/// pins than are standing, and the tenth reopens for its third roll only
/// after a strike or spare.
pub fn random_game(rng: &mut fastrand::Rng) -> Vec<PinCount> {
    let mut rolls = Vec::with_capacity(MAX_ROLLS);

    for _ in 0..FRAMES - 1 {
        let first = rng.u8(0..=PINS);
        rolls.push(first);
        if first < PINS {
            rolls.push(rng.u8(0..=PINS - first));
        }
    }

    let first = rng.u8(0..=PINS);
    rolls.push(first);
    let second = if first == PINS {
        rng.u8(0..=PINS)
    } else {
        rng.u8(0..=PINS - first)
    };
    rolls.push(second);

    if first == PINS || first + second == PINS {
        // Fresh rack for the third roll unless the second left pins up.
        let cap = if first == PINS && second < PINS {
            PINS - second
        } else {
            PINS
        };
        rolls.push(rng.u8(0..=cap));
    }

    rolls
}
