use tenpin::consts::{FRAMES, PERFECT_SCORE};
use tenpin::frame::Frame;
use tenpin::scoring::Game;

/// A full mixed game: opens, spares, strikes, and a spare-reopened tenth.
const DEMO_GAME: [u8; 19] = [1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6];

#[test]
fn no_mark_game_totals_the_pinfall() {
    let rolls = vec![3u8, 5, 2, 4, 0, 9, 8, 1, 7, 2, 3, 3, 4, 4, 5, 3, 2, 6, 1, 2];
    let game = Game::from_rolls(rolls.clone());
    let board = game.score();

    assert_eq!(board.entries.len(), FRAMES);
    assert!(board.entries.iter().all(|e| e.bonus == 0));
    let pinfall: u32 = rolls.iter().map(|&r| r as u32).sum();
    assert_eq!(board.total, pinfall);
}

#[test]
fn perfect_game_scores_300_in_steps_of_30() {
    let game = Game::from_rolls(vec![10; 12]);
    let board = game.score();

    assert_eq!(board.total, PERFECT_SCORE);
    let expected: Vec<u32> = (1..=FRAMES as u32).map(|i| i * 30).collect();
    assert_eq!(board.cumulative().collect::<Vec<_>>(), expected);
}

#[test]
fn spare_bonus_is_the_next_roll() {
    // 5,5 spare, a 3, then dead wood the rest of the way.
    let mut rolls = vec![5u8, 5, 3];
    rolls.extend(vec![0u8; 17]);
    let board = Game::from_rolls(rolls).score();

    assert_eq!(board.entries[0].cumulative, 13);
    assert_eq!(board.entries[1].cumulative, 16);
    assert_eq!(board.total, 16);
}

#[test]
fn demo_game_segments_and_scores_deterministically() {
    let game = Game::from_rolls(DEMO_GAME.to_vec());

    let frames = game.frames();
    assert_eq!(frames.len(), FRAMES);
    assert_eq!(frames[8], Frame::Strike);
    assert_eq!(
        frames[9],
        Frame::Tenth {
            first: 2,
            second: Some(8),
            third: Some(6)
        }
    );

    let board = game.score();
    assert_eq!(board.total, 133);

    // Re-running on the unchanged sequence reproduces everything exactly.
    assert_eq!(game.frames(), frames);
    assert_eq!(game.score(), board);
}

#[test]
fn single_non_strike_roll_scores_nothing() {
    let game = Game::from_rolls(vec![5]);
    assert!(game.frames().is_empty());

    let board = game.score();
    assert!(board.entries.is_empty());
    assert_eq!(board.total, 0);
}

#[test]
fn tenth_frame_strike_settles_internally() {
    let mut rolls = vec![0u8; 18];
    rolls.extend([10, 4, 3]);
    let board = Game::from_rolls(rolls).score();

    assert_eq!(board.entries[9].base, 17);
    assert_eq!(board.entries[9].bonus, 0);
    assert_eq!(board.total, 17);
}

#[test]
fn pending_strike_bonus_counts_what_exists() {
    // Nothing thrown after the strike yet.
    assert_eq!(Game::from_rolls(vec![10]).score().total, 10);

    // One bonus roll in; the open follow-up frame itself is not emitted.
    let board = Game::from_rolls(vec![10, 7]).score();
    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.total, 17);

    // Both bonus rolls in, follow-up frame complete.
    let board = Game::from_rolls(vec![10, 7, 2]).score();
    assert_eq!(board.entries.len(), 2);
    assert_eq!(board.total, 28);
}

#[test]
fn pending_spare_bonus_is_zero() {
    let board = Game::from_rolls(vec![6, 4]).score();
    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.total, 10);
}

#[test]
fn consecutive_strikes_chain_their_bonuses() {
    let board = Game::from_rolls(vec![10, 10, 9, 0]).score();
    assert_eq!(board.cumulative().collect::<Vec<_>>(), vec![29, 48, 57]);
}

#[test]
fn rolling_incrementally_matches_batch_scoring() {
    let mut game = Game::new();
    for &pins in DEMO_GAME.iter() {
        game.roll(pins);
    }
    assert_eq!(game.score(), Game::from_rolls(DEMO_GAME.to_vec()).score());
}
