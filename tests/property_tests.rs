use proptest::prelude::*;
use tenpin::consts::{FRAMES, PERFECT_SCORE};
use tenpin::scoring::Game;
use tenpin::sim;

// --- STRATEGIES ---

/// Ten frames, every pair leaving pins standing: no strikes, no spares.
fn arb_open_game() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        (0u8..10).prop_flat_map(|first| (Just(first), 0u8..(10 - first))),
        FRAMES,
    )
    .prop_map(|pairs| pairs.into_iter().flat_map(|(a, b)| [a, b]).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn no_mark_games_total_their_pinfall(rolls in arb_open_game()) {
        let board = Game::from_rolls(rolls.clone()).score();

        prop_assert_eq!(board.entries.len(), FRAMES);
        prop_assert!(board.entries.iter().all(|e| e.bonus == 0));
        let pinfall: u32 = rolls.iter().map(|&r| r as u32).sum();
        prop_assert_eq!(board.total, pinfall);
    }

    #[test]
    fn any_prefix_of_a_legal_game_scores_sanely(seed in any::<u64>(), cut in 0usize..=21) {
        let full = sim::random_game(&mut fastrand::Rng::with_seed(seed));
        let rolls = full[..cut.min(full.len())].to_vec();
        let game = Game::from_rolls(rolls);

        // Idempotence: derived views reproduce exactly.
        prop_assert_eq!(game.frames(), game.frames());
        let board = game.score();
        prop_assert_eq!(&board, &game.score());

        prop_assert!(board.entries.len() <= FRAMES);
        prop_assert!(board.total <= PERFECT_SCORE);

        let mut prev = 0u32;
        for cumulative in board.cumulative() {
            prop_assert!(cumulative >= prev);
            prev = cumulative;
        }
        prop_assert_eq!(
            board.entries.last().map(|e| e.cumulative).unwrap_or(0),
            board.total
        );
    }
}
