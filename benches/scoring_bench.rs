use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tenpin::scoring::Game;
use tenpin::sim;

fn bench_scoring(c: &mut Criterion) {
    let perfect = Game::from_rolls(vec![10; 12]);
    let demo = Game::from_rolls(vec![
        1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6,
    ]);

    c.bench_function("score_perfect_game", |b| {
        b.iter(|| black_box(&perfect).score())
    });
    c.bench_function("score_demo_game", |b| b.iter(|| black_box(&demo).score()));
    c.bench_function("segment_demo_game", |b| {
        b.iter(|| black_box(&demo).frames())
    });
}

fn bench_simulated_batch(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(7);
    let games: Vec<Game> = (0..1000)
        .map(|_| Game::from_rolls(sim::random_game(&mut rng)))
        .collect();

    c.bench_function("score_1000_random_games", |b| {
        b.iter(|| {
            let total: u32 = games.iter().map(|g| black_box(g).score().total).sum();
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_scoring, bench_simulated_batch);
criterion_main!(benches);
