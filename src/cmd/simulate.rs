use crate::reports;
use clap::Args;
use tenpin::config::OutputOptions;
use tenpin::scoring::{Game, GameSummary};
use tenpin::sim;
use tenpin::TpResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Number of games to roll out.
    #[arg(short, long, default_value_t = 1)]
    pub games: usize,

    /// Seed for reproducible rollouts.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: SimulateArgs) -> TpResult<()> {
    let mut rng = if let Some(s) = args.seed {
        fastrand::Rng::with_seed(s)
    } else {
        fastrand::Rng::new()
    };

    info!("🎲 Rolling out {} games", args.games);

    let summaries: Vec<GameSummary> = (0..args.games)
        .map(|i| {
            let rolls = sim::random_game(&mut rng);
            Game::from_rolls(rolls).summary(&format!("Sim {}", i + 1))
        })
        .collect();

    reports::emit(&summaries, &args.output)
}
