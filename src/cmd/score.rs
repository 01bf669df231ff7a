use crate::reports;
use clap::Args;
use rayon::prelude::*;
use tenpin::config::OutputOptions;
use tenpin::error::TenpinError;
use tenpin::loader;
use tenpin::scoring::{Game, GameSummary};
use tenpin::TpResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Comma- or whitespace-separated pin counts, e.g. "1,4,4,5,6,4".
    #[arg(short, long)]
    pub rolls: Option<String>,

    /// CSV batch file: a name field followed by one field per roll.
    #[arg(short, long)]
    pub file: Option<String>,

    /// Name shown for an inline game.
    #[arg(short, long, default_value = "Game 1")]
    pub name: String,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: ScoreArgs) -> TpResult<()> {
    let summaries: Vec<GameSummary> = match (&args.rolls, &args.file) {
        (Some(list), _) => {
            let rolls = loader::parse_roll_list(list)?;
            vec![Game::from_rolls(rolls).summary(&args.name)]
        }
        (None, Some(path)) => {
            let games = loader::load_games(path)?;
            info!("🎳 Scoring {} games", games.len());
            // Games are independent; the core itself stays single-threaded.
            games
                .par_iter()
                .map(|g| Game::from_rolls(g.rolls.clone()).summary(&g.name))
                .collect()
        }
        (None, None) => {
            return Err(TenpinError::Validation(
                "nothing to score: pass --rolls or --file".to_string(),
            ))
        }
    };

    reports::emit(&summaries, &args.output)
}
