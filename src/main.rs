use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an inline roll list or a CSV batch of games.
    Score(cmd::score::ScoreArgs),
    /// Play a game interactively, one prompted roll at a time.
    Play(cmd::play::PlayArgs),
    /// Roll out random games and score them.
    Simulate(cmd::simulate::SimulateArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args),
        Commands::Play(args) => cmd::play::run(args),
        Commands::Simulate(args) => cmd::simulate::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
