use crate::reports;
use clap::Args;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use tenpin::config::OutputOptions;
use tenpin::consts::{FRAMES, PINS};
use tenpin::error::TenpinError;
use tenpin::frame::PinCount;
use tenpin::scoring::Game;
use tenpin::TpResult;

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Name shown on the board.
    #[arg(short, long, default_value = "You")]
    pub name: String,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// One answer from the prompt: a validated pin count, or end-of-input
/// (EOF, Ctrl-C, or an explicit "q"), after which the partial game is
/// scored as-is.
enum Prompted {
    Pins(PinCount),
    End,
}

/// Re-prompt until the line parses as a pin count within the standing
/// pins. The scoring core never sees an out-of-range roll.
fn next_roll(rl: &mut Editor<()>, prompt: &str, max: PinCount) -> TpResult<Prompted> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.eq_ignore_ascii_case("q") {
                    return Ok(Prompted::End);
                }
                match trimmed.parse::<PinCount>() {
                    Ok(pins) if pins <= max => return Ok(Prompted::Pins(pins)),
                    _ => println!("Invalid input! Enter a number between 0 and {}.", max),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return Ok(Prompted::End)
            }
            Err(e) => return Err(TenpinError::Input(e.to_string())),
        }
    }
}

pub fn run(args: PlayArgs) -> TpResult<()> {
    let mut rl = Editor::<()>::new().map_err(|e| TenpinError::Input(e.to_string()))?;
    let mut game = Game::new();

    println!("🎳 New game. Pins per roll; q or Ctrl-D stops early.");

    'frames: for frame_no in 1..=FRAMES {
        println!("-----> Frame {}", frame_no);

        let first = match next_roll(&mut rl, "Roll 1: ", PINS)? {
            Prompted::Pins(p) => p,
            Prompted::End => break 'frames,
        };
        game.roll(first);

        if frame_no < FRAMES {
            if first == PINS {
                continue;
            }
            match next_roll(&mut rl, "Roll 2: ", PINS - first)? {
                Prompted::Pins(p) => game.roll(p),
                Prompted::End => break 'frames,
            }
        } else {
            // Tenth frame: a strike refreshes the rack for the second
            // roll, and a strike or spare earns a third.
            let (prompt, cap) = if first == PINS {
                ("Extra roll: ", PINS)
            } else {
                ("Roll 2: ", PINS - first)
            };
            let second = match next_roll(&mut rl, prompt, cap)? {
                Prompted::Pins(p) => p,
                Prompted::End => break 'frames,
            };
            game.roll(second);

            if first == PINS || first + second == PINS {
                let cap = if first == PINS && second < PINS {
                    PINS - second
                } else {
                    PINS
                };
                match next_roll(&mut rl, "Extra roll: ", cap)? {
                    Prompted::Pins(p) => game.roll(p),
                    Prompted::End => break 'frames,
                }
            }
        }
    }

    let summary = game.summary(&args.name);
    reports::emit(&[summary], &args.output)
}
