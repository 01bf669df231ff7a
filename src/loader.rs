use crate::consts::{FRAMES, PINS};
use crate::error::{TenpinError, TpResult};
use crate::frame::PinCount;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One row of a batch file: a named roll sequence.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub name: String,
    pub rolls: Vec<PinCount>,
}

/// Parse a comma- or whitespace-separated roll list, e.g. "1,4,4,5" or
/// "10 3 7".
pub fn parse_roll_list(list: &str) -> TpResult<Vec<PinCount>> {
    let mut rolls = Vec::new();
    for token in list
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let pins: PinCount = token
            .parse()
            .map_err(|_| TenpinError::Validation(format!("'{}' is not a pin count", token)))?;
        rolls.push(pins);
    }
    validate_sequence(&rolls)?;
    Ok(rolls)
}

/// Load a batch file of games. Headerless CSV, flexible row length: first
/// field the game name, every following field one roll's pin count.
pub fn load_games<P: AsRef<Path>>(path: P) -> TpResult<Vec<GameRecord>> {
    let file = File::open(&path)?;
    let games = read_games(file)?;
    info!(
        "📂 Loaded {} games from {}",
        games.len(),
        path.as_ref().display()
    );
    Ok(games)
}

/// CSV parsing over any reader, so tests can feed in-memory data.
pub fn read_games<R: Read>(reader: R) -> TpResult<Vec<GameRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut games = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        let mut fields = record.iter().filter(|f| !f.is_empty());
        let name = match fields.next() {
            Some(n) => n.to_string(),
            None => continue,
        };

        let mut rolls = Vec::new();
        for field in fields {
            let pins: PinCount = field.parse().map_err(|_| {
                TenpinError::Validation(format!(
                    "game '{}' (record {}): '{}' is not a pin count",
                    name,
                    line + 1,
                    field
                ))
            })?;
            rolls.push(pins);
        }
        validate_sequence(&rolls)
            .map_err(|e| TenpinError::Validation(format!("game '{}': {}", name, e)))?;

        debug!("Game '{}': {} rolls", name, rolls.len());
        games.push(GameRecord { name, rolls });
    }
    Ok(games)
}

/// Reject sequences the scoring core is not defined for: rolls outside
/// `0..=PINS`, a non-tenth frame pair downing more than `PINS`, or rolls
/// left over after a structurally complete tenth frame. Incomplete
/// sequences are legal; scoring handles them as in-progress games.
pub fn validate_sequence(rolls: &[PinCount]) -> TpResult<()> {
    if let Some(&bad) = rolls.iter().find(|&&r| r > PINS) {
        return Err(TenpinError::Validation(format!(
            "roll of {} exceeds {} pins",
            bad, PINS
        )));
    }

    // Walk the first nine frames the way the segmenter does.
    let mut cursor = 0usize;
    let mut slot = 0usize;
    while slot < FRAMES - 1 && cursor < rolls.len() {
        let first = rolls[cursor];
        if first == PINS {
            cursor += 1;
            slot += 1;
            continue;
        }
        match rolls.get(cursor + 1) {
            Some(&second) if first + second > PINS => {
                return Err(TenpinError::Validation(format!(
                    "frame {}: rolls {} and {} down more than {} pins",
                    slot + 1,
                    first,
                    second,
                    PINS
                )));
            }
            Some(_) => {
                cursor += 2;
                slot += 1;
            }
            // Open frame mid-throw: a legal partial game.
            None => return Ok(()),
        }
    }

    let remaining = rolls.len() - cursor;
    if remaining == 0 {
        return Ok(());
    }
    let first = rolls[cursor];
    let second = rolls.get(cursor + 1).copied();
    let reopened = first == PINS || second.map_or(false, |s| first + s == PINS);
    let allowed = if reopened { 3 } else { 2 };
    if remaining > allowed {
        return Err(TenpinError::Validation(format!(
            "{} rolls recorded after frame nine; the tenth frame takes at most {}",
            remaining, allowed
        )));
    }
    Ok(())
}
