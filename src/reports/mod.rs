use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;
use tenpin::config::OutputOptions;
use tenpin::consts::FRAMES;
use tenpin::frame::FrameKind;
use tenpin::scoring::GameSummary;
use tenpin::TpResult;

/// Print summaries per the output switches: tables by default, JSON when
/// requested, standings when there is more than one game.
pub fn emit(summaries: &[GameSummary], output: &OutputOptions) -> TpResult<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(summaries)?);
        return Ok(());
    }

    for summary in summaries {
        print_board(summary);
        if output.breakdown {
            print_breakdown(summary);
        }
        println!("Total score: {}", summary.board.total);
    }

    if summaries.len() > 1 {
        print_standings(summaries);
    }
    Ok(())
}

/// The classic three-row board: frame numbers, roll marks, running score.
/// Unreached frames stay blank, so a partial game reads as one.
pub fn print_board(summary: &GameSummary) {
    println!("\nGame: {}", summary.name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new("Frame").add_attribute(Attribute::Bold)];
    for i in 1..=FRAMES {
        header.push(Cell::new(i));
    }
    table.add_row(header);

    let mut marks = vec![Cell::new("Rolls").add_attribute(Attribute::Bold)];
    for slot in 0..FRAMES {
        marks.push(Cell::new(
            summary.labels.get(slot).cloned().unwrap_or_default(),
        ));
    }
    table.add_row(marks);

    let mut scores = vec![Cell::new("Score").add_attribute(Attribute::Bold)];
    for slot in 0..FRAMES {
        let text = summary
            .board
            .entries
            .get(slot)
            .map(|e| e.cumulative.to_string())
            .unwrap_or_default();
        scores.push(Cell::new(text));
    }
    table.add_row(scores);

    for i in 1..=FRAMES {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Center);
        }
    }
    println!("{}", table);
}

/// Per-frame base/bonus/cumulative columns.
pub fn print_breakdown(summary: &GameSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Frame").add_attribute(Attribute::Bold),
        Cell::new("Kind"),
        Cell::new("Base"),
        Cell::new("Bonus").fg(Color::Cyan),
        Cell::new("Score").add_attribute(Attribute::Bold),
    ]);

    for i in 2..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (slot, entry) in summary.board.entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(slot + 1),
            Cell::new(summary.kinds[slot].to_string()),
            Cell::new(entry.base),
            Cell::new(entry.bonus).fg(Color::Cyan),
            Cell::new(entry.cumulative).add_attribute(Attribute::Bold),
        ]);
    }
    println!("\n{}", table);
}

/// One row per game, best total first and highlighted, with a tally per
/// frame kind.
pub fn print_standings(summaries: &[GameSummary]) {
    let mut ranked: Vec<&GameSummary> = summaries.iter().collect();
    ranked.sort_by(|a, b| b.board.total.cmp(&a.board.total));
    let best = ranked.first().map(|s| s.board.total).unwrap_or(0);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Game").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
    ];
    for kind in FrameKind::iter() {
        header.push(Cell::new(kind.to_string()));
    }
    table.add_row(header);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for summary in ranked {
        let name_cell = if summary.board.total == best {
            Cell::new(&summary.name)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&summary.name).add_attribute(Attribute::Bold)
        };

        let mut row = vec![name_cell, Cell::new(summary.board.total).fg(Color::Cyan)];
        for kind in FrameKind::iter() {
            row.push(Cell::new(summary.tally(kind)));
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}
