//! Canonical RLE pattern text encoding
//!
//! Output never writes a count of one, never encodes trailing dead cells of a
//! row and collapses consecutive empty rows into a single counted `$`.

use crate::spatial::grid::{Cell, Grid};

/// Encode a grid as pattern text terminated by `!`
///
/// The empty grid and an all-dead grid both encode to `"!"`.
pub fn encode(grid: &Grid) -> String {
    let mut output = String::new();
    let mut pending_empty = 0usize;

    for row in grid.rows() {
        let cells: Vec<Cell> = row.iter().copied().collect();
        let line = encode_row(&cells);
        if line.is_empty() {
            pending_empty += 1;
            continue;
        }

        if pending_empty > 0 {
            push_run(&mut output, pending_empty, '$');
            pending_empty = 0;
        }
        output.push_str(&line);
        output.push('$');
    }

    let mut text = output.trim_end_matches('$').to_string();
    text.push('!');
    text
}

// Trailing dead cells are implicit, so an all-dead row encodes to ""
fn encode_row(cells: &[Cell]) -> String {
    let live_len = cells
        .iter()
        .rposition(|cell| cell.is_alive())
        .map_or(0, |last| last + 1);

    let mut line = String::new();
    let mut runs = cells.iter().take(live_len).peekable();
    while let Some(&cell) = runs.next() {
        let mut length = 1;
        while runs.next_if(|&&next| next == cell).is_some() {
            length += 1;
        }
        push_run(&mut line, length, cell.symbol());
    }
    line
}

fn push_run(out: &mut String, length: usize, symbol: char) {
    if length > 1 {
        out.push_str(&length.to_string());
    }
    out.push(symbol);
}
