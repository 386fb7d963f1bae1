//! Help table: every move played against every other move.

use fair_rps_core::MoveSet;

const CORNER: &str = "User \\ PC";

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the outcome table. Rows are the player's move, columns the
/// computer's, and each cell is the result for the player.
pub fn render(moves: &MoveSet) -> String {
    let table = moves.outcome_table();
    let labels: Vec<String> = moves.names().iter().map(|n| capitalize(n)).collect();

    let first_width = labels
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(CORNER.len()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = labels
        .iter()
        .map(|l| l.chars().count().max("Lose".len()))
        .collect();

    let separator = {
        let mut line = format!("+{}", "-".repeat(first_width + 2));
        for w in &widths {
            line.push('+');
            line.push_str(&"-".repeat(w + 2));
        }
        line.push('+');
        line
    };

    let row_line = |first: &str, cells: Vec<&str>| -> String {
        let mut line = format!("| {:<width$} ", first, width = first_width);
        for (cell, w) in cells.iter().zip(&widths) {
            line.push_str(&format!("| {:<width$} ", cell, width = *w));
        }
        line.push('|');
        line
    };

    let mut lines = vec![separator.clone()];
    lines.push(row_line(CORNER, labels.iter().map(String::as_str).collect()));
    lines.push(separator.clone());
    for (label, outcomes) in labels.iter().zip(&table) {
        lines.push(row_line(label, outcomes.iter().map(|o| o.as_str()).collect()));
    }
    lines.push(separator);
    lines.join("\n")
}

/// Explanation followed by the table
pub fn help(moves: &MoveSet) -> String {
    format!(
        "Each cell is the result when your move (row) is played against the computer's move (column).\n\
         Win: your move beats the computer's move.\n\
         Lose: your move loses to the computer's move.\n\
         Draw: both moves are the same.\n\
         {}",
        render(moves)
    )
}
