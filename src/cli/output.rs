//! Output formatting for the CLI

use crate::{engine::Candidate, tictactoe::Board};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a board with cell numbers in the empty squares
pub fn print_board(board: &Board) {
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                if board.is_empty(pos) {
                    pos.to_string()
                } else {
                    board.get(pos).to_char().to_string()
                }
            })
            .collect();
        println!("   {}", cells.join(" | "));
        if row < 2 {
            println!("  ---+---+---");
        }
    }
}

/// Print root candidates, marking the chosen one
pub fn print_candidates(candidates: &[Candidate], chosen: usize) {
    for candidate in candidates {
        let marker = if candidate.position == chosen { "*" } else { " " };
        println!(
            "  {marker} cell {}  score {:>8.3}",
            candidate.position, candidate.score
        );
    }
}
