//! One-ply move ordering for the pruned search

use super::eval::{EvalConfig, evaluate};
use crate::tictactoe::{Board, Player};

/// Empty cells ordered best-first for `player` by one-ply static evaluation.
///
/// X sees its highest-scoring replies first and O its lowest. The sort is
/// stable, so equal scores keep index order. `board` is restored before
/// returning.
pub fn ordered_moves(board: &mut Board, player: Player, config: &EvalConfig) -> Vec<usize> {
    let mut scored: Vec<(usize, f64)> = board
        .empty_positions()
        .into_iter()
        .map(|pos| {
            board.place(pos, player);
            let score = evaluate(board, config);
            board.clear(pos);
            (pos, score)
        })
        .collect();

    if player.is_maximizer() {
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    } else {
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    }

    scored.into_iter().map(|(pos, _)| pos).collect()
}
