//! Recursive minimax search, plain and with alpha-beta pruning
//!
//! Both searches return a score, never a move. They share one base case:
//! a completed line, the depth limit, or a full board ends the recursion
//! with the static evaluation. Every move is placed on the board before the
//! recursive call and cleared right after it, so the board is back in its
//! input state whenever a search returns.

use serde::Serialize;

use super::{
    eval::{EvalConfig, evaluate},
    ordering::ordered_moves,
};
use crate::tictactoe::{Board, Player};

/// Work counters for a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Enumerations cut short by alpha-beta
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

fn side(maximizing: bool) -> Player {
    if maximizing { Player::X } else { Player::O }
}

/// Static score if `board` ends the recursion at `depth`
fn leaf_score(board: &Board, depth: usize, depth_limit: usize, config: &EvalConfig) -> Option<f64> {
    let ended = board.winner().is_some() || depth >= depth_limit || !board.has_legal_move();
    ended.then(|| evaluate(board, config))
}

/// Plain minimax over empty cells in index order.
pub fn search_plain(
    board: &mut Board,
    depth: usize,
    maximizing: bool,
    depth_limit: usize,
    config: &EvalConfig,
) -> f64 {
    let mut stats = SearchStats::default();
    search_plain_with_stats(board, depth, maximizing, depth_limit, config, &mut stats)
}

pub fn search_plain_with_stats(
    board: &mut Board,
    depth: usize,
    maximizing: bool,
    depth_limit: usize,
    config: &EvalConfig,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes += 1;
    if let Some(score) = leaf_score(board, depth, depth_limit, config) {
        return score;
    }

    let mover = side(maximizing);
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for pos in board.empty_positions() {
        board.place(pos, mover);
        let value =
            search_plain_with_stats(board, depth + 1, !maximizing, depth_limit, config, stats);
        board.clear(pos);

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}

/// Alpha-beta minimax over moves from [`ordered_moves`].
///
/// Returns the same score as [`search_plain`] for any board and depth limit
/// when called with a full `(-inf, +inf)` window.
pub fn search_pruned(
    board: &mut Board,
    depth: usize,
    maximizing: bool,
    alpha: f64,
    beta: f64,
    depth_limit: usize,
    config: &EvalConfig,
) -> f64 {
    let mut stats = SearchStats::default();
    search_pruned_with_stats(
        board,
        depth,
        maximizing,
        alpha,
        beta,
        depth_limit,
        config,
        &mut stats,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn search_pruned_with_stats(
    board: &mut Board,
    depth: usize,
    maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    depth_limit: usize,
    config: &EvalConfig,
    stats: &mut SearchStats,
) -> f64 {
    stats.nodes += 1;
    if let Some(score) = leaf_score(board, depth, depth_limit, config) {
        return score;
    }

    let mover = side(maximizing);
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for pos in ordered_moves(board, mover, config) {
        board.place(pos, mover);
        let value = search_pruned_with_stats(
            board,
            depth + 1,
            !maximizing,
            alpha,
            beta,
            depth_limit,
            config,
            stats,
        );
        board.clear(pos);

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::eval::TERMINAL_SCORE;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_depth_limit_zero_returns_static_score() {
        let config = EvalConfig::default();
        let mut b = board("X...O....");
        let expected = evaluate(&b, &config);
        assert_eq!(search_plain(&mut b, 0, true, 0, &config), expected);
        assert_eq!(
            search_pruned(&mut b, 0, true, f64::NEG_INFINITY, f64::INFINITY, 0, &config),
            expected
        );
    }

    #[test]
    fn test_terminal_position_is_not_expanded() {
        let config = EvalConfig::default();
        let mut b = board("XXXOO....");
        let mut stats = SearchStats::default();
        let score = search_plain_with_stats(&mut b, 0, false, 9, &config, &mut stats);
        assert_eq!(score, TERMINAL_SCORE);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_finds_immediate_win_for_mover() {
        let config = EvalConfig::default();
        // O to move can complete the middle row
        let mut b = board("XX.OO.X..");
        assert_eq!(search_plain(&mut b, 0, false, 1, &config), -TERMINAL_SCORE);
        assert_eq!(
            search_pruned(&mut b, 0, false, f64::NEG_INFINITY, f64::INFINITY, 1, &config),
            -TERMINAL_SCORE
        );
    }

    #[test]
    fn test_board_is_restored() {
        let config = EvalConfig::default();
        let mut b = board("X...O....");
        let before = b;
        search_plain(&mut b, 0, true, 9, &config);
        assert_eq!(b, before);
        search_pruned(&mut b, 0, true, f64::NEG_INFINITY, f64::INFINITY, 9, &config);
        assert_eq!(b, before);
    }

    #[test]
    fn test_pruning_matches_plain_and_does_less_work() {
        let config = EvalConfig::default();
        let mut b = board("X........");
        for depth_limit in 0..=8 {
            let mut plain_stats = SearchStats::default();
            let mut pruned_stats = SearchStats::default();
            let plain =
                search_plain_with_stats(&mut b, 0, false, depth_limit, &config, &mut plain_stats);
            let pruned = search_pruned_with_stats(
                &mut b,
                0,
                false,
                f64::NEG_INFINITY,
                f64::INFINITY,
                depth_limit,
                &config,
                &mut pruned_stats,
            );
            assert_eq!(plain, pruned, "depth limit {depth_limit}");
            assert!(pruned_stats.nodes <= plain_stats.nodes);
        }
    }

    #[test]
    fn test_stats_merge() {
        let mut total = SearchStats { nodes: 3, cutoffs: 1 };
        total.merge(&SearchStats { nodes: 4, cutoffs: 2 });
        assert_eq!(total, SearchStats { nodes: 7, cutoffs: 3 });
    }
}
