//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use oxo::{
    engine::{Engine, EvalConfig, SearchStats, Strategy, score_candidates},
    tictactoe::{Board, Game, GameOutcome, Player},
};

/// Every non-terminal position reachable from the empty board with X
/// opening, paired with the side to move.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    collect(&Game::new(), &mut seen, &mut out);
    out
}

fn collect(game: &Game, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Player)>) {
    if game.is_over() || !seen.insert(game.board) {
        return;
    }
    out.push((game.board, game.to_move));

    for pos in game.board.empty_positions() {
        let mut next = game.clone();
        next.play(pos).unwrap();
        collect(&next, seen, out);
    }
}

/// Root candidate scores for `player` on `board`.
pub fn candidate_scores(
    board: &mut Board,
    player: Player,
    depth_limit: usize,
    strategy: Strategy,
) -> Vec<(usize, f64)> {
    let mut stats = SearchStats::default();
    score_candidates(
        board,
        player,
        depth_limit,
        strategy,
        &EvalConfig::default(),
        &mut stats,
    )
    .into_iter()
    .map(|c| (c.position, c.score))
    .collect()
}

/// Play `game` to the end with `engine` answering every reply the other side
/// could make. Returns the number of finished games and calls `check` on each
/// outcome.
pub fn explore_all_replies(
    game: &Game,
    engine: &mut Engine,
    engine_side: Player,
    check: &mut dyn FnMut(&Game, GameOutcome),
) -> usize {
    if let Some(outcome) = game.outcome {
        check(game, outcome);
        return 1;
    }

    if game.to_move == engine_side {
        let mut board = game.board;
        let pos = engine.best_move(&mut board, engine_side).unwrap();
        assert_eq!(board, game.board, "engine left the board modified");
        let mut next = game.clone();
        next.play(pos).unwrap();
        explore_all_replies(&next, engine, engine_side, check)
    } else {
        game.board
            .empty_positions()
            .into_iter()
            .map(|pos| {
                let mut next = game.clone();
                next.play(pos).unwrap();
                explore_all_replies(&next, engine, engine_side, check)
            })
            .sum()
    }
}
