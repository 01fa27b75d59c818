//! Game-tree search engine
//!
//! The engine scores every legal root move with a recursive minimax search
//! (plain or alpha-beta) and hands the resulting candidates to a
//! difficulty-aware selector:
//!
//! ```text
//! board + side ──► score_candidates ──► [(cell, score)] ──► choose_move ──► cell
//!                     │
//!                     └─ search_plain | search_pruned ──► evaluate (leaves)
//! ```

pub mod eval;
pub mod ordering;
pub mod search;
pub mod select;

use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use eval::{DEFAULT_THREAT_WEIGHT, EvalConfig, TERMINAL_SCORE, evaluate};
pub use ordering::ordered_moves;
pub use search::{
    SearchStats, search_plain, search_plain_with_stats, search_pruned, search_pruned_with_stats,
};
pub use select::{Candidate, Difficulty, best_score, choose_move, eligible_pool};

use crate::{
    Result,
    app::EngineConfig,
    tictactoe::{Board, Player},
};

/// Which recursive search scores the root candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Exhaustive minimax in cell-index order
    Minimax,
    /// Minimax with alpha-beta pruning and one-ply move ordering
    #[default]
    AlphaBeta,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" | "plain" => Ok(Strategy::Minimax),
            "alpha-beta" | "alphabeta" | "ab" | "pruned" => Ok(Strategy::AlphaBeta),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "unknown strategy '{other}'. Supported: minimax, alpha-beta"
                ),
            }),
        }
    }
}

/// Score every legal move for `player` on `board`.
///
/// Candidates come back in cell-index order. Each move is placed, searched
/// with the opponent to move from depth 0, and cleared again; `board` is
/// unchanged on return.
pub fn score_candidates(
    board: &mut Board,
    player: Player,
    depth_limit: usize,
    strategy: Strategy,
    config: &EvalConfig,
    stats: &mut SearchStats,
) -> Vec<Candidate> {
    let opponent_maximizes = player.opponent().is_maximizer();

    board
        .empty_positions()
        .into_iter()
        .map(|pos| {
            board.place(pos, player);
            let score = match strategy {
                Strategy::Minimax => search_plain_with_stats(
                    board,
                    0,
                    opponent_maximizes,
                    depth_limit,
                    config,
                    stats,
                ),
                Strategy::AlphaBeta => search_pruned_with_stats(
                    board,
                    0,
                    opponent_maximizes,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    depth_limit,
                    config,
                    stats,
                ),
            };
            board.clear(pos);
            debug!(position = pos, score, %strategy, "scored root candidate");
            Candidate::new(pos, score)
        })
        .collect()
}

/// Compute the move `player` should make on `board`.
///
/// # Errors
///
/// Returns [`crate::Error::NoLegalMoves`] if the board has no empty cell.
pub fn compute_best_move<R: Rng + ?Sized>(
    board: &mut Board,
    player: Player,
    depth_limit: usize,
    difficulty: Difficulty,
    strategy: Strategy,
    config: &EvalConfig,
    rng: &mut R,
) -> Result<usize> {
    let mut stats = SearchStats::default();
    let candidates = score_candidates(board, player, depth_limit, strategy, config, &mut stats);
    trace!(
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "root search finished"
    );
    choose_move(&candidates, player, difficulty, rng)
}

/// Result of a root analysis
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub player: Player,
    pub candidates: Vec<Candidate>,
    pub chosen: usize,
    pub stats: SearchStats,
}

/// A configured engine with its own random source.
pub struct Engine {
    config: EngineConfig,
    rng: StdRng,
}

impl Engine {
    /// Create an engine seeded from `config.seed`, or from entropy if unset.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Choose a move for `player`; `board` is unchanged on return.
    pub fn best_move(&mut self, board: &mut Board, player: Player) -> Result<usize> {
        compute_best_move(
            board,
            player,
            self.config.depth_limit,
            self.config.difficulty,
            self.config.strategy,
            &self.config.eval,
            &mut self.rng,
        )
    }

    /// Like [`Engine::best_move`] but also returns candidates and search counters.
    pub fn analyse(&mut self, board: &mut Board, player: Player) -> Result<Analysis> {
        let mut stats = SearchStats::default();
        let candidates = score_candidates(
            board,
            player,
            self.config.depth_limit,
            self.config.strategy,
            &self.config.eval,
            &mut stats,
        );
        let chosen = choose_move(&candidates, player, self.config.difficulty, &mut self.rng)?;
        Ok(Analysis {
            player,
            candidates,
            chosen,
            stats,
        })
    }
}
