//! Tic-Tac-Toe board model

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, CENTRE, Cell, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, LineCounts, WINNING_LINES};
