//! Minimax search engine for noughts and crosses
//!
//! This crate provides:
//! - A 3x3 board model with winning-line analysis
//! - A heuristic static evaluator with a tunable scale
//! - Plain minimax and alpha-beta search with one-ply move ordering
//! - Difficulty-aware move selection with an injectable random source
//! - Agents, a match runner and a command-line front end
//!
//! # Examples
//!
//! ```
//! use oxo::{
//!     app::EngineConfig,
//!     engine::Engine,
//!     tictactoe::{Board, Player},
//! };
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(1));
//! let mut board: Board = "XX.OO....".parse()?;
//! assert_eq!(engine.best_move(&mut board, Player::X)?, 2);
//! # Ok::<(), oxo::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use app::EngineConfig;
pub use engine::{Candidate, Difficulty, Engine, EvalConfig, Strategy, compute_best_move};
pub use error::{Error, Result};
pub use tictactoe::{Board, Cell, Player};
