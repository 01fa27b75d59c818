//! Agents, observers and the match runner
//!
//! This module provides:
//! - Agent adapters (the search engine, a random baseline)
//! - A match runner that plays series of games between agents
//! - Observers for progress reporting

pub mod agents;
pub mod arena;
pub mod observers;

pub use agents::{RandomAgent, SearchAgent};
pub use arena::{MatchConfig, MatchResult, MatchRunner, play_game};
pub use observers::ProgressObserver;

pub use crate::ports::{Agent, Observer};
