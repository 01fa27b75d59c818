//! Ports (trait boundaries) between the engine and its callers.
//!
//! Agents are anything that can pick a move for a board; observers watch a
//! series of games being played. The match runner in [`crate::pipeline`]
//! only talks to these traits.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
