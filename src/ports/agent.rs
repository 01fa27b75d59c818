//! Agent port - anything that picks a move for a position

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// A move-choosing participant in a game.
///
/// The match runner owns the board and alternates sides; agents only see a
/// snapshot plus the side they are moving for.
///
/// # Examples
///
/// ```
/// use oxo::{
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// fn first_move<A: Agent>(agent: &mut A) -> oxo::Result<usize> {
///     agent.select_move(&Board::new(), Player::X)
/// }
/// ```
pub trait Agent: Send {
    /// Select a move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move is available.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize>;

    /// Name used in reports and logs.
    fn name(&self) -> &str;

    /// Seed the agent's random number generator.
    ///
    /// Match runners call this when given a seed so series are reproducible.
    /// Agents without randomness can keep the default no-op.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
