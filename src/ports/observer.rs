//! Observer port - watching a series of games
//!
//! Observers receive callbacks from the match runner so progress display
//! and logging stay out of the game loop.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Player},
};

/// Callbacks fired while a match is played. Every hook defaults to a no-op.
pub trait Observer: Send {
    /// Called once before the first game
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after every move with the board as it stands after the move
    fn on_move(
        &mut self,
        _game_num: usize,
        _player: Player,
        _position: usize,
        _board: &Board,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game finishes
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game
    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
