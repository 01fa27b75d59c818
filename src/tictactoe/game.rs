//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress or finished, with its move history.
///
/// The game owns its board and alternates the side to move itself; the
/// engine only ever sees a borrowed board plus the side to move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub first_player: Player,
    pub board: Board,
    pub to_move: Player,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game on an empty board with X to move
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    pub fn with_first_player(first_player: Player) -> Self {
        Game {
            first_player,
            board: Board::new(),
            to_move: first_player,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the side to move
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        self.board.try_place(position, self.to_move)?;
        self.moves.push(Move {
            position,
            player: self.to_move,
        });

        if let Some(winner) = self.board.winner() {
            self.outcome = Some(GameOutcome::Win(winner));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.to_move = self.to_move.opponent();
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Move positions in the order they were played
    pub fn positions(&self) -> Vec<usize> {
        self.moves.iter().map(|m| m.position).collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_alternates_sides() {
        let mut game = Game::new();
        game.play(4).unwrap();
        game.play(0).unwrap();

        assert_eq!(game.to_move, Player::X);
        assert_eq!(
            game.moves,
            vec![
                Move {
                    position: 4,
                    player: Player::X
                },
                Move {
                    position: 0,
                    player: Player::O
                },
            ]
        );
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }

        assert_eq!(game.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(matches!(game.play(5), Err(crate::Error::GameOver)));
    }

    #[test]
    fn test_draw_detected() {
        let mut game = Game::new();
        // X O X
        // X O O
        // O X X
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::with_first_player(Player::O);
        game.play(4).unwrap();
        assert!(matches!(
            game.play(4),
            Err(crate::Error::InvalidMove { position: 4 })
        ));
        assert_eq!(game.positions(), vec![4]);
    }
}
