//! Board representation and basic queries

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Index of the centre cell
pub const CENTRE: usize = 4;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game.
///
/// X is the maximizing side: every score in the engine is reported from
/// X's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// The nine cells of the grid in row-major order.
///
/// A board carries no turn information; callers pass the side to move
/// alongside it. The search mutates a board through [`Board::place`] and
/// [`Board::clear`] and always restores it before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Parse a board from 9 cell characters, ignoring whitespace.
    ///
    /// `X`/`x` and `O`/`o`/`0` are marks; `.`, `-` and `_` are empty cells.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 cells or contains a
    /// character outside the cell alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::tictactoe::{Board, Cell};
    ///
    /// let board = Board::from_string("XX. ... ...").unwrap();
    /// assert_eq!(board.get(1), Cell::X);
    /// assert_eq!(board.get(2), Cell::Empty);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Compact 9-character encoding (`.` for empty cells)
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Put `player`'s mark on `pos`. Inverse of [`Board::clear`].
    pub fn place(&mut self, pos: usize, player: Player) {
        debug_assert!(self.is_empty(pos), "placing on occupied cell {pos}");
        self.cells[pos] = player.to_cell();
    }

    /// Empty the cell at `pos`.
    pub fn clear(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
    }

    /// Checked variant of [`Board::place`] for callers outside the search.
    pub fn try_place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= 9 || !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.place(pos, player);
        Ok(())
    }

    /// Get all empty positions in index order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// True if at least one cell is empty
    pub fn has_legal_move(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        !self.has_legal_move()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Swap X and O marks.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::tictactoe::{Board, Cell};
    ///
    /// let board: Board = "X...O....".parse().unwrap();
    /// let swapped = board.swap_players();
    /// assert_eq!(swapped.get(0), Cell::O);
    /// assert_eq!(swapped.get(4), Cell::X);
    /// ```
    #[must_use = "swap_players returns a new board; the original is unchanged"]
    pub fn swap_players(&self) -> Self {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = match cell {
                Cell::X => Cell::O,
                Cell::O => Cell::X,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = crate::Error;

    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; 9] =
            cells
                .try_into()
                .map_err(|_| crate::Error::InvalidBoardLength {
                    expected: 9,
                    got: cells.len(),
                    context: "cell slice".to_string(),
                })?;
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| self.cells[row * 3 + col].to_char().to_string())
                .collect();
            write!(f, " {} ", line.join(" | "))?;
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_all_empty_markers() {
        let board = Board::from_string("X-O ._. ...").unwrap();
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(1), Cell::Empty);
        assert_eq!(board.get(2), Cell::O);
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_parse_rejects_short_board() {
        let err = Board::from_string("XO.").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_marks() {
        let err = Board::from_string("XOZ......").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_try_from_slice_checks_length() {
        let cells = [Cell::Empty; 8];
        assert!(Board::try_from(&cells[..]).is_err());

        let cells = [Cell::X; 9];
        let board = Board::try_from(&cells[..]).unwrap();
        assert!(board.is_full());
    }

    #[test]
    fn test_place_and_clear_are_inverse() {
        let mut board: Board = "X...O....".parse().unwrap();
        let before = board;
        board.place(8, Player::X);
        assert_eq!(board.get(8), Cell::X);
        board.clear(8);
        assert_eq!(board, before);
    }

    #[test]
    fn test_try_place_rejects_occupied() {
        let mut board: Board = "X........".parse().unwrap();
        assert!(matches!(
            board.try_place(0, Player::O),
            Err(crate::Error::InvalidMove { position: 0 })
        ));
        assert!(matches!(
            board.try_place(9, Player::O),
            Err(crate::Error::InvalidMove { position: 9 })
        ));
        assert!(board.try_place(1, Player::O).is_ok());
    }

    #[test]
    fn test_has_legal_move() {
        assert!(Board::new().has_legal_move());
        let full: Board = "XOXXOOOXX".parse().unwrap();
        assert!(!full.has_legal_move());
        assert!(full.is_draw());
    }

    #[test]
    fn test_winner() {
        let board: Board = "OOO XX. X..".parse().unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert!(board.is_terminal());
        assert_eq!(Board::new().winner(), None);
    }

    #[test]
    fn test_encode_round_trips() {
        let board: Board = "X-O -X- O--".parse().unwrap();
        assert_eq!(board.encode(), "X.O.X.O..");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X.O......".parse().unwrap();
        let rendered = board.to_string();
        assert!(rendered.starts_with(" X | . | O "));
        assert_eq!(rendered.lines().count(), 5);
    }

    #[test]
    fn test_player_parse() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("Z".parse::<Player>().is_err());
    }
}
