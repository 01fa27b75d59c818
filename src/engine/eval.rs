//! Static evaluation of board positions

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, CENTRE, Cell, LineAnalyzer, Player};

/// Score of a completed line. Always outranks every heuristic score.
pub const TERMINAL_SCORE: f64 = 100.0;

/// Default weight of a two-in-a-row threat and of the centre cell
pub const DEFAULT_THREAT_WEIGHT: f64 = 11.0;

/// Tuning parameters for [`evaluate`].
///
/// `scale` multiplies the open-line term linearly and the threat and centre
/// terms quadratically, so one knob moves positional and tactical weight
/// together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub scale: f64,
    pub threat_weight: f64,
}

impl EvalConfig {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Scale tied to the difficulty level: `difficulty / 9`.
    pub fn for_difficulty(difficulty: u8) -> Self {
        Self::new(f64::from(difficulty) / 9.0)
    }

    /// Weight of one threat or of holding the centre
    fn bonus(&self) -> f64 {
        self.scale * self.scale * self.threat_weight
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("scale {} must be non-negative and finite", self.scale),
            });
        }
        if !self.threat_weight.is_finite() || self.threat_weight < 0.0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "threat weight {} must be non-negative and finite",
                    self.threat_weight
                ),
            });
        }
        Ok(())
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            threat_weight: DEFAULT_THREAT_WEIGHT,
        }
    }
}

/// Score `board` from X's point of view.
///
/// A completed line scores exactly `±TERMINAL_SCORE`. Otherwise the score
/// combines the difference in open lines, the difference in two-in-a-row
/// threats and a bonus for whoever holds the centre.
///
/// # Examples
///
/// ```
/// use oxo::engine::{EvalConfig, evaluate};
/// use oxo::tictactoe::Board;
///
/// let config = EvalConfig::default();
/// assert_eq!(evaluate(&Board::new(), &config), 0.0);
///
/// let won: Board = "XXX OO. ...".parse().unwrap();
/// assert_eq!(evaluate(&won, &config), 100.0);
/// ```
pub fn evaluate(board: &Board, config: &EvalConfig) -> f64 {
    match board.winner() {
        Some(Player::X) => return TERMINAL_SCORE,
        Some(Player::O) => return -TERMINAL_SCORE,
        None => {}
    }

    let x = LineAnalyzer::line_counts(&board.cells, Player::X);
    let o = LineAnalyzer::line_counts(&board.cells, Player::O);

    let line_term = config.scale * f64::from(x.open - o.open);
    let threat_term = config.bonus() * f64::from(x.threats - o.threats);
    let centre_term = match board.get(CENTRE) {
        Cell::X => config.bonus(),
        Cell::O => -config.bonus(),
        Cell::Empty => 0.0,
    };

    line_term + threat_term + centre_term
}
