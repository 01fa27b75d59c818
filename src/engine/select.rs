//! Difficulty-aware move selection over root candidates

use std::fmt;

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// A root move and its search score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub position: usize,
    pub score: f64,
}

impl Candidate {
    pub fn new(position: usize, score: f64) -> Self {
        Self { position, score }
    }
}

/// Difficulty level from 1 (loosest) to 9.
///
/// Levels 5 and above always play a best-scored move; lower levels pick
/// at random among moves within a score tolerance of the best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MAX: Difficulty = Difficulty(9);
    /// Lowest level that plays deterministically
    pub const STRICT: Difficulty = Difficulty(5);

    pub fn new(value: u8) -> crate::Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Difficulty(value))
        } else {
            Err(crate::Error::InvalidDifficulty {
                value: i64::from(value),
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Score slack allowed around the best candidate: `max(0, (5 - d) * 5)`
    pub fn tolerance(self) -> f64 {
        let slack = (i32::from(Self::STRICT.0) - i32::from(self.0)).max(0) * 5;
        f64::from(slack)
    }

    pub fn is_strict(self) -> bool {
        self >= Self::STRICT
    }

    /// All levels from easiest to hardest
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (Self::MIN.0..=Self::MAX.0).map(Difficulty)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Difficulty::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Best score among `candidates` for `player`
pub fn best_score(candidates: &[Candidate], player: Player) -> Option<f64> {
    let scores = candidates.iter().map(|c| c.score);
    if player.is_maximizer() {
        scores.reduce(f64::max)
    } else {
        scores.reduce(f64::min)
    }
}

/// Candidate positions within the difficulty tolerance of the best score,
/// in candidate order.
pub fn eligible_pool(candidates: &[Candidate], player: Player, difficulty: Difficulty) -> Vec<usize> {
    let Some(best) = best_score(candidates, player) else {
        return Vec::new();
    };
    let tolerance = difficulty.tolerance();

    candidates
        .iter()
        .filter(|c| {
            let gap = if player.is_maximizer() {
                best - c.score
            } else {
                c.score - best
            };
            gap <= tolerance
        })
        .map(|c| c.position)
        .collect()
}

/// Pick a move from the root candidates.
///
/// Below [`Difficulty::STRICT`] with more than one eligible move, the choice
/// is uniform over the eligible pool using `rng`. Otherwise the first
/// eligible candidate wins.
///
/// # Errors
///
/// Returns [`crate::Error::NoLegalMoves`] if `candidates` is empty.
///
/// # Examples
///
/// ```
/// use oxo::engine::{Candidate, Difficulty, choose_move};
/// use oxo::tictactoe::Player;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let candidates = [Candidate::new(0, 5.0), Candidate::new(4, 20.0)];
/// let mut rng = StdRng::seed_from_u64(7);
/// let hard = Difficulty::new(9).unwrap();
/// assert_eq!(choose_move(&candidates, Player::X, hard, &mut rng).unwrap(), 4);
/// ```
pub fn choose_move<R: Rng + ?Sized>(
    candidates: &[Candidate],
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> crate::Result<usize> {
    let pool = eligible_pool(candidates, player, difficulty);

    if !difficulty.is_strict() && pool.len() > 1 {
        return pool.choose(rng).copied().ok_or(crate::Error::NoLegalMoves);
    }

    pool.first().copied().ok_or(crate::Error::NoLegalMoves)
}
