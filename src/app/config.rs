//! Engine configuration.

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    engine::{Difficulty, EvalConfig, Strategy},
};

/// Deepest useful depth limit: the root move plus eight replies fill the board.
pub const MAX_DEPTH_LIMIT: usize = 9;

/// Configuration for an [`Engine`](crate::engine::Engine).
///
/// Builder-style API; every field has a default so partial JSON files load.
///
/// # Examples
///
/// ```
/// use oxo::app::EngineConfig;
/// use oxo::engine::{Difficulty, Strategy};
///
/// let config = EngineConfig::default()
///     .with_depth_limit(4)
///     .with_difficulty(Difficulty::new(3).unwrap())
///     .with_strategy(Strategy::Minimax)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched below each root move before falling back to static evaluation
    pub depth_limit: usize,
    /// Move-selection tolerance level
    pub difficulty: Difficulty,
    /// Search used to score root moves
    pub strategy: Strategy,
    /// Static evaluator tuning
    pub eval: EvalConfig,
    /// Random seed for move selection (None = non-deterministic)
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Preset for a difficulty level: the search looks `level - 1` plies
    /// deep (level 1 scores root moves statically) and the evaluator scale is
    /// `level / 9`.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            depth_limit: usize::from(difficulty.get() - 1),
            difficulty,
            strategy: Strategy::default(),
            eval: EvalConfig::for_difficulty(difficulty.get()),
            seed: None,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_eval(mut self, eval: EvalConfig) -> Self {
        self.eval = eval;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.depth_limit > MAX_DEPTH_LIMIT {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "depth limit {} exceeds the maximum of {MAX_DEPTH_LIMIT}",
                    self.depth_limit
                ),
            });
        }
        self.eval.validate()
    }

    /// Load and validate a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config '{}'", path.display()),
            source,
        })?;
        let config: EngineConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth_limit: MAX_DEPTH_LIMIT,
            difficulty: Difficulty::default(),
            strategy: Strategy::default(),
            eval: EvalConfig::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plays_perfectly() {
        let config = EngineConfig::default();
        assert_eq!(config.depth_limit, 9);
        assert!(config.difficulty.is_strict());
        assert_eq!(config.strategy, Strategy::AlphaBeta);
        assert_eq!(config.eval, EvalConfig::default());
    }

    #[test]
    fn test_for_difficulty_ties_depth_and_scale() {
        let config = EngineConfig::for_difficulty(Difficulty::new(3).unwrap());
        assert_eq!(config.depth_limit, 2);
        assert_eq!(config.eval.scale, 3.0 / 9.0);
        assert_eq!(config.difficulty.get(), 3);

        let easiest = EngineConfig::for_difficulty(Difficulty::MIN);
        assert_eq!(easiest.depth_limit, 0);
        assert!(easiest.validate().is_ok());
    }

    #[test]
    fn test_validate_depth_limit() {
        assert!(EngineConfig::default().with_depth_limit(10).validate().is_err());
        assert!(EngineConfig::default().with_depth_limit(0).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"depth_limit": 2, "strategy": "minimax"}"#).unwrap();
        assert_eq!(config.depth_limit, 2);
        assert_eq!(config.strategy, Strategy::Minimax);
        assert_eq!(config.difficulty, Difficulty::default());
        assert_eq!(config.seed, None);
    }
}
