//! Engine options shared across CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    app::EngineConfig,
    engine::{Difficulty, EvalConfig, Strategy},
};

/// Engine settings accepted by every command that runs a search.
///
/// Precedence: explicit flags, then `--config`, then the `--difficulty`
/// preset (depth = difficulty - 1, scale = difficulty / 9), then defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// JSON file with an engine configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Difficulty level 1-9; below 5 the engine may play slightly worse moves
    #[arg(long, short = 'd')]
    pub difficulty: Option<u8>,

    /// Plies searched below each candidate move (0-9)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Search strategy (`minimax` or `alpha-beta`)
    #[arg(long, short = 's')]
    pub strategy: Option<Strategy>,

    /// Evaluator scale multiplier
    #[arg(long)]
    pub scale: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl EngineArgs {
    /// Build and validate the engine configuration these flags describe
    pub fn resolve(&self) -> Result<EngineConfig> {
        let difficulty = self
            .difficulty
            .map(Difficulty::new)
            .transpose()
            .context("invalid --difficulty")?;

        let mut config = match (&self.config, difficulty) {
            (Some(path), _) => EngineConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            (None, Some(level)) => EngineConfig::for_difficulty(level),
            (None, None) => EngineConfig::default(),
        };

        if let Some(level) = difficulty {
            config = config.with_difficulty(level);
        }
        if let Some(depth) = self.depth {
            config = config.with_depth_limit(depth);
        }
        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }
        if let Some(scale) = self.scale {
            let eval = EvalConfig {
                scale,
                ..config.eval
            };
            config = config.with_eval(eval);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }
}
