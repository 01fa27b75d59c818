//! Agent adapters: the search engine and a uniform random baseline

use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};

use crate::{
    Result,
    app::EngineConfig,
    engine::{Engine, SearchStats},
    ports::Agent,
    tictactoe::{Board, Player},
};

/// Agent backed by the minimax engine
pub struct SearchAgent {
    name: String,
    engine: Engine,
    stats: SearchStats,
}

impl SearchAgent {
    pub fn new(name: impl Into<String>, config: EngineConfig) -> Self {
        Self {
            name: name.into(),
            engine: Engine::new(config),
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    /// Search counters accumulated over every move this agent has made
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl Agent for SearchAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        let mut scratch = *board;
        let analysis = self.engine.analyse(&mut scratch, player)?;
        self.stats.merge(&analysis.stats);
        Ok(analysis.chosen)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.engine.reseed(seed);
        Ok(())
    }
}

/// Agent that plays a uniformly random empty cell
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize> {
        board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
