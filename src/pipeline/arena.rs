//! Match runner: plays agents against each other on a shared board

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    ports::{Agent, Observer},
    tictactoe::{Game, GameOutcome, Player},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games
    pub num_games: usize,

    /// Random seed handed to both agents before the first game
    pub seed: Option<u64>,

    /// Side the evaluated agent plays
    pub agent_player: Player,

    /// Side that opens the first game
    pub first_player: Player,

    /// Swap the opening side after every game
    pub alternate_first: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            seed: None,
            agent_player: Player::X,
            first_player: Player::X,
            alternate_first: false,
        }
    }
}

/// Result of a match, from the evaluated agent's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl MatchResult {
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Play one game to completion and return it with its outcome.
///
/// The runner owns the board and alternates sides; each agent only sees a
/// snapshot. A move the game rejects aborts with that error.
pub fn play_game(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    first_player: Player,
    game_num: usize,
    observers: &mut [Box<dyn Observer>],
) -> Result<(Game, GameOutcome)> {
    let mut game = Game::with_first_player(first_player);

    loop {
        if let Some(outcome) = game.outcome {
            return Ok((game, outcome));
        }

        let player = game.to_move;
        let agent: &mut dyn Agent = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let position = agent.select_move(&game.board, player)?;
        game.play(position)?;
        debug!(game = game_num, agent = agent.name(), %player, position, "move played");

        for observer in observers.iter_mut() {
            observer.on_move(game_num, player, position, &game.board)?;
        }
    }
}

/// Plays a series of games between an agent and an opponent
pub struct MatchRunner {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the match and tally outcomes for `agent`
    pub fn run(&mut self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }

        for observer in &mut self.observers {
            observer.on_match_start(self.config.num_games)?;
        }

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;
        let mut first_player = self.config.first_player;

        for game_num in 0..self.config.num_games {
            let (_, outcome) = match self.config.agent_player {
                Player::X => {
                    play_game(agent, opponent, first_player, game_num, &mut self.observers)?
                }
                Player::O => {
                    play_game(opponent, agent, first_player, game_num, &mut self.observers)?
                }
            };

            match outcome {
                GameOutcome::Win(winner) if winner == self.config.agent_player => wins += 1,
                GameOutcome::Win(_) => losses += 1,
                GameOutcome::Draw => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }

            if self.config.alternate_first {
                first_player = first_player.opponent();
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        Ok(MatchResult::new(self.config.num_games, wins, draws, losses))
    }
}
