//! Match command - play a series of games between the engine and an opponent

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing::info;

use crate::{
    app::EngineConfig,
    cli::{
        config::EngineArgs,
        output::{format_number, print_kv, print_section},
    },
    pipeline::{Agent, MatchConfig, MatchRunner, ProgressObserver, RandomAgent, SearchAgent},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against an opponent")]
pub struct MatchArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Opponent (`random` or `engine`, a perfect-play engine)
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Side the engine plays (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub agent_player: Player,

    /// Side that opens the first game (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_player: Player,

    /// Swap the opening side after every game
    #[arg(long)]
    pub alternate: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Write the result to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: MatchArgs) -> Result<()> {
    let config = args.engine.resolve()?;
    let seed = config.seed;

    let mut opponent: Box<dyn Agent> = match args.opponent.to_lowercase().as_str() {
        "random" => Box::new(RandomAgent::new("Random")),
        "engine" | "optimal" => Box::new(SearchAgent::new("Optimal", EngineConfig::default())),
        other => {
            return Err(anyhow!(
                "Unknown opponent type: '{other}'. Supported: random, engine"
            ));
        }
    };
    let mut agent = SearchAgent::new("Engine", config);

    print_section("Match Configuration");
    print_kv("Engine plays", &args.agent_player.to_string());
    print_kv("Opponent", opponent.name());
    print_kv("Games", &args.games.to_string());
    print_kv("Depth limit", &agent.config().depth_limit.to_string());
    print_kv("Difficulty", &agent.config().difficulty.to_string());
    print_kv("Strategy", &agent.config().strategy.to_string());
    if let Some(seed) = seed {
        print_kv("Seed", &seed.to_string());
    }

    info!(games = args.games, opponent = opponent.name(), "starting match");

    let mut runner = MatchRunner::new(MatchConfig {
        num_games: args.games,
        seed,
        agent_player: args.agent_player,
        first_player: args.first_player,
        alternate_first: args.alternate,
    });
    if !args.quiet {
        runner = runner.with_observer(Box::new(ProgressObserver::new(args.agent_player)));
    }

    let result = runner.run(&mut agent, opponent.as_mut())?;

    print_section("Results");
    print_kv(
        "Wins",
        &format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0),
    );
    print_kv(
        "Draws",
        &format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0),
    );
    print_kv(
        "Losses",
        &format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0),
    );
    print_kv("Nodes searched", &format_number(agent.stats().nodes));

    if let Some(path) = args.export {
        result.save(&path)?;
        info!(path = %path.display(), "saved match result");
        println!("\nResult saved to {}", path.display());
    }

    Ok(())
}
