//! Move command - compute the engine's move for a position

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use crate::{
    cli::{
        config::EngineArgs,
        output::{format_number, print_board, print_candidates, print_kv, print_section},
    },
    engine::Engine,
    tictactoe::{Board, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the engine's move for a position")]
pub struct MoveArgs {
    /// Board as 9 cells, row-major (`X`, `O`, `.`/`-` for empty), e.g. "XX.-O----"
    pub board: Board,

    /// Side to move (`x` or `o`)
    #[arg(long, short = 'p', default_value = "x")]
    pub player: Player,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Show every candidate with its score and the search counters
    #[arg(long)]
    pub stats: bool,

    /// Print the analysis as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: MoveArgs) -> Result<()> {
    let config = args.engine.resolve()?;
    let mut board = args.board;

    if let Some(winner) = board.winner() {
        bail!("position is already won by {winner}");
    }

    info!(
        board = %board.encode(),
        player = %args.player,
        depth = config.depth_limit,
        difficulty = %config.difficulty,
        strategy = %config.strategy,
        "computing move"
    );

    let mut engine = Engine::new(config);
    let analysis = engine.analyse(&mut board, args.player)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    if !args.stats {
        println!("{}", analysis.chosen);
        return Ok(());
    }

    print_section("Position");
    print_board(&board);

    let config = engine.config();
    print_section("Search");
    print_kv("Player", &args.player.to_string());
    print_kv("Strategy", &config.strategy.to_string());
    print_kv("Depth limit", &config.depth_limit.to_string());
    print_kv("Difficulty", &config.difficulty.to_string());
    print_kv("Nodes", &format_number(analysis.stats.nodes));
    print_kv("Cutoffs", &format_number(analysis.stats.cutoffs));

    print_section("Candidates");
    print_candidates(&analysis.candidates, analysis.chosen);
    println!("\nChosen move: {}", analysis.chosen);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Strategy;

    #[test]
    fn test_parses_board_and_engine_flags() {
        let args = MoveArgs::try_parse_from([
            "move",
            "XX.-O----",
            "--player",
            "o",
            "--difficulty",
            "3",
            "--strategy",
            "minimax",
            "--seed",
            "4",
        ])
        .unwrap();

        assert_eq!(args.board.encode(), "XX..O....");
        assert_eq!(args.player, Player::O);
        let config = args.engine.resolve().unwrap();
        assert_eq!(config.strategy, Strategy::Minimax);
        assert_eq!(config.depth_limit, 2);
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    fn test_rejects_malformed_board() {
        assert!(MoveArgs::try_parse_from(["move", "XX."]).is_err());
        assert!(MoveArgs::try_parse_from(["move", "XX.-O---Z"]).is_err());
    }
}
