//! Eval command - static evaluation breakdown of a position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{print_board, print_kv, print_section},
    engine::{EvalConfig, evaluate, ordered_moves},
    tictactoe::{Board, LineAnalyzer, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show the static evaluation of a position")]
pub struct EvalArgs {
    /// Board as 9 cells, row-major (`X`, `O`, `.`/`-` for empty)
    pub board: Board,

    /// Evaluator scale multiplier
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,
}

pub fn execute(args: EvalArgs) -> Result<()> {
    let config = EvalConfig::new(args.scale);
    config.validate()?;
    let mut board = args.board;

    print_section("Position");
    print_board(&board);

    print_section("Evaluation (X positive)");
    print_kv("Score", &format!("{:.3}", evaluate(&board, &config)));
    if let Some(winner) = board.winner() {
        print_kv("Winner", &winner.to_string());
        return Ok(());
    }

    for player in [Player::X, Player::O] {
        let counts = LineAnalyzer::line_counts(&board.cells, player);
        let wins = LineAnalyzer::winning_moves(&board.cells, player);
        print_kv(
            &format!("{player} lines"),
            &format!("{} open, {} threats", counts.open, counts.threats),
        );
        print_kv(&format!("{player} wins at"), &format!("{wins:?}"));
        let order = ordered_moves(&mut board, player, &config);
        print_kv(&format!("{player} move order"), &format!("{order:?}"));
    }

    Ok(())
}
