//! Play command - interactive game against the engine on the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::{
    cli::{
        config::EngineArgs,
        output::{print_board, print_section},
    },
    engine::Engine,
    tictactoe::{Game, GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine")]
pub struct PlayArgs {
    /// Your side (`x` or `o`); X always opens
    #[arg(long, short = 'p', default_value = "x")]
    pub player: Player,

    #[command(flatten)]
    pub engine: EngineArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.engine.resolve()?;
    let human = args.player;
    let mut engine = Engine::new(config);
    let mut game = Game::new();

    print_section(&format!(
        "You play {human}, engine difficulty {} ({})",
        engine.config().difficulty,
        engine.config().strategy
    ));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_over() {
        println!();
        print_board(&game.board);

        let position = if game.to_move == human {
            match prompt_move(&game, &mut lines)? {
                Some(position) => position,
                None => {
                    println!("\nGoodbye.");
                    return Ok(());
                }
            }
        } else {
            let mut board = game.board;
            let position = engine.best_move(&mut board, game.to_move)?;
            println!("Engine plays {position}");
            position
        };

        debug!(player = %game.to_move, position, "move");
        game.play(position)?;
    }

    println!();
    print_board(&game.board);
    match game.outcome {
        Some(GameOutcome::Win(winner)) if winner == human => println!("\nYou win!"),
        Some(GameOutcome::Win(_)) => println!("\nThe engine wins."),
        _ => println!("\nDraw."),
    }

    Ok(())
}

/// Ask for a cell until a legal one is entered. `None` on end of input or `q`.
fn prompt_move<B: BufRead>(game: &Game, lines: &mut io::Lines<B>) -> Result<Option<usize>> {
    loop {
        print!("Your move (0-8, q to quit): ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("failed to read input")?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match input.parse::<usize>() {
            Ok(pos) if pos < 9 && game.board.is_empty(pos) => return Ok(Some(pos)),
            Ok(pos) if pos < 9 => println!("Cell {pos} is taken."),
            _ => println!("Enter a number from 0 to 8."),
        }
    }
}
