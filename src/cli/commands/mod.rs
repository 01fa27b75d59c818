//! CLI subcommands

pub mod best_move;
pub mod evaluate;
pub mod match_cmd;
pub mod play;
