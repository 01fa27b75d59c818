//! CLI infrastructure for the oxo engine
//!
//! This module provides the command-line front end: computing a move for a
//! position, inspecting static evaluations, running match series and
//! playing interactively.

pub mod commands;
pub mod config;
pub mod output;
