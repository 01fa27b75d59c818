//! Application layer: engine configuration shared by the library and the CLI.

pub mod config;

pub use config::{EngineConfig, MAX_DEPTH_LIMIT};
