pub mod commands;
pub mod compare;
pub mod config;
pub mod history;
pub mod models;
pub mod progress;
pub mod render;

pub use commands::{Cli, Commands};
