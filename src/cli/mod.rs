//! CLI module for medaltally
//!
//! Handles command-line argument parsing and configuration management.

pub mod args;
pub mod config;

pub use args::{Args, Commands, QueryOpts, Verbosity};
pub use config::Config;
