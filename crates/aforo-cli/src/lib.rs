//! Library access register CLI library.
//!
//! This crate provides the CLI interface for `aforo`.

mod cli;
pub mod commands;
mod config;
pub mod register;

pub use cli::{Cli, Commands, QueryArgs, SourceArgs};
pub use config::Config;
