//! CLI subcommand implementations.

pub mod query;
pub mod summary;
pub mod user;
