//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Library access register reports.
///
/// Reads a register of `identifier;ENTRADA|SALIDA` lines and reports who is
/// inside, how many times each user entered, and who entered most.
#[derive(Debug, Parser)]
#[command(name = "aforo", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the full three-section summary (default).
    Summary(SourceArgs),

    /// List users currently inside.
    Inside(QueryArgs),

    /// Show the entry count of every user who entered at least once.
    Entries(QueryArgs),

    /// List the user(s) with the most entries.
    Top(QueryArgs),

    /// Show the state of a single user.
    User {
        /// The user identifier.
        id: String,

        #[command(flatten)]
        query: QueryArgs,
    },
}

/// Where to read the register from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Register file; `-` reads stdin. Defaults to `register_path` from config.
    pub file: Option<PathBuf>,
}

/// Arguments shared by the query subcommands.
#[derive(Debug, Clone, Default, Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}
