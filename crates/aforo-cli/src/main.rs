use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aforo_cli::commands::{query, summary, user};
use aforo_cli::{Cli, Commands, Config, SourceArgs, register};
use aforo_core::Registry;

/// Load config and read the register named on the command line or in config.
fn open_register(config_path: Option<&Path>, source: &SourceArgs) -> Result<Registry> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let path = config.register_path_or(source.file.as_deref());
    register::load(&path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // stdout carries the report, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config_path = cli.config.as_deref();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Summary(source)) => {
            let registry = open_register(config_path, source)?;
            summary::run(&mut out, &registry)?;
        }
        None => {
            let registry = open_register(config_path, &SourceArgs::default())?;
            summary::run(&mut out, &registry)?;
        }
        Some(Commands::Inside(args)) => {
            let registry = open_register(config_path, &args.source)?;
            query::inside(&mut out, &registry, args.json)?;
        }
        Some(Commands::Entries(args)) => {
            let registry = open_register(config_path, &args.source)?;
            query::entries(&mut out, &registry, args.json)?;
        }
        Some(Commands::Top(args)) => {
            let registry = open_register(config_path, &args.source)?;
            query::top(&mut out, &registry, args.json)?;
        }
        Some(Commands::User { id, query: args }) => {
            let registry = open_register(config_path, &args.source)?;
            user::run(&mut out, &registry, id, args.json)?;
        }
    }

    out.flush()?;
    Ok(())
}
