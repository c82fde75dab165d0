//! `fieldsortctl`: sort a JSON array of objects by a runtime-named field.

mod cli;
mod input;

use anyhow::Result;
use clap::Parser;
use fieldsort_config::{ConfigLoad, ConfigLoader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::from_env();
    if let Some(path) = &cli.config {
        loader = loader.with_explicit_path(path);
    }
    let ConfigLoad { config, source } = loader.load()?;

    // Logs go to stderr so stdout stays machine readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(%source, "configuration loaded");

    match cli.command {
        Command::Sort(args) => cli::sort::run(args, &config),
        Command::Inspect(args) => cli::inspect::run(args, &config),
    }
}
