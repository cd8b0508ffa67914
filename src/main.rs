//! mst_gen CLI entry point

use anyhow::{Context, Result};
use mst_gen::config::cli::{Cli, Invocation};
use std::io;

fn main() -> Result<()> {
    // Help and version print to stdout and exit 0 before anything else runs
    let cli = match Cli::parse_env()? {
        Invocation::Info(info) => info.exit(),
        Invocation::Generate(cli) => cli,
    };

    init_logging(cli.debug);

    let config = cli.resolve()?;
    log::debug!("configuration: {:?}", config);

    let stdout = io::stdout();
    mst_gen::run(&config, stdout.lock()).context("Failed to generate point cloud")?;

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the level chosen here
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
