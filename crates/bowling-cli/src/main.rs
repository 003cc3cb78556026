mod cli;
mod commands;

use anyhow::Result;
use bowling_core::GameConfig;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the prompts on stdout
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bowling_cli=warn,bowling_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::new(args.frames)?;

    match args.command {
        Some(Command::Score {
            notations,
            json,
            scorecard,
        }) => commands::score::run(config, &notations, json, scorecard),
        Some(Command::Play { scorecard }) => commands::play::run(config, scorecard),
        None => commands::play::run(config, false),
    }
}
