//! CLI argument definitions for bowling.

use bowling_core::config::frames::DEFAULT_MAX_FRAMES;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bowling")]
#[command(about = "Ten-pin bowling score calculator", version)]
pub struct Args {
    /// Number of frames in the game
    #[arg(long, global = true, env = "BOWLING_FRAMES", default_value_t = DEFAULT_MAX_FRAMES)]
    pub frames: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Enter frames interactively (default)
    Play {
        /// Print the scorecard when the game ends
        #[arg(long)]
        scorecard: bool,
    },
    /// Score frames given as arguments, e.g. `bowling score X 7,/ 3,4`
    Score {
        /// Frame notations in order
        #[arg(required = true, value_name = "FRAME")]
        notations: Vec<String>,
        /// Output the scorecard as JSON
        #[arg(long)]
        json: bool,
        /// Print the scorecard after scoring
        #[arg(long, conflicts_with = "json")]
        scorecard: bool,
    },
}
