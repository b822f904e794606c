//! Command line surface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub mod colors;
pub mod commands;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

pub const EXAMPLES: &str = "\
Examples:
  motion add animated-button
  motion add ai-glow-input --overwrite
  motion view animated-button
  motion build --source components --out public/r";

#[derive(Parser, Debug)]
#[command(
    name = "motion",
    version,
    about = "Install animated UI components from the motion registry",
    after_help = EXAMPLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Emit machine-readable JSON on stdout
    #[arg(long, global = true, env = "MOTION_ROBOT")]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of the global and project files
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run as if started in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
