//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod add;
pub mod build;
pub mod view;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a component's files into this project
    Add(add::AddArgs),

    /// Show a component's manifest without installing it
    View(view::ViewArgs),

    /// Generate registry manifests from a component directory
    Build(build::BuildArgs),
}

impl Commands {
    /// Argument checks that need no config, filesystem or network access.
    pub fn check_args(&self) -> Result<()> {
        match self {
            Self::Add(args) => args.component_name().map(drop),
            Self::View(args) => args.component_name().map(drop),
            Self::Build(_) => Ok(()),
        }
    }
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Add(args) => add::run(ctx, args),
        Commands::View(args) => view::run(ctx, args),
        Commands::Build(args) => build::run(ctx, args),
    }
}
