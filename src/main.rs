//! motion - registry installer CLI
//!
//! Install animated UI components from a hosted registry into your project.

use std::process::ExitCode;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use motion::Result;
use motion::app::AppContext;
use motion::cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            let name = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => String::new(),
            };
            eprintln!("Unknown command: {name}");
            eprintln!("Run 'motion --help' for usage.");
            return ExitCode::from(2);
        }
        Err(err) => err.exit(),
    };
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.robot {
                if !matches!(e, motion::MotionError::PartialInstall { .. }) {
                    // Robot mode: JSON error output to stdout
                    let error_json = serde_json::json!({
                        "error": true,
                        "code": e.code(),
                        "message": e.to_string(),
                    });
                    println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
                }
            } else {
                eprintln!("Error: {e}");
                if let Some(hint) = e.hint() {
                    eprintln!("{hint}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let Some(command) = &cli.command else {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    };
    command.check_args()?;
    let ctx = AppContext::from_cli(cli)?;
    motion::cli::commands::run(&ctx, command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,motion=debug",
        2 => "debug,motion=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
