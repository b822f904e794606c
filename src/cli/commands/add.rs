//! motion add - Install a component from the registry
//!
//! Fetches `<registry>/r/<component>.json`, resolves the install root and
//! writes every file of the manifest. Existing files are kept unless
//! `--overwrite` is passed.

use clap::Args;
use serde_json::{Value, json};
use tracing::debug;

use crate::app::AppContext;
use crate::cli::colors::{ColorSupport, MotionStyles, status_symbol, styled};
use crate::cli::output::{RobotResponse, emit_json, robot_ok, robot_partial};
use crate::error::{MotionError, Result};
use crate::install::{FileOutcome, InstallOptions, InstallReport, Installer, RootSource};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Component to install (e.g. animated-button)
    pub component: Option<String>,

    /// Replace files that already exist
    #[arg(long)]
    pub overwrite: bool,

    /// Show what would be installed without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Registry base URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,
}

impl AddArgs {
    /// The trimmed component name, or a usage error when it is missing.
    pub fn component_name(&self) -> Result<&str> {
        let component = self.component.as_deref().unwrap_or_default().trim();
        if component.is_empty() {
            return Err(MotionError::Usage(
                "missing component name\n\nUsage: motion add <component> [--overwrite]\nExample: motion add animated-button"
                    .to_string(),
            ));
        }
        Ok(component)
    }
}

pub fn run(ctx: &AppContext, args: &AddArgs) -> Result<()> {
    let component = args.component_name()?;

    let client = ctx.registry_client(args.registry.as_deref())?;
    let fs = ctx.filesystem();
    let installer = Installer::new(&client, &fs, ctx.config.install.root_candidates());
    debug!(component, registry = client.base_url(), "installing component");

    let report = installer.install(
        component,
        InstallOptions {
            overwrite: args.overwrite,
            dry_run: args.dry_run,
        },
    )?;

    if ctx.robot_mode() {
        emit_robot(&report)?;
    } else {
        print_human(&report);
    }

    report.failure().map_or(Ok(()), Err)
}

fn emit_robot(report: &InstallReport) -> Result<()> {
    emit_json(&robot_response(report))
}

/// Skipped files count as completed; only failures make the status partial.
fn robot_response(report: &InstallReport) -> RobotResponse<Value> {
    let data = json!({
        "component": report.component,
        "root": report.root,
        "dry_run": report.dry_run,
        "package_manager": report.package_manager,
        "advice": report.advice,
        "files": report.files,
        "installed": report.installed_count(),
        "skipped": report.skipped_count(),
        "failed": report.failed_count(),
    });

    let warnings = report
        .files
        .iter()
        .filter_map(|file| match &file.outcome {
            FileOutcome::Failed { reason } => Some(format!("{}: {reason}", file.source)),
            _ => None,
        })
        .collect::<Vec<_>>();

    if warnings.is_empty() {
        robot_ok(data)
    } else {
        let completed = report.installed_count() + report.skipped_count();
        robot_partial(data, completed, warnings)
    }
}

fn print_human(report: &InstallReport) {
    let support = ColorSupport::detect();

    if !report.advice.registry_commands.is_empty() {
        println!(
            "{}",
            styled(
                "This component uses other registry components. Install them separately:",
                MotionStyles::info,
                support
            )
        );
        for command in &report.advice.registry_commands {
            println!("  {}", styled(command, MotionStyles::command, support));
        }
        println!();
    }
    if let Some(command) = &report.advice.package_command {
        println!(
            "{}",
            styled(
                "This component needs packages from npm. Install them with:",
                MotionStyles::info,
                support
            )
        );
        println!("  {}", styled(command, MotionStyles::command, support));
        println!();
    }

    let root = report.root.to_string();
    let root_note = match report.root.source {
        RootSource::Detected => String::new(),
        RootSource::Fallback => styled(" (new directory)", MotionStyles::muted, support),
    };
    println!(
        "Installing {} into {}{root_note}",
        styled(&report.component, MotionStyles::command, support),
        styled(&root, MotionStyles::path, support)
    );

    let install_verb = if report.dry_run { "Would install" } else { "Installed" };
    for file in &report.files {
        let shown = file
            .path
            .as_ref()
            .map_or_else(|| file.source.clone(), |path| path.display().to_string());
        let shown = styled(&shown, MotionStyles::path, support);
        match &file.outcome {
            FileOutcome::Installed => {
                println!("{} {install_verb} {shown}", status_symbol(Some(true), support));
            }
            FileOutcome::SkippedExists => {
                println!(
                    "{} Skipped {shown} (already exists, use --overwrite to replace)",
                    status_symbol(None, support)
                );
            }
            FileOutcome::Failed { reason } => {
                println!(
                    "{} Failed {shown}: {reason}",
                    status_symbol(Some(false), support)
                );
            }
        }
    }

    let installed = report.installed_count();
    let skipped = report.skipped_count();
    if installed > 0 || skipped > 0 {
        println!();
    }
    if installed > 0 {
        let line = if report.dry_run {
            format!("would install {installed} file(s)")
        } else {
            format!("installed {installed} file(s)")
        };
        println!("{}", styled(&line, MotionStyles::success, support));
    }
    if skipped > 0 {
        println!(
            "{}",
            styled(
                &format!("skipped {skipped} file(s)"),
                MotionStyles::warning,
                support
            )
        );
    }
}
