//! motion build - Generate registry manifests
//!
//! Walks a component source tree and writes one `<name>.json` manifest per
//! component plus an `index.json` catalog, ready to be served under `/r/`.

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::colors::{ColorSupport, MotionStyles, styled};
use crate::cli::output::{emit_json, robot_ok};
use crate::error::Result;
use crate::registry::build_registry;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Component source directory (default from config: components)
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Output directory for manifests (default from config: public/r)
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &BuildArgs) -> Result<()> {
    let source = ctx.resolve(args.source.as_ref().unwrap_or(&ctx.config.build.source));
    let out = ctx.resolve(args.out.as_ref().unwrap_or(&ctx.config.build.out));

    let report = build_registry(&source, &out)?;
    tracing::info!(
        components = report.components.len(),
        out = %out.display(),
        "registry built"
    );

    if ctx.robot_mode() {
        return emit_json(&robot_ok(&report));
    }

    let support = ColorSupport::detect();
    for entry in &report.components {
        println!(
            "  {} {}",
            styled(&entry.name, MotionStyles::command, support),
            styled(&entry.kind, MotionStyles::muted, support)
        );
    }
    println!(
        "{}",
        styled(
            &format!(
                "built {} component(s) into {}",
                report.components.len(),
                out.display()
            ),
            MotionStyles::success,
            support
        )
    );
    Ok(())
}
