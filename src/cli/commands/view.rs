//! motion view - Show a component manifest

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, robot_ok};
use crate::error::{MotionError, Result};
use crate::registry::{Manifest, ManifestSource};
use crate::utils::format_size;

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Component to inspect
    pub component: Option<String>,

    /// Registry base URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,
}

#[derive(Debug, Serialize)]
struct ViewData<'a> {
    component: &'a str,
    url: String,
    name: Option<&'a str>,
    description: Option<&'a str>,
    files: Vec<ViewFile<'a>>,
    registry_dependencies: &'a [String],
    dependencies: &'a [String],
}

#[derive(Debug, Serialize)]
struct ViewFile<'a> {
    path: &'a str,
    target: Option<&'a str>,
    #[serde(rename = "type")]
    kind: &'a str,
    bytes: usize,
}

impl ViewArgs {
    pub fn component_name(&self) -> Result<&str> {
        let component = self.component.as_deref().unwrap_or_default().trim();
        if component.is_empty() {
            return Err(MotionError::Usage(
                "missing component name\n\nUsage: motion view <component>".to_string(),
            ));
        }
        Ok(component)
    }
}

pub fn run(ctx: &AppContext, args: &ViewArgs) -> Result<()> {
    let component = args.component_name()?;

    let client = ctx.registry_client(args.registry.as_deref())?;
    let manifest = client.fetch(component)?;
    let data = view_data(component, client.manifest_url(component), &manifest);

    if ctx.robot_mode() {
        emit_json(&robot_ok(data))
    } else {
        emit_human(render(&data));
        Ok(())
    }
}

fn view_data<'a>(component: &'a str, url: String, manifest: &'a Manifest) -> ViewData<'a> {
    ViewData {
        component,
        url,
        name: manifest.name.as_deref(),
        description: manifest.description.as_deref(),
        files: manifest
            .files
            .iter()
            .map(|file| ViewFile {
                path: &file.path,
                target: file.target.as_deref(),
                kind: &file.kind,
                bytes: file.content.len(),
            })
            .collect(),
        registry_dependencies: &manifest.registry_dependencies,
        dependencies: &manifest.dependencies,
    }
}

fn render(data: &ViewData<'_>) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title(data.name.unwrap_or(data.component));
    if let Some(description) = data.description {
        layout.push_line(description).blank();
    }
    layout.kv("Manifest", &data.url).blank();

    layout.section("Files");
    for file in &data.files {
        let kind = if file.kind.is_empty() { "file" } else { file.kind };
        layout.bullet(&format!(
            "{} ({kind}, {})",
            file.path,
            format_size(file.bytes as u64)
        ));
    }

    if !data.registry_dependencies.is_empty() {
        layout.blank().section("Registry dependencies");
        for dep in data.registry_dependencies {
            layout.bullet(dep);
        }
    }
    if !data.dependencies.is_empty() {
        layout.blank().section("Dependencies");
        for dep in data.dependencies {
            layout.bullet(dep);
        }
    }
    layout
}
