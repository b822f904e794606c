//! Registry generation.
//!
//! Turns a local component tree into the per-component JSON manifests the
//! installer consumes, plus an `index.json` catalog.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{MotionError, Result};
use crate::registry::manifest::{FileDescriptor, Manifest};

const COMPONENT_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "css"];

/// Stem reserved for the catalog file.
const CATALOG_NAME: &str = "index";

/// Packages every consuming project already has.
const IMPLICIT_PACKAGES: &[&str] = &["react", "react-dom"];

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*(?:import|export)\b(?:[^'";]*?\bfrom\s*)?\s*['"]([^'"]+)['"]"#)
        .expect("import regex compiles")
});

/// Catalog entry written to `index.json`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub components: Vec<IndexEntry>,
    pub out_dir: PathBuf,
}

struct SourceFile {
    name: String,
    registry_path: String,
    kind: String,
    content: String,
}

/// Generate manifests for every component under `source_dir` into `out_dir`.
pub fn build_registry(source_dir: &Path, out_dir: &Path) -> Result<BuildReport> {
    let manifests = collect_manifests(source_dir)?;

    std::fs::create_dir_all(out_dir)?;
    let mut index = Vec::with_capacity(manifests.len());
    for (name, manifest) in &manifests {
        let path = out_dir.join(format!("{name}.json"));
        std::fs::write(&path, manifest.to_json_pretty()?)?;
        debug!(path = %path.display(), "wrote manifest");
        index.push(IndexEntry {
            name: name.clone(),
            kind: manifest.kind.clone().unwrap_or_default(),
            files: manifest.files.iter().map(|file| file.path.clone()).collect(),
        });
    }

    let index_json = serde_json::to_string_pretty(&index)?;
    std::fs::write(out_dir.join(format!("{CATALOG_NAME}.json")), index_json)?;

    Ok(BuildReport {
        components: index,
        out_dir: out_dir.to_path_buf(),
    })
}

/// Build manifests in memory, keyed and ordered by component name.
pub fn collect_manifests(source_dir: &Path) -> Result<BTreeMap<String, Manifest>> {
    if !source_dir.is_dir() {
        return Err(MotionError::ValidationFailed(format!(
            "component source directory {} does not exist",
            source_dir.display()
        )));
    }

    let label = source_dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("components")
        .to_string();

    let mut sources: BTreeMap<String, SourceFile> = BTreeMap::new();
    let walker = WalkDir::new(source_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.path()));

    for entry in walker {
        let entry = entry.map_err(|err| {
            MotionError::Io(std::io::Error::other(format!("walk {}: {err}", source_dir.display())))
        })?;
        if !entry.file_type().is_file() || !has_component_extension(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(source_dir).map_err(|err| {
            MotionError::ValidationFailed(format!("{}: {err}", entry.path().display()))
        })?;
        let segments = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        let Some(name) = entry.path().file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        let source = SourceFile {
            name: name.to_string(),
            registry_path: format!("{label}/{}", segments.join("/")),
            kind: kind_for(&segments).to_string(),
            content: std::fs::read_to_string(entry.path())?,
        };

        if name == CATALOG_NAME {
            return Err(MotionError::ValidationFailed(format!(
                "{}: component name '{CATALOG_NAME}' is reserved for the catalog",
                source.registry_path
            )));
        }
        if let Some(existing) = sources.get(name) {
            return Err(MotionError::ValidationFailed(format!(
                "duplicate component name '{name}': {} and {}",
                existing.registry_path, source.registry_path
            )));
        }
        sources.insert(name.to_string(), source);
    }

    let names = sources.keys().cloned().collect::<BTreeSet<_>>();
    let manifests = sources
        .into_values()
        .map(|source| {
            let (dependencies, registry_dependencies) =
                classify_imports(&source.content, &source.name, &names);
            let manifest = Manifest {
                name: Some(source.name.clone()),
                kind: Some(source.kind.clone()),
                description: None,
                files: vec![FileDescriptor {
                    path: source.registry_path.clone(),
                    target: Some(source.registry_path),
                    content: source.content,
                    kind: source.kind,
                }],
                registry_dependencies,
                dependencies,
            };
            manifest.validate()?;
            Ok((source.name, manifest))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(manifests)
}

/// Split a file's import specifiers into npm packages and sibling components.
fn classify_imports(
    content: &str,
    own_name: &str,
    components: &BTreeSet<String>,
) -> (Vec<String>, Vec<String>) {
    let mut packages = BTreeSet::new();
    let mut siblings = BTreeSet::new();

    for captures in IMPORT_RE.captures_iter(content) {
        let specifier = &captures[1];
        if is_local_specifier(specifier) {
            let stem = specifier
                .rsplit('/')
                .next()
                .unwrap_or(specifier)
                .split('.')
                .next()
                .unwrap_or_default();
            if stem != own_name && components.contains(stem) {
                siblings.insert(stem.to_string());
            }
        } else if let Some(package) = package_root(specifier) {
            if !IMPLICIT_PACKAGES.contains(&package.as_str()) {
                packages.insert(package);
            }
        }
    }

    (
        packages.into_iter().collect(),
        siblings.into_iter().collect(),
    )
}

fn is_local_specifier(specifier: &str) -> bool {
    specifier.starts_with('.') || specifier.starts_with("@/") || specifier.starts_with("~/")
}

/// `@scope/pkg/sub` -> `@scope/pkg`, `pkg/sub` -> `pkg`.
fn package_root(specifier: &str) -> Option<String> {
    let mut parts = specifier.split('/');
    let first = parts.next().filter(|part| !part.is_empty())?;
    if first.starts_with('@') {
        let second = parts.next().filter(|part| !part.is_empty())?;
        Some(format!("{first}/{second}"))
    } else {
        Some(first.to_string())
    }
}

fn kind_for(segments: &[String]) -> &'static str {
    match segments.first().map(String::as_str) {
        Some("hooks") if segments.len() > 1 => "registry:hook",
        Some("lib") if segments.len() > 1 => "registry:lib",
        _ => "registry:ui",
    }
}

fn has_component_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| COMPONENT_EXTENSIONS.contains(&ext))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
