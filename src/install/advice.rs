//! Dependency advisories.
//!
//! Manifests name other registry components and npm packages the component
//! needs. Neither is installed automatically; the user gets the commands.

use std::fmt;

use serde::Serialize;

use crate::install::fs::InstallFs;
use crate::registry::manifest::Manifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Detect from lockfiles in the working directory; npm when none match.
    pub fn detect<F: InstallFs + ?Sized>(fs: &F) -> Self {
        const LOCKFILES: &[(&str, PackageManager)] = &[
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("yarn.lock", PackageManager::Yarn),
            ("bun.lockb", PackageManager::Bun),
            ("bun.lock", PackageManager::Bun),
        ];
        LOCKFILES
            .iter()
            .find(|(file, _)| fs.exists(std::path::Path::new(file)))
            .map_or(Self::Npm, |(_, manager)| *manager)
    }

    #[must_use]
    pub const fn add_command(self) -> &'static str {
        match self {
            Self::Npm => "npm install",
            Self::Pnpm => "pnpm add",
            Self::Yarn => "yarn add",
            Self::Bun => "bun add",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyAdvice {
    /// One `motion add <name>` command per registry dependency.
    pub registry_commands: Vec<String>,
    /// A single install command covering every package dependency.
    pub package_command: Option<String>,
}

impl DependencyAdvice {
    #[must_use]
    pub fn for_manifest(manifest: &Manifest, manager: PackageManager) -> Self {
        let registry_commands = manifest
            .registry_dependencies
            .iter()
            .map(|name| format!("motion add {name}"))
            .collect();
        let package_command = (!manifest.dependencies.is_empty()).then(|| {
            format!(
                "{} {}",
                manager.add_command(),
                manifest.dependencies.join(" ")
            )
        });
        Self {
            registry_commands,
            package_command,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry_commands.is_empty() && self.package_command.is_none()
    }
}
