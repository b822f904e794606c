//! The registry installer.
//!
//! `install` runs the whole pipeline for one component: fetch and validate the
//! manifest, resolve the install root, then write each file in manifest order.
//! Manifest-level failures abort before anything is written. Per-file failures
//! are recorded and the batch continues; nothing is rolled back.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{MotionError, Result};
use crate::install::advice::{DependencyAdvice, PackageManager};
use crate::install::fs::InstallFs;
use crate::install::paths::local_install_path;
use crate::install::root::{InstallRoot, resolve_install_root};
use crate::registry::client::ManifestSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Replace files that already exist.
    pub overwrite: bool,
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Installed,
    SkippedExists,
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Registry path from the manifest.
    pub source: String,
    /// Local path relative to the working directory, when it could be derived.
    pub path: Option<PathBuf>,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub component: String,
    pub root: InstallRoot,
    pub dry_run: bool,
    pub advice: DependencyAdvice,
    pub package_manager: PackageManager,
    pub files: Vec<FileReport>,
}

impl InstallReport {
    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|file| pred(&file.outcome)).count()
    }

    #[must_use]
    pub fn installed_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Installed))
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::SkippedExists))
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, FileOutcome::Failed { .. }))
    }

    /// Error describing per-file failures, if any occurred.
    #[must_use]
    pub fn failure(&self) -> Option<MotionError> {
        let failed = self.failed_count();
        (failed > 0).then(|| MotionError::PartialInstall {
            failed,
            total: self.files.len(),
        })
    }
}

pub struct Installer<'a, S: ?Sized, F: ?Sized> {
    source: &'a S,
    fs: &'a F,
    root_candidates: Vec<PathBuf>,
}

impl<'a, S, F> Installer<'a, S, F>
where
    S: ManifestSource + ?Sized,
    F: InstallFs + ?Sized,
{
    pub fn new(source: &'a S, fs: &'a F, root_candidates: Vec<PathBuf>) -> Self {
        Self {
            source,
            fs,
            root_candidates,
        }
    }

    pub fn install(&self, component: &str, options: InstallOptions) -> Result<InstallReport> {
        let component = component.trim();
        if component.is_empty() {
            return Err(MotionError::Usage(
                "missing component name\n\nUsage: motion add <component> [--overwrite]\nExample: motion add animated-button"
                    .to_string(),
            ));
        }

        let manifest = self.source.fetch(component)?;
        debug!(component, files = manifest.files.len(), "manifest fetched");

        let package_manager = PackageManager::detect(self.fs);
        let advice = DependencyAdvice::for_manifest(&manifest, package_manager);

        let root = resolve_install_root(self.fs, &self.root_candidates)?;
        info!(root = %root, source = ?root.source, "resolved install root");

        let files = manifest
            .files
            .iter()
            .map(|file| {
                let (path, outcome) = match local_install_path(root.path(), file) {
                    Ok(path) => {
                        let outcome = self.install_file(&path, &file.content, options);
                        (Some(path), outcome)
                    }
                    Err(violation) => {
                        debug!(source = %file.path, %violation, "rejected manifest path");
                        (
                            None,
                            FileOutcome::Failed {
                                reason: violation.to_string(),
                            },
                        )
                    }
                };
                FileReport {
                    source: file.path.clone(),
                    path,
                    outcome,
                }
            })
            .collect();

        Ok(InstallReport {
            component: component.to_string(),
            root,
            dry_run: options.dry_run,
            advice,
            package_manager,
            files,
        })
    }

    fn install_file(&self, path: &Path, content: &str, options: InstallOptions) -> FileOutcome {
        if self.fs.exists(path) && !options.overwrite {
            debug!(path = %path.display(), "file exists, skipping");
            return FileOutcome::SkippedExists;
        }
        if options.dry_run {
            return FileOutcome::Installed;
        }

        match self.write_file(path, content) {
            Ok(()) => {
                debug!(path = %path.display(), bytes = content.len(), "file written");
                FileOutcome::Installed
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "failed to write file");
                FileOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write(path, content)
    }
}
